//! Component substitution for rendered elements.
//!
//! Like the `components` map handed to an MDX component, a [`Components`]
//! set replaces how specific elements render. Headings are the substitutable
//! elements: a component receives the heading's props and its rendered
//! children and returns the HTML to emit in its place.

use std::{fmt, sync::Arc};

pub use pulldown_cmark::HeadingLevel;

use crate::render::escape_html;

/// Props of a heading element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingProps {
    pub level: HeadingLevel,
    pub id: String,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, Option<String>)>,
    /// Plain text content, without markup.
    pub text: String,
}

impl HeadingProps {
    /// `h1` ... `h6`.
    pub fn tag(&self) -> String {
        format!("h{}", self.level as u8)
    }

    /// Rendered attribute list, each attribute preceded by a space.
    pub fn attributes_html(&self) -> String {
        let mut out = String::new();
        if !self.id.is_empty() {
            out.push_str(&format!(" id=\"{}\"", escape_html(&self.id)));
        }
        if !self.classes.is_empty() {
            out.push_str(&format!(
                " class=\"{}\"",
                escape_html(&self.classes.join(" "))
            ));
        }
        for (key, value) in &self.attrs {
            match value {
                Some(value) => {
                    out.push_str(&format!(" {}=\"{}\"", escape_html(key), escape_html(value)))
                }
                None => out.push_str(&format!(" {}", escape_html(key))),
            }
        }
        out
    }

    /// Replaces the authored classes.
    pub fn with_class_name(mut self, class_name: &str) -> Self {
        self.classes = class_name.split_whitespace().map(str::to_string).collect();
        self
    }
}

/// Renders a heading from its props and rendered children.
pub type HeadingComponent = Arc<dyn Fn(&HeadingProps, &str) -> String + Send + Sync>;

/// Element substitutions used while rendering compiled content.
#[derive(Clone, Default)]
pub struct Components {
    headings: [Option<HeadingComponent>; 6],
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitutes headings of `level`.
    pub fn with_heading<F>(mut self, level: HeadingLevel, component: F) -> Self
    where
        F: Fn(&HeadingProps, &str) -> String + Send + Sync + 'static,
    {
        self.headings[level as usize - 1] = Some(Arc::new(component));
        self
    }

    pub fn has_heading(&self, level: HeadingLevel) -> bool {
        self.headings[level as usize - 1].is_some()
    }

    /// Renders a heading through its substitute, or as a plain element.
    pub fn render_heading(&self, props: &HeadingProps, children: &str) -> String {
        match &self.headings[props.level as usize - 1] {
            Some(component) => component(props, children),
            None => default_heading(props, children),
        }
    }
}

impl fmt::Debug for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let substituted: Vec<String> = self
            .headings
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_some())
            .map(|(idx, _)| format!("h{}", idx + 1))
            .collect();
        f.debug_struct("Components")
            .field("headings", &substituted)
            .finish()
    }
}

/// `<hN attrs>children</hN>`
pub fn default_heading(props: &HeadingProps, children: &str) -> String {
    let tag = props.tag();
    format!("<{tag}{}>{children}</{tag}>", props.attributes_html())
}

/// A heading component that renders the plain element with `class_name`
/// in place of any authored classes.
pub fn heading_with_classes(
    class_name: &str,
) -> impl Fn(&HeadingProps, &str) -> String + Send + Sync + Clone + 'static {
    let class_name = class_name.to_string();
    move |props, children| default_heading(&props.clone().with_class_name(&class_name), children)
}
