//! Rendering compiled content to HTML.

use std::collections::HashSet;

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::components::{Components, HeadingProps};

/// Renderable form of a compiled MDX body.
#[derive(Debug, Clone, Copy)]
pub struct MdxComponent<'a> {
    code: &'a str,
    options: Options,
}

impl<'a> MdxComponent<'a> {
    pub(crate) fn new(code: &'a str, options: Options) -> Self {
        Self { code, options }
    }

    /// Renders the body, substituting elements from `components`.
    ///
    /// Headings without an explicit `{#id}` get a slug of their text as id;
    /// slugs already taken by an earlier heading are suffixed `-1`, `-2`, ...
    pub fn render(&self, components: &Components) -> String {
        let mut events: Vec<Event<'a>> = Vec::new();
        let mut heading: Option<(HeadingProps, Vec<Event<'a>>)> = None;
        let mut seen_ids: HashSet<String> = HashSet::new();

        for event in Parser::new_ext(self.code, self.options) {
            match event {
                Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                }) if heading.is_none() => {
                    let props = HeadingProps {
                        level,
                        id: id.map(|id| id.to_string()).unwrap_or_default(),
                        classes: classes.iter().map(|c| c.to_string()).collect(),
                        attrs: attrs
                            .iter()
                            .map(|(k, v)| (k.to_string(), v.as_ref().map(|v| v.to_string())))
                            .collect(),
                        text: String::new(),
                    };
                    heading = Some((props, Vec::new()));
                }
                Event::End(TagEnd::Heading(_)) => {
                    let Some((mut props, inner)) = heading.take() else {
                        continue;
                    };
                    if props.id.is_empty() {
                        props.id = unique_id(slugify(&props.text), &mut seen_ids);
                    } else {
                        seen_ids.insert(props.id.clone());
                    }
                    let mut children = String::new();
                    html::push_html(&mut children, inner.into_iter());
                    let rendered = components.render_heading(&props, &children);
                    events.push(Event::Html(CowStr::from(format!("{rendered}\n"))));
                }
                event => match heading.as_mut() {
                    Some((props, inner)) => {
                        if let Event::Text(text) | Event::Code(text) = &event {
                            props.text.push_str(text);
                        }
                        inner.push(event);
                    }
                    None => events.push(event),
                },
            }
        }

        let mut out = String::with_capacity(self.code.len() * 3 / 2);
        html::push_html(&mut out, events.into_iter());
        out
    }
}

fn unique_id(base: String, seen: &mut HashSet<String>) -> String {
    let mut id = base.clone();
    let mut suffix = 1;
    while seen.contains(&id) {
        id = format!("{base}-{suffix}");
        suffix += 1;
    }
    seen.insert(id.clone());
    id
}

/// Lowercase slug of `text`: alphanumerics kept, whitespace, `-` and `_`
/// collapsed to single dashes, everything else dropped.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() {
                Some(c)
            } else if c.is_whitespace() || c == '-' || c == '_' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Escapes text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
