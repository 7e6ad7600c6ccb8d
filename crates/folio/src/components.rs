//! Heading substitutions for post pages.

use folio_core::{content::Frontmatter, dates::format_display_date};
use folio_mdx::{default_heading, heading_with_classes, Components, HeadingLevel};

/// Classes given to every h2-h6 of a post.
pub const HEADING_CLASSES: &str = "decoration-skin-accent target:underline";

const SUB_HEADINGS: [HeadingLevel; 5] = [
    HeadingLevel::H2,
    HeadingLevel::H3,
    HeadingLevel::H4,
    HeadingLevel::H5,
    HeadingLevel::H6,
];

/// Components used to render a post body.
///
/// The h1 is followed by the post's update and publication dates.
pub fn post_components(frontmatter: &Frontmatter) -> Components {
    let dates = date_labels(frontmatter);

    let components = Components::new().with_heading(HeadingLevel::H1, move |props, children| {
        format!("{}\n{dates}", default_heading(props, children))
    });

    SUB_HEADINGS.iter().fold(components, |components, level| {
        components.with_heading(*level, heading_with_classes(HEADING_CLASSES))
    })
}

fn date_labels(frontmatter: &Frontmatter) -> String {
    let mut labels = String::new();
    for (label, value) in [
        ("Last updated", frontmatter.updated.as_deref()),
        ("Published", frontmatter.published.as_deref()),
    ] {
        let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
            continue;
        };
        match format_display_date(value) {
            Some(date) => labels.push_str(&format!(
                "<div>{label}:&nbsp;<time class=\"ml-1\">{date}</time></div>"
            )),
            None => tracing::warn!(label, value, "Ignoring unparseable post date"),
        }
    }
    format!("<div class=\"flex space-x-4 text-sm text-zinc-400 mb-10\">{labels}</div>")
}
