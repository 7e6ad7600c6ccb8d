//! Content file layout: `{content_dir}/{slug}/{lang}.mdx`.

use std::path::{Path, PathBuf};

use super::{Lang, Slug};

/// Extension of content files.
pub const CONTENT_EXTENSION: &str = "mdx";

/// Directory holding every translation of a post.
pub fn content_dir_for(content_root: &Path, slug: &Slug) -> PathBuf {
    content_root.join(slug.as_str())
}

/// File name of one translation (`en.mdx`).
pub fn content_file_name(lang: &Lang) -> String {
    format!("{}.{CONTENT_EXTENSION}", lang.as_str())
}

/// Full path of the content file for a `(lang, slug)` pair.
pub fn content_file_path(content_root: &Path, lang: &Lang, slug: &Slug) -> PathBuf {
    content_dir_for(content_root, slug).join(content_file_name(lang))
}
