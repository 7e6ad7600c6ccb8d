//! MDX compilation - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - Frontmatter splitting and parsing
//! - Extraction of ESM `import` / `export` statements and named exports
//! - Markdown rendering with per-element component substitution
//!
//! # Example
//!
//! ```
//! use folio_mdx::{Components, MdxCompiler};
//!
//! let source = "---\ntitle: Hello\n---\n\nexport const jsonld = {\"@type\": \"BlogPosting\"}\n\n# Hello\n";
//! let compiled = MdxCompiler::new().compile(source).unwrap();
//!
//! assert_eq!(compiled.frontmatter.title.as_deref(), Some("Hello"));
//! assert_eq!(compiled.export("jsonld").unwrap()["@type"], "BlogPosting");
//!
//! let html = compiled.component().render(&Components::new());
//! assert!(html.contains("<h1 id=\"hello\">Hello</h1>"));
//! ```

mod compiler;
mod components;
mod error;
mod esm;
mod frontmatter;
mod render;

pub use compiler::{CompiledContent, MdxCompiler};
pub use components::{
    default_heading, heading_with_classes, Components, HeadingComponent, HeadingLevel, HeadingProps,
};
pub use error::{CompileError, Result};
pub use esm::{extract_esm, EsmStatement};
pub use frontmatter::{parse_frontmatter, split_frontmatter};
pub use render::{escape_html, slugify, MdxComponent};
