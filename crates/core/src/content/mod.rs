mod error;
mod frontmatter;
mod path;
mod route;

pub use error::RouteError;
pub use frontmatter::{Frontmatter, PostStatus};
pub use path::{content_dir_for, content_file_path, content_file_name, CONTENT_EXTENSION};
pub use route::{Lang, RouteParams, Slug, INDEX_SLUG};
