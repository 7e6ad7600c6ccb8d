//! Publication gating.

use crate::{
    content::{Frontmatter, Lang, PostStatus},
    site::RuntimeMode,
};

use super::{LoaderError, NotFoundCause};

/// Unpublished posts are only visible outside production.
pub fn is_visible(mode: RuntimeMode, status: PostStatus) -> bool {
    !mode.is_production() || status.is_published()
}

/// Fails with Not Found when `frontmatter` may not be served in `mode`.
pub fn check_publication(
    mode: RuntimeMode,
    frontmatter: &Frontmatter,
    lang: &Lang,
) -> Result<(), LoaderError> {
    if is_visible(mode, frontmatter.status) {
        Ok(())
    } else {
        Err(LoaderError::not_found(lang, NotFoundCause::Unpublished))
    }
}
