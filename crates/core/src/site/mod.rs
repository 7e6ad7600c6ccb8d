mod config;
mod links;
mod meta;
mod mode;
mod share;

pub use config::{SiteConfig, SiteConfigError, DEFAULT_TITLE_SEPARATOR};
pub use links::{feed_links, FeedLink};
pub use meta::{
    canonical_url, derive_post_meta, page_title, post_url, twitter_card, MetaAttr, MetaTag,
    MISSING_DESCRIPTION, MISSING_TITLE,
};
pub use mode::RuntimeMode;
pub use share::{discuss_url, share_url};
