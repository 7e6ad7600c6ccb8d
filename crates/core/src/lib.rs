//! Pure types and functions for the folio blog.
//!
//! Nothing in this crate performs I/O. The server crate reads content files,
//! talks to the visit counter and renders HTML; everything it decides on
//! (route validation, publication gating, canonical URLs, SEO meta tags) is
//! computed here.

pub mod content;
pub mod dates;
pub mod loader;
pub mod site;
pub mod visits;
