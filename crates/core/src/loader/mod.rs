mod data;
mod error;
mod gating;
mod http_mapping;

pub use data::LoaderData;
pub use error::{LoaderError, NotFoundCause};
pub use gating::{check_publication, is_visible};
pub use http_mapping::loader_error_to_status_code;
