use serde::Serialize;

use crate::content::Frontmatter;

/// Everything the post page needs, produced by the loader for one request.
///
/// Serialized as-is for data requests (`?_data`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderData {
    pub frontmatter: Frontmatter,
    /// MDX body with ESM statements removed.
    pub code: String,
    /// Never empty.
    pub canonical: String,
    pub total_path_visits: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsonld: Option<serde_json::Value>,
}
