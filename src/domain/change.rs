//! Serde view of `sui client publish|call --json` transaction responses.
//!
//! Only the fields the identifier extractor needs are modeled; everything
//! else in the response is ignored. All fields are defaulted so that a
//! structurally poor document still deserializes to an empty response
//! instead of failing.

use serde::Deserialize;

/// One entry of the `objectChanges` array.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectChange {
    /// Change kind: "published", "created", "mutated", "deleted", ...
    #[serde(rename = "type")]
    pub kind: String,
    /// Address of published code. Present on "published" changes.
    pub package_id: Option<String>,
    /// Address of the affected object. Present on "created"/"mutated" changes.
    pub object_id: Option<String>,
    /// Fully-qualified type of the affected object.
    pub object_type: Option<String>,
}

/// A transaction response as emitted by `sui client ... --json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TxResponse {
    pub digest: Option<String>,
    pub object_changes: Vec<ObjectChange>,
}

impl TxResponse {
    /// Parse a raw JSON payload. Any document that is not a JSON object with
    /// the expected shape yields an empty response, so downstream lookups
    /// degrade to "not found" rather than erroring.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}
