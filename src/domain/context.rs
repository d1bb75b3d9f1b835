//! Context items attached to a project

use serde::Deserialize;

use super::lenient_string;

/// A context item as returned by `GET /api/context`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContextItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub item_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
}
