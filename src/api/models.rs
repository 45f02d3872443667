use serde::Deserialize;

/// Form fields submitted by the search page. A missing field reads as empty.
#[derive(Debug, Deserialize, Default)]
pub struct QueryForm {
    #[serde(default)]
    pub query: String,
}
