use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Placeholder shown for a missing publication date or page count.
pub const UNKNOWN: &str = "Unknown";

/// One book as returned by the search collaborator, shaped for display only.
///
/// Decoding is loose: every field has a fallback, unknown fields
/// (`score`, `categories`, ...) are ignored, and scalars of the wrong JSON type
/// are kept in their text form instead of failing the whole response.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct BookResult {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub authors: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,

    // the flask server emits `publication_date`, the page reads `publishedDate`
    #[serde(
        rename = "publishedDate",
        alias = "publication_date",
        default,
        deserialize_with = "lenient_opt_text"
    )]
    pub published_date: Option<String>,

    #[serde(rename = "pageCount", default, deserialize_with = "lenient_page_count")]
    pub page_count: Option<i64>,

    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub thumbnail: Option<String>,
}

impl BookResult {
    pub fn new(id: i64, title: impl Into<String>, description: impl Into<String>) -> BookResult {
        BookResult {
            id,
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Authors as rendered in the card header; absent renders nothing.
    pub fn display_authors(&self) -> &str {
        self.authors.as_deref().unwrap_or("")
    }

    /// Upstream data turns missing dates into the literal "NaN".
    pub fn display_published_date(&self) -> &str {
        match self.published_date.as_deref() {
            Some(date) if !date.is_empty() && date != "NaN" => date,
            _ => UNKNOWN,
        }
    }

    pub fn display_page_count(&self) -> String {
        match self.page_count {
            Some(count) if count != 0 => count.to_string(),
            _ => UNKNOWN.to_string(),
        }
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail.as_deref().filter(|url| !url.is_empty())
    }

    pub fn footer_line(&self) -> String {
        format!(
            "Published: {} / Page Count: {}",
            self.display_published_date(),
            self.display_page_count()
        )
    }
}

/// Parses a raw response body into result records, keeping order and duplicates.
pub fn parse_results(body: &str) -> serde_json::Result<Vec<BookResult>> {
    serde_json::from_str(body)
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    };
    Ok(id)
}

fn lenient_page_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| {
            // pandas exports integer columns with gaps as floats, e.g. 412.0
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(count)
}
