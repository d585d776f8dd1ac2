//! Recommended fragrance entry as returned by the backend.
//!
//! The backend proxies a third-party catalogue and keeps its column names, so
//! the wire format uses title-cased keys with spaces (`"Main Accords"`,
//! `"Image URL"`). Serde renames keep the Rust side idiomatic.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One recommended entry.
///
/// Only `Name` is required on the wire. Absent or `null` text fields decode as
/// empty strings, absent or `null` accords as an empty list, and non-string
/// accord entries are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Brand", default, deserialize_with = "null_as_default")]
    pub brand: String,

    /// Descriptive scent tags in backend order.
    #[serde(rename = "Main Accords", default, deserialize_with = "string_entries")]
    pub accords: Vec<String>,

    #[serde(rename = "Image URL", default, deserialize_with = "null_as_default")]
    pub image_url: String,

    #[serde(rename = "Purchase URL", default, skip_serializing_if = "Option::is_none")]
    pub purchase_url: Option<String>,
}

impl ResultItem {
    /// Creates an item with no accords and no purchase link.
    pub fn new(name: impl Into<String>, brand: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            accords: Vec::new(),
            image_url: image_url.into(),
            purchase_url: None,
        }
    }

    #[must_use]
    pub fn with_accords<I, S>(mut self, accords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accords = accords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_purchase_url(mut self, url: impl Into<String>) -> Self {
        self.purchase_url = Some(url.into());
        self
    }

    /// Purchase link, ignoring blank strings some catalogue rows carry.
    #[must_use]
    pub fn purchase_link(&self) -> Option<&str> {
        self.purchase_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_entries<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Vec<Value> = null_as_default(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(tag) => Some(tag),
            _ => None,
        })
        .collect())
}
