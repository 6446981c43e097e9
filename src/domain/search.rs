//! Term queries sent to the search index and the subset of its response the
//! resolver reads.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value, json};

use crate::domain::identifiers::Identifier;

/// Only the `image` field of each matching document is requested.
pub fn term_query(identifier: &Identifier) -> Value {
    let mut term = Map::new();
    term.insert(
        identifier.kind.field_name().to_string(),
        Value::String(identifier.value.clone()),
    );

    json!({
        "_source": ["image"],
        "query": { "term": term }
    })
}

/// Treats an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub took: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timed_out: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hits: Hits,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hits {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: HitsTotal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hits: Vec<Hit>,
}

/// Older indexes report a bare count, newer ones `{"value": n, "relation": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HitsTotal {
    Count(u64),
    Object { value: u64 },
}

impl Default for HitsTotal {
    fn default() -> Self {
        HitsTotal::Count(0)
    }
}

impl HitsTotal {
    pub fn value(self) -> u64 {
        match self {
            HitsTotal::Count(value) | HitsTotal::Object { value } => value,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hit {
    #[serde(rename = "_index", default, deserialize_with = "null_as_default")]
    pub index: String,
    #[serde(rename = "_type", default, deserialize_with = "null_as_default")]
    pub doc_type: String,
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "_parent", default)]
    pub parent: Option<String>,
    #[serde(rename = "_source", default, deserialize_with = "null_as_default")]
    pub source: HitSource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitSource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

impl SearchResponse {
    /// URL from the first hit, in backend order, with a non-empty `image`.
    ///
    /// A zero total short-circuits to `None` without looking at the hit list.
    pub fn first_image_url(&self) -> Option<&str> {
        if self.hits.total.value() == 0 {
            return None;
        }

        self.hits
            .hits
            .iter()
            .map(|hit| hit.source.image.as_str())
            .find(|image| !image.is_empty())
    }
}
