/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Free-form key/value annotations attached to a resource
pub type Metadata = HashMap<String, Value>;

/// Fields the server sent that the typed model does not name
pub type Extra = Map<String, Value>;

/// Deserializes `null` as the type's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Resource response in the `{"content": ..., "metadata": ...}` convention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<C> {
    /// Resource specific payload
    pub content: C,
    /// Annotations echoed back by the server
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    /// Unknown top-level fields
    #[serde(flatten)]
    pub extra: Extra,
}

impl<C> Envelope<C> {
    /// Wraps bare content, as returned by list endpoints, with empty metadata
    pub fn from_content(content: C) -> Self {
        Self {
            content,
            metadata: Metadata::new(),
            extra: Extra::new(),
        }
    }
}

/// Pagination block of a paginated list response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Reference to the next page, absent on the last page
    #[serde(default)]
    pub next: Option<String>,
    /// Continuation token
    #[serde(default)]
    pub token: Option<String>,
    /// Unknown pagination fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// Paginated list: `{"pagination": {...}, "results": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Pagination metadata, kept apart from the results
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
    /// Items of this page
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Whether the server reported another page
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.pagination.next.is_some()
    }

    /// Number of items in this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether this page is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Simple list: `{"content": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentList<T> {
    /// Listed items
    pub content: Vec<T>,
}

/// List returned by the management API: `{"data": [...], "count": n, "_type": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataList<T> {
    /// Listed items
    pub data: Vec<T>,
    /// Total number of items
    #[serde(default)]
    pub count: u64,
    /// Server side type tag
    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
