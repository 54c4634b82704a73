use crate::types::GetResult;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decoded `/_mget` response.
///
/// Order is whatever the store returned; correlate with the request through
/// the `_index`/`_id` of each entry (see [`MultiGetResult::find`]).
///
/// Only a JSON object decodes. A missing or `null` `docs` yields an empty result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MultiGetResult {
    pub docs: Vec<GetResult>,
}

impl MultiGetResult {
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GetResult> {
        self.docs.iter()
    }

    /// Documents the store actually found.
    pub fn found(&self) -> impl Iterator<Item = &GetResult> {
        self.docs.iter().filter(|d| d.found)
    }

    /// First result for `id` in `index`. An empty `index` matches any index.
    pub fn find(&self, index: &str, id: &str) -> Option<&GetResult> {
        self.docs
            .iter()
            .find(|d| d.id == id && (index.is_empty() || d.index == index))
    }
}

impl<'de> Deserialize<'de> for MultiGetResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ResponseVisitor;

        impl<'de> Visitor<'de> for ResponseVisitor {
            type Value = MultiGetResult;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a multi-get response object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<MultiGetResult, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut docs: Option<Vec<GetResult>> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "docs" {
                        if docs.is_some() {
                            return Err(de::Error::duplicate_field("docs"));
                        }
                        let value: Option<Vec<GetResult>> = map.next_value()?;
                        docs = Some(value.unwrap_or_default());
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(MultiGetResult {
                    docs: docs.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_map(ResponseVisitor)
    }
}

impl IntoIterator for MultiGetResult {
    type Item = GetResult;
    type IntoIter = std::vec::IntoIter<GetResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiGetResult {
    type Item = &'a GetResult;
    type IntoIter = std::slice::Iter<'a, GetResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}
