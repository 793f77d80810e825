//! OCR corpus keyed by file name.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

/// Mapping from file identifier to raw OCR text.
///
/// Backed by a `BTreeMap`, so iteration is always in lexicographic key order
/// and document matching stays reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OcrCorpus {
    texts: BTreeMap<String, String>,
}

impl OcrCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a text, returning the previous text stored under `file`.
    pub fn insert(&mut self, file: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.texts.insert(file.into(), text.into())
    }

    pub fn get(&self, file: &str) -> Option<&str> {
        self.texts.get(file).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// File identifiers in iteration order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.texts.keys().map(String::as_str)
    }

    /// `(file, text)` pairs in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.texts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for OcrCorpus
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            texts: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for OcrCorpus {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.texts.into_iter()
    }
}
