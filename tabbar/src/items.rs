use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::key::KeyIndexMap;

/// A single tab descriptor.
///
/// The label is handed to the external tab renderer as-is; this crate never styles it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabItem {
    /// Stable identity. When absent, the label doubles as the key.
    pub key: Option<String>,
    pub label: String,
}

impl TabItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            key: None,
            label: label.into(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.label)
    }
}

impl From<&str> for TabItem {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for TabItem {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

/// Returned when two tabs resolve to the same key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateKeyError {
    pub key: String,
    pub first: usize,
    pub second: usize,
}

impl fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicate tab key {:?} at indexes {} and {}",
            self.key, self.first, self.second
        )
    }
}

impl core::error::Error for DuplicateKeyError {}

/// An ordered collection of tabs with unique keys.
///
/// Order is significant: a tab's index is its position.
#[derive(Clone, Debug, Default)]
pub struct TabItems {
    items: Vec<TabItem>,
    index_by_key: KeyIndexMap,
}

impl TabItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection, rejecting the first duplicate key.
    pub fn try_new(
        items: impl IntoIterator<Item = impl Into<TabItem>>,
    ) -> Result<Self, DuplicateKeyError> {
        let items: Vec<TabItem> = items.into_iter().map(Into::into).collect();
        let mut index_by_key = KeyIndexMap::new();
        for (i, item) in items.iter().enumerate() {
            if let Some(&first) = index_by_key.get(item.key()) {
                twarn!(key = item.key(), first, second = i, "TabItems: duplicate key");
                return Err(DuplicateKeyError {
                    key: String::from(item.key()),
                    first,
                    second: i,
                });
            }
            index_by_key.insert(String::from(item.key()), i);
        }
        Ok(Self {
            items,
            index_by_key,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TabItem> {
        self.items.get(index)
    }

    pub fn key_for(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(TabItem::key)
    }

    pub fn index_of_key(&self, key: &str) -> Option<usize> {
        self.index_by_key.get(key).copied()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, TabItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[TabItem] {
        &self.items
    }
}

impl PartialEq for TabItems {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'a> IntoIterator for &'a TabItems {
    type Item = &'a TabItem;
    type IntoIter = core::slice::Iter<'a, TabItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
