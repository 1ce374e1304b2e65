//! Key/value manifest parsing
//!
//! The `.flutter-plugins` manifest is a list of `name=path` lines written by
//! the Flutter tool. Blank lines and `#` comments are ignored; the first
//! separator on a line splits key from value, so values may contain it.

use std::collections::HashMap;

use pods_fs::{NormalizedPath, io};
use serde::Serialize;

use crate::{Error, Result};

/// Separator used by `.flutter-plugins`.
pub const DEFAULT_SEPARATOR: &str = "=";

/// A single plugin from the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginEntry {
    pub name: String,
    pub path: String,
}

/// Mapping from plugin name to filesystem path.
///
/// Keys are unique. Entries keep the position of their first occurrence;
/// a later duplicate replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PluginManifest {
    entries: Vec<PluginEntry>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl PluginManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name`. Returns the previous value, if any.
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) -> Option<String> {
        let name = name.into();
        let path = path.into();
        match self.index.get(&name) {
            Some(&idx) => Some(std::mem::replace(&mut self.entries[idx].path, path)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(PluginEntry { name, path });
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&idx| self.entries[idx].path.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in manifest order.
    pub fn iter(&self) -> std::slice::Iter<'_, PluginEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

impl<'a> IntoIterator for &'a PluginManifest {
    type Item = &'a PluginEntry;
    type IntoIter = std::slice::Iter<'a, PluginEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for PluginManifest {
    type Item = PluginEntry;
    type IntoIter = std::vec::IntoIter<PluginEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Parse a key/value file.
///
/// Fails with [`Error::FileNotFound`] if `path` does not exist.
pub fn parse_kv_file(path: &NormalizedPath, separator: &str) -> Result<PluginManifest> {
    let content = io::read_text(path)?;
    tracing::debug!(path = %path, "Parsing key/value file");
    parse_kv_str(&content, separator)
}

/// Parse key/value text.
pub fn parse_kv_str(content: &str, separator: &str) -> Result<PluginManifest> {
    if separator.is_empty() {
        return Err(Error::InvalidSeparator {
            separator: separator.to_string(),
        });
    }

    let mut map = PluginManifest::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(separator) else {
            return Err(Error::MalformedLine {
                line_number: idx + 1,
                line: line.to_string(),
                separator: separator.to_string(),
            });
        };

        if let Some(previous) = map.insert(key, value) {
            tracing::warn!(key, previous = %previous, value, "Duplicate manifest key, keeping last value");
        }
    }

    Ok(map)
}
