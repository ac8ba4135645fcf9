//! MX suffix dictionary (`suffix:category` per line).
//!
//! Entries keep their insertion order: [`Dictionary::category_for`] returns
//! the first suffix that matches, so the order of the file is the precedence.

mod error;

pub use error::DictionaryError;

use std::path::Path;

use crate::Category;

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<(String, String)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and parses the dictionary file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|err| DictionaryError::read(path, err))?;
        let dictionary = Self::parse(&contents);
        tracing::info!(
            path = %path.display(),
            count = dictionary.len(),
            "Loaded MX dictionary"
        );
        Ok(dictionary)
    }

    /// Like [`Dictionary::load`], but a read failure only logs a warning and
    /// yields an empty dictionary.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(dictionary) => dictionary,
            Err(err) => {
                tracing::warn!(error = %err, "Error loading MX dictionary, using built-in rules only");
                Self::new()
            }
        }
    }

    pub fn parse(contents: &str) -> Self {
        let mut dictionary = Self::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.split(':').collect();
            if parts.len() != 2 {
                tracing::debug!(line, "Skipping malformed dictionary line");
                continue;
            }
            dictionary.insert(parts[0].trim(), parts[1].trim());
        }
        dictionary
    }

    /// Adds `suffix -> category`. A suffix already present keeps its
    /// position and takes the new category.
    pub fn insert(&mut self, suffix: impl Into<String>, category: impl Into<String>) {
        let suffix = suffix.into();
        let category = category.into();
        match self.entries.iter_mut().find(|(s, _)| *s == suffix) {
            Some(entry) => entry.1 = category,
            None => self.entries.push((suffix, category)),
        }
    }

    /// Label of the first entry whose suffix ends `mx_host` (case-sensitive).
    pub fn category_for(&self, mx_host: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(suffix, _)| mx_host.ends_with(suffix.as_str()))
            .map(|(_, category)| category.as_str())
    }

    pub fn match_category(&self, mx_host: &str) -> Option<Category> {
        self.category_for(mx_host).map(Category::from_label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, c)| (s.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S, C> FromIterator<(S, C)> for Dictionary
where
    S: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, C)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for (suffix, category) in iter {
            dictionary.insert(suffix, category);
        }
        dictionary
    }
}
