use std::collections::{BTreeMap, HashSet};

use crate::Category;

/// Email -> primary MX host, for emails that got an MX answer.
pub type MxAudit = BTreeMap<String, String>;

/// Category membership. Members keep their insertion order.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    buckets: BTreeMap<Category, Vec<String>>,
}

impl Classification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: Category, email: impl Into<String>) {
        self.buckets.entry(category).or_default().push(email.into());
    }

    /// Replaces the members of `category` wholesale.
    pub fn insert_category(&mut self, category: Category, emails: Vec<String>) {
        self.buckets.insert(category, emails);
    }

    pub fn members(&self, category: &Category) -> &[String] {
        self.buckets
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.buckets.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, &[String])> {
        self.buckets.iter().map(|(c, emails)| (c, emails.as_slice()))
    }

    /// Every email present in any category.
    pub fn emails(&self) -> HashSet<&str> {
        self.buckets
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Per-category member counts.
    pub fn counts(&self) -> BTreeMap<String, usize> {
        self.buckets
            .iter()
            .map(|(c, emails)| (c.label().to_string(), emails.len()))
            .collect()
    }
}

/// Outcome for one email processed during a run.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRecord {
    pub email: String,
    pub category: Category,
    pub mx: Option<String>,
}

/// Result of [`Classifier::classify`](super::Classifier::classify).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyRun {
    pub classification: Classification,
    pub mx_audit: MxAudit,
    /// Emails handled by this run (reused ones excluded), in processing order.
    pub records: Vec<EmailRecord>,
}
