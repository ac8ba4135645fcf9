//! Second pass over `Other.txt`: entries whose stored MX host matches a
//! dictionary suffix move to that category. No DNS query is made.

use std::collections::BTreeMap;

use crate::{Category, CategoryStore, Dictionary, StoreError};

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReclassifyReport {
    /// Emails moved out of `Other`, per destination category.
    pub moved: BTreeMap<Category, usize>,
    /// Lines left in `Other.txt`.
    pub remaining: usize,
}

impl ReclassifyReport {
    pub fn total_moved(&self) -> usize {
        self.moved.values().sum()
    }
}

/// Re-applies `dictionary` to the `email:mx` lines of `Other.txt`.
///
/// Returns `Ok(None)` when the store has no `Other.txt`. Destination files
/// keep their current lines; moved emails are appended without
/// deduplication.
pub fn reclassify_other(
    store: &CategoryStore,
    dictionary: &Dictionary,
) -> Result<Option<ReclassifyReport>, StoreError> {
    let Some(lines) = store.read_lines(&Category::Other)? else {
        tracing::info!(
            dir = %store.dir().display(),
            "Other category file not found, skipping reclassification"
        );
        return Ok(None);
    };

    let mut moved: BTreeMap<Category, Vec<String>> = BTreeMap::new();
    let mut remaining: Vec<String> = Vec::new();
    for line in lines {
        let target = split_entry(&line).and_then(|(email, mx)| {
            destination(dictionary, mx).map(|category| (category, email.to_string()))
        });
        match target {
            Some((category, email)) => moved.entry(category).or_default().push(email),
            None => remaining.push(line),
        }
    }

    store.write_lines(&Category::Other, &remaining)?;

    let mut targets: Vec<Category> = Category::BUILTIN.to_vec();
    for category in moved.keys() {
        if !targets.contains(category) {
            targets.push(category.clone());
        }
    }
    for category in &targets {
        let mut emails = store.read_lines(category)?.unwrap_or_default();
        if let Some(new) = moved.get(category) {
            emails.extend(new.iter().cloned());
        }
        store.write_lines(category, &emails)?;
    }

    let report = ReclassifyReport {
        moved: moved
            .into_iter()
            .map(|(category, emails)| (category, emails.len()))
            .collect(),
        remaining: remaining.len(),
    };
    for (category, count) in &report.moved {
        tracing::info!(category = %category, count, "Moved emails from Other");
    }
    Ok(Some(report))
}

/// `email:mx`, exactly one `:`.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = line.split(':').collect();
    match parts.as_slice() {
        [email, mx] => Some((*email, *mx)),
        _ => None,
    }
}

// A dictionary entry pointing back at `Other` leaves the line where it is.
fn destination(dictionary: &Dictionary, mx: &str) -> Option<Category> {
    dictionary
        .match_category(mx)
        .filter(|category| *category != Category::Other)
}
