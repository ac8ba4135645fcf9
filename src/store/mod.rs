//! Flat-file persistence of category membership.
//!
//! Each category lives in `<output>/<label>.txt` (see
//! [`Category::file_name`]), one email per line. `Other.txt` lines carry the
//! primary MX host as `email:mx` when one was resolved, which is what
//! [`reclassify_other`](crate::reclassify_other) works from.

mod error;

pub use error::StoreError;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{Category, Classification, MxAudit};

/// Default output directory of the CLI.
pub const DEFAULT_OUTPUT_DIR: &str = "classified_emails";

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedCategory {
    pub category: Category,
    pub path: PathBuf,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct CategoryStore {
    dir: PathBuf,
}

impl CategoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, category: &Category) -> PathBuf {
        self.dir.join(category.file_name())
    }

    /// Non-blank, trimmed lines of the category file, or `None` when the
    /// file does not exist.
    pub fn read_lines(&self, category: &Category) -> Result<Option<Vec<String>>, StoreError> {
        let path = self.path_for(category);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::io(path, err)),
        };
        let lines = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Some(lines))
    }

    /// Replaces the category file with `lines`, one per line.
    pub fn write_lines<S>(&self, category: &Category, lines: &[S]) -> Result<PathBuf, StoreError>
    where
        S: AsRef<str>,
    {
        self.ensure_dir()?;
        let path = self.path_for(category);
        let mut contents = String::new();
        for line in lines {
            contents.push_str(line.as_ref());
            contents.push('\n');
        }
        std::fs::write(&path, contents).map_err(|err| StoreError::io(&path, err))?;
        Ok(path)
    }

    /// Loads the built-in provider categories that have a file on disk.
    pub fn load_builtin(&self) -> Result<Classification, StoreError> {
        let mut existing = Classification::new();
        for category in Category::BUILTIN {
            if let Some(emails) = self.read_lines(&category)? {
                tracing::info!(
                    category = %category,
                    count = emails.len(),
                    "Loaded emails from existing category file"
                );
                existing.insert_category(category, emails);
            }
        }
        Ok(existing)
    }

    /// Writes one file per category of `results`. `Other` members with an
    /// audit entry are written as `email:mx`.
    pub fn save(
        &self,
        results: &Classification,
        mx_audit: &MxAudit,
    ) -> Result<Vec<SavedCategory>, StoreError> {
        self.ensure_dir()?;
        let mut saved = Vec::new();
        for (category, emails) in results.iter() {
            let lines: Vec<String> = emails
                .iter()
                .map(|email| match (category, mx_audit.get(email)) {
                    (Category::Other, Some(mx)) => format!("{email}:{mx}"),
                    _ => email.clone(),
                })
                .collect();
            let path = self.write_lines(category, &lines)?;
            tracing::info!(
                category = %category,
                count = emails.len(),
                path = %path.display(),
                "Saved category"
            );
            saved.push(SavedCategory {
                category: category.clone(),
                path,
                count: emails.len(),
            });
        }
        Ok(saved)
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir)
                .map_err(|err| StoreError::create_dir(&self.dir, err))?;
        }
        Ok(())
    }
}
