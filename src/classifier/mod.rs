//! The classification loop: one MX lookup per new email, then the provider
//! rule cascade.

mod error;
mod options;
mod types;

pub use error::ClassifyError;
pub use options::ClassifyOptions;
pub use types::{Classification, ClassifyRun, EmailRecord, MxAudit};

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::mx::{self, LookupMx, MxLookup, NoSignal};
use crate::{Category, Dictionary, rules};

/// Reads the email list at `path`: trimmed, blank lines skipped,
/// deduplicated and sorted.
pub fn read_emails(path: impl AsRef<Path>) -> Result<BTreeSet<String>, ClassifyError> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|err| ClassifyError::read_input(path, err))?;
    Ok(parse_emails(&contents))
}

pub fn parse_emails(contents: &str) -> BTreeSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classifies the email list at `input` with the system resolver.
pub fn classify_file(
    input: impl AsRef<Path>,
    dictionary: Option<&Dictionary>,
    existing: Option<Classification>,
    options: &ClassifyOptions,
) -> Result<ClassifyRun, ClassifyError> {
    let emails = read_emails(input)?;
    let resolver = mx::system_resolver()?;
    let classifier = Classifier::new(&resolver, options.clone()).with_dictionary(dictionary);
    Ok(classifier.classify(emails, existing))
}

pub struct Classifier<'a, R: ?Sized> {
    resolver: &'a R,
    dictionary: Option<&'a Dictionary>,
    options: ClassifyOptions,
}

impl<'a, R> Classifier<'a, R>
where
    R: LookupMx + ?Sized,
{
    pub fn new(resolver: &'a R, options: ClassifyOptions) -> Self {
        Self {
            resolver,
            dictionary: None,
            options,
        }
    }

    pub fn with_dictionary(mut self, dictionary: Option<&'a Dictionary>) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Classifies every email of `emails` not already present in `existing`.
    /// Members of `existing` are carried over untouched.
    pub fn classify<I>(&self, emails: I, existing: Option<Classification>) -> ClassifyRun
    where
        I: IntoIterator<Item = String>,
    {
        let mut run = ClassifyRun {
            classification: existing.unwrap_or_default(),
            ..ClassifyRun::default()
        };

        let all: BTreeSet<String> = emails.into_iter().collect();
        let pending: Vec<String> = {
            let known = run.classification.emails();
            all.into_iter()
                .filter(|email| !known.contains(email.as_str()))
                .collect()
        };
        let total = pending.len();
        tracing::info!(count = total, "Found new emails to classify");

        let mut cache: HashMap<String, MxLookup> = HashMap::new();
        for (index, email) in pending.into_iter().enumerate() {
            let (category, mx) = self.classify_one(&email, &mut cache);
            let processed = index + 1;
            tracing::debug!(
                processed,
                total,
                email = %email,
                category = %category,
                mx = mx.as_deref().unwrap_or(""),
                "Classified email"
            );
            if self.options.progress_every > 0
                && (processed % self.options.progress_every == 0 || processed == total)
            {
                tracing::info!(processed, total, "Querying MX records");
            }

            if let Some(host) = &mx {
                run.mx_audit.insert(email.clone(), host.clone());
            }
            run.classification.push(category.clone(), email.clone());
            run.records.push(EmailRecord {
                email,
                category,
                mx,
            });
        }
        run
    }

    fn classify_one(
        &self,
        email: &str,
        cache: &mut HashMap<String, MxLookup>,
    ) -> (Category, Option<String>) {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() != 2 {
            tracing::warn!(email, "Invalid email format");
            return (Category::InvalidFormat, None);
        }
        let domain = parts[1];

        let lookup = self.lookup(domain, cache);
        let Some(primary) = lookup.primary() else {
            if let MxLookup::NoSignal(reason) = &lookup {
                tracing::debug!(email, domain, %reason, "No MX answer");
            }
            return (Category::Other, None);
        };

        let category = rules::categorize(primary, domain, self.dictionary);
        (category, Some(primary.to_string()))
    }

    fn lookup(&self, domain: &str, cache: &mut HashMap<String, MxLookup>) -> MxLookup {
        if !self.options.cache_domains {
            return self.resolve(domain);
        }
        if let Some(hit) = cache.get(domain) {
            return hit.clone();
        }
        let lookup = self.resolve(domain);
        cache.insert(domain.to_string(), lookup.clone());
        lookup
    }

    fn resolve(&self, domain: &str) -> MxLookup {
        let lookup = mx::resolve_with(self.resolver, domain, self.options.ordering);
        if let MxLookup::NoSignal(reason) = &lookup {
            if matches!(reason, NoSignal::Failed(_) | NoSignal::InvalidDomain(_)) {
                tracing::warn!(domain, %reason, "MX resolution failed, treating as no signal");
            }
        }
        lookup
    }
}
