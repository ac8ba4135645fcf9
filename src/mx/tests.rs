use std::cell::RefCell;
use std::collections::HashMap;

use super::{LookupMx, MxLookup, MxOrdering, MxRecord, NoSignal, resolve_with, resolver};
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};

type LookupResult = Result<Vec<MxRecord>, ResolveError>;
type LookupFn = dyn Fn(&str) -> LookupResult;

pub(crate) struct StubResolver {
    pub on_lookup: Box<LookupFn>,
    pub queries: RefCell<Vec<String>>,
}

impl StubResolver {
    pub(crate) fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> LookupResult + 'static,
    {
        Self {
            on_lookup: Box::new(f),
            queries: RefCell::new(Vec::new()),
        }
    }

    /// Answers from a fixed `(domain, host)` table; a domain may appear
    /// several times. Unknown domains have no records.
    pub(crate) fn with_hosts(table: &[(&str, &str)]) -> Self {
        let mut records: HashMap<String, Vec<MxRecord>> = HashMap::new();
        for (domain, host) in table {
            let entry = records.entry(domain.to_string()).or_default();
            let preference = 10 * (entry.len() as u16 + 1);
            entry.push(MxRecord::new(preference, *host));
        }
        Self::new(move |domain| Ok(records.get(domain).cloned().unwrap_or_default()))
    }

    pub(crate) fn query_count(&self) -> usize {
        self.queries.borrow().len()
    }
}

impl LookupMx for StubResolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError> {
        self.queries.borrow_mut().push(domain.to_string());
        (self.on_lookup)(domain)
    }
}

#[test]
fn normalize_domain_rejects_empty() {
    let err = resolver::normalize_domain("").expect_err("empty domain should fail");
    assert!(matches!(err, super::Error::EmptyDomain));
}

#[test]
fn lexicographic_order_ignores_preference() {
    let stub = StubResolver::new(|domain| {
        assert_eq!(domain, "example.com");
        Ok(vec![
            MxRecord::new(10, "mx2.example.com"),
            MxRecord::new(20, "alt.example.com"),
            MxRecord::new(10, "mx2.example.com"),
        ])
    });

    let lookup = resolve_with(&stub, "example.com", MxOrdering::Lexicographic);
    assert_eq!(
        lookup,
        MxLookup::Exchanges(vec![
            "alt.example.com".to_string(),
            "mx2.example.com".to_string(),
        ])
    );
    assert_eq!(lookup.primary(), Some("alt.example.com"));
}

#[test]
fn preference_order_picks_lowest_value() {
    let stub = StubResolver::new(|_| {
        Ok(vec![
            MxRecord::new(20, "alt.example.com"),
            MxRecord::new(10, "mx2.example.com"),
        ])
    });

    let lookup = resolve_with(&stub, "example.com", MxOrdering::Preference);
    assert_eq!(lookup.primary(), Some("mx2.example.com"));
}

#[test]
fn empty_answer_is_no_records() {
    let stub = StubResolver::new(|_| Ok(Vec::new()));
    let lookup = resolve_with(&stub, "example.com", MxOrdering::default());
    assert_eq!(lookup, MxLookup::NoSignal(NoSignal::NoRecords));
    assert_eq!(lookup.primary(), None);
}

#[test]
fn timeout_is_no_signal() {
    let stub = StubResolver::new(|_| Err(ResolveError::from(ResolveErrorKind::Timeout)));
    let lookup = resolve_with(&stub, "example.com", MxOrdering::default());
    assert_eq!(lookup, MxLookup::NoSignal(NoSignal::Timeout));
}

#[test]
fn other_resolver_errors_do_not_escape() {
    let stub = StubResolver::new(|_| Err(ResolveError::from("connection refused")));
    let lookup = resolve_with(&stub, "example.com", MxOrdering::default());
    assert!(matches!(lookup, MxLookup::NoSignal(NoSignal::Failed(_))));
}

#[test]
fn empty_domain_skips_the_query() {
    let stub = StubResolver::new(|_| panic!("no query expected"));
    let lookup = resolve_with(&stub, "  ", MxOrdering::default());
    assert!(matches!(lookup, MxLookup::NoSignal(NoSignal::InvalidDomain(_))));
    assert_eq!(stub.query_count(), 0);
}

#[test]
fn idna_domain_is_queried_in_ascii() {
    let stub = StubResolver::new(|domain| {
        assert_eq!(domain, "xn--bcher-kva.example");
        Ok(vec![MxRecord::new(10, "mx.example")])
    });
    let lookup = resolve_with(&stub, "bücher.example", MxOrdering::default());
    assert_eq!(lookup.primary(), Some("mx.example"));
}

#[test]
fn normalize_exchange_trims_root_dot() {
    let out = resolver::normalize_exchange("mx.x.corp.com.");
    assert_eq!(out, "mx.x.corp.com");
}
