use trust_dns_resolver::{
    Resolver,
    error::{ResolveError, ResolveErrorKind},
};

use super::{Error, MxLookup, MxOrdering, MxRecord, NoSignal};

/// Builds a resolver from the system configuration (`/etc/resolv.conf`).
pub fn system_resolver() -> Result<Resolver, Error> {
    Resolver::from_system_conf().map_err(Error::resolver_init)
}

/// Lookup MX records for `domain` using the system resolver.
pub fn check_mx(domain: &str, ordering: MxOrdering) -> Result<MxLookup, Error> {
    let resolver = system_resolver()?;
    Ok(resolve_with(&resolver, domain, ordering))
}

/// Resolves `domain` through `resolver`. Every failure is folded into
/// [`MxLookup::NoSignal`]; the batch never stops on a lookup.
pub fn resolve_with<R>(resolver: &R, domain: &str, ordering: MxOrdering) -> MxLookup
where
    R: LookupMx + ?Sized,
{
    let ascii = match normalize_domain(domain) {
        Ok(ascii) => ascii,
        Err(err) => return MxLookup::NoSignal(NoSignal::InvalidDomain(err.to_string())),
    };

    let mut records = match resolver.lookup_mx(&ascii) {
        Ok(records) => records,
        Err(err) => return MxLookup::NoSignal(no_signal_from(&err)),
    };

    match ordering {
        MxOrdering::Lexicographic => {
            records.sort_by(|a, b| a.exchange.cmp(&b.exchange));
        }
        MxOrdering::Preference => records.sort(),
    }

    let mut hosts: Vec<String> = Vec::with_capacity(records.len());
    for record in records {
        if !hosts.contains(&record.exchange) {
            hosts.push(record.exchange);
        }
    }

    if hosts.is_empty() {
        MxLookup::NoSignal(NoSignal::NoRecords)
    } else {
        MxLookup::Exchanges(hosts)
    }
}

pub(crate) fn normalize_domain(domain: &str) -> Result<String, Error> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(Error::idna)
}

/// Strips the root label dot. Case is kept as served by DNS.
pub(crate) fn normalize_exchange(exchange: &str) -> String {
    exchange.trim_end_matches('.').to_string()
}

fn no_signal_from(err: &ResolveError) -> NoSignal {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => NoSignal::NoRecords,
        ResolveErrorKind::Timeout => NoSignal::Timeout,
        _ => NoSignal::Failed(err.to_string()),
    }
}

/// Source of MX answers. Implemented by the system [`Resolver`]; tests plug
/// in a stub.
pub trait LookupMx {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError>;
}

impl LookupMx for Resolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError> {
        let lookup = Resolver::mx_lookup(self, domain)?;
        let mut records = Vec::new();
        for mx in lookup.iter() {
            let exchange = normalize_exchange(&mx.exchange().to_utf8());
            records.push(MxRecord::new(mx.preference(), exchange));
        }
        Ok(records)
    }
}
