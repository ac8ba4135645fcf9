use std::fmt;

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// How exchange hosts are ordered before the first one is picked.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MxOrdering {
    /// Alphabetical on the host name, DNS preference ignored.
    #[default]
    Lexicographic,
    /// Lowest preference value first, host name as tie-break.
    Preference,
}

/// Why a lookup produced nothing usable. All of these count as "no
/// classification signal" for the caller.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoSignal {
    NoRecords,
    Timeout,
    InvalidDomain(String),
    Failed(String),
}

impl fmt::Display for NoSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRecords => f.write_str("no MX records"),
            Self::Timeout => f.write_str("lookup timed out"),
            Self::InvalidDomain(reason) => write!(f, "invalid domain: {reason}"),
            Self::Failed(reason) => write!(f, "lookup failed: {reason}"),
        }
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MxLookup {
    /// Ordered, non-empty list of exchange host names.
    Exchanges(Vec<String>),
    NoSignal(NoSignal),
}

impl MxLookup {
    pub fn exchanges(&self) -> &[String] {
        match self {
            Self::Exchanges(hosts) => hosts.as_slice(),
            Self::NoSignal(_) => &[],
        }
    }

    /// First host after ordering, used for classification.
    pub fn primary(&self) -> Option<&str> {
        self.exchanges().first().map(String::as_str)
    }
}
