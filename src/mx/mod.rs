//! DNS MX resolution.
//!
//! [`resolve_with`] performs one synchronous MX query through any
//! [`LookupMx`] implementation and returns an [`MxLookup`]: either the ordered
//! exchange hosts, or a tagged [`NoSignal`] reason.

mod error;
mod resolver;
mod types;

pub use error::MxError as Error;
pub use resolver::{LookupMx, check_mx, resolve_with, system_resolver};
pub use types::{MxLookup, MxOrdering, MxRecord, NoSignal};

#[cfg(test)]
pub(crate) mod tests;
