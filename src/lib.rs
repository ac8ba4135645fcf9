#![forbid(unsafe_code)]
//! mxclassify_lib — classement d'adresses e-mail par fournisseur (MX)
//!
//! Pipeline: [`Dictionary`] + optional prior state from a [`CategoryStore`]
//! feed [`classify_file`]; the result is written back with
//! [`CategoryStore::save`]; [`reclassify_other`] then revisits `Other.txt`
//! with the dictionary.

mod category;
pub mod classifier;
pub mod dictionary;
pub mod mx;
mod reclassify;
pub mod rules;
pub mod store;

pub use category::Category;
pub use classifier::{
    Classification, ClassifyError, ClassifyOptions, ClassifyRun, Classifier, EmailRecord, MxAudit,
    classify_file, read_emails,
};
pub use dictionary::{Dictionary, DictionaryError};
pub use mx::{Error as MxError, LookupMx, MxLookup, MxOrdering, MxRecord, NoSignal};
pub use reclassify::{ReclassifyReport, reclassify_other};
pub use store::{CategoryStore, DEFAULT_OUTPUT_DIR, SavedCategory, StoreError};
