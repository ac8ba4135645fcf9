use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("cannot read MX dictionary {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DictionaryError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
