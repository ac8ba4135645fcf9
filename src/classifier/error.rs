use std::path::PathBuf;

use thiserror::Error;

use crate::mx;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("cannot read email list {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Resolver(#[from] mx::Error),
}

impl ClassifyError {
    pub(crate) fn read_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadInput {
            path: path.into(),
            source,
        }
    }
}
