use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::persist::PersistError;
use crate::report::ReportError;

/// Any failure aborts the whole run; there is no per-file skip.
#[derive(Debug, Error)]
pub enum CountError {
    #[error("input directory {path:?} is missing or not a directory")]
    InputDir { path: PathBuf },
    #[error("failed to walk input directory {path:?}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path:?} is not valid UTF-8 text")]
    Decode { path: PathBuf },
    #[error("failed to write report: {0}")]
    Persist(#[from] PersistError),
    #[error("failed to render report: {0}")]
    Report(#[from] ReportError),
}
