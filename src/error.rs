use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MiningError>;

#[derive(Error, Debug)]
pub enum MiningError {
    /// The dataset could not be opened or read.
    #[error("data unavailable: cannot read '{}': {source}", .path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input stream failed partway, e.g. on bytes that aren't UTF-8.
    #[error("data unavailable: {origin}:{line}: {source}")]
    Read {
        origin: String,
        line: usize,
        #[source]
        source: io::Error,
    },

    /// A data row could not be turned into one value per attribute.
    #[error("data unavailable: {origin}:{line}: {detail}")]
    MalformedRow {
        origin: String,
        line: usize,
        detail: String,
    },

    /// The dataset declares no attributes, or has no data section.
    #[error("data unavailable: {origin}: {detail}")]
    MissingHeader { origin: String, detail: String },

    #[error("cannot write report: {0}")]
    Report(#[from] io::Error),
}

impl MiningError {
    // True when nothing could be mined because the input was unusable.
    pub fn is_data_unavailable(&self) -> bool {
        match self {
            MiningError::DataUnavailable { .. }
            | MiningError::Read { .. }
            | MiningError::MalformedRow { .. }
            | MiningError::MissingHeader { .. } => true,
            MiningError::Report(_) => false,
        }
    }
}
