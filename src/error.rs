use std::{io, path::PathBuf};

/// Errors raised while loading dictionaries or analysing documents.
#[derive(Debug, thiserror::Error)]
pub enum MagnifierError {
    #[error("load dictionary {source_name} failed: no such file and no built in dictionary")]
    DictionaryNotFound { source_name: String },

    #[error("read dictionary {source_name} failed: {source}")]
    DictionaryIo {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("read file {} error: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("segmenter is unavailable: {reason}")]
    SegmenterUnavailable { reason: String },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, MagnifierError>;
