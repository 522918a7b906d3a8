use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Construction-time failures. Segmentation and reconstruction never fail.
#[derive(Debug, Error)]
pub enum SegmenterError {
    #[error("failed to read dictionary '{path}': {source}")]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read rules '{path}': {source}")]
    RulesRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed rules '{path}': {source}")]
    RulesParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read config '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, SegmenterError>;
