use crate::fastq::Origin;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error reading or writing \"{file}\": {source}")]
    FileIo {
        file: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Error reading from stdin or writing to stdout: {0}")]
    StdIo(Box<dyn std::error::Error + Send + Sync>),

    #[error("Error parsing record on line {line} in {origin}: {source}")]
    ParseRecord {
        origin: Origin,
        line: usize,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Could not replace the adapter of read \"{read}\" (record {idx}): {source}")]
    ReplaceAdapter {
        read: String,
        idx: usize,
        source: RecordError,
    },
}

/// Problems with a single tab-separated info line.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("{kind} record needs at least {expected} fields but only {found} were found")]
    MissingFields {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("could not parse error code \"{0}\" as an integer")]
    InvalidErrorCode(String),

    #[error("interior adapter has an empty quality string, so it cannot be padded")]
    EmptyAdapterQuality,
}

pub fn utf8(b: &[u8]) -> String {
    String::from_utf8_lossy(b).into_owned()
}
