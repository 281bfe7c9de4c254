use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid range: lower bound {lower}s exceeds upper bound {upper}s")]
pub struct InvalidRangeError {
    pub lower: u64,
    pub upper: u64,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid window `{name}`: {source}")]
    InvalidWindow {
        name: String,
        #[source]
        source: InvalidRangeError,
    },
}
