use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure to obtain color-scheme records from the input path.
#[derive(Debug, thiserror::Error)]
pub enum SourceReadError {
    #[error("source path not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
}

/// Failure to write a converted scheme to its destination.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("destination directory not found: {0}")]
    MissingDirectory(PathBuf),

    #[error("destination is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    SourceRead(#[from] SourceReadError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
