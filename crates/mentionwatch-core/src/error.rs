use thiserror::Error;

/// Errors raised while loading or validating the workflow configuration.
///
/// These are the only errors that abort a pipeline run; everything past
/// config validation degrades in place.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML or does not match the schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The config parsed but failed a semantic check.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
