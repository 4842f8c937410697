use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while extracting and publishing POM variables.
///
/// A path that does not resolve inside the descriptor is *not* an error; the
/// extractor degrades it to an empty value so one missing optional element
/// (e.g. `description`) never aborts the whole variable set.
#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("project descriptor not found at {0}")]
    DescriptorNotFound(PathBuf),

    #[error("unable to read project descriptor: {0}")]
    MalformedDescriptor(String),

    #[error("invalid task configuration: {0}")]
    InvalidConfiguration(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to publish variables: {0}")]
    Publish(#[from] anyhow::Error),
}
