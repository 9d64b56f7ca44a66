use thiserror::Error;

use crate::graphql::wire::GraphQlError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transport failure: no interpretable response was received.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a GraphQL-level error list. The first
    /// error's message is the primary message; the full list is retained
    /// for diagnostics.
    #[error("{message}")]
    Remote {
        message: String,
        errors: Vec<GraphQlError>,
    },

    /// A response resolved without errors but the expected field was absent.
    #[error("response missing field '{0}'")]
    MissingData(&'static str),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Build a `Remote` error from a GraphQL error list, using the first
    /// message as the primary message.
    pub fn remote(errors: Vec<GraphQlError>) -> Self {
        let message = errors
            .first()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| "GraphQL error".to_string());
        Error::Remote { message, errors }
    }

    /// True when the failure came back from the server rather than the wire.
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::Remote { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
