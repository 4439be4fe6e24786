use std::fmt;

/// Error type for Admin API operations
#[derive(Debug)]
pub enum AdminError {
    /// HTTP request could not complete (network, timeout)
    Http(reqwest::Error),
    /// API returned an unexpected status code
    Api { status: u16, message: String },
    /// Success status but the expected payload was missing
    EmptyBody(String),
    /// Operation is not supported for this kind of entity
    Unsupported(String),
    /// Identifier could not be parsed
    InvalidId(String),
    /// Configuration rejected by the resource schema
    Validation(String),
    /// List operation exceeded the page ceiling
    PaginationLimit { pages: usize, context: String },
    /// API key not found in any source
    ApiKeyNotFound(String),
    /// Failed to read or write the local state file
    State(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminError::Http(e) => write!(f, "HTTP request failed: {}", e),
            AdminError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            AdminError::EmptyBody(context) => {
                write!(f, "Unable to {}, got empty response body", context)
            }
            AdminError::Unsupported(msg) => write!(f, "Operation not supported: {}", msg),
            AdminError::InvalidId(msg) => write!(f, "Invalid ID: {}", msg),
            AdminError::Validation(msg) => write!(f, "Invalid configuration: {}", msg),
            AdminError::PaginationLimit { pages, context } => write!(
                f,
                "Stopped listing {} after {} pages: upstream still reports more results",
                context, pages
            ),
            AdminError::ApiKeyNotFound(msg) => write!(f, "{}", msg),
            AdminError::State(msg) => write!(f, "State error: {}", msg),
            AdminError::Json(msg) => write!(f, "JSON error: {}", msg),
            AdminError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AdminError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdminError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl AdminError {
    /// True when the remote side reported the entity as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, AdminError::Api { status: 404, .. })
    }
}

impl From<reqwest::Error> for AdminError {
    fn from(err: reqwest::Error) -> Self {
        AdminError::Http(err)
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Json(err.to_string())
    }
}

impl From<std::io::Error> for AdminError {
    fn from(err: std::io::Error) -> Self {
        AdminError::State(err.to_string())
    }
}

/// Result type alias for Admin API operations
pub type Result<T> = std::result::Result<T, AdminError>;
