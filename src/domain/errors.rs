use std::fmt;

// Failures talking to the catalog/auth service. Callers only ever report
// these uniformly, the variants exist for logs.
#[derive(Debug, Clone)]
pub enum UpstreamError {
    // Connection, TLS or timeout failure before a response arrived.
    Transport(String),
    // Upstream answered with a non-success status.
    Status(u16),
    // Response body could not be read or parsed.
    Decode(String),
    // Catalog reply parsed but had no `products` array.
    MissingProducts,
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Transport(err) => write!(f, "upstream transport error: {err}"),
            UpstreamError::Status(status) => write!(f, "upstream returned status {status}"),
            UpstreamError::Decode(err) => write!(f, "upstream response decode error: {err}"),
            UpstreamError::MissingProducts => {
                write!(f, "upstream response has no products array")
            }
        }
    }
}

impl std::error::Error for UpstreamError {}

// Ways a login attempt can fail, as seen by the HTTP layer.
#[derive(Debug, PartialEq)]
pub enum LoginError {
    // Bad credentials, upstream refusal or upstream unreachable.
    InvalidCredentials,
    // Upstream answered with a status we pass through with its reason text.
    UpstreamStatus { status: u16, status_text: String },
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "invalid credentials"),
            LoginError::UpstreamStatus { status, status_text } => {
                write!(f, "auth upstream answered {status} {status_text}")
            }
        }
    }
}

impl std::error::Error for LoginError {}
