use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by [`Photon`](crate::client::Photon) operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The cloud rejected the access token.
    #[error("authentication failed: access token rejected")]
    AuthFailure,

    /// Unknown device, variable, or function.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Any other non-success HTTP status.
    #[error("server replied with status {0}")]
    Status(u16),

    /// Transport-level failure, carried unchanged.
    #[error("request failed: {0}")]
    Http(reqwest::Error),

    /// Local file read failure during flash.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Flash was given a path that is not a file.
    #[error("no such file: {0}")]
    NoSuchFile(String),

    /// Flash was given a file without a firmware source extension.
    #[error("not a firmware source file: {0}")]
    InvalidExtension(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Http(e)
        }
    }
}
