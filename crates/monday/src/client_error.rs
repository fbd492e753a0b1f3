/// Error returned by [`Client`](crate::Client).
///
/// The client never looks at a response body, so a request the remote API
/// rejects still comes back as `Ok` with the error envelope in its body.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The cancellation token fired before the response arrived.
    #[error("Request cancelled")]
    Cancelled,

    /// The endpoint could not be parsed as a URL.
    #[error("Invalid endpoint `{endpoint}`: {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },

    /// A required environment variable is unset or not valid unicode.
    #[error("Missing API token: `{var}` is not set")]
    MissingToken { var: &'static str },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
