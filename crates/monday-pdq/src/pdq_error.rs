use monday::ClientError;

/// Error returned by the [`SimpleClient`](crate::SimpleClient) helpers.
///
/// Variants carrying a `body` keep the raw response so that the remote error
/// envelope can be inspected.
#[derive(Debug, thiserror::Error)]
pub enum PdqError {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The response body could not be read.
    #[error("Failed to read response: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response `{body}`: {source}")]
    Decode {
        source: serde_json::Error,
        body: String,
    },

    /// The response held no `data` member, typically an error envelope.
    #[error("Remote error: {body}")]
    Remote { body: String },

    #[error("No {what} returned for id `{id}`: {body}")]
    NotFound {
        what: &'static str,
        id: String,
        body: String,
    },

    /// An id returned by the remote API is not a number.
    #[error("Invalid id `{id}`")]
    InvalidId { id: String },
}
