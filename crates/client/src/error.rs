use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Failure of a call to the remote API.
///
/// The client never swallows or retries; every variant reaches the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API answered with a non-success status. `body` is the raw response
    /// text, never parsed: error bodies are not guaranteed to be JSON.
    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// The request could not be built or sent, or the body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response was not the JSON shape the endpoint returns.
    #[error("invalid JSON from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// An endpoint that always returns a body answered with no content.
    #[error("expected a JSON body from {path}, got no content")]
    MissingBody { path: String },

    /// A wire record lacked a field with no sensible default, or carried a
    /// value that does not fit the view model.
    #[error("malformed {entity} record: bad or missing '{field}'")]
    MalformedRecord {
        entity: &'static str,
        field: &'static str,
    },
}

impl ClientError {
    /// HTTP status of a [`ClientError::RequestFailed`]; `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn malformed(entity: &'static str, field: &'static str) -> Self {
        ClientError::MalformedRecord { entity, field }
    }
}
