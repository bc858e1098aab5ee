use thiserror::Error;

use aipm_client::ClientError;

/// Outcome of a page load other than rendering the page.
#[derive(Debug, Error)]
pub enum PageError {
    /// Render the not-found page.
    #[error("not found")]
    NotFound,

    /// Send the browser elsewhere (sign-in, or home with an unauthorized flag).
    #[error("redirect to {location}")]
    Redirect { location: String },

    /// The API call failed for a reason other than a missing resource; the
    /// message is shown to the user verbatim.
    #[error(transparent)]
    Request(#[from] ClientError),
}

impl PageError {
    pub fn redirect(location: impl Into<String>) -> Self {
        PageError::Redirect {
            location: location.into(),
        }
    }

    /// Treat a 404 from the API as "page not found"; everything else stays a
    /// request failure.
    pub fn from_lookup(err: ClientError) -> Self {
        match err.status() {
            Some(404) => PageError::NotFound,
            _ => PageError::Request(err),
        }
    }
}
