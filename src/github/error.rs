//! Error types exposed by the comment intake layer.

use thiserror::Error;

/// Errors surfaced while resolving input or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TallyError {
    /// A page request returned a non-success status.
    ///
    /// Carries the failing URL, status code, and response body so the
    /// failure can be diagnosed without replaying the request.
    #[error("GET {url} returned {status}: {body}")]
    Http {
        /// URL of the page request that failed.
        url: String,
        /// HTTP status code returned by GitHub.
        status: u16,
        /// Response body returned with the non-success status.
        body: String,
    },

    /// A page body could not be decoded as the expected structure.
    #[error("malformed response from {url}: {message}")]
    MalformedResponse {
        /// URL of the page whose body failed to decode.
        url: String,
        /// Decoder error detail.
        message: String,
    },

    /// Networking failed before GitHub produced a status.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The provided URL could not be parsed.
    #[error("pull request URL is invalid: {0}")]
    InvalidUrl(String),

    /// The pull request path is incomplete.
    #[error("pull request URL must match /owner/repo/pull/<number>")]
    MissingPathSegments,

    /// The pull request number is not a valid positive integer.
    #[error("pull request number must be a positive integer")]
    InvalidPullRequestNumber,

    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// Configuration could not be loaded or is incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
