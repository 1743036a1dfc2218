/// Error type returned by [`FetchClient`](crate::FetchClient).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Empty, malformed or non-HTTP URL. Never retried.
    #[error("invalid URL '{input}': {source}")]
    InvalidInput {
        input: String,
        #[source]
        source: UrlError,
    },
    /// The server answered with a 4xx status. Never retried.
    #[error("not found: {url} returned HTTP status code {status}")]
    NotFound { url: String, status: u16 },
    /// Every attempt failed transiently.
    #[error("unable to fetch {url}: maximum retries reached: {retries}")]
    Timeout {
        url: String,
        retries: u32,
        /// Cause of the final failed attempt, `None` when no attempt ran.
        #[source]
        last: Option<AttemptFailure>,
    },
    /// Reading the body of a 2xx response failed.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: TransportError,
    },
    /// The default HTTP transport could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] TransportError),
    /// The caller's cancellation token fired before the fetch finished.
    #[error("fetch of {url} was cancelled")]
    Cancelled { url: String },
}

impl FetchError {
    /// Whether this error came from the 4xx short-circuit.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the retry budget ran out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Whether the URL was rejected before any network activity.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Reason a raw string was rejected as a fetch target.
#[derive(Debug, thiserror::Error)]
pub enum UrlError {
    #[error("URL is empty")]
    Empty,
    #[error(transparent)]
    Parse(#[from] url::ParseError),
    #[error("scheme '{scheme}' is not an HTTP scheme")]
    Scheme { scheme: String },
}

/// Failure that happens before a usable response is received.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),
    /// Failure reported by a custom [`Transport`](crate::Transport).
    #[error("transport error: {0}")]
    Other(String),
}

/// What went wrong on a single retried attempt.
#[derive(Debug, thiserror::Error)]
pub enum AttemptFailure {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("server error: HTTP status code {0}")]
    Status(u16),
}
