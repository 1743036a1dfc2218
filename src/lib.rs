//! `fetch-retry` is an async HTTP GET client with bounded exponential backoff.
//!
//! [`FetchClient::get`] validates the URL, then retries transport errors and
//! non-2xx/non-4xx responses until the first 2xx body arrives, a 4xx ends
//! the fetch, or the retry budget in [`ClientOptions`] runs out.
//!
//! ```no_run
//! use fetch_retry::{ClientOptions, FetchClient};
//!
//! # async fn run() -> fetch_retry::Result<()> {
//! let client = FetchClient::new(ClientOptions::default())?;
//! let body = client.get("https://example.com/config.json").await?;
//! # let _ = body;
//! # Ok(())
//! # }
//! ```

mod backoff;
mod classify;
mod client;
mod error;
mod logger;
mod options;
mod transport;
mod validate;

pub use backoff::{Backoff, BACKOFF_FLOOR};
pub use classify::Classification;
pub use client::FetchClient;
pub use error::{AttemptFailure, FetchError, TransportError, UrlError};
pub use logger::{FetchLogger, NoopLogger, TracingLogger};
pub use options::ClientOptions;
pub use transport::{ReqwestTransport, Transport, TransportResponse};
pub use validate::parse_target;

pub use tokio_util::sync::CancellationToken;
pub use url::Url;

pub type Result<T> = std::result::Result<T, FetchError>;
