use std::{fmt, sync::Arc};

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{
    backoff::Backoff,
    classify::Classification,
    error::AttemptFailure,
    logger::{FetchLogger, TracingLogger},
    transport::{ReqwestTransport, Transport, TransportResponse},
    validate::parse_target,
    ClientOptions, FetchError, Result,
};

/// HTTP GET client that retries transient failures with exponential backoff.
///
/// Every call to [`FetchClient::get`] owns its own attempt counter and
/// backoff state, so one client can be shared by any number of tasks.
pub struct FetchClient<T = ReqwestTransport> {
    transport: Arc<T>,
    logger: Arc<dyn FetchLogger>,
    options: ClientOptions,
}

impl<T> Clone for FetchClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            logger: Arc::clone(&self.logger),
            options: self.options.clone(),
        }
    }
}

impl<T> fmt::Debug for FetchClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchClient")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Creates a client with the default `reqwest` transport and
    /// [`TracingLogger`].
    pub fn new(options: ClientOptions) -> Result<Self> {
        let transport = ReqwestTransport::new(&options).map_err(FetchError::Client)?;
        Ok(Self::with_transport(options, transport))
    }

    /// Creates a client from options read from the environment.
    ///
    /// See [`ClientOptions::from_env`] for the variables consulted.
    ///
    /// **Not available on `wasm32` targets.**
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> std::result::Result<Self, String> {
        let options = ClientOptions::from_env()?;
        Self::new(options).map_err(|err| err.to_string())
    }
}

impl<T: Transport> FetchClient<T> {
    /// Creates a client on top of a custom transport.
    pub fn with_transport(options: ClientOptions, transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            logger: Arc::new(TracingLogger),
            options,
        }
    }

    /// Replaces the logger that receives per-attempt events.
    pub fn with_logger(mut self, logger: impl FetchLogger + 'static) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Fetches `url`, retrying transport errors and non-2xx/non-4xx
    /// statuses until the retry budget runs out.
    ///
    /// Returns the full response body of the first 2xx response.
    pub async fn get(&self, url: &str) -> Result<Vec<u8>> {
        let target = parse_url(url)?;
        self.fetch(&target).await
    }

    /// Like [`FetchClient::get`], but returns [`FetchError::Cancelled`] as
    /// soon as `cancel` fires, abandoning any in-flight attempt or backoff
    /// sleep.
    pub async fn get_with_cancel(&self, url: &str, cancel: &CancellationToken) -> Result<Vec<u8>> {
        let target = parse_url(url)?;
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled {
                url: target.to_string(),
            });
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FetchError::Cancelled {
                url: target.to_string(),
            }),
            result = self.fetch(&target) => result,
        }
    }

    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        let max_retries = self.options.max_retries;
        let mut backoff = Backoff::new(self.options.max_backoff);
        let mut last = None;

        for attempt in 1..=max_retries {
            self.logger.attempt(url, attempt, max_retries);

            match self.transport.send(url, self.options.timeout).await {
                Ok(response) => {
                    let status = response.status();
                    match Classification::of(status) {
                        Classification::Success => {
                            return response.bytes().await.map_err(|source| FetchError::Body {
                                url: url.to_string(),
                                source,
                            });
                        }
                        Classification::ClientError => {
                            return Err(FetchError::NotFound {
                                url: url.to_string(),
                                status,
                            });
                        }
                        Classification::Transient => {
                            self.logger.transient_status(url, status);
                            last = Some(AttemptFailure::Status(status));
                        }
                    }
                }
                Err(err) => {
                    self.logger.transport_error(url, &err);
                    last = Some(AttemptFailure::Transport(err));
                }
            }

            let delay = backoff.next_delay();
            self.logger.backoff(url, delay);
            sleep(delay).await;
        }

        Err(FetchError::Timeout {
            url: url.to_string(),
            retries: max_retries,
            last,
        })
    }
}

fn parse_url(raw: &str) -> Result<Url> {
    parse_target(raw).map_err(|source| FetchError::InvalidInput {
        input: raw.to_owned(),
        source,
    })
}
