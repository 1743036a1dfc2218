use std::{future::Future, time::Duration};

use reqwest::redirect;
use url::Url;

use crate::{error::TransportError, ClientOptions};

/// Issues a single GET for the fetch engine.
///
/// Implementations must apply `timeout` to both connection establishment
/// and the full exchange, and must not follow redirects.
pub trait Transport: Send + Sync {
    type Response: TransportResponse;

    fn send(
        &self,
        url: &Url,
        timeout: Duration,
    ) -> impl Future<Output = Result<Self::Response, TransportError>> + Send;
}

/// A response whose headers have arrived but whose body has not been read.
pub trait TransportResponse: Send {
    fn status(&self) -> u16;

    /// Consumes the response and reads the whole body.
    fn bytes(self) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;
}

/// Default transport backed by `reqwest`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(options: &ClientOptions) -> Result<Self, TransportError> {
        // No idle pool: every attempt dials its own connection, and it is
        // closed once the body is consumed or the response dropped.
        let http = reqwest::Client::builder()
            .connect_timeout(options.timeout)
            .redirect(redirect::Policy::none())
            .pool_max_idle_per_host(0)
            .danger_accept_invalid_certs(options.skip_tls_verification)
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for ReqwestTransport {
    type Response = reqwest::Response;

    async fn send(&self, url: &Url, timeout: Duration) -> Result<Self::Response, TransportError> {
        let response = self
            .http
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await?;
        Ok(response)
    }
}

impl TransportResponse for reqwest::Response {
    fn status(&self) -> u16 {
        reqwest::Response::status(self).as_u16()
    }

    async fn bytes(self) -> Result<Vec<u8>, TransportError> {
        let body = reqwest::Response::bytes(self).await?;
        Ok(body.to_vec())
    }
}
