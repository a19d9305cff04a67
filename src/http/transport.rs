use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;
use futures_util::{StreamExt, TryStreamExt};
use reqwest::Client;

use crate::error::BoxError;

pub type BodyStream = BoxStream<'static, Result<Bytes, BoxError>>;

/// Response head plus the not-yet-read body.
pub struct TransportResponse {
    pub status: u16,
    pub content_length: Option<u64>,
    pub body: BodyStream,
}

impl std::fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// The one operation the probe needs from the network.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET and returns once the response head has arrived.
    async fn get(&self, url: &str) -> Result<TransportResponse, BoxError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, BoxError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let content_length = response.content_length();
        let body = response
            .bytes_stream()
            .map_err(|err| Box::new(err) as BoxError)
            .boxed();
        Ok(TransportResponse {
            status,
            content_length,
            body,
        })
    }
}
