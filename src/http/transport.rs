use async_trait::async_trait;
use reqwest::Client;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

/// GET-capable client the performer depends on.
///
/// Swapped for a recording double in tests so sweep logic runs without I/O.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues one GET and returns the response body stream.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be completed at the transport level.
    async fn get(&self, url: &str) -> Result<Box<dyn ResponseBody>, HttpError>;
}

/// Streaming response body. Dropping it releases the underlying connection.
#[async_trait]
pub trait ResponseBody: Send {
    /// Reads the next chunk and returns its size, or `None` once the body ends.
    ///
    /// # Errors
    ///
    /// Returns an error when the body stream fails mid-read.
    async fn next_chunk(&mut self) -> Result<Option<usize>, HttpError>;
}

/// Production transport over a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds the shared client.
    ///
    /// No request timeout is set; a hanging request holds its level open until
    /// it finishes or the process is interrupted.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend or client cannot be initialised.
    pub fn new() -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<Box<dyn ResponseBody>, HttpError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| HttpError::RequestFailed {
                url: url.to_owned(),
                source: err,
            })?;
        Ok(Box::new(ReqwestBody {
            url: url.to_owned(),
            response,
        }))
    }
}

struct ReqwestBody {
    url: String,
    response: reqwest::Response,
}

#[async_trait]
impl ResponseBody for ReqwestBody {
    async fn next_chunk(&mut self) -> Result<Option<usize>, HttpError> {
        let chunk = self
            .response
            .chunk()
            .await
            .map_err(|err| HttpError::ReadBodyFailed {
                url: self.url.clone(),
                source: err,
            })?;
        Ok(chunk.map(|bytes| bytes.len()))
    }
}
