use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::HttpError;

use super::transport::Transport;

/// Performs one GET per call and discards the body.
///
/// Errors never reach the caller; they are reported as diagnostics and the
/// call returns normally so the enclosing batch keeps its timing.
#[derive(Clone)]
pub struct RequestPerformer {
    transport: Arc<dyn Transport>,
}

impl RequestPerformer {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn perform(&self, url: &str) {
        match self.fetch_and_drain(url).await {
            Ok(bytes) => debug!("Drained {} bytes from {}", bytes, url),
            Err(err) => warn!("{}", err),
        }
    }

    async fn fetch_and_drain(&self, url: &str) -> Result<u64, HttpError> {
        let mut body = self.transport.get(url).await?;
        let mut total: u64 = 0;
        while let Some(len) = body.next_chunk().await? {
            total = total.saturating_add(u64::try_from(len).unwrap_or(u64::MAX));
        }
        Ok(total)
    }
}

impl std::fmt::Debug for RequestPerformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestPerformer").finish_non_exhaustive()
    }
}
