use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::HttpError;

use super::transport::{ResponseBody, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Behavior {
    Succeed,
    FailRequest,
    FailBody,
}

/// Transport double that counts calls and body releases without touching the network.
#[derive(Debug)]
pub(crate) struct RecordingTransport {
    behavior: Behavior,
    chunks: Vec<usize>,
    latency: Duration,
    calls: Arc<AtomicUsize>,
    chunks_read: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl RecordingTransport {
    pub(crate) fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            chunks: vec![16, 32, 8],
            latency: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
            chunks_read: Arc::new(AtomicUsize::new(0)),
            released: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn chunks_read(&self) -> usize {
        self.chunks_read.load(Ordering::SeqCst)
    }

    pub(crate) fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    pub(crate) fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, url: &str) -> Result<Box<dyn ResponseBody>, HttpError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.behavior == Behavior::FailRequest {
            return Err(HttpError::Simulated {
                url: url.to_owned(),
            });
        }
        Ok(Box::new(ScriptedBody {
            url: url.to_owned(),
            remaining: self.chunks.iter().copied().collect(),
            fail_midway: self.behavior == Behavior::FailBody,
            read_here: 0,
            chunks_read: Arc::clone(&self.chunks_read),
            released: Arc::clone(&self.released),
        }))
    }
}

struct ScriptedBody {
    url: String,
    remaining: VecDeque<usize>,
    fail_midway: bool,
    read_here: usize,
    chunks_read: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

#[async_trait]
impl ResponseBody for ScriptedBody {
    async fn next_chunk(&mut self) -> Result<Option<usize>, HttpError> {
        let next = self.remaining.pop_front();
        if next.is_none() {
            return Ok(None);
        }
        if self.fail_midway && self.read_here > 0 {
            return Err(HttpError::Simulated {
                url: self.url.clone(),
            });
        }
        self.read_here = self.read_here.saturating_add(1);
        self.chunks_read.fetch_add(1, Ordering::SeqCst);
        Ok(next)
    }
}

impl Drop for ScriptedBody {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}
