//! In-memory stream broker.
//!
//! This is a fallback when Redis is not available.
//! Stream ids are only stable for the lifetime of the process.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use postline_core::ports::{BrokerError, StreamBroker, stream_key};

/// In-memory topic/id to stream id registry.
pub struct InMemoryStreamBroker {
    streams: RwLock<HashMap<String, String>>,
    closed: AtomicBool,
}

impl InMemoryStreamBroker {
    pub fn new() -> Self {
        Self {
            streams: RwLock::new(HashMap::new()),
            closed: AtomicBool::new(false),
        }
    }
}

impl Default for InMemoryStreamBroker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StreamBroker for InMemoryStreamBroker {
    async fn resolve_stream_id(
        &self,
        topic: &str,
        id: Option<i64>,
    ) -> Result<String, BrokerError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(BrokerError::Closed);
        }

        let key = stream_key(topic, id);
        let mut streams = self.streams.write().await;
        let stream_id = streams
            .entry(key)
            .or_insert_with(|| Uuid::new_v4().to_string())
            .clone();

        tracing::debug!(topic = %topic, id = ?id, stream_id = %stream_id, "Stream resolved");
        Ok(stream_id)
    }

    async fn close(&self) -> Result<(), BrokerError> {
        self.closed.store(true, Ordering::Release);
        self.streams.write().await.clear();
        tracing::info!("In-memory stream broker closed");
        Ok(())
    }
}
