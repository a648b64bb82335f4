use async_trait::async_trait;

/// Stream broker - resolves a topic (and optional id) to an opaque stream id.
#[async_trait]
pub trait StreamBroker: Send + Sync {
    /// Look up the stream id for `topic`, optionally narrowed to one entity.
    async fn resolve_stream_id(&self, topic: &str, id: Option<i64>)
    -> Result<String, BrokerError>;

    /// Release the broker's connection. Lookups afterwards fail with
    /// [`BrokerError::Closed`].
    async fn close(&self) -> Result<(), BrokerError>;
}

/// Broker operation errors.
#[derive(Debug, thiserror::Error)]
pub enum BrokerError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Operation failed: {0}")]
    Operation(String),

    #[error("Broker is closed")]
    Closed,
}

/// Storage key for a topic/id pair.
pub fn stream_key(topic: &str, id: Option<i64>) -> String {
    match id {
        Some(id) => format!("streams:{topic}:{id}"),
        None => format!("streams:{topic}"),
    }
}
