//! Redis-backed stream broker.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tokio::sync::RwLock;
use uuid::Uuid;

use postline_core::ports::{BrokerError, StreamBroker, stream_key};

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// Broker keeping topic/id to stream id mappings in Redis.
///
/// The first lookup for a key claims a fresh UUID with `SET NX`; every later
/// lookup, from any replica, reads the same value back.
pub struct RedisStreamBroker {
    conn: RwLock<Option<ConnectionManager>>,
}

impl RedisStreamBroker {
    pub async fn new(config: RedisConfig) -> Result<Self, BrokerError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| BrokerError::Connection(e.to_string()))?;

        // Use timeout to prevent hanging if Redis is unreachable
        let conn_manager_fut = ConnectionManager::new(client);
        let conn = tokio::time::timeout(config.connect_timeout, conn_manager_fut)
            .await
            .map_err(|_| BrokerError::Connection("Connection timed out".to_string()))?
            .map_err(|e| BrokerError::Connection(e.to_string()))?;

        tracing::info!(url = %config.url, "Connected to Redis stream broker");

        Ok(Self {
            conn: RwLock::new(Some(conn)),
        })
    }
}

#[async_trait]
impl StreamBroker for RedisStreamBroker {
    async fn resolve_stream_id(
        &self,
        topic: &str,
        id: Option<i64>,
    ) -> Result<String, BrokerError> {
        let mut conn = self.conn.read().await.clone().ok_or(BrokerError::Closed)?;
        let key = stream_key(topic, id);

        let candidate = Uuid::new_v4().to_string();
        let claimed: bool = conn
            .set_nx(&key, &candidate)
            .await
            .map_err(|e| BrokerError::Operation(e.to_string()))?;

        let stream_id: String = if claimed {
            candidate
        } else {
            conn.get(&key)
                .await
                .map_err(|e| BrokerError::Operation(e.to_string()))?
        };

        tracing::debug!(key = %key, stream_id = %stream_id, claimed, "Stream resolved");
        Ok(stream_id)
    }

    async fn close(&self) -> Result<(), BrokerError> {
        if self.conn.write().await.take().is_some() {
            tracing::info!("Redis stream broker connection released");
        }
        Ok(())
    }
}
