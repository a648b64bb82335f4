//! Application state - shared across all handlers.

use std::sync::Arc;

use postline_core::ports::{PostRepository, StreamBroker, UserRepository};
use postline_infra::database::DatabaseConfig;
use postline_infra::{InMemoryPostRepository, InMemoryStreamBroker, InMemoryUserRepository};

#[cfg(feature = "postgres")]
use postline_infra::DatabaseConnections;
#[cfg(feature = "postgres")]
use postline_infra::database::{PostgresPostRepository, PostgresUserRepository};
#[cfg(feature = "redis")]
use postline_infra::RedisStreamBroker;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub broker: Arc<dyn StreamBroker>,
    pub stream_read_url: String,
}

type Store = (Arc<dyn UserRepository>, Arc<dyn PostRepository>);

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (users, posts) = init_store(config.database.as_ref()).await;
        let broker = init_broker(config).await;

        tracing::info!("Application state initialized");

        Self {
            users,
            posts,
            broker,
            stream_read_url: config.stream_read_url.clone(),
        }
    }
}

fn in_memory_store() -> Store {
    (
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryPostRepository::new()),
    )
}

#[cfg(feature = "postgres")]
async fn init_store(db_config: Option<&DatabaseConfig>) -> Store {
    let Some(config) = db_config else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return in_memory_store();
    };

    match DatabaseConnections::init(config).await {
        Ok(connections) => (
            Arc::new(PostgresUserRepository::new(connections.main.clone())),
            Arc::new(PostgresPostRepository::new(connections.main)),
        ),
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            in_memory_store()
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn init_store(_db_config: Option<&DatabaseConfig>) -> Store {
    tracing::info!("Running without postgres feature - using in-memory store");
    in_memory_store()
}

#[cfg(feature = "redis")]
async fn init_broker(config: &AppConfig) -> Arc<dyn StreamBroker> {
    let Some(redis) = config.redis.clone() else {
        tracing::warn!("REDIS_URL not set. Using in-memory stream broker.");
        return Arc::new(InMemoryStreamBroker::new());
    };

    match RedisStreamBroker::new(redis).await {
        Ok(broker) => Arc::new(broker),
        Err(e) => {
            tracing::error!(
                "Failed to connect stream broker: {}. Using in-memory fallback.",
                e
            );
            Arc::new(InMemoryStreamBroker::new())
        }
    }
}

#[cfg(not(feature = "redis"))]
async fn init_broker(_config: &AppConfig) -> Arc<dyn StreamBroker> {
    tracing::info!("Running without redis feature - using in-memory stream broker");
    Arc::new(InMemoryStreamBroker::new())
}
