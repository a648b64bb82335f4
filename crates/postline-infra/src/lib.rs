//! # Postline Infrastructure
//!
//! Concrete implementations of the ports defined in `postline-core`:
//! the entity store and the stream broker.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL entity store via SeaORM
//! - `redis` - Redis-backed stream broker

pub mod broker;
pub mod database;

// Re-exports - In-Memory
pub use broker::InMemoryStreamBroker;
pub use database::{InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "postgres")]
pub use database::DatabaseConnections;

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use broker::{RedisConfig, RedisStreamBroker};
