//! Stream broker implementations - Redis and in-memory fallback.

mod memory;

pub use memory::InMemoryStreamBroker;

#[cfg(feature = "redis")]
mod redis;
#[cfg(feature = "redis")]
pub use self::redis::{RedisConfig, RedisStreamBroker};
