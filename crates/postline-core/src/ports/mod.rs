//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod broker;
mod repository;

pub use broker::{BrokerError, StreamBroker, stream_key};
pub use repository::{BaseRepository, PostRepository, UserRepository};
