//! # Postline Core
//!
//! The domain layer of the Postline API.
//! This crate contains the entities and the ports infrastructure must implement,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
