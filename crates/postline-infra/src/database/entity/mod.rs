//! SeaORM entities backing the postgres store.

pub mod post;
pub mod user;
