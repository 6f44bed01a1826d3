//! SeaORM repository implementations
//!
//! This module provides repository implementations using SeaORM that work across
//! SQLite, PostgreSQL, and MySQL databases.

pub mod channel;

// Re-export for convenience
pub use channel::ChannelSeaOrmRepository;
