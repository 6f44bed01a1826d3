//! Repository layer
//!
//! Defines the store abstraction the service layer depends on. Concrete
//! implementations live under [`crate::database::repositories`].

pub mod traits;

pub use traits::ChannelRepository;

#[cfg(test)]
pub use traits::MockChannelRepository;
