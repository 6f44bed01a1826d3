//! Service layer for business logic
//!
//! Services sit between the web handlers and the repository layer. They own
//! the precondition checks and turn store outcomes into domain errors.
//!
//! Services depend on repository traits, not concrete implementations, so the
//! store is picked once at startup:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use media_channels::database::repositories::ChannelSeaOrmRepository;
//! use media_channels::services::ChannelService;
//!
//! let repository = Arc::new(ChannelSeaOrmRepository::new(database.connection()));
//! let service = ChannelService::new(repository);
//! let channels = service.list_all().await?;
//! ```

pub mod channel;

pub use channel::ChannelService;
