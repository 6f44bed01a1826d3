//! Centralized error handling for the media channels service
//!
//! Errors are split by layer so each layer only has to reason about the
//! failures it can actually produce:
//!
//! - **Repository Errors**: store access failures and constraint violations
//! - **Application Errors**: domain outcomes (conflict, not found, forbidden,
//!   invalid input) plus passthrough store failures
//!
//! # Usage
//!
//! ```rust
//! use media_channels::errors::{AppError, AppResult};
//!
//! fn ensure_title(title: &str) -> AppResult<()> {
//!     if title.trim().is_empty() {
//!         return Err(AppError::validation("title must not be empty"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(ensure_title("Facebook").is_ok());
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Repository Results
pub type RepositoryResult<T> = Result<T, RepositoryError>;
