//! HTTP handlers
//!
//! Handlers stay free of business logic: they log the request, translate the
//! wire format and hand off to the service layer.

pub mod channels;
pub mod health;
