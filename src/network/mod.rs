//! Network layer - async API execution via Tokio

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::{ApiClient, ApiError};
