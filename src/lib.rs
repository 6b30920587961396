//! # Catalog TUI
//!
//! A terminal-based admin table for a remote product catalog.
//!
//! ## Features
//! - Fetches the full product list from a REST API
//! - Live case-insensitive title search
//! - Click-to-toggle sorting on title and price
//! - Client-side pagination with selectable page size
//! - Create and edit products with optimistic local updates
//! - CSV export of the filtered view
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod constants;
pub mod export;
pub mod messages;
pub mod models;
pub mod network;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Category, NewProduct, Notice, Product, ProductPatch};
pub use network::{ApiClient, NetworkActor};
pub use store::{CatalogStore, Pagination, SortColumn, SortDirection};
