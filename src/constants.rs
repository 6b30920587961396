//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Base URL of the remote product collection
pub const API_URL: &str = "https://api.escuelajs.co/api/v1/products";

/// Shown when a product has no usable image URL
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/50x50";

/// Page sizes offered by the page-size selector, in cycle order
pub const PAGE_SIZE_CHOICES: &[usize] = &[5, 10, 20, 50];

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// At most this many numbered page links are offered
pub const MAX_PAGE_LINKS: usize = 5;

/// Fixed filename for CSV exports
pub const EXPORT_FILENAME: &str = "products.csv";

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Catalog TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
