use serde::{Deserialize, Serialize};

use crate::constants::PLACEHOLDER_IMAGE;

/// Product category as returned by the API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

/// A product record owned by the remote API; the client holds a local,
/// possibly-stale copy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Category name for display, `N/A` when the product has none
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("N/A")
    }

    /// Image URL for display: first entry of `images` with wrapping
    /// brackets/quotes stripped, placeholder when empty or not absolute
    pub fn display_image(&self) -> String {
        let cleaned = self
            .images
            .first()
            .map(|raw| raw.replace(&['[', ']', '"'][..], ""))
            .unwrap_or_default();
        if cleaned.starts_with("http") {
            cleaned
        } else {
            String::from(PLACEHOLDER_IMAGE)
        }
    }
}

/// Payload for creating a product (POST body)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category_id: i64,
    pub images: Vec<String>,
}

/// Partial payload for updating a product (PUT body); id and category are
/// immutable from the edit view. Absent fields are left untouched by the
/// merge and omitted from the request body.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Classification of a failed API call: transport/parse trouble on the list
/// fetch versus a rejected create/update
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ApiErrorKind {
    Network,
    Request,
}

/// Severity of a status-line notice
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A message shown in the status bar
#[derive(Clone, Debug)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Notice {
            level,
            text: text.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}
