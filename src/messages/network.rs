//! Network messages - communication between App and Network layers

use crate::models::{ApiErrorKind, NewProduct, Product, ProductPatch};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the full product collection
    FetchCatalog { id: u64 },
    /// Create a product on the remote API
    CreateProduct { id: u64, payload: NewProduct },
    /// Update a product on the remote API
    UpdateProduct {
        id: u64,
        product_id: i64,
        payload: ProductPatch,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Full collection fetched successfully
    CatalogLoaded { id: u64, products: Vec<Product> },
    /// Create succeeded; carries the server-assigned record
    ProductCreated { id: u64, product: Product },
    /// Update succeeded; carries the server's view of the record
    ProductUpdated { id: u64, product: Product },
    /// Any operation failed
    Failed {
        id: u64,
        kind: ApiErrorKind,
        message: String,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::CatalogLoaded { id, .. } => *id,
            NetworkResponse::ProductCreated { id, .. } => *id,
            NetworkResponse::ProductUpdated { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}
