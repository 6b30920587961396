//! Network actor - runs API calls in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::constants::API_URL;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::ApiClient;

/// Network actor that processes API commands
pub struct NetworkActor {
    client: ApiClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: ApiClient::new(API_URL),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchCatalog { id }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "Fetching catalog");
                                let result = match client.list().await {
                                    Ok(products) => {
                                        tracing::info!(id, count = products.len(), "Catalog fetched");
                                        NetworkResponse::CatalogLoaded { id, products }
                                    }
                                    Err(e) => {
                                        tracing::error!(id, message = %e.message, "Catalog fetch failed");
                                        NetworkResponse::Failed { id, kind: e.kind, message: e.message }
                                    }
                                };
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::CreateProduct { id, payload }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, title = %payload.title, "Creating product");
                                let result = match client.create(&payload).await {
                                    Ok(product) => {
                                        tracing::info!(id, product_id = product.id, "Product created");
                                        NetworkResponse::ProductCreated { id, product }
                                    }
                                    Err(e) => {
                                        tracing::error!(id, message = %e.message, "Create failed");
                                        NetworkResponse::Failed { id, kind: e.kind, message: e.message }
                                    }
                                };
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::UpdateProduct { id, product_id, payload }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, product_id, "Updating product");
                                let result = match client.update(product_id, &payload).await {
                                    Ok(product) => {
                                        tracing::info!(id, product_id, "Product updated");
                                        NetworkResponse::ProductUpdated { id, product }
                                    }
                                    Err(e) => {
                                        tracing::error!(id, product_id, message = %e.message, "Update failed");
                                        NetworkResponse::Failed { id, kind: e.kind, message: e.message }
                                    }
                                };
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
