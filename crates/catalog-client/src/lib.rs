//! Product catalog client for the recommendation service.
//!
//! This crate owns the shared `hipstershop` protobuf schema and provides:
//! - The [`ProductCatalog`] trait, the collaborator handle the selector is built with
//! - [`CatalogClient`], a gRPC implementation talking to the product catalog service
//! - Error types for catalog failures
//!
//! The client never retries. A failed or cancelled `ListProducts` call is
//! surfaced as [`CatalogError::Unavailable`] and it is up to the caller (or the
//! transport) to decide what happens next.

use async_trait::async_trait;
use thiserror::Error;
use tonic::transport::Channel;
use tracing::{debug, error, info};

// Include the generated protobuf code
pub mod hipstershop {
    tonic::include_proto!("hipstershop");
}

pub use hipstershop::{Money, Product};

use hipstershop::{
    product_catalog_service_client::ProductCatalogServiceClient, Empty,
};

/// Errors that can occur when talking to the product catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to connect to product catalog at {addr}: {reason}")]
    Connection { addr: String, reason: String },

    #[error("Product catalog unavailable ({code:?}): {message}")]
    Unavailable { code: tonic::Code, message: String },
}

impl From<tonic::Status> for CatalogError {
    fn from(status: tonic::Status) -> Self {
        CatalogError::Unavailable {
            code: status.code(),
            message: status.message().to_string(),
        }
    }
}

/// Read-only view of the product catalog.
///
/// Implementations must be safe to share across concurrently running
/// requests; every call is independent and nothing is cached.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetch the full current product list.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// gRPC client for the product catalog service.
///
/// The generated client is cheap to clone (it shares the underlying channel),
/// so each call works on its own clone and `&self` is enough.
#[derive(Clone)]
pub struct CatalogClient {
    client: ProductCatalogServiceClient<Channel>,
    service_addr: String,
}

impl CatalogClient {
    /// Connect to the product catalog service.
    ///
    /// # Arguments
    /// * `addr` - Address of the gRPC service (e.g., "http://localhost:3550")
    pub async fn connect(addr: impl Into<String>) -> Result<Self, CatalogError> {
        let addr = addr.into();
        info!("Connecting to product catalog at {}", addr);

        let endpoint = Channel::from_shared(addr.clone()).map_err(|e| CatalogError::Connection {
            addr: addr.clone(),
            reason: e.to_string(),
        })?;
        let channel = endpoint.connect().await.map_err(|e| {
            error!("Could not reach product catalog at {}: {}", addr, e);
            CatalogError::Connection {
                addr: addr.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self::from_channel(channel, addr))
    }

    /// Create a client whose channel connects on first use.
    ///
    /// Lets a service start before the catalog is reachable; connection
    /// failures then surface per call as [`CatalogError::Unavailable`].
    pub fn connect_lazy(addr: impl Into<String>) -> Result<Self, CatalogError> {
        let addr = addr.into();
        let channel = Channel::from_shared(addr.clone())
            .map_err(|e| CatalogError::Connection {
                addr: addr.clone(),
                reason: e.to_string(),
            })?
            .connect_lazy();
        info!("Product catalog channel configured for {}", addr);

        Ok(Self::from_channel(channel, addr))
    }

    /// Wrap an already established channel.
    pub fn from_channel(channel: Channel, addr: impl Into<String>) -> Self {
        Self {
            client: ProductCatalogServiceClient::new(channel),
            service_addr: addr.into(),
        }
    }

    /// Get the address of the catalog service this client is connected to.
    pub fn service_address(&self) -> &str {
        &self.service_addr
    }
}

#[async_trait]
impl ProductCatalog for CatalogClient {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let mut client = self.client.clone();
        let response = client
            .list_products(tonic::Request::new(Empty {}))
            .await
            .map_err(|status| {
                error!("gRPC error while listing products: {}", status);
                CatalogError::from(status)
            })?;

        let products = response.into_inner().products;
        debug!("Catalog returned {} products", products.len());
        Ok(products)
    }
}

/// In-memory catalog serving a fixed product list.
///
/// Handy for tests and local runs where no catalog service is around.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Build a catalog of bare products carrying only the given ids
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let products = ids
            .into_iter()
            .map(|id| Product {
                id: id.into(),
                ..Default::default()
            })
            .collect();
        Self { products }
    }
}

#[async_trait]
impl ProductCatalog for StaticCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}
