//! Product catalog trait and in-memory implementation.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::ProductId;

use crate::error::ServiceUnavailable;

/// A product descriptor as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    /// The catalog's identifier for the product.
    pub product_id: ProductId,
    /// Display name.
    pub name: String,
    /// Whether the product can currently be ordered.
    pub available: bool,
}

/// Trait for product lookup operations.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetches the descriptor for a single product.
    ///
    /// `Ok(None)` means the catalog answered and the product does not
    /// exist. `Err` means the catalog could not answer at all.
    async fn product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<ProductRecord>, ServiceUnavailable>;
}

#[derive(Debug, Default)]
struct InMemoryCatalogState {
    products: HashMap<ProductId, ProductRecord>,
    unreachable: HashSet<ProductId>,
    lookups: usize,
    unavailable: bool,
}

/// In-memory product catalog for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductCatalog {
    state: Arc<RwLock<InMemoryCatalogState>>,
}

impl InMemoryProductCatalog {
    /// Creates a new in-memory catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an orderable product to the catalog.
    pub fn stock(&self, product_id: impl Into<ProductId>, name: impl Into<String>) {
        self.insert(product_id.into(), name.into(), true);
    }

    /// Adds a product that exists but cannot currently be ordered.
    pub fn stock_unorderable(&self, product_id: impl Into<ProductId>, name: impl Into<String>) {
        self.insert(product_id.into(), name.into(), false);
    }

    fn insert(&self, product_id: ProductId, name: String, available: bool) {
        let record = ProductRecord {
            product_id,
            name,
            available,
        };
        self.state.write().unwrap().products.insert(product_id, record);
    }

    /// Configures the catalog to refuse all lookups, simulating an outage.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.write().unwrap().unavailable = unavailable;
    }

    /// Makes lookups for a single product fail at transport level while the
    /// rest of the catalog keeps answering.
    pub fn set_unreachable(&self, product_id: impl Into<ProductId>) {
        self.state.write().unwrap().unreachable.insert(product_id.into());
    }

    /// Returns the number of lookups received so far, including refused ones.
    pub fn lookup_count(&self) -> usize {
        self.state.read().unwrap().lookups
    }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<ProductRecord>, ServiceUnavailable> {
        let mut state = self.state.write().unwrap();
        state.lookups += 1;

        if state.unavailable {
            return Err(ServiceUnavailable::new("product catalog", "simulated outage"));
        }
        if state.unreachable.contains(&product_id) {
            return Err(ServiceUnavailable::new(
                "product catalog",
                format!("simulated timeout for product {product_id}"),
            ));
        }

        Ok(state.products.get(&product_id).cloned())
    }
}
