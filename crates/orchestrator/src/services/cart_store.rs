//! Cart store trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use domain::CartMutationRequest;

use crate::error::ServiceUnavailable;

/// The cart store's acknowledgment of a persisted mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreAck {
    /// The store's own description of what it did, relayed to the caller
    /// verbatim.
    pub message: String,
}

/// Trait for forwarding validated mutations to the cart store.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Persists the complete mutation in one call.
    ///
    /// Callers only invoke this with fully validated requests; the store
    /// is never asked to handle a partial line set.
    async fn add_products(
        &self,
        request: &CartMutationRequest,
    ) -> Result<StoreAck, ServiceUnavailable>;
}

#[derive(Debug, Default)]
struct InMemoryCartStoreState {
    received: Vec<CartMutationRequest>,
    fail_on_add: bool,
}

/// In-memory cart store for testing.
///
/// Records every request it observes, including ones it then refuses, so
/// tests can assert exactly what reached the store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCartStore {
    state: Arc<RwLock<InMemoryCartStoreState>>,
}

impl InMemoryCartStore {
    /// Creates a new in-memory cart store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the store to refuse subsequent submissions.
    pub fn set_fail_on_add(&self, fail: bool) {
        self.state.write().unwrap().fail_on_add = fail;
    }

    /// Returns how many submissions the store has observed.
    pub fn submission_count(&self) -> usize {
        self.state.read().unwrap().received.len()
    }

    /// Returns the most recently observed request, if any.
    pub fn last_request(&self) -> Option<CartMutationRequest> {
        self.state.read().unwrap().received.last().cloned()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn add_products(
        &self,
        request: &CartMutationRequest,
    ) -> Result<StoreAck, ServiceUnavailable> {
        let mut state = self.state.write().unwrap();
        state.received.push(request.clone());

        if state.fail_on_add {
            return Err(ServiceUnavailable::new("cart store", "simulated outage"));
        }

        Ok(StoreAck {
            message: format!(
                "{} product(s) added to cart for {}",
                request.line_count(),
                request.customer_email()
            ),
        })
    }
}
