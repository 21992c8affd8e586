//! Customer directory trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::CustomerEmail;

use crate::error::ServiceUnavailable;

/// A customer as the directory knows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    /// The customer's email, their identity across services.
    pub email: CustomerEmail,
    /// Display name.
    pub name: String,
}

/// Trait for customer lookup operations.
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// Looks up a customer by email address.
    ///
    /// `Ok(None)` means the directory answered and no such customer is
    /// registered. `Err` means the directory could not answer at all.
    async fn lookup(
        &self,
        email: &CustomerEmail,
    ) -> Result<Option<CustomerRecord>, ServiceUnavailable>;
}

#[derive(Debug, Default)]
struct InMemoryDirectoryState {
    customers: HashMap<CustomerEmail, CustomerRecord>,
    lookups: usize,
    unavailable: bool,
}

/// In-memory customer directory for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerDirectory {
    state: Arc<RwLock<InMemoryDirectoryState>>,
}

impl InMemoryCustomerDirectory {
    /// Creates a new in-memory directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a customer the directory will resolve.
    pub fn register(&self, email: CustomerEmail, name: impl Into<String>) {
        let record = CustomerRecord {
            email: email.clone(),
            name: name.into(),
        };
        self.state.write().unwrap().customers.insert(email, record);
    }

    /// Configures the directory to refuse all lookups, simulating an outage.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.write().unwrap().unavailable = unavailable;
    }

    /// Returns the number of lookups received so far, including refused ones.
    pub fn lookup_count(&self) -> usize {
        self.state.read().unwrap().lookups
    }
}

#[async_trait]
impl CustomerDirectory for InMemoryCustomerDirectory {
    async fn lookup(
        &self,
        email: &CustomerEmail,
    ) -> Result<Option<CustomerRecord>, ServiceUnavailable> {
        let mut state = self.state.write().unwrap();
        state.lookups += 1;

        if state.unavailable {
            return Err(ServiceUnavailable::new(
                "customer directory",
                "simulated outage",
            ));
        }

        Ok(state.customers.get(email).cloned())
    }
}
