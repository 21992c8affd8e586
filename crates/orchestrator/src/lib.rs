//! Request orchestration for cart mutations.
//!
//! This crate drives a single add-to-cart mutation across three external
//! collaborators:
//! 1. Resolve the customer in the customer directory
//! 2. Validate every product line against the catalog, concurrently
//! 3. Forward the unmodified request to the cart store
//!
//! The pipeline is all-or-nothing: one invalid line rejects the whole
//! mutation, and the cart store only ever sees fully validated requests.
//! Nothing is persisted here, so failed mutations are simply resubmitted.

pub mod coordinator;
pub mod error;
pub mod services;
pub mod state;
pub mod validator;

pub use coordinator::MutationCoordinator;
pub use error::{OrchestrationError, ServiceUnavailable};
pub use services::{
    CartStore, CustomerDirectory, CustomerRecord, InMemoryCartStore, InMemoryCustomerDirectory,
    InMemoryProductCatalog, ProductCatalog, ProductRecord, RestCartStore, RestConfig,
    RestCustomerDirectory, RestProductCatalog, StoreAck,
};
pub use state::MutationState;
pub use validator::{DEFAULT_VALIDATION_CONCURRENCY, ProductValidator};
