//! Collaborator service traits, in-memory implementations, and REST clients.

pub mod cart_store;
pub mod catalog;
pub mod directory;
pub mod rest;

pub use cart_store::{CartStore, InMemoryCartStore, StoreAck};
pub use catalog::{InMemoryProductCatalog, ProductCatalog, ProductRecord};
pub use directory::{CustomerDirectory, CustomerRecord, InMemoryCustomerDirectory};
pub use rest::{RestCartStore, RestConfig, RestCustomerDirectory, RestProductCatalog};
