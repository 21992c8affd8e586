//! Shared identifier types for the cart mutation gateway.

pub mod types;

pub use types::{CustomerEmail, InvalidEmail, MutationId, ProductId};
