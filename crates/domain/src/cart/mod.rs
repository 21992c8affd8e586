//! Cart mutation request model.

mod outcome;
mod request;

pub use outcome::{CartMutationOutcome, ProductValidationResult};
pub use request::{CartLine, CartMutationRequest};

use common::ProductId;
use thiserror::Error;

/// Malformations detected when constructing a cart mutation request.
///
/// These are caller mistakes caught before any remote call, distinct from
/// product validation failures discovered against the catalog.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request carries no lines.
    #[error("cart mutation request has no lines")]
    EmptyLines,

    /// A line's quantity is zero.
    #[error("invalid quantity {quantity} for product {product_id} (must be greater than 0)")]
    InvalidQuantity { product_id: ProductId, quantity: u32 },

    /// A line's product id is zero.
    #[error("invalid product id: 0 (must be a positive integer)")]
    InvalidProductId,
}
