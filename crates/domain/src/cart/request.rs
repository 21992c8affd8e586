//! The cart mutation request and its lines.

use common::{CustomerEmail, ProductId};
use serde::{Deserialize, Serialize};

use super::RequestError;

/// One (product, quantity) entry within a cart-mutation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product to add.
    pub product_id: ProductId,

    /// How many units to add. Always greater than zero once the line is
    /// part of a [`CartMutationRequest`].
    pub quantity: u32,
}

impl CartLine {
    /// Creates a new cart line.
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// A request to add products to a customer's cart.
///
/// Construction is the validation point: a value of this type always has at
/// least one line, and every line carries a positive product id and a
/// positive quantity. The line order is the caller's order and is preserved
/// verbatim through to the Cart Store; duplicates are not collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartMutationRequest {
    customer_email: CustomerEmail,
    lines: Vec<CartLine>,
}

impl CartMutationRequest {
    /// Validates and builds a cart mutation request.
    pub fn new(
        customer_email: CustomerEmail,
        lines: Vec<CartLine>,
    ) -> Result<Self, RequestError> {
        if lines.is_empty() {
            return Err(RequestError::EmptyLines);
        }
        for line in &lines {
            if line.product_id.as_u32() == 0 {
                return Err(RequestError::InvalidProductId);
            }
            if line.quantity == 0 {
                return Err(RequestError::InvalidQuantity {
                    product_id: line.product_id,
                    quantity: line.quantity,
                });
            }
        }

        Ok(Self {
            customer_email,
            lines,
        })
    }

    /// The customer the cart belongs to.
    pub fn customer_email(&self) -> &CustomerEmail {
        &self.customer_email
    }

    /// The requested lines, in the caller's order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines in the request.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
