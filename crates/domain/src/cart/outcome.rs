//! Per-line validation results and the consolidated mutation outcome.

use std::collections::BTreeSet;

use common::{MutationId, ProductId};
use serde::Serialize;

/// Outcome of validating a single product line against the catalog.
///
/// Lives only within one orchestration run; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductValidationResult {
    /// The product that was checked.
    pub product_id: ProductId,

    /// True when the catalog confirmed the product and it can be ordered.
    pub exists: bool,

    /// True when the check failed for a transient reason (catalog
    /// unreachable or answering 5xx) rather than a confirmed miss.
    pub retryable: bool,
}

impl ProductValidationResult {
    /// The catalog confirmed the product and it is orderable.
    pub fn confirmed(product_id: ProductId) -> Self {
        Self {
            product_id,
            exists: true,
            retryable: false,
        }
    }

    /// The catalog answered: the product is absent or not orderable.
    pub fn missing(product_id: ProductId) -> Self {
        Self {
            product_id,
            exists: false,
            retryable: false,
        }
    }

    /// The catalog could not be reached; the product's status is unknown.
    pub fn unreachable(product_id: ProductId) -> Self {
        Self {
            product_id,
            exists: false,
            retryable: true,
        }
    }

    /// True when this line passed validation.
    pub fn passed(&self) -> bool {
        self.exists
    }

    /// True when the catalog positively rejected this line.
    pub fn confirmed_miss(&self) -> bool {
        !self.exists && !self.retryable
    }

    /// True when the line failed only because the lookup itself failed.
    pub fn transient_failure(&self) -> bool {
        !self.exists && self.retryable
    }
}

/// The single consolidated result of one cart-mutation request.
///
/// Returned to the caller and then discarded; persistence of the cart
/// itself is the Cart Store's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartMutationOutcome {
    /// Correlates this attempt with the gateway's logs.
    pub mutation_id: MutationId,

    /// True when the mutation was forwarded and acknowledged.
    pub accepted: bool,

    /// The Cart Store's acknowledgment, relayed verbatim.
    pub message: String,

    /// Product ids of rejected lines; empty on success.
    pub failed_lines: BTreeSet<ProductId>,
}

impl CartMutationOutcome {
    /// Builds the outcome for an accepted, store-acknowledged mutation.
    pub fn accepted(mutation_id: MutationId, message: impl Into<String>) -> Self {
        Self {
            mutation_id,
            accepted: true,
            message: message.into(),
            failed_lines: BTreeSet::new(),
        }
    }
}
