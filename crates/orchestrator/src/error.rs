//! Error types for cart mutation orchestration.

use std::collections::BTreeSet;

use common::{CustomerEmail, ProductId};
use thiserror::Error;

/// A collaborator could not give an answer: connection failure, timeout,
/// or a server-side error response.
///
/// A confirmed negative answer (the collaborator responded "no such
/// record") is not a `ServiceUnavailable`; lookups report those as
/// `Ok(None)`.
#[derive(Debug, Clone, Error)]
#[error("{service} unavailable: {reason}")]
pub struct ServiceUnavailable {
    /// Which collaborator failed.
    pub service: &'static str,
    /// Transport-level cause, suitable for logs.
    pub reason: String,
}

impl ServiceUnavailable {
    /// Creates an unavailability report for the named collaborator.
    pub fn new(service: &'static str, reason: impl Into<String>) -> Self {
        Self {
            service,
            reason: reason.into(),
        }
    }
}

/// Errors that can terminate a cart mutation.
///
/// Every remote failure is translated into one of these variants at the
/// point of call; callers never see a raw transport error.
#[derive(Debug, Error)]
pub enum OrchestrationError {
    /// The requesting customer is not registered in the directory.
    #[error("customer not found: {customer}")]
    CustomerNotFound {
        /// Email the directory could not resolve.
        customer: CustomerEmail,
    },

    /// The catalog positively rejected one or more lines.
    #[error(
        "product validation failed for {} line(s): [{}]",
        .failed_lines.len(),
        format_ids(.failed_lines)
    )]
    ProductValidationFailed {
        /// Every product ID that was confirmed invalid. Complete, not just
        /// the first failure.
        failed_lines: BTreeSet<ProductId>,
    },

    /// No line was confirmed invalid, but the catalog could not be reached
    /// for one or more lines. The mutation may succeed on resubmission.
    #[error(
        "product catalog unavailable for {} line(s): [{}]",
        .lines.len(),
        format_ids(.lines)
    )]
    CatalogUnavailable {
        /// Product IDs whose lookups failed at transport level.
        lines: BTreeSet<ProductId>,
    },

    /// The customer directory could not be reached, so the customer's
    /// existence is unknown.
    #[error("customer directory unavailable: {reason}")]
    DirectoryUnavailable {
        /// Transport-level cause.
        reason: String,
    },

    /// Validation passed but the cart store rejected or never received the
    /// mutation. Nothing was persisted; the request can be resubmitted.
    #[error("cart store unavailable: {reason}")]
    CartStoreUnavailable {
        /// Transport-level cause.
        reason: String,
    },
}

fn format_ids(ids: &BTreeSet<ProductId>) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for orchestration operations.
pub type Result<T> = std::result::Result<T, OrchestrationError>;
