//! Per-line product validation against the catalog.

use std::sync::Arc;

use common::ProductId;
use domain::{CartLine, ProductValidationResult};
use futures_util::future::join_all;
use tokio::sync::Semaphore;

use crate::services::ProductCatalog;

/// Default bound on concurrent catalog lookups within one request.
pub const DEFAULT_VALIDATION_CONCURRENCY: usize = 8;

/// Validates cart lines against the product catalog.
///
/// Line checks are independent of each other, so [`validate_lines`]
/// issues them concurrently under a semaphore bound and waits for every
/// check before reporting. No check is ever skipped because another one
/// failed.
///
/// [`validate_lines`]: ProductValidator::validate_lines
pub struct ProductValidator<C> {
    catalog: C,
    concurrency: usize,
}

impl<C: ProductCatalog> ProductValidator<C> {
    /// Creates a validator with the default concurrency bound.
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            concurrency: DEFAULT_VALIDATION_CONCURRENCY,
        }
    }

    /// Overrides the concurrency bound. Values below 1 are clamped to 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Checks a single product against the catalog.
    ///
    /// A product that the catalog positively rejects (unknown, or known
    /// but not orderable) is a confirmed miss; a lookup the catalog could
    /// not answer is a transient failure.
    #[tracing::instrument(skip(self))]
    pub async fn validate(&self, product_id: ProductId) -> ProductValidationResult {
        match self.catalog.product(product_id).await {
            Ok(Some(product)) if product.available => {
                ProductValidationResult::confirmed(product_id)
            }
            Ok(Some(_)) => {
                tracing::debug!(%product_id, "product exists but is not orderable");
                ProductValidationResult::missing(product_id)
            }
            Ok(None) => {
                tracing::debug!(%product_id, "product not found in catalog");
                ProductValidationResult::missing(product_id)
            }
            Err(error) => {
                tracing::warn!(%product_id, %error, "catalog lookup failed");
                ProductValidationResult::unreachable(product_id)
            }
        }
    }

    /// Validates every line concurrently and returns one result per line,
    /// in line order.
    ///
    /// The futures run inside this call rather than on spawned tasks, so
    /// dropping the returned future cancels any lookups still in flight.
    pub async fn validate_lines(&self, lines: &[CartLine]) -> Vec<ProductValidationResult> {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let checks = lines.iter().map(|line| {
            let semaphore = Arc::clone(&semaphore);
            let product_id = line.product_id;
            async move {
                let _permit = semaphore.acquire().await.unwrap();
                self.validate(product_id).await
            }
        });
        join_all(checks).await
    }
}
