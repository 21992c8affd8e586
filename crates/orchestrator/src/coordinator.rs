//! Coordinator for running cart mutations end to end.

use std::collections::BTreeSet;

use common::{MutationId, ProductId};
use domain::{CartMutationOutcome, CartMutationRequest};

use crate::error::OrchestrationError;
use crate::services::{CartStore, CustomerDirectory, ProductCatalog};
use crate::state::MutationState;
use crate::validator::ProductValidator;

/// Orchestrates add-to-cart mutations across the three collaborators.
///
/// Every request runs the same pipeline: resolve the customer in the
/// directory, validate all lines against the catalog, and only when every
/// line passes, forward the unmodified request to the cart store in a
/// single call. The coordinator keeps no state between requests, so a
/// failed mutation can simply be resubmitted.
pub struct MutationCoordinator<D, C, S>
where
    D: CustomerDirectory,
    C: ProductCatalog,
    S: CartStore,
{
    directory: D,
    validator: ProductValidator<C>,
    cart_store: S,
}

impl<D, C, S> MutationCoordinator<D, C, S>
where
    D: CustomerDirectory,
    C: ProductCatalog,
    S: CartStore,
{
    /// Creates a new coordinator with the default validation concurrency.
    pub fn new(directory: D, catalog: C, cart_store: S) -> Self {
        Self {
            directory,
            validator: ProductValidator::new(catalog),
            cart_store,
        }
    }

    /// Overrides the bound on concurrent catalog lookups per request.
    pub fn with_validation_concurrency(mut self, concurrency: usize) -> Self {
        self.validator = self.validator.with_concurrency(concurrency);
        self
    }

    /// Runs one cart mutation from customer check to store acknowledgment.
    ///
    /// All-or-nothing: the cart store never observes a request containing
    /// a line that failed validation, and a forwarded request carries the
    /// caller's lines unchanged, duplicates and order included.
    #[tracing::instrument(
        skip(self, request),
        fields(customer = %request.customer_email(), lines = request.line_count())
    )]
    pub async fn submit(
        &self,
        request: CartMutationRequest,
    ) -> Result<CartMutationOutcome, OrchestrationError> {
        metrics::counter!("cart_mutations_total").increment(1);
        let started = std::time::Instant::now();
        let mutation_id = MutationId::new();
        let mut state = MutationState::default();
        tracing::debug!(%mutation_id, state = %state, "mutation accepted");

        // 1. Resolve the customer before anything else is touched.
        let found = match self.directory.lookup(request.customer_email()).await {
            Ok(found) => found,
            Err(e) => {
                metrics::counter!("cart_mutations_rejected").increment(1);
                tracing::warn!(%mutation_id, error = %e, "customer lookup failed");
                metrics::histogram!("cart_mutation_duration_seconds")
                    .record(started.elapsed().as_secs_f64());
                return Err(OrchestrationError::DirectoryUnavailable { reason: e.reason });
            }
        };
        let Some(customer) = found else {
            state = MutationState::CustomerUnknown;
            metrics::counter!("cart_mutations_rejected").increment(1);
            tracing::warn!(%mutation_id, state = %state, "customer not registered, mutation aborted");
            metrics::histogram!("cart_mutation_duration_seconds")
                .record(started.elapsed().as_secs_f64());
            return Err(OrchestrationError::CustomerNotFound {
                customer: request.customer_email().clone(),
            });
        };
        state = MutationState::CustomerChecked;
        tracing::debug!(%mutation_id, state = %state, name = %customer.name, "customer resolved");

        // 2. Validate every line. All checks complete before any decision
        //    is made, so the failure report is always the full set.
        state = MutationState::ProductsValidating;
        tracing::debug!(%mutation_id, state = %state, "validating products");
        let results = self.validator.validate_lines(request.lines()).await;

        let failed_lines: BTreeSet<ProductId> = results
            .iter()
            .filter(|r| r.confirmed_miss())
            .map(|r| r.product_id)
            .collect();
        let unreachable_lines: BTreeSet<ProductId> = results
            .iter()
            .filter(|r| r.transient_failure())
            .map(|r| r.product_id)
            .collect();

        if !failed_lines.is_empty() {
            state = MutationState::ProductsInvalid;
            metrics::counter!("cart_mutations_rejected").increment(1);
            metrics::counter!("product_validation_failures_total")
                .increment(failed_lines.len() as u64);
            tracing::warn!(
                %mutation_id,
                state = %state,
                failed = failed_lines.len(),
                "lines rejected by catalog, mutation aborted"
            );
            metrics::histogram!("cart_mutation_duration_seconds")
                .record(started.elapsed().as_secs_f64());
            return Err(OrchestrationError::ProductValidationFailed { failed_lines });
        }
        if !unreachable_lines.is_empty() {
            metrics::counter!("cart_mutations_rejected").increment(1);
            tracing::warn!(
                %mutation_id,
                unreachable = unreachable_lines.len(),
                "catalog unreachable, mutation aborted"
            );
            metrics::histogram!("cart_mutation_duration_seconds")
                .record(started.elapsed().as_secs_f64());
            return Err(OrchestrationError::CatalogUnavailable {
                lines: unreachable_lines,
            });
        }
        state = MutationState::ProductsValid;
        tracing::debug!(%mutation_id, state = %state, "all lines valid");

        // 3. Forward the unmodified request in a single call. No retry:
        //    nothing was persisted on failure, the caller can resubmit.
        let ack = match self.cart_store.add_products(&request).await {
            Ok(ack) => ack,
            Err(e) => {
                metrics::counter!("cart_mutations_rejected").increment(1);
                tracing::error!(%mutation_id, error = %e, "cart store did not take the mutation");
                metrics::histogram!("cart_mutation_duration_seconds")
                    .record(started.elapsed().as_secs_f64());
                return Err(OrchestrationError::CartStoreUnavailable { reason: e.reason });
            }
        };
        state = MutationState::Forwarded;
        tracing::debug!(%mutation_id, state = %state, "mutation forwarded to cart store");

        state = MutationState::Done;
        let duration = started.elapsed().as_secs_f64();
        metrics::histogram!("cart_mutation_duration_seconds").record(duration);
        metrics::counter!("cart_mutations_accepted").increment(1);
        tracing::info!(%mutation_id, state = %state, duration, "cart mutation accepted");

        Ok(CartMutationOutcome::accepted(mutation_id, ack.message))
    }
}
