//! Cart mutation endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::CustomerEmail;
use domain::{CartLine, CartMutationOutcome, CartMutationRequest};
use orchestrator::{CartStore, CustomerDirectory, MutationCoordinator, ProductCatalog};
use serde::Deserialize;

use crate::error::{ApiError, ApiJson};

/// Shared application state accessible from all handlers.
pub struct AppState<D, C, S>
where
    D: CustomerDirectory,
    C: ProductCatalog,
    S: CartStore,
{
    pub coordinator: MutationCoordinator<D, C, S>,
}

// -- Request types --

#[derive(Deserialize)]
pub struct AddProductsRequest {
    pub customer_email: String,
    /// A missing line list is treated the same as an empty one.
    #[serde(default)]
    pub lines: Vec<CartLineRequest>,
}

#[derive(Deserialize)]
pub struct CartLineRequest {
    pub product_id: u32,
    pub quantity: u32,
}

// -- Handlers --

/// POST /cart/products — run one add-to-cart mutation end to end.
#[tracing::instrument(skip(state, req), fields(customer = %req.customer_email))]
pub async fn add_products<D, C, S>(
    State(state): State<Arc<AppState<D, C, S>>>,
    ApiJson(req): ApiJson<AddProductsRequest>,
) -> Result<Json<CartMutationOutcome>, ApiError>
where
    D: CustomerDirectory + 'static,
    C: ProductCatalog + 'static,
    S: CartStore + 'static,
{
    let email = CustomerEmail::parse(&req.customer_email)?;
    let lines: Vec<CartLine> = req
        .lines
        .iter()
        .map(|line| CartLine::new(line.product_id, line.quantity))
        .collect();
    let request = CartMutationRequest::new(email, lines)?;

    let outcome = state.coordinator.submit(request).await?;
    Ok(Json(outcome))
}
