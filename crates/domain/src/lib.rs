//! Domain model for the cart mutation gateway.
//!
//! This crate provides the request/outcome vocabulary of a single
//! cart-mutation attempt:
//! - `CartMutationRequest` / `CartLine` — the validated inbound request
//! - `ProductValidationResult` — one line's fate against the catalog
//! - `CartMutationOutcome` — the consolidated result returned to the caller
//!
//! Everything here is constructed at request entry and discarded at
//! response exit; nothing has a lifecycle beyond one orchestration call.

pub mod cart;

pub use cart::{
    CartLine, CartMutationOutcome, CartMutationRequest, ProductValidationResult, RequestError,
};
