//! Mutation request state machine.

use serde::{Deserialize, Serialize};

/// The state of a single cart mutation in its lifecycle.
///
/// State transitions:
/// ```text
/// Start ──┬──► CustomerChecked ──► ProductsValidating ──┬──► ProductsValid ──► Forwarded ──► Done
///         │                                             └──► ProductsInvalid ─────────────► Done
///         └──► CustomerUnknown ──────────────────────────────────────────────────────────► Done
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MutationState {
    /// Request accepted, nothing verified yet.
    #[default]
    Start,

    /// The directory resolved the customer.
    CustomerChecked,

    /// The directory answered that no such customer exists.
    CustomerUnknown,

    /// Per-line catalog checks are in flight.
    ProductsValidating,

    /// Every line passed validation.
    ProductsValid,

    /// At least one line was confirmed invalid.
    ProductsInvalid,

    /// The full mutation was handed to the cart store.
    Forwarded,

    /// A consolidated outcome has been produced (terminal state).
    Done,
}

impl MutationState {
    /// Returns true if the customer lookup may start.
    pub fn can_check_customer(&self) -> bool {
        matches!(self, MutationState::Start)
    }

    /// Returns true if product validation may start.
    pub fn can_validate_products(&self) -> bool {
        matches!(self, MutationState::CustomerChecked)
    }

    /// Returns true if the mutation may be forwarded to the cart store.
    pub fn can_forward(&self) -> bool {
        matches!(self, MutationState::ProductsValid)
    }

    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MutationState::Done)
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationState::Start => "Start",
            MutationState::CustomerChecked => "CustomerChecked",
            MutationState::CustomerUnknown => "CustomerUnknown",
            MutationState::ProductsValidating => "ProductsValidating",
            MutationState::ProductsValid => "ProductsValid",
            MutationState::ProductsInvalid => "ProductsInvalid",
            MutationState::Forwarded => "Forwarded",
            MutationState::Done => "Done",
        }
    }
}

impl std::fmt::Display for MutationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
