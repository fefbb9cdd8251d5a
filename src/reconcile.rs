//! External update reconciliation.
//!
//! Directives from the controller are applied to the store once each and
//! acknowledged; every resulting state change is published back out.

mod outbound;
mod reconciler;

pub use outbound::Outbound;
pub use reconciler::Reconciler;
