use crate::domain::cart::model::{CartLine, CartSummary};

/// Display-layer hook invoked after every cart state change, including the
/// initial load. Receives the full line sequence and a freshly computed
/// summary; rendering specifics belong to the implementor.
pub trait CartObserver: Send + Sync {
    fn cart_changed(&self, lines: &[CartLine], summary: &CartSummary);
}
