//! Cart and detail hand-offs to the host application.

use crate::catalog::{CartItem, Product};

/// Callbacks a host application may provide.
///
/// Both methods have placeholder defaults that only log, so a host can
/// implement just the ones it cares about.
pub trait CatalogEvents {
    /// The user asked to add `item.quantity` units of `item.product` to the
    /// cart.
    fn on_add_to_cart(&mut self, item: &CartItem) {
        tracing::info!(
            product_id = %item.product.id,
            quantity = item.quantity,
            "added \"{}\" to cart",
            item.product.name
        );
    }

    /// The user asked to see the details of `product`.
    fn on_view_details(&mut self, product: &Product) {
        tracing::info!(product_id = %product.id, "viewing details for \"{}\"", product.name);
    }
}

/// Host without callbacks; uses the placeholder behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEvents;

impl CatalogEvents for NoopEvents {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        added: Vec<(String, u32)>,
    }

    impl CatalogEvents for Recorder {
        fn on_add_to_cart(&mut self, item: &CartItem) {
            self.added.push((item.product.id.to_string(), item.quantity));
        }
    }

    #[test]
    fn test_partial_handler_keeps_default_for_rest() {
        let product = Product::new("4", "Organic Coffee Beans");
        let mut recorder = Recorder::default();
        recorder.on_add_to_cart(&CartItem::new(product.clone(), 2));
        recorder.on_view_details(&product);
        assert_eq!(recorder.added, vec![("4".to_string(), 2)]);
    }

    #[test]
    fn test_noop_handler() {
        let product = Product::new("6", "Minimalist Desk Lamp");
        let mut events = NoopEvents;
        events.on_add_to_cart(&CartItem::new(product.clone(), 1));
        events.on_view_details(&product);
    }
}
