//! Host environment abstraction.
//!
//! The controller never talks to a windowing system directly. Everything it
//! needs (geometry, subscriptions, presentation writes) goes through
//! [`ListEnvironment`], so the reorder logic runs unchanged against a real UI
//! host or a mock.

use crate::config::DropEffect;
use crate::element::{ElementId, Presentation};
use bitflags::bitflags;
use sortable_core::geometry::BoundingBox;

bitflags! {
    /// Event channels the controller listens on while active.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Subscriptions: u8 {
        /// Pointer picked up an element.
        const GESTURE_START = 1 << 0;
        /// Pointer moved while dragging.
        const GESTURE_MOVE  = 1 << 1;
        /// Pointer released.
        const GESTURE_END   = 1 << 2;
        /// Children added to or removed from the list.
        const CHILD_LIST    = 1 << 3;
    }
}

/// Capabilities the host provides to a [`SortableList`](crate::SortableList).
///
/// Methods take `&self`; hosts that need to mutate use interior mutability.
/// The trait is object safe.
pub trait ListEnvironment {
    /// Direct children of the list in declaration order.
    fn items(&self) -> Vec<ElementId>;

    /// Painted bounding box of an element, including any preview translation.
    fn bounding_box(&self, element: ElementId) -> BoundingBox;

    /// The list item that is or contains `element`.
    fn owning_item(&self, element: ElementId) -> Option<ElementId>;

    /// First `.drag-handle` descendant of an item.
    fn find_handle(&self, item: ElementId) -> Option<ElementId>;

    /// Insert a new handle element into `item` and return it.
    fn create_handle(&self, item: ElementId) -> ElementId;

    /// Grant or revoke the native draggable capability.
    fn set_draggable(&self, element: ElementId, draggable: bool);

    /// Apply transient presentation to an item.
    fn set_presentation(&self, item: ElementId, presentation: &Presentation);

    /// Set the explicit placement index that realizes visual order.
    fn set_placement(&self, item: ElementId, placement: usize);

    /// Advertise the drop effect for the gesture being started.
    fn set_drop_effect(&self, effect: DropEffect);

    fn subscribe(&self, subscriptions: Subscriptions);

    fn unsubscribe(&self, subscriptions: Subscriptions);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_channels() {
        let all = Subscriptions::all();
        assert!(all.contains(Subscriptions::GESTURE_MOVE | Subscriptions::CHILD_LIST));
        assert_eq!(
            all - Subscriptions::CHILD_LIST,
            Subscriptions::GESTURE_START | Subscriptions::GESTURE_MOVE | Subscriptions::GESTURE_END
        );
    }
}
