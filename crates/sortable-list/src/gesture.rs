//! Gesture events and per-gesture state.

use crate::element::ElementId;
use crate::snapshot::Snapshot;
use sortable_core::math::Vec2;

/// Inbound gesture events, delivered in start → move* → end order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// The pointer picked up `origin` (an item or one of its handles).
    Start { origin: ElementId, position: Vec2 },
    /// The pointer moved while dragging.
    Move { position: Vec2 },
    /// The pointer was released.
    End,
    /// The gesture was aborted by the host.
    Cancel,
}

/// State of the gesture in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureState {
    /// Index of the dragged item in the snapshot.
    pub dragged: usize,
    /// Slot the item would drop into, if the pointer has hit one yet.
    pub candidate: Option<usize>,
    /// Position where the gesture started.
    pub start_pos: Vec2,
    /// Latest pointer position.
    pub current_pos: Vec2,
}

impl GestureState {
    pub fn new(dragged: usize, start_pos: Vec2) -> Self {
        Self {
            dragged,
            candidate: None,
            start_pos,
            current_pos: start_pos,
        }
    }

    /// Record a pointer move and a fresh hit-test result.
    ///
    /// A miss keeps the previous candidate. Returns `true` when the candidate
    /// changed and the preview needs redrawing.
    pub fn update(&mut self, pos: Vec2, hit: Option<usize>) -> bool {
        self.current_pos = pos;
        match hit {
            Some(index) if self.candidate != Some(index) => {
                self.candidate = Some(index);
                true
            }
            _ => false,
        }
    }
}

/// Snapshot and state owned by one active gesture.
#[derive(Debug, Clone)]
pub struct ActiveGesture {
    pub snapshot: Snapshot,
    pub state: GestureState,
}

impl ActiveGesture {
    /// The item being dragged.
    pub fn dragged_item(&self) -> Option<ElementId> {
        self.snapshot.get(self.state.dragged).map(|entry| entry.item)
    }
}
