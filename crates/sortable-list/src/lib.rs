//! Drag-to-reorder for list widgets.
//!
//! A [`SortableList`] turns pointer gestures into a new item order:
//!
//! 1. On gesture start it captures every item's box ([`Snapshot`]).
//! 2. On each move it hit-tests the pointer against the snapshot and, when
//!    the drop slot changes, previews the new order by translating items.
//! 3. On gesture end it reads the painted order, emits a [`SortEvent`] and
//!    pins the new order with placement indices.
//!
//! The host UI is reached only through [`ListEnvironment`].
//!
//! # Example
//!
//! ```ignore
//! use sortable_list::*;
//!
//! let mut list = SortableList::new(SortableConfig::from_attributes(None, Some("create")));
//! list.on_sort(|event| println!("new order: {:?}", event.order));
//! list.attach(&env)?;
//!
//! list.handle_event(&env, GestureEvent::Start { origin: handle, position });
//! list.handle_event(&env, GestureEvent::Move { position: over_first_item });
//! list.handle_event(&env, GestureEvent::End);
//! ```

pub mod config;
pub mod controller;
pub mod element;
pub mod environment;
pub mod error;
pub mod event;
pub mod gesture;
pub mod mutation;
pub mod order;
pub mod preview;
pub mod snapshot;

pub use config::{DragHandles, DropEffect, PreviewStyle, SortableConfig};
pub use controller::SortableList;
pub use element::{ElementId, Presentation, Transition};
pub use environment::{ListEnvironment, Subscriptions};
pub use error::{SortableError, SortableResult};
pub use event::SortEvent;
pub use gesture::{GestureEvent, GestureState};
pub use preview::SlotRole;
pub use snapshot::{Snapshot, SnapshotEntry};

pub use sortable_core::geometry::BoundingBox;
pub use sortable_core::math::Vec2;
