//! Test utilities for the sortable list crates.
//!
//! [`MockListEnvironment`] stands in for a UI host: it lays items out in a
//! column or grid, honours placement indices and preview translations when
//! reporting boxes, and records every call the controller makes.
//!
//! # Example
//!
//! ```rust
//! use sortable_list::{GestureEvent, SortableConfig, SortableList, Vec2};
//! use sortable_test_utils::MockListEnvironment;
//!
//! let env = MockListEnvironment::column(4, Vec2::new(100.0, 40.0));
//! let items = env.item_ids();
//!
//! let mut list = SortableList::new(SortableConfig::default());
//! list.attach(&env).unwrap();
//!
//! list.handle_event(&env, GestureEvent::Start { origin: items[2], position: Vec2::new(50.0, 100.0) });
//! list.handle_event(&env, GestureEvent::Move { position: Vec2::new(50.0, 20.0) });
//! let event = list.commit(&env).unwrap();
//!
//! assert_eq!(event.order, vec![items[2], items[0], items[1], items[3]]);
//! ```

pub mod mock_environment;

pub use mock_environment::*;
