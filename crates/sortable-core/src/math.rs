//! Vector math re-exported from [`glam`].
//!
//! Pointer positions, box origins and preview translations are all plain
//! [`Vec2`] values in viewport coordinates.
//!
//! ```
//! use sortable_core::math::Vec2;
//!
//! let origin = Vec2::new(0.0, 40.0);
//! let slot = Vec2::new(0.0, 0.0);
//! assert_eq!(slot - origin, Vec2::new(0.0, -40.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::Vec2;
