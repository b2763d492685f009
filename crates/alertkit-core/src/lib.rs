//! Rendering-agnostic primitives shared by the AlertKit crates: colors,
//! geometry, vector paths, and the [`ShapeLayer`] value handed off to a
//! renderer.
//!
//! Everything here is plain data. Paths are built with a small mutating
//! builder and replayed by whatever backend consumes the layer:
//!
//! ```rust
//! use alertkit_core::{Path, Vec2};
//!
//! let mut path = Path::new();
//! path.move_to(Vec2 { x: 0.0, y: 0.0 });
//! path.line_to(Vec2 { x: 8.0, y: 8.0 });
//! path.close();
//! assert_eq!(path.segments().len(), 3);
//! ```

pub mod color;
pub mod geometry;
pub mod layer;
pub mod path;

pub use color::*;
pub use geometry::*;
pub use layer::*;
pub use path::*;
