//! This crate implements Boolean set operations (intersection, union,
//! difference, exclusive or) on 2D polygons with multiple contours and nested
//! holes, using a sweep line over the polygon edges. Hole detection for an
//! unordered contour set and polygon offsetting are built on the same
//! machinery.
//!
//! # Quick code example
//!
//! ```
//! use polyclip::{polygon, BooleanOp};
//!
//! // 2x2 square and a 2x2 square shifted by (1, 1)
//! let a = polygon![[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]];
//! let b = polygon![[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]];
//!
//! let r = a.boolean(&b, BooleanOp::Intersection)?;
//! assert_eq!(r.len(), 1);
//! // overlap is the unit square from (1, 1) to (2, 2)
//! assert_eq!(r.contour(0).len(), 4);
//! # Ok::<(), polyclip::ClipError>(())
//! ```
#[macro_use]
mod macros;

pub mod core;
pub mod error;
pub mod polygon;

mod sweep;

pub mod boolean;
pub mod io;
pub mod offset;

pub use crate::boolean::{boolean_op, difference, intersection, union, xor, BooleanOp};
pub use crate::error::ClipError;
pub use crate::offset::{offset_polygon, offset_polygon_opt, OffsetOptions};
