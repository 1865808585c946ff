//! Polygon types: contours, the polygon itself, bounding boxes, and hole
//! detection over an unordered contour set.
mod bounding_box;
mod contour;
mod holes;
#[allow(clippy::module_inception)]
mod polygon;

pub use bounding_box::BoundingBox;
pub use contour::Contour;
pub use polygon::Polygon;
