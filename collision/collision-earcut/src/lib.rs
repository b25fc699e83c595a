//! Ear-clipping triangulation of simple polygons with holes.
//!
//! Fourth stage of the collision pipeline: each simplified polygon becomes
//! an ordered list of counter-clockwise triangles. Holes are first merged
//! into the outer loop via bridge edges, then classic ear clipping runs
//! with a deterministic first-valid-ear scan so output is reproducible
//! vertex for vertex.
//!
//! # Example
//!
//! ```
//! use collision_earcut::triangulate;
//! use collision_types::{ContourLoop, Point2, Polygon};
//!
//! let square = Polygon::new(ContourLoop::outer(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]));
//!
//! let triangles = triangulate(&square).unwrap();
//! assert_eq!(triangles.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bridge;
mod earcut;
mod error;

pub use bridge::merge_holes;
pub use earcut::triangulate;
pub use error::{EarcutError, EarcutResult};
