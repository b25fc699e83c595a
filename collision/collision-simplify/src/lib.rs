//! Tolerance-bounded Douglas-Peucker simplification of contour loops.
//!
//! Third stage of the collision pipeline: traced boundary loops are reduced
//! to compact polygons. Two modes are provided:
//!
//! - [`simplify_loop`] - plain Douglas-Peucker at a fixed tolerance, used
//!   ahead of triangulation.
//! - [`simplify_capped`] - legacy mode with a hard 3-8 vertex cap, retrying
//!   with geometrically increasing tolerance until the cap is met.
//!
//! All tie-breaking is deterministic (lowest index wins), so identical
//! inputs always produce identical outputs.
//!
//! # Example
//!
//! ```
//! use collision_simplify::simplify_loop;
//! use collision_types::{ContourLoop, Point2};
//!
//! // A square with redundant edge midpoints
//! let noisy = ContourLoop::outer(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! let simplified = simplify_loop(&noisy, 0.0).unwrap();
//! assert_eq!(simplified.point_count(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod cap;
mod error;
mod simplify;

pub use cap::{CAP_BACKOFF, MAX_CAP_ITERATIONS, merge_close_vertices, simplify_capped};
pub use error::{SimplifyError, SimplifyResult};
pub use simplify::{perpendicular_distance, simplify_loop};
