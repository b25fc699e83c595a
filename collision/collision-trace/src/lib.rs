//! Boundary contour tracing over binary opacity masks.
//!
//! Second stage of the collision pipeline: each maximal connected opaque
//! region of an [`AlphaMask`](collision_mask::AlphaMask) is reduced to one
//! closed boundary loop (plus optional hole loops) of pixel-center vertices.
//!
//! Regions are discovered in row-major first-pixel order, and each boundary
//! is walked with Moore-neighbor border following, so output is fully
//! deterministic for a given mask.
//!
//! # Example
//!
//! ```
//! use collision_mask::{extract_mask, RasterImage};
//! use collision_trace::{trace_contours, TraceParams};
//!
//! // 3x3 opaque block
//! let image = RasterImage::from_alpha(3, 3, vec![255; 9]).unwrap();
//! let mask = extract_mask(&image, 128).unwrap();
//!
//! let params = TraceParams::default().with_min_region_area(0.0);
//! let regions = trace_contours(&mask, &params).unwrap();
//!
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].outer.point_count(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod label;
mod params;
mod trace;

pub use error::{TraceError, TraceResult};
pub use label::{RegionInfo, RegionMap, label_regions};
pub use params::{MIN_REGION_AREA, TraceParams};
pub use trace::{TracedRegion, trace_contours, trace_region};
