//! Collision shape assembly: raster sprite in, serialized shape set out.
//!
//! Final stage of the collision pipeline. Drives mask extraction, contour
//! tracing, simplification, and triangulation per a [`Config`], folds the
//! per-region results into a [`CollisionReport`], and serializes shape sets
//! to the nested-array JSON wire format.
//!
//! Regions are processed independently (and in parallel): one degenerate
//! region is recorded as a [`RegionFailure`] without affecting the rest.
//! An invocation fails only when no region produces a shape.
//!
//! # Example
//!
//! ```
//! use collision_map::{Config, export_json, generate_collision_set};
//! use collision_mask::RasterImage;
//!
//! // A 4x4 fully opaque sprite
//! let image = RasterImage::from_alpha(4, 4, vec![255; 16]).unwrap();
//!
//! let config = Config::default().with_epsilon(0.0);
//! let report = generate_collision_set(&image, &config).unwrap();
//! assert_eq!(report.shape_count(), 2); // square splits into two triangles
//!
//! let json = export_json(&report.set).unwrap();
//! assert!(json.starts_with("[[["));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod cache;
mod config;
mod error;
mod export;
mod pipeline;
mod report;

pub use cache::{ContourCache, generate_with_cache};
pub use config::{Config, OutputMode};
pub use error::{MapError, MapResult, RegionError};
pub use export::{export_json, parse_json, save_collision_json};
pub use pipeline::generate_collision_set;
pub use report::{COVERAGE_THRESHOLD, CollisionReport, RegionFailure};
