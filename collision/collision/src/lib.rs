//! Sprite-to-collision-shape toolkit for 2D games.
//!
//! This umbrella crate re-exports the collision-* crates, providing a
//! unified API for turning raster sprites with alpha channels into compact
//! 2D collision geometry. All crates are engine-agnostic and usable from
//! CLI tools, asset pipelines, or servers.
//!
//! # Quick Start
//!
//! ```
//! use collision::prelude::*;
//!
//! // A 16x16 fully opaque sprite
//! let image = RasterImage::from_alpha(16, 16, vec![255; 256]).unwrap();
//!
//! // Generate triangulated collision shapes
//! let config = Config::default();
//! let report = generate_collision_set(&image, &config).unwrap();
//! assert!(report.shape_count() > 0);
//!
//! // Export to the nested-array JSON wire format
//! let json = export_json(&report.set).unwrap();
//! let restored = parse_json(&json).unwrap();
//! assert_eq!(restored, report.set);
//! ```
//!
//! # Module Organization
//!
//! The pipeline runs in stages, one crate per stage:
//!
//! - [`types`] - Core geometry: `ContourLoop`, `Polygon`, `Triangle`,
//!   `CollisionShape`, `CollisionSet`
//! - [`mask`] - Alpha thresholding: `RasterImage` to `AlphaMask`
//! - [`trace`] - Connected-region labeling and Moore-neighbor contour
//!   tracing
//! - [`simplify`] - Douglas-Peucker simplification, plain and vertex-capped
//! - [`earcut`] - Ear-clipping triangulation with hole bridging
//! - [`map`] - Pipeline assembly, configuration, reporting, and JSON export

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Core geometry types shared by every stage.
pub use collision_types as types;

/// Alpha-channel thresholding into binary masks.
pub use collision_mask as mask;

/// Region labeling and contour tracing.
pub use collision_trace as trace;

/// Contour simplification (Douglas-Peucker).
pub use collision_simplify as simplify;

/// Ear-clipping triangulation.
pub use collision_earcut as earcut;

/// End-to-end pipeline, configuration, and export.
pub use collision_map as map;

/// The most common imports for pipeline users.
pub mod prelude {
    // Core types
    pub use collision_types::{
        CollisionSet, CollisionShape, ContourLoop, Point2, Polygon, Triangle,
    };

    // Input
    pub use collision_mask::RasterImage;

    // Pipeline (main use case)
    pub use collision_map::{
        CollisionReport, Config, ContourCache, OutputMode, export_json,
        generate_collision_set, generate_with_cache, parse_json, save_collision_json,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        use prelude::*;

        let set = CollisionSet::new();
        assert!(set.is_empty());
        assert_eq!(Config::default().max_vertices, 8);
    }

    #[test]
    fn test_module_reexports() {
        let _ = types::CollisionSet::new();
        let _ = map::Config::default();
        let _ = trace::TraceParams::default();
        assert_eq!(mask::DEFAULT_ALPHA_THRESHOLD, 128);
        assert_eq!(types::MAX_SHAPE_VERTICES, 8);
    }
}
