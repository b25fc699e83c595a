//! Trace-phase caching for repeated invocations.
//!
//! Tracing is the expensive, parameter-stable part of the pipeline: its
//! outcome depends only on the mask and the trace parameters, not on the
//! simplification or triangulation settings. Callers that sweep epsilon or
//! flip output modes over the same sprite can reuse the traced contours.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use collision_mask::{AlphaMask, RasterImage, extract_mask};
use hashbrown::HashMap;
use tracing::debug;

use crate::config::Config;
use crate::error::MapResult;
use crate::pipeline::{TraceOutcome, assemble, trace_phase};
use crate::report::CollisionReport;

/// Cache of trace outcomes keyed by mask content and trace parameters.
#[derive(Debug, Default)]
pub struct ContourCache {
    entries: HashMap<u64, Arc<TraceOutcome>>,
    hits: usize,
    misses: usize,
}

impl ContourCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached trace outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups served from the cache.
    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Number of lookups that required a fresh trace.
    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    /// Drop all cached outcomes and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    fn get_or_trace(&mut self, mask: &AlphaMask, config: &Config) -> Arc<TraceOutcome> {
        let key = trace_key(mask, config);
        if let Some(outcome) = self.entries.get(&key) {
            self.hits += 1;
            debug!(key, "Contour cache hit");
            return Arc::clone(outcome);
        }
        self.misses += 1;
        let outcome = Arc::new(trace_phase(mask, config));
        self.entries.insert(key, Arc::clone(&outcome));
        outcome
    }
}

/// Key over everything the trace phase reads: mask content, dimensions,
/// hole tracing, and the noise threshold. Alpha threshold is implicit in
/// the mask bits.
fn trace_key(mask: &AlphaMask, config: &Config) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    mask.width().hash(&mut hasher);
    mask.height().hash(&mut hasher);
    mask.bits().hash(&mut hasher);
    config.include_holes.hash(&mut hasher);
    config.min_region_area.to_bits().hash(&mut hasher);
    hasher.finish()
}

/// Run the pipeline, reusing a cached trace outcome when available.
///
/// Behaves exactly like
/// [`generate_collision_set`](crate::generate_collision_set); only the
/// trace phase is memoized.
///
/// # Errors
///
/// Same failure modes as [`generate_collision_set`](crate::generate_collision_set).
pub fn generate_with_cache(
    image: &RasterImage,
    config: &Config,
    cache: &mut ContourCache,
) -> MapResult<CollisionReport> {
    config.validate()?;
    let mask = extract_mask(image, config.alpha_threshold)?;
    let outcome = cache.get_or_trace(&mask, config);
    assemble(&mask, (*outcome).clone(), config)
}
