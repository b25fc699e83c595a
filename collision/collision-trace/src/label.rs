//! Connected-region labeling and enclosed-background (hole) detection.

use std::collections::VecDeque;

use collision_mask::AlphaMask;
use tracing::debug;

/// 8-connected neighbor offsets, row-major scan compatible order.
const NEIGHBORS_8: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// 4-connected neighbor offsets.
const NEIGHBORS_4: [(i64, i64); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// A discovered opaque region.
#[derive(Debug, Clone, Copy)]
pub struct RegionInfo {
    /// First pixel of the region in row-major scan order.
    pub seed: (u32, u32),
    /// Number of opaque pixels in the region.
    pub pixel_count: usize,
}

/// An enclosed background component inside a region.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HoleInfo {
    /// First pixel of the hole in row-major scan order.
    pub seed: (u32, u32),
    /// Number of background pixels in the hole.
    pub pixel_count: usize,
    /// Label of the region the hole sits inside (1-based).
    pub owner: u32,
}

/// Label grid over an alpha mask.
///
/// Opaque regions are labeled 1.. in row-major first-pixel order using
/// 8-connectivity (matching the background 4-connectivity duality).
/// Label 0 is background.
#[derive(Debug)]
pub struct RegionMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
    regions: Vec<RegionInfo>,
    holes: Vec<HoleInfo>,
}

impl RegionMap {
    /// Number of discovered regions.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Discovered regions in row-major first-pixel order.
    #[must_use]
    pub fn regions(&self) -> &[RegionInfo] {
        &self.regions
    }

    /// Label at `(x, y)`; 0 for background or out-of-bounds.
    #[must_use]
    pub fn label(&self, x: i64, y: i64) -> u32 {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return 0;
        }
        #[allow(clippy::cast_sign_loss)]
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.labels[idx]
    }

    /// Holes owned by the region with the given 1-based label.
    pub(crate) fn holes_of(&self, owner: u32) -> impl Iterator<Item = &HoleInfo> {
        self.holes.iter().filter(move |h| h.owner == owner)
    }
}

/// Label the connected opaque regions of a mask.
///
/// When `detect_holes` is set, enclosed background components (4-connected,
/// not touching the image border) are also collected and attributed to the
/// region that surrounds them.
#[must_use]
pub fn label_regions(mask: &AlphaMask, detect_holes: bool) -> RegionMap {
    let width = mask.width();
    let height = mask.height();
    let size = (width as usize) * (height as usize);

    let mut labels = vec![0u32; size];
    let mut regions = Vec::new();
    let mut queue = VecDeque::new();

    for y in 0..height {
        for x in 0..width {
            let idx = (y as usize) * (width as usize) + (x as usize);
            if !mask.is_opaque(x, y) || labels[idx] != 0 {
                continue;
            }

            #[allow(clippy::cast_possible_truncation)]
            let label = regions.len() as u32 + 1;
            let mut pixel_count = 0usize;

            labels[idx] = label;
            queue.push_back((i64::from(x), i64::from(y)));
            while let Some((cx, cy)) = queue.pop_front() {
                pixel_count += 1;
                for (dx, dy) in NEIGHBORS_8 {
                    let (nx, ny) = (cx + dx, cy + dy);
                    if !mask.is_opaque_signed(nx, ny) {
                        continue;
                    }
                    #[allow(clippy::cast_sign_loss)]
                    let nidx = (ny as usize) * (width as usize) + (nx as usize);
                    if labels[nidx] == 0 {
                        labels[nidx] = label;
                        queue.push_back((nx, ny));
                    }
                }
            }

            regions.push(RegionInfo {
                seed: (x, y),
                pixel_count,
            });
        }
    }

    let holes = if detect_holes {
        find_holes(mask, width, height, &labels)
    } else {
        Vec::new()
    };

    debug!(
        regions = regions.len(),
        holes = holes.len(),
        "Region labeling complete"
    );

    RegionMap {
        width,
        height,
        labels,
        regions,
        holes,
    }
}

/// Find enclosed background components.
///
/// Background uses 4-connectivity (dual of the 8-connected foreground). A
/// component touching the image border is outside, not a hole. The owner is
/// the smallest region label adjacent to the component, which is the
/// enclosing region whenever the component is truly enclosed.
fn find_holes(mask: &AlphaMask, width: u32, height: u32, labels: &[u32]) -> Vec<HoleInfo> {
    let size = (width as usize) * (height as usize);
    let mut visited = vec![false; size];
    let mut holes = Vec::new();
    let mut queue = VecDeque::new();

    for y in 0..height {
        for x in 0..width {
            let idx = (y as usize) * (width as usize) + (x as usize);
            if mask.is_opaque(x, y) || visited[idx] {
                continue;
            }

            let mut pixel_count = 0usize;
            let mut touches_border = false;
            let mut owner = u32::MAX;

            visited[idx] = true;
            queue.push_back((i64::from(x), i64::from(y)));
            while let Some((cx, cy)) = queue.pop_front() {
                pixel_count += 1;
                if cx == 0
                    || cy == 0
                    || cx == i64::from(width) - 1
                    || cy == i64::from(height) - 1
                {
                    touches_border = true;
                }
                for (dx, dy) in NEIGHBORS_4 {
                    let (nx, ny) = (cx + dx, cy + dy);
                    if nx < 0 || ny < 0 || nx >= i64::from(width) || ny >= i64::from(height) {
                        continue;
                    }
                    #[allow(clippy::cast_sign_loss)]
                    let nidx = (ny as usize) * (width as usize) + (nx as usize);
                    if mask.is_opaque_signed(nx, ny) {
                        owner = owner.min(labels[nidx]);
                    } else if !visited[nidx] {
                        visited[nidx] = true;
                        queue.push_back((nx, ny));
                    }
                }
            }

            if !touches_border && owner != u32::MAX {
                holes.push(HoleInfo {
                    seed: (x, y),
                    pixel_count,
                    owner,
                });
            }
        }
    }

    holes
}
