//! Distance-based LOD tier selection over an ordered level table.

use vantage_config::LodLevel;

/// Maps camera distance to a LOD tier using an ordered level table.
///
/// Borrowed per frame from the live config, since the adaptive controller
/// may mutate the table between frames.
pub struct LodSelector<'a> {
    levels: &'a [LodLevel],
}

impl<'a> LodSelector<'a> {
    /// Create a selector over an ordered level table.
    ///
    /// # Panics
    ///
    /// Panics if the table is empty.
    pub fn new(levels: &'a [LodLevel]) -> Self {
        assert!(!levels.is_empty(), "level table must not be empty");
        Self { levels }
    }

    /// Index of the first level with `min_distance <= d < max_distance`.
    ///
    /// Distances that match no range (configuration gaps, or beyond all
    /// ranges) fall back to the **last** configured level.
    pub fn level_index(&self, distance: f32) -> usize {
        debug_assert!(distance >= 0.0, "distance must be non-negative");
        for (i, level) in self.levels.iter().enumerate() {
            if distance >= level.min_distance && distance < level.max_distance {
                return i;
            }
        }
        self.levels.len() - 1
    }

    /// The level for the given distance (see [`level_index`](Self::level_index)).
    pub fn level(&self, distance: f32) -> &'a LodLevel {
        &self.levels[self.level_index(distance)]
    }
}
