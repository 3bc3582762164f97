//! Partial configuration overrides applied between frames.
//!
//! Callers hot-update a live config by building an override struct with
//! only the fields they want to change; `None` fields leave the existing
//! value untouched.

use serde::{Deserialize, Serialize};

use crate::config::{LayoutAlgorithm, LayoutConfig, LodConfig, LodLevel};

/// Option-field overrides merged over an existing [`LodConfig`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LodOverrides {
    /// Replace the whole tier ladder.
    pub levels: Option<Vec<LodLevel>>,
    pub adaptive_quality: Option<bool>,
    pub performance_target: Option<f32>,
    pub max_render_distance: Option<f32>,
    pub frustum_culling: Option<bool>,
    pub occlusion_culling: Option<bool>,
    pub thinning_complexity_threshold: Option<f32>,
}

impl LodConfig {
    /// Merge the given overrides over this config.
    pub fn apply_overrides(&mut self, overrides: &LodOverrides) {
        if let Some(ref levels) = overrides.levels {
            self.levels = levels.clone();
        }
        if let Some(adaptive) = overrides.adaptive_quality {
            self.adaptive_quality = adaptive;
        }
        if let Some(target) = overrides.performance_target {
            self.performance_target = target;
        }
        if let Some(distance) = overrides.max_render_distance {
            self.max_render_distance = distance;
        }
        if let Some(frustum) = overrides.frustum_culling {
            self.frustum_culling = frustum;
        }
        if let Some(occlusion) = overrides.occlusion_culling {
            self.occlusion_culling = occlusion;
        }
        if let Some(threshold) = overrides.thinning_complexity_threshold {
            self.thinning_complexity_threshold = threshold;
        }
    }
}

/// Option-field overrides merged over an existing [`LayoutConfig`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutOverrides {
    pub algorithm: Option<LayoutAlgorithm>,
    pub spacing: Option<f32>,
    pub cluster_radius: Option<f32>,
    pub force_strength: Option<f32>,
    pub iterations: Option<usize>,
    pub center_attraction: Option<f32>,
    pub repulsion_strength: Option<f32>,
    pub seed: Option<u64>,
}

impl LayoutConfig {
    /// Merge the given overrides over this config.
    pub fn apply_overrides(&mut self, overrides: &LayoutOverrides) {
        if let Some(algorithm) = overrides.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(spacing) = overrides.spacing {
            self.spacing = spacing;
        }
        if let Some(radius) = overrides.cluster_radius {
            self.cluster_radius = radius;
        }
        if let Some(strength) = overrides.force_strength {
            self.force_strength = strength;
        }
        if let Some(iterations) = overrides.iterations {
            self.iterations = iterations;
        }
        if let Some(attraction) = overrides.center_attraction {
            self.center_attraction = attraction;
        }
        if let Some(repulsion) = overrides.repulsion_strength {
            self.repulsion_strength = repulsion;
        }
        if let Some(seed) = overrides.seed {
            self.seed = seed;
        }
    }
}
