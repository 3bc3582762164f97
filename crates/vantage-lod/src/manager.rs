//! Per-frame render planning: distance sorting, tier assignment, culling,
//! budget accounting, and adaptive quality.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use vantage_config::{LodConfig, LodOverrides};
use vantage_math::FrustumCuller;
use vantage_scene::{Artifact, ArtifactId, CameraState};

use crate::adaptive;
use crate::performance::{PerformanceMetrics, PerformanceMonitor};
use crate::selector::LodSelector;

/// Labels are only shown closer than this distance, regardless of tier.
const LABEL_DISTANCE: f32 = 50.0;
/// Detail panels are only shown closer than this distance.
const DETAIL_DISTANCE: f32 = 20.0;

/// Inputs for one frame of render planning.
#[derive(Clone, Debug)]
pub struct FrameContext {
    /// Camera state for this frame.
    pub camera: CameraState,
    /// Duration of the previous frame, in seconds.
    pub delta_time: f32,
}

/// Derived render state for one artifact, recomputed every frame.
///
/// Plan entries are ordered by ascending camera distance.
#[derive(Clone, Debug)]
pub struct ArtifactLod {
    /// The artifact this entry describes.
    pub artifact: ArtifactId,
    /// Index into the configured tier table.
    pub level_index: usize,
    /// Camera distance this frame.
    pub distance: f32,
    /// Inside the frustum and within the render distance.
    pub is_visible: bool,
    /// Whether the renderer should draw the artifact this frame.
    pub should_render: bool,
    /// Geometry detail factor from the selected tier.
    pub geometry_complexity: f32,
    /// Whether the label may be drawn.
    pub show_labels: bool,
    /// Whether the detail panel may be drawn.
    pub show_details: bool,
}

/// Orchestrates per-frame LOD selection, culling, and adaptive quality.
///
/// The manager never mutates artifacts; it only produces derived
/// [`ArtifactLod`] records. Its config is mutated over time by the
/// adaptive controller and by explicit overrides.
pub struct LodManager {
    config: LodConfig,
    monitor: PerformanceMonitor,
    /// Seeded RNG for probabilistic thinning, so frame plans are
    /// reproducible in tests.
    rng: ChaCha8Rng,
}

impl LodManager {
    /// Create a manager with the default thinning seed.
    pub fn new(config: LodConfig) -> Self {
        Self::with_seed(config, 0)
    }

    /// Create a manager with an explicit thinning seed.
    pub fn with_seed(config: LodConfig, seed: u64) -> Self {
        Self {
            config,
            monitor: PerformanceMonitor::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Current configuration, as mutated by adaptive quality so far.
    pub fn config(&self) -> &LodConfig {
        &self.config
    }

    /// Merge partial overrides over the live configuration between frames.
    pub fn apply_overrides(&mut self, overrides: &LodOverrides) {
        self.config.apply_overrides(overrides);
    }

    /// Latest performance snapshot.
    pub fn metrics(&self) -> &PerformanceMetrics {
        self.monitor.metrics()
    }

    /// Rolling average fps over the retained history.
    pub fn average_fps(&self) -> f32 {
        self.monitor.average_fps()
    }

    /// Plan one frame: produce per-artifact render state in ascending
    /// camera-distance order.
    ///
    /// Sorting by distance first means per-tier render budgets are spent
    /// on the nearest artifacts. The frustum is built once and reused for
    /// every containment test this frame.
    pub fn plan_frame(&mut self, artifacts: &[Artifact], ctx: &FrameContext) -> Vec<ArtifactLod> {
        self.monitor.record_frame(ctx.delta_time);

        let culler = self
            .config
            .frustum_culling
            .then(|| FrustumCuller::new(&ctx.camera.view_projection()));

        let mut order: Vec<(usize, f32)> = artifacts
            .iter()
            .enumerate()
            .map(|(i, a)| (i, ctx.camera.position.distance(a.position)))
            .collect();
        order.sort_by(|a, b| a.1.total_cmp(&b.1));

        let selector = LodSelector::new(&self.config.levels);
        let fps = self.monitor.metrics().fps;
        let target = self.config.performance_target;
        let below_target = fps < target;
        let thin_probability = if target > 0.0 {
            (1.0 - fps / target).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let mut rendered_per_level = vec![0usize; self.config.levels.len()];
        let mut render_count = 0usize;
        let mut plan = Vec::with_capacity(artifacts.len());

        for (index, distance) in order {
            let artifact = &artifacts[index];
            let level_index = selector.level_index(distance);
            let level = &self.config.levels[level_index];

            let in_frustum = match &culler {
                Some(culler) if level.culling_enabled => culler.contains_point(artifact.position),
                _ => true,
            };
            let is_visible = in_frustum && distance <= self.config.max_render_distance;

            let mut should_render = is_visible;
            if should_render && rendered_per_level[level_index] >= level.max_artifacts {
                // Budget exhausted; nearer artifacts already claimed it.
                should_render = false;
            }
            if should_render
                && below_target
                && artifact.complexity < self.config.thinning_complexity_threshold
                && self.rng.random::<f32>() < thin_probability
            {
                // Probabilistic thinning spares high-complexity artifacts.
                should_render = false;
            }
            if should_render {
                rendered_per_level[level_index] += 1;
                render_count += 1;
            }

            plan.push(ArtifactLod {
                artifact: artifact.id.clone(),
                level_index,
                distance,
                is_visible,
                should_render,
                geometry_complexity: level.geometry_complexity,
                show_labels: level.show_labels && distance < LABEL_DISTANCE,
                show_details: level.show_details && distance < DETAIL_DISTANCE,
            });
        }

        self.monitor
            .record_counts(render_count, artifacts.len() - render_count);
        log::trace!(
            "frame plan: {render_count} rendered, {} culled",
            artifacts.len() - render_count
        );

        if self.config.adaptive_quality {
            let average = self.monitor.average_fps();
            adaptive::tick(&mut self.config, average);
        }

        plan
    }
}
