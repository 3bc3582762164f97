//! Rolling frame-rate statistics for the scene.

use std::collections::VecDeque;

/// Number of fps samples retained for smoothing.
pub const FPS_HISTORY_LEN: usize = 60;

/// Per-frame performance counters, recomputed every frame.
#[derive(Clone, Debug, Default)]
pub struct PerformanceMetrics {
    /// Instantaneous frames per second.
    pub fps: f32,
    /// Frame time in milliseconds.
    pub frame_time: f32,
    /// Artifacts marked for rendering this frame.
    pub render_count: usize,
    /// Artifacts culled this frame.
    pub culled_count: usize,
    /// Approximate memory used by rendered geometry, in bytes.
    pub memory_usage: usize,
    /// Scene time of the last update, in seconds since monitor creation.
    ///
    /// Accumulated from frame deltas rather than read from a wall clock,
    /// so replaying the same deltas reproduces the same metrics.
    pub last_update: f64,
}

/// Tracks rolling frame-rate statistics over a bounded sample window.
pub struct PerformanceMonitor {
    metrics: PerformanceMetrics,
    /// Ring buffer of the most recent fps samples, oldest first.
    fps_history: VecDeque<f32>,
    elapsed: f64,
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceMonitor {
    /// Create a monitor with no recorded history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metrics: PerformanceMetrics::default(),
            fps_history: VecDeque::with_capacity(FPS_HISTORY_LEN),
            elapsed: 0.0,
        }
    }

    /// Record one frame. `delta_time` is the frame duration in seconds.
    pub fn record_frame(&mut self, delta_time: f32) {
        let frame_time = delta_time * 1000.0;
        let fps = if frame_time > 0.0 {
            1000.0 / frame_time
        } else {
            0.0
        };

        self.elapsed += f64::from(delta_time);

        if self.fps_history.len() == FPS_HISTORY_LEN {
            self.fps_history.pop_front();
        }
        self.fps_history.push_back(fps);

        self.metrics.fps = fps;
        self.metrics.frame_time = frame_time;
        self.metrics.last_update = self.elapsed;
    }

    /// Record the planner's visibility counts for the current frame.
    pub fn record_counts(&mut self, render_count: usize, culled_count: usize) {
        self.metrics.render_count = render_count;
        self.metrics.culled_count = culled_count;
        self.metrics.memory_usage = estimate_memory(render_count, render_count + culled_count);
    }

    /// Rolling average fps over the retained history.
    #[must_use]
    pub fn average_fps(&self) -> f32 {
        if self.fps_history.is_empty() {
            return 0.0;
        }
        self.fps_history.iter().sum::<f32>() / self.fps_history.len() as f32
    }

    /// Latest metrics snapshot.
    #[must_use]
    pub fn metrics(&self) -> &PerformanceMetrics {
        &self.metrics
    }

    /// Number of fps samples currently retained.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.fps_history.len()
    }
}

/// Approximate memory used by the scene's rendered geometry.
///
/// Assumes a sphere mesh per rendered artifact (~3 KB of vertex and index
/// data at full detail) plus a fixed bookkeeping cost per scene artifact.
fn estimate_memory(rendered: usize, total: usize) -> usize {
    rendered * 3 * 1024 + total * 96
}
