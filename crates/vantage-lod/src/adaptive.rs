//! Closed-loop render quality control driven by the measured frame rate.
//!
//! Shrinks faster than it grows: the controller is biased toward
//! protecting frame rate over visual richness. A hysteresis band around
//! the target keeps it from oscillating.

use vantage_config::LodConfig;

/// Floor for the adaptive render distance, in world units.
pub const MIN_RENDER_DISTANCE: f32 = 50.0;
/// Ceiling for the adaptive render distance.
pub const MAX_RENDER_DISTANCE: f32 = 200.0;
/// Floor for any tier's per-frame artifact budget.
pub const MIN_LEVEL_BUDGET: usize = 10;
/// Ceiling for any tier's per-frame artifact budget.
pub const MAX_LEVEL_BUDGET: usize = 1000;

/// Fraction of the target below which quality is reduced.
const SHRINK_BAND: f32 = 0.8;
/// Fraction of the target above which quality is raised.
const GROW_BAND: f32 = 1.2;

/// Outcome of one controller tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityAdjustment {
    /// Render budgets were shrunk to recover frame rate.
    Reduced,
    /// Render budgets were grown to spend spare headroom.
    Raised,
    /// Average fps sat inside the hysteresis band.
    Unchanged,
}

/// Evaluate the control law once against the rolling average fps.
pub fn tick(config: &mut LodConfig, average_fps: f32) -> QualityAdjustment {
    let target = config.performance_target;
    if average_fps < target * SHRINK_BAND {
        reduce_quality(config);
        QualityAdjustment::Reduced
    } else if average_fps > target * GROW_BAND {
        raise_quality(config);
        QualityAdjustment::Raised
    } else {
        QualityAdjustment::Unchanged
    }
}

/// Shrink the render distance and per-tier budgets by 10%, clamped to
/// their floors.
pub fn reduce_quality(config: &mut LodConfig) {
    config.max_render_distance = (config.max_render_distance * 0.9).max(MIN_RENDER_DISTANCE);
    for level in &mut config.levels {
        // f64 so integer truncation happens on an exact product.
        level.max_artifacts = ((level.max_artifacts as f64 * 0.9) as usize).max(MIN_LEVEL_BUDGET);
    }
    log::debug!(
        "adaptive quality: reduced, render distance now {:.1}",
        config.max_render_distance
    );
}

/// Grow the render distance and per-tier budgets by 5%, clamped to their
/// ceilings.
pub fn raise_quality(config: &mut LodConfig) {
    config.max_render_distance = (config.max_render_distance * 1.05).min(MAX_RENDER_DISTANCE);
    for level in &mut config.levels {
        level.max_artifacts = ((level.max_artifacts as f64 * 1.05) as usize).min(MAX_LEVEL_BUDGET);
    }
    log::debug!(
        "adaptive quality: raised, render distance now {:.1}",
        config.max_render_distance
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    /// avgFPS = 40 against target 60 (ratio 0.667 < 0.8): one reduction
    /// multiplies the render distance by 0.9 and truncates each budget.
    #[test]
    fn test_single_reduction_matches_control_law() {
        let mut config = LodConfig::default();
        config.max_render_distance = 150.0;
        let old_budgets: Vec<usize> = config.levels.iter().map(|l| l.max_artifacts).collect();

        let adjustment = tick(&mut config, 40.0);

        assert_eq!(adjustment, QualityAdjustment::Reduced);
        assert!((config.max_render_distance - 135.0).abs() < 1e-3);
        for (level, old) in config.levels.iter().zip(old_budgets) {
            assert_eq!(level.max_artifacts, ((old as f64 * 0.9) as usize).max(10));
        }
    }

    /// Repeated shrink ticks strictly decrease the render distance until
    /// the floor, then hold it constant.
    #[test]
    fn test_shrink_converges_to_floor_then_holds() {
        let mut config = LodConfig::default();
        config.max_render_distance = 200.0;

        let mut previous = config.max_render_distance;
        let mut reached_floor = false;
        for _ in 0..100 {
            tick(&mut config, 10.0);
            if reached_floor {
                assert_eq!(config.max_render_distance, MIN_RENDER_DISTANCE);
            } else if config.max_render_distance == MIN_RENDER_DISTANCE {
                reached_floor = true;
            } else {
                assert!(
                    config.max_render_distance < previous,
                    "render distance must strictly decrease until the floor"
                );
            }
            previous = config.max_render_distance;
        }
        assert!(reached_floor, "floor should be reached within 100 ticks");
    }

    /// Budgets never shrink below their floor.
    #[test]
    fn test_budget_floor() {
        let mut config = LodConfig::default();
        for _ in 0..200 {
            reduce_quality(&mut config);
        }
        for level in &config.levels {
            assert_eq!(level.max_artifacts, MIN_LEVEL_BUDGET);
        }
    }

    /// Growth stops at the ceilings.
    #[test]
    fn test_growth_clamps_to_ceilings() {
        let mut config = LodConfig::default();
        config.max_render_distance = 195.0;
        for _ in 0..100 {
            tick(&mut config, 120.0);
        }
        assert_eq!(config.max_render_distance, MAX_RENDER_DISTANCE);
        for level in &config.levels {
            assert!(level.max_artifacts <= MAX_LEVEL_BUDGET);
        }
    }

    /// Average fps inside the hysteresis band leaves the config untouched.
    #[test]
    fn test_hysteresis_band_makes_no_change() {
        let mut config = LodConfig::default();
        let before = config.clone();

        // 0.8 * 60 = 48 and 1.2 * 60 = 72 bound the band.
        assert_eq!(tick(&mut config, 48.0), QualityAdjustment::Unchanged);
        assert_eq!(tick(&mut config, 60.0), QualityAdjustment::Unchanged);
        assert_eq!(tick(&mut config, 72.0), QualityAdjustment::Unchanged);
        assert_eq!(config, before);
    }

    /// Shrink is faster than growth, so a dip and recovery of equal length
    /// nets out below the starting quality.
    #[test]
    fn test_shrink_outpaces_growth() {
        let mut config = LodConfig::default();
        config.max_render_distance = 150.0;
        for _ in 0..5 {
            tick(&mut config, 10.0);
        }
        for _ in 0..5 {
            tick(&mut config, 120.0);
        }
        assert!(config.max_render_distance < 150.0);
    }
}
