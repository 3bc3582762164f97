//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level scene engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Level-of-detail and culling settings.
    pub lod: LodConfig,
    /// Layout engine settings.
    pub layout: LayoutConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// A single level-of-detail tier, selected by camera distance.
///
/// Tiers are ordered and should tile `[0, max_render_distance)` without
/// gaps; the last tier acts as the catch-all fallback for any distance
/// that matches no range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LodLevel {
    /// Display name, e.g. "High Detail".
    pub name: String,
    /// Inclusive lower distance bound.
    pub min_distance: f32,
    /// Exclusive upper distance bound.
    pub max_distance: f32,
    /// Geometry detail factor in `[0, 1]` handed to the renderer.
    pub geometry_complexity: f32,
    /// Whether node labels may be drawn at this tier.
    pub show_labels: bool,
    /// Whether detail panels may be drawn at this tier.
    pub show_details: bool,
    /// Render budget: at most this many artifacts drawn at this tier per frame.
    pub max_artifacts: usize,
    /// Whether frustum culling applies at this tier.
    pub culling_enabled: bool,
}

impl Default for LodLevel {
    /// A catch-all tier covering every distance at minimal detail.
    fn default() -> Self {
        Self {
            name: "Minimal".to_string(),
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            geometry_complexity: 0.1,
            show_labels: false,
            show_details: false,
            max_artifacts: 1000,
            culling_enabled: true,
        }
    }
}

/// Level-of-detail and culling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LodConfig {
    /// Ordered distance tiers. The last entry is the catch-all fallback.
    pub levels: Vec<LodLevel>,
    /// Closed-loop quality control driven by the measured frame rate.
    pub adaptive_quality: bool,
    /// Target frame rate for the adaptive controller.
    pub performance_target: f32,
    /// Artifacts beyond this camera distance are never rendered.
    pub max_render_distance: f32,
    /// Test artifact positions against the camera frustum each frame.
    pub frustum_culling: bool,
    /// Occlusion culling flag. Carried in config; the frame planner has no
    /// depth source and currently ignores it.
    pub occlusion_culling: bool,
    /// Artifacts with complexity below this value are eligible for
    /// probabilistic thinning when the frame rate is below target.
    pub thinning_complexity_threshold: f32,
}

impl Default for LodConfig {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            adaptive_quality: true,
            performance_target: 60.0,
            max_render_distance: 200.0,
            frustum_culling: true,
            occlusion_culling: false,
            thinning_complexity_threshold: 5.0,
        }
    }
}

/// Default tier ladder: High Detail [0, 25), Medium Detail [25, 75),
/// Low Detail [75, 150), Minimal [150, inf).
fn default_levels() -> Vec<LodLevel> {
    vec![
        LodLevel {
            name: "High Detail".to_string(),
            min_distance: 0.0,
            max_distance: 25.0,
            geometry_complexity: 1.0,
            show_labels: true,
            show_details: true,
            max_artifacts: 100,
            culling_enabled: true,
        },
        LodLevel {
            name: "Medium Detail".to_string(),
            min_distance: 25.0,
            max_distance: 75.0,
            geometry_complexity: 0.6,
            show_labels: true,
            show_details: false,
            max_artifacts: 300,
            culling_enabled: true,
        },
        LodLevel {
            name: "Low Detail".to_string(),
            min_distance: 75.0,
            max_distance: 150.0,
            geometry_complexity: 0.3,
            show_labels: false,
            show_details: false,
            max_artifacts: 500,
            culling_enabled: true,
        },
        LodLevel {
            name: "Minimal".to_string(),
            min_distance: 150.0,
            max_distance: f32::INFINITY,
            geometry_complexity: 0.1,
            show_labels: false,
            show_details: false,
            max_artifacts: 1000,
            culling_enabled: true,
        },
    ]
}

/// Spatial layout strategy for artifact positioning.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LayoutAlgorithm {
    /// Rings stacked by dependency depth.
    Hierarchical,
    /// Iterative repulsion/attraction simulation.
    #[default]
    ForceDirected,
    /// A single ring with slight height variation.
    Circular,
    /// Row-major grid centered on the origin.
    Grid,
    /// Directory-based clusters arranged on a ring.
    Clustered,
}

/// Layout engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Positioning strategy.
    pub algorithm: LayoutAlgorithm,
    /// Base spacing between artifacts in world units.
    pub spacing: f32,
    /// Radius of the ring on which cluster centers are placed.
    pub cluster_radius: f32,
    /// Attraction strength along dependency edges.
    pub force_strength: f32,
    /// Number of force simulation steps per layout pass.
    pub iterations: usize,
    /// Strength of the origin-seeking force.
    pub center_attraction: f32,
    /// Pairwise repulsion strength.
    pub repulsion_strength: f32,
    /// Seed for layout randomness (initial placement, cluster jitter).
    pub seed: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            algorithm: LayoutAlgorithm::default(),
            spacing: 3.0,
            cluster_radius: 20.0,
            force_strength: 0.05,
            iterations: 100,
            center_attraction: 0.01,
            repulsion_strength: 50.0,
            seed: 0,
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl SceneConfig {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("vantage.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: SceneConfig = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = SceneConfig::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `vantage.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("vantage.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("vantage.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: SceneConfig = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
