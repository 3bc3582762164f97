//! Configuration system for the Vantage scene engine.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports partial overrides applied between frames, hot-reload detection,
//! and forward/backward compatible serialization.

mod config;
mod error;
mod overrides;

pub use config::{
    DebugConfig, LayoutAlgorithm, LayoutConfig, LodConfig, LodLevel, SceneConfig,
};
pub use error::ConfigError;
pub use overrides::{LayoutOverrides, LodOverrides};
