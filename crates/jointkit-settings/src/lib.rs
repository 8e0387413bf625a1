//! JointKit Settings Crate
//!
//! Handles pipeline configuration and settings persistence.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{
    Config, ContainmentStrategy, EndpointMatch, KerfSettings, SamplingSettings, StitchSettings,
    StyleSettings, TopologySettings, DEFAULT_PATH_STYLE,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
