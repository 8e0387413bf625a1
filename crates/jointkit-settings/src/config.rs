//! Configuration for JointKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Sampling (curve sample count, offset arc resolution)
//! - Stitching (endpoint matching strategy)
//! - Topology (containment strategy)
//! - Kerf widths for the visible and hidden passes
//! - Rendering styles per stage

use crate::error::{ConfigError, SettingsError, SettingsResult};
use jointkit_core::{Stage, DEFAULT_CURVE_SAMPLES};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Style used by the source drawings for plain outlines.
pub const DEFAULT_PATH_STYLE: &str =
    "fill:none;stroke:#231f20;stroke-miterlimit:10;stroke-width:0.25px";

/// Curve and arc sampling settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingSettings {
    /// Parameter steps per curved segment
    pub curve_samples: usize,
    /// Points per round join produced by the offset engine
    pub offset_arc_segments: usize,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            curve_samples: DEFAULT_CURVE_SAMPLES,
            offset_arc_segments: 8,
        }
    }
}

/// How the stitcher decides two endpoints meet
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EndpointMatch {
    /// Coordinates must be bit-for-bit equal
    #[default]
    Exact,
    /// Coordinates within `epsilon` of each other match and are snapped
    Tolerance { epsilon: f64 },
}

/// Path stitching settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StitchSettings {
    pub endpoint_match: EndpointMatch,
}

/// How loop containment is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainmentStrategy {
    /// One vertex strictly inside is enough
    #[default]
    AnyVertex,
    /// No vertex outside and at least one strictly inside
    AllVertices,
}

/// Face classification settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologySettings {
    pub containment: ContainmentStrategy,
}

/// Kerf widths in mm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KerfSettings {
    /// Kerf of the slow pass over visible edges
    pub slow_kerf: f64,
    /// Kerf of the fast pass over hidden edges
    pub fast_kerf: f64,
}

impl KerfSettings {
    /// Slow kerf as given, fast kerf 20% wider.
    pub fn from_kerf(kerf: f64) -> Self {
        Self {
            slow_kerf: kerf,
            fast_kerf: kerf * 1.2,
        }
    }
}

impl Default for KerfSettings {
    fn default() -> Self {
        Self::from_kerf(0.1)
    }
}

/// Rendering style per stage bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub perimeter: String,
    pub cuts: String,
    pub original: String,
    pub processed: String,
    pub visible: String,
    pub hidden: String,
}

impl StyleSettings {
    pub fn style_for(&self, stage: Stage) -> &str {
        match stage {
            Stage::Perimeter => &self.perimeter,
            Stage::Cuts => &self.cuts,
            Stage::Original => &self.original,
            Stage::Processed => &self.processed,
            Stage::Visible => &self.visible,
            Stage::Hidden => &self.hidden,
        }
    }
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            perimeter: DEFAULT_PATH_STYLE.to_string(),
            cuts: DEFAULT_PATH_STYLE.to_string(),
            original: DEFAULT_PATH_STYLE.to_string(),
            processed: "fill:none;stroke:#0000ff;stroke-miterlimit:10;stroke-width:0.25px"
                .to_string(),
            visible: "fill:none;stroke:#ff0000;stroke-miterlimit:10;stroke-width:0.25px"
                .to_string(),
            hidden: "fill:none;stroke:#00a000;stroke-miterlimit:10;stroke-width:0.25px"
                .to_string(),
        }
    }
}

/// Complete configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sampling: SamplingSettings,
    pub stitching: StitchSettings,
    pub topology: TopologySettings,
    pub kerf: KerfSettings,
    pub styles: StyleSettings,
}

impl Config {
    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path).as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path).as_deref() {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.sampling.curve_samples == 0 {
            return Err(out_of_range("sampling.curve_samples", 0));
        }

        if self.sampling.offset_arc_segments == 0 {
            return Err(out_of_range("sampling.offset_arc_segments", 0));
        }

        if let EndpointMatch::Tolerance { epsilon } = self.stitching.endpoint_match {
            if !(epsilon.is_finite() && epsilon > 0.0) {
                return Err(invalid(
                    "stitching.endpoint_match.epsilon",
                    "must be a positive distance",
                ));
            }
        }

        if !(self.kerf.slow_kerf.is_finite() && self.kerf.slow_kerf > 0.0) {
            return Err(invalid("kerf.slow_kerf", "must be a positive distance"));
        }

        if !(self.kerf.fast_kerf.is_finite() && self.kerf.fast_kerf > 0.0) {
            return Err(invalid("kerf.fast_kerf", "must be a positive distance"));
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn out_of_range(key: &str, value: impl ToString) -> SettingsError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
    .into()
}

fn invalid(key: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidSetting {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
