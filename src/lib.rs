//! # JointKit
//!
//! Joint geometry and kerf-compensated toolpaths for laser-cut panels:
//! - Stitches loose contour fragments into closed loops
//! - Sorts loops into faces (perimeter plus cuts)
//! - Places parametric joints (box, tab-and-slot, interlocking, bolt, flat)
//!   on face edges
//! - Combines faces with joint geometry and splits the kerf-offset result
//!   into visible and hidden toolpaths
//!
//! ## Architecture
//!
//! JointKit is organized as a workspace with multiple crates:
//!
//! 1. **jointkit-core** - Path model, panel model, joint parameters, lookup tables
//! 2. **jointkit-settings** - Pipeline configuration and persistence
//! 3. **jointkit-camtools** - Joint generators and the placement engine
//! 4. **jointkit-designer** - Stitching, topology, boolean/offset, kerf, pipeline
//! 5. **jointkit** - Command line binary that integrates all crates

pub use jointkit_camtools as camtools;
pub use jointkit_core as core;
pub use jointkit_designer as designer;
pub use jointkit_settings as settings;

pub use jointkit_core::{
    Bucket, EdgeRef, Error, Face, FitClass, Joint, JointKind, JointParameters, JointSide, Loop,
    Model, Path, Point, Result, Segment, Stage,
};

pub use jointkit_camtools::{EdgeFrame, JointFactory, JointGeometry, JointTemplate};

pub use jointkit_designer::{
    extract_edges, import_contours, import_file, process_design, DesignerError, EdgeInfo,
    Pipeline,
};

pub use jointkit_settings::{Config, SettingsPersistence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout free for command results
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
