//! # MapSketch
//!
//! Draw circles, rectangles, polygons and lines on a geographic map and
//! export them as GeoJSON. Accepted area shapes never nest inside, enclose
//! or overlap one another.
//!
//! ## Architecture
//!
//! MapSketch is organized as a workspace with multiple crates:
//!
//! 1. **mapsketch-core** - Map points, shape kinds, error types
//! 2. **mapsketch-settings** - Shape caps, drawing, conflict and export settings
//! 3. **mapsketch-designer** - Capture, conflict resolution, collection, export
//! 4. **mapsketch** - Command line front end and script replay

pub mod script;

pub use mapsketch_designer as designer;

pub use mapsketch_core::{DrawError, Error, GeometryError, LatLng, Result, ShapeKind};

pub use mapsketch_designer::{
    DrawOutcome, DrawSession, DrawnFeature, FeatureCollection, FeatureGeometry, MapRenderer,
    RecordingRenderer, ToolbarEntry,
};

pub use mapsketch_settings::{Config, PrimitiveFailurePolicy, ShapeLimits};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Log output goes to stderr so exported JSON on stdout stays clean.
/// `RUST_LOG` overrides the default `info` level. With `json` set, events
/// are written as one JSON object per line.
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
