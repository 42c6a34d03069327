//! # MapSketch Designer
//!
//! Interactive drawing engine for shapes on a geographic map: circles,
//! rectangles, polygons and lines. Accepted area shapes never nest inside,
//! enclose, or overlap one another. The collection exports as a GeoJSON
//! `FeatureCollection`.
//!
//! ## Architecture
//!
//! ```text
//! DrawSession (input events)
//!   ├── CaptureMachine (Idle / Collecting)
//!   ├── PreviewSlot (single live preview layer)
//!   ├── materialize (points -> geometry)
//!   ├── ConflictResolver (enclosure check, overlap trimming)
//!   │     └── geometry (geo backend, panic guarded)
//!   ├── FeatureStore (append-only collection, caps)
//!   ├── ErrorBanner (auto-dismissing message)
//!   └── MapRenderer (layers drawn by the host)
//!
//! serialization (GeoJSON export)
//! toolbar (per-kind counters and hints)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mapsketch_core::{LatLng, ShapeKind};
//! use mapsketch_designer::{DrawSession, RecordingRenderer};
//!
//! let mut session = DrawSession::new(RecordingRenderer::new());
//! session.select_kind(Some(ShapeKind::Rectangle))?;
//! session.click(LatLng::new(51.50, -0.10));
//! session.click(LatLng::new(51.51, -0.08));
//! session.export_to_file("features.json")?;
//! ```

pub mod capture;
pub mod collection;
pub mod conflict;
pub mod draw_state;
pub mod geometry;
pub mod model;
pub mod notification;
pub mod preview;
pub mod renderer;
pub mod serialization;
pub mod toolbar;

pub use capture::{CaptureMachine, CaptureState, CaptureStep};
pub use collection::FeatureStore;
pub use conflict::ConflictResolver;
pub use draw_state::{DrawOutcome, DrawSession};
pub use model::{
    materialize, DrawnFeature, FeatureGeometry, FeatureProperties, GeoCircle, GeoLine,
    GeoPolygon, GeoRectangle, Materialized,
};
pub use notification::ErrorBanner;
pub use preview::{PreviewShape, PreviewSlot};
pub use renderer::{LayerContent, LayerStyle, MapRenderer, RecordingRenderer, RenderOp};
pub use serialization::{Feature, FeatureCollection, Geometry, Properties};
pub use toolbar::{status_hint, toolbar_entries, ToolbarEntry};
