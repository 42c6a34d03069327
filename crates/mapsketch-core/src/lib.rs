//! # MapSketch Core
//!
//! Core types and error definitions shared by the MapSketch crates:
//! geographic points, the closed set of drawable shape kinds, and the
//! error taxonomy used when a drawn shape is rejected.

pub mod error;
pub mod types;

pub use error::{DrawError, Error, GeometryError, Result};
pub use types::{LatLng, ShapeKind};
