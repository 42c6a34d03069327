//! Error handling for MapSketch
//!
//! Provides error types for the drawing engine:
//! - Draw errors (user-visible rejections of a drawn shape)
//! - Geometry errors (failures inside the geometry backend)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::types::ShapeKind;
use thiserror::Error;

/// Draw error type
///
/// A drawn shape was rejected. The message of every variant is what the
/// user sees in the error banner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawError {
    /// The candidate lies entirely inside an accepted shape
    #[error("Cannot nest inside an existing shape.")]
    NestedInside {
        /// Id of the accepted feature that encloses the candidate.
        existing_id: String,
    },

    /// The candidate entirely encloses an accepted shape
    #[error("Cannot enclose an existing shape.")]
    EnclosesExisting {
        /// Id of the accepted feature inside the candidate.
        existing_id: String,
    },

    /// Nothing remained after subtracting the accepted shapes
    #[error("Shape completely overlaps existing shape.")]
    TotalOverlap,

    /// The geometry backend failed and the policy is to reject
    #[error("Shape could not be checked against existing shapes.")]
    GeometryFailure {
        /// Description of the backend failure.
        reason: String,
    },

    /// The shape has no area
    #[error("{kind} has no area.")]
    DegenerateShape {
        /// The kind that was drawn.
        kind: ShapeKind,
    },

    /// Materialization was asked for with too few points
    #[error("{kind} needs at least {required} points, got {actual}.")]
    NotEnoughPoints {
        /// The kind that was drawn.
        kind: ShapeKind,
        /// Minimum points for the kind.
        required: usize,
        /// Points actually captured.
        actual: usize,
    },

    /// The per-kind cap has been reached
    #[error("Limit reached ({max})")]
    LimitReached {
        /// The kind that was selected.
        kind: ShapeKind,
        /// The configured cap for the kind.
        max: usize,
    },
}

impl DrawError {
    /// Check if this rejection came from an enclosure violation
    pub fn is_enclosure(&self) -> bool {
        matches!(
            self,
            DrawError::NestedInside { .. } | DrawError::EnclosesExisting { .. }
        )
    }
}

/// Geometry error type
///
/// Represents a failure of a geometric primitive (predicate or boolean
/// operation) rather than a rule violation by the drawn shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A coordinate was NaN or infinite
    #[error("Non-finite coordinate in {context}")]
    NonFinite {
        /// Where the coordinate was found.
        context: String,
    },

    /// The backend panicked while evaluating a primitive
    #[error("Geometry operation '{operation}' failed: {message}")]
    OperationFailed {
        /// The primitive that failed.
        operation: String,
        /// The panic payload, if it was a string.
        message: String,
    },
}

/// Main error type for MapSketch
///
/// A unified error type that can represent any error from the library crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Draw error
    #[error(transparent)]
    Draw(#[from] DrawError),

    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a user-visible draw rejection
    pub fn is_draw_error(&self) -> bool {
        matches!(self, Error::Draw(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
