//! Error types for daygrid.

use thiserror::Error;

use crate::event::EventId;

/// Errors that can occur when building an event window or loading settings.
///
/// The layout and navigation passes themselves never fail; everything here is
/// raised at the validating edges around them.
#[derive(Error, Debug)]
pub enum DayGridError {
    #[error("Invalid event {id}: {reason}")]
    InvalidEvent { id: EventId, reason: String },

    #[error("Event {id} at index {index} is out of layout order")]
    UnsortedWindow { id: EventId, index: usize },

    #[error("Duplicate event id {0}")]
    DuplicateEvent(EventId),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for daygrid operations.
pub type DayGridResult<T> = Result<T, DayGridError>;
