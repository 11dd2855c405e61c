//! Overlap layout and focus navigation for calendar day/week grids.
//!
//! - `layout` assigns each event a column within its overlap cluster
//! - `geometry` turns columns into pixel rectangles
//! - `navigation` links selected events in four directions and picks the one
//!   to focus first
//!
//! Everything here is synchronous and side-effect free apart from `settings`,
//! which reads an optional config file.

pub mod constants;
pub mod error;
pub mod event;
pub mod geometry;
pub mod julian;
pub mod layout;
pub mod navigation;
pub mod selection;
pub mod settings;
pub mod window;

pub use error::{DayGridError, DayGridResult};
pub use event::{EventId, EventRecord, EventSpan, layout_order};
pub use geometry::{EventGeometry, PositionedEvent, Rect};
pub use layout::{LayoutReport, compute_positions};
pub use navigation::{
    Direction, NavigationGraph, NavigationOutcome, Neighbors, PreviousSelection, SelectionContext,
    build_navigation,
};
pub use selection::{closest_event, selected_events};
pub use settings::LayoutSettings;
pub use window::EventWindow;
