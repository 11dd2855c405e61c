//! Directional focus navigation between selected events.
//!
//! Neighbor links live in a [`NavigationGraph`] side-table keyed by event id,
//! rebuilt from scratch on every selection change.

mod builder;
mod direction;
mod graph;

pub use builder::{PreviousSelection, SelectionContext, build_navigation};
pub use direction::Direction;
pub use graph::{NavigationGraph, NavigationOutcome, Neighbors};
