//! Overlap layout: column assignment for concurrent events.

mod column_mask;
mod engine;

pub use column_mask::ColumnMask;
pub use engine::{LayoutReport, compute_positions};
