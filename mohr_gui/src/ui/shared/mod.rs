//! Shared UI components used by the result views
//!
//! Contains:
//! - `plot` - Equal-aspect mapping from plot units to canvas pixels
//! - `diagrams` - Mohr's circle and element rotation canvas programs

pub mod diagrams;
pub mod plot;
