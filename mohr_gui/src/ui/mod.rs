//! UI module for the Mohr GUI
//!
//! # Panel Structure
//! - `toolbar` - Header, JSON export and theme toggle
//! - `input_panel` - Left panel: stress and angle fields, stress unit
//! - `results_panel` - Right panel: tab strip, dispatches to result_* modules
//! - `status_bar` - Bottom status messages
//!
//! # Results Panel Children
//! - `result_mohr_circle` - Circle values, annotated points, circle diagram
//! - `result_square_rotation` - Vertex table and rotated element diagram
//!
//! # Shared Components
//! - `shared/plot` - Plot-to-canvas coordinate mapping
//! - `shared/diagrams` - Canvas programs for both diagrams

// Top-level panels
pub mod toolbar;
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;

// Results panel children
pub mod result_mohr_circle;
pub mod result_square_rotation;

pub mod shared;
