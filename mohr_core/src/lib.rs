//! # mohr_core - Stress Transformation Engine
//!
//! `mohr_core` computes Mohr's circle for a 2D stress state and the rigid-body
//! rotation of a plane element. Every input and output type is
//! JSON-serializable so the results can be printed, exported, or handed to
//! another tool without extra glue.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use mohr_core::calculations::{analyze, AnalysisInput};
//! use mohr_core::calculations::mohr_circle::StressState;
//!
//! let input = AnalysisInput::new(StressState::new(100.0, 20.0, 30.0), 0.0);
//! let report = analyze(&input).unwrap();
//!
//! assert!((report.mohr_circle.circle.radius - 50.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Mohr's circle and square rotation calculations
//! - [`geometry`] - Points and 2D rotations
//! - [`input`] - Parsing of the scalar inputs
//! - [`settings`] - TOML configuration
//! - [`units`] - Angle and stress unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod geometry;
pub mod input;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{analyze, AnalysisInput, AnalysisReport};
pub use errors::{CalcError, CalcResult};
pub use geometry::Point;
pub use settings::Settings;
