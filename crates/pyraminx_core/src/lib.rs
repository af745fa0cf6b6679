//! Facelet state engine for the Pyraminx, a tetrahedral twisty puzzle.
//!
//! The puzzle has four triangular faces with nine facelets each. Every face is
//! named after the three corners (axes) that bound it, and every facelet is
//! named after the axes whose twists move it.
//!
//! # Example
//!
//! ```rust
//! use pyraminx_core::prelude::*;
//!
//! let mut state = PyraminxState::new();
//! state.apply_rotation(Section::layer(Axis::L), Direction::Clockwise);
//! assert!(!state.is_solved());
//! assert_eq!(
//!     Color::Pink,
//!     state.get_color(Face::Lrb, Position::Center(Axis::L)).unwrap(),
//! );
//!
//! state.apply_rotation(Section::layer(Axis::L), Direction::CounterClockwise);
//! assert!(state.is_solved());
//! ```

#[macro_use]
extern crate lazy_static;

#[cfg(test)]
use criterion as _; // Suppress unused crate warning (it's used in a benchmark)

mod color;
mod errors;
pub mod scheduler;
pub mod scramble;
pub mod solver;
mod state;
mod tables;
mod topology;
mod twist;
mod validate;

pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::errors::{PyraminxError, TableError};
    pub use crate::scheduler::{ScheduledTwist, TwistQueue, TwistTiming};
    pub use crate::scramble::{ScrambleParams, ScrambledPyraminx};
    pub use crate::solver::{MoveChooser, PreviewSolver, RandomSolver, SolveOutcome};
    pub use crate::state::{PyraminxState, StateSnapshot};
    pub use crate::tables::PermutationTables;
    pub use crate::topology::{
        Axis, FACE_COUNT, FACELET_COUNT, Face, Facelet, POSITIONS_PER_FACE, PerFacelet,
        Position, PositionKind, SectionSet,
    };
    pub use crate::twist::{Direction, SECTION_COUNT, Section, Twist, Variant};
}

/// Version string such as `pyraminx_core v1.2.3`.
pub const ENGINE_VERSION_STRING: &str =
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

#[cfg(test)]
mod tests;
