//! Parser and serializer for Pyraminx twist sequences such as `L U' b r2`.
//!
//! Each twist is a section letter (`U L R B` for layers, `u l r b` for tips),
//! optionally followed by `2` to twist twice and then by `'` to twist
//! counter-clockwise. Twists are separated by whitespace.

use itertools::Itertools;
use pyraminx_core::Twist;

mod errors;
mod parse;

pub use errors::ParseError;
pub use parse::{parse_twist, parse_twists};

/// Formats a twist sequence in canonical notation, with a single space
/// between twists.
pub fn format_twists(twists: &[Twist]) -> String {
    twists.iter().join(" ")
}

/// Returns the sequence of twists that undoes `twists`.
pub fn invert_twists(twists: &[Twist]) -> Vec<Twist> {
    twists.iter().rev().map(|t| t.rev()).collect()
}
