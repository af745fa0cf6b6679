use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::Face;

/// Sticker color.
///
/// There is one color per face; in the solved state every facelet on a face
/// has that face's color.
#[derive(
    Serialize, Deserialize, Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Color {
    /// Color of `LRB` when solved.
    Yellow,
    /// Color of `BUL` when solved.
    Pink,
    /// Color of `ULR` when solved.
    Green,
    /// Color of `RBU` when solved.
    Purple,
}

impl Color {
    /// All colors, in the same order as [`Face::ALL`].
    pub const ALL: [Color; 4] = [Color::Yellow, Color::Pink, Color::Green, Color::Purple];

    /// Returns the color of `face` in the solved state.
    pub const fn of_face(face: Face) -> Self {
        Self::ALL[face.index()]
    }

    /// Returns the face that has this color in the solved state.
    pub const fn home_face(self) -> Face {
        Face::ALL[self as usize]
    }
}
