//! Fixed position space of the puzzle: axes, faces, and the nine positions on
//! each face.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::{PyraminxError, SECTION_COUNT, Section, Variant};

/// Number of faces on the puzzle.
pub const FACE_COUNT: usize = 4;
/// Number of positions on each face.
pub const POSITIONS_PER_FACE: usize = 9;
/// Number of (face, position) pairs on the puzzle.
pub const FACELET_COUNT: usize = FACE_COUNT * POSITIONS_PER_FACE;

/// Value for every facelet, indexed by [`Facelet::index()`].
pub type PerFacelet<T> = [T; FACELET_COUNT];

/// Corner of the tetrahedron, which is also the axis of the twists at that
/// corner.
#[derive(
    Serialize, Deserialize, Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Axis {
    /// Up (top corner)
    U,
    /// Left
    L,
    /// Right
    R,
    /// Back
    B,
}

impl Axis {
    /// All axes, in the order used for indexing.
    pub const ALL: [Axis; 4] = [Axis::U, Axis::L, Axis::R, Axis::B];

    /// Returns the index of the axis in [`Axis::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the uppercase letter naming the axis.
    pub const fn letter(self) -> char {
        match self {
            Axis::U => 'U',
            Axis::L => 'L',
            Axis::R => 'R',
            Axis::B => 'B',
        }
    }

    /// Returns the axis named by an uppercase letter.
    pub const fn from_letter(c: char) -> Option<Self> {
        match c {
            'U' => Some(Axis::U),
            'L' => Some(Axis::L),
            'R' => Some(Axis::R),
            'B' => Some(Axis::B),
            _ => None,
        }
    }

    /// Returns the face opposite the corner, which is the only face that
    /// twists on this axis never touch.
    pub const fn opposite_face(self) -> Face {
        match self {
            Axis::U => Face::Lrb,
            Axis::L => Face::Rbu,
            Axis::R => Face::Bul,
            Axis::B => Face::Ulr,
        }
    }
}

/// Triangular face of the puzzle, named after its three corners.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Display,
    AsRefStr,
    EnumIter,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Face {
    /// Bottom face, opposite `U`.
    #[strum(serialize = "LRB")]
    #[serde(rename = "LRB")]
    Lrb,
    /// Face opposite `R`.
    #[strum(serialize = "BUL")]
    #[serde(rename = "BUL")]
    Bul,
    /// Face opposite `B`.
    #[strum(serialize = "ULR")]
    #[serde(rename = "ULR")]
    Ulr,
    /// Face opposite `L`.
    #[strum(serialize = "RBU")]
    #[serde(rename = "RBU")]
    Rbu,
}

impl FromStr for Face {
    type Err = PyraminxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Face::ALL
            .into_iter()
            .find(|face| face.as_ref() == s)
            .ok_or_else(|| PyraminxError::InvalidFace(s.to_owned()))
    }
}

impl Face {
    /// All faces, in the order used for indexing.
    pub const ALL: [Face; FACE_COUNT] = [Face::Lrb, Face::Bul, Face::Ulr, Face::Rbu];

    /// Returns the index of the face in [`Face::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the three corners of the face, in the order they appear in its
    /// name.
    pub const fn axes(self) -> [Axis; 3] {
        match self {
            Face::Lrb => [Axis::L, Axis::R, Axis::B],
            Face::Bul => [Axis::B, Axis::U, Axis::L],
            Face::Ulr => [Axis::U, Axis::L, Axis::R],
            Face::Rbu => [Axis::R, Axis::B, Axis::U],
        }
    }

    /// Returns the corner not on the face.
    pub const fn opposite_axis(self) -> Axis {
        match self {
            Face::Lrb => Axis::U,
            Face::Bul => Axis::R,
            Face::Ulr => Axis::B,
            Face::Rbu => Axis::L,
        }
    }

    /// Returns whether `axis` is one of the corners of the face.
    pub fn contains_axis(self, axis: Axis) -> bool {
        self.opposite_axis() != axis
    }

    /// Returns the nine positions on the face: three centers, three vertices,
    /// then three edges.
    ///
    /// Edges are written using the cyclic order of the face name, so `LRB`
    /// has `LR`, `RB`, and `BL`.
    pub const fn positions(self) -> [Position; POSITIONS_PER_FACE] {
        let [a, b, c] = self.axes();
        [
            Position::Center(a),
            Position::Center(b),
            Position::Center(c),
            Position::Vertex(a),
            Position::Vertex(b),
            Position::Vertex(c),
            Position::Edge(a, b),
            Position::Edge(b, c),
            Position::Edge(c, a),
        ]
    }

    /// Returns whether `position` is one of the nine positions on the face.
    pub fn is_valid_position(self, position: Position) -> bool {
        self.positions().contains(&position)
    }

    /// Returns the index of `position` in [`Face::positions()`].
    pub fn slot_of(self, position: Position) -> Result<usize, PyraminxError> {
        self.positions()
            .iter()
            .position(|&p| p == position)
            .ok_or_else(|| PyraminxError::InvalidPosition {
                face: self,
                position: position.to_string(),
            })
    }

    /// Parses the name of a position on this face, such as `L`, `Ll`, or
    /// `BL`.
    pub fn parse_position(self, s: &str) -> Result<Position, PyraminxError> {
        self.positions()
            .into_iter()
            .find(|p| p.to_string() == s)
            .ok_or_else(|| PyraminxError::InvalidPosition {
                face: self,
                position: s.to_owned(),
            })
    }
}

/// Kind of position on a face.
#[derive(Serialize, Deserialize, Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PositionKind {
    /// Facelet of an axial center piece.
    Center,
    /// Facelet of a tip.
    Vertex,
    /// Facelet of an edge piece.
    Edge,
}

/// Position on a face, named after the axes whose twists move it.
///
/// A position is only meaningful together with a face; see
/// [`Face::positions()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Position {
    /// Center facelet next to a corner. Written as the axis letter (`L`).
    Center(Axis),
    /// Tip facelet at a corner. Written as the axis letter followed by its
    /// lowercase form (`Ll`).
    Vertex(Axis),
    /// Edge facelet between two corners. Written as both axis letters (`LR`).
    Edge(Axis, Axis),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Position::Center(a) => write!(f, "{}", a.letter()),
            Position::Vertex(a) => write!(f, "{}{}", a.letter(), a.letter().to_ascii_lowercase()),
            Position::Edge(a, b) => write!(f, "{}{}", a.letter(), b.letter()),
        }
    }
}

impl Position {
    /// Returns the kind of position.
    pub const fn kind(self) -> PositionKind {
        match self {
            Position::Center(_) => PositionKind::Center,
            Position::Vertex(_) => PositionKind::Vertex,
            Position::Edge(_, _) => PositionKind::Edge,
        }
    }

    /// Returns whether the position is an edge.
    pub const fn is_edge(self) -> bool {
        matches!(self, Position::Edge(_, _))
    }

    /// Returns the set of sections whose twists move this position.
    ///
    /// A center is moved by the layer on its own axis, an edge by the layers
    /// on both of its axes, and a vertex by both the tip and the layer on its
    /// axis.
    pub fn affecting_sections(self) -> SectionSet {
        match self {
            Position::Center(a) => SectionSet::from(Section::layer(a)),
            Position::Vertex(a) => {
                SectionSet::from(Section::layer(a)) | SectionSet::from(Section::tip(a))
            }
            Position::Edge(a, b) => {
                SectionSet::from(Section::layer(a)) | SectionSet::from(Section::layer(b))
            }
        }
    }

    /// Returns whether a twist of `section` moves this position.
    pub fn is_affected_by(self, section: Section) -> bool {
        self.affecting_sections().contains(section.into())
    }
}

bitflags! {
    /// Set of sections.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct SectionSet: u8 {
        /// `U` layer
        const U_LAYER = 1 << 0;
        /// `u` tip
        const U_TIP = 1 << 1;
        /// `L` layer
        const L_LAYER = 1 << 2;
        /// `l` tip
        const L_TIP = 1 << 3;
        /// `R` layer
        const R_LAYER = 1 << 4;
        /// `r` tip
        const R_TIP = 1 << 5;
        /// `B` layer
        const B_LAYER = 1 << 6;
        /// `b` tip
        const B_TIP = 1 << 7;
    }
}

impl From<Section> for SectionSet {
    fn from(section: Section) -> Self {
        SectionSet::from_bits_retain(1 << section.index())
    }
}

impl SectionSet {
    /// Returns an iterator over the sections in the set, in the order of
    /// [`Section::ALL`].
    pub fn sections(self) -> impl Iterator<Item = Section> {
        Section::ALL
            .into_iter()
            .filter(move |&s| self.contains(s.into()))
    }

    /// Returns the set of sections of a particular variant.
    pub fn of_variant(variant: Variant) -> Self {
        Section::ALL
            .into_iter()
            .filter(|s| s.variant == variant)
            .map(SectionSet::from)
            .collect()
    }
}

const _: () = assert!(SECTION_COUNT <= u8::BITS as usize);

/// Index of a (face, position) pair in a color assignment.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Facelet(u8);

impl fmt::Debug for Facelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Facelet({self})")
    }
}

impl fmt::Display for Facelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.face(), self.position())
    }
}

impl Facelet {
    /// Returns the facelet at `position` on `face`, or an error if the
    /// position does not exist on that face.
    pub fn new(face: Face, position: Position) -> Result<Self, PyraminxError> {
        let slot = face.slot_of(position)?;
        Ok(Self((face.index() * POSITIONS_PER_FACE + slot) as u8))
    }

    /// Returns the facelet with the given index, or `None` if it is out of
    /// range.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < FACELET_COUNT).then(|| Self(index as u8))
    }

    /// Returns an iterator over all facelets, in index order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Facelet> + ExactSizeIterator {
        (0..FACELET_COUNT as u8).map(Self)
    }

    /// Returns the index of the facelet, in `0..FACELET_COUNT`.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the face that the facelet is on.
    pub const fn face(self) -> Face {
        Face::ALL[self.index() / POSITIONS_PER_FACE]
    }

    /// Returns the index of the position in [`Face::positions()`].
    pub const fn slot(self) -> usize {
        self.index() % POSITIONS_PER_FACE
    }

    /// Returns the position of the facelet on its face.
    pub const fn position(self) -> Position {
        self.face().positions()[self.slot()]
    }
}
