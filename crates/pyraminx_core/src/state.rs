use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    Color, Direction, Face, Facelet, PerFacelet, PermutationTables, Position, PyraminxError,
    ScrambleParams, ScrambledPyraminx, Section, Twist,
};

/// Color of every facelet on the puzzle.
///
/// The only way to change the colors is to apply twists, so every state is
/// reachable from the solved state.
#[derive(Clone)]
pub struct PyraminxState {
    tables: Arc<PermutationTables>,
    colors: PerFacelet<Color>,
    solved: bool,
}

impl fmt::Debug for PyraminxState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PyraminxState")
            .field("colors", &self.colors)
            .field("solved", &self.solved)
            .finish_non_exhaustive()
    }
}

impl PartialEq for PyraminxState {
    fn eq(&self, other: &Self) -> bool {
        self.colors == other.colors
    }
}
impl Eq for PyraminxState {}

impl Default for PyraminxState {
    fn default() -> Self {
        Self::new()
    }
}

impl PyraminxState {
    /// Constructs a solved puzzle using the process-wide permutation tables.
    pub fn new() -> Self {
        Self::with_tables(PermutationTables::shared())
    }

    /// Constructs a solved puzzle using the given permutation tables.
    pub fn with_tables(tables: Arc<PermutationTables>) -> Self {
        Self {
            tables,
            colors: std::array::from_fn(|i| Color::ALL[i / crate::POSITIONS_PER_FACE]),
            solved: true,
        }
    }

    /// Constructs a scrambled puzzle.
    pub fn new_scrambled(params: ScrambleParams) -> ScrambledPyraminx {
        let twists = params.twists();
        let mut state = Self::new();
        state.apply_twists(twists.iter().copied());
        ScrambledPyraminx {
            params,
            twists,
            state,
        }
    }

    /// Returns the permutation tables used by the puzzle.
    pub fn tables(&self) -> &Arc<PermutationTables> {
        &self.tables
    }

    /// Twists `section` in `direction`.
    pub fn apply_rotation(&mut self, section: Section, direction: Direction) {
        let table = self.tables.table(section, direction);
        let prev = self.colors;
        for (color, source) in self.colors.iter_mut().zip(table) {
            *color = prev[source.index()];
        }
        self.solved = compute_solved(&self.colors);
    }

    /// Applies a twist.
    pub fn apply_twist(&mut self, twist: Twist) {
        self.apply_rotation(twist.section, twist.direction);
    }

    /// Applies a sequence of twists in order.
    pub fn apply_twists(&mut self, twists: impl IntoIterator<Item = Twist>) {
        for twist in twists {
            self.apply_twist(twist);
        }
    }

    /// Returns a copy of the puzzle with a twist applied.
    #[must_use]
    pub fn twisted(&self, twist: Twist) -> Self {
        let mut ret = self.clone();
        ret.apply_twist(twist);
        ret
    }

    /// Returns the color at `position` on `face`.
    pub fn get_color(&self, face: Face, position: Position) -> Result<Color, PyraminxError> {
        Ok(self.color(Facelet::new(face, position)?))
    }

    /// Returns the color of a facelet.
    pub fn color(&self, facelet: Facelet) -> Color {
        self.colors[facelet.index()]
    }

    /// Returns the color at a position, where both face and position are
    /// given by name (such as `"LRB"` and `"Ll"`).
    pub fn get_color_by_name(&self, face: &str, position: &str) -> Result<Color, PyraminxError> {
        let face: Face = face.parse()?;
        self.get_color(face, face.parse_position(position)?)
    }

    /// Returns the face and position whose color will land on `position` of
    /// `face` if `section` is twisted in `direction`.
    pub fn get_from_face_position(
        &self,
        section: Section,
        direction: Direction,
        face: Face,
        position: Position,
    ) -> Result<(Face, Position), PyraminxError> {
        let facelet = Facelet::new(face, position)?;
        let source = self.tables.table(section, direction)[facelet.index()];
        Ok((source.face(), source.position()))
    }

    /// Returns the color that will land on `position` of `face` if `section`
    /// is twisted in `direction`, without twisting it.
    pub fn get_from_color(
        &self,
        section: Section,
        direction: Direction,
        face: Face,
        position: Position,
    ) -> Result<Color, PyraminxError> {
        let (face, position) = self.get_from_face_position(section, direction, face, position)?;
        self.get_color(face, position)
    }

    /// Returns whether every face shows a single color.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Returns the color of every facelet, indexed by [`Facelet::index()`].
    pub fn color_assignment(&self) -> &PerFacelet<Color> {
        &self.colors
    }

    /// Returns an iterator over every facelet on the puzzle and its color.
    pub fn colors(&self) -> impl Iterator<Item = (Face, Position, Color)> + '_ {
        Facelet::iter().map(|f| (f.face(), f.position(), self.color(f)))
    }

    /// Returns the colors on a face, in the order of [`Face::positions()`].
    pub fn face_colors(&self, face: Face) -> [Color; crate::POSITIONS_PER_FACE] {
        let start = face.index() * crate::POSITIONS_PER_FACE;
        std::array::from_fn(|i| self.colors[start + i])
    }

    /// Returns a serializable view of the puzzle.
    pub fn snapshot(&self) -> StateSnapshot {
        let faces = Face::ALL
            .into_iter()
            .map(|face| {
                let positions = face
                    .positions()
                    .into_iter()
                    .zip(self.face_colors(face))
                    .map(|(position, color)| (position.to_string(), color))
                    .collect();
                (face.to_string(), positions)
            })
            .collect();
        StateSnapshot {
            solved: self.solved,
            faces,
        }
    }
}

fn compute_solved(colors: &PerFacelet<Color>) -> bool {
    colors
        .chunks_exact(crate::POSITIONS_PER_FACE)
        .all(|face| face.iter().all(|&c| c == face[0]))
}

/// Serializable view of a puzzle state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// Whether the puzzle is solved.
    pub solved: bool,
    /// Color of each position, keyed by face name and then position name.
    pub faces: IndexMap<String, IndexMap<String, Color>>,
}
