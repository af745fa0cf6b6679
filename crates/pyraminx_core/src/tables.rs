//! Permutation tables describing where each facelet comes from after a twist.

use std::sync::Arc;

use crate::{
    Axis, Direction, FACELET_COUNT, Face, Facelet, PerFacelet, Position, SECTION_COUNT, Section,
    TableError, Twist,
};

lazy_static! {
    static ref SHARED_TABLES: Arc<PermutationTables> = Arc::new(
        PermutationTables::build().expect("error building built-in permutation tables")
    );
}

/// Faces containing each axis, in the order that a clockwise twist on that
/// axis carries facelets along.
///
/// After a clockwise twist, the facelets on each face come from the previous
/// face in the cycle. These come from the physical construction of the puzzle
/// and are not derived.
const fn face_cycle(axis: Axis) -> [Face; 3] {
    match axis {
        Axis::U => [Face::Ulr, Face::Rbu, Face::Bul],
        Axis::L => [Face::Lrb, Face::Ulr, Face::Bul],
        Axis::R => [Face::Rbu, Face::Ulr, Face::Lrb],
        Axis::B => [Face::Bul, Face::Rbu, Face::Lrb],
    }
}

const fn edge(a: Axis, b: Axis) -> Position {
    Position::Edge(a, b)
}

/// For each clockwise layer twist: `(face, edge, source_edge)` where
/// `source_edge` is on the face that `face` takes its facelets from.
///
/// Unlike centers and vertices, edges change names when they move to another
/// face. Counter-clockwise entries are derived by inverting these.
const CLOCKWISE_EDGE_SOURCES: [(Axis, [(Face, Position, Position); 6]); 4] = {
    use Axis::{B, L, R, U};
    [
        (U, [
            (Face::Ulr, edge(U, L), edge(B, U)),
            (Face::Ulr, edge(R, U), edge(U, L)),
            (Face::Rbu, edge(B, U), edge(R, U)),
            (Face::Rbu, edge(U, R), edge(U, L)),
            (Face::Bul, edge(B, U), edge(U, R)),
            (Face::Bul, edge(U, L), edge(B, U)),
        ]),
        (L, [
            (Face::Lrb, edge(L, R), edge(L, B)),
            (Face::Lrb, edge(B, L), edge(U, L)),
            (Face::Ulr, edge(U, L), edge(L, R)),
            (Face::Ulr, edge(L, R), edge(B, L)),
            (Face::Bul, edge(L, B), edge(U, L)),
            (Face::Bul, edge(U, L), edge(L, R)),
        ]),
        (R, [
            (Face::Rbu, edge(R, B), edge(L, R)),
            (Face::Rbu, edge(U, R), edge(R, B)),
            (Face::Ulr, edge(L, R), edge(U, R)),
            (Face::Ulr, edge(R, U), edge(R, B)),
            (Face::Lrb, edge(L, R), edge(R, U)),
            (Face::Lrb, edge(R, B), edge(L, R)),
        ]),
        (B, [
            (Face::Bul, edge(B, U), edge(B, L)),
            (Face::Bul, edge(L, B), edge(R, B)),
            (Face::Rbu, edge(B, U), edge(L, B)),
            (Face::Rbu, edge(R, B), edge(B, U)),
            (Face::Lrb, edge(B, L), edge(R, B)),
            (Face::Lrb, edge(R, B), edge(B, U)),
        ]),
    ]
};

/// Edge sources for one direction, per axis. `None` for facelets that are not
/// edges moved by that axis.
type EdgeSources = [PerFacelet<Option<Facelet>>; 4];

/// Immutable permutation tables for every twist.
///
/// Construct these once with [`PermutationTables::build()`] (or use the
/// process-wide [`PermutationTables::shared()`]) and share them between any
/// number of puzzle states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTables {
    /// Source facelet for every facelet, indexed by section and then
    /// direction.
    sources: [[PerFacelet<Facelet>; 2]; SECTION_COUNT],
    /// Edge sources, indexed by direction.
    edge_sources: [EdgeSources; 2],
}

impl PermutationTables {
    /// Returns tables shared by the whole process.
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED_TABLES)
    }

    /// Builds and validates the permutation tables.
    pub fn build() -> Result<Self, TableError> {
        let cw_edge_sources = clockwise_edge_sources()?;
        let ccw_edge_sources = invert_edge_sources(&cw_edge_sources);
        let edge_sources = [cw_edge_sources, ccw_edge_sources];

        let identity: PerFacelet<Facelet> = std::array::from_fn(facelet_at);
        let mut sources = [[identity; 2]; SECTION_COUNT];

        for section in Section::ALL {
            for direction in Direction::ALL {
                let twist = Twist::new(section, direction);
                let table = &mut sources[section.index()][direction.index()];
                for facelet in Facelet::iter() {
                    let position = facelet.position();
                    if !position.is_affected_by(section) {
                        continue;
                    }
                    table[facelet.index()] = if position.is_edge() {
                        edge_sources[direction.index()][section.axis.index()][facelet.index()]
                            .ok_or(TableError::MissingEdgeSource { twist, facelet })?
                    } else {
                        let from_face = Self::source_face(section, direction, facelet.face());
                        Facelet::new(from_face, position)
                            .map_err(|_| TableError::MissingSource { twist, facelet })?
                    };
                }
            }
        }

        let tables = Self {
            sources,
            edge_sources,
        };
        tables.validate()?;
        Ok(tables)
    }

    /// Returns the face whose facelets land on `face` after twisting
    /// `section` in `direction`.
    ///
    /// This is `face` itself if the twist does not touch it.
    pub fn source_face(section: Section, direction: Direction, face: Face) -> Face {
        let cycle = face_cycle(section.axis);
        match cycle.iter().position(|&f| f == face) {
            None => face,
            Some(i) => match direction {
                Direction::Clockwise => cycle[(i + 2) % 3],
                Direction::CounterClockwise => cycle[(i + 1) % 3],
            },
        }
    }

    /// Returns the edge position on the source face whose facelet lands on
    /// `position` of `face` after twisting `section` in `direction`, or `None`
    /// if `position` is not an edge moved by the twist.
    pub fn source_edge_position(
        &self,
        section: Section,
        direction: Direction,
        face: Face,
        position: Position,
    ) -> Option<Position> {
        if !position.is_affected_by(section) {
            return None;
        }
        let facelet = Facelet::new(face, position).ok()?;
        let source =
            self.edge_sources[direction.index()][section.axis.index()][facelet.index()]?;
        Some(source.position())
    }

    /// Returns the table for a twist: for every facelet, the facelet whose
    /// color lands on it.
    pub fn table(&self, section: Section, direction: Direction) -> &PerFacelet<Facelet> {
        &self.sources[section.index()][direction.index()]
    }

    /// Returns the facelet whose color lands on `facelet` after a twist.
    pub fn source(&self, twist: Twist, facelet: Facelet) -> Facelet {
        self.table(twist.section, twist.direction)[facelet.index()]
    }
}

fn facelet_at(index: usize) -> Facelet {
    Facelet::from_index(index).unwrap_or_else(|| unreachable!("facelet {index} out of range"))
}

fn clockwise_edge_sources() -> Result<EdgeSources, TableError> {
    let mut ret = [[None; FACELET_COUNT]; 4];
    for (axis, entries) in CLOCKWISE_EDGE_SOURCES {
        let section = Section::layer(axis);
        let twist = Twist::cw(section);
        let axis_sources = &mut ret[axis.index()];
        for (face, position, source_position) in entries {
            let source_face = PermutationTables::source_face(section, Direction::Clockwise, face);
            let bad_entry = |source| TableError::BadEdgeEntry { twist, source };
            let facelet = Facelet::new(face, position).map_err(bad_entry)?;
            let source = Facelet::new(source_face, source_position).map_err(bad_entry)?;
            if axis_sources[facelet.index()].replace(source).is_some() {
                return Err(TableError::DuplicateEdgeEntry { twist, facelet });
            }
        }
    }
    Ok(ret)
}

/// Swaps source and destination of every entry.
fn invert_edge_sources(sources: &EdgeSources) -> EdgeSources {
    let mut ret = [[None; FACELET_COUNT]; 4];
    for (axis_sources, inverted) in sources.iter().zip(&mut ret) {
        for (facelet, source) in Facelet::iter().zip(axis_sources) {
            if let Some(source) = source {
                inverted[source.index()] = Some(facelet);
            }
        }
    }
    ret
}
