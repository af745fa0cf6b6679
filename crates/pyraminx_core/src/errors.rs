use thiserror::Error;

use crate::{Face, Facelet, Twist};

/// Error produced by a query or mutation on the puzzle.
///
/// The puzzle state is never modified by a call that returns an error.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PyraminxError {
    /// Position is not one of the nine positions on the face.
    #[error("{position} is not a valid position for face {face}")]
    InvalidPosition {
        /// Face that was queried.
        face: Face,
        /// Position that was requested, as written by the caller.
        position: String,
    },
    /// Section is not one of `U u L l R r B b`.
    #[error("{0:?} is not a valid section; expected one of U u L l R r B b")]
    InvalidSection(String),
    /// Face is not one of `LRB`, `BUL`, `ULR`, `RBU`.
    #[error("{0:?} is not a valid face; expected one of LRB BUL ULR RBU")]
    InvalidFace(String),
    /// Direction is not clockwise or counter-clockwise.
    #[error("{0:?} is not a valid direction; expected cw or ccw")]
    InvalidDirection(String),
}

/// Error produced when permutation tables are malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableError {
    /// An entry in the hand-built edge table names a position that does not
    /// exist on its face.
    #[error("bad edge entry for twist {twist}: {source}")]
    BadEdgeEntry {
        /// Twist whose table contains the entry.
        twist: Twist,
        /// Underlying position error.
        source: PyraminxError,
    },
    /// Two entries in the hand-built edge table write the same facelet.
    #[error("edge table for twist {twist} writes {facelet} more than once")]
    DuplicateEdgeEntry {
        /// Twist whose table contains the entry.
        twist: Twist,
        /// Facelet written twice.
        facelet: Facelet,
    },
    /// An edge moved by a twist has no entry in the edge table.
    #[error("edge table for twist {twist} has no source for {facelet}")]
    MissingEdgeSource {
        /// Twist whose table is missing the entry.
        twist: Twist,
        /// Facelet with no source.
        facelet: Facelet,
    },
    /// A center or vertex has no counterpart on its source face.
    #[error("twist {twist} moves {facelet} from a face without that position")]
    MissingSource {
        /// Twist whose table is missing the entry.
        twist: Twist,
        /// Facelet with no source.
        facelet: Facelet,
    },
    /// A facelet is the source of more than one facelet.
    #[error("twist {twist} reads {facelet} more than once")]
    NotBijective {
        /// Offending twist.
        twist: Twist,
        /// Facelet read twice.
        facelet: Facelet,
    },
    /// A facelet not affected by the twist is moved anyway.
    #[error("twist {twist} moves {facelet}, which it should not affect")]
    NotLocal {
        /// Offending twist.
        twist: Twist,
        /// Facelet that moved.
        facelet: Facelet,
    },
    /// Applying a twist and then its inverse does not restore a facelet.
    #[error("twist {twist} followed by its inverse does not restore {facelet}")]
    NotInverse {
        /// Offending twist.
        twist: Twist,
        /// Facelet that was not restored.
        facelet: Facelet,
    },
    /// Applying a twist three times does not restore a facelet.
    #[error("twist {twist} applied three times does not restore {facelet}")]
    NotOrderThree {
        /// Offending twist.
        twist: Twist,
        /// Facelet that was not restored.
        facelet: Facelet,
    },
}
