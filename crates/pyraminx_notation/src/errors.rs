use thiserror::Error;

/// Error produced when parsing a twist sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Letter that does not name a section.
    #[error("{found:?} at offset {offset} is not a section; expected one of U u L l R r B b")]
    InvalidSection {
        /// Byte offset of the letter.
        offset: usize,
        /// Letter found.
        found: char,
    },
    /// Character that cannot appear at this point in a twist.
    #[error("unexpected {found:?} at offset {offset}")]
    UnexpectedChar {
        /// Byte offset of the character.
        offset: usize,
        /// Character found.
        found: char,
    },
    /// Input that should contain exactly one twist did not.
    #[error("expected exactly one twist")]
    ExpectedOneTwist,
}

impl ParseError {
    /// Returns the byte offset of the error in the input, if there is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::InvalidSection { offset, .. } | ParseError::UnexpectedChar { offset, .. } => {
                Some(*offset)
            }
            ParseError::ExpectedOneTwist => None,
        }
    }
}
