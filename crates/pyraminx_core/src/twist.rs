use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{Axis, PyraminxError};

/// Number of sections (axis + variant) on the puzzle.
pub const SECTION_COUNT: usize = 8;

/// Which pieces at a corner are twisted.
#[derive(Serialize, Deserialize, Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Variant {
    /// Tip and the layer beneath it. Written in uppercase.
    Layer,
    /// Tip only. Written in lowercase.
    Tip,
}

/// Twistable part of the puzzle: an axis plus a variant.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Section {
    /// Corner that the section is twisted around.
    pub axis: Axis,
    /// Whether the section is only the tip or the whole layer.
    pub variant: Variant,
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Section({})", self.letter())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Section {
    type Err = PyraminxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Section::from_letter(c),
            _ => Err(PyraminxError::InvalidSection(s.to_owned())),
        }
    }
}

impl TryFrom<char> for Section {
    type Error = PyraminxError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Section::from_letter(c)
    }
}

impl Serialize for Section {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Section {
    /// All sections, in the order used for indexing: `U u L l R r B b`.
    pub const ALL: [Section; SECTION_COUNT] = [
        Section::layer(Axis::U),
        Section::tip(Axis::U),
        Section::layer(Axis::L),
        Section::tip(Axis::L),
        Section::layer(Axis::R),
        Section::tip(Axis::R),
        Section::layer(Axis::B),
        Section::tip(Axis::B),
    ];

    /// Constructs a section.
    pub const fn new(axis: Axis, variant: Variant) -> Self {
        Self { axis, variant }
    }
    /// Constructs a layer section.
    pub const fn layer(axis: Axis) -> Self {
        Self::new(axis, Variant::Layer)
    }
    /// Constructs a tip section.
    pub const fn tip(axis: Axis) -> Self {
        Self::new(axis, Variant::Tip)
    }

    /// Returns the index of the section in [`Section::ALL`].
    pub const fn index(self) -> usize {
        self.axis.index() * 2 + self.variant as usize
    }

    /// Returns the letter naming the section: uppercase for a layer and
    /// lowercase for a tip.
    pub const fn letter(self) -> char {
        let c = self.axis.letter();
        match self.variant {
            Variant::Layer => c,
            Variant::Tip => c.to_ascii_lowercase(),
        }
    }

    /// Parses a section letter.
    pub fn from_letter(c: char) -> Result<Self, PyraminxError> {
        match Axis::from_letter(c.to_ascii_uppercase()) {
            Some(axis) if c.is_ascii_uppercase() => Ok(Self::layer(axis)),
            Some(axis) => Ok(Self::tip(axis)),
            None => Err(PyraminxError::InvalidSection(c.to_string())),
        }
    }
}

/// Direction of a twist, as seen looking at the twisted corner from outside
/// the puzzle.
#[derive(
    Serialize, Deserialize, Debug, Default, EnumIter, Copy, Clone, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Direction {
    /// Clockwise
    #[default]
    Clockwise,
    /// Counter-clockwise
    CounterClockwise,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise => write!(f, "cw"),
            Direction::CounterClockwise => write!(f, "ccw"),
        }
    }
}

impl FromStr for Direction {
    type Err = PyraminxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cw" | "clockwise" => Ok(Direction::Clockwise),
            "ccw" | "counterclockwise" | "counter-clockwise" => Ok(Direction::CounterClockwise),
            _ => Err(PyraminxError::InvalidDirection(s.to_owned())),
        }
    }
}

impl Direction {
    /// Both directions, in the order used for indexing.
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

    /// Returns the index of the direction in [`Direction::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn rev(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Section and direction to twist it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Twist {
    /// Section to twist.
    pub section: Section,
    /// Direction to twist it.
    pub direction: Direction,
}

/// Formats the twist in standard notation: `L` for clockwise and `L'` for
/// counter-clockwise.
impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.section),
            Direction::CounterClockwise => write!(f, "{}'", self.section),
        }
    }
}

impl Serialize for Twist {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Twist {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses a single twist in standard notation, such as `L` or `r'`.
impl FromStr for Twist {
    type Err = PyraminxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_suffix('\'') {
            Some(section) => Ok(Twist::ccw(section.parse()?)),
            None => Ok(Twist::cw(s.parse()?)),
        }
    }
}

impl Twist {
    /// Constructs a twist.
    pub const fn new(section: Section, direction: Direction) -> Self {
        Self { section, direction }
    }
    /// Constructs a clockwise twist.
    pub const fn cw(section: Section) -> Self {
        Self::new(section, Direction::Clockwise)
    }
    /// Constructs a counter-clockwise twist.
    pub const fn ccw(section: Section) -> Self {
        Self::new(section, Direction::CounterClockwise)
    }

    /// Returns the twist that undoes this one.
    #[must_use]
    pub const fn rev(self) -> Self {
        Self::new(self.section, self.direction.rev())
    }

    /// Returns an iterator over all 16 twists.
    pub fn iter_all() -> impl Iterator<Item = Twist> {
        Section::ALL
            .into_iter()
            .flat_map(|section| Direction::ALL.map(|direction| Twist::new(section, direction)))
    }
}
