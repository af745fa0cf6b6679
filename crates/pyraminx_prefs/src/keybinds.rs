use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use pyraminx_core::{Axis, Direction, Section, Twist};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Mapping from key names to the corner that they twist.
///
/// Holding `alt` twists only the tip, and holding `shift` twists
/// counter-clockwise. Key names are lowercased on load; if two entries differ
/// only in case, the later one wins.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeybindPreferences {
    /// Corner twisted by each key, keyed by lowercase key name.
    #[serde(deserialize_with = "deserialize_lowercase_keys")]
    pub keys: IndexMap<String, Axis>,
}
impl KeybindPreferences {
    /// Returns the twist triggered by a key press, or `None` if the key is not
    /// bound.
    pub fn resolve(&self, press: &KeyPress) -> Option<Twist> {
        let axis = *self.keys.get(&press.key.to_lowercase())?;
        let section = match press.alt {
            true => Section::tip(axis),
            false => Section::layer(axis),
        };
        let direction = match press.shift {
            true => Direction::CounterClockwise,
            false => Direction::Clockwise,
        };
        Some(Twist::new(section, direction))
    }
}

fn deserialize_lowercase_keys<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, Axis>, D::Error>
where
    D: Deserializer<'de>,
{
    let keys = IndexMap::<String, Axis>::deserialize(deserializer)?;
    Ok(keys
        .into_iter()
        .map(|(key, axis)| (key.to_lowercase(), axis))
        .collect())
}

/// Key press, with modifiers.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// Key name, such as `l` or `w`.
    pub key: String,
    /// Whether `alt` was held.
    pub alt: bool,
    /// Whether `shift` was held.
    pub shift: bool,
}
impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.shift {
            write!(f, "shift+")?;
        }
        write!(f, "{}", self.key)
    }
}
impl FromStr for KeyPress {
    type Err = KeyPressError;

    /// Parses a key press such as `l`, `alt+r`, or `shift+alt+w`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let key = parts.pop().filter(|k| !k.is_empty()).ok_or(KeyPressError::MissingKey)?;
        let mut ret = KeyPress {
            key: key.to_lowercase(),
            ..Default::default()
        };
        for modifier in parts {
            match modifier.to_lowercase().as_str() {
                "alt" => ret.alt = true,
                "shift" => ret.shift = true,
                _ => return Err(KeyPressError::UnknownModifier(modifier.to_owned())),
            }
        }
        Ok(ret)
    }
}

/// Error produced when parsing a [`KeyPress`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyPressError {
    /// No key after the modifiers.
    #[error("missing key")]
    MissingKey,
    /// Modifier other than `alt` or `shift`.
    #[error("unknown modifier {0:?}; expected alt or shift")]
    UnknownModifier(String),
}
