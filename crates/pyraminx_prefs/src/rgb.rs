use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display color of a face, written as `#rrggbb` in preferences files.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// sRGB component values.
    pub rgb: [u8; 3],
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.rgb))
    }
}
impl FromStr for Rgb {
    type Err = hex::FromHexError;

    /// Parses `#rrggbb` or the shorthand `#rgb`. The `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        let mut rgb = [0_u8; 3];
        match expand_shorthand(digits) {
            Some(expanded) => hex::decode_to_slice(expanded, &mut rgb)?,
            None => hex::decode_to_slice(digits, &mut rgb)?,
        }
        Ok(Rgb { rgb })
    }
}
impl TryFrom<String> for Rgb {
    type Error = hex::FromHexError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}
impl Rgb {
    /// Constructs a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }
}

/// Doubles each digit of a three-digit color such as `f0f`.
fn expand_shorthand(digits: &str) -> Option<String> {
    (digits.len() == 3).then(|| digits.chars().flat_map(|c| [c, c]).collect())
}
