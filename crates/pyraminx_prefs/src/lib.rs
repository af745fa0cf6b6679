//! User preferences for the Pyraminx simulator.
//!
//! Preferences are stored as YAML. The built-in defaults are always loaded
//! first, and values from the user's file override them.

#[macro_use]
extern crate lazy_static;

use std::path::Path;
use std::time::Duration;

use eyre::Result;
use pyraminx_core::{Color, Face, TwistTiming};
use serde::{Deserialize, Serialize};

mod keybinds;
pub mod paths;
mod rgb;

pub use keybinds::{KeyPress, KeyPressError, KeybindPreferences};
pub use rgb::Rgb;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    /// Built-in default preferences.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

/// User preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Display color for each face's sticker color.
    pub colors: Vec<FaceColor>,
    /// Twist animation timing.
    pub animation: AnimationPreferences,
    /// Keyboard controls.
    pub keybinds: KeybindPreferences,
    /// Automatic solver.
    pub solver: SolverPreferences,
}
impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}
impl Preferences {
    /// Loads preferences from `user_file`, or from the file in the platform
    /// config directory if `user_file` is `None`. If loading fails, logs a
    /// warning and returns the defaults.
    pub fn load(user_file: Option<&Path>) -> Self {
        Self::try_load(user_file).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e}");
            Self::default()
        })
    }

    /// Loads preferences from `user_file`, or from the file in the platform
    /// config directory if `user_file` is `None`.
    ///
    /// An explicit `user_file` must exist. The file in the config directory is
    /// optional.
    pub fn try_load(user_file: Option<&Path>) -> Result<Self> {
        let default_config_source = config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT);
        let mut config = config::Config::builder().add_source(default_config_source);

        let user_config_source = match user_file {
            Some(path) => Some(config::File::from(path).format(PREFS_FILE_FORMAT)),
            None => match paths::prefs_file() {
                Ok(path) => Some(
                    config::File::from(path)
                        .format(PREFS_FILE_FORMAT)
                        .required(false),
                ),
                Err(e) => {
                    log::warn!("Error locating user preferences: {e}");
                    None
                }
            },
        };
        if let Some(source) = user_config_source {
            config = config.add_source(source);
        }

        let prefs = config.build()?.try_deserialize::<Self>()?;
        log::debug!("Loaded preferences");
        Ok(prefs)
    }

    /// Saves preferences to `user_file`, or to the file in the platform
    /// config directory if `user_file` is `None`.
    pub fn save(&self, user_file: Option<&Path>) -> Result<()> {
        let path = match user_file {
            Some(path) => path,
            None => paths::prefs_file()?,
        };
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::info!("Saved preferences to {}", path.display());
        Ok(())
    }

    /// Serializes the preferences as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_norway::to_string(self)?)
    }

    /// Returns the display color for a sticker color.
    pub fn face_color(&self, color: Color) -> Option<&FaceColor> {
        let face = color.home_face();
        self.colors
            .iter()
            .find(|c| c.face == face)
            .or_else(|| DEFAULT_PREFS.colors.iter().find(|c| c.face == face))
    }
}

/// Display name and color for the stickers that start on a face.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FaceColor {
    /// Face whose stickers have this color when solved.
    pub face: Face,
    /// Human-friendly name.
    pub name: String,
    /// Display color.
    pub rgb: Rgb,
}

/// Twist animation timing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnimationPreferences {
    /// Duration of a single twist, in milliseconds.
    pub twist_duration_ms: u64,
    /// Shortest duration of a twist when several are queued, in milliseconds.
    pub min_twist_duration_ms: u64,
}
impl AnimationPreferences {
    /// Returns the timing to use for a twist queue.
    pub fn timing(&self) -> TwistTiming {
        TwistTiming {
            base: Duration::from_millis(self.twist_duration_ms),
            min: Duration::from_millis(self.min_twist_duration_ms),
        }
    }
}

/// Automatic solver settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SolverPreferences {
    /// Delay between automatic solver twists, in milliseconds.
    pub interval_ms: u64,
    /// Whether to run the solver automatically.
    pub auto_solve: bool,
}
impl SolverPreferences {
    /// Returns the delay between automatic solver twists.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[cfg(test)]
mod tests;
