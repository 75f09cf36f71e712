//! Persisted user preferences.
//!
//! One flag today: the light/dark theme. Stored as TOML under the platform
//! config directory (`prefs.toml`), resolved through `directories`. Missing or
//! unreadable files fall back to defaults so a broken preference never blocks
//! the tool.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const PREFS_FILE: &str = "prefs.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug)]
pub enum PrefsError {
    Io(io::Error),
    /// No resolvable config directory on this platform.
    NoConfigDir,
    Format(String),
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefsError::Io(e) => write!(f, "preferences IO error: {}", e),
            PrefsError::NoConfigDir => write!(f, "could not determine a config directory"),
            PrefsError::Format(e) => write!(f, "malformed preferences: {}", e),
        }
    }
}

impl std::error::Error for PrefsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrefsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PrefsError {
    fn from(e: io::Error) -> Self {
        PrefsError::Io(e)
    }
}

impl Prefs {
    /// Load from the default location, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load() -> Self {
        match prefs_dir() {
            Ok(dir) => Prefs::load_from(&dir),
            Err(e) => {
                log::warn!("falling back to default preferences: {}", e);
                Prefs::default()
            }
        }
    }

    /// Load from a specific directory.
    pub fn load_from(dir: &Path) -> Self {
        let path = dir.join(PREFS_FILE);
        if !path.exists() {
            return Prefs::default();
        }
        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(prefs) => prefs,
                Err(e) => {
                    log::warn!("ignoring malformed {}: {}", path.display(), e);
                    Prefs::default()
                }
            },
            Err(e) => {
                log::warn!("could not read {}: {}", path.display(), e);
                Prefs::default()
            }
        }
    }

    /// Save to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<(), PrefsError> {
        let dir = prefs_dir()?;
        self.save_to(&dir)
    }

    /// Save to a specific directory.
    pub fn save_to(&self, dir: &Path) -> Result<(), PrefsError> {
        std::fs::create_dir_all(dir)?;
        let contents =
            toml::to_string_pretty(self).map_err(|e| PrefsError::Format(e.to_string()))?;
        std::fs::write(dir.join(PREFS_FILE), contents)?;
        Ok(())
    }
}

fn prefs_dir() -> Result<PathBuf, PrefsError> {
    ProjectDirs::from("", "", "dorksmith")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(PrefsError::NoConfigDir)
}
