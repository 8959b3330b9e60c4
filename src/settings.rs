use crate::selector::Item;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};
use thiserror::Error;

pub const DEFAULT_SPIN_MILLIS: u64 = 2000;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("settings file {} is not valid: {source}", .path.display())]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },
}

///
/// Settings read from a JSON file, e.g.
///
/// ```json
/// {
///     "items": [{"name": "Pizza", "weight": 50}, {"name": "Sushi", "weight": 50}],
///     "require_full_percentage": true,
///     "spin_millis": 1500,
///     "history_file": "history.json"
/// }
/// ```
///
/// Every field is optional.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub items: Vec<Item>,
    /// Refuse to draw unless the weights add up to 100
    pub require_full_percentage: bool,
    pub animations: bool,
    pub spin_millis: u64,
    pub history_file: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            items: vec![],
            require_full_percentage: true,
            animations: true,
            spin_millis: DEFAULT_SPIN_MILLIS,
            history_file: None,
            seed: None,
        }
    }
}

/// Values given on the command line. Unset fields leave the file's values alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub items: Vec<Item>,
    pub seed: Option<u64>,
    pub history_file: Option<PathBuf>,
    pub allow_partial: bool,
    pub no_animation: bool,
    pub spin_millis: Option<u64>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Settings, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| SettingsError::Format {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies command line values on top of these settings. Items replace the
    /// file's items only when some were given; the two switches can only relax.
    pub fn with_overrides(mut self, overrides: Overrides) -> Settings {
        if !overrides.items.is_empty() {
            self.items = overrides.items;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.history_file.is_some() {
            self.history_file = overrides.history_file;
        }
        if overrides.allow_partial {
            self.require_full_percentage = false;
        }
        if overrides.no_animation {
            self.animations = false;
        }
        if let Some(spin_millis) = overrides.spin_millis {
            self.spin_millis = spin_millis;
        }
        self
    }

    /// How long to spin before showing the winner, if at all.
    pub fn spin_duration(&self) -> Option<Duration> {
        if self.animations && self.spin_millis > 0 {
            Some(Duration::from_millis(self.spin_millis))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(
            settings.spin_duration(),
            Some(Duration::from_millis(DEFAULT_SPIN_MILLIS))
        );
    }

    #[test]
    fn test_parse_full_settings() {
        let settings: Settings = serde_json::from_str(
            r#"{
                "items": [
                    {"id": 1, "name": "Pizza", "probability": 50},
                    {"name": "Sushi", "weight": 50}
                ],
                "require_full_percentage": false,
                "animations": false,
                "history_file": "history.json",
                "seed": 9
            }"#,
        )
        .unwrap();
        assert_eq!(
            settings.items,
            vec![Item::new("Pizza", 50.0), Item::new("Sushi", 50.0)]
        );
        assert!(!settings.require_full_percentage);
        assert_eq!(settings.spin_duration(), None);
        assert_eq!(settings.history_file, Some(PathBuf::from("history.json")));
        assert_eq!(settings.seed, Some(9));
    }

    #[test]
    fn test_zero_spin_is_no_spin() {
        let settings = Settings {
            spin_millis: 0,
            ..Settings::default()
        };
        assert_eq!(settings.spin_duration(), None);
    }

    fn from_file() -> Settings {
        Settings {
            items: vec![Item::new("Pizza", 50.0), Item::new("Sushi", 50.0)],
            require_full_percentage: true,
            animations: true,
            spin_millis: 1500,
            history_file: Some(PathBuf::from("file_history.json")),
            seed: Some(1),
        }
    }

    #[test]
    fn test_no_overrides_keeps_file_values() {
        assert_eq!(from_file().with_overrides(Overrides::default()), from_file());
    }

    #[test]
    fn test_command_line_items_replace_file_items() {
        let settings = from_file().with_overrides(Overrides {
            items: vec![Item::new("Coffee", 100.0)],
            ..Overrides::default()
        });
        assert_eq!(settings.items, vec![Item::new("Coffee", 100.0)]);
    }

    #[test]
    fn test_seed_and_history_override() {
        let settings = from_file().with_overrides(Overrides {
            seed: Some(42),
            history_file: Some(PathBuf::from("cli_history.json")),
            ..Overrides::default()
        });
        assert_eq!(settings.seed, Some(42));
        assert_eq!(
            settings.history_file,
            Some(PathBuf::from("cli_history.json"))
        );
    }

    #[test]
    fn test_switches_only_relax() {
        let settings = from_file().with_overrides(Overrides {
            allow_partial: true,
            no_animation: true,
            ..Overrides::default()
        });
        assert!(!settings.require_full_percentage);
        assert!(!settings.animations);
        assert_eq!(settings.spin_duration(), None);

        let relaxed = Settings {
            require_full_percentage: false,
            animations: false,
            ..from_file()
        };
        let unchanged = relaxed.clone().with_overrides(Overrides::default());
        assert_eq!(unchanged, relaxed);
    }

    #[test]
    fn test_spin_millis_replaces() {
        let settings = from_file().with_overrides(Overrides {
            spin_millis: Some(250),
            ..Overrides::default()
        });
        assert_eq!(settings.spin_duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join(format!(
            "probability_game_rs_no_such_settings_{}.json",
            std::process::id()
        ));
        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::Io { .. })
        ));
    }
}
