use crate::config::{ClassFileConfig, RaceFileConfig};
use crate::key::{MainClass, Race};
use crate::seed::{ClassSeed, RaceSeed};
use crate::ConfigError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;

/// File name of the race table inside a config directory
pub const RACES_FILE: &str = "races.toml";
/// File name of the class table inside a config directory
pub const CLASSES_FILE: &str = "classes.toml";

/// Immutable race and class seed tables
///
/// Loaded once before any character is derived and then shared by reference.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    races: HashMap<Race, RaceSeed>,
    classes: HashMap<MainClass, ClassSeed>,
}

impl ReferenceTables {
    /// Create empty tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `races.toml` and `classes.toml` from a directory
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let races_path = dir.join(RACES_FILE);
        let classes_path = dir.join(CLASSES_FILE);

        let races: RaceFileConfig = read_toml(&races_path)?;
        let classes: ClassFileConfig = read_toml(&classes_path)?;

        let tables = Self::from_configs(races, classes, &races_path, &classes_path)?;
        tracing::debug!(
            races = tables.races.len(),
            classes = tables.classes.len(),
            "loaded reference tables from {}",
            dir.display()
        );
        Ok(tables)
    }

    /// Parse tables from TOML strings
    pub fn parse(races_toml: &str, classes_toml: &str) -> Result<Self, ConfigError> {
        let races_path = Path::new(RACES_FILE);
        let classes_path = Path::new(CLASSES_FILE);

        let races: RaceFileConfig = parse_toml(races_toml, races_path)?;
        let classes: ClassFileConfig = parse_toml(classes_toml, classes_path)?;

        Self::from_configs(races, classes, races_path, classes_path)
    }

    fn from_configs(
        races: RaceFileConfig,
        classes: ClassFileConfig,
        races_path: &Path,
        classes_path: &Path,
    ) -> Result<Self, ConfigError> {
        let mut tables = Self::new();

        for (key, seed) in races.races {
            let race = key.parse::<Race>().map_err(|e| ConfigError::Validation {
                message: e.to_string(),
                path: races_path.to_path_buf(),
            })?;
            tables.races.insert(race, seed);
        }

        for (key, seed) in classes.classes {
            let class = key.parse::<MainClass>().map_err(|e| ConfigError::Validation {
                message: e.to_string(),
                path: classes_path.to_path_buf(),
            })?;
            if seed.hp_growth < 0 || seed.mp_growth < 0 {
                return Err(ConfigError::Validation {
                    message: format!("negative growth for class '{}'", key),
                    path: classes_path.to_path_buf(),
                });
            }
            tables.classes.insert(class, seed);
        }

        Ok(tables)
    }

    /// Add or replace a race seed
    pub fn with_race(mut self, race: Race, seed: RaceSeed) -> Self {
        self.races.insert(race, seed);
        self
    }

    /// Add or replace a class seed
    pub fn with_class(mut self, class: MainClass, seed: ClassSeed) -> Self {
        self.classes.insert(class, seed);
        self
    }

    /// Get the seed for a race
    pub fn race(&self, race: Race) -> Option<&RaceSeed> {
        self.races.get(&race)
    }

    /// Get the seed for a main class
    pub fn class(&self, class: MainClass) -> Option<&ClassSeed> {
        self.classes.get(&class)
    }

    /// Races present in the tables
    pub fn races(&self) -> impl Iterator<Item = Race> + '_ {
        self.races.keys().copied()
    }

    /// Main classes present in the tables
    pub fn classes(&self) -> impl Iterator<Item = MainClass> + '_ {
        self.classes.keys().copied()
    }
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        error: e,
        path: Some(path.to_path_buf()),
    })?;
    parse_toml(&content, path)
}

fn parse_toml<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse {
        error: e,
        path: path.to_path_buf(),
    })
}
