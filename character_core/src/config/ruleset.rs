//! Ruleset - every piece of static data a derive pass reads

use super::{ConfigError, GameConstants};
use std::path::Path;
use tables_core::ReferenceTables;

/// Optional constants file inside a config directory
pub const RULES_FILE: &str = "rules.toml";

/// Reference tables plus rule constants
///
/// Loaded once during start-up, before any character is derived, and passed
/// by reference into every derive pass.
#[derive(Debug, Clone, Default)]
pub struct Ruleset {
    pub tables: ReferenceTables,
    pub constants: GameConstants,
}

impl Ruleset {
    /// Ruleset with default constants
    pub fn new(tables: ReferenceTables) -> Self {
        Ruleset {
            tables,
            constants: GameConstants::default(),
        }
    }

    pub fn with_constants(mut self, constants: GameConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Load tables and constants from a config directory
    ///
    /// `races.toml` and `classes.toml` are required; `rules.toml` falls back
    /// to defaults when absent.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let tables = ReferenceTables::load(dir)?;

        let rules_path = dir.join(RULES_FILE);
        let constants = if rules_path.exists() {
            GameConstants::load_from_path(&rules_path)?
        } else {
            tracing::debug!("no {} in {}, using default constants", RULES_FILE, dir.display());
            GameConstants::default()
        };

        Ok(Ruleset { tables, constants })
    }
}
