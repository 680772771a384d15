use crate::KeyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playable races, keyed the way the host stores them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Race {
    Human,
    Elf,
    Dwarf,
    HalfAlv,
    Felinoid,
    WolfFang,
    FoxTail,
    Ritual,
}

impl Race {
    pub fn all() -> &'static [Race] {
        &[
            Race::Human,
            Race::Elf,
            Race::Dwarf,
            Race::HalfAlv,
            Race::Felinoid,
            Race::WolfFang,
            Race::FoxTail,
            Race::Ritual,
        ]
    }

    /// Key used in stored documents and table files
    pub fn as_str(&self) -> &'static str {
        match self {
            Race::Human => "human",
            Race::Elf => "elf",
            Race::Dwarf => "dwarf",
            Race::HalfAlv => "halfAlv",
            Race::Felinoid => "felinoid",
            Race::WolfFang => "wolfFang",
            Race::FoxTail => "foxTail",
            Race::Ritual => "ritual",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Race {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Race::all()
            .iter()
            .copied()
            .find(|race| race.as_str() == s)
            .ok_or_else(|| KeyError::UnknownRace(s.to_string()))
    }
}

/// Main classes, keyed the way the host stores them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MainClass {
    Guardian,
    Samurai,
    Monk,
    Cleric,
    Druid,
    Kannagi,
    Assassin,
    Swashbuckler,
    Bard,
    Sorcerer,
    Summoner,
    Enchanter,
}

impl MainClass {
    pub fn all() -> &'static [MainClass] {
        &[
            MainClass::Guardian,
            MainClass::Samurai,
            MainClass::Monk,
            MainClass::Cleric,
            MainClass::Druid,
            MainClass::Kannagi,
            MainClass::Assassin,
            MainClass::Swashbuckler,
            MainClass::Bard,
            MainClass::Sorcerer,
            MainClass::Summoner,
            MainClass::Enchanter,
        ]
    }

    /// Key used in stored documents and table files
    pub fn as_str(&self) -> &'static str {
        match self {
            MainClass::Guardian => "guardian",
            MainClass::Samurai => "samurai",
            MainClass::Monk => "monk",
            MainClass::Cleric => "cleric",
            MainClass::Druid => "druid",
            MainClass::Kannagi => "kannagi",
            MainClass::Assassin => "assassin",
            MainClass::Swashbuckler => "swashbuckler",
            MainClass::Bard => "bard",
            MainClass::Sorcerer => "sorcerer",
            MainClass::Summoner => "summoner",
            MainClass::Enchanter => "enchanter",
        }
    }
}

impl fmt::Display for MainClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MainClass {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MainClass::all()
            .iter()
            .copied()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| KeyError::UnknownClass(s.to_string()))
    }
}
