//! character_core - Derived-stat engine for LHTRPG characters
//!
//! This library provides:
//! - Character: the stored character document
//! - Ruleset: race/class reference tables plus rule constants, loaded once
//! - derive: recomputes attributes, resources, checks, battle status and
//!   inventory from persisted values and equipped items
//! - roll: check rolls against a difficulty
//! - roll_data: the flat object dice formulas are evaluated against
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use character_core::prelude::*;
//!
//! let rules = Ruleset::load(Path::new("config/"))?;
//! let mut character = Character::from_json(&stored_character)?;
//! let items = Item::collection_from_json(&stored_items)?;
//!
//! for issue in character.prepare_derived(&items, &rules) {
//!     eprintln!("{}", issue);
//! }
//! println!("HP {}", character.resources.health.max);
//! ```

pub mod character;
pub mod config;
pub mod derive;
pub mod prelude;
pub mod roll;
pub mod roll_data;

// Core API - what most users need
pub use character::{Character, CheckName};
pub use config::{GameConstants, Ruleset};
pub use derive::{derive, DeriveIssue, Derivation, DerivedStats};

// Rolling
pub use roll::{roll_check, roll_dice, CheckRoll, DiceRoll};
pub use roll_data::roll_data;

// Re-export commonly needed item and table types
pub use item_core::{Item, ItemKind, ItemType};
pub use tables_core::{KeyError, MainClass, Race, ReferenceTables};
