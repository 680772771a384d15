//! Prelude module for convenient imports
//!
//! ```rust
//! use character_core::prelude::*;
//! ```

// Core types
pub use crate::character::{Character, CheckName};

// Derivation
pub use crate::derive::{derive, DeriveIssue, Derivation};

// Config
pub use crate::config::{GameConstants, Ruleset};

// Rolls
pub use crate::roll::{roll_check, roll_dice};
pub use crate::roll_data::roll_data;

// Re-exports from item_core and tables_core
pub use item_core::{Item, ItemKind, ItemType};
pub use tables_core::{MainClass, Race, ReferenceTables};
