//! item_core - Items owned by LHTRPG characters
//!
//! - `Item`: a tagged union over weapons, armor, shields, accessories, bags,
//!   gear, skills, creeds, connections and unions
//! - `selector`: which items are equipped, in collection order
//! - `organize`: grouping a collection into character-sheet sections

pub mod item;
pub mod organize;
pub mod selector;
mod stored;
pub mod types;

pub use item::{Item, ItemKind};
pub use organize::{organize, OrganizedItems};
pub use types::{ItemStats, ItemType, SkillSubtype};

use thiserror::Error;

/// Error reading or writing item documents
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Invalid item document: {0}")]
    Json(#[from] serde_json::Error),
}
