//! Reference data for the team planner: titles, roster items and per-title rosters.
//!
//! Titles and items are static data owned by external collaborators; this crate
//! only models and reads them. [`Roster::load`] turns a title plus the full item
//! list into the ordered set of selectable items, each carrying its effective
//! types for the title's generation and a precomputed [`TypeProfile`].
//!
//! [`TypeProfile`]: dexplan_chart::TypeProfile

mod error;
mod item;
mod roster;
mod title;

pub use error::RosterError;
pub use item::{ItemId, RosterItem, TypeOverride};
pub use roster::{Roster, RosterEntry};
pub use title::{Title, TitleCatalog, Version};

/// Parse a roster item list from JSON
pub fn items_from_json(json: &str) -> Result<Vec<RosterItem>, RosterError> {
    serde_json::from_str(json).map_err(|e| RosterError::InvalidData(e.to_string()))
}
