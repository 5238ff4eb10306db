//! Team state, shareable team codes and team type analysis.
//!
//! # Main Types
//!
//! - [`TeamState`] - six ordered slots, filled front to back, compacted on removal
//! - [`SlotId`] - stable handle of a slot, unchanged when the team compacts
//! - [`TeamError`] - recoverable rejections of adds and removes
//! - [`TeamCode`] - the `title+item+item` share format, see [`encode`] and [`decode`]
//! - [`TeamAnalysis`] - per-type defense/offense tallies, see [`recompute`]
//!
//! # Example Usage
//!
//! ```
//! use dexplan_chart::{ChartBook, Type};
//! use dexplan_roster::{ItemId, Roster, RosterItem, Title};
//! use dexplan_team::{decode, encode, recompute, TeamState};
//!
//! let title = Title {
//!     slug: "swsh".to_string(),
//!     name: None,
//!     generation: 8,
//!     versions: Vec::new(),
//!     dexes: vec!["galar".to_string()],
//!     disabled: false,
//! };
//! let charizard = ItemId::new(6, 0);
//! let mut item = RosterItem::new(charizard, "charizard", vec![Type::Fire, Type::Flying]);
//! item.gigantamax = true;
//! item.dexes = vec!["galar".to_string()];
//! let roster = Roster::load(&title, &[item], &ChartBook::standard()).unwrap();
//!
//! let mut team = TeamState::new("swsh");
//! team.add(charizard, true, &roster).unwrap();
//!
//! let analysis = recompute(&team, &roster);
//! assert_eq!(analysis.get(Type::Rock).unwrap().defense.count, -1);
//!
//! let link = encode(&team, &roster);
//! assert_eq!(link, "swsh+charizard-gmax");
//!
//! let restored = TeamState::from_code(&decode(&link).unwrap(), &roster);
//! assert_eq!(restored, team);
//! ```

mod analysis;
mod code;
mod error;
mod lookup;
mod state;

#[cfg(test)]
mod testing;

pub use analysis::{recompute, Mark, MarkKind, Side, SideTally, Tally, TeamAnalysis};
pub use code::{decode, encode, ItemToken, TeamCode, DELIMITER, GIANT_SUFFIX};
pub use error::TeamError;
pub use lookup::RosterLookup;
pub use state::{Member, Slot, SlotId, TeamState, TEAM_SIZE};
