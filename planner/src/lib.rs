//! Team planning session
//!
//! Ties the reference data, the active team, its tallies and the shareable
//! fragment together. A host supplies a [`FragmentSink`] (an address bar, a
//! file, a test buffer) and drives the [`Session`] with user actions.

mod config;
mod data;
pub mod logging;
mod session;
mod sink;

pub use config::PlannerConfig;
pub use data::ReferenceData;
pub use session::{Session, SessionError, Toggle};
pub use sink::FragmentSink;

pub use dexplan_chart::{Type, TypeProfile};
pub use dexplan_roster::{ItemId, Roster, RosterError, Title};
pub use dexplan_team::{Member, Side, SlotId, TeamAnalysis, TeamError, TeamState};
