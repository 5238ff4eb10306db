use dexplan_roster::ItemId;
use thiserror::Error;

use crate::state::SlotId;

/// Recoverable failures of team edits; none of them change the team
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamError {
    #[error("Roster item {0} is not part of the active title's dex")]
    RosterItemNotEligible(ItemId),

    #[error("Roster item {0} is already on the team")]
    DuplicateRosterItem(ItemId),

    #[error("Team is full")]
    TeamFull,

    #[error("Slot {0} is already empty")]
    SlotAlreadyEmpty(SlotId),

    #[error("Slot {0} does not exist")]
    SlotOutOfRange(SlotId),

    #[error("Roster item {0} is not on the team")]
    NotOnTeam(ItemId),

    #[error("Roster item {0} has no giant form")]
    GiantFormUnavailable(ItemId),
}
