//! Six-slot team state

use std::fmt;

use dexplan_roster::ItemId;
use serde::Serialize;
use tracing::debug;

use crate::error::TeamError;
use crate::lookup::RosterLookup;

/// Number of slots on a team
pub const TEAM_SIZE: usize = 6;

/// Stable handle of one of the six slots
///
/// A slot keeps its handle when removal moves it to the end of the team, so a
/// handle always names the same slot no matter how often the team compacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SlotId(pub u8);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Occupant of a slot
///
/// The giant form shares the base item's identity, so an item can only be on
/// the team once regardless of form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Member {
    pub id: ItemId,
    pub giant: bool,
}

impl Member {
    pub fn new(id: ItemId, giant: bool) -> Self {
        Self { id, giant }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub id: SlotId,
    pub member: Option<Member>,
}

/// The team being planned for one title
///
/// Occupied slots are always packed at the front: adds fill the first empty
/// slot and a removed slot moves to the end. Analysis consumes slots in this
/// positional order. Two teams are equal when they hold the same members in
/// the same order, whatever handles their slots carry.
#[derive(Debug, Clone, Serialize)]
pub struct TeamState {
    title: String,
    slots: [Slot; TEAM_SIZE],
}

impl PartialEq for TeamState {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.members().eq(other.members())
    }
}

impl Eq for TeamState {}

impl TeamState {
    /// Create an empty team for a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slots: std::array::from_fn(|i| Slot {
                id: SlotId(i as u8),
                member: None,
            }),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Slots in positional order
    pub fn slots(&self) -> &[Slot; TEAM_SIZE] {
        &self.slots
    }

    /// Occupied slots in positional order
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.slots.iter().filter_map(|slot| slot.member.as_ref())
    }

    pub fn len(&self) -> usize {
        self.members().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.member.is_none())
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.member.is_some())
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.slot_of(id).is_some()
    }

    /// Slot holding `id`
    pub fn slot_of(&self, id: ItemId) -> Option<SlotId> {
        self.slots
            .iter()
            .find(|slot| slot.member.is_some_and(|m| m.id == id))
            .map(|slot| slot.id)
    }

    /// Check eligibility and uniqueness without touching the team
    pub fn check_add(&self, id: ItemId, roster: &impl RosterLookup) -> Result<(), TeamError> {
        if !roster.is_eligible(id) {
            return Err(TeamError::RosterItemNotEligible(id));
        }
        if self.contains(id) {
            return Err(TeamError::DuplicateRosterItem(id));
        }
        Ok(())
    }

    pub fn can_add(&self, id: ItemId, roster: &impl RosterLookup) -> bool {
        self.check_add(id, roster).is_ok()
    }

    /// Place an item in the first empty slot, returning that slot's handle
    pub fn add(
        &mut self,
        id: ItemId,
        giant: bool,
        roster: &impl RosterLookup,
    ) -> Result<SlotId, TeamError> {
        self.check_add(id, roster)?;
        if giant && !roster.has_giant_form(id) {
            return Err(TeamError::GiantFormUnavailable(id));
        }

        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.member.is_none())
            .ok_or(TeamError::TeamFull)?;

        slot.member = Some(Member::new(id, giant));
        debug!(item = %id, giant, slot = %slot.id, "Added team member");
        Ok(slot.id)
    }

    /// Empty a slot and move it to the end of the team
    pub fn remove(&mut self, slot: SlotId) -> Result<Member, TeamError> {
        let index = self
            .slots
            .iter()
            .position(|s| s.id == slot)
            .ok_or(TeamError::SlotOutOfRange(slot))?;
        let member = self.slots[index]
            .member
            .take()
            .ok_or(TeamError::SlotAlreadyEmpty(slot))?;

        self.slots[index..].rotate_left(1);
        debug!(item = %member.id, slot = %slot, "Removed team member");
        Ok(member)
    }

    /// Remove the slot holding `id`
    pub fn remove_member(&mut self, id: ItemId) -> Result<Member, TeamError> {
        let slot = self.slot_of(id).ok_or(TeamError::NotOnTeam(id))?;
        self.remove(slot)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::{fixture_roster, id};

    fn ids(team: &TeamState) -> Vec<ItemId> {
        team.members().map(|m| m.id).collect()
    }

    fn handles(team: &TeamState) -> Vec<u8> {
        team.slots().iter().map(|slot| slot.id.0).collect()
    }

    #[test]
    fn test_add_fills_left_to_right() {
        let roster = fixture_roster();
        let mut team = TeamState::new("swsh");

        assert_eq!(team.add(id(6), false, &roster), Ok(SlotId(0)));
        assert_eq!(team.add(id(9), false, &roster), Ok(SlotId(1)));
        assert_eq!(ids(&team), vec![id(6), id(9)]);
        assert_eq!(team.len(), 2);
        assert!(!team.is_empty());
        assert!(team.slots()[2].member.is_none());
    }

    #[test]
    fn test_add_rejects_ineligible_and_duplicates() {
        let roster = fixture_roster();
        let mut team = TeamState::new("swsh");
        team.add(id(6), false, &roster).unwrap();

        assert_eq!(
            team.add(id(152), false, &roster),
            Err(TeamError::RosterItemNotEligible(id(152)))
        );
        assert_eq!(
            team.add(id(6), true, &roster),
            Err(TeamError::DuplicateRosterItem(id(6)))
        );
        assert!(!team.can_add(id(6), &roster));
        assert!(team.can_add(id(9), &roster));
        assert_eq!(team.len(), 1);
    }

    #[test]
    fn test_giant_form_requires_support() {
        let roster = fixture_roster();
        let mut team = TeamState::new("swsh");

        assert_eq!(
            team.add(id(25), true, &roster),
            Err(TeamError::GiantFormUnavailable(id(25)))
        );
        team.add(id(6), true, &roster).unwrap();
        assert_eq!(team.members().next(), Some(&Member::new(id(6), true)));
    }

    #[test]
    fn test_seventh_add_is_team_full() {
        let roster = fixture_roster();
        let mut team = TeamState::new("swsh");
        for base in [6, 9, 25, 35, 94, 131] {
            team.add(id(base), false, &roster).unwrap();
        }
        assert!(team.is_full());

        let before = team.clone();
        assert_eq!(team.add(id(143), false, &roster), Err(TeamError::TeamFull));
        assert_eq!(team, before);
    }

    #[test]
    fn test_remove_compacts_toward_front() {
        let roster = fixture_roster();
        let mut team = TeamState::new("swsh");
        for base in [6, 9, 25, 35] {
            team.add(id(base), false, &roster).unwrap();
        }

        assert_eq!(team.remove(SlotId(1)), Ok(Member::new(id(9), false)));
        assert_eq!(ids(&team), vec![id(6), id(25), id(35)]);
        assert_eq!(team.slots()[2].member, Some(Member::new(id(35), false)));
        assert_eq!(team.slots()[3].member, None);
        assert_eq!(handles(&team), vec![0, 2, 3, 4, 5, 1]);

        // Next add lands right after the compacted members
        assert_eq!(team.add(id(9), false, &roster), Ok(SlotId(4)));
        assert_eq!(ids(&team), vec![id(6), id(25), id(35), id(9)]);
    }

    #[test]
    fn test_second_remove_is_slot_already_empty() {
        let roster = fixture_roster();
        let mut team = TeamState::new("swsh");
        let first = team.add(id(6), false, &roster).unwrap();
        team.add(id(9), false, &roster).unwrap();

        assert_eq!(team.remove(first), Ok(Member::new(id(6), false)));
        assert_eq!(team.remove(first), Err(TeamError::SlotAlreadyEmpty(first)));
        assert_eq!(ids(&team), vec![id(9)]);
        assert_matches!(team.remove(SlotId(6)), Err(TeamError::SlotOutOfRange(SlotId(6))));
    }

    #[test]
    fn test_slot_handle_survives_compaction() {
        let roster = fixture_roster();
        let mut team = TeamState::new("swsh");
        for base in [6, 9, 25] {
            team.add(id(base), false, &roster).unwrap();
        }

        team.remove(SlotId(0)).unwrap();
        assert_eq!(team.slot_of(id(25)), Some(SlotId(2)));
        assert_eq!(team.remove(SlotId(2)), Ok(Member::new(id(25), false)));
        assert_eq!(ids(&team), vec![id(9)]);
    }

    #[test]
    fn test_remove_member_by_identifier() {
        let roster = fixture_roster();
        let mut team = TeamState::new("swsh");
        team.add(id(6), true, &roster).unwrap();
        team.add(id(25), false, &roster).unwrap();

        assert_eq!(team.remove_member(id(6)), Ok(Member::new(id(6), true)));
        assert_eq!(team.slot_of(id(25)), Some(SlotId(1)));
        assert_eq!(team.slots()[0].member, Some(Member::new(id(25), false)));
        assert_eq!(team.remove_member(id(6)), Err(TeamError::NotOnTeam(id(6))));
    }

    #[test]
    fn test_equality_ignores_slot_handles() {
        let roster = fixture_roster();
        let mut shuffled = TeamState::new("swsh");
        for base in [6, 9, 25] {
            shuffled.add(id(base), false, &roster).unwrap();
        }
        shuffled.remove(SlotId(0)).unwrap();

        let mut fresh = TeamState::new("swsh");
        fresh.add(id(9), false, &roster).unwrap();
        fresh.add(id(25), false, &roster).unwrap();

        assert_eq!(shuffled, fresh);
        assert_ne!(shuffled.slots()[0].id, fresh.slots()[0].id);
    }
}
