//! The planning session: one active title and team at a time

use dexplan_roster::{ItemId, Roster, RosterError};
use dexplan_team::{
    decode, encode, recompute, Member, SlotId, TeamAnalysis, TeamError, TeamState,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::data::ReferenceData;
use crate::sink::FragmentSink;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No title selected")]
    NoTitle,

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Team(#[from] TeamError),
}

/// Outcome of [`Session::toggle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added(SlotId),
    Removed(Member),
}

/// Roster, team and tallies for the selected title
#[derive(Debug, Clone)]
struct ActiveTeam {
    roster: Roster,
    team: TeamState,
    analysis: TeamAnalysis,
}

impl ActiveTeam {
    fn new(roster: Roster, team: TeamState) -> Self {
        let analysis = recompute(&team, &roster);
        Self {
            roster,
            team,
            analysis,
        }
    }

    fn refresh(&mut self) {
        self.analysis = recompute(&self.team, &self.roster);
    }

    fn fragment(&self) -> String {
        encode(&self.team, &self.roster)
    }
}

/// Owns the reference data, the active team and the fragment sink
///
/// Every mutation runs to completion in order: the team changes, tallies are
/// rebuilt, and only then is the fragment written. Rejected operations leave
/// all three untouched.
pub struct Session<S: FragmentSink> {
    data: ReferenceData,
    sink: S,
    active: Option<ActiveTeam>,
}

impl<S: FragmentSink> Session<S> {
    pub fn new(data: ReferenceData, sink: S) -> Self {
        Self {
            data,
            sink,
            active: None,
        }
    }

    /// Titles in picker order with their display names
    pub fn titles(&self) -> impl Iterator<Item = (&str, String)> {
        self.data
            .titles
            .iter()
            .map(|t| (t.slug.as_str(), t.display_name()))
    }

    /// Start a new, empty team for a title
    ///
    /// On failure the current team, if any, stays active.
    pub fn select_title(&mut self, slug: &str) -> Result<(), SessionError> {
        let roster = self.load_roster(slug)?;
        let active = ActiveTeam::new(roster, TeamState::new(slug));
        info!(title = slug, roster = active.roster.len(), "Selected title");

        self.sink.write_fragment(&active.fragment());
        self.active = Some(active);
        Ok(())
    }

    /// Restore a session from a shared fragment
    ///
    /// Returns `false` and unloads the team when the title is unknown or
    /// disabled. Item tokens that cannot be added are skipped.
    pub fn load_fragment(&mut self, fragment: &str) -> bool {
        let Some(code) = decode(fragment) else {
            debug!(fragment, "Empty team fragment");
            self.active = None;
            return false;
        };

        let roster = match self.load_roster(&code.title) {
            Ok(roster) => roster,
            Err(e) => {
                warn!(title = %code.title, error = %e, "Cannot load shared team");
                self.active = None;
                return false;
            }
        };

        let team = TeamState::from_code(&code, &roster);
        let active = ActiveTeam::new(roster, team);
        info!(
            title = %code.title,
            requested = code.items.len(),
            loaded = active.team.len(),
            "Loaded shared team"
        );

        self.sink.write_fragment(&active.fragment());
        self.active = Some(active);
        true
    }

    /// Add an item to the first empty slot, returning that slot's handle
    pub fn add_to_team(&mut self, id: ItemId, giant: bool) -> Result<SlotId, SessionError> {
        let active = self.active.as_mut().ok_or(SessionError::NoTitle)?;
        let slot = active
            .team
            .add(id, giant, &active.roster)
            .inspect_err(|e| warn!(item = %id, error = %e, "Rejected add"))?;

        active.refresh();
        self.sink.write_fragment(&active.fragment());
        Ok(slot)
    }

    /// Empty a slot, moving it to the end of the team
    ///
    /// The handle keeps naming the same slot afterwards, so removing it again
    /// fails with `SlotAlreadyEmpty`.
    pub fn remove_from_slot(&mut self, slot: SlotId) -> Result<Member, SessionError> {
        let active = self.active.as_mut().ok_or(SessionError::NoTitle)?;
        let member = active
            .team
            .remove(slot)
            .inspect_err(|e| warn!(slot = %slot, error = %e, "Rejected remove"))?;

        active.refresh();
        self.sink.write_fragment(&active.fragment());
        Ok(member)
    }

    /// Add the item if it is not on the team, otherwise remove it
    pub fn toggle(&mut self, id: ItemId) -> Result<Toggle, SessionError> {
        let slot = self
            .active
            .as_ref()
            .ok_or(SessionError::NoTitle)?
            .team
            .slot_of(id);

        match slot {
            Some(slot) => self.remove_from_slot(slot).map(Toggle::Removed),
            None => self.add_to_team(id, false).map(Toggle::Added),
        }
    }

    /// Drop the active team and clear the fragment
    pub fn reset(&mut self) {
        if self.active.take().is_some() {
            self.sink.clear_fragment();
        }
    }

    pub fn current_team(&self) -> Option<&TeamState> {
        self.active.as_ref().map(|a| &a.team)
    }

    pub fn current_tallies(&self) -> Option<&TeamAnalysis> {
        self.active.as_ref().map(|a| &a.analysis)
    }

    pub fn roster(&self) -> Option<&Roster> {
        self.active.as_ref().map(|a| &a.roster)
    }

    /// Code of the current team, as last written to the sink
    pub fn fragment(&self) -> Option<String> {
        self.active.as_ref().map(ActiveTeam::fragment)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn load_roster(&self, slug: &str) -> Result<Roster, SessionError> {
        let title = self.data.titles.selectable(slug)?;
        Ok(Roster::load(title, &self.data.items, &self.data.charts)?)
    }
}
