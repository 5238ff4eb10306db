//! Per-type defensive and offensive tallies of a team
//!
//! Every occupied slot contributes at most one mark per type and side. On the
//! defense side weaknesses are listed before resistances, so a type the team
//! is exposed to shows its negative marks first. Tallies are rebuilt from the
//! team on every change and never patched.

use dexplan_chart::{Defense, Type};
use dexplan_roster::ItemId;
use serde::Serialize;

use crate::lookup::RosterLookup;
use crate::state::{TeamState, TEAM_SIZE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum MarkKind {
    #[default]
    Unset,
    Negative,
    Positive,
}

impl MarkKind {
    pub fn value(self) -> i8 {
        match self {
            MarkKind::Unset => 0,
            MarkKind::Negative => -1,
            MarkKind::Positive => 1,
        }
    }
}

/// One team member's contribution to a tally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Mark {
    pub kind: MarkKind,
    /// Contributing member, for cross-highlighting; `None` when unset
    pub member: Option<ItemId>,
}

impl Mark {
    fn new(kind: MarkKind, member: ItemId) -> Self {
        Self {
            kind,
            member: Some(member),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Defense,
    Offense,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SideTally {
    pub marks: [Mark; TEAM_SIZE],
    pub count: i32,
    pub warning: bool,
}

impl SideTally {
    /// Marks that are set, in display order
    pub fn set_marks(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter().filter(|m| m.kind != MarkKind::Unset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    #[serde(rename = "type")]
    pub ty: Type,
    pub defense: SideTally,
    pub offense: SideTally,
}

impl Tally {
    pub fn side(&self, side: Side) -> &SideTally {
        match side {
            Side::Defense => &self.defense,
            Side::Offense => &self.offense,
        }
    }
}

/// Tallies for every type of the active chart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TeamAnalysis {
    tallies: Vec<Tally>,
}

impl TeamAnalysis {
    pub fn tallies(&self) -> &[Tally] {
        &self.tallies
    }

    pub fn get(&self, ty: Type) -> Option<&Tally> {
        self.tallies.iter().find(|t| t.ty == ty)
    }

    /// Type and side of every raised warning
    pub fn warnings(&self) -> impl Iterator<Item = (Type, Side)> + '_ {
        self.tallies.iter().flat_map(|tally| {
            [Side::Defense, Side::Offense]
                .into_iter()
                .filter(move |&side| tally.side(side).warning)
                .map(move |side| (tally.ty, side))
        })
    }

    /// Every mark contributed by one member
    pub fn contributions(&self, member: ItemId) -> impl Iterator<Item = (Type, Side, MarkKind)> + '_ {
        self.tallies.iter().flat_map(move |tally| {
            [Side::Defense, Side::Offense]
                .into_iter()
                .flat_map(move |side| {
                    tally
                        .side(side)
                        .marks
                        .iter()
                        .filter(move |m| m.member == Some(member))
                        .map(move |m| (tally.ty, side, m.kind))
                })
        })
    }
}

/// Build tallies for every chart type from the team's members in slot order
pub fn recompute(team: &TeamState, roster: &impl RosterLookup) -> TeamAnalysis {
    let tallies = roster
        .chart_types()
        .into_iter()
        .map(|ty| tally_type(team, roster, ty))
        .collect();
    TeamAnalysis { tallies }
}

fn tally_type(team: &TeamState, roster: &impl RosterLookup, ty: Type) -> Tally {
    let mut weak = Vec::new();
    let mut resist = Vec::new();
    let mut coverage = Vec::new();

    for member in team.members() {
        let Some(profile) = roster.profile(member.id) else {
            continue;
        };
        match profile.defends(ty) {
            Defense::Weak => weak.push(member.id),
            Defense::Resists => resist.push(member.id),
            Defense::Neutral => {}
        }
        if profile.covers(ty) {
            coverage.push(member.id);
        }
    }

    let defense_marks = weak
        .iter()
        .map(|&id| Mark::new(MarkKind::Negative, id))
        .chain(resist.iter().map(|&id| Mark::new(MarkKind::Positive, id)));
    let offense_marks = coverage.iter().map(|&id| Mark::new(MarkKind::Positive, id));

    let def_count = resist.len() as i32 - weak.len() as i32;
    let atk_count = coverage.len() as i32;

    Tally {
        ty,
        defense: SideTally {
            marks: fill_marks(defense_marks),
            count: def_count,
            warning: def_count < 0,
        },
        offense: SideTally {
            marks: fill_marks(offense_marks),
            count: atk_count,
            warning: def_count + atk_count < 0,
        },
    }
}

fn fill_marks(marks: impl Iterator<Item = Mark>) -> [Mark; TEAM_SIZE] {
    let mut out = [Mark::default(); TEAM_SIZE];
    for (slot, mark) in out.iter_mut().zip(marks) {
        *slot = mark;
    }
    out
}
