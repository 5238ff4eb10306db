//! Single and dual type profile resolution
//!
//! A profile collects, for one roster item, which attacking types it is weak
//! to, resists or is immune to, and which defending types its own types hit
//! super effectively. Dual types are combined with set algebra over the two
//! single-type rows rather than by multiplying effectiveness values.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::chart::TypeChart;
use crate::error::ChartError;
use crate::types::Type;

/// Derived weaknesses, resistances, immunities and coverage of one or two types
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeProfile {
    pub weaknesses: BTreeSet<Type>,
    pub resistances: BTreeSet<Type>,
    pub immunities: BTreeSet<Type>,
    pub coverage: BTreeSet<Type>,
}

/// How a profile fares defensively against one attacking type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Defense {
    Weak,
    Resists,
    Neutral,
}

impl TypeProfile {
    /// Classify against `attacker`; a weakness takes precedence over a resistance
    pub fn defends(&self, attacker: Type) -> Defense {
        if self.weaknesses.contains(&attacker) {
            Defense::Weak
        } else if self.resistances.contains(&attacker) || self.immunities.contains(&attacker) {
            Defense::Resists
        } else {
            Defense::Neutral
        }
    }

    /// Whether this profile hits `defender` super effectively
    pub fn covers(&self, defender: Type) -> bool {
        self.coverage.contains(&defender)
    }
}

/// Resolve the profile of one or two types against `chart`
pub fn resolve_profile(chart: &TypeChart, types: &[Type]) -> Result<TypeProfile, ChartError> {
    match *types {
        [ty] => single(chart, ty),
        [first, second] if first == second => single(chart, first),
        [first, second] => dual(chart, first, second),
        _ => Err(ChartError::InvalidTypeCount(types.len())),
    }
}

fn single(chart: &TypeChart, ty: Type) -> Result<TypeProfile, ChartError> {
    let entry = chart.entry(ty)?;
    Ok(TypeProfile {
        weaknesses: entry.weak.clone(),
        resistances: entry.resist.clone(),
        immunities: entry.immune.clone(),
        coverage: entry.weakens.clone(),
    })
}

fn dual(chart: &TypeChart, first: Type, second: Type) -> Result<TypeProfile, ChartError> {
    let a = chart.entry(first)?;
    let b = chart.entry(second)?;

    let immunities: BTreeSet<Type> = a.immune.union(&b.immune).copied().collect();

    // A resistance is cancelled when the other type is weak to the same attacker.
    let resistances = a
        .resist
        .difference(&b.weak)
        .chain(b.resist.difference(&a.weak))
        .copied()
        .collect();

    // A weakness is cancelled when the other type resists it; immunity always wins.
    let weaknesses = a
        .weak
        .difference(&b.resist)
        .chain(b.weak.difference(&a.resist))
        .filter(|ty| !immunities.contains(ty))
        .copied()
        .collect();

    let coverage = a.weakens.union(&b.weakens).copied().collect();

    Ok(TypeProfile {
        weaknesses,
        resistances,
        immunities,
        coverage,
    })
}

/// Unordered one-or-two type key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PairKey(Type, Option<Type>);

impl PairKey {
    fn new(types: &[Type]) -> Result<Self, ChartError> {
        match *types {
            [ty] => Ok(Self(ty, None)),
            [a, b] if a == b => Ok(Self(a, None)),
            [a, b] => Ok(Self(a.min(b), Some(a.max(b)))),
            _ => Err(ChartError::InvalidTypeCount(types.len())),
        }
    }
}

/// Memoized profiles for one chart, keyed by unordered type pair
#[derive(Debug)]
pub struct ProfileCache<'a> {
    chart: &'a TypeChart,
    profiles: HashMap<PairKey, TypeProfile>,
}

impl<'a> ProfileCache<'a> {
    pub fn new(chart: &'a TypeChart) -> Self {
        Self {
            chart,
            profiles: HashMap::new(),
        }
    }

    pub fn chart(&self) -> &'a TypeChart {
        self.chart
    }

    /// Resolve `types`, reusing an earlier result for the same pair in any order
    pub fn resolve(&mut self, types: &[Type]) -> Result<&TypeProfile, ChartError> {
        let key = PairKey::new(types)?;
        if !self.profiles.contains_key(&key) {
            let profile = resolve_profile(self.chart, types)?;
            self.profiles.insert(key, profile);
        }
        Ok(&self.profiles[&key])
    }

    /// Number of distinct type combinations resolved so far
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
