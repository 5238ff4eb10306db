//! Per-generation type chart

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::types::Type;

/// Raw defensive relations of one type, as supplied by chart data
///
/// `weak` lists attacking types that deal bonus damage to this type,
/// `resist` and `immune` list attacking types it reduces or nullifies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRelations {
    #[serde(default)]
    pub weak: BTreeSet<Type>,
    #[serde(default)]
    pub resist: BTreeSet<Type>,
    #[serde(default)]
    pub immune: BTreeSet<Type>,
}

/// One row of a loaded chart: the raw relations plus the derived `weakens` set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeEntry {
    pub weak: BTreeSet<Type>,
    pub resist: BTreeSet<Type>,
    pub immune: BTreeSet<Type>,
    /// Types this type is super effective against (inverse of `weak`)
    pub weakens: BTreeSet<Type>,
}

/// Immutable type chart for one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeChart {
    generation: u8,
    entries: BTreeMap<Type, TypeEntry>,
}

/// Serialized form of a chart: `{"generation": 6, "type_data": {"Fire": {...}}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub generation: u8,
    pub type_data: BTreeMap<Type, TypeRelations>,
}

impl TypeChart {
    /// Build a chart from raw rows, deriving `weakens` for every type
    ///
    /// Every type referenced by a row must itself be a key of the chart.
    pub fn new(generation: u8, rows: BTreeMap<Type, TypeRelations>) -> Result<Self, ChartError> {
        for relations in rows.values() {
            let referenced = relations
                .weak
                .iter()
                .chain(&relations.resist)
                .chain(&relations.immune);
            for ty in referenced {
                if !rows.contains_key(ty) {
                    return Err(ChartError::InvalidType {
                        ty: *ty,
                        generation,
                    });
                }
            }
        }

        Ok(Self::derive(generation, rows))
    }

    /// Build without validating references; unknown attackers get no `weakens` entry
    pub(crate) fn derive(generation: u8, rows: BTreeMap<Type, TypeRelations>) -> Self {
        let mut entries: BTreeMap<Type, TypeEntry> = rows
            .iter()
            .map(|(ty, relations)| {
                let entry = TypeEntry {
                    weak: relations.weak.clone(),
                    resist: relations.resist.clone(),
                    immune: relations.immune.clone(),
                    weakens: BTreeSet::new(),
                };
                (*ty, entry)
            })
            .collect();

        for (defender, relations) in &rows {
            for attacker in &relations.weak {
                if let Some(entry) = entries.get_mut(attacker) {
                    entry.weakens.insert(*defender);
                }
            }
        }

        Self {
            generation,
            entries,
        }
    }

    /// Build a chart from its serialized form
    pub fn from_data(data: ChartData) -> Result<Self, ChartError> {
        Self::new(data.generation, data.type_data)
    }

    /// Parse a chart from JSON
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        let data: ChartData =
            serde_json::from_str(json).map_err(|e| ChartError::InvalidData(e.to_string()))?;
        Self::from_data(data)
    }

    /// First generation this chart applies to
    pub fn generation(&self) -> u8 {
        self.generation
    }

    /// Types present in this chart, in chart order
    pub fn types(&self) -> impl Iterator<Item = Type> + '_ {
        self.entries.keys().copied()
    }

    pub fn contains(&self, ty: Type) -> bool {
        self.entries.contains_key(&ty)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the row for a type, failing if the type is not in this generation
    pub fn entry(&self, ty: Type) -> Result<&TypeEntry, ChartError> {
        self.entries.get(&ty).ok_or(ChartError::InvalidType {
            ty,
            generation: self.generation,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    fn set(types: &[Type]) -> BTreeSet<Type> {
        types.iter().copied().collect()
    }

    fn small_chart() -> TypeChart {
        let mut rows = BTreeMap::new();
        rows.insert(
            Type::Fire,
            TypeRelations {
                weak: set(&[Type::Water]),
                resist: set(&[Type::Fire, Type::Grass]),
                immune: BTreeSet::new(),
            },
        );
        rows.insert(
            Type::Water,
            TypeRelations {
                weak: set(&[Type::Grass]),
                resist: set(&[Type::Fire, Type::Water]),
                immune: BTreeSet::new(),
            },
        );
        rows.insert(
            Type::Grass,
            TypeRelations {
                weak: set(&[Type::Fire]),
                resist: set(&[Type::Water, Type::Grass]),
                immune: BTreeSet::new(),
            },
        );
        TypeChart::new(6, rows).unwrap()
    }

    #[test]
    fn test_weakens_is_inverse_of_weak() {
        let chart = small_chart();
        assert_eq!(chart.entry(Type::Fire).unwrap().weakens, set(&[Type::Grass]));
        assert_eq!(chart.entry(Type::Water).unwrap().weakens, set(&[Type::Fire]));
        assert_eq!(chart.entry(Type::Grass).unwrap().weakens, set(&[Type::Water]));
    }

    #[test]
    fn test_entry_missing_type() {
        let chart = small_chart();
        assert_matches!(
            chart.entry(Type::Dragon),
            Err(ChartError::InvalidType { ty: Type::Dragon, generation: 6 })
        );
    }

    #[test]
    fn test_rows_must_reference_known_types() {
        let mut rows = BTreeMap::new();
        rows.insert(
            Type::Fire,
            TypeRelations {
                weak: set(&[Type::Rock]),
                ..Default::default()
            },
        );
        assert_matches!(
            TypeChart::new(1, rows),
            Err(ChartError::InvalidType { ty: Type::Rock, .. })
        );
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "generation": 2,
            "type_data": {
                "Normal": { "weak": ["Fighting"], "immune": ["Ghost"] },
                "Fighting": { "weak": [], "resist": [] },
                "Ghost": { "weak": ["Ghost"], "immune": ["Normal", "Fighting"] }
            }
        }"#;
        let chart = TypeChart::from_json(json).unwrap();

        assert_eq!(chart.generation(), 2);
        assert_eq!(chart.len(), 3);
        assert_eq!(
            chart.types().collect::<Vec<_>>(),
            vec![Type::Normal, Type::Fighting, Type::Ghost]
        );
        assert_eq!(
            chart.entry(Type::Fighting).unwrap().weakens,
            set(&[Type::Normal])
        );
        assert_eq!(chart.entry(Type::Ghost).unwrap().weakens, set(&[Type::Ghost]));
        assert!(chart.entry(Type::Fighting).unwrap().resist.is_empty());
    }

    #[test]
    fn test_from_json_invalid() {
        assert_matches!(
            TypeChart::from_json("{\"generation\": 1}"),
            Err(ChartError::InvalidData(_))
        );
        assert_matches!(
            TypeChart::from_json(r#"{"generation": 1, "type_data": {"Shadow": {}}}"#),
            Err(ChartError::InvalidData(_))
        );
    }
}
