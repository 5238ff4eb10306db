//! Charts for every supported generation

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::chart::{ChartData, TypeChart, TypeRelations};
use crate::error::ChartError;
use crate::types::Type;

/// Collection of type charts keyed by the first generation they apply to
#[derive(Debug, Clone, Default)]
pub struct ChartBook {
    charts: BTreeMap<u8, Arc<TypeChart>>,
}

impl ChartBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three chart eras: Gen 1, Gen 2-5 and Gen 6+
    pub fn standard() -> Self {
        let mut book = Self::new();
        for chart in [gen1_chart(), gen2_chart(), gen6_chart()] {
            book.insert(chart);
        }
        book
    }

    /// Parse a list of charts from JSON (`[{"generation": .., "type_data": {..}}, ..]`)
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        let data: Vec<ChartData> =
            serde_json::from_str(json).map_err(|e| ChartError::InvalidData(e.to_string()))?;

        let mut book = Self::new();
        for chart in data {
            book.insert(TypeChart::from_data(chart)?);
        }
        Ok(book)
    }

    /// Add a chart, replacing any chart for the same generation
    pub fn insert(&mut self, chart: TypeChart) {
        self.charts.insert(chart.generation(), Arc::new(chart));
    }

    /// The newest chart whose generation is not later than `generation`
    pub fn for_generation(&self, generation: u8) -> Result<Arc<TypeChart>, ChartError> {
        self.charts
            .range(..=generation)
            .next_back()
            .map(|(_, chart)| Arc::clone(chart))
            .ok_or(ChartError::NoChartForGeneration(generation))
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

/// Rows derived from the modern effectiveness matrix, restricted to `types`
///
/// Every reference stays inside `types`, so the result needs no validation.
fn rows_from_matrix(types: &[Type]) -> BTreeMap<Type, TypeRelations> {
    types
        .iter()
        .map(|&defender| {
            let mut relations = TypeRelations::default();
            for &attacker in types {
                let multiplier = attacker.effectiveness(defender);
                if multiplier == 0.0 {
                    relations.immune.insert(attacker);
                } else if multiplier < 1.0 {
                    relations.resist.insert(attacker);
                } else if multiplier > 1.0 {
                    relations.weak.insert(attacker);
                }
            }
            (defender, relations)
        })
        .collect()
}

fn gen6_chart() -> TypeChart {
    TypeChart::derive(6, rows_from_matrix(Type::all()))
}

fn gen2_chart() -> TypeChart {
    let types: Vec<Type> = Type::all()
        .iter()
        .copied()
        .filter(|t| *t != Type::Fairy)
        .collect();
    let mut rows = rows_from_matrix(&types);

    if let Some(steel) = rows.get_mut(&Type::Steel) {
        steel.resist.extend([Type::Ghost, Type::Dark]);
    }
    TypeChart::derive(2, rows)
}

fn gen1_chart() -> TypeChart {
    let types: Vec<Type> = Type::all()
        .iter()
        .copied()
        .filter(|t| !matches!(t, Type::Dark | Type::Steel | Type::Fairy))
        .collect();
    let mut rows = rows_from_matrix(&types);

    if let Some(bug) = rows.get_mut(&Type::Bug) {
        bug.weak.insert(Type::Poison);
    }
    if let Some(poison) = rows.get_mut(&Type::Poison) {
        poison.resist.remove(&Type::Bug);
        poison.weak.insert(Type::Bug);
    }
    if let Some(psychic) = rows.get_mut(&Type::Psychic) {
        psychic.weak.remove(&Type::Ghost);
        psychic.immune.insert(Type::Ghost);
    }
    if let Some(fire) = rows.get_mut(&Type::Fire) {
        fire.resist.remove(&Type::Ice);
    }
    TypeChart::derive(1, rows)
}
