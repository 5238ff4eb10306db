//! Per-title roster with precomputed type profiles

use std::collections::HashMap;
use std::sync::Arc;

use dexplan_chart::{ChartBook, ProfileCache, Type, TypeChart, TypeProfile};

use crate::error::RosterError;
use crate::item::{ItemId, RosterItem};
use crate::title::Title;

/// A roster item as seen by one title: effective types and resolved profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub item: RosterItem,
    pub types: Vec<Type>,
    pub profile: TypeProfile,
}

impl RosterEntry {
    pub fn id(&self) -> ItemId {
        self.item.id
    }

    pub fn slug(&self) -> &str {
        &self.item.slug
    }
}

/// Items selectable for one title
///
/// Built once per title selection; profiles are never recomputed on team edits.
#[derive(Debug, Clone)]
pub struct Roster {
    title: Title,
    chart: Arc<TypeChart>,
    entries: Vec<RosterEntry>,
    by_id: HashMap<ItemId, usize>,
    by_slug: HashMap<String, usize>,
}

impl Roster {
    /// Collect the items belonging to any of the title's dexes and resolve their profiles
    ///
    /// Item order follows `items`. Items repeating an earlier id or slug are ignored.
    pub fn load(title: &Title, items: &[RosterItem], charts: &ChartBook) -> Result<Self, RosterError> {
        let chart = charts.for_generation(title.generation)?;
        let mut cache = ProfileCache::new(&chart);

        let mut entries = Vec::new();
        let mut by_id = HashMap::new();
        let mut by_slug = HashMap::new();

        for item in items {
            if !title.dexes.iter().any(|dex| item.in_dex(dex)) {
                continue;
            }
            if by_id.contains_key(&item.id) || by_slug.contains_key(&item.slug) {
                continue;
            }

            let types = item.types_for_generation(title.generation).to_vec();
            let profile = cache.resolve(&types)?.clone();

            by_id.insert(item.id, entries.len());
            by_slug.insert(item.slug.clone(), entries.len());
            entries.push(RosterEntry {
                item: item.clone(),
                types,
                profile,
            });
        }

        Ok(Self {
            title: title.clone(),
            chart: Arc::clone(&chart),
            entries,
            by_id,
            by_slug,
        })
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn chart(&self) -> &TypeChart {
        &self.chart
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn get(&self, id: ItemId) -> Option<&RosterEntry> {
        self.by_id.get(&id).map(|&idx| &self.entries[idx])
    }

    pub fn find_slug(&self, slug: &str) -> Option<&RosterEntry> {
        self.by_slug.get(slug).map(|&idx| &self.entries[idx])
    }

    /// Members of one dex grouping, in roster order
    pub fn dex<'a>(&'a self, dex: &'a str) -> impl Iterator<Item = &'a RosterEntry> + 'a {
        self.entries.iter().filter(move |e| e.item.in_dex(dex))
    }
}
