//! Roster items (species and forms) as supplied by the dex data

use std::fmt;

use dexplan_chart::Type;
use serde::{Deserialize, Serialize};

/// Stable identity of a roster item: national dex number plus form number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId {
    #[serde(rename = "base_id")]
    pub base: u16,
    #[serde(rename = "form_id", default)]
    pub form: u16,
}

impl ItemId {
    pub const fn new(base: u16, form: u16) -> Self {
        Self { base, form }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}_{:03}", self.base, self.form)
    }
}

/// Types an item had before a later generation retyped it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeOverride {
    /// First generation in which the item's current types apply
    pub generation: u8,
    /// Types used by titles older than `generation`
    pub types: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterItem {
    #[serde(flatten)]
    pub id: ItemId,

    /// URL-facing identifier, unique across the roster (e.g. "charizard")
    pub slug: String,

    /// Display name
    pub name: String,

    /// Current one or two types
    pub types: Vec<Type>,

    #[serde(default)]
    pub type_override: Option<TypeOverride>,

    /// Has a cosmetic female variant
    #[serde(default)]
    pub gender_variant: bool,

    /// Has a giant ("gmax") form
    #[serde(default)]
    pub gigantamax: bool,

    /// Dex groupings this item belongs to
    #[serde(default)]
    pub dexes: Vec<String>,
}

impl RosterItem {
    pub fn new(id: ItemId, slug: impl Into<String>, types: Vec<Type>) -> Self {
        let slug = slug.into();
        Self {
            id,
            name: slug.clone(),
            slug,
            types,
            type_override: None,
            gender_variant: false,
            gigantamax: false,
            dexes: Vec::new(),
        }
    }

    /// Types as seen by a title of the given generation
    pub fn types_for_generation(&self, generation: u8) -> &[Type] {
        match &self.type_override {
            Some(over) if generation < over.generation => &over.types,
            _ => &self.types,
        }
    }

    pub fn in_dex(&self, dex: &str) -> bool {
        self.dexes.iter().any(|d| d == dex)
    }
}
