//! Titles (games) the planner can be opened for

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// One version of a paired release (e.g. "Red" of "Red and Blue")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    /// Identifier used as the first token of a team code
    pub slug: String,

    /// Explicit display name; derived from `versions` when absent
    #[serde(default)]
    pub name: Option<String>,

    /// Generation whose type chart applies
    pub generation: u8,

    #[serde(default)]
    pub versions: Vec<Version>,

    /// Dex groupings whose members may join a team, in display order
    #[serde(default)]
    pub dexes: Vec<String>,

    /// Listed but not yet plannable
    #[serde(default)]
    pub disabled: bool,
}

impl Title {
    /// "Pokémon Red and Pokémon Blue", "Pokémon Red, Pokémon Blue, and Pokémon Yellow"
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }

        let mut versions: Vec<String> = self
            .versions
            .iter()
            .map(|v| format!("Pokémon {}", v.name))
            .collect();

        if versions.len() > 2 {
            if let Some(last) = versions.last_mut() {
                *last = format!("and {last}");
            }
            return versions.join(", ");
        }
        versions.join(" and ")
    }
}

/// Ordered list of titles, as shown by the game picker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleCatalog {
    titles: Vec<Title>,
}

impl TitleCatalog {
    pub fn new(titles: Vec<Title>) -> Self {
        Self { titles }
    }

    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        serde_json::from_str(json).map_err(|e| RosterError::InvalidData(e.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Title> {
        self.titles.iter()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&Title> {
        self.titles.iter().find(|t| t.slug == slug)
    }

    /// Look up a title that may be planned for
    pub fn selectable(&self, slug: &str) -> Result<&Title, RosterError> {
        let title = self
            .get(slug)
            .ok_or_else(|| RosterError::UnknownTitle(slug.to_string()))?;
        if title.disabled {
            return Err(RosterError::TitleDisabled(slug.to_string()));
        }
        Ok(title)
    }
}
