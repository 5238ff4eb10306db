use dexplan_chart::{Type, TypeProfile};
use dexplan_roster::{ItemId, Roster};

/// Read-only view of the active title's roster used by team edits and analysis
pub trait RosterLookup {
    /// Slug of the active title
    fn title_slug(&self) -> &str;

    /// Whether the item may join a team for the active title
    fn is_eligible(&self, id: ItemId) -> bool;

    fn has_giant_form(&self, id: ItemId) -> bool;

    fn slug(&self, id: ItemId) -> Option<&str>;

    fn resolve_slug(&self, slug: &str) -> Option<ItemId>;

    /// Precomputed profile of an eligible item
    fn profile(&self, id: ItemId) -> Option<&TypeProfile>;

    /// Types of the active chart, in chart order
    fn chart_types(&self) -> Vec<Type>;
}

impl RosterLookup for Roster {
    fn title_slug(&self) -> &str {
        &self.title().slug
    }

    fn is_eligible(&self, id: ItemId) -> bool {
        self.contains(id)
    }

    fn has_giant_form(&self, id: ItemId) -> bool {
        self.get(id).is_some_and(|e| e.item.gigantamax)
    }

    fn slug(&self, id: ItemId) -> Option<&str> {
        self.get(id).map(|e| e.slug())
    }

    fn resolve_slug(&self, slug: &str) -> Option<ItemId> {
        self.find_slug(slug).map(|e| e.id())
    }

    fn profile(&self, id: ItemId) -> Option<&TypeProfile> {
        self.get(id).map(|e| &e.profile)
    }

    fn chart_types(&self) -> Vec<Type> {
        self.chart().types().collect()
    }
}
