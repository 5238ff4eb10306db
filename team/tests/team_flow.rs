use std::collections::{BTreeMap, BTreeSet};

use assert_matches::assert_matches;
use dexplan_chart::{resolve_profile, Type, TypeChart, TypeProfile, TypeRelations};
use dexplan_roster::ItemId;
use dexplan_team::{
    decode, encode, recompute, MarkKind, RosterLookup, SlotId, TeamError, TeamState, TEAM_SIZE,
};
use pretty_assertions::assert_eq;

/// Hand-built dex over a three-type chart, independent of the builtin data
struct FakeDex {
    types: Vec<Type>,
    items: Vec<(ItemId, String, TypeProfile, bool)>,
}

impl FakeDex {
    fn new() -> Self {
        let mut rows = BTreeMap::new();
        rows.insert(Type::Fire, relations(&[Type::Water], &[Type::Fire, Type::Grass]));
        rows.insert(Type::Water, relations(&[Type::Grass], &[Type::Fire, Type::Water]));
        rows.insert(Type::Grass, relations(&[Type::Fire], &[Type::Water, Type::Grass]));
        let chart = TypeChart::new(5, rows).unwrap();

        let specs: [(u16, &str, &[Type], bool); 8] = [
            (1, "sprout", &[Type::Grass], false),
            (2, "ember", &[Type::Fire], true),
            (3, "drop", &[Type::Water], false),
            (4, "steam", &[Type::Fire, Type::Water], false),
            (5, "kelp", &[Type::Water, Type::Grass], true),
            (6, "ash", &[Type::Fire, Type::Grass], false),
            (7, "sea mist", &[Type::Water], false),
            (8, "bonfire", &[Type::Fire], false),
        ];
        let items = specs
            .into_iter()
            .map(|(base, slug, types, giant)| {
                let profile = resolve_profile(&chart, types).unwrap();
                (ItemId::new(base, 0), slug.to_string(), profile, giant)
            })
            .collect();

        Self {
            types: chart.types().collect(),
            items,
        }
    }

    fn id(&self, slug: &str) -> ItemId {
        self.resolve_slug(slug).unwrap()
    }
}

fn relations(weak: &[Type], resist: &[Type]) -> TypeRelations {
    TypeRelations {
        weak: weak.iter().copied().collect(),
        resist: resist.iter().copied().collect(),
        immune: BTreeSet::new(),
    }
}

impl RosterLookup for FakeDex {
    fn title_slug(&self) -> &str {
        "fake"
    }

    fn is_eligible(&self, id: ItemId) -> bool {
        self.items.iter().any(|(item, ..)| *item == id)
    }

    fn has_giant_form(&self, id: ItemId) -> bool {
        self.items.iter().any(|(item, _, _, giant)| *item == id && *giant)
    }

    fn slug(&self, id: ItemId) -> Option<&str> {
        self.items
            .iter()
            .find(|(item, ..)| *item == id)
            .map(|(_, slug, ..)| slug.as_str())
    }

    fn resolve_slug(&self, slug: &str) -> Option<ItemId> {
        self.items
            .iter()
            .find(|(_, s, ..)| s == slug)
            .map(|(id, ..)| *id)
    }

    fn profile(&self, id: ItemId) -> Option<&TypeProfile> {
        self.items
            .iter()
            .find(|(item, ..)| *item == id)
            .map(|(_, _, profile, _)| profile)
    }

    fn chart_types(&self) -> Vec<Type> {
        self.types.clone()
    }
}

#[test]
fn test_full_team_then_share_and_restore() {
    let dex = FakeDex::new();
    let mut team = TeamState::new(dex.title_slug());

    for slug in ["sprout", "ember", "drop", "steam", "kelp", "ash"] {
        team.add(dex.id(slug), slug == "kelp", &dex).unwrap();
    }
    assert_eq!(team.len(), TEAM_SIZE);
    assert_matches!(team.add(dex.id("bonfire"), false, &dex), Err(TeamError::TeamFull));

    team.remove(SlotId(0)).unwrap();
    team.add(dex.id("sea mist"), false, &dex).unwrap();

    let link = encode(&team, &dex);
    assert_eq!(link, "fake+ember+drop+steam+kelp-gmax+ash+sea%20mist");

    let restored = TeamState::from_code(&decode(&link).unwrap(), &dex);
    assert_eq!(restored, team);
}

#[test]
fn test_stale_link_keeps_valid_members() {
    let dex = FakeDex::new();
    let code = decode("fake+ember+retired+ember-gmax+sprout-gmax+drop").unwrap();

    let team = TeamState::from_code(&code, &dex);
    let slugs: Vec<&str> = team.members().map(|m| dex.slug(m.id).unwrap()).collect();
    assert_eq!(slugs, vec!["ember", "drop"]);
}

#[test]
fn test_dual_type_cancellation_in_tallies() {
    // Steam (Fire/Water): each type's weakness is resisted by the other, and the
    // Grass and Water resistances are cancelled by the other type's weaknesses.
    let dex = FakeDex::new();
    let mut team = TeamState::new("fake");
    team.add(dex.id("steam"), false, &dex).unwrap();

    let analysis = recompute(&team, &dex);
    let water = analysis.get(Type::Water).unwrap();
    let grass = analysis.get(Type::Grass).unwrap();
    let fire = analysis.get(Type::Fire).unwrap();

    assert_eq!(water.defense.count, 0);
    assert_eq!(water.defense.set_marks().count(), 0);
    assert_eq!(grass.defense.count, 0);
    assert!(!grass.defense.warning);
    assert_eq!(fire.defense.count, 1);

    // Steam covers Grass (via Fire) and Fire (via Water)
    assert_eq!(grass.offense.count, 1);
    assert_eq!(fire.offense.count, 1);
    assert_eq!(water.offense.count, 0);
    assert!(!water.offense.warning);
}

#[test]
fn test_tally_follows_every_edit() {
    let dex = FakeDex::new();
    let mut team = TeamState::new("fake");
    team.add(dex.id("ember"), false, &dex).unwrap();
    team.add(dex.id("drop"), false, &dex).unwrap();

    let water = recompute(&team, &dex).get(Type::Water).unwrap().clone();
    let kinds: Vec<MarkKind> = water.defense.set_marks().map(|m| m.kind).collect();
    assert_eq!(kinds, vec![MarkKind::Negative, MarkKind::Positive]);
    assert_eq!(water.defense.count, 0);
    assert!(!water.defense.warning);

    team.remove_member(dex.id("drop")).unwrap();
    let water = recompute(&team, &dex).get(Type::Water).unwrap().clone();
    assert_eq!(water.defense.count, -1);
    assert!(water.defense.warning);
    assert_eq!(water.defense.marks[0].member, Some(dex.id("ember")));
}
