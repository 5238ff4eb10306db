//! Shared fixtures for unit tests

use dexplan_chart::{ChartBook, Type};
use dexplan_roster::{ItemId, Roster, RosterItem, Title};

pub fn id(base: u16) -> ItemId {
    ItemId::new(base, 0)
}

fn item(base: u16, slug: &str, types: &[Type], gigantamax: bool, dexes: &[&str]) -> RosterItem {
    let mut item = RosterItem::new(id(base), slug, types.to_vec());
    item.gigantamax = gigantamax;
    item.dexes = dexes.iter().map(|d| d.to_string()).collect();
    item
}

pub fn fixture_items() -> Vec<RosterItem> {
    vec![
        item(6, "charizard", &[Type::Fire, Type::Flying], true, &["galar"]),
        item(9, "blastoise", &[Type::Water], true, &["galar"]),
        item(25, "pikachu", &[Type::Electric], false, &["galar"]),
        item(35, "clefairy", &[Type::Fairy], false, &["galar"]),
        item(94, "gengar", &[Type::Ghost, Type::Poison], true, &["galar"]),
        item(131, "lapras", &[Type::Water, Type::Ice], true, &["galar"]),
        item(143, "snorlax", &[Type::Normal], true, &["galar"]),
        item(122, "mr mime", &[Type::Psychic, Type::Fairy], false, &["galar"]),
        item(152, "chikorita", &[Type::Grass], false, &["johto"]),
    ]
}

pub fn fixture_title() -> Title {
    Title {
        slug: "swsh".to_string(),
        name: Some("Pokémon Sword and Shield".to_string()),
        generation: 8,
        versions: Vec::new(),
        dexes: vec!["galar".to_string()],
        disabled: false,
    }
}

pub fn fixture_roster() -> Roster {
    Roster::load(&fixture_title(), &fixture_items(), &ChartBook::standard())
        .expect("fixture roster loads")
}
