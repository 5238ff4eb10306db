use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dexplan_chart::ChartBook;
use dexplan_roster::{items_from_json, RosterItem, TitleCatalog};
use tracing::info;

const TITLES_FILE: &str = "titles.json";
const ROSTER_FILE: &str = "roster.json";
const CHARTS_FILE: &str = "charts.json";

/// Static reference data shared by every planning session
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub titles: TitleCatalog,
    pub items: Vec<RosterItem>,
    pub charts: ChartBook,
}

impl ReferenceData {
    pub fn new(titles: TitleCatalog, items: Vec<RosterItem>, charts: ChartBook) -> Self {
        Self {
            titles,
            items,
            charts,
        }
    }

    /// Load titles and items from `dir`; the builtin charts are used unless
    /// `charts.json` is present
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        let titles = TitleCatalog::from_json(&read(dir, TITLES_FILE)?)
            .with_context(|| format!("Failed to parse {}", TITLES_FILE))?;
        let items = items_from_json(&read(dir, ROSTER_FILE)?)
            .with_context(|| format!("Failed to parse {}", ROSTER_FILE))?;

        let charts_path = dir.join(CHARTS_FILE);
        let charts = if charts_path.exists() {
            ChartBook::from_json(&read(dir, CHARTS_FILE)?)
                .with_context(|| format!("Failed to parse {}", CHARTS_FILE))?
        } else {
            ChartBook::standard()
        };

        info!(
            dir = %dir.display(),
            titles = titles.len(),
            items = items.len(),
            charts = charts.len(),
            "Loaded reference data"
        );
        Ok(Self::new(titles, items, charts))
    }
}

fn read(dir: &Path, file: &str) -> Result<String> {
    let path = dir.join(file);
    fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}
