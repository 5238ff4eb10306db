use std::env;
use std::path::PathBuf;

/// Where reference data lives and how verbosely to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Directory holding `titles.json`, `roster.json` and optionally `charts.json`
    pub data_dir: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl PlannerConfig {
    pub const DATA_DIR_VAR: &'static str = "DEXPLAN_DATA_DIR";
    pub const LOG_VAR: &'static str = "DEXPLAN_LOG";

    /// Defaults overridden by `DEXPLAN_DATA_DIR` and `DEXPLAN_LOG`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = env::var(Self::DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(filter) = env::var(Self::LOG_VAR) {
            config.log_filter = filter;
        }
        config
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            log_filter: "info".to_string(),
        }
    }
}
