use dexplan_chart::ChartError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Unknown title: {0}")]
    UnknownTitle(String),

    #[error("Title is not available for planning: {0}")]
    TitleDisabled(String),

    #[error("Invalid reference data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Chart(#[from] ChartError),
}
