use thiserror::Error;

use crate::types::Type;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Type {ty} is not part of the generation {generation} chart")]
    InvalidType { ty: Type, generation: u8 },

    #[error("Expected one or two types, got {0}")]
    InvalidTypeCount(usize),

    #[error("Unknown type name: {0}")]
    UnknownTypeName(String),

    #[error("No type chart covers generation {0}")]
    NoChartForGeneration(u8),

    #[error("Invalid chart data: {0}")]
    InvalidData(String),
}
