//! Generation type charts and type profile resolution for the team planner.
//!
//! # Overview
//!
//! `dexplan-chart` is the leaf of the workspace:
//!
//! ```text
//! dexplan-chart (types, charts, profiles) ← THIS CRATE
//!        │
//!        ▼
//! dexplan-roster (titles, roster items, per-title profiles)
//!        │
//!        ▼
//! dexplan-team (team state, share codes, tallies)
//!        │
//!        ▼
//! dexplan-planner (session)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - elemental types, with the modern effectiveness matrix
//! - [`TypeChart`] - immutable weak/resist/immune rows for one generation,
//!   plus the derived `weakens` relation
//! - [`ChartBook`] - charts keyed by generation, with the builtin eras
//! - [`TypeProfile`] - derived weaknesses, resistances, immunities and coverage
//! - [`ProfileCache`] - memoized profile resolution per type pair
//!
//! # Example Usage
//!
//! ```
//! use dexplan_chart::{resolve_profile, ChartBook, Type};
//!
//! let chart = ChartBook::standard().for_generation(9).unwrap();
//! let profile = resolve_profile(&chart, &[Type::Fire, Type::Flying]).unwrap();
//!
//! assert!(profile.immunities.contains(&Type::Ground));
//! assert!(profile.weaknesses.contains(&Type::Rock));
//! ```

mod book;
mod chart;
mod error;
mod profile;
mod types;

pub use book::ChartBook;
pub use chart::{ChartData, TypeChart, TypeEntry, TypeRelations};
pub use error::ChartError;
pub use profile::{resolve_profile, Defense, ProfileCache, TypeProfile};
pub use types::{Type, EFFECTIVENESS};
