//! A simulator for Life-like cellular automata on an unbounded lattice.

mod cells;
mod config;
mod error;
mod grid;
mod history;
pub mod patterns;
pub mod rules;
mod simulator;

pub use cells::{Age, BoundingBox, Coord, NEWBORN};
pub use config::{Config, DEFAULT_MAX_HISTORY, DEFAULT_RULE};
pub use error::Error;
pub use grid::SparseGrid;
pub use history::HistoryStore;
pub use patterns::{CatalogBuilder, Category, Pattern, PatternCatalog};
pub use rules::{RulePreset, RuleSet};
pub use simulator::Simulator;
