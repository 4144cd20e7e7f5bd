//! Cellular automata rules.
//!
//! Only totalistic Life-like rules are supported. For the notations of rule
//! strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

mod life;
mod presets;

pub use life::{RuleSet, MAX_NEIGHBORS};
pub use presets::RulePreset;
