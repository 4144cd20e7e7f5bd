//! Simulator configuration.

use crate::{error::Error, simulator::Simulator};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default rule string, Conway's Game of Life.
pub const DEFAULT_RULE: &str = "B3/S23";

/// The default number of snapshots kept for undo and redo.
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Simulator configuration.
///
/// The simulator will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The rule string of the cellular automaton, e.g., `"B3/S23"`.
    ///
    /// Malformed rule strings are accepted, see
    /// [`RuleSet::parse`](crate::rules::RuleSet::parse).
    #[educe(Default(expression = "String::from(DEFAULT_RULE)"))]
    pub rule_string: String,

    /// Maximal number of snapshots kept for undo and redo.
    ///
    /// Must be positive.
    #[educe(Default(expression = "DEFAULT_MAX_HISTORY"))]
    pub max_history: usize,
}

impl Config {
    /// Sets up a new configuration with the given rule string.
    pub fn new<S: ToString>(rule_string: S) -> Self {
        Config {
            rule_string: rule_string.to_string(),
            ..Config::default()
        }
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: ToString>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.to_string();
        self
    }

    /// Sets the maximal number of snapshots kept for undo and redo.
    pub fn set_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    /// Creates a new simulator from the configuration.
    ///
    /// Returns an error if `max_history` is 0.
    pub fn simulator(&self) -> Result<Simulator, Error> {
        if self.max_history == 0 {
            return Err(Error::NonPositiveError);
        }
        Ok(Simulator::with_config(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.rule_string, "B3/S23");
        assert_eq!(config.max_history, 100);
        assert_eq!(Config::new("B36/S23").max_history, 100);
    }

    #[test]
    fn zero_history() {
        let config = Config::default().set_max_history(0);
        assert_eq!(config.simulator().err(), Some(Error::NonPositiveError));
    }

    #[test]
    fn builder() -> Result<(), Error> {
        let sim = Config::default()
            .set_rule_string("B36/S23")
            .set_max_history(5)
            .simulator()?;
        assert_eq!(sim.rule_string(), "B36/S23");
        assert_eq!(sim.max_history(), 5);
        Ok(())
    }

    #[test]
    #[cfg(feature = "serde")]
    fn missing_fields_take_defaults() -> Result<(), serde_json::Error> {
        let config: Config = serde_json::from_str(r#"{"rule_string": "B2/S"}"#)?;
        assert_eq!(config, Config::new("B2/S"));
        let json = serde_json::to_string(&Config::default())?;
        assert_eq!(json, r#"{"rule_string":"B3/S23","max_history":100}"#);
        Ok(())
    }
}
