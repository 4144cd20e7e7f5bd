//! Some well-known Life-like rules.

use super::RuleSet;
use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Some well-known Life-like rules, by name.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RulePreset {
    /// `B3/S23`.
    #[educe(Default)]
    #[cfg_attr(feature = "serde", serde(rename = "Conway's Life"))]
    Life,
    /// `B36/S23`.
    HighLife,
    /// `B3678/S34678`.
    #[cfg_attr(feature = "serde", serde(rename = "Day & Night"))]
    DayAndNight,
    /// `B2/S`.
    ///
    /// Every living cell dies in each generation.
    Seeds,
    /// `B3/S12345`.
    Maze,
}

impl RulePreset {
    /// All the presets, in the order they are usually listed.
    pub const ALL: [RulePreset; 5] = [
        RulePreset::Life,
        RulePreset::HighLife,
        RulePreset::DayAndNight,
        RulePreset::Seeds,
        RulePreset::Maze,
    ];

    /// The rule string.
    pub fn rule_string(self) -> &'static str {
        match self {
            RulePreset::Life => "B3/S23",
            RulePreset::HighLife => "B36/S23",
            RulePreset::DayAndNight => "B3678/S34678",
            RulePreset::Seeds => "B2/S",
            RulePreset::Maze => "B3/S12345",
        }
    }

    /// The rule.
    pub fn rule(self) -> RuleSet {
        RuleSet::parse(self.rule_string())
    }

    /// The preset after this one, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Finds the preset with the given rule string, if any.
    pub fn find(rule_string: &str) -> Option<Self> {
        let rule = RuleSet::parse(rule_string);
        Self::ALL.iter().copied().find(|p| p.rule() == rule)
    }
}

impl FromStr for RulePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Conway's Life" | "Life" => Ok(RulePreset::Life),
            "HighLife" => Ok(RulePreset::HighLife),
            "Day & Night" => Ok(RulePreset::DayAndNight),
            "Seeds" => Ok(RulePreset::Seeds),
            "Maze" => Ok(RulePreset::Maze),
            _ => Err(String::from("invalid RulePreset")),
        }
    }
}

impl Display for RulePreset {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            RulePreset::Life => "Conway's Life",
            RulePreset::HighLife => "HighLife",
            RulePreset::DayAndNight => "Day & Night",
            RulePreset::Seeds => "Seeds",
            RulePreset::Maze => "Maze",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for preset in RulePreset::ALL {
            assert_eq!(preset.to_string().parse(), Ok(preset));
        }
    }

    #[test]
    fn rule_strings_are_canonical() {
        for preset in RulePreset::ALL {
            assert_eq!(preset.rule().to_string(), preset.rule_string());
        }
    }

    #[test]
    fn next_cycles_through_all() {
        let mut preset = RulePreset::default();
        for _ in 0..RulePreset::ALL.len() {
            preset = preset.next();
        }
        assert_eq!(preset, RulePreset::default());
        assert_eq!(RulePreset::Maze.next(), RulePreset::Life);
    }

    #[test]
    fn find() {
        assert_eq!(RulePreset::find("B63/S32"), Some(RulePreset::HighLife));
        assert_eq!(RulePreset::find("B2/S"), Some(RulePreset::Seeds));
        assert_eq!(RulePreset::find("B1/S1"), None);
    }
}
