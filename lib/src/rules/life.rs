//! Totalistic Life-like rules.

use crate::error::Error;
use ca_rules::ParseLife;
use log::debug;
use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest number of living neighbors a cell can have.
pub const MAX_NEIGHBORS: u8 = 8;

/// A totalistic Life-like rule, written as `B<digits>/S<digits>`.
///
/// `birth` holds the neighbor counts that turn a dead cell into a living one,
/// `survival` the neighbor counts that keep a living cell alive.
///
/// Counts greater than [`MAX_NEIGHBORS`] may be stored, but never match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct RuleSet {
    birth: BTreeSet<u8>,
    survival: BTreeSet<u8>,
    /// Whether a dead cell with `n` living neighbors is born, for `n` in `0..=8`.
    birth_table: [bool; MAX_NEIGHBORS as usize + 1],
    /// Whether a living cell with `n` living neighbors survives.
    survival_table: [bool; MAX_NEIGHBORS as usize + 1],
}

impl RuleSet {
    /// Constructs a new rule from the `b` and `s` data.
    ///
    /// Duplicates are ignored.
    pub fn new<B, S>(b: B, s: S) -> Self
    where
        B: IntoIterator<Item = u8>,
        S: IntoIterator<Item = u8>,
    {
        let birth: BTreeSet<u8> = b.into_iter().collect();
        let survival: BTreeSet<u8> = s.into_iter().collect();
        let table = |set: &BTreeSet<u8>| {
            let mut table = [false; MAX_NEIGHBORS as usize + 1];
            for &n in set.range(..=MAX_NEIGHBORS) {
                table[n as usize] = true;
            }
            table
        };
        RuleSet {
            birth_table: table(&birth),
            survival_table: table(&survival),
            birth,
            survival,
        }
    }

    /// The rule in which every cell dies, and nothing is ever born.
    pub fn frozen() -> Self {
        Self::new(None, None)
    }

    /// Parses a rule string of the form `B<digits>/S<digits>`, such as `"B3/S23"`.
    ///
    /// This parser never fails. The string is split at `/`, and must have
    /// exactly two parts. Every digit after a leading `B` in the first part is
    /// a birth count, and every digit after a leading `S` in the second part
    /// is a survival count. A part without its prefix gives an empty set, and
    /// a string that does not have two parts gives empty sets on both sides.
    pub fn parse(rule_string: &str) -> Self {
        let digits = |part: &str, prefix: char| -> Vec<u8> {
            part.strip_prefix(prefix)
                .map(|rest| {
                    rest.chars()
                        .filter_map(|c| c.to_digit(10))
                        .map(|d| d as u8)
                        .collect()
                })
                .unwrap_or_default()
        };
        let parts: Vec<&str> = rule_string.split('/').collect();
        match parts.as_slice() {
            [b, s] => Self::new(digits(b, 'B'), digits(s, 'S')),
            _ => {
                debug!("Rule string {:?} does not have two parts", rule_string);
                Self::frozen()
            }
        }
    }

    /// Whether a cell is alive in the next generation.
    #[inline]
    pub fn evaluate(&self, alive: bool, neighbors: u8) -> bool {
        let table = if alive {
            &self.survival_table
        } else {
            &self.birth_table
        };
        table.get(neighbors as usize).copied().unwrap_or(false)
    }

    /// Neighbor counts that give birth to a dead cell.
    pub fn birth(&self) -> &BTreeSet<u8> {
        &self.birth
    }

    /// Neighbor counts that keep a living cell alive.
    pub fn survival(&self) -> &BTreeSet<u8> {
        &self.survival
    }

    /// Whether the rule contains `B0`.
    ///
    /// A dead cell without living neighbors is never examined, so `B0` has
    /// no effect on the unbounded lattice.
    pub fn has_b0(&self) -> bool {
        self.birth_table[0]
    }

    /// Whether nothing can ever be alive after one generation.
    pub fn is_frozen(&self) -> bool {
        !self.birth_table.iter().chain(&self.survival_table).any(|&b| b)
    }
}

/// Conway's Game of Life.
impl Default for RuleSet {
    fn default() -> Self {
        Self::new([3], [2, 3])
    }
}

impl ParseLife for RuleSet {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(b, s)
    }
}

/// The strict parser.
///
/// Accepts every notation of Life-like rules that
/// [`ca_rules`] understands, e.g., `B3/S23`, `23/3` and `b3s23`.
impl FromStr for RuleSet {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rule: RuleSet = ParseLife::parse_rule(input).map_err(Error::ParseRuleError)?;
        Ok(rule)
    }
}

/// Displays the rule as `B<digits>/S<digits>`, digits in ascending order.
impl Display for RuleSet {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("B")?;
        for n in &self.birth {
            write!(f, "{}", n)?;
        }
        f.write_str("/S")?;
        for n in &self.survival {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

impl From<RuleSet> for String {
    fn from(rule: RuleSet) -> Self {
        rule.to_string()
    }
}

/// Permissive, like [`RuleSet::parse`].
impl From<&str> for RuleSet {
    fn from(rule_string: &str) -> Self {
        Self::parse(rule_string)
    }
}

impl TryFrom<String> for RuleSet {
    type Error = std::convert::Infallible;

    fn try_from(rule_string: String) -> Result<Self, Self::Error> {
        Ok(Self::parse(&rule_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{collection::vec, prelude::*};

    #[test]
    fn conway() {
        let rule = RuleSet::parse("B3/S23");
        assert_eq!(rule, RuleSet::default());
        assert!(rule.evaluate(false, 3));
        assert!(!rule.evaluate(false, 2));
        assert!(rule.evaluate(true, 2));
        assert!(rule.evaluate(true, 3));
        assert!(!rule.evaluate(true, 4));
        assert!(!rule.evaluate(true, 1));
    }

    #[test]
    fn duplicates_are_harmless() {
        let rule = RuleSet::parse("B33/S2323");
        assert_eq!(rule, RuleSet::default());
        assert_eq!(rule.to_string(), "B3/S23");
    }

    #[test]
    fn malformed_rules_freeze() {
        for rule_string in ["", "B3", "B3/S23/", "3/23", "Life", "B3S23", "/"] {
            let rule = RuleSet::parse(rule_string);
            assert!(rule.is_frozen(), "{:?} should be frozen", rule_string);
            assert_eq!(rule.to_string(), "B/S");
        }
    }

    #[test]
    fn partial_rules() {
        let rule = RuleSet::parse("B36/23");
        assert_eq!(rule.birth().iter().copied().collect::<Vec<_>>(), vec![3, 6]);
        assert!(rule.survival().is_empty());

        let rule = RuleSet::parse("36/S23");
        assert!(rule.birth().is_empty());
        assert_eq!(rule.survival().iter().copied().collect::<Vec<_>>(), vec![2, 3]);

        let rule = RuleSet::parse("B2/S");
        assert!(rule.evaluate(false, 2));
        assert!((0..=8).all(|n| !rule.evaluate(true, n)));
    }

    #[test]
    fn non_digits_are_skipped() {
        let rule = RuleSet::parse("B3x6/S2 3");
        assert_eq!(rule.to_string(), "B36/S23");
    }

    #[test]
    fn counts_out_of_range_never_match() {
        let rule = RuleSet::parse("B9/S9");
        assert_eq!(rule.to_string(), "B9/S9");
        assert!(rule.is_frozen());
        assert!(!rule.evaluate(false, 9));
        assert!(!rule.evaluate(true, 200));
    }

    #[test]
    fn b0() {
        assert!(RuleSet::parse("B0/S").has_b0());
        assert!(!RuleSet::default().has_b0());
    }

    #[test]
    fn strict_parser() {
        assert_eq!("B3/S23".parse::<RuleSet>(), Ok(RuleSet::default()));
        assert_eq!("23/3".parse::<RuleSet>(), Ok(RuleSet::default()));
        assert_eq!(
            "B36/S23".parse::<RuleSet>().map(|r| r.to_string()),
            Ok(String::from("B36/S23"))
        );
        assert!(matches!(
            "B3/S2x".parse::<RuleSet>(),
            Err(Error::ParseRuleError(_))
        ));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_uses_rule_strings() -> Result<(), serde_json::Error> {
        let rule: RuleSet = serde_json::from_str("\"B36/S23\"")?;
        assert_eq!(rule, RuleSet::new([3, 6], [2, 3]));
        assert_eq!(serde_json::to_string(&rule)?, "\"B36/S23\"");
        Ok(())
    }

    /// A subset of `0..=8`, one flag per count.
    fn counts() -> impl Strategy<Value = BTreeSet<u8>> {
        vec(any::<bool>(), 9).prop_map(|flags| {
            (0..=MAX_NEIGHBORS)
                .zip(flags)
                .filter_map(|(n, present)| present.then_some(n))
                .collect()
        })
    }

    proptest! {
        /// Formatting a rule and parsing it back gives the same rule.
        #[test]
        fn round_trip(birth in counts(), survival in counts()) {
            let rule = RuleSet::new(birth.clone(), survival.clone());
            let parsed = RuleSet::parse(&rule.to_string());
            prop_assert_eq!(parsed.birth(), &birth);
            prop_assert_eq!(parsed.survival(), &survival);
        }
    }
}
