//! All kinds of errors in this crate.

use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
///
/// Note that a malformed rule string is not an error for the simulator:
/// [`RuleSet::parse`](crate::rules::RuleSet::parse) never fails.
/// [`Error::ParseRuleError`] only comes from the strict parser.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// No pattern named {0:?} in the catalog.
    PatternNotFound(String),
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// The history capacity should be positive.
    NonPositiveError,
    /// Pattern {0:?} is defined more than once.
    DuplicatePattern(String),
    /// Category {0:?} refers to an unknown pattern {1:?}.
    UnknownCategoryMember(String, String),
    /// Pattern {0:?} does not belong to any category.
    UncategorizedPattern(String),
}
