//! Error types for core-policy

use crate::kinds::{CategoryKind, RuleKind};
use alloc::string::String;
use core::fmt;

/// Result type alias for policy operations
pub type Result<T> = core::result::Result<T, PolicyError>;

/// Errors that can occur while building or decoding a policy tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// Element name is not `topics`, `services` or `actions`
    UnknownCategoryKind(String),

    /// Attribute name is not a known rule kind
    UnknownRuleKind(String),

    /// Rule value is neither `ALLOW` nor `DENY`
    UnknownRuleExpression(String),

    /// Rule kind used on a category it does not belong to (e.g. `topics` + `reply`)
    RuleKindMismatch {
        /// Category the rule was attached to
        category: CategoryKind,
        /// Offending rule kind
        rule: RuleKind,
    },

    /// Permission category without any rule attribute
    EmptyGrants(CategoryKind),
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCategoryKind(name) => write!(f, "Unknown permission category: {}", name),
            Self::UnknownRuleKind(name) => write!(f, "Unknown rule kind: {}", name),
            Self::UnknownRuleExpression(value) => {
                write!(f, "Unknown rule expression: {} (expected ALLOW or DENY)", value)
            }
            Self::RuleKindMismatch { category, rule } => write!(
                f,
                "Rule kind '{}' is not valid for '{}'",
                rule.as_str(),
                category.container()
            ),
            Self::EmptyGrants(category) => write!(
                f,
                "Permission category '{}' has no rule attribute",
                category.container()
            ),
        }
    }
}

impl core::error::Error for PolicyError {}
