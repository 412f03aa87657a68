//! Closed vocabularies of the policy format
//!
//! - `CategoryKind`: what a permission category governs (`topics`, `services`, `actions`)
//! - `RuleKind`: the directional rule attribute (`publish`, `reply`, ...)
//! - `RuleExpression`: `ALLOW` or `DENY`
//! - `Grant`: one rule attribute on a category, e.g. `publish="ALLOW"`
//!
//! Every rule kind belongs to exactly one category kind. `RuleKind::ALL`
//! lists the six pairings in the order generated categories are emitted.

use crate::error::{PolicyError, Result};
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

/// Kind of communication a permission category governs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryKind {
    /// `<topics>` / `<topic>`
    Topic,
    /// `<services>` / `<service>`
    Service,
    /// `<actions>` / `<action>`
    Action,
}

impl CategoryKind {
    /// All category kinds, in document order
    pub const ALL: [Self; 3] = [Self::Topic, Self::Service, Self::Action];

    /// Element name of a single rule entry (`topic`, `service`, `action`)
    #[must_use]
    pub const fn element(self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::Service => "service",
            Self::Action => "action",
        }
    }

    /// Element name of the category itself (`topics`, `services`, `actions`)
    #[must_use]
    pub const fn container(self) -> &'static str {
        match self {
            Self::Topic => "topics",
            Self::Service => "services",
            Self::Action => "actions",
        }
    }

    /// The two rule kinds that may appear on this category
    #[must_use]
    pub const fn rule_kinds(self) -> [RuleKind; 2] {
        match self {
            Self::Topic => [RuleKind::Subscribe, RuleKind::Publish],
            Self::Service => [RuleKind::Reply, RuleKind::Request],
            Self::Action => [RuleKind::Execute, RuleKind::Call],
        }
    }

    /// Resolve a category from its container element name
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::UnknownCategoryKind` for any other name
    pub fn from_container(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.container() == name)
            .ok_or_else(|| PolicyError::UnknownCategoryKind(name.to_string()))
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.container())
    }
}

/// Directional rule attribute of a permission category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleKind {
    /// Subscribe to topics
    Subscribe,
    /// Publish on topics
    Publish,
    /// Reply to service requests
    Reply,
    /// Send service requests
    Request,
    /// Execute action goals
    Execute,
    /// Call actions
    Call,
}

impl RuleKind {
    /// The six (category, rule) pairings, in emission order
    pub const ALL: [Self; 6] = [
        Self::Subscribe,
        Self::Publish,
        Self::Reply,
        Self::Request,
        Self::Execute,
        Self::Call,
    ];

    /// Attribute name in the policy document
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subscribe => "subscribe",
            Self::Publish => "publish",
            Self::Reply => "reply",
            Self::Request => "request",
            Self::Execute => "execute",
            Self::Call => "call",
        }
    }

    /// Category this rule kind belongs to
    #[must_use]
    pub const fn category(self) -> CategoryKind {
        match self {
            Self::Subscribe | Self::Publish => CategoryKind::Topic,
            Self::Reply | Self::Request => CategoryKind::Service,
            Self::Execute | Self::Call => CategoryKind::Action,
        }
    }
}

impl FromStr for RuleKind {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| PolicyError::UnknownRuleKind(s.to_string()))
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a rule attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleExpression {
    /// `ALLOW`
    Allow,
    /// `DENY` (never generated, preserved when loaded)
    Deny,
}

impl RuleExpression {
    /// Attribute value in the policy document
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "ALLOW",
            Self::Deny => "DENY",
        }
    }
}

impl FromStr for RuleExpression {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ALLOW" => Ok(Self::Allow),
            "DENY" => Ok(Self::Deny),
            other => Err(PolicyError::UnknownRuleExpression(other.to_string())),
        }
    }
}

impl fmt::Display for RuleExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule attribute of a permission category, e.g. `publish="ALLOW"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grant {
    /// Rule kind (attribute name)
    pub rule: RuleKind,
    /// Rule expression (attribute value)
    pub expression: RuleExpression,
}

impl Grant {
    /// Create a grant
    #[must_use]
    pub const fn new(rule: RuleKind, expression: RuleExpression) -> Self {
        Self { rule, expression }
    }

    /// Create an `ALLOW` grant
    #[must_use]
    pub const fn allow(rule: RuleKind) -> Self {
        Self::new(rule, RuleExpression::Allow)
    }

    /// Category this grant belongs to
    #[must_use]
    pub const fn category(self) -> CategoryKind {
        self.rule.category()
    }
}
