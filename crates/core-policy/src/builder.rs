//! Builder pattern for folding node descriptions into a policy document

use crate::classify::NodeSubsets;
use crate::document::{PermissionCategory, PolicyDocument};
use crate::kinds::{Grant, RuleKind};
use crate::qualify::qualify;
use crate::{DEFAULT_ENCLAVE_PATH, DEFAULT_NODE_NAMESPACE};
use core_nodl::Node;

/// Qualify every name against `node` and append it to `category`, in order.
///
/// Callers skip empty name sets so that no empty category gets created.
pub fn add_rule_entries<'n, I>(category: &mut PermissionCategory, node: &Node, names: I)
where
    I: IntoIterator<Item = &'n str>,
{
    for name in names {
        category.push_entry(qualify(name, node.name()));
    }
}

/// Builder for converting nodes into a `PolicyDocument` with a fluent API
///
/// Each node gets a profile (`ns=""`, `node=<name>`) in the root enclave.
/// Its topics, services and actions are classified and written as `ALLOW`
/// entries into one permission category per rule kind. Existing enclaves,
/// profiles and categories are reused, never duplicated.
///
/// # Examples
///
/// ```
/// use core_nodl::{Node, Topic, TopicRole};
/// use core_policy::{Grant, PolicyBuilder, RuleKind};
///
/// let talker = Node::new("talker")
///     .with_topic(Topic::new("/chatter", TopicRole::Publisher));
///
/// let policy = PolicyBuilder::new().with_node(&talker).build();
///
/// let profile = policy.enclave("").unwrap().profile("", "talker").unwrap();
/// let topics = profile.permission_category(Grant::allow(RuleKind::Publish)).unwrap();
/// assert_eq!(topics.entries(), ["chatter"]);
/// ```
#[derive(Debug, Default)]
pub struct PolicyBuilder {
    document: PolicyDocument,
}

impl PolicyBuilder {
    /// Start from an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document, merging new nodes into it
    #[must_use]
    pub fn from_document(document: PolicyDocument) -> Self {
        Self { document }
    }

    /// Fold one node into the document
    pub fn add_node(&mut self, node: &Node) -> &mut Self {
        let subsets = NodeSubsets::new(node);
        let profile = self
            .document
            .find_or_create_enclave(DEFAULT_ENCLAVE_PATH)
            .find_or_create_profile(DEFAULT_NODE_NAMESPACE, node.name());

        for rule in RuleKind::ALL {
            let names = subsets.names(rule);
            if names.is_empty() {
                continue;
            }
            let category = profile.category_for(Grant::allow(rule));
            add_rule_entries(category, node, names);
        }
        self
    }

    /// Fold one node into the document
    #[must_use]
    pub fn with_node(mut self, node: &Node) -> Self {
        self.add_node(node);
        self
    }

    /// Fold several nodes into the document, in order
    #[must_use]
    pub fn with_nodes<'a, I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a Node>,
    {
        for node in nodes {
            self.add_node(node);
        }
        self
    }

    /// Document built so far
    #[must_use]
    pub fn document(&self) -> &PolicyDocument {
        &self.document
    }

    /// Finish and return the document
    #[must_use]
    pub fn build(self) -> PolicyDocument {
        self.document
    }
}

impl From<PolicyDocument> for PolicyBuilder {
    fn from(document: PolicyDocument) -> Self {
        Self::from_document(document)
    }
}

/// Fold `nodes` into `document` and return it
#[must_use]
pub fn convert(document: PolicyDocument, nodes: &[Node]) -> PolicyDocument {
    PolicyBuilder::from_document(document)
        .with_nodes(nodes)
        .build()
}
