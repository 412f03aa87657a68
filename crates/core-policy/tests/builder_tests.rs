//! Integration tests for PolicyBuilder

use core_nodl::{Action, Node, Parameter, Service, ServerRole, Topic, TopicRole};
use core_policy::{
    add_rule_entries, convert, CategoryKind, Grant, PermissionCategory, PolicyBuilder,
    PolicyDocument, RuleExpression, RuleKind,
};

fn talker() -> Node {
    Node::new("talker").with_topic(Topic::new("/chatter", TopicRole::Publisher))
}

fn listener() -> Node {
    Node::new("listener")
        .with_topic(Topic::new("/chatter", TopicRole::Subscriber))
        .with_topic(Topic::new("listener/status", TopicRole::Subscriber))
}

#[test]
fn test_talker_end_to_end() {
    let policy = PolicyBuilder::new().with_node(&talker()).build();

    assert_eq!(policy.enclaves().len(), 1);
    let enclave = &policy.enclaves()[0];
    assert_eq!(enclave.path(), "");
    assert_eq!(enclave.profiles().len(), 1);

    let profile = &enclave.profiles()[0];
    assert_eq!(profile.namespace(), "");
    assert_eq!(profile.node(), "talker");
    assert_eq!(profile.categories().len(), 1);

    let category = &profile.categories()[0];
    assert_eq!(category.kind(), CategoryKind::Topic);
    assert_eq!(category.grants(), [Grant::allow(RuleKind::Publish)]);
    assert_eq!(category.entries(), ["chatter"]);
}

#[test]
fn test_private_topic_qualified_per_node() {
    let policy = PolicyBuilder::new().with_node(&listener()).build();

    let profile = policy.enclave("").unwrap().profile("", "listener").unwrap();
    let subscribe = profile
        .permission_category(Grant::allow(RuleKind::Subscribe))
        .unwrap();
    assert_eq!(subscribe.entries(), ["chatter", "~/status"]);
}

#[test]
fn test_no_actions_no_action_category() {
    let node = Node::new("n")
        .with_topic(Topic::new("t", TopicRole::Both))
        .with_service(Service::new("s", ServerRole::Server));

    let policy = PolicyBuilder::new().with_node(&node).build();

    let profile = policy.enclave("").unwrap().profile("", "n").unwrap();
    assert_eq!(profile.categories_of(CategoryKind::Action).count(), 0);
    assert_eq!(profile.categories_of(CategoryKind::Topic).count(), 2);
    assert_eq!(profile.categories_of(CategoryKind::Service).count(), 1);
    assert!(profile
        .permission_category(Grant::allow(RuleKind::Request))
        .is_none());
}

#[test]
fn test_node_without_endpoints_gets_empty_profile() {
    let node = Node::new("idle").with_parameter(Parameter::new("rate").with_type("double"));

    let policy = PolicyBuilder::new().with_node(&node).build();

    let profile = policy.enclave("").unwrap().profile("", "idle").unwrap();
    assert!(profile.categories().is_empty());
}

#[test]
fn test_categories_follow_rule_table_order() {
    let node = Node::new("n")
        .with_action(Action::new("a", ServerRole::Both))
        .with_service(Service::new("s", ServerRole::Both))
        .with_topic(Topic::new("t", TopicRole::Both));

    let policy = PolicyBuilder::new().with_node(&node).build();

    let profile = policy.enclave("").unwrap().profile("", "n").unwrap();
    let rules: Vec<RuleKind> = profile
        .categories()
        .iter()
        .map(|c| c.grants()[0].rule)
        .collect();
    assert_eq!(rules, RuleKind::ALL.to_vec());
    assert!(profile
        .categories()
        .iter()
        .all(|c| c.grants()[0].expression == RuleExpression::Allow));
}

#[test]
fn test_nodes_get_independent_profiles() {
    let policy = PolicyBuilder::new()
        .with_nodes(&[talker(), listener()])
        .build();

    let enclave = policy.enclave("").unwrap();
    assert_eq!(enclave.profiles().len(), 2);
    let talker = enclave.profile("", "talker").unwrap();
    assert_eq!(talker.categories().len(), 1);
    assert_eq!(talker.categories()[0].entries(), ["chatter"]);
}

#[test]
fn test_repeated_conversion_accumulates() {
    let first = PolicyBuilder::new().with_node(&talker()).build();
    let extended = Node::new("talker").with_topic(Topic::new("/rosout", TopicRole::Publisher));

    let policy = convert(first, &[extended]);

    let profile = policy.enclave("").unwrap().profile("", "talker").unwrap();
    assert_eq!(profile.categories().len(), 1);
    assert_eq!(profile.categories()[0].entries(), ["chatter", "rosout"]);
}

#[test]
fn test_existing_structure_untouched() {
    let mut existing = PolicyDocument::new();
    existing
        .find_or_create_enclave("/other")
        .find_or_create_profile("/ns", "camera")
        .category_for(Grant::new(RuleKind::Publish, RuleExpression::Deny))
        .push_entry("image");
    let before = existing.enclave("/other").cloned();

    let policy = convert(existing, &[talker()]);

    assert_eq!(policy.enclaves().len(), 2);
    assert_eq!(policy.enclave("/other").cloned(), before);
}

#[test]
fn test_add_rule_entries_preserves_order() {
    let node = Node::new("cam");
    let mut category = PermissionCategory::new(Grant::allow(RuleKind::Publish));

    add_rule_entries(&mut category, &node, ["/b", "cam/a", "c"]);

    assert_eq!(category.entries(), ["b", "~/a", "c"]);
}

#[test]
fn test_unnamed_node_has_no_private_entries() {
    let node = Node::new("")
        .with_topic(Topic::new("/chatter", TopicRole::Publisher))
        .with_topic(Topic::new("status", TopicRole::Publisher));

    let policy = PolicyBuilder::new().with_node(&node).build();

    let profile = policy.enclave("").unwrap().profile("", "").unwrap();
    assert_eq!(
        profile.permission_category(Grant::allow(RuleKind::Publish)).unwrap().entries(),
        ["chatter", "status"]
    );
}
