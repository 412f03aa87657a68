//! Integration tests for node descriptions

use core_nodl::{Action, Node, Parameter, Service, ServerRole, Topic, TopicRole};

#[test]
fn test_topic_role_from_flags() {
    assert_eq!(TopicRole::from_flags(true, false), Some(TopicRole::Publisher));
    assert_eq!(TopicRole::from_flags(false, true), Some(TopicRole::Subscriber));
    assert_eq!(TopicRole::from_flags(true, true), Some(TopicRole::Both));
    assert_eq!(TopicRole::from_flags(false, false), None);
}

#[test]
fn test_server_role_from_flags() {
    assert_eq!(ServerRole::from_flags(true, false), Some(ServerRole::Server));
    assert_eq!(ServerRole::from_flags(false, true), Some(ServerRole::Client));
    assert_eq!(ServerRole::from_flags(true, true), Some(ServerRole::Both));
    assert_eq!(ServerRole::from_flags(false, false), None);
}

#[test]
fn test_role_directions() {
    assert!(TopicRole::Publisher.publishes() && !TopicRole::Publisher.subscribes());
    assert!(TopicRole::Subscriber.subscribes() && !TopicRole::Subscriber.publishes());
    assert!(TopicRole::Both.publishes() && TopicRole::Both.subscribes());

    assert!(ServerRole::Server.serves() && !ServerRole::Server.calls());
    assert!(ServerRole::Client.calls() && !ServerRole::Client.serves());
    assert!(ServerRole::Both.serves() && ServerRole::Both.calls());
}

#[test]
fn test_builder_keeps_insertion_order() {
    let node = Node::new("robot")
        .with_topic(Topic::new("/b", TopicRole::Publisher))
        .with_topic(Topic::new("/a", TopicRole::Subscriber))
        .with_service(Service::new("/s", ServerRole::Server))
        .with_action(Action::new("/act", ServerRole::Client))
        .with_parameter(Parameter::new("rate").with_type("double"));

    let topics: Vec<&str> = node.topics().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(topics, ["/b", "/a"]);
    assert_eq!(node.services().len(), 1);
    assert_eq!(node.actions().len(), 1);
    assert_eq!(node.parameters()[0].value_type.as_deref(), Some("double"));
}

#[test]
fn test_insert_replaces_in_place() {
    let mut node = Node::new("robot")
        .with_topic(Topic::new("/a", TopicRole::Publisher))
        .with_topic(Topic::new("/b", TopicRole::Publisher));

    let replaced = node.insert_topic(Topic::new("/a", TopicRole::Both));

    assert_eq!(replaced.map(|t| t.role), Some(TopicRole::Publisher));
    assert_eq!(node.topics()[0].name, "/a");
    assert_eq!(node.topics()[0].role, TopicRole::Both);
    assert_eq!(node.topics().len(), 2);
}

#[test]
fn test_insert_new_returns_none() {
    let mut node = Node::new("robot");

    assert!(node.insert_service(Service::new("/s", ServerRole::Client)).is_none());
    assert!(node.insert_action(Action::new("/a", ServerRole::Server)).is_none());
    assert!(node.insert_parameter(Parameter::new("p")).is_none());
}

#[test]
fn test_lookup_by_name() {
    let node = Node::new("robot")
        .with_executable("robot_node")
        .with_topic(Topic::new("/t", TopicRole::Publisher).with_type("std_msgs/msg/String"))
        .with_service(Service::new("/s", ServerRole::Server))
        .with_action(Action::new("/a", ServerRole::Client));

    assert_eq!(node.executable(), Some("robot_node"));
    assert_eq!(
        node.topic("/t").and_then(|t| t.interface_type.as_deref()),
        Some("std_msgs/msg/String")
    );
    assert_eq!(node.service("/s").map(|s| s.role), Some(ServerRole::Server));
    assert_eq!(node.action("/a").map(|a| a.role), Some(ServerRole::Client));
    assert!(node.topic("/s").is_none());
    assert!(node.service("/t").is_none());
}

#[test]
fn test_empty_node() {
    let node = Node::new("idle");

    assert_eq!(node.name(), "idle");
    assert_eq!(node.executable(), None);
    assert!(node.topics().is_empty());
    assert!(node.services().is_empty());
    assert!(node.actions().is_empty());
    assert!(node.parameters().is_empty());
}
