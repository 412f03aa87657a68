//! Node and endpoint descriptors
//!
//! Each node keeps its topics, services, actions and parameters in
//! insertion order, keyed by name: inserting an endpoint whose name is
//! already present replaces the previous descriptor in place.

use crate::role::{ServerRole, TopicRole};
use alloc::string::String;
use alloc::vec::Vec;

/// A topic the node publishes and/or subscribes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    /// Topic name as written in the description (absolute, private or relative)
    pub name: String,
    /// Direction of the node on this topic
    pub role: TopicRole,
    /// Message type, e.g. `std_msgs/msg/String`
    pub interface_type: Option<String>,
}

impl Topic {
    /// Create a topic without type information
    #[must_use]
    pub fn new(name: impl Into<String>, role: TopicRole) -> Self {
        Self {
            name: name.into(),
            role,
            interface_type: None,
        }
    }

    /// Set the message type
    #[must_use]
    pub fn with_type(mut self, interface_type: impl Into<String>) -> Self {
        self.interface_type = Some(interface_type.into());
        self
    }
}

/// A service the node serves and/or calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    /// Service name as written in the description
    pub name: String,
    /// Direction of the node on this service
    pub role: ServerRole,
    /// Service type, e.g. `example_interfaces/srv/AddTwoInts`
    pub interface_type: Option<String>,
}

impl Service {
    /// Create a service without type information
    #[must_use]
    pub fn new(name: impl Into<String>, role: ServerRole) -> Self {
        Self {
            name: name.into(),
            role,
            interface_type: None,
        }
    }

    /// Set the service type
    #[must_use]
    pub fn with_type(mut self, interface_type: impl Into<String>) -> Self {
        self.interface_type = Some(interface_type.into());
        self
    }
}

/// An action the node serves and/or calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Action name as written in the description
    pub name: String,
    /// Direction of the node on this action
    pub role: ServerRole,
    /// Action type, e.g. `example_interfaces/action/Fibonacci`
    pub interface_type: Option<String>,
}

impl Action {
    /// Create an action without type information
    #[must_use]
    pub fn new(name: impl Into<String>, role: ServerRole) -> Self {
        Self {
            name: name.into(),
            role,
            interface_type: None,
        }
    }

    /// Set the action type
    #[must_use]
    pub fn with_type(mut self, interface_type: impl Into<String>) -> Self {
        self.interface_type = Some(interface_type.into());
        self
    }
}

/// A parameter declared by the node
///
/// Parameters have no counterpart in access control policies; they are kept
/// so the model mirrors the description faithfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Declared type, e.g. `double`
    pub value_type: Option<String>,
}

impl Parameter {
    /// Create a parameter without type information
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: None,
        }
    }

    /// Set the declared type
    #[must_use]
    pub fn with_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }
}

/// A node and its communication surface
///
/// # Examples
///
/// ```
/// use core_nodl::{Node, Topic, TopicRole};
///
/// let node = Node::new("talker")
///     .with_topic(Topic::new("/chatter", TopicRole::Publisher));
///
/// assert_eq!(node.name(), "talker");
/// assert!(node.topic("/chatter").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    executable: Option<String>,
    topics: Vec<Topic>,
    services: Vec<Service>,
    actions: Vec<Action>,
    parameters: Vec<Parameter>,
}

impl Node {
    /// Create a node with an empty communication surface
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            executable: None,
            topics: Vec::new(),
            services: Vec::new(),
            actions: Vec::new(),
            parameters: Vec::new(),
        }
    }

    // ===== Fluent construction =====

    /// Set the executable that runs this node
    #[must_use]
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = Some(executable.into());
        self
    }

    /// Add (or replace) a topic
    #[must_use]
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.insert_topic(topic);
        self
    }

    /// Add (or replace) a service
    #[must_use]
    pub fn with_service(mut self, service: Service) -> Self {
        self.insert_service(service);
        self
    }

    /// Add (or replace) an action
    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.insert_action(action);
        self
    }

    /// Add (or replace) a parameter
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.insert_parameter(parameter);
        self
    }

    // ===== Keyed insertion =====

    /// Insert a topic, returning the descriptor it replaced, if any
    pub fn insert_topic(&mut self, topic: Topic) -> Option<Topic> {
        upsert(&mut self.topics, topic, |t| &t.name)
    }

    /// Insert a service, returning the descriptor it replaced, if any
    pub fn insert_service(&mut self, service: Service) -> Option<Service> {
        upsert(&mut self.services, service, |s| &s.name)
    }

    /// Insert an action, returning the descriptor it replaced, if any
    pub fn insert_action(&mut self, action: Action) -> Option<Action> {
        upsert(&mut self.actions, action, |a| &a.name)
    }

    /// Insert a parameter, returning the descriptor it replaced, if any
    pub fn insert_parameter(&mut self, parameter: Parameter) -> Option<Parameter> {
        upsert(&mut self.parameters, parameter, |p| &p.name)
    }

    // ===== Accessors =====

    /// Node name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Executable name, if described
    #[must_use]
    pub fn executable(&self) -> Option<&str> {
        self.executable.as_deref()
    }

    /// Topics in insertion order
    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Services in insertion order
    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Actions in insertion order
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Parameters in insertion order
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Look up a topic by name
    #[must_use]
    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    /// Look up a service by name
    #[must_use]
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }

    /// Look up an action by name
    #[must_use]
    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.name == name)
    }
}

fn upsert<T>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> &String) -> Option<T> {
    match items.iter().position(|existing| key(existing) == key(&item)) {
        Some(index) => Some(core::mem::replace(&mut items[index], item)),
        None => {
            items.push(item);
            None
        }
    }
}
