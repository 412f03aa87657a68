//! NoDL document parsing
//!
//! ```xml
//! <interface version="1">
//!   <node name="talker" executable="talker">
//!     <topic name="/chatter" publisher="true" type="std_msgs/msg/String"/>
//!     <service name="add" server="true" type="example_interfaces/srv/AddTwoInts"/>
//!     <action name="fib" client="true" type="example_interfaces/action/Fibonacci"/>
//!     <parameter name="rate" type="double"/>
//!   </node>
//! </interface>
//! ```
//!
//! The document is deserialized into raw structs with `quick-xml`'s serde
//! support and then converted into `core_nodl::Node` values. The conversion
//! is where validation happens, so a raw document never escapes this module.

use crate::error::{Error, Result};
use core_nodl::{
    Action, Node, Parameter, Service, ServerRole, Topic, TopicRole, NODL_INTERFACE_VERSION,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Trait for node description parsers
pub trait NodlParser {
    /// Parse every node described by `input`
    fn parse(&self, input: &str) -> Result<Vec<Node>>;
}

/// XML (`.nodl.xml`) parser implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlNodlParser;

impl NodlParser for XmlNodlParser {
    fn parse(&self, input: &str) -> Result<Vec<Node>> {
        let raw: InterfaceRaw =
            quick_xml::de::from_str(input).map_err(|e| Error::InvalidNodl(e.to_string()))?;
        raw.into_nodes()
    }
}

/// Parse a NoDL document from a string
///
/// # Errors
///
/// - `Error::InvalidNodl` for malformed or invalid descriptions
/// - `Error::UnsupportedInterfaceVersion` if `version` is not `1`
pub fn parse_nodl(input: &str) -> Result<Vec<Node>> {
    XmlNodlParser.parse(input)
}

/// Read and parse a NoDL file
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read, otherwise see [`parse_nodl`].
pub fn parse_nodl_file(path: &Path) -> Result<Vec<Node>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let nodes = parse_nodl(&content)?;
    tracing::debug!(path = %path.display(), nodes = nodes.len(), "Parsed NoDL file");
    Ok(nodes)
}

// ===== Raw representation =====

#[derive(Debug, Deserialize)]
struct InterfaceRaw {
    #[serde(rename = "@version")]
    version: String,
    #[serde(rename = "node", default)]
    nodes: Vec<NodeRaw>,
}

#[derive(Debug, Deserialize)]
struct NodeRaw {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@executable", default)]
    executable: Option<String>,
    #[serde(rename = "$value", default)]
    items: Vec<ItemRaw>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ItemRaw {
    Topic(TopicRaw),
    Service(ServerEndpointRaw),
    Action(ServerEndpointRaw),
    Parameter(ParameterRaw),
}

#[derive(Debug, Deserialize)]
struct TopicRaw {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@type", default)]
    interface_type: Option<String>,
    #[serde(rename = "@publisher", default)]
    publisher: bool,
    #[serde(rename = "@subscription", default)]
    subscription: bool,
}

#[derive(Debug, Deserialize)]
struct ServerEndpointRaw {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@type", default)]
    interface_type: Option<String>,
    #[serde(rename = "@server", default)]
    server: bool,
    #[serde(rename = "@client", default)]
    client: bool,
}

#[derive(Debug, Deserialize)]
struct ParameterRaw {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@type", default)]
    value_type: Option<String>,
}

impl InterfaceRaw {
    /// Convert the raw interface to nodes with validation
    ///
    /// # Errors
    ///
    /// - `UnsupportedInterfaceVersion`: `version` is not `NODL_INTERFACE_VERSION`
    /// - `InvalidNodl`: empty or duplicate names, endpoints without a role
    fn into_nodes(self) -> Result<Vec<Node>> {
        if self.version.trim() != NODL_INTERFACE_VERSION {
            return Err(Error::UnsupportedInterfaceVersion {
                found: self.version,
                expected: NODL_INTERFACE_VERSION,
            });
        }

        let mut seen = HashSet::new();
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for node in self.nodes {
            if !seen.insert(node.name.clone()) {
                return Err(Error::InvalidNodl(format!("duplicate node '{}'", node.name)));
            }
            nodes.push(Node::try_from(node)?);
        }
        Ok(nodes)
    }
}

impl TryFrom<NodeRaw> for Node {
    type Error = Error;

    fn try_from(raw: NodeRaw) -> Result<Self> {
        let node_name = require_name(raw.name, "node", "interface")?;
        let mut node = Node::new(node_name.clone());
        if let Some(executable) = raw.executable {
            node = node.with_executable(executable);
        }

        for item in raw.items {
            let replaced = match item {
                ItemRaw::Topic(topic) => {
                    let name = require_name(topic.name, "topic", &node_name)?;
                    let role = TopicRole::from_flags(topic.publisher, topic.subscription)
                        .ok_or_else(|| {
                            Error::InvalidNodl(format!(
                                "topic '{}' of node '{}' is neither published nor subscribed",
                                name, node_name
                            ))
                        })?;
                    let mut topic_desc = Topic::new(name.clone(), role);
                    topic_desc.interface_type = topic.interface_type;
                    node.insert_topic(topic_desc).map(|_| ("topic", name))
                }
                ItemRaw::Service(service) => {
                    let (name, role, interface_type) =
                        server_endpoint(service, "service", &node_name)?;
                    let mut service_desc = Service::new(name.clone(), role);
                    service_desc.interface_type = interface_type;
                    node.insert_service(service_desc).map(|_| ("service", name))
                }
                ItemRaw::Action(action) => {
                    let (name, role, interface_type) =
                        server_endpoint(action, "action", &node_name)?;
                    let mut action_desc = Action::new(name.clone(), role);
                    action_desc.interface_type = interface_type;
                    node.insert_action(action_desc).map(|_| ("action", name))
                }
                ItemRaw::Parameter(parameter) => {
                    let name = require_name(parameter.name, "parameter", &node_name)?;
                    let mut parameter_desc = Parameter::new(name.clone());
                    parameter_desc.value_type = parameter.value_type;
                    node.insert_parameter(parameter_desc).map(|_| ("parameter", name))
                }
            };

            if let Some((kind, name)) = replaced {
                return Err(Error::InvalidNodl(format!(
                    "duplicate {} '{}' in node '{}'",
                    kind, name, node_name
                )));
            }
        }

        Ok(node)
    }
}

fn server_endpoint(
    raw: ServerEndpointRaw,
    kind: &str,
    node_name: &str,
) -> Result<(String, ServerRole, Option<String>)> {
    let name = require_name(raw.name, kind, node_name)?;
    let role = ServerRole::from_flags(raw.server, raw.client).ok_or_else(|| {
        Error::InvalidNodl(format!(
            "{} '{}' of node '{}' is neither served nor called",
            kind, name, node_name
        ))
    })?;
    Ok((name, role, raw.interface_type))
}

fn require_name(name: String, kind: &str, owner: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidNodl(format!(
            "{} in '{}' has an empty name",
            kind, owner
        )));
    }
    Ok(trimmed.to_string())
}
