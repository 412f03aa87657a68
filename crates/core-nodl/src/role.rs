//! Directional roles of communication endpoints
//!
//! Topics are published and/or subscribed. Services and actions share a
//! single vocabulary: a node either serves them, calls them, or both.

/// Role a node plays on a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicRole {
    /// The node only subscribes
    Subscriber,
    /// The node only publishes
    Publisher,
    /// The node publishes and subscribes
    Both,
}

impl TopicRole {
    /// Build a role from the `publisher`/`subscription` flags of a NoDL topic.
    ///
    /// Returns `None` when neither flag is set.
    #[must_use]
    pub const fn from_flags(publisher: bool, subscription: bool) -> Option<Self> {
        match (publisher, subscription) {
            (true, true) => Some(Self::Both),
            (true, false) => Some(Self::Publisher),
            (false, true) => Some(Self::Subscriber),
            (false, false) => None,
        }
    }

    /// Whether the node publishes on the topic
    #[must_use]
    pub const fn publishes(self) -> bool {
        matches!(self, Self::Publisher | Self::Both)
    }

    /// Whether the node subscribes to the topic
    #[must_use]
    pub const fn subscribes(self) -> bool {
        matches!(self, Self::Subscriber | Self::Both)
    }
}

/// Role a node plays on a service or an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerRole {
    /// The node only serves (reply / execute)
    Server,
    /// The node only calls (request / call)
    Client,
    /// The node serves and calls
    Both,
}

impl ServerRole {
    /// Build a role from the `server`/`client` flags of a NoDL service or action.
    ///
    /// Returns `None` when neither flag is set.
    #[must_use]
    pub const fn from_flags(server: bool, client: bool) -> Option<Self> {
        match (server, client) {
            (true, true) => Some(Self::Both),
            (true, false) => Some(Self::Server),
            (false, true) => Some(Self::Client),
            (false, false) => None,
        }
    }

    /// Whether the node serves the endpoint
    #[must_use]
    pub const fn serves(self) -> bool {
        matches!(self, Self::Server | Self::Both)
    }

    /// Whether the node calls the endpoint
    #[must_use]
    pub const fn calls(self) -> bool {
        matches!(self, Self::Client | Self::Both)
    }
}
