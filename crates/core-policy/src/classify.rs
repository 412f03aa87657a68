//! Endpoint classification by directional role
//!
//! Every endpoint collection splits into a provider subset and a consumer
//! subset:
//!
//! | endpoint | provider          | consumer            |
//! |----------|-------------------|---------------------|
//! | topic    | publisher         | subscriber          |
//! | service  | server (`reply`)  | client (`request`)  |
//! | action   | server (`execute`)| client (`call`)     |
//!
//! An endpoint whose role is "both" is referenced from both subsets.

use crate::kinds::RuleKind;
use alloc::vec::Vec;
use core_nodl::{Action, Node, Service, Topic};

/// An endpoint with a directional role
pub trait Directional {
    /// Endpoint name as described
    fn name(&self) -> &str;

    /// Whether the node provides the endpoint (publishes / serves)
    fn provides(&self) -> bool;

    /// Whether the node consumes the endpoint (subscribes / calls)
    fn consumes(&self) -> bool;
}

impl Directional for Topic {
    fn name(&self) -> &str {
        &self.name
    }

    fn provides(&self) -> bool {
        self.role.publishes()
    }

    fn consumes(&self) -> bool {
        self.role.subscribes()
    }
}

impl Directional for Service {
    fn name(&self) -> &str {
        &self.name
    }

    fn provides(&self) -> bool {
        self.role.serves()
    }

    fn consumes(&self) -> bool {
        self.role.calls()
    }
}

impl Directional for Action {
    fn name(&self) -> &str {
        &self.name
    }

    fn provides(&self) -> bool {
        self.role.serves()
    }

    fn consumes(&self) -> bool {
        self.role.calls()
    }
}

/// Provider and consumer subsets of one endpoint collection
#[derive(Debug)]
pub struct Partition<'a, E> {
    /// Endpoints the node publishes or serves, in input order
    pub providers: Vec<&'a E>,
    /// Endpoints the node subscribes to or calls, in input order
    pub consumers: Vec<&'a E>,
}

impl<'a, E: Directional> Partition<'a, E> {
    /// Names of the provider subset
    #[must_use]
    pub fn provider_names(&self) -> Vec<&'a str> {
        self.providers.iter().map(|&e| e.name()).collect()
    }

    /// Names of the consumer subset
    #[must_use]
    pub fn consumer_names(&self) -> Vec<&'a str> {
        self.consumers.iter().map(|&e| e.name()).collect()
    }
}

/// Split `endpoints` into provider and consumer subsets
#[must_use]
pub fn classify<E: Directional>(endpoints: &[E]) -> Partition<'_, E> {
    let mut partition = Partition {
        providers: Vec::new(),
        consumers: Vec::new(),
    };
    for endpoint in endpoints {
        if endpoint.provides() {
            partition.providers.push(endpoint);
        }
        if endpoint.consumes() {
            partition.consumers.push(endpoint);
        }
    }
    partition
}

/// The six directional subsets of a node
#[derive(Debug)]
pub struct NodeSubsets<'a> {
    /// Publishers / subscribers
    pub topics: Partition<'a, Topic>,
    /// Servers / clients
    pub services: Partition<'a, Service>,
    /// Servers / clients
    pub actions: Partition<'a, Action>,
}

impl<'a> NodeSubsets<'a> {
    /// Classify every collection of `node`
    #[must_use]
    pub fn new(node: &'a Node) -> Self {
        Self {
            topics: classify(node.topics()),
            services: classify(node.services()),
            actions: classify(node.actions()),
        }
    }

    /// Endpoint names granted by `rule`
    #[must_use]
    pub fn names(&self, rule: RuleKind) -> Vec<&'a str> {
        match rule {
            RuleKind::Subscribe => self.topics.consumer_names(),
            RuleKind::Publish => self.topics.provider_names(),
            RuleKind::Reply => self.services.provider_names(),
            RuleKind::Request => self.services.consumer_names(),
            RuleKind::Execute => self.actions.provider_names(),
            RuleKind::Call => self.actions.consumer_names(),
        }
    }
}
