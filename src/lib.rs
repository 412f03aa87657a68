// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 The nodl-to-policy Authors

//! # nodl-to-policy
//!
//! Generate ROS 2 security (SROS 2) access-control policies from NoDL node
//! interface descriptions.
//!
//! Every node described in a `.nodl.xml` file gets a profile in the root
//! enclave of a `.policy.xml` document. Its topics, services and actions
//! become `ALLOW` rules grouped by direction (subscribe/publish,
//! reply/request, execute/call). Converting into an existing policy file
//! merges into it.
//!
//! ## Quick Start
//!
//! ```rust
//! use nodl_to_policy::io::{parse_nodl, policy_to_string};
//! use nodl_to_policy::policy::PolicyBuilder;
//!
//! let nodes = parse_nodl(
//!     r#"<interface version="1">
//!          <node name="talker">
//!            <topic name="/chatter" publisher="true"/>
//!          </node>
//!        </interface>"#,
//! )
//! .unwrap();
//!
//! let policy = PolicyBuilder::new().with_nodes(&nodes).build();
//! let xml = policy_to_string(&policy).unwrap();
//! assert!(xml.contains("<topic>chatter</topic>"));
//! ```
//!
//! ## Architecture
//!
//! This facade crate re-exports the following modules:
//!
//! - [`nodl`] - Node descriptions (from `core-nodl`)
//! - [`policy`] - Policy tree and conversion rules (from `core-policy`)
//! - [`io`] - NoDL parsing, policy XML and file lifecycle (from `app-utils`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Node description module.
///
/// Re-exports `core_nodl` for nodes, endpoints and their roles.
pub mod nodl {
    pub use core_nodl::*;
}

/// Policy tree module.
///
/// Re-exports `core_policy` for the policy document and the conversion rules.
pub mod policy {
    pub use core_policy::*;
}

/// File format and lifecycle module.
///
/// Re-exports `app_utils` for NoDL parsing and policy loading/writing.
pub mod io {
    pub use app_utils::*;
}

// Convenience re-exports at root level
pub use app_utils::{convert_to_policy, get_policy, write_policy};
pub use core_nodl::Node;
pub use core_policy::{PolicyBuilder, PolicyDocument};
