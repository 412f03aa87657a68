// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 The nodl-to-policy Authors

//! # core-policy
//!
//! ROS 2 access control policy tree and the rules that derive it from NoDL
//! node descriptions, with zero dependencies on I/O or XML.
//!
//! This crate provides the core domain logic, including:
//! - Policy document tree (enclaves, profiles, permission categories)
//! - Endpoint classification by directional role
//! - Expression qualification (private, absolute and relative names)
//! - Incremental conversion of nodes into profiles
//!
//! ## Merge semantics
//!
//! Every level of the tree is looked up by key before it is created, so
//! folding the same or overlapping nodes into an existing document adds
//! entries to the existing structure instead of duplicating it.

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod builder;
pub mod classify;
pub mod document;
pub mod error;
pub mod kinds;
pub mod qualify;

pub use builder::{add_rule_entries, convert, PolicyBuilder};
pub use classify::{classify, Directional, NodeSubsets, Partition};
pub use document::{Enclave, PermissionCategory, PolicyDocument, Profile};
/// Re-export commonly used types
pub use error::{PolicyError, Result};
pub use kinds::{CategoryKind, Grant, RuleExpression, RuleKind};
pub use qualify::qualify;

/// Policy format version written into new documents and required on load
pub const POLICY_VERSION: &str = "0.2.0";

/// File extension every policy document must carry
pub const POLICY_FILE_EXTENSION: &str = ".policy.xml";

/// Enclave path used for generated profiles.
///
/// NoDL does not describe enclaves yet, so every node lands in the root enclave.
pub const DEFAULT_ENCLAVE_PATH: &str = "";

/// Namespace used for generated profiles.
///
/// NoDL does not describe node namespaces yet.
pub const DEFAULT_NODE_NAMESPACE: &str = "";
