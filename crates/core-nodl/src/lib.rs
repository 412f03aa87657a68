// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 The nodl-to-policy Authors

//! # core-nodl
//!
//! Domain model for NoDL (Node Interface Definition Language) descriptions.
//!
//! A NoDL document lists the nodes of a ROS 2 system together with their
//! communication surface:
//! - Topics the node publishes and/or subscribes to
//! - Services the node serves and/or calls
//! - Actions the node serves and/or calls
//! - Parameters the node declares
//!
//! This crate only holds the parsed representation. Parsing lives in
//! `app-utils`, policy generation in `core-policy`.

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod node;
pub mod role;

pub use node::{Action, Node, Parameter, Service, Topic};
pub use role::{ServerRole, TopicRole};

/// NoDL interface version understood by this crate
pub const NODL_INTERFACE_VERSION: &str = "1";

/// File extension of NoDL documents
pub const NODL_FILE_EXTENSION: &str = ".nodl.xml";
