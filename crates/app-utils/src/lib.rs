//! # app-utils
//!
//! File formats and I/O around the `no_std` core crates:
//! - NoDL (`.nodl.xml`) parsing into `core_nodl::Node`
//! - Policy (`.policy.xml`) loading and dumping
//! - The load, convert and write lifecycle of a policy file

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod lifecycle;
pub mod nodl;
pub mod policy_xml;
pub mod xml;

pub use error::{Error, Result};
pub use lifecycle::{
    convert_to_policy, ensure_policy_extension, get_policy, write_policy, PolicyConverter,
    DEFAULT_POLICY_PATH,
};
pub use nodl::{parse_nodl, parse_nodl_file, NodlParser, XmlNodlParser};
pub use policy_xml::{dump_policy, load_policy, parse_policy, policy_to_string};
