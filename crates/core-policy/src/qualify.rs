//! Expression qualification
//!
//! Endpoint names in a NoDL description come in three shapes, each written
//! differently into a policy:
//!
//! | name              | node       | expression  |
//! |-------------------|------------|-------------|
//! | `listener/status` | `listener` | `~/status`  |
//! | `/chatter`        | any        | `chatter`   |
//! | `chatter`         | any        | `chatter`   |
//!
//! The private form depends on the owning node, so the same raw name may
//! qualify differently for two nodes.

use alloc::format;
use alloc::string::{String, ToString};

/// Namespace separator in ROS names
pub const SEPARATOR: char = '/';

/// Prefix denoting a node-private name in policy expressions
pub const PRIVATE_PREFIX: &str = "~";

/// Rewrite `name` into the form stored in the policy for `node_name`.
///
/// First match wins:
/// 1. `<node_name>/rest` becomes `~/rest`
/// 2. `/rest` becomes `rest`
/// 3. anything else is kept verbatim
///
/// An empty `node_name` never matches rule 1: a `Node::new("")` has no
/// private names, so `/chatter` qualifies to `chatter` rather than
/// `~/chatter`. NoDL documents cannot produce such a node.
///
/// # Examples
///
/// ```
/// use core_policy::qualify;
///
/// assert_eq!(qualify("listener/status", "listener"), "~/status");
/// assert_eq!(qualify("/chatter", "talker"), "chatter");
/// assert_eq!(qualify("chatter", "talker"), "chatter");
/// ```
#[must_use]
pub fn qualify(name: &str, node_name: &str) -> String {
    if let Some(rest) = private_suffix(name, node_name) {
        return format!("{}{}", PRIVATE_PREFIX, rest);
    }
    match name.strip_prefix(SEPARATOR) {
        Some(rest) => rest.to_string(),
        None => name.to_string(),
    }
}

/// Returns `/rest` when `name` is `<node_name>/rest`
fn private_suffix<'a>(name: &'a str, node_name: &str) -> Option<&'a str> {
    if node_name.is_empty() {
        return None;
    }
    let rest = name.strip_prefix(node_name)?;
    rest.starts_with(SEPARATOR).then_some(rest)
}
