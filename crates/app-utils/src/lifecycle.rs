//! Obtaining, converting into and persisting a policy document

use crate::error::{Error, Result};
use crate::policy_xml::{load_policy, policy_to_string};
use core_nodl::Node;
use core_policy::{PolicyBuilder, PolicyDocument, POLICY_FILE_EXTENSION};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default output path of the command line tool
pub const DEFAULT_POLICY_PATH: &str = "out.policy.xml";

/// Reject a destination that does not end in `.policy.xml`
///
/// # Errors
///
/// Returns `Error::InvalidPolicyPath` for any other path.
pub fn ensure_policy_extension(path: &Path) -> Result<()> {
    if path.to_string_lossy().ends_with(POLICY_FILE_EXTENSION) {
        Ok(())
    } else {
        Err(Error::InvalidPolicyPath {
            path: path.to_path_buf(),
            extension: POLICY_FILE_EXTENSION,
        })
    }
}

/// Load the policy at `path`, or start an empty one if no file exists there
///
/// # Errors
///
/// Propagates load errors of an existing file.
pub fn get_policy(path: &Path) -> Result<PolicyDocument> {
    if path.is_file() {
        tracing::info!(path = %path.display(), "Loading existing policy");
        load_policy(path)
    } else {
        tracing::debug!(path = %path.display(), "No policy file, starting empty");
        Ok(PolicyDocument::new())
    }
}

/// Serialize `document` to `path`, overwriting it, and echo it to stdout
/// when `print` is set
///
/// # Errors
///
/// Returns `Error::Io` if the file or stdout cannot be written.
pub fn write_policy(path: &Path, document: &PolicyDocument, print: bool) -> Result<()> {
    let xml = policy_to_string(document)?;
    std::fs::write(path, &xml).map_err(|e| Error::io(path, e))?;
    tracing::info!(
        path = %path.display(),
        profiles = document.profile_count(),
        "Wrote policy"
    );

    if print {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(xml.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| Error::io("<stdout>", e))?;
    }
    Ok(())
}

/// Fold `nodes` into the policy at `policy_path` (or a fresh one)
///
/// Nothing is written; see [`write_policy`].
///
/// # Errors
///
/// Propagates errors from [`get_policy`].
pub fn convert_to_policy(policy_path: &Path, nodes: &[Node]) -> Result<PolicyDocument> {
    let mut converter = PolicyConverter::open(policy_path)?;
    converter.convert(nodes);
    Ok(converter.into_document())
}

/// One conversion run against a single policy file
///
/// The document is loaded once, any number of node batches are folded in,
/// and the result is written exactly once.
#[derive(Debug)]
pub struct PolicyConverter {
    path: PathBuf,
    builder: PolicyBuilder,
}

impl PolicyConverter {
    /// Load or create the policy at `path`
    ///
    /// # Errors
    ///
    /// Propagates errors from [`get_policy`].
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = get_policy(&path)?;
        Ok(Self {
            path,
            builder: PolicyBuilder::from_document(document),
        })
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fold `nodes` into the document, in order
    pub fn convert(&mut self, nodes: &[Node]) -> &mut Self {
        for node in nodes {
            tracing::debug!(node = node.name(), "Converting node");
            self.builder.add_node(node);
        }
        self
    }

    /// Document built so far
    pub fn document(&self) -> &PolicyDocument {
        self.builder.document()
    }

    /// Write the document to the destination path
    ///
    /// # Errors
    ///
    /// See [`write_policy`].
    pub fn write(&self, print: bool) -> Result<()> {
        write_policy(&self.path, self.builder.document(), print)
    }

    /// Finish and return the document
    pub fn into_document(self) -> PolicyDocument {
        self.builder.build()
    }
}
