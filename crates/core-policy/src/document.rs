//! Policy document tree
//!
//! ```text
//! PolicyDocument (version)
//! └── Enclave (path)
//!     └── Profile (ns, node)
//!         └── PermissionCategory (kind, grants)
//!             └── entry ("chatter", "~/status", ...)
//! ```
//!
//! Each level keeps its children in insertion order for serialization and
//! a keyed index next to them, so lookups never scan the tree and a key
//! can only ever resolve to one child.

use crate::error::{PolicyError, Result};
use crate::kinds::{CategoryKind, Grant, RuleExpression, RuleKind};
use crate::POLICY_VERSION;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Root of a policy document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDocument {
    version: String,
    enclaves: Vec<Enclave>,
    index: BTreeMap<String, usize>,
}

impl Default for PolicyDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyDocument {
    /// Create an empty document at the current `POLICY_VERSION`
    #[must_use]
    pub fn new() -> Self {
        Self::with_version(POLICY_VERSION)
    }

    /// Create an empty document carrying an explicit version string
    #[must_use]
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            enclaves: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Format version of this document
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Enclaves in document order
    #[must_use]
    pub fn enclaves(&self) -> &[Enclave] {
        &self.enclaves
    }

    /// Look up an enclave by path
    #[must_use]
    pub fn enclave(&self, path: &str) -> Option<&Enclave> {
        self.index.get(path).map(|&i| &self.enclaves[i])
    }

    /// Locate the enclave at `path`, creating an empty one if absent
    pub fn find_or_create_enclave(&mut self, path: &str) -> &mut Enclave {
        let index = match self.index.get(path) {
            Some(&index) => index,
            None => {
                let index = self.enclaves.len();
                self.enclaves.push(Enclave::new(path));
                self.index.insert(path.to_string(), index);
                index
            }
        };
        &mut self.enclaves[index]
    }

    /// Attach a fully built enclave.
    ///
    /// If an enclave with the same path exists, the profiles of `enclave`
    /// are merged into it instead.
    pub fn merge_enclave(&mut self, enclave: Enclave) {
        let target = self.find_or_create_enclave(&enclave.path);
        for profile in enclave.profiles {
            target.merge_profile(profile);
        }
    }

    /// Total number of profiles across all enclaves
    #[must_use]
    pub fn profile_count(&self) -> usize {
        self.enclaves.iter().map(|e| e.profiles.len()).sum()
    }
}

/// A security enclave, holding one profile per node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclave {
    path: String,
    profiles: Vec<Profile>,
    index: BTreeMap<(String, String), usize>,
}

impl Enclave {
    /// Create an enclave with no profiles
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            profiles: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Enclave path
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Profiles in document order
    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Look up a profile by namespace and node name
    #[must_use]
    pub fn profile(&self, namespace: &str, node: &str) -> Option<&Profile> {
        self.index
            .get(&(namespace.to_string(), node.to_string()))
            .map(|&i| &self.profiles[i])
    }

    /// Locate the profile for (`namespace`, `node`), creating an empty one if absent
    pub fn find_or_create_profile(&mut self, namespace: &str, node: &str) -> &mut Profile {
        let key = (namespace.to_string(), node.to_string());
        let index = match self.index.get(&key) {
            Some(&index) => index,
            None => {
                let index = self.profiles.len();
                self.profiles.push(Profile::new(namespace, node));
                self.index.insert(key, index);
                index
            }
        };
        &mut self.profiles[index]
    }

    /// Attach a fully built profile, merging its categories into an
    /// existing profile with the same key
    pub fn merge_profile(&mut self, profile: Profile) {
        let target = self.find_or_create_profile(&profile.namespace, &profile.node);
        for category in profile.categories {
            target.push_category(category);
        }
    }
}

/// Permissions granted to one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    namespace: String,
    node: String,
    categories: Vec<PermissionCategory>,
    index: BTreeMap<Grant, usize>,
}

impl Profile {
    /// Create a profile with no permission categories
    #[must_use]
    pub fn new(namespace: impl Into<String>, node: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            node: node.into(),
            categories: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Node namespace (`ns` attribute)
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Node name (`node` attribute)
    #[must_use]
    pub fn node(&self) -> &str {
        &self.node
    }

    /// Permission categories in document order
    #[must_use]
    pub fn categories(&self) -> &[PermissionCategory] {
        &self.categories
    }

    /// Categories of `kind`, in document order
    pub fn categories_of(&self, kind: CategoryKind) -> impl Iterator<Item = &PermissionCategory> {
        self.categories.iter().filter(move |c| c.kind == kind)
    }

    /// Look up the category carrying `grant`
    #[must_use]
    pub fn permission_category(&self, grant: Grant) -> Option<&PermissionCategory> {
        self.index.get(&grant).map(|&i| &self.categories[i])
    }

    /// Locate the category with the (`kind`, `rule`, `expression`) grant,
    /// creating an empty one if absent
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::RuleKindMismatch` if `rule` does not belong to `kind`
    pub fn find_or_create_permission_category(
        &mut self,
        kind: CategoryKind,
        rule: RuleKind,
        expression: RuleExpression,
    ) -> Result<&mut PermissionCategory> {
        if rule.category() != kind {
            return Err(PolicyError::RuleKindMismatch {
                category: kind,
                rule,
            });
        }
        Ok(self.category_for(Grant::new(rule, expression)))
    }

    /// Locate the category carrying `grant`, creating an empty one if absent
    pub fn category_for(&mut self, grant: Grant) -> &mut PermissionCategory {
        let index = match self.index.get(&grant) {
            Some(&index) => index,
            None => {
                let index = self.categories.len();
                self.categories.push(PermissionCategory::new(grant));
                self.index.insert(grant, index);
                index
            }
        };
        &mut self.categories[index]
    }

    /// Append an already built category as-is.
    ///
    /// Grants already present in the profile keep resolving to the earlier
    /// category; new grants resolve to this one.
    pub fn push_category(&mut self, category: PermissionCategory) {
        let index = self.categories.len();
        for grant in &category.grants {
            self.index.entry(*grant).or_insert(index);
        }
        self.categories.push(category);
    }
}

/// A `<topics>`, `<services>` or `<actions>` element and its entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCategory {
    kind: CategoryKind,
    grants: Vec<Grant>,
    entries: Vec<String>,
}

impl PermissionCategory {
    /// Create an empty category holding a single grant
    #[must_use]
    pub fn new(grant: Grant) -> Self {
        Self {
            kind: grant.category(),
            grants: alloc::vec![grant],
            entries: Vec::new(),
        }
    }

    /// Create an empty category holding several grants, as found in
    /// hand-written documents (`<topics publish="ALLOW" subscribe="ALLOW">`)
    ///
    /// # Errors
    ///
    /// - `PolicyError::EmptyGrants` if `grants` is empty
    /// - `PolicyError::RuleKindMismatch` if a grant does not belong to `kind`
    pub fn with_grants(kind: CategoryKind, grants: Vec<Grant>) -> Result<Self> {
        if grants.is_empty() {
            return Err(PolicyError::EmptyGrants(kind));
        }
        if let Some(grant) = grants.iter().find(|g| g.category() != kind) {
            return Err(PolicyError::RuleKindMismatch {
                category: kind,
                rule: grant.rule,
            });
        }
        Ok(Self {
            kind,
            grants,
            entries: Vec::new(),
        })
    }

    /// Category kind
    #[must_use]
    pub const fn kind(&self) -> CategoryKind {
        self.kind
    }

    /// Rule attributes of this category
    #[must_use]
    pub fn grants(&self) -> &[Grant] {
        &self.grants
    }

    /// Whether this category carries `grant`
    #[must_use]
    pub fn has_grant(&self, grant: Grant) -> bool {
        self.grants.contains(&grant)
    }

    /// Rule entries in document order
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Append a rule entry verbatim
    pub fn push_entry(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }
}
