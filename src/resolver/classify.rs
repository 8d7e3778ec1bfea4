//! Message package classification.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::Package;

/// Build dependencies whose presence marks a package as a message package.
pub const MESSAGE_TRIGGERS: [&str; 2] = ["message_generation", "genmsg"];

/// Static include/exclude lists for message package classification.
///
/// The whitelist admits packages that generate messages without declaring a
/// trigger dependency; the blacklist rejects packages that declare one but
/// are not message packages. The blacklist always wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationLists {
    /// Packages always treated as message packages
    pub whitelist: BTreeSet<String>,

    /// Packages never treated as message packages
    pub blacklist: BTreeSet<String>,
}

impl ClassificationLists {
    /// Create lists from any iterables of names.
    pub fn new<W, B, S>(whitelist: W, blacklist: B) -> Self
    where
        W: IntoIterator<Item = S>,
        B: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ClassificationLists {
            whitelist: whitelist.into_iter().map(Into::into).collect(),
            blacklist: blacklist.into_iter().map(Into::into).collect(),
        }
    }

    /// Add names to both lists (e.g. from the command line).
    pub fn extend<S: Into<String>>(
        &mut self,
        whitelist: impl IntoIterator<Item = S>,
        blacklist: impl IntoIterator<Item = S>,
    ) {
        self.whitelist.extend(whitelist.into_iter().map(Into::into));
        self.blacklist.extend(blacklist.into_iter().map(Into::into));
    }

    pub fn is_whitelisted(&self, name: &str) -> bool {
        self.whitelist.contains(name)
    }

    pub fn is_blacklisted(&self, name: &str) -> bool {
        self.blacklist.contains(name)
    }

    /// Decide whether a package belongs in the message package index.
    pub fn is_message_package(&self, package: &Package) -> bool {
        if self.is_blacklisted(package.name()) {
            return false;
        }
        declares_trigger(package) || self.is_whitelisted(package.name())
    }
}

/// Check whether a package declares a message generation trigger.
pub fn declares_trigger(package: &Package) -> bool {
    MESSAGE_TRIGGERS.iter().any(|t| package.depends_on(t))
}
