//! Author name resolution for generated build files.
//!
//! The author is the display name of the account running genjava, falling
//! back to the login name. Resolution never fails.

use std::io;

/// Used when neither the display name nor the login name can be determined.
pub const FALLBACK_AUTHOR: &str = "unknown";

/// Access to the identity of the current OS account.
pub trait AccountLookup {
    /// The login (user) name.
    fn login_name(&self) -> io::Result<String>;

    /// The display name from the account record (e.g. the GECOS field).
    fn display_name(&self) -> io::Result<String>;
}

/// The account the process runs as.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAccount;

impl AccountLookup for SystemAccount {
    fn login_name(&self) -> io::Result<String> {
        whoami::fallible::username()
    }

    fn display_name(&self) -> io::Result<String> {
        whoami::fallible::realname()
    }
}

/// Resolve the author name for the current process.
pub fn author_name() -> String {
    resolve_author(&SystemAccount)
}

/// Resolve the author name through `lookup`.
///
/// Commas are stripped from the display name. An empty or failed display
/// name falls back to the login name, then to the `USER`/`USERNAME`
/// environment variables, then to [`FALLBACK_AUTHOR`].
pub fn resolve_author(lookup: &dyn AccountLookup) -> String {
    let login = match lookup.login_name() {
        Ok(name) if !name.trim().is_empty() => name.trim().to_string(),
        Ok(_) => login_from_env(),
        Err(e) => {
            tracing::debug!("login name lookup failed: {}", e);
            login_from_env()
        }
    };

    match lookup.display_name() {
        Ok(name) => {
            let stripped: String = name.split(',').collect();
            let stripped = stripped.trim();
            if stripped.is_empty() {
                login
            } else {
                stripped.to_string()
            }
        }
        Err(e) => {
            tracing::debug!("display name lookup failed: {}", e);
            login
        }
    }
}

fn login_from_env() -> String {
    ["USER", "USERNAME"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
        .unwrap_or_else(|| FALLBACK_AUTHOR.to_string())
}
