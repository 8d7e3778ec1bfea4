//! Package sources.
//!
//! Sources turn a directory on disk into the packages it contains.

pub mod path;

pub use path::{find_packages, IGNORE_MARKERS};
