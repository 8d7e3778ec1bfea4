//! Message package resolution.
//!
//! Classifies discovered packages, merges the workspace layers into a single
//! index and derives dependency declarations from it. Everything here is
//! pure apart from the read-only scan performed while building the index.

pub mod classify;
pub mod compose;
pub mod errors;
pub mod index;

pub use classify::{declares_trigger, ClassificationLists, MESSAGE_TRIGGERS};
pub use compose::{compose_dependencies, message_dependencies, Coordinate, DEFAULT_ARTIFACT_GROUP};
pub use errors::ResolveError;
pub use index::{MessagePackageIndex, Overlay};
