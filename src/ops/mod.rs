//! High-level operations.
//!
//! This module contains the implementation of genjava commands.

pub mod genjava_build;
pub mod genjava_create;
pub mod report;

pub use genjava_build::{build, create_and_build, BuildOutcome, StandaloneOptions};
pub use genjava_create::{create, CreateOptions};
pub use report::{format_classification_lists, format_index};
