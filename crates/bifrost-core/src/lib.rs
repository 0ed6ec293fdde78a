//! # bifrost-core
//!
//! Core library for Bifrost providing:
//! - Sync rule document parsing (bifrost.yaml rule sets)
//! - Patch operation and hook verb validation
//! - Type definitions for rules, hooks, and patch operations
//!
//! The entry point is [`parse`]: raw YAML text in, a fully validated
//! [`Config`] or a descriptive [`Error`] out. The external sync and patch
//! execution engines consume the returned rule set; this crate never
//! touches live objects, files, or the network.

pub mod error;
pub mod parse;
pub mod types;

pub use error::{Error, Result};
pub use parse::{
    parse, parse_with_hook_verbs, DEFAULT_HOOK_VERBS, SUPPORTED_OPS, SUPPORTED_VERSIONS,
};
pub use types::*;
