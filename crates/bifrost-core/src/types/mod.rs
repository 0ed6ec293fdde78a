//! Type definitions for the Bifrost sync rule set

mod patch_types;
mod rule_types;

pub use patch_types::*;
pub use rule_types::*;
