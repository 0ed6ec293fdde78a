//! Resource rule normalization for the `export` and `import` sections

use crate::error::Result;
use crate::types::ResourceRule;
use serde_yaml_ng::Value;

use super::{optional_sequence, patches, require_str};

/// Normalize one top-level rule section into typed rules.
///
/// An absent or null section is an empty rule list, not an error. Entry
/// order is preserved and duplicates are kept: later rules may
/// intentionally override earlier ones for the same resource kind, and the
/// lookup helpers on [`crate::types::Config`] rely on that order.
pub(super) fn normalize_rules(doc: &Value, section: &str) -> Result<Vec<ResourceRule>> {
    let Some(entries) = optional_sequence(doc, section, section)? else {
        return Ok(Vec::new());
    };

    let mut rules = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let location = format!("{section}[{index}]");
        let api_version = require_str(entry, "apiVersion", &location)?;
        let kind = require_str(entry, "kind", &location)?;
        let patches = patches::validate_patches(entry, "patches", &location)?;
        let reverse_patches = patches::validate_patches(entry, "reversePatches", &location)?;

        rules.push(ResourceRule {
            api_version,
            kind,
            patches,
            reverse_patches,
        });
    }

    Ok(rules)
}
