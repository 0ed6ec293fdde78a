//! Patch operation validation
//!
//! Each operation kind fixes which extra fields it requires, so raw entries
//! dispatch through a constant table of per-kind builders and the resulting
//! [`Patch`] variants carry exactly the fields their kind needs. Fields a
//! kind does not use are ignored for forward compatibility.

use crate::error::{Error, Result};
use crate::types::Patch;
use serde_yaml_ng::Value;

use super::{optional_sequence, require_str};

/// Patch operation kinds this build understands
pub const SUPPORTED_OPS: &[&str] = &["add", "replace", "remove", "rewriteName", "copyFromObject"];

type Builder = fn(&Value, String, &str) -> Result<Patch>;

/// Operation kind to builder dispatch, in the same order as [`SUPPORTED_OPS`]
const BUILDERS: &[(&str, Builder)] = &[
    ("add", build_add),
    ("replace", build_replace),
    ("remove", build_remove),
    ("rewriteName", build_rewrite_name),
    ("copyFromObject", build_copy_from_object),
];

/// Validate an optional patch sequence field into typed operations.
///
/// Declaration order is preserved: the executor applies operations in this
/// order and later operations may depend on the effects of earlier ones.
pub(super) fn validate_patches(
    entry: &Value,
    field: &str,
    entry_location: &str,
) -> Result<Vec<Patch>> {
    let location = format!("{entry_location}.{field}");
    let Some(entries) = optional_sequence(entry, field, &location)? else {
        return Ok(Vec::new());
    };

    let mut ops = Vec::with_capacity(entries.len());
    for (index, raw) in entries.iter().enumerate() {
        ops.push(validate_patch(raw, &format!("{location}[{index}]"))?);
    }

    Ok(ops)
}

fn validate_patch(raw: &Value, location: &str) -> Result<Patch> {
    let op = require_str(raw, "op", location)?;
    let build = BUILDERS
        .iter()
        .find(|(name, _)| *name == op)
        .map(|(_, build)| *build)
        .ok_or_else(|| Error::unsupported_op(&op, location, SUPPORTED_OPS))?;
    let path = require_str(raw, "path", location)?;

    build(raw, path, location)
}

fn build_add(raw: &Value, path: String, location: &str) -> Result<Patch> {
    Ok(Patch::Add {
        path,
        value: require_value(raw, location)?,
    })
}

fn build_replace(raw: &Value, path: String, location: &str) -> Result<Patch> {
    Ok(Patch::Replace {
        path,
        value: require_value(raw, location)?,
    })
}

fn build_remove(_raw: &Value, path: String, _location: &str) -> Result<Patch> {
    Ok(Patch::Remove { path })
}

fn build_rewrite_name(_raw: &Value, path: String, _location: &str) -> Result<Patch> {
    Ok(Patch::RewriteName { path })
}

fn build_copy_from_object(raw: &Value, path: String, location: &str) -> Result<Patch> {
    let from_path = require_str(raw, "fromPath", location)?;
    Ok(Patch::CopyFromObject { path, from_path })
}

/// Convert the `value` field to JSON, which is what the patch executor
/// consumes. An explicit `value: null` counts as present.
fn require_value(raw: &Value, location: &str) -> Result<serde_json::Value> {
    let value = raw
        .get("value")
        .ok_or_else(|| Error::missing_field("value", location))?;
    Ok(serde_json::to_value(value)?)
}
