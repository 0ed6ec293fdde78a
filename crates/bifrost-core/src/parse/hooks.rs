//! Hook rule and verb validation

use crate::error::{Error, Result};
use crate::types::{Direction, HookRule, HookSet};
use serde_yaml_ng::Value;

use super::{optional_sequence, patches, require_str};

/// Default verb vocabulary a hook may be scoped to
pub const DEFAULT_HOOK_VERBS: &[&str] = &["create", "update", "patch", "delete"];

/// Validate the optional `hooks` section.
///
/// The verb whitelist is an explicit parameter so embedders can narrow or
/// widen the vocabulary per call; [`crate::parse::parse`] passes
/// [`DEFAULT_HOOK_VERBS`]. An absent direction key yields an empty hook
/// list for that direction.
pub(super) fn validate_hooks(doc: &Value, allowed_verbs: &[&str]) -> Result<HookSet> {
    let hooks = match doc.get("hooks") {
        None | Some(Value::Null) => return Ok(HookSet::default()),
        Some(hooks) => hooks,
    };
    if !hooks.is_mapping() {
        return Err(Error::invalid_config("hooks must be a mapping"));
    }

    let host_to_virtual = validate_direction(hooks, Direction::HostToVirtual, allowed_verbs)?;
    let virtual_to_host = validate_direction(hooks, Direction::VirtualToHost, allowed_verbs)?;

    Ok(HookSet {
        host_to_virtual,
        virtual_to_host,
    })
}

fn validate_direction(
    hooks: &Value,
    direction: Direction,
    allowed_verbs: &[&str],
) -> Result<Vec<HookRule>> {
    let section = format!("hooks.{direction}");
    let Some(entries) = optional_sequence(hooks, direction.as_str(), &section)? else {
        return Ok(Vec::new());
    };

    let mut rules = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let location = format!("{section}[{index}]");
        let api_version = require_str(entry, "apiVersion", &location)?;
        let kind = require_str(entry, "kind", &location)?;
        let verbs = validate_verbs(entry, &api_version, &kind, direction, allowed_verbs, &location)?;
        let patches = patches::validate_patches(entry, "patches", &location)?;

        rules.push(HookRule {
            api_version,
            kind,
            verbs,
            patches,
        });
    }

    Ok(rules)
}

/// Check every declared verb against the allowed vocabulary, aborting on
/// the first verb outside it. Declaration order is preserved so error
/// messages and the returned list are deterministic.
fn validate_verbs(
    entry: &Value,
    api_version: &str,
    kind: &str,
    direction: Direction,
    allowed_verbs: &[&str],
    location: &str,
) -> Result<Vec<String>> {
    let raw = entry
        .get("verbs")
        .ok_or_else(|| Error::missing_field("verbs", location))?;
    let raw = raw.as_sequence().ok_or_else(|| {
        Error::invalid_config(format!("{location}.verbs must be a sequence"))
    })?;
    if raw.is_empty() {
        return Err(Error::invalid_config(format!(
            "{location}.verbs must list at least one verb"
        )));
    }

    let mut verbs = Vec::with_capacity(raw.len());
    for verb in raw {
        let verb = verb.as_str().ok_or_else(|| {
            Error::invalid_config(format!("{location}.verbs entries must be strings"))
        })?;
        if !allowed_verbs.contains(&verb) {
            return Err(Error::invalid_verb(
                verb,
                api_version,
                kind,
                direction,
                allowed_verbs,
            ));
        }
        verbs.push(verb.to_string());
    }

    Ok(verbs)
}
