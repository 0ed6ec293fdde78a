//! Sync rule document parsing and validation
//!
//! The pipeline is a strict linear pass: decode the YAML document, gate on
//! the declared schema version, normalize the export and import rule lists,
//! validate hooks and their verbs, then assemble the final [`Config`]. The
//! first error aborts the whole pass; no partially validated rule set is
//! ever returned.

mod hooks;
mod patches;
mod rules;

pub use hooks::DEFAULT_HOOK_VERBS;
pub use patches::SUPPORTED_OPS;

use crate::error::{Error, Result};
use crate::types::Config;
use serde_yaml_ng::Value;
use tracing::debug;

/// Config schema versions this build understands
pub const SUPPORTED_VERSIONS: &[&str] = &["v1beta1"];

/// Parse and validate a sync rule document.
///
/// Hook verbs are checked against [`DEFAULT_HOOK_VERBS`]. On success the
/// returned [`Config`] mirrors the document structure exactly, with rule,
/// patch, and verb order preserved; on any failure the document is rejected
/// wholesale.
pub fn parse(raw: &str) -> Result<Config> {
    parse_with_hook_verbs(raw, DEFAULT_HOOK_VERBS)
}

/// Parse and validate a sync rule document against a caller-supplied hook
/// verb vocabulary.
pub fn parse_with_hook_verbs(raw: &str, allowed_verbs: &[&str]) -> Result<Config> {
    let doc: Value = serde_yaml_ng::from_str(raw)?;
    if !doc.is_mapping() {
        return Err(Error::invalid_config(
            "expected a mapping at the document root",
        ));
    }

    let version = check_version(&doc)?;
    let export = rules::normalize_rules(&doc, "export")?;
    let import = rules::normalize_rules(&doc, "import")?;
    let hooks = hooks::validate_hooks(&doc, allowed_verbs)?;

    debug!(
        version = %version,
        export = export.len(),
        import = import.len(),
        hooks = hooks.host_to_virtual.len() + hooks.virtual_to_host.len(),
        "validated sync rule set"
    );

    Ok(Config {
        version,
        export,
        import,
        hooks,
    })
}

/// Read the declared schema version, rejecting documents this build does
/// not understand before any rule processing happens.
fn check_version(doc: &Value) -> Result<String> {
    let got = doc.get("version").and_then(Value::as_str).unwrap_or_default();
    if !SUPPORTED_VERSIONS.contains(&got) {
        return Err(Error::unsupported_version(got, SUPPORTED_VERSIONS));
    }
    Ok(got.to_string())
}

/// Read a required non-empty string field from an entry.
///
/// Present-but-empty and present-but-not-a-string read the same as absent:
/// the downstream executor cannot use any of them.
pub(crate) fn require_str(entry: &Value, field: &str, location: &str) -> Result<String> {
    match entry.get(field).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(Error::missing_field(field, location)),
    }
}

/// Read an optional sequence-valued field, treating absent and explicit
/// null as an empty sequence.
pub(crate) fn optional_sequence<'a>(
    parent: &'a Value,
    field: &str,
    location: &str,
) -> Result<Option<&'a [Value]>> {
    match parent.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            let entries = value.as_sequence().ok_or_else(|| {
                Error::invalid_config(format!("{location} must be a sequence"))
            })?;
            Ok(Some(entries.as_slice()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_only() {
        let config = parse("version: v1beta1\n").unwrap();
        assert_eq!(config.version, "v1beta1");
        assert!(config.export.is_empty());
        assert!(config.import.is_empty());
        assert!(config.hooks.is_empty());
    }

    #[test]
    fn test_unsupported_version() {
        let result = parse("version: v2\n");
        let err = result.unwrap_err();
        assert!(
            matches!(err, Error::UnsupportedVersion { .. }),
            "Expected UnsupportedVersion, got: {:?}",
            err
        );
        let message = err.to_string();
        assert!(message.contains("\"v2\""));
        assert!(message.contains("v1beta1"));
    }

    #[test]
    fn test_missing_version() {
        let err = parse("export: []\n").unwrap_err();
        assert!(
            matches!(err, Error::UnsupportedVersion { .. }),
            "Expected UnsupportedVersion, got: {:?}",
            err
        );
    }

    #[test]
    fn test_version_gate_runs_before_rule_checks() {
        // The export entry is missing `kind`, but the version error must win
        let raw = "version: v9\nexport:\n- apiVersion: v1\n";
        let err = parse(raw).unwrap_err();
        assert!(matches!(err, Error::UnsupportedVersion { .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = parse("version: [v1beta1\n").unwrap_err();
        assert!(
            matches!(err, Error::YamlParse(_)),
            "Expected YamlParse, got: {:?}",
            err
        );
    }

    #[test]
    fn test_non_mapping_root() {
        let err = parse("- just\n- a\n- list\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let raw = "\
version: v1beta1
future: true
export:
- apiVersion: v1
  kind: Secret
  widgets: 3
";
        let config = parse(raw).unwrap();
        assert_eq!(config.export.len(), 1);
        assert_eq!(config.export[0].kind, "Secret");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let raw = "\
version: v1beta1
export:
- apiVersion: v1
  kind: Secret
  patches:
    - op: rewriteName
      path: metadata.name
hooks:
  virtualToHost:
    - apiVersion: v1
      kind: Pod
      verbs: [\"create\"]
";
        assert_eq!(parse(raw).unwrap(), parse(raw).unwrap());
    }
}
