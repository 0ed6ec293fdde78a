//! End-to-end parsing tests over complete sync rule documents
//!
//! Tests cover:
//! - Mixed export rules with comments and reverse patches
//! - Hook pipelines in both directions
//! - Unknown-verb rejection and its message contract
//! - Round-trip serialization and idempotent parsing

use bifrost_core::{parse, parse_with_hook_verbs, Direction, Patch};
use serde_json::json;

/// Export rules as an operator would write them, comments included
const EXPORT_RULES: &str = r#"version: v1beta1
export:  # Synced from the virtual cluster
- apiVersion: cert-manager.io/v1
  kind: Issuer
- apiVersion: cert-manager.io/v1
  kind: Certificates
  patches:
    - op: rewriteName
      path: spec.ca.secretName
  reversePatches:
    - op: copyFromObject # Sync status back by default
      fromPath: status
      path: status
"#;

const HOOK_RULES: &str = r#"version: v1beta1
hooks:
  hostToVirtual:
    - apiVersion: v1
      kind: Pod
      verbs: ["create", "update", "patch"]
      patches:
        - op: add
          path: metadata.annotations
          value:
            import-annotation: testing-annotation-import
  virtualToHost:
    - apiVersion: v1
      kind: Pod
      verbs: ["create", "update", "patch"]
      patches:
        - op: add
          path: metadata.annotations
          value:
            export-annotation: testing-annotation-export
"#;

#[test]
fn test_export_rules_with_comments() {
    let config = parse(EXPORT_RULES).unwrap();

    assert_eq!(config.version, "v1beta1");
    assert_eq!(config.export.len(), 2);
    assert!(config.import.is_empty());
    assert!(config.hooks.is_empty());

    let issuer = &config.export[0];
    assert_eq!(issuer.api_version, "cert-manager.io/v1");
    assert_eq!(issuer.kind, "Issuer");
    assert!(issuer.patches.is_empty());
    assert!(issuer.reverse_patches.is_empty());

    let certificates = &config.export[1];
    assert_eq!(certificates.kind, "Certificates");
    assert_eq!(
        certificates.patches,
        [Patch::RewriteName {
            path: "spec.ca.secretName".to_string()
        }]
    );
    assert_eq!(
        certificates.reverse_patches,
        [Patch::CopyFromObject {
            path: "status".to_string(),
            from_path: "status".to_string()
        }]
    );
}

#[test]
fn test_hooks_in_both_directions() {
    let config = parse(HOOK_RULES).unwrap();

    for direction in [Direction::HostToVirtual, Direction::VirtualToHost] {
        let hooks = config.hooks.for_direction(direction);
        assert_eq!(hooks.len(), 1, "one hook expected for {direction}");
        assert_eq!(hooks[0].api_version, "v1");
        assert_eq!(hooks[0].kind, "Pod");
        assert_eq!(hooks[0].verbs, ["create", "update", "patch"]);
        assert!(hooks[0].triggers_on("update"));
        assert!(!hooks[0].triggers_on("delete"));
    }

    assert_eq!(
        config.hooks.host_to_virtual[0].patches,
        [Patch::Add {
            path: "metadata.annotations".to_string(),
            value: json!({"import-annotation": "testing-annotation-import"}),
        }]
    );
    assert_eq!(
        config.hooks.virtual_to_host[0].patches,
        [Patch::Add {
            path: "metadata.annotations".to_string(),
            value: json!({"export-annotation": "testing-annotation-export"}),
        }]
    );
}

#[test]
fn test_unknown_verb_rejects_whole_document() {
    let raw = HOOK_RULES.replace(
        r#"verbs: ["create", "update", "patch"]
      patches:
        - op: add
          path: metadata.annotations
          value:
            import-annotation: testing-annotation-import"#,
        r#"verbs: ["create", "update", "patch", "unknown"]
      patches:
        - op: add
          path: metadata.annotations
          value:
            import-annotation: testing-annotation-import"#,
    );
    assert_ne!(raw, HOOK_RULES, "fixture edit must have applied");

    let err = parse(&raw).unwrap_err();
    assert!(
        err.to_string().contains("invalid verb \"unknown\";"),
        "Unexpected message: {}",
        err
    );
}

#[test]
fn test_custom_verb_vocabulary() {
    let raw = r#"version: v1beta1
hooks:
  virtualToHost:
    - apiVersion: batch/v1
      kind: Job
      verbs: ["create", "expire"]
"#;
    assert!(parse(raw).is_err());

    let config = parse_with_hook_verbs(raw, &["create", "expire"]).unwrap();
    assert_eq!(config.hooks.virtual_to_host[0].verbs, ["create", "expire"]);
}

#[test]
fn test_missing_patch_value_identifies_field() {
    let raw = r#"version: v1beta1
import:
- apiVersion: v1
  kind: Service
  patches:
    - op: add
      path: spec.selector
"#;
    let err = parse(raw).unwrap_err();
    assert!(
        err.to_string().contains("\"value\""),
        "Unexpected message: {}",
        err
    );
}

#[test]
fn test_round_trip_through_yaml() {
    let config = parse(EXPORT_RULES).unwrap();
    let emitted = config.to_yaml().unwrap();
    let reparsed = parse(&emitted).unwrap();
    assert_eq!(config, reparsed);
}

#[test]
fn test_parsing_is_deterministic() {
    assert_eq!(parse(HOOK_RULES).unwrap(), parse(HOOK_RULES).unwrap());

    let bad = "version: v0\n";
    assert_eq!(
        parse(bad).unwrap_err().to_string(),
        parse(bad).unwrap_err().to_string()
    );
}
