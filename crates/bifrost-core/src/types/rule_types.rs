//! Types for the validated sync rule set

use serde::Serialize;

use crate::error::{Error, Result};
use crate::types::Patch;

/// Root of a validated sync rule document.
///
/// A `Config` is only ever produced by [`crate::parse`]; it is either fully
/// valid or the parse fails, so holders never see a partially validated
/// rule set. All contained entities are immutable after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Config {
    /// Declared schema version (e.g. "v1beta1")
    pub version: String,

    /// Rules for resources exported from the virtual cluster to the host
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub export: Vec<ResourceRule>,

    /// Rules for resources imported from the host cluster into the virtual
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub import: Vec<ResourceRule>,

    /// Verb-triggered transform pipelines, keyed by sync direction
    #[serde(skip_serializing_if = "HookSet::is_empty")]
    pub hooks: HookSet,
}

impl Config {
    /// Find the export rule governing a resource kind.
    ///
    /// Later rules override earlier ones for the same kind, so the last
    /// declared match wins.
    pub fn export_rule_for(&self, api_version: &str, kind: &str) -> Option<&ResourceRule> {
        self.export
            .iter()
            .rev()
            .find(|rule| rule.matches(api_version, kind))
    }

    /// Find the import rule governing a resource kind (last match wins).
    pub fn import_rule_for(&self, api_version: &str, kind: &str) -> Option<&ResourceRule> {
        self.import
            .iter()
            .rev()
            .find(|rule| rule.matches(api_version, kind))
    }

    /// Serialize the rule set back to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(Error::from)
    }
}

/// Sync rule for one resource kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceRule {
    /// API group/version of the governed resource (e.g. "cert-manager.io/v1")
    #[serde(rename = "apiVersion")]
    pub api_version: String,

    /// Resource kind (e.g. "Issuer")
    pub kind: String,

    /// Transforms applied in the rule's primary sync direction
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub patches: Vec<Patch>,

    /// Transforms applied in the opposite direction, typically used to sync
    /// status fields back
    #[serde(rename = "reversePatches", skip_serializing_if = "Vec::is_empty")]
    pub reverse_patches: Vec<Patch>,
}

impl ResourceRule {
    /// Whether this rule governs the given resource kind
    pub fn matches(&self, api_version: &str, kind: &str) -> bool {
        self.api_version == api_version && self.kind == kind
    }
}

/// Hook pipelines for both sync directions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HookSet {
    /// Hooks fired while objects cross from the host cluster into the virtual
    #[serde(rename = "hostToVirtual", skip_serializing_if = "Vec::is_empty")]
    pub host_to_virtual: Vec<HookRule>,

    /// Hooks fired while objects cross from the virtual cluster into the host
    #[serde(rename = "virtualToHost", skip_serializing_if = "Vec::is_empty")]
    pub virtual_to_host: Vec<HookRule>,
}

impl HookSet {
    /// Whether no hooks are declared in either direction
    pub fn is_empty(&self) -> bool {
        self.host_to_virtual.is_empty() && self.virtual_to_host.is_empty()
    }

    /// Hooks declared for one sync direction
    pub fn for_direction(&self, direction: Direction) -> &[HookRule] {
        match direction {
            Direction::HostToVirtual => &self.host_to_virtual,
            Direction::VirtualToHost => &self.virtual_to_host,
        }
    }
}

/// Direction an object crosses the cluster boundary in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    #[serde(rename = "hostToVirtual")]
    HostToVirtual,
    #[serde(rename = "virtualToHost")]
    VirtualToHost,
}

impl Direction {
    /// The direction's field name in the rule document
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::HostToVirtual => "hostToVirtual",
            Direction::VirtualToHost => "virtualToHost",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A verb-scoped transform pipeline for one resource kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HookRule {
    /// API group/version of the hooked resource
    #[serde(rename = "apiVersion")]
    pub api_version: String,

    /// Resource kind
    pub kind: String,

    /// Lifecycle verbs the hook fires on, in declaration order
    pub verbs: Vec<String>,

    /// Transforms run when the hook fires
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub patches: Vec<Patch>,
}

impl HookRule {
    /// Whether this hook fires for the given verb
    pub fn triggers_on(&self, verb: &str) -> bool {
        self.verbs.iter().any(|v| v == verb)
    }
}
