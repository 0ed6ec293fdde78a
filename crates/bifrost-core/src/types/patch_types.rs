//! Patch operation types

use serde::Serialize;
use serde_json::Value;

/// A single declarative field transform applied to an object during sync.
///
/// Which extra fields an operation carries is a pure function of its kind,
/// so the type is a tagged enum with one variant per kind rather than one
/// struct of optional fields. Construction goes through [`crate::parse`],
/// which enforces each kind's required fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op")]
pub enum Patch {
    /// Set `path` to `value`, creating intermediate structure as needed
    #[serde(rename = "add")]
    Add { path: String, value: Value },

    /// Overwrite the existing value at `path` with `value`
    #[serde(rename = "replace")]
    Replace { path: String, value: Value },

    /// Delete the field at `path`
    #[serde(rename = "remove")]
    Remove { path: String },

    /// Rewrite a name-shaped field at `path` for the target cluster's
    /// naming scheme
    #[serde(rename = "rewriteName")]
    RewriteName { path: String },

    /// Copy the value at `fromPath` on the sync source object into `path`
    /// on the target object
    #[serde(rename = "copyFromObject")]
    CopyFromObject {
        path: String,
        #[serde(rename = "fromPath")]
        from_path: String,
    },
}

impl Patch {
    /// The operation kind's wire name
    pub fn op(&self) -> &'static str {
        match self {
            Patch::Add { .. } => "add",
            Patch::Replace { .. } => "replace",
            Patch::Remove { .. } => "remove",
            Patch::RewriteName { .. } => "rewriteName",
            Patch::CopyFromObject { .. } => "copyFromObject",
        }
    }

    /// The dotted field path the operation targets
    pub fn path(&self) -> &str {
        match self {
            Patch::Add { path, .. }
            | Patch::Replace { path, .. }
            | Patch::Remove { path }
            | Patch::RewriteName { path }
            | Patch::CopyFromObject { path, .. } => path,
        }
    }
}
