//! Error types for bifrost-core

use crate::types::Direction;
use thiserror::Error;

/// Result type alias using bifrost-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while parsing and validating a sync rule document
#[derive(Error, Debug)]
pub enum Error {
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON value conversion error
    #[error("JSON conversion error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Structurally invalid document
    #[error("invalid sync rule document: {message}")]
    InvalidConfig { message: String },

    /// Declared schema version missing or not understood by this build
    #[error("unsupported config version {got:?}; supported versions: {versions}", versions = .supported.join(", "))]
    UnsupportedVersion {
        got: String,
        supported: &'static [&'static str],
    },

    /// Required field absent, empty, or unusable on a rule, patch, or hook entry
    #[error("missing required field {field:?} in {location}")]
    MissingField { field: String, location: String },

    /// Patch operation kind not in the supported set
    #[error("unsupported patch operation {op:?} in {location}; supported operations: {ops}", ops = .supported.join(", "))]
    UnsupportedOp {
        op: String,
        location: String,
        supported: &'static [&'static str],
    },

    /// Hook verb not in the allowed vocabulary
    ///
    /// The `invalid verb "<verb>"; ` message prefix is a stable contract
    /// that embedders match on.
    #[error("invalid verb {verb:?}; allowed verbs are {verbs} (declared on {direction} hook for {api_version}/{kind})", verbs = .allowed.join(", "))]
    InvalidVerb {
        verb: String,
        api_version: String,
        kind: String,
        direction: Direction,
        allowed: Vec<String>,
    },
}

impl Error {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unsupported version error
    pub fn unsupported_version(
        got: impl Into<String>,
        supported: &'static [&'static str],
    ) -> Self {
        Self::UnsupportedVersion {
            got: got.into(),
            supported,
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>, location: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            location: location.into(),
        }
    }

    /// Create an unsupported patch operation error
    pub fn unsupported_op(
        op: impl Into<String>,
        location: impl Into<String>,
        supported: &'static [&'static str],
    ) -> Self {
        Self::UnsupportedOp {
            op: op.into(),
            location: location.into(),
            supported,
        }
    }

    /// Create an invalid verb error
    pub fn invalid_verb(
        verb: impl Into<String>,
        api_version: impl Into<String>,
        kind: impl Into<String>,
        direction: Direction,
        allowed: &[&str],
    ) -> Self {
        Self::InvalidVerb {
            verb: verb.into(),
            api_version: api_version.into(),
            kind: kind.into(),
            direction,
            allowed: allowed.iter().map(|verb| verb.to_string()).collect(),
        }
    }
}
