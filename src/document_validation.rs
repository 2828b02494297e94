//! Validation helpers for CDMI JSON documents.
//!
//! Servers use these to reject request bodies that name `cdmi_*` keys outside
//! the vocabulary before anything reaches storage. Both helpers return every
//! problem found rather than stopping at the first one.

use crate::vocabulary::{CapabilityKind, Registry, TableId};
use serde_json::Value;

// Keys with this prefix are reserved by the specification; anything else in
// a metadata object is user metadata.
const RESERVED_PREFIX: &str = "cdmi_";

/// Check the keys of a `metadata` object.
pub fn validate_metadata_keys(registry: &Registry, metadata: &Value) -> Vec<String> {
    let Some(object) = metadata.as_object() else {
        return vec!["metadata must be a JSON object".to_string()];
    };
    let mut errors = Vec::new();
    for key in object.keys() {
        if key.starts_with(RESERVED_PREFIX) && !registry.is_known_metadata_key(key) {
            errors.push(format!("unknown reserved metadata key '{key}'"));
        }
    }
    errors
}

/// Check the keys of a `capabilities` object advertised for `kind`.
///
/// Container and data object capability objects may also carry data system
/// capabilities (12.1.3), so those are accepted for both kinds.
pub fn validate_capability_keys(
    registry: &Registry,
    kind: CapabilityKind,
    capabilities: &Value,
) -> Vec<String> {
    let Some(object) = capabilities.as_object() else {
        return vec!["capabilities must be a JSON object".to_string()];
    };
    let also_data_system = matches!(kind, CapabilityKind::Container | CapabilityKind::DataObject);
    let mut errors = Vec::new();
    for key in object.keys() {
        let known = registry.has_capability(kind, key)
            || (also_data_system && registry.table(TableId::DataSystemCapability).contains(key));
        if !known {
            errors.push(format!("'{key}' is not a {kind} capability"));
        }
    }
    errors
}

/// Pull the `metadata` object out of a CDMI resource body and check it.
///
/// A body without `metadata` is fine; a non-object body is not.
pub fn validate_resource_metadata(registry: &Registry, body: &Value) -> Vec<String> {
    if !body.is_object() {
        return vec!["resource body must be a JSON object".to_string()];
    }
    match body.get("metadata") {
        Some(metadata) => validate_metadata_keys(registry, metadata),
        None => Vec::new(),
    }
}
