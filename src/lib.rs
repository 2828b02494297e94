//! Typed registry of the CDMI v1.0.2 vocabulary.
//!
//! The crate exposes every closed vocabulary a CDMI server needs (capability
//! names per resource kind, HTTP headers, media types, JSON field names,
//! metadata keys and standard error references) through one validated
//! [`Registry`]. Construction fails if any table contains duplicates or if a
//! symbol shared between related tables resolves to different wire strings,
//! so a server holding a `Registry` never puts an unvalidated literal on the
//! wire.
//!
//! Servers call [`init_global`] once at startup and treat an error as fatal.
//! Afterwards the registry is immutable and may be read from any thread.

use std::sync::OnceLock;

pub mod definitions;
pub mod document_validation;
pub mod error;
pub mod error_catalog;
pub mod schema_loader;
pub mod snapshot;
pub mod vocabulary;
pub mod wire;

pub use document_validation::{
    validate_capability_keys, validate_metadata_keys, validate_resource_metadata,
};
pub use error::{LookupError, ValidationError, ValidationReason};
pub use error_catalog::{ErrorCatalog, ErrorDescription};
pub use snapshot::{EntrySnapshot, TableSnapshot, VocabularySnapshot};
pub use vocabulary::{
    CapabilityKind, DefinitionSet, Entry, Registry, TableDef, TableId, VocabularyTable,
};

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Build the process-wide registry from the built-in definitions.
///
/// The first successful call moves the process from uninitialized to ready;
/// later calls return the same instance without rebuilding. A validation
/// error leaves the process uninitialized.
pub fn init_global() -> Result<&'static Registry, ValidationError> {
    if let Some(registry) = REGISTRY.get() {
        return Ok(registry);
    }
    let built = Registry::initialize()?;
    Ok(REGISTRY.get_or_init(|| built))
}

/// The process-wide registry, once [`init_global`] has succeeded.
pub fn global() -> Result<&'static Registry, LookupError> {
    REGISTRY.get().ok_or(LookupError::NotInitialized)
}
