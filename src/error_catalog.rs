//! Externally maintained descriptions for the standard error references.
//!
//! The registry only knows the closed set of `BRnnn` codes. HTTP status and
//! message text come from a separate JSON file owned by the deploying server,
//! so wording can change without touching the vocabulary. Loading is strict:
//! the file must match its schema, every code must be known to the registry,
//! and no code may be described twice.

use crate::schema_loader::{LoadedSchema, load_json_schema, schema_dir};
use crate::vocabulary::Registry;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ERROR_CATALOG_SCHEMA_VERSION: &str = "cdmi_error_catalog_v1";
pub const ERROR_CATALOG_SCHEMA_FILE: &str = "error_catalog.schema.json";

#[derive(Clone, Debug, Deserialize)]
struct ErrorCatalogFile {
    errors: Vec<ErrorDescription>,
}

/// Status and message for one error reference.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ErrorDescription {
    pub code: String,
    pub http_status: u16,
    pub message: String,
}

/// Validated error descriptions keyed by code.
#[derive(Debug)]
pub struct ErrorCatalog {
    by_code: BTreeMap<String, ErrorDescription>,
}

impl ErrorCatalog {
    /// Load a catalog file, validating it against the schema in the
    /// configured schema directory.
    pub fn load(path: &Path, registry: &Registry) -> Result<Self> {
        let schema = load_json_schema(&error_catalog_schema_path(), ERROR_CATALOG_SCHEMA_VERSION)?;
        Self::load_with_schema(path, registry, &schema)
    }

    pub fn load_with_schema(
        path: &Path,
        registry: &Registry,
        schema: &LoadedSchema,
    ) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("opening error catalog {}", path.display()))?;
        let value: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing error catalog {}", path.display()))?;
        schema.validate(&value, &format!("error catalog {}", path.display()))?;

        let parsed: ErrorCatalogFile = serde_json::from_value(value)
            .with_context(|| format!("decoding error catalog {}", path.display()))?;
        let catalog = Self::from_descriptions(parsed.errors, registry)
            .with_context(|| format!("validating error catalog {}", path.display()))?;
        debug!(
            path = %path.display(),
            described = catalog.by_code.len(),
            "loaded error catalog"
        );
        Ok(catalog)
    }

    /// Build a catalog from already-parsed descriptions.
    pub fn from_descriptions(
        descriptions: Vec<ErrorDescription>,
        registry: &Registry,
    ) -> Result<Self> {
        let mut by_code = BTreeMap::new();
        for description in descriptions {
            if !registry.is_known_error_code(&description.code) {
                bail!("unknown error reference {}", description.code);
            }
            if !(100..=599).contains(&description.http_status) {
                bail!(
                    "{} maps to invalid HTTP status {}",
                    description.code,
                    description.http_status
                );
            }
            if description.message.trim().is_empty() {
                bail!("{} has an empty message", description.code);
            }
            if by_code.contains_key(&description.code) {
                bail!("duplicate error reference {}", description.code);
            }
            by_code.insert(description.code.clone(), description);
        }
        Ok(Self { by_code })
    }

    pub fn describe(&self, code: &str) -> Option<&ErrorDescription> {
        self.by_code.get(code)
    }

    /// Known codes the catalog does not describe, in code order.
    pub fn missing_codes(&self, registry: &Registry) -> Vec<&'static str> {
        registry
            .all_error_codes()
            .into_iter()
            .filter(|code| !self.by_code.contains_key(*code))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

pub fn error_catalog_schema_path() -> PathBuf {
    schema_dir().join(ERROR_CATALOG_SCHEMA_FILE)
}
