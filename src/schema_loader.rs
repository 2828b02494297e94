//! Shared JSON Schema loader.
//!
//! Snapshot and error-catalog schemas are loaded the same way: read the file,
//! check the `schema_version` const against the version the caller expects,
//! and compile a validator.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Environment override for the directory holding `*.schema.json` files.
pub const SCHEMA_DIR_ENV: &str = "CDMI_VOCAB_SCHEMA_DIR";

const SCHEMA_VERSION_POINTER: &str = "/properties/schema_version/const";

/// A compiled schema plus the version it pins.
pub struct LoadedSchema {
    pub schema_version: String,
    pub compiled: JSONSchema,
}

impl LoadedSchema {
    /// Validate `instance`, joining every schema violation into one error.
    pub fn validate(&self, instance: &Value, what: &str) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| format!("{}: {}", err.instance_path, err))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("{what} failed schema validation:\n{details}");
        }
        Ok(())
    }
}

/// Directory holding the repository schemas.
///
/// Honors `CDMI_VOCAB_SCHEMA_DIR` when it points at a directory, otherwise
/// falls back to `schema/` in the crate root.
pub fn schema_dir() -> PathBuf {
    if let Some(dir) = env::var_os(SCHEMA_DIR_ENV) {
        let dir = PathBuf::from(dir);
        if dir.is_dir() {
            return dir;
        }
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schema")
}

/// Load and compile the schema at `path`, requiring its `schema_version`
/// const to equal `expected_version`.
pub fn load_json_schema(path: &Path, expected_version: &str) -> Result<LoadedSchema> {
    let file = File::open(path).with_context(|| format!("opening schema {}", path.display()))?;
    let schema: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing schema {}", path.display()))?;

    let schema_version = extract_schema_version(&schema).ok_or_else(|| {
        anyhow!(
            "schema {} missing schema_version const at {}",
            path.display(),
            SCHEMA_VERSION_POINTER
        )
    })?;
    if schema_version != expected_version {
        bail!(
            "schema {} pins schema_version '{}', expected '{}'",
            path.display(),
            schema_version,
            expected_version
        );
    }

    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling schema {}: {err}", path.display()))?;

    Ok(LoadedSchema {
        schema_version,
        compiled,
    })
}

fn extract_schema_version(schema: &Value) -> Option<String> {
    let version = schema.pointer(SCHEMA_VERSION_POINTER).and_then(Value::as_str)?;
    if !version.is_empty()
        && version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Some(version.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_schema(value: &Value) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        serde_json::to_writer(&mut file, value).unwrap();
        file.flush().unwrap();
        file
    }

    fn sample_schema(version: &str) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "required": ["schema_version", "name"],
            "properties": {
                "schema_version": {"type": "string", "const": version},
                "name": {"type": "string", "minLength": 1}
            }
        })
    }

    #[test]
    fn compiles_and_validates() {
        let file = write_schema(&sample_schema("sample_v1"));
        let schema = load_json_schema(file.path(), "sample_v1").unwrap();
        assert_eq!(schema.schema_version, "sample_v1");
        schema
            .validate(&json!({"schema_version": "sample_v1", "name": "ok"}), "sample")
            .unwrap();
        let err = schema
            .validate(&json!({"schema_version": "sample_v1", "name": ""}), "sample")
            .unwrap_err();
        assert!(err.to_string().contains("sample failed schema validation"));
    }

    #[test]
    fn rejects_unexpected_version() {
        let file = write_schema(&sample_schema("sample_v2"));
        let err = load_json_schema(file.path(), "sample_v1").err().unwrap();
        assert!(err.to_string().contains("expected 'sample_v1'"));
    }

    #[test]
    fn rejects_schema_without_version_const() {
        let file = write_schema(&json!({"type": "object"}));
        assert!(load_json_schema(file.path(), "sample_v1").is_err());
    }
}
