//! JSON snapshot of the registry and drift detection against stored copies.
//!
//! A snapshot lists every table with its entries in declaration order. Stored
//! snapshots let downstream projects notice when the vocabulary they were
//! built against no longer matches this crate.

use crate::schema_loader::{LoadedSchema, load_json_schema, schema_dir};
use crate::vocabulary::{CapabilityKind, Registry, TableId};
use crate::wire::CDMI_SPECIFICATION_VERSION;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const SNAPSHOT_SCHEMA_VERSION: &str = "cdmi_vocabulary_v1";
pub const SNAPSHOT_SCHEMA_FILE: &str = "vocabulary_snapshot.schema.json";

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VocabularySnapshot {
    pub schema_version: String,
    pub cdmi_version: String,
    pub tables: Vec<TableSnapshot>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// Kept as text so snapshots from other builds still decode.
    pub name: String,
    pub kind: Option<CapabilityKind>,
    pub entries: Vec<EntrySnapshot>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EntrySnapshot {
    pub symbol: String,
    pub wire: String,
}

impl Registry {
    pub fn snapshot(&self) -> VocabularySnapshot {
        VocabularySnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION.to_string(),
            cdmi_version: CDMI_SPECIFICATION_VERSION.to_string(),
            tables: self
                .tables()
                .map(|table| TableSnapshot {
                    name: table.id().to_string(),
                    kind: table.id().kind(),
                    entries: table
                        .entries()
                        .iter()
                        .map(|entry| EntrySnapshot {
                            symbol: entry.symbol.to_string(),
                            wire: entry.wire.to_string(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// List every difference between `stored` and this registry.
    ///
    /// Returns all findings instead of stopping at the first so a stale
    /// snapshot can be fixed in one pass. An empty list means no drift.
    pub fn drift_from(&self, stored: &VocabularySnapshot) -> Vec<String> {
        let mut findings = Vec::new();
        if stored.cdmi_version != CDMI_SPECIFICATION_VERSION {
            findings.push(format!(
                "snapshot targets CDMI {} but registry implements {}",
                stored.cdmi_version, CDMI_SPECIFICATION_VERSION
            ));
        }

        let mut stored_tables: BTreeMap<&str, &TableSnapshot> = BTreeMap::new();
        for table in &stored.tables {
            if stored_tables.insert(table.name.as_str(), table).is_some() {
                findings.push(format!("snapshot declares {} more than once", table.name));
            }
        }

        for table in self.tables() {
            let Some(snap) = stored_tables.get(table.id().as_str()) else {
                findings.push(format!("{} missing from snapshot", table.id()));
                continue;
            };
            let current: Vec<(&str, &str)> = table
                .entries()
                .iter()
                .map(|entry| (entry.symbol, entry.wire))
                .collect();
            let recorded: Vec<(&str, &str)> = snap
                .entries
                .iter()
                .map(|entry| (entry.symbol.as_str(), entry.wire.as_str()))
                .collect();
            diff_entries(table.id(), &current, &recorded, &mut findings);
        }
        for name in stored_tables.keys() {
            if name.parse::<TableId>().is_err() {
                findings.push(format!("snapshot lists unknown table {name}"));
            }
        }
        findings
    }
}

fn diff_entries(
    table: TableId,
    current: &[(&str, &str)],
    recorded: &[(&str, &str)],
    findings: &mut Vec<String>,
) {
    let current_map: BTreeMap<&str, &str> = current.iter().copied().collect();
    let recorded_map: BTreeMap<&str, &str> = recorded.iter().copied().collect();

    for (symbol, wire) in &current_map {
        match recorded_map.get(symbol) {
            None => findings.push(format!("{table}: {symbol} missing from snapshot")),
            Some(old) if old != wire => findings.push(format!(
                "{table}: {symbol} is {wire:?} but snapshot records {old:?}"
            )),
            Some(_) => {}
        }
    }
    for symbol in recorded_map.keys() {
        if !current_map.contains_key(symbol) {
            findings.push(format!("{table}: snapshot lists unknown entry {symbol}"));
        }
    }

    let same_members = current_map.len() == recorded_map.len()
        && current_map.keys().all(|symbol| recorded_map.contains_key(symbol));
    if same_members && current.iter().map(|e| e.0).ne(recorded.iter().map(|e| e.0)) {
        findings.push(format!("{table}: declaration order differs from snapshot"));
    }
}

/// Load the snapshot schema from the configured schema directory.
pub fn load_snapshot_schema() -> Result<LoadedSchema> {
    load_json_schema(&snapshot_schema_path(), SNAPSHOT_SCHEMA_VERSION)
}

pub fn snapshot_schema_path() -> PathBuf {
    schema_dir().join(SNAPSHOT_SCHEMA_FILE)
}

/// Validate a snapshot against its schema.
pub fn validate_snapshot(snapshot: &VocabularySnapshot, schema: &LoadedSchema) -> Result<()> {
    let value = serde_json::to_value(snapshot).context("serializing snapshot")?;
    schema.validate(&value, "vocabulary snapshot")
}

/// Read a stored snapshot, validating it against the schema first.
pub fn read_snapshot(path: &Path, schema: &LoadedSchema) -> Result<VocabularySnapshot> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading snapshot {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&data)
        .with_context(|| format!("parsing snapshot {}", path.display()))?;
    schema.validate(&value, &format!("snapshot {}", path.display()))?;
    serde_json::from_value(value).with_context(|| format!("decoding snapshot {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::initialize().unwrap()
    }

    #[test]
    fn snapshot_mirrors_registry() {
        let registry = registry();
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.schema_version, SNAPSHOT_SCHEMA_VERSION);
        assert_eq!(snapshot.tables.len(), TableId::COUNT);
        let queue = &snapshot.tables[TableId::QueueCapability as usize];
        assert_eq!(queue.kind, Some(CapabilityKind::Queue));
        assert_eq!(queue.entries[0].symbol, "cdmi_read_value");

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            value.pointer("/tables/7/name").and_then(|v| v.as_str()),
            Some("CdmiHeader")
        );
        assert_eq!(value.pointer("/tables/7/kind"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn fresh_snapshot_has_no_drift() {
        let registry = registry();
        assert!(registry.drift_from(&registry.snapshot()).is_empty());
    }

    #[test]
    fn drift_reports_changed_missing_and_extra_entries() {
        let registry = registry();
        let mut snapshot = registry.snapshot();
        let headers = &mut snapshot.tables[TableId::CdmiHeader as usize];
        headers.entries[1].wire = "X-CDMI-Partial-Old".into();
        let queue = &mut snapshot.tables[TableId::QueueCapability as usize];
        queue.entries.pop();
        queue.entries.push(EntrySnapshot {
            symbol: "cdmi_queue_legacy".into(),
            wire: "cdmi_queue_legacy".into(),
        });

        let findings = registry.drift_from(&snapshot);
        assert_eq!(findings.len(), 3, "{findings:?}");
        assert!(findings.iter().any(|f| f.contains("X-CDMI-Partial-Old")));
        assert!(findings.iter().any(|f| f.contains("cdmi_reference_queue missing")));
        assert!(findings.iter().any(|f| f.contains("unknown entry cdmi_queue_legacy")));
    }

    #[test]
    fn drift_reports_reordering_and_missing_tables() {
        let registry = registry();
        let mut snapshot = registry.snapshot();
        snapshot.tables[TableId::StdErrorRef as usize].entries.swap(0, 1);
        snapshot.tables.retain(|t| t.name != "JsonField");

        let findings = registry.drift_from(&snapshot);
        assert_eq!(
            findings,
            vec![
                "JsonField missing from snapshot".to_string(),
                "StdErrorRef: declaration order differs from snapshot".to_string(),
            ]
        );
    }

    #[test]
    fn drift_reports_unknown_and_repeated_tables() {
        let registry = registry();
        let mut snapshot = registry.snapshot();
        let header = snapshot.tables[TableId::CdmiHeader as usize].clone();
        snapshot.tables.push(header);
        snapshot.tables.push(TableSnapshot {
            name: "CdmiFutureTable".into(),
            kind: None,
            entries: vec![EntrySnapshot {
                symbol: "cdmi_future".into(),
                wire: "cdmi_future".into(),
            }],
        });

        let findings = registry.drift_from(&snapshot);
        assert_eq!(
            findings,
            vec![
                "snapshot declares CdmiHeader more than once".to_string(),
                "snapshot lists unknown table CdmiFutureTable".to_string(),
            ]
        );
    }
}
