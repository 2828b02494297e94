//! The vocabulary registry: every table, validated and indexed.
//!
//! A `Registry` only exists once validation succeeded, so every lookup on it
//! runs against a consistent vocabulary. Construction validates each table on
//! its own first and then checks that a symbol shared by any two tables has
//! one wire value.

use crate::definitions;
use crate::error::{LookupError, ValidationError, ValidationReason};
use crate::vocabulary::identity::{CapabilityKind, TableId};
use crate::vocabulary::index::VocabularyTable;
use crate::vocabulary::model::{DefinitionSet, Entry};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Read-only, validated set of all vocabulary tables.
#[derive(Debug)]
pub struct Registry {
    // Indexed by `TableId::index`.
    tables: Vec<VocabularyTable>,
}

impl Registry {
    /// Build the registry from the built-in CDMI v1.0.2 definitions.
    pub fn initialize() -> Result<Self, ValidationError> {
        Self::from_definitions(definitions::cdmi_v1_0_2())
    }

    /// Build and validate a registry from an arbitrary definition set.
    ///
    /// Every table in [`TableId::ALL`] must be declared exactly once.
    pub fn from_definitions(set: DefinitionSet) -> Result<Self, ValidationError> {
        let result = build_tables(set).and_then(|tables| {
            check_shared_symbols(&tables)?;
            Ok(Self { tables })
        });
        match &result {
            Ok(registry) => info!(
                tables = registry.tables.len(),
                entries = registry.tables.iter().map(VocabularyTable::len).sum::<usize>(),
                "vocabulary registry ready"
            ),
            Err(err) => warn!(table = %err.table, %err, "vocabulary validation failed"),
        }
        result
    }

    pub fn table(&self, id: TableId) -> &VocabularyTable {
        &self.tables[id.index()]
    }

    /// Resolve a table by its name, e.g. `"CdmiHeader"`.
    pub fn table_named(&self, name: &str) -> Result<&VocabularyTable, LookupError> {
        let id: TableId = name.parse()?;
        Ok(self.table(id))
    }

    /// Iterates tables in [`TableId::ALL`] order.
    pub fn tables(&self) -> impl Iterator<Item = &VocabularyTable> {
        self.tables.iter()
    }

    /// Full capability table for a resource kind, in declaration order.
    pub fn capabilities_for(&self, kind: CapabilityKind) -> &[Entry] {
        self.table(kind.table()).entries()
    }

    /// Case-sensitive membership test against a kind's capability table.
    pub fn has_capability(&self, kind: CapabilityKind, symbol: &str) -> bool {
        self.table(kind.table()).contains(symbol)
    }

    pub fn wire_value_of(&self, table: &str, symbol: &str) -> Result<&'static str, LookupError> {
        self.table_named(table)?.wire_value_of(symbol)
    }

    pub fn symbolic_name_of_wire_value(
        &self,
        table: &str,
        wire: &str,
    ) -> Result<&'static str, LookupError> {
        self.table_named(table)?.symbol_of(wire)
    }

    /// The closed set of standard error references, `BR001` through `BR016`.
    pub fn all_error_codes(&self) -> BTreeSet<&'static str> {
        self.table(TableId::StdErrorRef)
            .entries()
            .iter()
            .map(|entry| entry.symbol)
            .collect()
    }

    pub fn is_known_error_code(&self, code: &str) -> bool {
        self.table(TableId::StdErrorRef).contains(code)
    }

    /// True when `key` is a metadata key from any of the metadata tables.
    pub fn is_known_metadata_key(&self, key: &str) -> bool {
        [
            TableId::StorageSystemMetadata,
            TableId::DataSystemMetadata,
            TableId::LoggingQueueMetadata,
        ]
        .into_iter()
        .any(|id| self.table(id).contains(key))
    }
}

fn build_tables(set: DefinitionSet) -> Result<Vec<VocabularyTable>, ValidationError> {
    let mut slots: Vec<Option<VocabularyTable>> = TableId::ALL.iter().map(|_| None).collect();
    for def in set.into_tables() {
        let id = def.id;
        if slots[id.index()].is_some() {
            return Err(ValidationError::new(id, ValidationReason::DuplicateTable));
        }
        let table = VocabularyTable::build(def)?;
        debug!(table = %id, entries = table.len(), "validated vocabulary table");
        slots[id.index()] = Some(table);
    }

    TableId::ALL
        .into_iter()
        .zip(slots)
        .map(|(id, slot)| {
            slot.ok_or_else(|| ValidationError::new(id, ValidationReason::MissingTable))
        })
        .collect()
}

// Pairwise over every table; the mismatch is reported against the later table.
fn check_shared_symbols(tables: &[VocabularyTable]) -> Result<(), ValidationError> {
    for (pos, first) in tables.iter().enumerate() {
        for second in &tables[pos + 1..] {
            check_pair(first, second)?;
        }
    }
    Ok(())
}

fn check_pair(first: &VocabularyTable, second: &VocabularyTable) -> Result<(), ValidationError> {
    for entry in second.entries() {
        let Some(other) = first.entry(entry.symbol) else {
            continue;
        };
        if other.wire != entry.wire {
            return Err(ValidationError::new(
                second.id(),
                ValidationReason::WireValueMismatch {
                    symbol: entry.symbol.to_string(),
                    wire: entry.wire.to_string(),
                    other_table: first.id(),
                    other_wire: other.wire.to_string(),
                },
            ));
        }
    }
    Ok(())
}
