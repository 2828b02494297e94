//! Indexed view of one vocabulary table.
//!
//! Building the index is also how a table is validated: symbols and wire
//! values are inserted into hash maps and the first key already present
//! aborts the build. Nothing is overwritten.

use crate::error::{LookupError, ValidationError, ValidationReason};
use crate::vocabulary::identity::TableId;
use crate::vocabulary::model::{Entry, TableDef};
use std::collections::HashMap;
use std::collections::hash_map::Entry as Slot;

/// A validated table plus symbol and wire indexes into its entries.
#[derive(Debug)]
pub struct VocabularyTable {
    id: TableId,
    entries: Vec<Entry>,
    by_symbol: HashMap<&'static str, usize>,
    by_wire: HashMap<&'static str, usize>,
}

impl VocabularyTable {
    pub(crate) fn build(def: TableDef) -> Result<Self, ValidationError> {
        let TableDef { id, entries } = def;
        let fail = |reason| ValidationError::new(id, reason);

        if entries.is_empty() {
            return Err(fail(ValidationReason::EmptyTable));
        }

        let mut by_symbol = HashMap::with_capacity(entries.len());
        let mut by_wire = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.symbol.is_empty() || entry.wire.is_empty() {
                return Err(fail(ValidationReason::EmptyEntry { position }));
            }
            match by_symbol.entry(entry.symbol) {
                Slot::Occupied(_) => {
                    return Err(fail(ValidationReason::DuplicateSymbol {
                        symbol: entry.symbol.to_string(),
                    }));
                }
                Slot::Vacant(slot) => {
                    slot.insert(position);
                }
            }
            if id.wire_equals_symbol() && entry.symbol != entry.wire {
                return Err(fail(ValidationReason::WireDiffersFromSymbol {
                    symbol: entry.symbol.to_string(),
                    wire: entry.wire.to_string(),
                }));
            }
            match by_wire.entry(entry.wire) {
                Slot::Occupied(existing) => {
                    let first: &Entry = &entries[*existing.get()];
                    return Err(fail(ValidationReason::DuplicateWireValue {
                        wire: entry.wire.to_string(),
                        first: first.symbol.to_string(),
                        second: entry.symbol.to_string(),
                    }));
                }
                Slot::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        Ok(Self {
            id,
            entries,
            by_symbol,
            by_wire,
        })
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.by_symbol.contains_key(symbol)
    }

    pub fn contains_wire(&self, wire: &str) -> bool {
        self.by_wire.contains_key(wire)
    }

    /// Resolve a symbolic name to its entry.
    pub fn entry(&self, symbol: &str) -> Option<&Entry> {
        self.by_symbol.get(symbol).map(|&idx| &self.entries[idx])
    }

    /// Resolve a wire value to its entry.
    pub fn entry_by_wire(&self, wire: &str) -> Option<&Entry> {
        self.by_wire.get(wire).map(|&idx| &self.entries[idx])
    }

    pub fn wire_value_of(&self, symbol: &str) -> Result<&'static str, LookupError> {
        self.entry(symbol)
            .map(|entry| entry.wire)
            .ok_or_else(|| self.unknown(symbol))
    }

    pub fn symbol_of(&self, wire: &str) -> Result<&'static str, LookupError> {
        self.entry_by_wire(wire)
            .map(|entry| entry.symbol)
            .ok_or_else(|| self.unknown(wire))
    }

    fn unknown(&self, value: &str) -> LookupError {
        LookupError::UnknownEntry {
            table: self.id,
            value: value.to_string(),
        }
    }
}
