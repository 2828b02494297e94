//! Declarative shapes for vocabulary definitions.
//!
//! Definitions are plain data: a [`DefinitionSet`] lists one [`TableDef`] per
//! table and each table lists its [`Entry`] values in declaration order.
//! Nothing here is validated; hand a set to `Registry::from_definitions` for
//! that.

use crate::vocabulary::identity::TableId;
use serde::Serialize;

/// One vocabulary constant.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct Entry {
    pub symbol: &'static str,
    pub wire: &'static str,
}

impl Entry {
    /// Entry whose wire value is its symbolic name.
    pub const fn bare(symbol: &'static str) -> Self {
        Self {
            symbol,
            wire: symbol,
        }
    }

    /// Entry with an explicit wire literal.
    pub const fn new(symbol: &'static str, wire: &'static str) -> Self {
        Self { symbol, wire }
    }
}

/// Entries declared for one table.
#[derive(Clone, Debug)]
pub struct TableDef {
    pub id: TableId,
    pub entries: Vec<Entry>,
}

impl TableDef {
    pub fn new(id: TableId, entries: &[Entry]) -> Self {
        Self {
            id,
            entries: entries.to_vec(),
        }
    }
}

/// Complete input for building a registry.
#[derive(Clone, Debug, Default)]
pub struct DefinitionSet {
    tables: Vec<TableDef>,
}

impl DefinitionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a table; a second table with the same id is kept and rejected
    /// later during validation.
    pub fn push(&mut self, table: TableDef) {
        self.tables.push(table);
    }

    /// Replace every table with the same id, or append when absent.
    pub fn replace(&mut self, table: TableDef) {
        self.tables.retain(|existing| existing.id != table.id);
        self.tables.push(table);
    }

    pub fn get(&self, id: TableId) -> Option<&TableDef> {
        self.tables.iter().find(|table| table.id == id)
    }

    pub fn tables(&self) -> &[TableDef] {
        &self.tables
    }

    pub(crate) fn into_tables(self) -> Vec<TableDef> {
        self.tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_entries_reuse_the_symbol() {
        let entry = Entry::bare("cdmi_size");
        assert_eq!(entry.symbol, entry.wire);
        let header = Entry::new("X_CDMI_Partial", "X-CDMI-Partial");
        assert_ne!(header.symbol, header.wire);
    }

    #[test]
    fn replace_drops_all_previous_tables_with_that_id() {
        let mut set = DefinitionSet::new();
        set.push(TableDef::new(TableId::StdErrorRef, &[Entry::bare("BR001")]));
        set.push(TableDef::new(TableId::StdErrorRef, &[Entry::bare("BR002")]));
        set.replace(TableDef::new(TableId::StdErrorRef, &[Entry::bare("BR003")]));
        assert_eq!(set.tables().len(), 1);
        assert_eq!(
            set.get(TableId::StdErrorRef).map(|t| t.entries[0].symbol),
            Some("BR003")
        );
    }
}
