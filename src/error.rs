//! Error types for vocabulary validation and lookup.
//!
//! Validation failures are startup-time defects in the built-in definitions
//! and are fatal for a server. Lookup failures are recoverable: a caller
//! that resolves an incoming wire string can map them to a "bad request"
//! response.

use crate::vocabulary::TableId;

/// A vocabulary definition set violates one of the registry invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("vocabulary table {table}: {reason}")]
pub struct ValidationError {
    pub table: TableId,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub(crate) fn new(table: TableId, reason: ValidationReason) -> Self {
        Self { table, reason }
    }
}

/// What exactly was wrong with the offending table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationReason {
    #[error("table declared more than once")]
    DuplicateTable,
    #[error("table missing from definition set")]
    MissingTable,
    #[error("table has no entries")]
    EmptyTable,
    #[error("entry #{position} has an empty symbolic name or wire value")]
    EmptyEntry { position: usize },
    #[error("duplicate symbolic name {symbol:?}")]
    DuplicateSymbol { symbol: String },
    #[error("wire value {wire:?} declared by both {first:?} and {second:?}")]
    DuplicateWireValue {
        wire: String,
        first: String,
        second: String,
    },
    #[error("symbolic name {symbol:?} must equal its wire value, got {wire:?}")]
    WireDiffersFromSymbol { symbol: String, wire: String },
    #[error("{symbol:?} resolves to {wire:?} here but to {other_wire:?} in {other_table}")]
    WireValueMismatch {
        symbol: String,
        wire: String,
        other_table: TableId,
        other_wire: String,
    },
}

/// A lookup against the registry could not be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("vocabulary registry has not been initialized")]
    NotInitialized,
    #[error("unknown vocabulary table {table:?}")]
    UnknownTable { table: String },
    #[error("unknown entry {value:?} in table {table}")]
    UnknownEntry { table: TableId, value: String },
    #[error("unknown capability kind {kind:?}")]
    UnknownKind { kind: String },
}
