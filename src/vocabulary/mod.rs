//! Vocabulary registry wiring.
//!
//! Types here describe tables and their entries; [`Registry`] validates a
//! [`DefinitionSet`] and answers lookups. Callers normally go through
//! `Registry::initialize` or the process-wide handle in the crate root.

pub mod identity;
pub mod index;
pub mod model;
pub mod registry;

pub use identity::{CapabilityKind, TableId};
pub use index::VocabularyTable;
pub use model::{DefinitionSet, Entry, TableDef};
pub use registry::Registry;
