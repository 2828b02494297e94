//! Built-in CDMI v1.0.2 vocabulary.
//!
//! Tables are grouped by the specification area they come from. Any other
//! CDMI version belongs in its own definition set, never an edit to this one.

mod capability;
mod http;
mod json;
mod metadata;

use crate::vocabulary::{DefinitionSet, Entry, TableDef, TableId};

// Standard error references. Message text and HTTP status live in the
// external error catalog, see `crate::error_catalog`.
const STD_ERROR_REFS: &[Entry] = &[
    Entry::bare("BR001"),
    Entry::bare("BR002"),
    Entry::bare("BR003"),
    Entry::bare("BR004"),
    Entry::bare("BR005"),
    Entry::bare("BR006"),
    Entry::bare("BR007"),
    Entry::bare("BR008"),
    Entry::bare("BR009"),
    Entry::bare("BR010"),
    Entry::bare("BR011"),
    Entry::bare("BR012"),
    Entry::bare("BR013"),
    Entry::bare("BR014"),
    Entry::bare("BR015"),
    Entry::bare("BR016"),
];

/// Definition set for every table of CDMI v1.0.2.
pub fn cdmi_v1_0_2() -> DefinitionSet {
    let mut set = DefinitionSet::new();
    for id in TableId::ALL {
        set.push(TableDef::new(id, entries_for(id)));
    }
    set
}

fn entries_for(id: TableId) -> &'static [Entry] {
    match id {
        TableId::ContainerCapability => capability::CONTAINER,
        TableId::DataObjectCapability => capability::DATA_OBJECT,
        TableId::DataSystemCapability => capability::DATA_SYSTEM,
        TableId::DomainCapability => capability::DOMAIN,
        TableId::QueueCapability => capability::QUEUE,
        TableId::SystemWideCapability => capability::SYSTEM_WIDE,
        TableId::CdmiCapability => capability::MODEL,
        TableId::CdmiHeader => http::HEADERS,
        TableId::CdmiMediaType => http::MEDIA_TYPES,
        TableId::CdmiContentType => http::CONTENT_TYPES,
        TableId::JsonField => json::FIELDS,
        TableId::StorageSystemMetadata => metadata::STORAGE_SYSTEM,
        TableId::DataSystemMetadata => metadata::DATA_SYSTEM,
        TableId::LoggingQueueMetadata => metadata::LOGGING_QUEUE,
        TableId::StdErrorRef => STD_ERROR_REFS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_is_declared_once() {
        let set = cdmi_v1_0_2();
        assert_eq!(set.tables().len(), TableId::COUNT);
        for id in TableId::ALL {
            assert!(set.get(id).is_some(), "{id} missing");
        }
    }

    #[test]
    fn table_sizes_match_the_specification() {
        let expected = [
            (TableId::ContainerCapability, 29),
            (TableId::DataObjectCapability, 8),
            (TableId::DataSystemCapability, 16),
            (TableId::DomainCapability, 10),
            (TableId::QueueCapability, 9),
            (TableId::SystemWideCapability, 45),
            (TableId::CdmiCapability, 19),
            (TableId::CdmiHeader, 2),
            (TableId::CdmiMediaType, 5),
            (TableId::CdmiContentType, 5),
            (TableId::JsonField, 20),
            (TableId::StorageSystemMetadata, 9),
            (TableId::DataSystemMetadata, 32),
            (TableId::LoggingQueueMetadata, 3),
            (TableId::StdErrorRef, 16),
        ];
        for (id, len) in expected {
            assert_eq!(entries_for(id).len(), len, "{id}");
        }
    }

    #[test]
    fn error_refs_are_sequential() {
        for (idx, entry) in STD_ERROR_REFS.iter().enumerate() {
            assert_eq!(entry.symbol, format!("BR{:03}", idx + 1));
        }
    }
}
