use crate::vocabulary::Entry;

pub(crate) const FIELDS: &[Entry] = &[
    // 8.2.5/Table 8
    Entry::bare("mimetype"),
    Entry::bare("metadata"),
    Entry::bare("domainURI"),
    Entry::bare("deserialize"),
    Entry::bare("serialize"),
    Entry::bare("copy"),
    Entry::bare("move"),
    Entry::bare("reference"),
    Entry::bare("deserializevalue"),
    Entry::bare("valuetransferencoding"),
    Entry::bare("value"),
    // 8.2.7/Table 10
    Entry::bare("objectType"),
    Entry::bare("objectID"),
    Entry::bare("objectName"),
    Entry::bare("parentURI"),
    Entry::bare("parentID"),
    Entry::bare("capabilitiesURI"),
    // One of "Processing", "Completed", "Error".
    Entry::bare("completionStatus"),
    Entry::bare("percentComplete"),
    // 8.4.6/Table 16
    Entry::bare("valuerange"),
];
