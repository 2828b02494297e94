use crate::vocabulary::Entry;
use crate::wire;

// 8.2.4
pub(crate) const HEADERS: &[Entry] = &[
    Entry::new("X_CDMI_Specification_Version", wire::X_CDMI_SPECIFICATION_VERSION),
    Entry::new("X_CDMI_Partial", wire::X_CDMI_PARTIAL),
];

pub(crate) const MEDIA_TYPES: &[Entry] = &[
    Entry::new("Application_CdmiCapability", wire::APPLICATION_CDMI_CAPABILITY),
    Entry::new("Application_CdmiContainer", wire::APPLICATION_CDMI_CONTAINER),
    Entry::new("Application_CdmiDomain", wire::APPLICATION_CDMI_DOMAIN),
    Entry::new("Application_CdmiObject", wire::APPLICATION_CDMI_OBJECT),
    Entry::new("Application_CdmiQueue", wire::APPLICATION_CDMI_QUEUE),
];

// Mirrors MEDIA_TYPES entry for entry.
pub(crate) const CONTENT_TYPES: &[Entry] = &[
    Entry::new("Application_CdmiCapability", wire::APPLICATION_CDMI_CAPABILITY),
    Entry::new("Application_CdmiContainer", wire::APPLICATION_CDMI_CONTAINER),
    Entry::new("Application_CdmiDomain", wire::APPLICATION_CDMI_DOMAIN),
    Entry::new("Application_CdmiObject", wire::APPLICATION_CDMI_OBJECT),
    Entry::new("Application_CdmiQueue", wire::APPLICATION_CDMI_QUEUE),
];
