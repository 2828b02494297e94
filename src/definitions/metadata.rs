use crate::vocabulary::Entry;

// CDMI/v1.0.2/16.3
pub(crate) const STORAGE_SYSTEM: &[Entry] = &[
    Entry::bare("cdmi_size"),
    Entry::bare("cdmi_ctime"),
    Entry::bare("cdmi_atime"),
    Entry::bare("cdmi_mtime"),
    Entry::bare("cdmi_acount"),
    Entry::bare("cdmi_mcount"),
    Entry::bare("cdmi_hash"),
    Entry::bare("cdmi_owner"),
    Entry::bare("cdmi_acl"),
];

pub(crate) const DATA_SYSTEM: &[Entry] = &[
    // CDMI/v1.0.2/16.4
    Entry::bare("cdmi_data_redundancy"),
    Entry::bare("cdmi_immediate_redundancy"),
    Entry::bare("cdmi_assignedsize"),
    Entry::bare("cdmi_infrastructure_redundancy"),
    Entry::bare("cdmi_data_dispersion"),
    Entry::bare("cdmi_geographic_placement"),
    Entry::bare("cdmi_retention_id"),
    Entry::bare("cdmi_retention_period"),
    Entry::bare("cdmi_retention_autodelete"),
    Entry::bare("cdmi_hold_id"),
    Entry::bare("cdmi_encryption"),
    Entry::bare("cdmi_value_hash"),
    Entry::bare("cdmi_latency"),
    Entry::bare("cdmi_throughput"),
    Entry::bare("cdmi_sanitization_method"),
    Entry::bare("cdmi_RPO"),
    Entry::bare("cdmi_RTO"),
    // CDMI/v1.0.2/16.5
    Entry::bare("cdmi_data_redundancy_provided"),
    Entry::bare("cdmi_immediate_redundancy_provided"),
    Entry::bare("cdmi_infrastructure_redundancy_provided"),
    Entry::bare("cdmi_data_dispersion_provided"),
    Entry::bare("cdmi_geographic_placement_provided"),
    Entry::bare("cdmi_retention_period_provided"),
    Entry::bare("cdmi_retention_autodelete_provided"),
    Entry::bare("cdmi_hold_id_provided"),
    Entry::bare("cdmi_encryption_provided"),
    Entry::bare("cdmi_value_hash_provided"),
    Entry::bare("cdmi_latency_provided"),
    Entry::bare("cdmi_throughput_provided"),
    Entry::bare("cdmi_sanitization_method_provided"),
    Entry::bare("cdmi_RPO_provided"),
    Entry::bare("cdmi_RTO_provided"),
];

// CDMI/v1.0.2/20.5
pub(crate) const LOGGING_QUEUE: &[Entry] = &[
    Entry::bare("cdmi_queue_type"),
    Entry::bare("cdmi_logging_class"),
    Entry::bare("cdmi_scope_specification"),
];
