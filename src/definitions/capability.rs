//! Capability tables, one per resource kind, plus the server model's list.

use crate::vocabulary::Entry;

// CDMI/v1.0.2/12.1.5
pub(crate) const CONTAINER: &[Entry] = &[
    Entry::bare("cdmi_list_children"),
    Entry::bare("cdmi_list_children_range"),
    Entry::bare("cdmi_read_metadata"),
    Entry::bare("cdmi_modify_metadata"),
    Entry::bare("cdmi_modify_deserialize_container"),
    Entry::bare("cdmi_snapshot"),
    Entry::bare("cdmi_serialize_dataobject"),
    Entry::bare("cdmi_serialize_container"),
    Entry::bare("cdmi_serialize_queue"),
    Entry::bare("cdmi_serialize_domain"),
    Entry::bare("cdmi_deserialize_container"),
    Entry::bare("cdmi_deserialize_queue"),
    Entry::bare("cdmi_deserialize_dataobject"),
    Entry::bare("cdmi_create_dataobject"),
    Entry::bare("cdmi_post_dataobject"),
    Entry::bare("cdmi_post_queue"),
    Entry::bare("cdmi_create_container"),
    Entry::bare("cdmi_create_queue"),
    Entry::bare("cdmi_create_reference"),
    Entry::bare("cdmi_export_container_cifs"),
    Entry::bare("cdmi_export_container_nfs"),
    Entry::bare("cdmi_export_container_iscsi"),
    Entry::bare("cdmi_export_container_occi"),
    Entry::bare("cdmi_export_container_webdav"),
    Entry::bare("cdmi_delete_container"),
    Entry::bare("cdmi_move_container"),
    Entry::bare("cdmi_copy_container"),
    Entry::bare("cdmi_move_dataobject"),
    Entry::bare("cdmi_copy_dataobject"),
];

// CDMI/v1.0.2/12.1.4
pub(crate) const DATA_OBJECT: &[Entry] = &[
    Entry::bare("cdmi_read_value"),
    Entry::bare("cdmi_read_value_range"),
    Entry::bare("cdmi_read_metadata"),
    Entry::bare("cdmi_modify_value"),
    Entry::bare("cdmi_modify_value_range"),
    Entry::bare("cdmi_modify_metadata"),
    Entry::bare("cdmi_modify_deserialize_dataobject"),
    Entry::bare("cdmi_delete_dataobject"),
];

// CDMI/v1.0.2/12.1.3
pub(crate) const DATA_SYSTEM: &[Entry] = &[
    Entry::bare("cdmi_assignedsize"),
    Entry::bare("cdmi_data_redundancy"),
    Entry::bare("cdmi_data_dispersion"),
    Entry::bare("cdmi_data_retention"),
    Entry::bare("cdmi_data_autodelete"),
    Entry::bare("cdmi_data_holds"),
    Entry::bare("cdmi_encryption"),
    Entry::bare("cdmi_geographic_placement"),
    Entry::bare("cdmi_immediate_redundancy"),
    Entry::bare("cdmi_infrastructure_redundancy"),
    Entry::bare("cdmi_latency"),
    Entry::bare("cdmi_RPO"),
    Entry::bare("cdmi_RTO"),
    Entry::bare("cdmi_sanitization_method"),
    Entry::bare("cdmi_throughput"),
    Entry::bare("cdmi_value_hash"),
];

// CDMI/v1.0.2/12.1.6
pub(crate) const DOMAIN: &[Entry] = &[
    Entry::bare("cdmi_create_domain"),
    Entry::bare("cdmi_delete_domain"),
    Entry::bare("cdmi_domain_summary"),
    Entry::bare("cdmi_domain_members"),
    Entry::bare("cdmi_list_children"),
    Entry::bare("cdmi_read_metadata"),
    Entry::bare("cdmi_modify_metadata"),
    Entry::bare("cdmi_modify_deserialize_domain"),
    Entry::bare("cdmi_copy_domain"),
    Entry::bare("cdmi_deserialize_domain"),
];

// CDMI/v1.0.2/12.1.7
pub(crate) const QUEUE: &[Entry] = &[
    Entry::bare("cdmi_read_value"),
    Entry::bare("cdmi_read_metadata"),
    Entry::bare("cdmi_modify_value"),
    Entry::bare("cdmi_modify_metadata"),
    Entry::bare("cdmi_modify_deserialize_queue"),
    Entry::bare("cdmi_delete_queue"),
    Entry::bare("cdmi_move_queue"),
    Entry::bare("cdmi_copy_queue"),
    Entry::bare("cdmi_reference_queue"),
];

// CDMI/v1.0.2/12.1.1
pub(crate) const SYSTEM_WIDE: &[Entry] = &[
    Entry::bare("cdmi_domains"),
    Entry::bare("cdmi_export_cifs"),
    Entry::bare("cdmi_dataobjects"),
    Entry::bare("cdmi_export_iscsi"),
    Entry::bare("cdmi_export_nfs"),
    Entry::bare("cdmi_export_occi_iscsi"),
    Entry::bare("cdmi_export_webdav"),
    Entry::bare("cdmi_metadata_maxitems"),
    Entry::bare("cdmi_metadata_maxsize"),
    Entry::bare("cdmi_metadata_maxtotalsize"),
    Entry::bare("cdmi_notification"),
    Entry::bare("cdmi_logging"),
    Entry::bare("cdmi_query"),
    Entry::bare("cdmi_query_regex"),
    Entry::bare("cdmi_query_contains"),
    Entry::bare("cdmi_query_tags"),
    Entry::bare("cdmi_query_value"),
    Entry::bare("cdmi_queues"),
    Entry::bare("cdmi_security_access_control"),
    Entry::bare("cdmi_security_audit"),
    Entry::bare("cdmi_security_data_integrity"),
    Entry::bare("cdmi_security_encryption"),
    Entry::bare("cdmi_security_immutability"),
    Entry::bare("cdmi_security_sanitization"),
    Entry::bare("cdmi_serialization_json"),
    Entry::bare("cdmi_snapshots"),
    Entry::bare("cdmi_references"),
    Entry::bare("cdmi_object_move_from_local"),
    Entry::bare("cdmi_object_move_from_remote"),
    Entry::bare("cdmi_object_move_from_ID"),
    Entry::bare("cdmi_object_move_to_ID"),
    Entry::bare("cdmi_object_copy_from_local"),
    Entry::bare("cdmi_object_copy_from_remote"),
    Entry::bare("cdmi_object_access_by_ID"),
    Entry::bare("cdmi_post_dataobject_by_ID"),
    Entry::bare("cdmi_post_queue_by_ID"),
    Entry::bare("cdmi_deserialize_dataobject_by_ID"),
    Entry::bare("cdmi_deserialize_queue_by_ID"),
    Entry::bare("cdmi_serialize_dataobject_to_ID"),
    Entry::bare("cdmi_serialize_domain_to_ID"),
    Entry::bare("cdmi_serialize_container_to_ID"),
    Entry::bare("cdmi_serialize_queue_to_ID"),
    Entry::bare("cdmi_copy_dataobject_by_ID"),
    Entry::bare("cdmi_copy_queue_by_ID"),
    Entry::bare("cdmi_create_reference_by_ID"),
];

/// Capabilities the server model knows about, regardless of resource kind.
// 8.2.3
pub(crate) const MODEL: &[Entry] = &[
    Entry::bare("cdmi_create_dataobject"),
    Entry::bare("cdmi_create_reference"),
    Entry::bare("cdmi_copy_dataobject"),
    Entry::bare("cdmi_move_dataobject"),
    Entry::bare("cdmi_deserialize_dataobject"),
    Entry::bare("cdmi_serialize_dataobject"),
    Entry::bare("cdmi_serialize_container"),
    Entry::bare("cdmi_serialize_domain"),
    Entry::bare("cdmi_serialize_queue"),
    Entry::bare("cdmi_metadata_maxitems"),
    Entry::bare("cdmi_metadata_maxsize"),
    Entry::bare("cdmi_domains"),
    Entry::bare("cdmi_queues"),
    Entry::bare("cdmi_notifications"),
    Entry::bare("cdmi_list_children"),
    Entry::bare("cdmi_read_metadata"),
    Entry::bare("cdmi_modify_metadata"),
    Entry::bare("cdmi_create_container"),
    Entry::bare("cdmi_delete_container"),
];
