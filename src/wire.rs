//! Wire-level literals that differ from their symbolic names.
//!
//! Server code names these constants instead of spelling the strings out; the
//! definitions in `crate::definitions` are declared from the same constants
//! so both always agree.

/// CDMI specification version implemented by this vocabulary.
pub const CDMI_SPECIFICATION_VERSION: &str = "1.0.2";

// 8.2.4
pub const X_CDMI_SPECIFICATION_VERSION: &str = "X-CDMI-Specification-Version";
pub const X_CDMI_PARTIAL: &str = "X-CDMI-Partial";

pub const APPLICATION_CDMI_CAPABILITY: &str = "application/cdmi-capability";
pub const APPLICATION_CDMI_CONTAINER: &str = "application/cdmi-container";
pub const APPLICATION_CDMI_DOMAIN: &str = "application/cdmi-domain";
pub const APPLICATION_CDMI_OBJECT: &str = "application/cdmi-object";
pub const APPLICATION_CDMI_QUEUE: &str = "application/cdmi-queue";
