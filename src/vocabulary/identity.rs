use crate::error::LookupError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Resource kind a capability table applies to.
///
/// Each kind owns exactly one capability table; see [`CapabilityKind::table`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKind {
    Container,
    DataObject,
    DataSystem,
    Domain,
    Queue,
    SystemWide,
}

impl CapabilityKind {
    pub const ALL: [CapabilityKind; 6] = [
        CapabilityKind::Container,
        CapabilityKind::DataObject,
        CapabilityKind::DataSystem,
        CapabilityKind::Domain,
        CapabilityKind::Queue,
        CapabilityKind::SystemWide,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CapabilityKind::Container => "container",
            CapabilityKind::DataObject => "data_object",
            CapabilityKind::DataSystem => "data_system",
            CapabilityKind::Domain => "domain",
            CapabilityKind::Queue => "queue",
            CapabilityKind::SystemWide => "system_wide",
        }
    }

    /// The capability table owned by this kind.
    pub fn table(self) -> TableId {
        match self {
            CapabilityKind::Container => TableId::ContainerCapability,
            CapabilityKind::DataObject => TableId::DataObjectCapability,
            CapabilityKind::DataSystem => TableId::DataSystemCapability,
            CapabilityKind::Domain => TableId::DomainCapability,
            CapabilityKind::Queue => TableId::QueueCapability,
            CapabilityKind::SystemWide => TableId::SystemWideCapability,
        }
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CapabilityKind {
    type Err = LookupError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CapabilityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| LookupError::UnknownKind {
                kind: value.to_string(),
            })
    }
}

/// Name of one vocabulary table.
///
/// The variant order is the order tables are stored and reported in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum TableId {
    ContainerCapability,
    DataObjectCapability,
    DataSystemCapability,
    DomainCapability,
    QueueCapability,
    SystemWideCapability,
    CdmiCapability,
    CdmiHeader,
    CdmiMediaType,
    CdmiContentType,
    JsonField,
    StorageSystemMetadata,
    DataSystemMetadata,
    LoggingQueueMetadata,
    StdErrorRef,
}

impl TableId {
    pub const COUNT: usize = 15;

    pub const ALL: [TableId; TableId::COUNT] = [
        TableId::ContainerCapability,
        TableId::DataObjectCapability,
        TableId::DataSystemCapability,
        TableId::DomainCapability,
        TableId::QueueCapability,
        TableId::SystemWideCapability,
        TableId::CdmiCapability,
        TableId::CdmiHeader,
        TableId::CdmiMediaType,
        TableId::CdmiContentType,
        TableId::JsonField,
        TableId::StorageSystemMetadata,
        TableId::DataSystemMetadata,
        TableId::LoggingQueueMetadata,
        TableId::StdErrorRef,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TableId::ContainerCapability => "ContainerCapability",
            TableId::DataObjectCapability => "DataObjectCapability",
            TableId::DataSystemCapability => "DataSystemCapability",
            TableId::DomainCapability => "DomainCapability",
            TableId::QueueCapability => "QueueCapability",
            TableId::SystemWideCapability => "SystemWideCapability",
            TableId::CdmiCapability => "CdmiCapability",
            TableId::CdmiHeader => "CdmiHeader",
            TableId::CdmiMediaType => "CdmiMediaType",
            TableId::CdmiContentType => "CdmiContentType",
            TableId::JsonField => "JsonField",
            TableId::StorageSystemMetadata => "StorageSystemMetadata",
            TableId::DataSystemMetadata => "DataSystemMetadata",
            TableId::LoggingQueueMetadata => "LoggingQueueMetadata",
            TableId::StdErrorRef => "StdErrorRef",
        }
    }

    /// Position of this table in [`TableId::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Resource kind owning this table, for per-kind capability tables only.
    pub fn kind(self) -> Option<CapabilityKind> {
        CapabilityKind::ALL
            .into_iter()
            .find(|kind| kind.table() == self)
    }

    /// True for tables whose wire value is, by definition, the symbolic name.
    pub fn wire_equals_symbol(self) -> bool {
        !matches!(
            self,
            TableId::CdmiHeader | TableId::CdmiMediaType | TableId::CdmiContentType
        )
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableId {
    type Err = LookupError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TableId::ALL
            .into_iter()
            .find(|table| table.as_str() == value)
            .ok_or_else(|| LookupError::UnknownTable {
                table: value.to_string(),
            })
    }
}

impl Serialize for TableId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TableId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
