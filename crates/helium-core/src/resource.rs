// Rust guideline compliant 2026-10-14

//! Resource kinds exposed by the Helium API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of API resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// A sensor device.
    Sensor,
    /// A gateway element.
    Element,
    /// A label grouping sensors.
    Label,
    /// A user account.
    User,
    /// An organization grouping users.
    Organization,
    /// A timeseries datapoint.
    Timeseries,
}

impl ResourceKind {
    /// All kinds, in display order.
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Sensor,
        ResourceKind::Element,
        ResourceKind::Label,
        ResourceKind::User,
        ResourceKind::Organization,
        ResourceKind::Timeseries,
    ];

    /// Returns the lowercase name, used for snapshot file stems and
    /// relationship names.
    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Sensor => "sensor",
            ResourceKind::Element => "element",
            ResourceKind::Label => "label",
            ResourceKind::User => "user",
            ResourceKind::Organization => "organization",
            ResourceKind::Timeseries => "timeseries",
        }
    }

    /// Returns the JSON:API `type` string.
    pub fn api_type(self) -> &'static str {
        match self {
            ResourceKind::Timeseries => "data-point",
            other => other.name(),
        }
    }

    /// Returns true if records of this kind carry a MAC address.
    pub fn has_mac(self) -> bool {
        matches!(self, ResourceKind::Sensor | ResourceKind::Element)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceKind {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.name() == value.to_lowercase())
            .ok_or_else(|| crate::Error::InvalidRecord(format!("unknown resource kind '{}'", value)))
    }
}
