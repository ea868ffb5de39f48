//! Stored exhibits as served by the marketplace API.

use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use virtual_exhibit_allocation_engine::{
    EnvironmentId, ExhibitKind, Participant, SlotArtworkMap, SlotOwnerMap,
};

/// Lifecycle state of a stored exhibit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitStatus {
    Pending,
    Ready,
    Monitoring,
    Review,
    Preview,
}

impl ExhibitStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ready => "ready",
            Self::Monitoring => "monitoring",
            Self::Review => "review",
            Self::Preview => "preview",
        }
    }
}

impl fmt::Display for ExhibitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a stored exhibit is opened in the builder. The spectator modes force
/// the builder into read-only state on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    Edit,
    Review,
    Monitoring,
    Preview,
}

/// An exhibit as stored upstream. Field names follow the wire format, ids
/// arrive as JSON numbers or strings interchangeably, and the slot maps use
/// stringified slot indices as object keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitRecord {
    pub title: String,
    pub category: String,
    pub artwork_style: String,
    pub exhibit_type: ExhibitKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_environment: Option<EnvironmentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
    #[serde(default)]
    pub collaborators: Vec<Participant>,
    #[serde(default)]
    pub slot_owner_map: SlotOwnerMap,
    #[serde(default)]
    pub slot_artwork_map: SlotArtworkMap,
    pub status: ExhibitStatus,
}
