//! Equipment model

use serde::{Deserialize, Serialize};

use super::enums::EquipmentStatus;

/// Equipment catalog record
///
/// Treated as immutable for the duration of a reconciliation pass; the
/// catalog it belongs to is a read-only snapshot supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: i32,
    /// Equipment name / description
    pub name: String,
    /// Category (camera body, lens, lighting, audio, ...)
    pub category: Option<String>,
    /// Total number of physical units owned
    pub total_quantity: i32,
    pub status: EquipmentStatus,
}

impl EquipmentItem {
    /// Whether the item is eligible for new bookings at all.
    ///
    /// Maintenance and decommissioned items are excluded from bundle
    /// allocation and from "available to book" listings before any
    /// quantity arithmetic happens.
    pub fn is_bookable(&self) -> bool {
        self.status == EquipmentStatus::Available
    }
}
