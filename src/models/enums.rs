//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Shift
// ---------------------------------------------------------------------------

/// Sub-day time partition for equipment use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    FullDay,
    Am,
    Pm,
}

impl Shift {
    /// Whether an existing booking on this shift occupies units against a
    /// request for `requested` on the same date.
    ///
    /// A full-day booking blocks everything that day; an AM booking does
    /// not block a PM request but does block another AM or a full-day
    /// request (and symmetrically for PM).
    pub fn blocks(self, requested: Shift) -> bool {
        requested == Shift::FullDay || self == Shift::FullDay || self == requested
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Shift::FullDay => "Full Day",
            Shift::Am => "AM",
            Shift::Pm => "PM",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for Shift {
    type Err = String;

    /// Accepts the spellings seen across the upstream clients.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full day" | "full_day" | "fullday" => Ok(Shift::FullDay),
            "am" => Ok(Shift::Am),
            "pm" => Ok(Shift::Pm),
            other => Err(format!("unknown shift: {}", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// BookingStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a booking or of one of its lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Active,
    Returned,
    Cancelled,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookingStatus::Active => "active",
            BookingStatus::Returned => "returned",
            BookingStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Equipment status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Available,
    Maintenance,
    Decommissioned,
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentStatus::Available => "available",
            EquipmentStatus::Maintenance => "maintenance",
            EquipmentStatus::Decommissioned => "decommissioned",
        };
        write!(f, "{}", label)
    }
}
