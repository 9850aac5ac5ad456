//! Booking model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{BookingStatus, Shift};
use crate::dates::deserialize_date_list;

/// Booking record
///
/// One equipment item reserved for a set of calendar dates under a shift.
/// Dates are not necessarily contiguous; a single user action that spans
/// disjoint runs is stored as several bookings, one per contiguous run
/// (see [`crate::dates::group_contiguous_dates`]).
///
/// Dates deserialize through the flexible parser so that records coming
/// from the older clients (which emit `dd/MM/yyyy`) normalize on ingest;
/// serialization is always ISO `yyyy-MM-dd`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i32,
    pub equipment_id: i32,
    pub quantity: i32,
    pub shift: Shift,
    #[serde(deserialize_with = "deserialize_date_list")]
    pub dates: Vec<NaiveDate>,
    pub status: BookingStatus,
}

impl Booking {
    /// Whether this booking still counts against availability.
    ///
    /// Returned and cancelled bookings release their units.
    pub fn counts_against_availability(&self) -> bool {
        self.status == BookingStatus::Active
    }

    /// Whether this booking occupies units on `date` against a request
    /// for `requested` shift.
    pub fn occupies(&self, date: NaiveDate, requested: Shift) -> bool {
        self.dates.contains(&date) && self.shift.blocks(requested)
    }
}

/// One equipment-item entry within a booking, individually returnable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingLine {
    pub id: i32,
    pub booking_id: i32,
    pub equipment_id: i32,
    pub quantity: i32,
    pub status: BookingStatus,
    /// Set when the line was returned with damage reported
    #[serde(default)]
    pub damaged: bool,
    pub damage_note: Option<String>,
}

/// Persistable booking record produced by checkout planning
///
/// One draft per contiguous date run of the request; `start_date` and
/// `end_date` bound exactly that run, never a false span across a gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    pub equipment_id: i32,
    pub quantity: i32,
    pub shift: Shift,
    pub dates: Vec<NaiveDate>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
