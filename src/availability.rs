//! Equipment availability calculation
//!
//! Answers "how many units of this item remain free for these dates and
//! this shift" against a read-only snapshot of the booking list. The
//! calculator is advisory: the no-oversell invariant is ultimately
//! enforced where booking rows are committed, by re-running this
//! computation inside the storage layer's write transaction.

use chrono::NaiveDate;

use crate::models::{Booking, EquipmentItem, Shift};

/// Availability lookup, constructed per query
#[derive(Debug, Clone)]
pub struct AvailabilityQuery {
    pub equipment_id: i32,
    /// Candidate dates; empty means "no date context, check aggregate"
    pub dates: Vec<NaiveDate>,
    pub shift: Shift,
}

impl AvailabilityQuery {
    pub fn evaluate(&self, item: &EquipmentItem, bookings: &[Booking]) -> i32 {
        debug_assert_eq!(item.id, self.equipment_id);
        available_units(item, bookings, &self.dates, self.shift)
    }
}

/// Units of an item already committed on `date` for `shift`.
///
/// Sums quantities across active bookings whose date list contains the
/// date and whose shift blocks the requested one (a full-day booking
/// blocks everything; AM and PM only block themselves and full-day
/// requests).
pub fn committed_units(
    bookings: &[Booking],
    equipment_id: i32,
    date: NaiveDate,
    shift: Shift,
) -> i32 {
    bookings
        .iter()
        .filter(|b| b.equipment_id == equipment_id && b.counts_against_availability())
        .filter(|b| b.occupies(date, shift))
        .map(|b| b.quantity)
        .sum()
}

/// Units of `item` still free for the requested dates and shift.
///
/// With no date context, every live booking for the item counts,
/// regardless of date or shift - the conservative fallback. Otherwise
/// the commitment is the **maximum** across the requested dates, not
/// the sum: a multi-day request is only as available as its most
/// constrained day.
///
/// Never negative; invalid inputs are the caller's precondition and the
/// result is a lower bound, not an error.
pub fn available_units(
    item: &EquipmentItem,
    bookings: &[Booking],
    dates: &[NaiveDate],
    shift: Shift,
) -> i32 {
    let committed = if dates.is_empty() {
        bookings
            .iter()
            .filter(|b| b.equipment_id == item.id && b.counts_against_availability())
            .map(|b| b.quantity)
            .sum()
    } else {
        dates
            .iter()
            .map(|&date| committed_units(bookings, item.id, date, shift))
            .max()
            .unwrap_or(0)
    };

    (item.total_quantity - committed).max(0)
}
