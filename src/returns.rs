//! Check-in state transitions and booking closure
//!
//! Each booking line moves `Active -> Returned` (optionally with a
//! damage report, which flags the equipment item for maintenance) or
//! `Active -> Cancelled`. A parent booking closes only once every line
//! has left `Active`, and that predicate is re-checked after every
//! individual transition rather than computed once per batch.
//!
//! Batch processing is all-or-nothing: any failure aborts with the
//! inputs untouched, so the caller either persists the returned
//! post-state in one transaction or persists nothing.

use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{Booking, BookingLine, BookingStatus, EquipmentItem, EquipmentStatus},
};

/// Damage reported at check-in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageReport {
    pub note: Option<String>,
}

/// One line return within a check-in batch
#[derive(Debug, Clone, Deserialize)]
pub struct ReturnRequest {
    pub line_id: i32,
    pub damage: Option<DamageReport>,
}

/// Result of one line transition
#[derive(Debug, Clone, Serialize)]
pub struct LineOutcome {
    pub line_id: i32,
    pub equipment_id: i32,
    /// The equipment item should move to maintenance status
    pub needs_maintenance: bool,
}

/// Post-state of a processed check-in batch
#[derive(Debug, Clone)]
pub struct ReturnBatchOutcome {
    /// All lines of the booking, with the batch's transitions applied
    pub lines: Vec<BookingLine>,
    /// Parent status after the batch (`Returned` once the last line closed)
    pub booking_status: BookingStatus,
    pub outcomes: Vec<LineOutcome>,
}

/// Whether every line has left `Active`, closing the parent booking.
pub fn booking_is_closed(lines: &[BookingLine]) -> bool {
    !lines.is_empty() && lines.iter().all(|l| l.status != BookingStatus::Active)
}

/// Transition one line `Active -> Returned`.
pub fn return_line(line: &mut BookingLine, damage: Option<&DamageReport>) -> AppResult<LineOutcome> {
    if line.status != BookingStatus::Active {
        return Err(AppError::BusinessRule(format!(
            "Booking line {} is already {}",
            line.id, line.status
        )));
    }

    line.status = BookingStatus::Returned;
    if let Some(report) = damage {
        line.damaged = true;
        line.damage_note = report.note.clone();
    }

    Ok(LineOutcome {
        line_id: line.id,
        equipment_id: line.equipment_id,
        needs_maintenance: line.damaged,
    })
}

/// Transition one line `Active -> Cancelled`.
pub fn cancel_line(line: &mut BookingLine) -> AppResult<()> {
    if line.status != BookingStatus::Active {
        return Err(AppError::BusinessRule(format!(
            "Booking line {} is already {}",
            line.id, line.status
        )));
    }
    line.status = BookingStatus::Cancelled;
    Ok(())
}

/// Process a batch of line returns for one booking, one line at a time.
///
/// Closure is re-evaluated after every transition. On any error (unknown
/// line, line belonging to another booking, double return) the whole
/// batch fails and `booking`/`lines` are left exactly as given.
pub fn process_return_batch(
    booking: &Booking,
    lines: &[BookingLine],
    requests: &[ReturnRequest],
) -> AppResult<ReturnBatchOutcome> {
    if booking.status != BookingStatus::Active {
        return Err(AppError::BusinessRule(format!(
            "Booking {} is already {}",
            booking.id, booking.status
        )));
    }

    let mut working = lines.to_vec();
    let mut outcomes = Vec::with_capacity(requests.len());
    let mut booking_status = booking.status;

    for request in requests {
        let line = working
            .iter_mut()
            .find(|l| l.id == request.line_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Booking line {} not found", request.line_id))
            })?;

        if line.booking_id != booking.id {
            return Err(AppError::Validation(format!(
                "Booking line {} does not belong to booking {}",
                request.line_id, booking.id
            )));
        }

        outcomes.push(return_line(line, request.damage.as_ref())?);

        // last line out of Active closes the booking
        if booking_is_closed(&working) {
            booking_status = BookingStatus::Returned;
        }
    }

    tracing::debug!(
        booking_id = booking.id,
        returned = outcomes.len(),
        closed = booking_status == BookingStatus::Returned,
        "return batch processed"
    );

    Ok(ReturnBatchOutcome {
        lines: working,
        booking_status,
        outcomes,
    })
}

/// Move damaged equipment to maintenance status per the batch outcomes.
pub fn apply_maintenance_flags(catalog: &mut [EquipmentItem], outcomes: &[LineOutcome]) {
    for outcome in outcomes.iter().filter(|o| o.needs_maintenance) {
        if let Some(item) = catalog.iter_mut().find(|e| e.id == outcome.equipment_id) {
            item.status = EquipmentStatus::Maintenance;
        }
    }
}
