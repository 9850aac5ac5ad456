//! Checkout planning
//!
//! Turns a raw checkout request into persistable booking drafts: request
//! validation, date normalization, availability re-validation against
//! the supplied snapshot, and splitting into one draft per contiguous
//! date run. The storage layer calls [`plan_checkout`] again inside its
//! insert transaction so the availability check holds at write time,
//! not only at the moment the client rendered its availability hint.

use serde::Deserialize;
use validator::Validate;

use crate::{
    availability::available_units,
    dates::{group_contiguous_dates, normalize_dates},
    error::{AppError, AppResult},
    models::{Booking, BookingDraft, EquipmentItem, Shift},
};

/// Checkout request as received from the client
///
/// Dates arrive as raw strings in either accepted format and are
/// normalized during planning.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckoutRequest {
    pub equipment_id: i32,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
    #[validate(length(min = 1, message = "at least one date is required"))]
    pub dates: Vec<String>,
    pub shift: Shift,
}

/// Plan a checkout against a snapshot of the catalog and booking list.
///
/// Returns one [`BookingDraft`] per contiguous run of the requested
/// dates, or the first rule violation encountered. Pure: persisting the
/// drafts (and doing so atomically) is the caller's job.
pub fn plan_checkout(
    request: &CheckoutRequest,
    catalog: &[EquipmentItem],
    bookings: &[Booking],
) -> AppResult<Vec<BookingDraft>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let item = catalog
        .iter()
        .find(|e| e.id == request.equipment_id)
        .ok_or_else(|| {
            AppError::NotFound(format!("Equipment with id {} not found", request.equipment_id))
        })?;

    if !item.is_bookable() {
        return Err(AppError::BusinessRule(format!(
            "{} is not available for booking ({})",
            item.name, item.status
        )));
    }

    let dates = normalize_dates(&request.dates);
    if dates.is_empty() {
        return Err(AppError::Validation(
            "no valid dates in request".to_string(),
        ));
    }

    let available = available_units(item, bookings, &dates, request.shift);
    if request.quantity > available {
        return Err(AppError::BusinessRule(format!(
            "Only {} of {} unit(s) of {} available for the requested dates",
            available, request.quantity, item.name
        )));
    }

    let drafts: Vec<BookingDraft> = group_contiguous_dates(&dates)
        .into_iter()
        .map(|group| BookingDraft {
            equipment_id: item.id,
            quantity: request.quantity,
            shift: request.shift,
            start_date: group.start_date,
            end_date: group.end_date,
            dates: group.dates,
        })
        .collect();

    tracing::debug!(
        equipment_id = item.id,
        drafts = drafts.len(),
        "checkout planned"
    );

    Ok(drafts)
}
