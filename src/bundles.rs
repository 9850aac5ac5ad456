//! Best-effort bundle allocation
//!
//! A bundle is a one-click shortcut that adds a fixed list of equipment
//! to the cart. Allocation is never all-or-nothing: every line that can
//! be satisfied (fully or partially) goes in, and the report counts how
//! many lines hit a constraint.

use chrono::NaiveDate;

use crate::{
    availability::available_units,
    models::{Booking, Bundle, BundleReport, Cart, EquipmentItem, Shift},
};

/// Add as much of `bundle` to `cart` as availability allows.
///
/// Per line: unknown items and items under maintenance or
/// decommissioned are excluded entirely; otherwise the addable quantity
/// is capped by the item's availability for the current date/shift
/// selection minus whatever the cart already holds. A line counts as
/// added only when its full bundle quantity made it in.
pub fn apply_bundle(
    bundle: &Bundle,
    cart: &mut Cart,
    catalog: &[EquipmentItem],
    bookings: &[Booking],
    dates: &[NaiveDate],
    shift: Shift,
) -> BundleReport {
    let mut added_lines = 0;
    let mut constrained_lines = 0;

    for line in &bundle.lines {
        let item = match catalog.iter().find(|e| e.id == line.equipment_id) {
            Some(item) => item,
            None => {
                tracing::debug!(
                    bundle = %bundle.name,
                    equipment_id = line.equipment_id,
                    "bundle line references unknown equipment"
                );
                constrained_lines += 1;
                continue;
            }
        };

        if !item.is_bookable() {
            tracing::debug!(
                bundle = %bundle.name,
                equipment = %item.name,
                status = %item.status,
                "bundle line excluded by equipment status"
            );
            constrained_lines += 1;
            continue;
        }

        let in_cart = cart.quantity_of(item.id);
        let remaining = (available_units(item, bookings, dates, shift) - in_cart).max(0);
        let take = line.quantity.min(remaining);

        if take > 0 {
            cart.add(item.id, take);
        }

        if take == line.quantity {
            added_lines += 1;
        } else {
            constrained_lines += 1;
        }
    }

    BundleReport {
        added_lines,
        constrained_lines,
    }
}
