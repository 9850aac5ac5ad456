//! Kitbook - equipment availability and booking reconciliation
//!
//! Pure computation core for a camera/film equipment checkout system:
//! given a read-only snapshot of the equipment catalog and the booking
//! list, it answers how many units of an item remain free for a given
//! date/shift selection, splits multi-day requests into contiguous
//! booking records, allocates bundles into a cart on a best-effort
//! basis, and drives the check-in state machine.
//!
//! The crate performs no I/O and keeps no state between calls. The
//! authoritative records live in the embedding application's storage
//! layer, which is expected to re-run [`checkout::plan_checkout`]
//! inside its write transaction before committing a booking row.

pub mod availability;
pub mod bundles;
pub mod checkout;
pub mod dates;
pub mod error;
pub mod models;
pub mod returns;

pub use error::{AppError, AppResult};
