//! Data models for booking reconciliation

pub mod booking;
pub mod bundle;
pub mod enums;
pub mod equipment;

// Re-export commonly used types
pub use booking::{Booking, BookingDraft, BookingLine};
pub use bundle::{Bundle, BundleLine, BundleReport, Cart};
pub use enums::{BookingStatus, EquipmentStatus, Shift};
pub use equipment::EquipmentItem;
