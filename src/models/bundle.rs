//! Bundle and cart models

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One equipment line within a bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleLine {
    pub equipment_id: i32,
    pub quantity: i32,
}

/// Named, fixed list of equipment items offered as a one-click
/// add-to-cart shortcut
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bundle {
    pub id: i32,
    pub name: String,
    pub lines: Vec<BundleLine>,
}

/// Checkout cart: selected equipment with quantities
///
/// Lines keep their insertion order; adding an item already present
/// merges into the existing line instead of appending a duplicate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: IndexMap<i32, i32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of an item, merging with any existing line.
    pub fn add(&mut self, equipment_id: i32, quantity: i32) {
        *self.lines.entry(equipment_id).or_insert(0) += quantity;
    }

    /// Quantity of an item currently in the cart (0 if absent).
    pub fn quantity_of(&self, equipment_id: i32) -> i32 {
        self.lines.get(&equipment_id).copied().unwrap_or(0)
    }

    /// Iterate over `(equipment_id, quantity)` lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.lines.iter().map(|(&id, &qty)| (id, qty))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Partial-success summary of a bundle allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleReport {
    /// Lines added to the cart at their full bundle quantity
    pub added_lines: usize,
    /// Lines excluded or only partially satisfied
    pub constrained_lines: usize,
}
