//! Venue catalog: fields and time slots.
//!
//! A round's games are played simultaneously across a fixed set of
//! fields and start times. One (field, time slot) pair hosts exactly
//! one game per round, so the catalog's field × time-slot product must
//! equal the round size N/2.

use serde::{Deserialize, Serialize};

/// A concrete (field, time slot) pair hosting one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSlot {
    /// Field identifier (e.g., "Field 1").
    pub field: String,
    /// Start-time identifier (e.g., "9:00 AM").
    pub time_slot: String,
}

impl VenueSlot {
    /// Creates a venue slot.
    pub fn new(field: impl Into<String>, time_slot: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            time_slot: time_slot.into(),
        }
    }
}

/// The fixed field and time-slot lists for a season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueCatalog {
    /// Field identifiers, in fixed order.
    pub fields: Vec<String>,
    /// Time-slot identifiers, in fixed order.
    pub time_slots: Vec<String>,
}

impl VenueCatalog {
    /// Creates a catalog from field and time-slot lists.
    pub fn new(fields: Vec<String>, time_slots: Vec<String>) -> Self {
        Self { fields, time_slots }
    }

    /// Number of simultaneous games the catalog supports.
    pub fn slot_count(&self) -> usize {
        self.fields.len() * self.time_slots.len()
    }

    /// Enumerates all slots in deterministic order: time slots
    /// outermost, fields in catalog order within each time slot.
    ///
    /// Greedy assignment breaks cost ties by this order.
    pub fn slots(&self) -> Vec<VenueSlot> {
        let mut slots = Vec::with_capacity(self.slot_count());
        for time_slot in &self.time_slots {
            for field in &self.fields {
                slots.push(VenueSlot::new(field, time_slot));
            }
        }
        slots
    }
}
