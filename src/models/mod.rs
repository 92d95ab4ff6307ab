//! League scheduling domain models.
//!
//! Core data types for representing a season: the team roster, the
//! games themselves, the venue catalog, and the full schedule with its
//! swap primitives. Construction and optimization algorithms live in
//! [`crate::generator`] and [`crate::optimizer`]; these types carry no
//! algorithmic state of their own.

mod game;
mod roster;
mod schedule;
mod venue;

pub use game::Game;
pub use roster::Roster;
pub use schedule::Schedule;
pub use venue::{VenueCatalog, VenueSlot};
