//! Broad-phase collision detection.
//!
//! The broad phase maintains one coarse spatial partition for static colliders and
//! one for moving colliders, and enumerates the small set of collider pairs that are
//! candidates for exact narrow-phase testing.
//!
//! Everything here is single-threaded and synchronous: there is no internal locking,
//! and the caller must hold exclusive access to a group for the whole duration of any
//! mutating or querying call.

pub use self::broad_phase::{BroadPhase, Mobility};
pub use self::coarse_group::CoarseGroup;
pub use self::error::BroadPhaseError;
pub use self::potential_contact::{PotentialContact, PotentialContactSink};

mod broad_phase;
mod coarse_group;
mod error;
mod potential_contact;
