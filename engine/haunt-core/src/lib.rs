//! Concurrent ghost hunt simulation.
//!
//! A house is a fixed graph of rooms. One ghost wanders it dropping
//! evidence; up to four hunters wander it collecting the evidence their
//! equipment can detect into a shared pool. Every actor runs on its own OS
//! thread and all mutable state shared between threads sits behind a
//! [`lock::Domain`]. Any operation touching two domains acquires them via
//! [`lock::lock_pair`], which orders acquisition by lock id.

pub mod error;
pub mod events;
pub mod evidence;
pub mod ghost;
pub mod house;
pub mod hunt;
pub mod hunter;
pub mod lock;
pub mod room;
pub mod roster;
pub mod rules;

pub use error::{HauntError, Result};
pub use events::{
    EventSink, ExitReason, FanoutSink, HuntEvent, NullSink, RecordingSink, TracingSink,
};
pub use evidence::{EvidenceKind, EvidenceList, GhostClass, ParseEvidenceError, ParseGhostError};
pub use ghost::{Ghost, GhostAction, GhostOutcome};
pub use house::{House, HouseBuilder, STANDARD_CONNECTIONS, STANDARD_ROOMS};
pub use hunt::{Hunt, HuntReport};
pub use hunter::{Hunter, HunterAction, HunterOutcome};
pub use lock::{lock_pair, Domain, LockId};
pub use room::{HunterId, Room, RoomId, RoomState};
pub use roster::{HunterSpec, Roster, MAX_HUNTERS};
pub use rules::HuntRules;
