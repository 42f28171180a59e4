//! Rooms: named vertices of the house graph.
//!
//! A room's mutable contents (dropped evidence, hunters present, ghost
//! slot) live together in one [`Domain`], so reading or writing any of them
//! requires the room lock. Name and adjacency are fixed once the house is
//! built and are read without locking.

use std::fmt;

use serde::Serialize;

use crate::evidence::{EvidenceList, GhostClass};
use crate::lock::Domain;

/// Index of a room inside its [`House`](crate::house::House).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RoomId(pub(crate) usize);

impl RoomId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room-{}", self.0)
    }
}

/// Identity of a hunter, unique within one hunt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HunterId(pub u32);

impl fmt::Display for HunterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hunter-{}", self.0)
    }
}

/// Everything in a room that actors mutate. Only reachable through the
/// room lock.
#[derive(Debug, Default)]
pub struct RoomState {
    /// Evidence lying in the room.
    pub evidence: EvidenceList,
    hunters: Vec<HunterId>,
    ghost: Option<GhostClass>,
}

impl RoomState {
    pub fn hunters(&self) -> &[HunterId] {
        &self.hunters
    }

    pub fn has_hunters(&self) -> bool {
        !self.hunters.is_empty()
    }

    pub fn contains_hunter(&self, id: HunterId) -> bool {
        self.hunters.contains(&id)
    }

    /// Record a hunter as present. Adding the same hunter twice is a no-op.
    pub fn add_hunter(&mut self, id: HunterId) {
        if !self.hunters.contains(&id) {
            self.hunters.push(id);
        }
    }

    /// Detach a hunter from the presence set. Returns whether it was present.
    pub fn remove_hunter(&mut self, id: HunterId) -> bool {
        match self.hunters.iter().position(|h| *h == id) {
            Some(position) => {
                self.hunters.remove(position);
                true
            }
            None => false,
        }
    }

    pub fn ghost(&self) -> Option<GhostClass> {
        self.ghost
    }

    pub fn has_ghost(&self) -> bool {
        self.ghost.is_some()
    }

    pub fn set_ghost(&mut self, ghost: GhostClass) {
        self.ghost = Some(ghost);
    }

    pub fn clear_ghost(&mut self) -> Option<GhostClass> {
        self.ghost.take()
    }
}

/// A vertex of the house graph.
#[derive(Debug)]
pub struct Room {
    id: RoomId,
    name: String,
    pub(crate) neighbors: Vec<RoomId>,
    state: Domain<RoomState>,
}

impl Room {
    pub(crate) fn new(id: RoomId, name: String) -> Self {
        let state = Domain::new(name.clone(), RoomState::default());
        Self {
            id,
            name,
            neighbors: Vec::new(),
            state,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn neighbors(&self) -> &[RoomId] {
        &self.neighbors
    }

    pub fn is_connected_to(&self, other: RoomId) -> bool {
        self.neighbors.contains(&other)
    }

    /// The lock domain guarding this room's contents.
    pub fn state(&self) -> &Domain<RoomState> {
        &self.state
    }
}
