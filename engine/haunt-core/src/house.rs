//! The house: a fixed graph of rooms plus the hunters' shared evidence pool.
//!
//! Topology is built once by [`HouseBuilder`] and never changes afterwards.
//! The graph itself carries no lock; only individual rooms and the shared
//! evidence pool do.

use std::collections::HashMap;

use rand::Rng;
use tracing::debug;

use crate::error::{HauntError, Result};
use crate::evidence::EvidenceList;
use crate::lock::Domain;
use crate::room::{Room, RoomId};

/// Room names of the standard house, entry room first.
pub const STANDARD_ROOMS: [&str; 13] = [
    "Van",
    "Hallway",
    "Master Bedroom",
    "Boy's Bedroom",
    "Bathroom",
    "Basement",
    "Basement Hallway",
    "Right Storage Room",
    "Left Storage Room",
    "Kitchen",
    "Living Room",
    "Garage",
    "Utility Room",
];

/// Undirected connections of the standard house.
pub const STANDARD_CONNECTIONS: [(&str, &str); 12] = [
    ("Van", "Hallway"),
    ("Hallway", "Master Bedroom"),
    ("Hallway", "Boy's Bedroom"),
    ("Hallway", "Bathroom"),
    ("Hallway", "Kitchen"),
    ("Hallway", "Basement"),
    ("Basement", "Basement Hallway"),
    ("Basement Hallway", "Right Storage Room"),
    ("Basement Hallway", "Left Storage Room"),
    ("Kitchen", "Living Room"),
    ("Kitchen", "Garage"),
    ("Garage", "Utility Room"),
];

/// Incrementally assembles a house. The first room added is the entry room.
#[derive(Debug, Default)]
pub struct HouseBuilder {
    rooms: Vec<Room>,
    by_name: HashMap<String, RoomId>,
}

impl HouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_room(&mut self, name: impl Into<String>) -> Result<RoomId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(HauntError::DuplicateRoom(name));
        }
        let id = RoomId(self.rooms.len());
        self.by_name.insert(name.clone(), id);
        self.rooms.push(Room::new(id, name));
        Ok(id)
    }

    /// Connect two rooms in both directions.
    pub fn connect(&mut self, a: RoomId, b: RoomId) -> Result<()> {
        if a == b {
            return Err(HauntError::SelfLoop(self.name_of(a)?.to_string()));
        }
        self.name_of(a)?;
        self.name_of(b)?;

        let from = &mut self.rooms[a.0];
        if !from.neighbors.contains(&b) {
            from.neighbors.push(b);
        }
        let to = &mut self.rooms[b.0];
        if !to.neighbors.contains(&a) {
            to.neighbors.push(a);
        }
        Ok(())
    }

    pub fn connect_names(&mut self, a: &str, b: &str) -> Result<()> {
        let a = self.lookup(a)?;
        let b = self.lookup(b)?;
        self.connect(a, b)
    }

    pub fn build(self) -> Result<House> {
        if self.rooms.is_empty() {
            return Err(HauntError::EmptyHouse);
        }
        if let Some(isolated) = self.rooms.iter().find(|r| r.neighbors.is_empty()) {
            return Err(HauntError::IsolatedRoom(isolated.name().to_string()));
        }

        debug!(rooms = self.rooms.len(), "House built");
        Ok(House {
            rooms: self.rooms,
            by_name: self.by_name,
            entry: RoomId(0),
            evidence: Domain::new("shared evidence", EvidenceList::new()),
        })
    }

    fn lookup(&self, name: &str) -> Result<RoomId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| HauntError::UnknownRoom(name.to_string()))
    }

    fn name_of(&self, id: RoomId) -> Result<&str> {
        self.rooms
            .get(id.0)
            .map(Room::name)
            .ok_or_else(|| HauntError::UnknownRoom(id.to_string()))
    }
}

/// The room graph and the hunters' shared evidence pool.
#[derive(Debug)]
pub struct House {
    rooms: Vec<Room>,
    by_name: HashMap<String, RoomId>,
    entry: RoomId,
    evidence: Domain<EvidenceList>,
}

impl House {
    /// Build the standard 13-room house with the Van as entry room.
    pub fn build() -> Result<Self> {
        let mut builder = HouseBuilder::new();
        for name in STANDARD_ROOMS {
            builder.add_room(name)?;
        }
        for (a, b) in STANDARD_CONNECTIONS {
            builder.connect_names(a, b)?;
        }
        builder.build()
    }

    pub fn entry(&self) -> RoomId {
        self.entry
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Look up a room by id.
    ///
    /// Ids are only minted by the builder of this house, so an id from the
    /// same house is always in range.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.by_name.get(name).map(|id| self.room(*id))
    }

    /// The evidence pool shared by all hunters.
    pub fn evidence(&self) -> &Domain<EvidenceList> {
        &self.evidence
    }

    /// Pick a connected room uniformly.
    pub fn random_neighbor<R: Rng + ?Sized>(&self, room: RoomId, rng: &mut R) -> Option<RoomId> {
        let neighbors = self.rooms.get(room.0)?.neighbors();
        if neighbors.is_empty() {
            return None;
        }
        Some(neighbors[rng.gen_range(0..neighbors.len())])
    }

    /// Pick any room except the entry room uniformly. Used to place the ghost.
    pub fn random_room_excluding_entry<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<RoomId> {
        let candidates: Vec<RoomId> = self
            .rooms
            .iter()
            .map(Room::id)
            .filter(|id| *id != self.entry)
            .collect();
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[rng.gen_range(0..candidates.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn id_of(house: &House, name: &str) -> RoomId {
        house.room_by_name(name).unwrap().id()
    }

    #[test]
    fn standard_house_has_thirteen_rooms() {
        let house = House::build().unwrap();
        assert_eq!(house.len(), 13);
        assert_eq!(house.room(house.entry()).name(), "Van");
        for name in STANDARD_ROOMS {
            assert!(house.room_by_name(name).is_some(), "missing {}", name);
        }
    }

    #[test]
    fn every_edge_is_symmetric() {
        let house = House::build().unwrap();
        for room in house.rooms() {
            for neighbor in room.neighbors() {
                assert!(
                    house.room(*neighbor).is_connected_to(room.id()),
                    "{} -> {} has no return edge",
                    room.name(),
                    house.room(*neighbor).name()
                );
            }
        }
    }

    #[test]
    fn standard_connections_match_layout() {
        let house = House::build().unwrap();
        let hallway = house.room_by_name("Hallway").unwrap();
        let mut names: Vec<&str> = hallway
            .neighbors()
            .iter()
            .map(|id| house.room(*id).name())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec!["Basement", "Bathroom", "Boy's Bedroom", "Kitchen", "Master Bedroom", "Van"]
        );

        let utility = house.room_by_name("Utility Room").unwrap();
        assert_eq!(utility.neighbors(), &[id_of(&house, "Garage")]);

        let edge_count: usize = house.rooms().iter().map(|r| r.neighbors().len()).sum();
        assert_eq!(edge_count, STANDARD_CONNECTIONS.len() * 2);
    }

    #[test]
    fn random_neighbor_is_always_adjacent() {
        let house = House::build().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for room in house.rooms() {
            for _ in 0..20 {
                let next = house.random_neighbor(room.id(), &mut rng).unwrap();
                assert!(room.is_connected_to(next));
            }
        }
    }

    #[test]
    fn random_room_never_returns_entry() {
        let house = House::build().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        for _ in 0..500 {
            let room = house.random_room_excluding_entry(&mut rng).unwrap();
            assert_ne!(room, house.entry());
        }
    }

    #[test]
    fn builder_rejects_duplicates_and_self_loops() {
        let mut builder = HouseBuilder::new();
        let a = builder.add_room("Attic").unwrap();
        assert!(matches!(
            builder.add_room("Attic"),
            Err(HauntError::DuplicateRoom(_))
        ));
        assert!(matches!(builder.connect(a, a), Err(HauntError::SelfLoop(_))));
        assert!(matches!(
            builder.connect_names("Attic", "Cellar"),
            Err(HauntError::UnknownRoom(_))
        ));
    }

    #[test]
    fn builder_rejects_isolated_rooms() {
        let mut builder = HouseBuilder::new();
        builder.add_room("Porch").unwrap();
        builder.add_room("Shed").unwrap();
        builder.add_room("Lonely").unwrap();
        builder.connect_names("Porch", "Shed").unwrap();
        assert!(matches!(
            builder.build(),
            Err(HauntError::IsolatedRoom(name)) if name == "Lonely"
        ));
        assert!(matches!(HouseBuilder::new().build(), Err(HauntError::EmptyHouse)));
    }

    #[test]
    fn connecting_twice_keeps_one_edge() {
        let mut builder = HouseBuilder::new();
        builder.add_room("A").unwrap();
        builder.add_room("B").unwrap();
        builder.connect_names("A", "B").unwrap();
        builder.connect_names("B", "A").unwrap();
        let house = builder.build().unwrap();
        assert_eq!(house.room(house.entry()).neighbors().len(), 1);
    }

    #[test]
    fn rooms_and_pool_are_distinct_lock_domains() {
        let house = House::build().unwrap();
        let mut ids: Vec<_> = house.rooms().iter().map(|r| r.state().id()).collect();
        ids.push(house.evidence().id());
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
