//! The hunting party: who joins the hunt and which equipment each carries.
//!
//! The roster is a small arena indexed by [`HunterId`]. No two hunters share
//! an evidence kind, which caps the party at one hunter per kind.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::{HauntError, Result};
use crate::evidence::EvidenceKind;
use crate::room::HunterId;

/// Largest party a hunt supports.
pub const MAX_HUNTERS: usize = EvidenceKind::COUNT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HunterSpec {
    pub id: HunterId,
    pub name: String,
    pub equipment: EvidenceKind,
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    hunters: Vec<HunterSpec>,
    next_id: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal equipment at random, without repeats, to each named hunter.
    pub fn deal<R, S>(names: &[S], rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
        S: AsRef<str>,
    {
        if names.len() > MAX_HUNTERS {
            return Err(HauntError::TooManyHunters {
                requested: names.len(),
                max: MAX_HUNTERS,
            });
        }

        let mut kinds = EvidenceKind::ALL;
        kinds.shuffle(rng);

        let mut roster = Self::new();
        for (name, kind) in names.iter().zip(kinds) {
            roster.add(name.as_ref(), kind)?;
        }
        Ok(roster)
    }

    /// Use an explicit equipment assignment, one kind per name, in order.
    pub fn assign<S: AsRef<str>>(names: &[S], equipment: &[EvidenceKind]) -> Result<Self> {
        if names.len() != equipment.len() {
            return Err(HauntError::EquipmentMismatch {
                expected: names.len(),
                actual: equipment.len(),
            });
        }

        let mut roster = Self::new();
        for (name, kind) in names.iter().zip(equipment) {
            roster.add(name.as_ref(), *kind)?;
        }
        Ok(roster)
    }

    /// Add one hunter. Fails when the party is full, the name is blank, or
    /// the equipment is already taken.
    pub fn add(&mut self, name: &str, equipment: EvidenceKind) -> Result<HunterId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HauntError::EmptyName);
        }
        if self.hunters.len() >= MAX_HUNTERS {
            return Err(HauntError::TooManyHunters {
                requested: self.hunters.len() + 1,
                max: MAX_HUNTERS,
            });
        }
        if self.hunters.iter().any(|h| h.equipment == equipment) {
            return Err(HauntError::DuplicateEquipment(equipment.to_string()));
        }

        self.next_id += 1;
        let id = HunterId(self.next_id);
        self.hunters.push(HunterSpec {
            id,
            name: name.to_string(),
            equipment,
        });
        Ok(id)
    }

    pub fn get(&self, id: HunterId) -> Option<&HunterSpec> {
        self.hunters.iter().find(|h| h.id == id)
    }

    /// Drop a hunter from the party.
    pub fn remove(&mut self, id: HunterId) -> Option<HunterSpec> {
        let position = self.hunters.iter().position(|h| h.id == id)?;
        Some(self.hunters.remove(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &HunterSpec> {
        self.hunters.iter()
    }

    pub fn len(&self) -> usize {
        self.hunters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hunters.is_empty()
    }
}
