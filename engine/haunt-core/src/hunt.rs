//! One complete hunt: a ghost and its hunters on a shared house.
//!
//! [`Hunt::new`] places every actor before any thread starts, so the ghost
//! and the hunters see a fully populated house from their first tick.
//! [`Hunt::run`] starts one thread per actor, waits for all of them and
//! folds their outcomes into a [`HuntReport`].

use std::sync::Arc;
use std::thread::JoinHandle;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{HauntError, Result};
use crate::events::EventSink;
use crate::evidence::{EvidenceKind, GhostClass};
use crate::ghost::{Ghost, GhostOutcome};
use crate::house::House;
use crate::hunter::{Hunter, HunterOutcome};
use crate::room::RoomId;
use crate::roster::Roster;
use crate::rules::HuntRules;

pub struct Hunt {
    house: Arc<House>,
    ghost: Ghost,
    hunters: Vec<Hunter>,
}

impl Hunt {
    /// Place the ghost and every hunter on `house`.
    ///
    /// The ghost class is drawn from `seed` when `class` is `None`. Every
    /// actor gets its own generator seeded from the same master stream, so
    /// a seed fixes the setup and each actor's choices.
    pub fn new(
        house: Arc<House>,
        roster: &Roster,
        class: Option<GhostClass>,
        rules: HuntRules,
        seed: u64,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self> {
        if roster.is_empty() {
            return Err(HauntError::NoHunters);
        }

        let mut master = ChaCha20Rng::seed_from_u64(seed);
        let class = class.unwrap_or_else(|| GhostClass::random(&mut master));
        let room = house
            .random_room_excluding_entry(&mut master)
            .unwrap_or_else(|| house.entry());

        let ghost = Ghost::new(
            Arc::clone(&house),
            class,
            room,
            rules,
            ChaCha20Rng::seed_from_u64(master.gen()),
            Arc::clone(&sink),
        )?;
        let profile = ghost.profile();

        let hunters = roster
            .iter()
            .map(|spec| {
                Hunter::new(
                    spec.id,
                    spec.name.clone(),
                    spec.equipment,
                    Arc::clone(&house),
                    Arc::clone(&profile),
                    rules,
                    ChaCha20Rng::seed_from_u64(master.gen()),
                    Arc::clone(&sink),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            seed,
            class = %class,
            room = house.room(room).name(),
            hunters = hunters.len(),
            "Hunt prepared"
        );
        Ok(Self {
            house,
            ghost,
            hunters,
        })
    }

    pub fn house(&self) -> &Arc<House> {
        &self.house
    }

    pub fn ghost_class(&self) -> GhostClass {
        self.ghost.class()
    }

    pub fn ghost_room(&self) -> RoomId {
        self.ghost.room()
    }

    pub fn hunter_count(&self) -> usize {
        self.hunters.len()
    }

    /// Run every actor on its own thread and wait for all of them.
    pub fn run(self) -> Result<HuntReport> {
        let Hunt {
            house,
            ghost,
            hunters,
        } = self;

        let ghost_handle = ghost.spawn()?;
        let mut hunter_handles = Vec::with_capacity(hunters.len());
        for hunter in hunters {
            let name = hunter.name().to_string();
            hunter_handles.push((name, hunter.spawn()?));
        }
        info!(hunters = hunter_handles.len(), "Hunt started");

        let mut outcomes = Vec::with_capacity(hunter_handles.len());
        for (name, handle) in hunter_handles {
            outcomes.push(join(handle, format!("hunter {}", name))?);
        }
        let ghost = join(ghost_handle, "ghost".to_string())?;

        let collected = house.evidence().lock()?.snapshot();
        let report = HuntReport::new(ghost, outcomes, collected);
        info!(
            hunters_won = report.hunters_won,
            class = %report.ghost.class,
            "Hunt finished"
        );
        Ok(report)
    }
}

fn join<T>(handle: JoinHandle<Result<T>>, actor: String) -> Result<T> {
    handle.join().map_err(|_| HauntError::ActorPanicked(actor))?
}

/// Everything that is known once all actors have left.
#[derive(Debug, Clone, Serialize)]
pub struct HuntReport {
    pub hunters_won: bool,
    pub ghost: GhostOutcome,
    pub hunters: Vec<HunterOutcome>,
    /// Contents of the shared pool at the end of the hunt.
    pub collected: Vec<EvidenceKind>,
    /// The ghost's evidence profile.
    pub profile: Vec<EvidenceKind>,
}

impl HuntReport {
    /// The hunters win when at least one of them left convinced.
    pub fn new(
        ghost: GhostOutcome,
        hunters: Vec<HunterOutcome>,
        collected: Vec<EvidenceKind>,
    ) -> Self {
        let hunters_won = hunters.iter().any(HunterOutcome::succeeded);
        let profile = ghost.class.evidence().to_vec();
        Self {
            hunters_won,
            ghost,
            hunters,
            collected,
            profile,
        }
    }

    /// The ghost class, as far as the hunters could tell.
    pub fn identified_class(&self) -> Option<GhostClass> {
        self.hunters_won.then_some(self.ghost.class)
    }

    pub fn bored_hunters(&self) -> impl Iterator<Item = &HunterOutcome> {
        self.hunters.iter().filter(|h| h.was_bored())
    }

    pub fn scared_hunters(&self) -> impl Iterator<Item = &HunterOutcome> {
        self.hunters.iter().filter(|h| h.was_scared())
    }
}
