//! The hunter actor.
//!
//! Each hunter carries one piece of equipment that detects a single evidence
//! kind. Hunters move around, pick up evidence their equipment can detect
//! and put it into the shared pool, and review the pool against the ghost's
//! profile. A hunter stops when it is too bored, too scared, or when a
//! review finds every kind of the ghost's profile in the pool.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use rand::Rng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::{HauntError, Result};
use crate::events::{EventSink, ExitReason, HuntEvent};
use crate::evidence::{EvidenceKind, EvidenceList};
use crate::house::House;
use crate::lock::lock_pair;
use crate::room::{HunterId, RoomId};
use crate::rules::HuntRules;

/// What a hunter does on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HunterAction {
    MoveRoom,
    CollectEvidence,
    Review,
}

impl HunterAction {
    pub const ALL: [HunterAction; 3] = [
        HunterAction::MoveRoom,
        HunterAction::CollectEvidence,
        HunterAction::Review,
    ];

    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Final state of a hunter after its thread has finished.
#[derive(Debug, Clone, Serialize)]
pub struct HunterOutcome {
    pub id: HunterId,
    pub name: String,
    pub equipment: EvidenceKind,
    pub fear: u32,
    pub boredom: u32,
    pub sufficient_evidence: bool,
    pub final_room: String,
    pub reasons: Vec<ExitReason>,
}

impl HunterOutcome {
    /// Every reason that applied when the hunter left.
    pub fn exit_reasons(&self) -> &[ExitReason] {
        &self.reasons
    }

    pub fn was_bored(&self) -> bool {
        self.reasons.contains(&ExitReason::Bored)
    }

    pub fn was_scared(&self) -> bool {
        self.reasons.contains(&ExitReason::Feared)
    }

    pub fn succeeded(&self) -> bool {
        self.sufficient_evidence
    }
}

pub struct Hunter {
    id: HunterId,
    name: String,
    equipment: EvidenceKind,
    room: RoomId,
    // Fear and boredom are written only by the thread that owns this hunter.
    fear: u32,
    boredom: u32,
    sufficient_evidence: bool,
    // True while this hunter is listed in a room's presence set.
    placed: bool,
    house: Arc<House>,
    profile: Arc<EvidenceList>,
    rules: HuntRules,
    rng: ChaCha20Rng,
    sink: Arc<dyn EventSink>,
}

impl Hunter {
    /// Create a hunter standing in the house's entry room.
    ///
    /// The hunter is recorded in the entry room's presence set right away,
    /// so the ghost can see it before any thread starts.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: HunterId,
        name: impl Into<String>,
        equipment: EvidenceKind,
        house: Arc<House>,
        profile: Arc<EvidenceList>,
        rules: HuntRules,
        rng: ChaCha20Rng,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self> {
        let name = name.into();
        let room = house.entry();
        house.room(room).state().lock()?.add_hunter(id);

        sink.record(&HuntEvent::HunterInit {
            hunter: name.clone(),
            equipment,
        });

        Ok(Self {
            id,
            name,
            equipment,
            room,
            fear: 0,
            boredom: 0,
            sufficient_evidence: false,
            placed: true,
            house,
            profile,
            rules,
            rng,
            sink,
        })
    }

    pub fn id(&self) -> HunterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn equipment(&self) -> EvidenceKind {
        self.equipment
    }

    pub fn room(&self) -> RoomId {
        self.room
    }

    pub fn fear(&self) -> u32 {
        self.fear
    }

    pub fn boredom(&self) -> u32 {
        self.boredom
    }

    pub fn has_sufficient_evidence(&self) -> bool {
        self.sufficient_evidence
    }

    /// Whether the loop should keep going.
    pub fn is_active(&self) -> bool {
        !self.sufficient_evidence
            && self.boredom < self.rules.boredom_max
            && self.fear < self.rules.fear_max
    }

    /// Run the hunter on its own thread.
    pub fn spawn(self) -> Result<JoinHandle<Result<HunterOutcome>>> {
        let thread_name = format!("hunter-{}", self.name);
        let actor = thread_name.clone();
        thread::Builder::new()
            .name(thread_name)
            .spawn(move || self.run())
            .map_err(|source| HauntError::Spawn { actor, source })
    }

    /// Loop until bored, scared or convinced, then leave the house.
    pub fn run(mut self) -> Result<HunterOutcome> {
        debug!(hunter = %self.name, equipment = %self.equipment, "Hunter thread started");
        while self.is_active() {
            thread::sleep(self.rules.hunter_pause);
            self.tick()?;
        }
        self.leave()
    }

    /// One iteration of the hunter loop, without the pause.
    pub fn tick(&mut self) -> Result<HunterAction> {
        let ghost_present = self.house.room(self.room).state().lock()?.has_ghost();

        if ghost_present {
            self.fear += 1;
            self.boredom = 0;
        } else {
            self.boredom += 1;
        }

        let action = HunterAction::choose(&mut self.rng);
        match action {
            HunterAction::MoveRoom => self.move_room()?,
            HunterAction::CollectEvidence => {
                self.collect_evidence()?;
            }
            HunterAction::Review => {
                if self.review()? {
                    self.sufficient_evidence = true;
                }
            }
        }
        Ok(action)
    }

    fn move_room(&mut self) -> Result<()> {
        let Some(target) = self.house.random_neighbor(self.room, &mut self.rng) else {
            return Ok(());
        };

        let current = self.house.room(self.room);
        let next = self.house.room(target);
        {
            let (mut to, mut from) = lock_pair(next.state(), current.state())?;
            to.add_hunter(self.id);
            from.remove_hunter(self.id);
            self.room = target;
        }

        self.sink.record(&HuntEvent::HunterMove {
            hunter: self.name.clone(),
            room: next.name().to_string(),
        });
        Ok(())
    }

    /// Move one item this hunter can detect from the room into the shared pool.
    ///
    /// Returns the collected kind, or `None` when the room had nothing
    /// matching the hunter's equipment.
    pub fn collect_evidence(&self) -> Result<Option<EvidenceKind>> {
        let room = self.house.room(self.room);
        let collected = {
            let (mut shared, mut state) = lock_pair(self.house.evidence(), room.state())?;
            let found = state.evidence.remove_matching(self.equipment);
            if let Some(kind) = found {
                shared.append(kind);
            }
            found
        };

        if let Some(kind) = collected {
            self.sink.record(&HuntEvent::HunterCollect {
                hunter: self.name.clone(),
                evidence: kind,
                room: room.name().to_string(),
            });
        }
        Ok(collected)
    }

    /// Check the shared pool against the ghost's profile.
    ///
    /// Returns true when every kind in the profile appears in the pool.
    pub fn review(&self) -> Result<bool> {
        let matched = {
            let shared = self.house.evidence().lock()?;
            self.profile
                .iter()
                .filter(|kind| shared.contains(*kind))
                .count()
        };
        let sufficient = !self.profile.is_empty() && matched == self.profile.len();

        self.sink.record(&HuntEvent::HunterReview {
            hunter: self.name.clone(),
            sufficient,
        });
        Ok(sufficient)
    }

    fn exit_reasons(&self) -> Vec<ExitReason> {
        if self.sufficient_evidence {
            return vec![ExitReason::Evidence];
        }

        let mut reasons = Vec::with_capacity(2);
        if self.boredom >= self.rules.boredom_max {
            reasons.push(ExitReason::Bored);
        }
        if self.fear >= self.rules.fear_max {
            reasons.push(ExitReason::Feared);
        }
        reasons
    }

    fn leave(&mut self) -> Result<HunterOutcome> {
        let reasons = self.exit_reasons();
        for reason in &reasons {
            self.sink.record(&HuntEvent::HunterExit {
                hunter: self.name.clone(),
                reason: *reason,
            });
        }

        let room = self.house.room(self.room);
        room.state().lock()?.remove_hunter(self.id);
        self.placed = false;
        debug!(
            hunter = %self.name,
            fear = self.fear,
            boredom = self.boredom,
            "Hunter thread finished"
        );

        Ok(HunterOutcome {
            id: self.id,
            name: self.name.clone(),
            equipment: self.equipment,
            fear: self.fear,
            boredom: self.boredom,
            sufficient_evidence: self.sufficient_evidence,
            final_room: room.name().to_string(),
            reasons,
        })
    }
}

/// A hunter that never reached `leave` (dropped before running, or its
/// thread failed) still has to vacate its room.
impl Drop for Hunter {
    fn drop(&mut self) {
        if !self.placed {
            return;
        }
        if let Ok(mut state) = self.house.room(self.room).state().lock() {
            state.remove_hunter(self.id);
            self.placed = false;
        }
        debug!(hunter = %self.name, "Hunter withdrawn without leaving");
    }
}
