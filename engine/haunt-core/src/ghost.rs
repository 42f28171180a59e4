//! The ghost actor.
//!
//! A ghost wanders the house and drops evidence from its fixed profile. It
//! never wins or loses on its own; it simply leaves once boredom reaches the
//! limit. Boredom grows every tick no hunter shares its room and resets as
//! soon as one does.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use rand::Rng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::{HauntError, Result};
use crate::events::{EventSink, ExitReason, HuntEvent};
use crate::evidence::{EvidenceList, GhostClass};
use crate::house::House;
use crate::lock::lock_pair;
use crate::room::RoomId;
use crate::rules::HuntRules;

/// What the ghost does on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostAction {
    MoveRoom,
    DropEvidence,
    Nothing,
}

impl GhostAction {
    /// With a hunter in the room the ghost never idles.
    pub fn choose<R: Rng + ?Sized>(hunter_present: bool, rng: &mut R) -> Self {
        let choices: &[GhostAction] = if hunter_present {
            &[GhostAction::MoveRoom, GhostAction::DropEvidence]
        } else {
            &[
                GhostAction::MoveRoom,
                GhostAction::DropEvidence,
                GhostAction::Nothing,
            ]
        };
        choices[rng.gen_range(0..choices.len())]
    }
}

/// Final state of the ghost after its thread has finished.
#[derive(Debug, Clone, Serialize)]
pub struct GhostOutcome {
    pub class: GhostClass,
    pub boredom: u32,
    pub final_room: String,
    pub reason: ExitReason,
}

pub struct Ghost {
    class: GhostClass,
    room: RoomId,
    profile: Arc<EvidenceList>,
    // Written only by the thread that owns this ghost.
    boredom: u32,
    // True while the ghost occupies a room's ghost slot.
    placed: bool,
    house: Arc<House>,
    rules: HuntRules,
    rng: ChaCha20Rng,
    sink: Arc<dyn EventSink>,
}

impl Ghost {
    /// Place a ghost of `class` into `room` and announce it.
    pub fn new(
        house: Arc<House>,
        class: GhostClass,
        room: RoomId,
        rules: HuntRules,
        rng: ChaCha20Rng,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self> {
        let profile = Arc::new(EvidenceList::from_kinds(class.evidence()));
        {
            let mut state = house.room(room).state().lock()?;
            state.set_ghost(class);
        }
        sink.record(&HuntEvent::GhostInit {
            class,
            room: house.room(room).name().to_string(),
        });

        Ok(Self {
            class,
            room,
            profile,
            boredom: 0,
            placed: true,
            house,
            rules,
            rng,
            sink,
        })
    }

    pub fn class(&self) -> GhostClass {
        self.class
    }

    pub fn room(&self) -> RoomId {
        self.room
    }

    pub fn boredom(&self) -> u32 {
        self.boredom
    }

    /// The ghost's evidence profile. Read-only for everyone, hunters included.
    pub fn profile(&self) -> Arc<EvidenceList> {
        Arc::clone(&self.profile)
    }

    pub fn is_bored(&self) -> bool {
        self.boredom >= self.rules.boredom_max
    }

    /// Run the ghost on its own thread.
    pub fn spawn(self) -> Result<JoinHandle<Result<GhostOutcome>>> {
        thread::Builder::new()
            .name("ghost".into())
            .spawn(move || self.run())
            .map_err(|source| HauntError::Spawn {
                actor: "ghost".into(),
                source,
            })
    }

    /// Loop until bored, then leave the house.
    pub fn run(mut self) -> Result<GhostOutcome> {
        debug!(class = %self.class, "Ghost thread started");
        while !self.is_bored() {
            thread::sleep(self.rules.ghost_pause);
            self.tick()?;
        }
        self.leave()
    }

    /// One iteration of the ghost loop, without the pause.
    pub fn tick(&mut self) -> Result<GhostAction> {
        let hunter_present = self.house.room(self.room).state().lock()?.has_hunters();

        if hunter_present {
            self.boredom = 0;
        } else {
            self.boredom += 1;
        }

        let action = GhostAction::choose(hunter_present, &mut self.rng);
        match action {
            GhostAction::MoveRoom => self.move_room()?,
            GhostAction::DropEvidence => self.drop_evidence()?,
            GhostAction::Nothing => {}
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
            let (mut from, mut to) = lock_pair(current.state(), next.state())?;
            from.clear_ghost();
            to.set_ghost(self.class);
            self.room = target;
        }

        self.sink.record(&HuntEvent::GhostMove {
            room: next.name().to_string(),
        });
        Ok(())
    }

    fn drop_evidence(&mut self) -> Result<()> {
        let room = self.house.room(self.room);
        let dropped = {
            let mut state = room.state().lock()?;
            let Some(kind) = self.profile.draw_random(&mut self.rng) else {
                return Ok(());
            };
            state.evidence.append(kind);
            kind
        };

        self.sink.record(&HuntEvent::GhostEvidence {
            evidence: dropped,
            room: room.name().to_string(),
        });
        Ok(())
    }

    fn leave(&mut self) -> Result<GhostOutcome> {
        let room = self.house.room(self.room);
        room.state().lock()?.clear_ghost();
        self.placed = false;

        self.sink.record(&HuntEvent::GhostExit {
            reason: ExitReason::Bored,
        });
        debug!(class = %self.class, room = room.name(), "Ghost thread finished");

        Ok(GhostOutcome {
            class: self.class,
            boredom: self.boredom,
            final_room: room.name().to_string(),
            reason: ExitReason::Bored,
        })
    }
}

impl Drop for Ghost {
    fn drop(&mut self) {
        if !self.placed {
            return;
        }
        if let Ok(mut state) = self.house.room(self.room).state().lock() {
            state.clear_ghost();
            self.placed = false;
        }
        debug!(class = %self.class, "Ghost withdrawn without leaving");
    }
}
