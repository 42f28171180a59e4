//! Hunt events and the observer interface actors report them through.
//!
//! The core never formats output itself. Actors hand every notable step to
//! an injected [`EventSink`]; the runner decides whether that goes to a log
//! file, to `tracing`, or nowhere.

use std::fmt;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::info;

use crate::evidence::{EvidenceKind, GhostClass};

/// Why an actor left the house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitReason {
    Bored,
    Feared,
    Evidence,
}

impl ExitReason {
    pub fn as_str(self) -> &'static str {
        match self {
            ExitReason::Bored => "BORED",
            ExitReason::Feared => "FEAR",
            ExitReason::Evidence => "EVIDENCE",
        }
    }
}

impl fmt::Display for ExitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that happened during a hunt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HuntEvent {
    HunterInit {
        hunter: String,
        equipment: EvidenceKind,
    },
    HunterMove {
        hunter: String,
        room: String,
    },
    HunterCollect {
        hunter: String,
        evidence: EvidenceKind,
        room: String,
    },
    HunterReview {
        hunter: String,
        sufficient: bool,
    },
    HunterExit {
        hunter: String,
        reason: ExitReason,
    },
    GhostInit {
        class: GhostClass,
        room: String,
    },
    GhostMove {
        room: String,
    },
    GhostEvidence {
        evidence: EvidenceKind,
        room: String,
    },
    GhostExit {
        reason: ExitReason,
    },
}

impl HuntEvent {
    /// Bracketed tag shown in the first column of the event log.
    pub fn tag(&self) -> &'static str {
        match self {
            HuntEvent::HunterInit { .. } => "[HUNTER INIT]",
            HuntEvent::HunterMove { .. } => "[HUNTER MOVE]",
            HuntEvent::HunterCollect { .. } => "[HUNTER EVIDENCE]",
            HuntEvent::HunterReview { .. } => "[HUNTER REVIEW]",
            HuntEvent::HunterExit { .. } => "[HUNTER EXIT]",
            HuntEvent::GhostInit { .. } => "[GHOST INIT]",
            HuntEvent::GhostMove { .. } => "[GHOST MOVE]",
            HuntEvent::GhostEvidence { .. } => "[GHOST EVIDENCE]",
            HuntEvent::GhostExit { .. } => "[GHOST EXIT]",
        }
    }
}

impl fmt::Display for HuntEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<17} ", self.tag())?;
        match self {
            HuntEvent::HunterInit { hunter, equipment } => {
                write!(f, "[{}] is a [{}] hunter", hunter, equipment)
            }
            HuntEvent::HunterMove { hunter, room } => {
                write!(f, "[{}] has moved into [{}]", hunter, room)
            }
            HuntEvent::HunterCollect {
                hunter,
                evidence,
                room,
            } => write!(f, "[{}] found [{}] in [{}] and [COLLECTED]", hunter, evidence, room),
            HuntEvent::HunterReview { hunter, sufficient } => {
                let verdict = if *sufficient { "SUFFICIENT" } else { "INSUFFICIENT" };
                write!(f, "[{}] reviewed evidence and found [{}]", hunter, verdict)
            }
            HuntEvent::HunterExit { hunter, reason } => {
                write!(f, "[{}] exited because [{}]", hunter, reason)
            }
            HuntEvent::GhostInit { class, room } => {
                write!(f, "Ghost is a [{}] in room [{}]", class, room)
            }
            HuntEvent::GhostMove { room } => write!(f, "Ghost has moved into [{}]", room),
            HuntEvent::GhostEvidence { evidence, room } => {
                write!(f, "Ghost left [{}] in [{}]", evidence, room)
            }
            HuntEvent::GhostExit { reason } => write!(f, "Exited because [{}]", reason),
        }
    }
}

/// Receives hunt events from every actor thread.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &HuntEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &HuntEvent) {}
}

/// Forwards events to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &HuntEvent) {
        match event {
            HuntEvent::HunterInit { hunter, equipment } => {
                info!(hunter = %hunter, equipment = %equipment, "Hunter joined")
            }
            HuntEvent::HunterMove { hunter, room } => {
                info!(hunter = %hunter, room = %room, "Hunter moved")
            }
            HuntEvent::HunterCollect {
                hunter,
                evidence,
                room,
            } => info!(hunter = %hunter, evidence = %evidence, room = %room, "Evidence collected"),
            HuntEvent::HunterReview { hunter, sufficient } => {
                info!(hunter = %hunter, sufficient, "Evidence reviewed")
            }
            HuntEvent::HunterExit { hunter, reason } => {
                info!(hunter = %hunter, reason = %reason, "Hunter left")
            }
            HuntEvent::GhostInit { class, room } => {
                info!(class = %class, room = %room, "Ghost spawned")
            }
            HuntEvent::GhostMove { room } => info!(room = %room, "Ghost moved"),
            HuntEvent::GhostEvidence { evidence, room } => {
                info!(evidence = %evidence, room = %room, "Ghost left evidence")
            }
            HuntEvent::GhostExit { reason } => info!(reason = %reason, "Ghost left"),
        }
    }
}

/// Keeps every event in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<HuntEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<HuntEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventSink for RecordingSink {
    fn record(&self, event: &HuntEvent) {
        let mut events = match self.events.lock() {
            Ok(events) => events,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push(event.clone());
    }
}

/// Sends each event to several sinks in order.
#[derive(Default, Clone)]
pub struct FanoutSink {
    sinks: Vec<Arc<dyn EventSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl EventSink for FanoutSink {
    fn record(&self, event: &HuntEvent) {
        for sink in &self.sinks {
            sink.record(event);
        }
    }
}
