//! Error type for the hunt core.

/// Errors raised while building the house, assembling a roster or running actors.
///
/// Evidence that cannot be found is not an error: lookups return `None`.
#[derive(Debug, thiserror::Error)]
pub enum HauntError {
    #[error("Room '{0}' already exists")]
    DuplicateRoom(String),
    #[error("Unknown room: {0}")]
    UnknownRoom(String),
    #[error("Room '{0}' cannot be connected to itself")]
    SelfLoop(String),
    #[error("Room '{0}' has no connected rooms")]
    IsolatedRoom(String),
    #[error("House has no rooms")]
    EmptyHouse,
    #[error("At most {max} hunters can join a hunt, got {requested}")]
    TooManyHunters { requested: usize, max: usize },
    #[error("A hunt needs at least one hunter")]
    NoHunters,
    #[error("Evidence {0} is already assigned to another hunter")]
    DuplicateEquipment(String),
    #[error("Expected {expected} equipment assignments but got {actual}")]
    EquipmentMismatch { expected: usize, actual: usize },
    #[error("Hunter name cannot be empty")]
    EmptyName,
    #[error("Cannot lock domain {0} twice in one acquisition")]
    SameDomain(u64),
    #[error("Lock poisoned: {0}")]
    Poisoned(String),
    #[error("Failed to spawn {actor} thread: {source}")]
    Spawn {
        actor: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} thread panicked")]
    ActorPanicked(String),
}

pub type Result<T> = std::result::Result<T, HauntError>;
