//! Evidence kinds, ghost classes and the evidence collection.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Kinds of evidence a ghost can leave behind and a hunter can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceKind {
    Emf,
    Temperature,
    Fingerprints,
    Sound,
}

impl EvidenceKind {
    pub const COUNT: usize = 4;

    pub const ALL: [EvidenceKind; Self::COUNT] = [
        EvidenceKind::Emf,
        EvidenceKind::Temperature,
        EvidenceKind::Fingerprints,
        EvidenceKind::Sound,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EvidenceKind::Emf => "EMF",
            EvidenceKind::Temperature => "TEMPERATURE",
            EvidenceKind::Fingerprints => "FINGERPRINTS",
            EvidenceKind::Sound => "SOUND",
        }
    }

    /// Position in [`EvidenceKind::ALL`], also the number typed at setup.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown evidence type '{0}', expected one of EMF, TEMPERATURE, FINGERPRINTS, SOUND or 0-3")]
pub struct ParseEvidenceError(pub String);

impl FromStr for EvidenceKind {
    type Err = ParseEvidenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return EvidenceKind::ALL
                .get(index)
                .copied()
                .ok_or_else(|| ParseEvidenceError(s.to_string()));
        }

        EvidenceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseEvidenceError(s.to_string()))
    }
}

/// Number of evidence kinds every ghost class leaves.
pub const EVIDENCE_PER_GHOST: usize = 3;

/// Ghost classes. Each one leaves three of the four evidence kinds and
/// omits a different one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GhostClass {
    Poltergeist,
    Banshee,
    Bullies,
    Phantom,
}

impl GhostClass {
    pub const ALL: [GhostClass; 4] = [
        GhostClass::Poltergeist,
        GhostClass::Banshee,
        GhostClass::Bullies,
        GhostClass::Phantom,
    ];

    pub fn evidence(self) -> [EvidenceKind; EVIDENCE_PER_GHOST] {
        use EvidenceKind::*;
        match self {
            GhostClass::Poltergeist => [Emf, Temperature, Fingerprints],
            GhostClass::Banshee => [Emf, Temperature, Sound],
            GhostClass::Bullies => [Emf, Fingerprints, Sound],
            GhostClass::Phantom => [Temperature, Fingerprints, Sound],
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GhostClass::Poltergeist => "Poltergeist",
            GhostClass::Banshee => "Banshee",
            GhostClass::Bullies => "Bullies",
            GhostClass::Phantom => "Phantom",
        }
    }
}

impl fmt::Display for GhostClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown ghost class '{0}', expected one of Poltergeist, Banshee, Bullies, Phantom")]
pub struct ParseGhostError(pub String);

impl FromStr for GhostClass {
    type Err = ParseGhostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        GhostClass::ALL
            .into_iter()
            .find(|class| class.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseGhostError(s.to_string()))
    }
}

/// Ordered evidence sequence. Duplicates are allowed.
///
/// The list has no lock of its own. Callers wrap it in a
/// [`Domain`](crate::lock::Domain) (the shared pool) or keep it inside a
/// room's guarded state, so several operations can be composed under one
/// acquisition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EvidenceList {
    items: Vec<EvidenceKind>,
}

impl EvidenceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_kinds(kinds: impl IntoIterator<Item = EvidenceKind>) -> Self {
        Self {
            items: kinds.into_iter().collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn append(&mut self, kind: EvidenceKind) {
        self.items.push(kind);
    }

    /// Pick an element uniformly without removing it.
    ///
    /// Returns `None` only when the list is empty, which callers are
    /// expected to rule out beforehand.
    pub fn draw_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<EvidenceKind> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items[rng.gen_range(0..self.items.len())])
    }

    /// Remove the first element equal to `kind`.
    pub fn remove_matching(&mut self, kind: EvidenceKind) -> Option<EvidenceKind> {
        let position = self.items.iter().position(|item| *item == kind)?;
        Some(self.items.remove(position))
    }

    pub fn contains(&self, kind: EvidenceKind) -> bool {
        self.items.contains(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = EvidenceKind> + '_ {
        self.items.iter().copied()
    }

    /// Full ordered contents, for reporting.
    pub fn snapshot(&self) -> Vec<EvidenceKind> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn ghost_class_parses_names_case_insensitively() {
        assert_eq!("banshee".parse::<GhostClass>(), Ok(GhostClass::Banshee));
        assert_eq!(" PHANTOM ".parse::<GhostClass>(), Ok(GhostClass::Phantom));
        assert!("wraith".parse::<GhostClass>().is_err());
    }

    #[test]
    fn append_then_remove_round_trips() {
        let mut list = EvidenceList::new();
        list.append(EvidenceKind::Sound);
        list.append(EvidenceKind::Emf);
        assert_eq!(list.len(), 2);

        assert_eq!(list.remove_matching(EvidenceKind::Emf), Some(EvidenceKind::Emf));
        assert_eq!(list.len(), 1);
        assert_eq!(list.snapshot(), vec![EvidenceKind::Sound]);
    }

    #[test]
    fn remove_missing_kind_leaves_list_unchanged() {
        let mut list = EvidenceList::from_kinds([EvidenceKind::Sound, EvidenceKind::Sound]);
        assert_eq!(list.remove_matching(EvidenceKind::Temperature), None);
        assert_eq!(list.len(), 2);

        let mut empty = EvidenceList::new();
        assert_eq!(empty.remove_matching(EvidenceKind::Emf), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn remove_takes_only_the_first_duplicate() {
        let mut list = EvidenceList::from_kinds([
            EvidenceKind::Emf,
            EvidenceKind::Sound,
            EvidenceKind::Emf,
        ]);
        list.remove_matching(EvidenceKind::Emf);
        assert_eq!(list.snapshot(), vec![EvidenceKind::Sound, EvidenceKind::Emf]);
    }

    #[test]
    fn draw_random_never_removes() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let list = EvidenceList::from_kinds(GhostClass::Banshee.evidence());
        for _ in 0..100 {
            let drawn = list.draw_random(&mut rng).unwrap();
            assert!(GhostClass::Banshee.evidence().contains(&drawn));
        }
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn draw_random_reaches_every_element() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let list = EvidenceList::from_kinds(EvidenceKind::ALL);
        let mut seen = [false; EvidenceKind::COUNT];
        for _ in 0..200 {
            seen[list.draw_random(&mut rng).unwrap().index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn draw_random_on_empty_is_none() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(EvidenceList::new().draw_random(&mut rng), None);
    }

    #[test]
    fn every_ghost_class_omits_a_different_kind() {
        let mut omitted: Vec<EvidenceKind> = GhostClass::ALL
            .iter()
            .map(|class| {
                let profile = class.evidence();
                let missing: Vec<_> = EvidenceKind::ALL
                    .into_iter()
                    .filter(|kind| !profile.contains(kind))
                    .collect();
                assert_eq!(missing.len(), 1, "{} should omit exactly one kind", class);
                missing[0]
            })
            .collect();
        omitted.sort();
        omitted.dedup();
        assert_eq!(omitted.len(), 4);
    }

    #[test]
    fn parse_accepts_names_and_indices() {
        assert_eq!("emf".parse::<EvidenceKind>().unwrap(), EvidenceKind::Emf);
        assert_eq!(" Sound ".parse::<EvidenceKind>().unwrap(), EvidenceKind::Sound);
        assert_eq!("2".parse::<EvidenceKind>().unwrap(), EvidenceKind::Fingerprints);
        assert!("4".parse::<EvidenceKind>().is_err());
        assert!("ectoplasm".parse::<EvidenceKind>().is_err());
    }

    #[test]
    fn display_matches_log_names() {
        assert_eq!(EvidenceKind::Temperature.to_string(), "TEMPERATURE");
        assert_eq!(GhostClass::Bullies.to_string(), "Bullies");
    }
}
