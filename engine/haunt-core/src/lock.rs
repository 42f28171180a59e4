//! Lock domains and the two-lock acquisition protocol.
//!
//! Every room and every shared evidence collection is an independent
//! exclusion domain. Each domain receives a `LockId` from a process-wide
//! counter when it is created, which gives all domains a fixed total order.
//! Any operation that needs two domains at once goes through [`lock_pair`],
//! which always takes the lower id first. Two actors can therefore never
//! wait on each other in a cycle, whatever order they name the domains in.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::error::{HauntError, Result};

static NEXT_LOCK_ID: AtomicU64 = AtomicU64::new(1);

/// Stable position of a domain in the global lock order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LockId(u64);

impl LockId {
    fn next() -> Self {
        LockId(NEXT_LOCK_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value guarded by its own mutex and ordered by its `LockId`.
pub struct Domain<T> {
    id: LockId,
    label: String,
    inner: Mutex<T>,
}

impl<T> Domain<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            id: LockId::next(),
            label: label.into(),
            inner: Mutex::new(value),
        }
    }

    #[inline]
    pub fn id(&self) -> LockId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Acquire this domain alone.
    pub fn lock(&self) -> Result<MutexGuard<'_, T>> {
        self.inner
            .lock()
            .map_err(|_| HauntError::Poisoned(self.label.clone()))
    }

    /// Consume the domain and return the guarded value.
    pub fn into_inner(self) -> Result<T> {
        let label = self.label;
        self.inner
            .into_inner()
            .map_err(|_| HauntError::Poisoned(label))
    }
}

impl<T: fmt::Debug> fmt::Debug for Domain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Domain")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Acquire two domains in lock order and return the guards in argument order.
///
/// The guards may be dropped in any order.
pub fn lock_pair<'a, A, B>(
    first: &'a Domain<A>,
    second: &'a Domain<B>,
) -> Result<(MutexGuard<'a, A>, MutexGuard<'a, B>)> {
    if first.id == second.id {
        return Err(HauntError::SameDomain(first.id.value()));
    }

    if first.id < second.id {
        let a = first.lock()?;
        let b = second.lock()?;
        Ok((a, b))
    } else {
        let b = second.lock()?;
        let a = first.lock()?;
        Ok((a, b))
    }
}
