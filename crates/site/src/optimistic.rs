//! A value that can be changed ahead of confirmation and put back if the
//! confirmation never comes.

use std::fmt;

use uuid::Uuid;

/// Identifies one in-flight optimistic change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
enum Phase<T> {
    Idle,
    Pending { id: RequestId, snapshot: T },
}

/// A value with at most one unconfirmed change applied to it.
///
/// [`begin`](Self::begin) snapshots the value and applies the change
/// immediately. The change is then either [`commit`](Self::commit)ted with
/// the authoritative value or [`rollback`](Self::rollback)ed to the
/// snapshot. While a change is pending, further `begin` calls are refused.
#[derive(Debug, Clone)]
pub struct Optimistic<T> {
    value: T,
    phase: Phase<T>,
}

impl<T: Clone> Optimistic<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            phase: Phase::Idle,
        }
    }

    /// The current value, including any unconfirmed change.
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn pending(&self) -> Option<RequestId> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Pending { id, .. } => Some(*id),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending().is_some()
    }

    /// Apply `change` eagerly. Returns `None` without touching the value if
    /// another change is still pending.
    pub fn begin(&mut self, change: impl FnOnce(&mut T)) -> Option<RequestId> {
        if self.is_pending() {
            return None;
        }
        let id = RequestId::new();
        self.phase = Phase::Pending {
            id,
            snapshot: self.value.clone(),
        };
        change(&mut self.value);
        Some(id)
    }

    /// Replace the value with the confirmed one. Ignored (returns `false`)
    /// unless `id` is the pending change.
    pub fn commit(&mut self, id: RequestId, confirmed: T) -> bool {
        if self.pending() != Some(id) {
            return false;
        }
        self.phase = Phase::Idle;
        self.value = confirmed;
        true
    }

    /// Restore the value from before `id` began. Ignored (returns `false`)
    /// unless `id` is the pending change.
    pub fn rollback(&mut self, id: RequestId) -> bool {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Pending { id: pending, snapshot } if pending == id => {
                self.value = snapshot;
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }
}
