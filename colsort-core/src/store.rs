//! Session storage for the last resolved sort of each view.

use std::sync::atomic::{AtomicU64, Ordering};

use colsort_model::{PersistedSort, SortSpec};
use dashmap::DashMap;
use tracing::trace;

use crate::sorting::{RequestSortInput, SortResolver};

/// Per-session, per-view slot holding the last resolved [`SortSpec`].
///
/// Implementations own their own concurrency. A load that cannot be decoded
/// must return `None`, which the resolver treats as a first visit.
pub trait SortStateStore: Send + Sync {
    fn load(&self, session: &str, view: &str) -> Option<SortSpec>;

    fn save(&self, session: &str, view: &str, spec: &SortSpec);
}

/// Slot limit of [`MemorySortStore::new`].
pub const DEFAULT_STORE_CAPACITY: usize = 10_000;

#[derive(Debug)]
struct Slot {
    value: PersistedSort,
    touched: u64,
}

/// In-process store backed by a sharded map of [`PersistedSort`] values.
///
/// Holds at most `capacity` slots. Writing past the limit evicts the least
/// recently written slot.
#[derive(Debug)]
pub struct MemorySortStore {
    slots: DashMap<(String, String), Slot>,
    capacity: usize,
    clock: AtomicU64,
}

impl Default for MemorySortStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_STORE_CAPACITY)
    }
}

impl MemorySortStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding at most `capacity` slots (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: DashMap::new(),
            capacity: capacity.max(1),
            clock: AtomicU64::new(0),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Store a raw value as another backend would have written it.
    pub fn put_persisted(&self, session: &str, view: &str, value: PersistedSort) {
        let touched = self.clock.fetch_add(1, Ordering::Relaxed);
        self.slots
            .insert((session.to_string(), view.to_string()), Slot { value, touched });

        while self.slots.len() > self.capacity {
            if !self.evict_oldest() {
                break;
            }
        }
    }

    fn evict_oldest(&self) -> bool {
        // Key is cloned out so no shard guard is held during removal.
        let oldest = self
            .slots
            .iter()
            .min_by_key(|entry| entry.value().touched)
            .map(|entry| entry.key().clone());
        match oldest {
            Some(key) => {
                trace!(target: "colsort::store", session = %key.0, view = %key.1, "evicting sort slot");
                self.slots.remove(&key).is_some()
            }
            None => false,
        }
    }

    /// Drop every slot belonging to `session`.
    pub fn clear_session(&self, session: &str) {
        self.slots.retain(|(owner, _), _| owner != session);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SortStateStore for MemorySortStore {
    fn load(&self, session: &str, view: &str) -> Option<SortSpec> {
        let slot = self
            .slots
            .get(&(session.to_string(), view.to_string()))?;
        let spec = slot.value.to_spec();
        if spec.is_none() {
            trace!(target: "colsort::store", view, "stored sort did not decode");
        }
        spec
    }

    fn save(&self, session: &str, view: &str, spec: &SortSpec) {
        self.put_persisted(session, view, PersistedSort::from(spec));
    }
}

/// Read the stored spec, resolve it against `requested`, store the result.
pub fn resolve_and_store<S>(
    store: &S,
    resolver: &SortResolver,
    session: &str,
    requested_column_key: Option<String>,
) -> SortSpec
where
    S: SortStateStore + ?Sized,
{
    let persisted_spec = store.load(session, resolver.view());
    let input = RequestSortInput::new(requested_column_key, persisted_spec);
    let current = resolver.resolve(&input);
    store.save(session, resolver.view(), &current);
    current
}
