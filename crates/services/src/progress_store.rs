use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use storage::repository::KeyValueRepository;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, warn};
use workshop_core::model::{Progress, StepId};

/// Storage key holding the JSON-encoded progress map.
pub const PROGRESS_KEY: &str = "workshop-progress";

type Observer = Arc<dyn Fn(&Progress) + Send + Sync>;

/// Handle returned by [`ProgressStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Durable step-completion map with write-through persistence.
///
/// Reads and writes never fail towards the caller: unreadable data loads as
/// empty progress and failed writes are logged while the in-memory value stays
/// authoritative for the rest of the session.
///
/// Mutations are serialized through `writes` and held until the write-through
/// finishes, so storage always sees them in mutation order.
pub struct ProgressStore {
    repo: Arc<dyn KeyValueRepository>,
    writes: AsyncMutex<()>,
    state: Mutex<Progress>,
    observers: Mutex<Vec<(SubscriptionId, Observer)>>,
    next_subscription: AtomicU64,
}

impl ProgressStore {
    /// Creates a store with empty in-memory progress. Call [`ProgressStore::load`]
    /// (or use [`ProgressStore::open`]) to read persisted data.
    #[must_use]
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self {
        Self {
            repo,
            writes: AsyncMutex::new(()),
            state: Mutex::new(Progress::new()),
            observers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
        }
    }

    /// Creates a store and loads persisted progress into it.
    pub async fn open(repo: Arc<dyn KeyValueRepository>) -> Self {
        let store = Self::new(repo);
        store.load().await;
        store
    }

    /// Reads persisted progress, replacing the in-memory map.
    ///
    /// Missing, unreadable or malformed data yields empty progress.
    pub async fn load(&self) -> Progress {
        let _write = self.writes.lock().await;
        let progress = match self.repo.get(PROGRESS_KEY).await {
            Ok(Some(raw)) => serde_json::from_str::<Progress>(&raw).unwrap_or_else(|err| {
                warn!(error = %err, "discarding malformed persisted progress");
                Progress::new()
            }),
            Ok(None) => Progress::new(),
            Err(err) => {
                warn!(error = %err, "failed to read persisted progress");
                Progress::new()
            }
        };

        *self.lock_state() = progress.clone();
        debug!(completed = progress.completed_count(), "progress loaded");
        self.notify(&progress);
        progress
    }

    /// Current in-memory progress.
    #[must_use]
    pub fn snapshot(&self) -> Progress {
        self.lock_state().clone()
    }

    /// Flips completion of `step_id` and writes the full map through to storage.
    ///
    /// The write has finished (or failed and been logged) when this returns.
    pub async fn toggle(&self, step_id: &StepId) -> Progress {
        let _write = self.writes.lock().await;
        let (progress, completed) = {
            let mut state = self.lock_state();
            let completed = state.toggle(step_id);
            (state.clone(), completed)
        };
        debug!(step = %step_id, completed, "step toggled");

        self.notify(&progress);
        self.persist(&progress).await;
        progress
    }

    /// Clears progress in memory and removes the persisted key.
    pub async fn reset(&self) -> Progress {
        let _write = self.writes.lock().await;
        let progress = Progress::new();
        *self.lock_state() = progress.clone();
        self.notify(&progress);

        if let Err(err) = self.repo.remove(PROGRESS_KEY).await {
            warn!(error = %err, "failed to clear persisted progress");
        }
        progress
    }

    /// Registers a callback invoked after every change with the new progress.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&Progress) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.lock_observers().push((id, Arc::new(observer)));
        id
    }

    /// Removes a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.lock_observers();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    async fn persist(&self, progress: &Progress) {
        let encoded = match serde_json::to_string(progress) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(error = %err, "failed to encode progress");
                return;
            }
        };
        if let Err(err) = self.repo.put(PROGRESS_KEY, &encoded).await {
            warn!(error = %err, "failed to persist progress; keeping in-memory state");
        }
    }

    fn notify(&self, progress: &Progress) {
        // Snapshot first so observers may (un)subscribe while being called.
        let observers: Vec<Observer> = self
            .lock_observers()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer(progress);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, Progress> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_observers(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Observer)>> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;

    #[tokio::test]
    async fn unsubscribe_stops_notifications() {
        let store = ProgressStore::new(Arc::new(InMemoryRepository::new()));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |p: &Progress| {
            sink.lock().unwrap().push(p.completed_count());
        });

        store.toggle(&StepId::new("a1")).await;
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.toggle(&StepId::new("b1")).await;

        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn new_store_starts_empty_until_loaded() {
        let repo = InMemoryRepository::new().with_entry(PROGRESS_KEY, r#"{"a1":true}"#);
        let store = ProgressStore::new(Arc::new(repo));
        assert!(store.snapshot().is_empty());

        store.load().await;
        assert!(store.snapshot().is_complete(&StepId::new("a1")));
    }
}
