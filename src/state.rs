// src/state.rs
use crate::domain::Dataset;
use crate::sources::{load_dataset, BusinessSource, LoadOutcome, LoadStatus};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::thread::JoinHandle;

struct Snapshot {
    dataset: Arc<Dataset>,
    status: LoadStatus,
    generation: u64,
}

/// What a request renders from. Cloning is an `Arc` bump.
#[derive(Clone)]
pub struct Current {
    pub dataset: Arc<Dataset>,
    pub status: LoadStatus,
}

/// Issued when a load starts; only the newest ticket may install its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadTicket(u64);

/// Owns the one in-memory directory for this process.
pub struct DirectoryState {
    snapshot: RwLock<Snapshot>,
    started: AtomicU64,
    /// Set while a background reload thread is running.
    reloading: AtomicBool,
}

/// Clears `reloading` when the background thread ends, panicking or not.
struct InFlight(Arc<DirectoryState>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.reloading.store(false, Ordering::SeqCst);
    }
}

impl DirectoryState {
    pub fn new(initial: LoadOutcome) -> Self {
        Self {
            snapshot: RwLock::new(Snapshot {
                dataset: Arc::new(initial.dataset),
                status: initial.status,
                generation: 0,
            }),
            started: AtomicU64::new(0),
            reloading: AtomicBool::new(false),
        }
    }

    pub fn current(&self) -> Current {
        let snap = self.snapshot.read().unwrap_or_else(|p| p.into_inner());
        Current {
            dataset: Arc::clone(&snap.dataset),
            status: snap.status.clone(),
        }
    }

    pub fn begin_reload(&self) -> ReloadTicket {
        ReloadTicket(self.started.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Swaps in `outcome` unless a newer load has been started since `ticket`.
    /// Returns whether the snapshot was replaced.
    pub fn install(&self, ticket: ReloadTicket, outcome: LoadOutcome) -> bool {
        let mut snap = self.snapshot.write().unwrap_or_else(|p| p.into_inner());

        let newest = self.started.load(Ordering::SeqCst);
        if ticket.0 != newest || ticket.0 <= snap.generation {
            log::warn!(
                "discarding stale reload #{} (newest started #{newest}, installed #{})",
                ticket.0,
                snap.generation
            );
            return false;
        }

        log::info!("installing reload #{} ({:?})", ticket.0, outcome.status);
        *snap = Snapshot {
            dataset: Arc::new(outcome.dataset),
            status: outcome.status,
            generation: ticket.0,
        };
        true
    }

    /// Loads on a background thread; readers keep the last snapshot meanwhile.
    /// Returns `None` without starting anything while another background reload runs.
    pub fn spawn_reload(self: &Arc<Self>, source: Arc<dyn BusinessSource>) -> Option<JoinHandle<bool>> {
        if self
            .reloading
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            log::info!("reload already in flight, not starting another");
            return None;
        }

        let guard = InFlight(Arc::clone(self));
        let ticket = self.begin_reload();
        log::info!("reload #{} started from {}", ticket.0, source.name());

        Some(std::thread::spawn(move || {
            let outcome = load_dataset(source.as_ref());
            guard.0.install(ticket, outcome)
        }))
    }
}
