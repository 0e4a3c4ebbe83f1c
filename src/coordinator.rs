//! Process-wide serialization of read-modify-write cycles.

use parking_lot::ReentrantMutex;

/// The exclusive section every store operation runs inside.
///
/// All access to the persisted document (load, mutate, save) happens
/// while holding this section, so no two load-mutate-save sequences can
/// interleave. The section is re-entrant: an operation that invokes
/// another exclusive operation while already holding it (as
/// [`add_enrichment`](crate::service::NoteService::add_enrichment) does
/// when it appends through `add_note`) re-acquires without deadlocking.
/// The guard is released on every exit path, including unwinding.
#[derive(Debug, Default)]
pub struct MutationCoordinator {
    lock: ReentrantMutex<()>,
}

impl MutationCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `operation` inside the exclusive section and returns its
    /// result.
    pub fn run<R>(&self, operation: impl FnOnce() -> R) -> R {
        let _guard = self.lock.lock();
        operation()
    }
}
