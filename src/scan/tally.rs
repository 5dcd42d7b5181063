use std::collections::HashMap;

use parking_lot::Mutex;

/// Shared tally of HTTP status codes seen during one scan.
///
/// Every worker increments it; the coordinator snapshots it once after all
/// workers have joined. The guard is not `Send`, so an increment can never
/// hold the lock across an await point.
pub struct StatusTally {
    counts: Mutex<HashMap<u16, u64>>,
}

impl StatusTally {
    pub fn new() -> Self {
        Self { counts: Mutex::new(HashMap::new()) }
    }

    /// Record one occurrence of `code`. One locked read-modify-write per
    /// completed probe.
    pub fn increment(&self, code: u16) {
        let mut counts = self.counts.lock();
        *counts.entry(code).or_insert(0) += 1;
    }

    /// Copy of the current counts. Only meaningful once every writer has
    /// finished.
    pub fn snapshot(&self) -> HashMap<u16, u64> {
        self.counts.lock().clone()
    }
}

impl Default for StatusTally {
    fn default() -> Self {
        Self::new()
    }
}
