use std::fmt;

use crate::Key;

/// Result of a single insert call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The key was already present; nothing was overwritten.
    Duplicate,
    /// Every slot was examined without finding a free one. Probing only.
    TableFull,
}

/// Aggregate counters for one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total_inserts: usize,
    pub total_collisions: usize,
    /// Always 0 for separate chaining.
    pub total_probes: usize,
}

impl Stats {
    pub fn average_probes(&self) -> f64 {
        if self.total_inserts == 0 {
            return 0.0;
        }
        self.total_probes as f64 / self.total_inserts as f64
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "inserts={} collisions={} probes={}",
            self.total_inserts, self.total_collisions, self.total_probes
        )
    }
}

/// A fixed-capacity table the dispatcher can drive.
///
/// The counters a table keeps while inserting are its statistics, `stats`
/// only snapshots them.
pub trait CollisionTable {
    fn insert(&mut self, key: Key) -> InsertOutcome;

    fn stats(&self) -> Stats;
}
