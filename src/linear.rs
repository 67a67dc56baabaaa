use log::trace;

use crate::error::{HashTestError, Result};
use crate::hash::hash_key;
use crate::stats::{CollisionTable, InsertOutcome, Stats};
use crate::{Key, TABLE_SIZE};

/// Open addressing with linear, wrap-around probing.
///
/// `stat_probes` counts every slot examined by inserts that found either a
/// free slot or the key itself. An insert that runs into a full table adds
/// its collisions but no probes.
#[derive(Debug)]
pub struct LinearProbingTable {
    slots: Vec<Option<Key>>,
    count: usize,
    stat_collisions: usize,
    stat_probes: usize,
}

impl Default for LinearProbingTable {
    fn default() -> Self {
        Self {
            slots: vec![None; TABLE_SIZE],
            count: 0,
            stat_collisions: 0,
            stat_probes: 0,
        }
    }
}

impl LinearProbingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(HashTestError::ZeroCapacity);
        }
        Ok(Self {
            slots: vec![None; capacity],
            ..Self::default()
        })
    }

    pub fn insert(&mut self, key: Key) -> InsertOutcome {
        let capacity = self.slots.len();
        let mut idx = hash_key(key, capacity);
        let mut attempt = 1;

        while let Some(occupant) = self.slots[idx] {
            if occupant == key {
                self.stat_probes += attempt;
                return InsertOutcome::Duplicate;
            }
            self.stat_collisions += 1;
            idx = (idx + 1) % capacity;
            attempt += 1;
            if attempt > capacity {
                trace!("table full, dropping key {key}");
                return InsertOutcome::TableFull;
            }
        }

        self.slots[idx] = Some(key);
        self.count += 1;
        self.stat_probes += attempt;
        InsertOutcome::Inserted
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot contents in index order, `None` for free slots.
    pub fn slots(&self) -> impl Iterator<Item = Option<Key>> + '_ {
        self.slots.iter().copied()
    }
}

impl CollisionTable for LinearProbingTable {
    fn insert(&mut self, key: Key) -> InsertOutcome {
        LinearProbingTable::insert(self, key)
    }

    fn stats(&self) -> Stats {
        Stats {
            total_inserts: self.count,
            total_collisions: self.stat_collisions,
            total_probes: self.stat_probes,
        }
    }
}
