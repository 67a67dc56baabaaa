use crate::error::{HashTestError, Result};
use crate::hash::hash_key;
use crate::stats::{CollisionTable, InsertOutcome, Stats};
use crate::{Key, TABLE_SIZE};

// Each bucket owns its own vector of keys, since we are using Closed
// Addressing. Keys are pushed at the back, so reading a bucket in reverse
// gives the most-recent-first chain order.
type Bucket = Option<Vec<Key>>;

/// Separate chaining over a fixed number of buckets. Never fills up.
///
/// `stat_collisions` counts inserts that landed in a bucket which already
/// held at least one key, no matter how long that chain is.
#[derive(Debug)]
pub struct ChainingTable {
    buckets: Vec<Bucket>,
    count: usize,
    stat_collisions: usize,
}

impl Default for ChainingTable {
    fn default() -> Self {
        Self {
            buckets: vec![None; TABLE_SIZE],
            count: 0,
            stat_collisions: 0,
        }
    }
}

impl ChainingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(HashTestError::ZeroCapacity);
        }
        Ok(Self {
            buckets: vec![None; capacity],
            ..Self::default()
        })
    }

    pub fn insert(&mut self, key: Key) -> InsertOutcome {
        let i = hash_key(key, self.buckets.len());
        match &mut self.buckets[i] {
            Some(keys) if keys.contains(&key) => return InsertOutcome::Duplicate,
            Some(keys) => {
                self.stat_collisions += 1;
                keys.push(key);
            }
            None => self.buckets[i] = Some(vec![key]),
        }
        self.count += 1;
        InsertOutcome::Inserted
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Keys of bucket `i`, most recently inserted first.
    pub fn bucket(&self, i: usize) -> impl Iterator<Item = Key> + '_ {
        self.buckets
            .get(i)
            .and_then(|bucket| bucket.as_ref())
            .into_iter()
            .flat_map(|keys| keys.iter().rev().copied())
    }

    pub fn longest_chain(&self) -> usize {
        self.buckets
            .iter()
            .filter_map(|bucket| bucket.as_ref())
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }
}

impl CollisionTable for ChainingTable {
    fn insert(&mut self, key: Key) -> InsertOutcome {
        ChainingTable::insert(self, key)
    }

    fn stats(&self) -> Stats {
        Stats {
            total_inserts: self.count,
            total_collisions: self.stat_collisions,
            total_probes: 0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insert() {
        let mut h = ChainingTable::new();
        assert_eq!(h.capacity(), TABLE_SIZE);
        assert_eq!(h.insert(5), InsertOutcome::Inserted);
        assert_eq!(h.insert(1014), InsertOutcome::Inserted);
        assert_eq!(h.insert(2023), InsertOutcome::Inserted);

        assert_eq!(h.len(), 3);
        assert_eq!(h.stat_collisions, 2);
        assert_eq!(h.bucket(5).collect::<Vec<_>>(), [2023, 1014, 5]);
        assert_eq!(h.bucket(6).count(), 0);
        assert_eq!(h.longest_chain(), 3);
    }

    #[test]
    fn duplicate_is_not_a_collision() {
        let mut h = ChainingTable::new();
        h.insert(5);
        assert_eq!(h.insert(5), InsertOutcome::Duplicate);
        h.insert(1014);
        assert_eq!(h.insert(5), InsertOutcome::Duplicate);

        assert_eq!(h.len(), 2);
        assert_eq!(h.stat_collisions, 1);
        assert_eq!(h.stats().total_probes, 0);
    }

    #[test]
    fn one_collision_per_insert() {
        let mut h = ChainingTable::with_capacity(1).unwrap();
        for key in 0..6 {
            assert_eq!(h.insert(key), InsertOutcome::Inserted);
        }
        // the first key found an empty bucket, every later one a busy bucket
        assert_eq!(h.stat_collisions, 5);
        assert_eq!(h.bucket(0).collect::<Vec<_>>(), [5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn stress() {
        let mut h = ChainingTable::new();
        for key in 0..5000 {
            assert_eq!(h.insert(key), InsertOutcome::Inserted);
            // insert twice
            assert_eq!(h.insert(key), InsertOutcome::Duplicate);
        }
        assert_eq!(h.len(), 5000);
        assert_eq!(h.stat_collisions, 5000 - TABLE_SIZE);
    }

    #[test]
    fn out_of_range_bucket_is_empty() {
        let h = ChainingTable::new();
        assert_eq!(h.bucket(TABLE_SIZE).count(), 0);
        assert_eq!(h.longest_chain(), 0);
    }
}
