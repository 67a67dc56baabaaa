use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::chaining::ChainingTable;
use crate::error::{HashTestError, Result};
use crate::linear::LinearProbingTable;
use crate::stats::{CollisionTable, InsertOutcome, Stats};
use crate::Key;

/// Collision resolution strategy, tagged the way callers across the
/// boundary select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    LinearProbing = 1,
    SeparateChaining = 2,
}

impl Method {
    pub fn tag(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for Method {
    type Error = HashTestError;

    fn try_from(tag: i32) -> Result<Self> {
        match tag {
            1 => Ok(Method::LinearProbing),
            2 => Ok(Method::SeparateChaining),
            other => Err(HashTestError::UnrecognizedMethod(other)),
        }
    }
}

impl FromStr for Method {
    type Err = HashTestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" | "linear-probing" => Ok(Method::LinearProbing),
            "chaining" | "separate-chaining" => Ok(Method::SeparateChaining),
            _ => Err(HashTestError::UnknownMethodName(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::LinearProbing => write!(f, "Linear Probing"),
            Method::SeparateChaining => write!(f, "Separate Chaining"),
        }
    }
}

/// Feeds `keys` to `table` in order and snapshots its counters.
fn run_batch<T: CollisionTable>(mut table: T, keys: &[Key]) -> Stats {
    let mut inserted = 0;
    for &key in keys {
        if table.insert(key) == InsertOutcome::Inserted {
            inserted += 1;
        }
    }
    Stats {
        total_inserts: inserted,
        ..table.stats()
    }
}

/// Inserts every key of `keys` into a fresh table of [`crate::TABLE_SIZE`]
/// slots and returns the batch statistics. The table is dropped before
/// returning.
pub fn run(keys: &[Key], method: Method) -> Stats {
    let stats = match method {
        Method::LinearProbing => run_batch(LinearProbingTable::new(), keys),
        Method::SeparateChaining => run_batch(ChainingTable::new(), keys),
    };
    debug!("{method}: {} keys, {stats}", keys.len());
    stats
}

/// Boundary entry point: processes the first `n` keys with the strategy
/// selected by `method` (1 = linear probing, 2 = separate chaining).
///
/// Any other tag yields zeroed statistics without building a table. Use
/// [`run_checked`] to get that reported as an error instead. `n` larger than
/// `keys.len()` is clamped.
pub fn run_hash_test(keys: &[Key], n: usize, method: i32) -> Stats {
    match Method::try_from(method) {
        Ok(method) => run(&keys[..n.min(keys.len())], method),
        Err(e) => {
            warn!("{e}, returning empty stats");
            Stats::default()
        }
    }
}

/// Like [`run_hash_test`], but rejects unknown method tags and a key count
/// past the end of `keys`.
pub fn run_checked(keys: &[Key], n: usize, method: i32) -> Result<Stats> {
    let method = Method::try_from(method)?;
    if n > keys.len() {
        return Err(HashTestError::KeyCountOutOfRange {
            requested: n,
            available: keys.len(),
        });
    }
    Ok(run(&keys[..n], method))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn method_tags() {
        assert_eq!(Method::try_from(1), Ok(Method::LinearProbing));
        assert_eq!(Method::try_from(2), Ok(Method::SeparateChaining));
        assert_eq!(
            Method::try_from(3),
            Err(HashTestError::UnrecognizedMethod(3))
        );
        assert_eq!(Method::LinearProbing.tag(), 1);
        assert_eq!(Method::SeparateChaining.tag(), 2);
    }

    #[test]
    fn method_names() {
        assert_eq!("linear".parse::<Method>(), Ok(Method::LinearProbing));
        assert_eq!("Chaining".parse::<Method>(), Ok(Method::SeparateChaining));
        assert_eq!(
            "cuckoo".parse::<Method>(),
            Err(HashTestError::UnknownMethodName("cuckoo".to_string()))
        );
    }

    #[test]
    fn only_first_n_keys() {
        let keys = [5, 1014, 2023, 3032];
        let stats = run_hash_test(&keys, 2, Method::LinearProbing.tag());
        assert_eq!(stats.total_inserts, 2);
        assert_eq!(stats.total_collisions, 1);
        assert_eq!(stats.total_probes, 3);
    }

    #[test]
    fn n_past_the_end_is_clamped() {
        let keys = [5, 1014];
        let stats = run_hash_test(&keys, 10, Method::SeparateChaining.tag());
        assert_eq!(stats.total_inserts, 2);
        assert_eq!(
            run_checked(&keys, 10, 2),
            Err(HashTestError::KeyCountOutOfRange {
                requested: 10,
                available: 2
            })
        );
    }

    #[test]
    fn checked_rejects_unknown_tag() {
        assert_eq!(
            run_checked(&[1, 2, 3], 3, 0),
            Err(HashTestError::UnrecognizedMethod(0))
        );
        assert_eq!(run_hash_test(&[1, 2, 3], 3, -7), Stats::default());
    }
}
