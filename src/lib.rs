//! Compares linear probing and separate chaining by inserting the same batch
//! of integer keys into a fixed-size table under each strategy and counting
//! inserts, collisions and probes.

pub mod chaining;
pub mod dispatch;
pub mod error;
pub mod hash;
pub mod linear;
pub mod stats;
pub mod sweep;
pub mod workload;

/// Slots (or buckets) per table. Prime, to spread keys under modulo hashing.
pub const TABLE_SIZE: usize = 1009;

pub type Key = i32;

pub use chaining::ChainingTable;
pub use dispatch::{run, run_checked, run_hash_test, Method};
pub use error::HashTestError;
pub use linear::LinearProbingTable;
pub use stats::{CollisionTable, InsertOutcome, Stats};
