//! Collision and probe counts across a range of load factors.

use log::debug;
use rand::Rng;

use crate::dispatch::{run, Method};
use crate::error::Result;
use crate::stats::Stats;
use crate::workload::{generate_keys, keys_for_load_factor, Distribution};
use crate::TABLE_SIZE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub load_factor: f64,
    pub stats: Stats,
}

impl CurvePoint {
    /// Probes per slot the load factor asks for, rather than per accepted key,
    /// so duplicate-heavy workloads are not flattered.
    pub fn average_probes(&self) -> f64 {
        self.stats.total_probes as f64 / (TABLE_SIZE as f64 * self.load_factor)
    }
}

/// 0.1, 0.2, ..., 0.9
pub fn default_load_factors() -> Vec<f64> {
    (1..10).map(|x| x as f64 / 10.0).collect()
}

/// Runs one fresh batch per load factor, each with newly generated keys.
pub fn load_curve<R: Rng + ?Sized>(
    method: Method,
    distribution: Distribution,
    load_factors: &[f64],
    rng: &mut R,
) -> Result<Vec<CurvePoint>> {
    load_factors
        .iter()
        .map(|&load_factor| {
            let n = keys_for_load_factor(load_factor)?;
            let keys = generate_keys(n, distribution, rng)?;
            let stats = run(&keys, method);
            debug!("{method} {distribution} lf={load_factor:.1}: {stats}");
            Ok(CurvePoint { load_factor, stats })
        })
        .collect()
}
