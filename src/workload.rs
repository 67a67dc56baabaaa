//! Key sets for driving the tables at a given load factor.

use std::fmt;
use std::str::FromStr;

use rand::seq::index;
use rand::Rng;
use rand_distr::Exp;

use crate::error::{HashTestError, Result};
use crate::{Key, TABLE_SIZE};

/// Half-width of the window clustered keys are drawn from.
const CLUSTER_SPREAD: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// Distinct keys spread over `1..TABLE_SIZE * 10`.
    Uniform,
    /// Keys packed around `TABLE_SIZE * 5`, so most of them repeat.
    Clustered,
    /// Exponentially distributed keys with mean `TABLE_SIZE / 5`.
    Skewed,
}

impl FromStr for Distribution {
    type Err = HashTestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "uniform" => Ok(Distribution::Uniform),
            "clustered" => Ok(Distribution::Clustered),
            "skewed" => Ok(Distribution::Skewed),
            _ => Err(HashTestError::UnknownDistribution(s.to_string())),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Uniform => write!(f, "Uniform"),
            Distribution::Clustered => write!(f, "Clustered"),
            Distribution::Skewed => write!(f, "Skewed"),
        }
    }
}

/// Number of keys that fills a [`TABLE_SIZE`] table to `load_factor`.
pub fn keys_for_load_factor(load_factor: f64) -> Result<usize> {
    if !(load_factor > 0.0 && load_factor <= 1.0) {
        return Err(HashTestError::InvalidLoadFactor(load_factor));
    }
    Ok((TABLE_SIZE as f64 * load_factor) as usize)
}

/// Draws `n` keys from `distribution`.
///
/// Uniform keys are distinct, so asking for more of them than the key range
/// holds is an error rather than a shorter batch.
pub fn generate_keys<R: Rng + ?Sized>(
    n: usize,
    distribution: Distribution,
    rng: &mut R,
) -> Result<Vec<Key>> {
    match distribution {
        Distribution::Uniform => {
            let span = TABLE_SIZE * 10 - 1;
            if n > span {
                return Err(HashTestError::TooManyDistinctKeys {
                    requested: n,
                    available: span,
                });
            }
            Ok(index::sample(rng, span, n)
                .into_iter()
                .map(|i| (i + 1) as Key)
                .collect())
        }
        Distribution::Clustered => {
            let center = TABLE_SIZE * 5;
            let lo = (center - CLUSTER_SPREAD) as Key;
            let hi = (center + CLUSTER_SPREAD) as Key;
            Ok((0..n).map(|_| rng.gen_range(lo..=hi)).collect())
        }
        Distribution::Skewed => {
            let mean = TABLE_SIZE as f64 / 5.0;
            let exp = Exp::new(1.0 / mean)
                .map_err(|e| HashTestError::DistributionParameters(e.to_string()))?;
            Ok((0..n).map(|_| rng.sample(exp) as Key).collect())
        }
    }
}
