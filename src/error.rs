use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HashTestError {
    #[error("unrecognized collision method tag {0}")]
    UnrecognizedMethod(i32),
    #[error("unknown collision method `{0}`, expected `linear` or `chaining`")]
    UnknownMethodName(String),
    #[error("unknown key distribution `{0}`, expected `uniform`, `clustered` or `skewed`")]
    UnknownDistribution(String),
    #[error("requested {requested} keys but only {available} were supplied")]
    KeyCountOutOfRange { requested: usize, available: usize },
    #[error("table capacity must be greater than zero")]
    ZeroCapacity,
    #[error("load factor {0} is outside (0, 1]")]
    InvalidLoadFactor(f64),
    #[error("asked for {requested} distinct keys but only {available} exist in the key range")]
    TooManyDistinctKeys { requested: usize, available: usize },
    #[error("invalid key distribution parameters: {0}")]
    DistributionParameters(String),
}

pub type Result<T> = std::result::Result<T, HashTestError>;
