//! Run configuration from positional command-line arguments.

use log::warn;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

pub const DEFAULT_START_POINT: f64 = 10.0;
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_N_ITER: usize = 50;
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid start point {value:?}: {source}. Please ensure that the inputs are of the correct type.")]
    StartPoint {
        value: String,
        source: ParseFloatError,
    },
    #[error("invalid learning rate {value:?}: {source}. Please ensure that the inputs are of the correct type.")]
    LearningRate {
        value: String,
        source: ParseFloatError,
    },
    #[error("invalid iteration count {value:?}: {source}. Please ensure that the inputs are of the correct type.")]
    IterationCount {
        value: String,
        source: ParseIntError,
    },
}

/// Parameters of a single descent run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunConfig {
    pub start_point: f64,
    pub learning_rate: f64,
    pub n_iter: usize,
    pub tolerance: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            start_point: DEFAULT_START_POINT,
            learning_rate: DEFAULT_LEARNING_RATE,
            n_iter: DEFAULT_N_ITER,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl RunConfig {
    /// Reads `[start_point] [learning_rate] [n_iter]`, program name excluded.
    /// Missing arguments fall back to the defaults. A negative iteration
    /// count is accepted and means no steps are taken.
    pub fn from_args<I, S>(args: I) -> Result<RunConfig, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = RunConfig::default();
        let mut args = args.into_iter();

        if let Some(arg) = args.next() {
            let value = arg.as_ref().trim();
            config.start_point = value.parse().map_err(|source| ConfigError::StartPoint {
                value: value.to_string(),
                source,
            })?;
        }
        if let Some(arg) = args.next() {
            let value = arg.as_ref().trim();
            config.learning_rate = value.parse().map_err(|source| ConfigError::LearningRate {
                value: value.to_string(),
                source,
            })?;
        }
        if let Some(arg) = args.next() {
            let value = arg.as_ref().trim();
            let n_iter: i64 = value.parse().map_err(|source| ConfigError::IterationCount {
                value: value.to_string(),
                source,
            })?;
            config.n_iter = if n_iter < 0 { 0 } else { n_iter as usize };
        }

        let surplus = args.count();
        if surplus > 0 {
            warn!("ignoring {} extra argument(s)", surplus);
        }
        Ok(config)
    }
}
