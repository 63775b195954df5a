//! Error types
//!
//! Setup failures are fatal and end the process with a non-zero status.
//! A full obstacle pool is an expected outcome and is silently dropped by the
//! spawner. Losing a round is not an error at all (see `sim::RoundOutcome`).

use std::fmt;
use std::path::PathBuf;

/// Returned by `ObstaclePool::create`/`insert` when every slot is in use
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolFull;

impl fmt::Display for PoolFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obstacle pool is full")
    }
}

impl std::error::Error for PoolFull {}

/// Why an image asset could not be turned into a texture
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetError {
    Unreadable(String),
    NotPng,
    TruncatedHeader { len: usize },
    ZeroDimension { width: u32, height: u32 },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(reason) => write!(f, "unreadable: {reason}"),
            Self::NotPng => write!(f, "not a PNG image"),
            Self::TruncatedHeader { len } => {
                write!(f, "truncated image header: {len} bytes")
            }
            Self::ZeroDimension { width, height } => {
                write!(f, "image has zero dimension: {width}x{height}")
            }
        }
    }
}

/// Fatal startup failure
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// Display/terminal/context could not be initialized
    Init { stage: &'static str, message: String },
    /// A sprite could not be loaded
    AssetLoad { path: PathBuf, reason: AssetError },
    /// Tuning values that would break the simulation
    InvalidTuning(String),
}

impl SetupError {
    pub fn init(stage: &'static str, err: impl fmt::Display) -> Self {
        Self::Init {
            stage,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init { stage, message } => write!(f, "{stage}: {message}"),
            Self::AssetLoad { path, reason } => {
                write!(f, "failed to load {}: {reason}", path.display())
            }
            Self::InvalidTuning(reason) => write!(f, "invalid tuning: {reason}"),
        }
    }
}

impl std::error::Error for SetupError {}
