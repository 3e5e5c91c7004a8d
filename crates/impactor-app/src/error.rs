//! Host error type.

use thiserror::Error;

use impactor_neo::NeoError;
use impactor_sim::LaunchError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("simulation already running")]
    AlreadyRunning,

    #[error("simulation not started")]
    NotStarted,

    #[error("frame loop is no longer receiving commands")]
    ChannelClosed,

    #[error("frame loop thread panicked")]
    FrameLoopPanicked,

    #[error("shared state lock poisoned")]
    LockPoisoned,

    #[error("failed to spawn frame loop: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("launch refused: {0}")]
    Launch(#[from] LaunchError),

    #[error("no impact within {0:.1} s of simulated time")]
    NoImpact(f64),

    #[error(transparent)]
    Neo(#[from] NeoError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        AppError::LockPoisoned
    }
}
