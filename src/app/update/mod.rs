use std::time::Duration;

mod appearance;
mod cards;
mod catalog;
mod core;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    LoadCatalog {
        source: String,
        retries: u32,
        backoff: Duration,
    },
    ScheduleBatch {
        delay: Duration,
    },
    StartTapTimer {
        token: u64,
        delay: Duration,
    },
    LoadCover {
        source: String,
    },
    OpenExternal(String),
}
