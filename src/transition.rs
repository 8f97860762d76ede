//! Settlement of host transitions.
//!
//! Hosts animate pushes and pops asynchronously. When a host can report how
//! long its transition takes it returns [`HostTransition::Duration`]; most
//! cannot, and return [`HostTransition::Untracked`], in which case the
//! navigator waits a fixed settle delay (250 ms by default, the length of a
//! standard platform push/pop animation) before reporting completion.

use std::time::Duration;

/// Default time a host transition is assumed to take.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(250);

/// What a host knows about the transition it just started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostTransition {
    /// No completion signal; fall back to the configured settle delay.
    #[default]
    Untracked,

    /// The transition finishes after exactly this long.
    Duration(Duration),
}

impl HostTransition {
    /// A transition that is already over.
    pub fn immediate() -> Self {
        Self::Duration(Duration::ZERO)
    }

    /// Time to wait before the transition counts as settled.
    pub fn settle_after(self, fallback: Duration) -> Duration {
        match self {
            Self::Untracked => fallback,
            Self::Duration(duration) => duration,
        }
    }
}
