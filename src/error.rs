//! Error handling for the navigator.
//!
//! Commands never fail synchronously. Their outcome reaches the caller
//! through the completion callback as a [`CommandResult`]: `Ok(())` when the
//! host mutation was issued and has settled, `Err(NavigatorError)` otherwise.
//! Only [`Navigator::attach`](crate::Navigator::attach) returns an error
//! directly.
//!
//! # Examples
//!
//! ```
//! use stack_navigator::NavigatorError;
//!
//! let err = NavigatorError::IndexOutOfRange { index: 3, count: 2 };
//! assert!(err.is_invalid_argument());
//! assert_eq!(err.to_string(), "Index 3 out of range for stack of 2 entries");
//! ```

use crate::identity::ScreenId;
use std::fmt;

/// Outcome delivered to every completion callback.
pub type CommandResult = Result<(), NavigatorError>;

/// Reasons a navigator command or attachment can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorError {
    /// A command was issued before [`attach`](crate::Navigator::attach).
    NotAttached,

    /// `attach` was called on a navigator that already has a container.
    AlreadyAttached,

    /// The container handed to `attach` has no root entry.
    EmptyHost,

    /// `pop_to_id` was called with an empty identifier.
    EmptyId,

    /// `pop_to_index` targeted the current top or a position past it.
    IndexOutOfRange { index: usize, count: usize },

    /// No host entry carries the requested identifier.
    NotFound { id: ScreenId },

    /// Another command is still settling and the overlap policy is `Reject`.
    Busy,

    /// The last navigator handle was dropped while the command was queued.
    Cancelled,
}

impl NavigatorError {
    /// Bad input from the caller (empty id, index out of range).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::EmptyId | Self::IndexOutOfRange { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The navigator was used outside its valid lifecycle.
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            Self::NotAttached | Self::AlreadyAttached | Self::EmptyHost | Self::Cancelled
        )
    }
}

impl fmt::Display for NavigatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAttached => write!(f, "Navigator is not attached to a container"),
            Self::AlreadyAttached => write!(f, "Navigator is already attached to a container"),
            Self::EmptyHost => write!(f, "Container has no root entry"),
            Self::EmptyId => write!(f, "A screen identifier is required"),
            Self::IndexOutOfRange { index, count } => {
                write!(
                    f,
                    "Index {} out of range for stack of {} entries",
                    index, count
                )
            }
            Self::NotFound { id } => write!(f, "No screen with identifier {}", id),
            Self::Busy => write!(f, "Another navigation is still settling"),
            Self::Cancelled => write!(f, "Navigator was dropped before the command ran"),
        }
    }
}

impl std::error::Error for NavigatorError {}
