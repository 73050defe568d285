//! Error types.
//!
//! Link rendering never fails; the only fallible operations are the ones the
//! router performs on behalf of a click, plus strict [`MatchMode`] parsing.
//!
//! - [`NavigationError`]: why a push/replace/back/forward did not happen.
//! - [`NavigationResult`]: the result every [`Router`] operation returns.
//! - [`ParseMatchModeError`]: returned by `"…".parse::<MatchMode>()`.
//!
//! # Examples
//!
//! ```
//! use gpui_navlink::error::NavigationError;
//! use gpui_navlink::NavigationDirection;
//!
//! let err = NavigationError::HistoryBoundary {
//!     direction: NavigationDirection::Back,
//! };
//! assert_eq!(err.to_string(), "No history entry to go back to");
//! ```
//!
//! [`MatchMode`]: crate::MatchMode
//! [`Router`]: crate::Router

use crate::state::{NavigationDirection, RouteChangeEvent};
use std::fmt;

/// Outcome of a single router operation.
pub type NavigationResult = Result<RouteChangeEvent, NavigationError>;

/// Reasons a router operation can be refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No [`GlobalRouter`](crate::GlobalRouter) has been installed in the app.
    RouterNotInitialized,

    /// `back()` or `forward()` was called at the end of the history stack.
    HistoryBoundary { direction: NavigationDirection },

    /// Custom error raised by a [`Router`](crate::Router) implementation.
    Custom { message: String },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::RouterNotInitialized => {
                write!(f, "Router not initialized; call init_router first")
            }
            NavigationError::HistoryBoundary { direction } => match direction {
                NavigationDirection::Forward => write!(f, "No history entry to go forward to"),
                _ => write!(f, "No history entry to go back to"),
            },
            NavigationError::Custom { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for NavigationError {}

/// A match mode string that is not one of `exact`, `startsWith`, `includes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMatchModeError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseMatchModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown match mode '{}' (expected exact, startsWith or includes)",
            self.input
        )
    }
}

impl std::error::Error for ParseMatchModeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_not_initialized_display() {
        let error = NavigationError::RouterNotInitialized;
        assert_eq!(
            error.to_string(),
            "Router not initialized; call init_router first"
        );
    }

    #[test]
    fn test_history_boundary_display() {
        let back = NavigationError::HistoryBoundary {
            direction: NavigationDirection::Back,
        };
        let forward = NavigationError::HistoryBoundary {
            direction: NavigationDirection::Forward,
        };
        assert_eq!(back.to_string(), "No history entry to go back to");
        assert_eq!(forward.to_string(), "No history entry to go forward to");
    }

    #[test]
    fn test_custom_display() {
        let error = NavigationError::Custom {
            message: "offline".to_string(),
        };
        assert_eq!(error.to_string(), "offline");
    }

    #[test]
    fn test_parse_error_display() {
        let error = ParseMatchModeError {
            input: "fuzzy".to_string(),
        };
        assert!(error.to_string().contains("'fuzzy'"));
    }
}
