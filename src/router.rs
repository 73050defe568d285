//! Router capability consumed by links.
//!
//! A [`NavLink`](crate::NavLink) never reaches for a global router; it is
//! handed something implementing [`Location`] when rendering and
//! [`Router`] when clicked. Two implementations ship with the crate:
//!
//! - [`MemoryRouter`]: an in-memory history, handy for tests and headless
//!   use. It records every change it makes in [`events`](MemoryRouter::events).
//! - `gpui::App`: forwards to the installed
//!   [`GlobalRouter`](crate::GlobalRouter) (see [`context`](crate::context)).
//!
//! # Examples
//!
//! ```
//! use gpui_navlink::{Location, MemoryRouter, NavigationDirection, Router};
//!
//! let mut router = MemoryRouter::new();
//! router.push("/about").unwrap();
//! router.replace("/contact").unwrap();
//!
//! assert_eq!(router.current_path(), "/contact");
//! assert_eq!(router.events()[1].direction, NavigationDirection::Replace);
//! ```

use crate::error::{NavigationError, NavigationResult};
use crate::info_log;
use crate::matching::{self, MatchMode};
use crate::state::{NavigationDirection, RouteChangeEvent, RouterState};

/// Read access to the current location.
pub trait Location {
    /// The current path, compared literally by the matcher.
    fn current_path(&self) -> String;

    /// Whether a link to `target` is active here.
    ///
    /// Compares against [`current_path`](Self::current_path) on every call.
    /// Locations that can memoize the answer override this.
    fn is_active(&self, target: &str, compare_target: Option<&str>, mode: MatchMode) -> bool {
        matching::is_active(&self.current_path(), target, compare_target, mode)
    }
}

/// Location plus history mutation.
pub trait Router: Location {
    /// Add a history entry for `path` and make it current.
    fn push(&mut self, path: &str) -> NavigationResult;

    /// Overwrite the current history entry with `path`.
    fn replace(&mut self, path: &str) -> NavigationResult;
}

impl Location for str {
    fn current_path(&self) -> String {
        self.to_string()
    }
}

impl Location for String {
    fn current_path(&self) -> String {
        self.clone()
    }
}

impl<L: Location + ?Sized> Location for &L {
    fn current_path(&self) -> String {
        (**self).current_path()
    }

    fn is_active(&self, target: &str, compare_target: Option<&str>, mode: MatchMode) -> bool {
        (**self).is_active(target, compare_target, mode)
    }
}

impl<L: Location + ?Sized> Location for &mut L {
    fn current_path(&self) -> String {
        (**self).current_path()
    }

    fn is_active(&self, target: &str, compare_target: Option<&str>, mode: MatchMode) -> bool {
        (**self).is_active(target, compare_target, mode)
    }
}

impl<R: Router + ?Sized> Router for &mut R {
    fn push(&mut self, path: &str) -> NavigationResult {
        (**self).push(path)
    }

    fn replace(&mut self, path: &str) -> NavigationResult {
        (**self).replace(path)
    }
}

/// In-memory router backed by [`RouterState`].
///
/// Meant for tests and headless sessions; it keeps a log of every change.
#[derive(Debug, Clone, Default)]
pub struct MemoryRouter {
    state: RouterState,
    events: Vec<RouteChangeEvent>,
}

impl MemoryRouter {
    /// Start at `/`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at `path`.
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            state: RouterState::with_initial(path),
            events: Vec::new(),
        }
    }

    /// Step back one entry.
    pub fn back(&mut self) -> NavigationResult {
        let event = self
            .state
            .back()
            .ok_or(NavigationError::HistoryBoundary {
                direction: NavigationDirection::Back,
            })?;
        Ok(self.record(event))
    }

    /// Step forward one entry.
    pub fn forward(&mut self) -> NavigationResult {
        let event = self
            .state
            .forward()
            .ok_or(NavigationError::HistoryBoundary {
                direction: NavigationDirection::Forward,
            })?;
        Ok(self.record(event))
    }

    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.state.can_go_forward()
    }

    /// Every history entry, oldest first.
    pub fn history(&self) -> &[String] {
        self.state.history()
    }

    /// Every change made through this router since the last
    /// [`take_events`](Self::take_events), in order.
    ///
    /// The log grows with each navigation; long-lived routers should drain it.
    pub fn events(&self) -> &[RouteChangeEvent] {
        &self.events
    }

    /// Drain the change log.
    pub fn take_events(&mut self) -> Vec<RouteChangeEvent> {
        std::mem::take(&mut self.events)
    }

    /// Paths navigated to with the given direction, in order.
    pub fn paths_with(&self, direction: NavigationDirection) -> Vec<&str> {
        self.events
            .iter()
            .filter(|event| event.direction == direction)
            .map(|event| event.to.as_str())
            .collect()
    }

    /// Underlying history state.
    pub fn state(&self) -> &RouterState {
        &self.state
    }

    fn record(&mut self, event: RouteChangeEvent) -> RouteChangeEvent {
        info_log!(
            "Navigation {}: '{}' → '{}'",
            event.direction,
            event.from.as_deref().unwrap_or_default(),
            event.to
        );
        self.events.push(event.clone());
        event
    }
}

impl Location for MemoryRouter {
    fn current_path(&self) -> String {
        self.state.current_path().to_string()
    }
}

impl Router for MemoryRouter {
    fn push(&mut self, path: &str) -> NavigationResult {
        let event = self.state.push(path.to_string());
        Ok(self.record(event))
    }

    fn replace(&mut self, path: &str) -> NavigationResult {
        let event = self.state.replace(path.to_string());
        Ok(self.record(event))
    }
}
