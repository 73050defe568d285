//! GPUI integration.
//!
//! - [`GlobalRouter`]: the history stored as a GPUI `Global`. It also
//!   memoizes active-state lookups when the `cache` feature is on.
//! - [`init_router`]: installs it.
//! - [`Navigator`]: static helpers (`Navigator::push(cx, "/path")`, …) that
//!   navigate and refresh windows.
//! - `impl Router for App`: lets a [`NavLink`](crate::NavLink) click handler
//!   run directly against `cx`. Rendering a link against `cx` answers its
//!   active state through the router's cache.
//!
//! Nothing here panics when the router is missing: reads return an empty
//! path and navigations return
//! [`NavigationError::RouterNotInitialized`].
//!
//! ```ignore
//! use gpui_navlink::{init_router, Navigator};
//!
//! init_router(cx, "/");
//! Navigator::push(cx, "/settings")?;
//! assert_eq!(Navigator::current_path(cx), "/settings");
//! ```

#[cfg(feature = "cache")]
use crate::cache::{ActiveCache, CacheStats};
use crate::error::{NavigationError, NavigationResult};
use crate::matching::{self, MatchMode};
use crate::router::{Location, Router};
use crate::state::{NavigationDirection, RouteChangeEvent, RouterState};
use crate::{info_log, warn_log};
use gpui::{App, BorrowAppContext, Global};
#[cfg(feature = "cache")]
use std::cell::RefCell;

// ============================================================================
// GlobalRouter
// ============================================================================

/// Application-wide history, stored as a GPUI global.
#[derive(Debug, Clone)]
pub struct GlobalRouter {
    state: RouterState,
    #[cfg(feature = "cache")]
    active_cache: RefCell<ActiveCache>,
}

impl GlobalRouter {
    /// Router starting at `/`.
    pub fn new() -> Self {
        Self::with_initial("/")
    }

    /// Router starting at `path`.
    pub fn with_initial(path: impl Into<String>) -> Self {
        Self {
            state: RouterState::with_initial(path),
            #[cfg(feature = "cache")]
            active_cache: RefCell::new(ActiveCache::new()),
        }
    }

    pub fn current_path(&self) -> &str {
        self.state.current_path()
    }

    /// Push `path` as a new history entry.
    pub fn push(&mut self, path: String) -> RouteChangeEvent {
        let event = self.state.push(path);
        self.after_navigation(&event);
        event
    }

    /// Replace the current entry with `path`.
    pub fn replace(&mut self, path: String) -> RouteChangeEvent {
        let event = self.state.replace(path);
        self.after_navigation(&event);
        event
    }

    /// Go back one entry.
    pub fn back(&mut self) -> NavigationResult {
        let event = self.state.back().ok_or(NavigationError::HistoryBoundary {
            direction: NavigationDirection::Back,
        })?;
        self.after_navigation(&event);
        Ok(event)
    }

    /// Go forward one entry.
    pub fn forward(&mut self) -> NavigationResult {
        let event = self.state.forward().ok_or(NavigationError::HistoryBoundary {
            direction: NavigationDirection::Forward,
        })?;
        self.after_navigation(&event);
        Ok(event)
    }

    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.state.can_go_forward()
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    /// Whether a link to `target` is active at the current path.
    pub fn is_active(&self, target: &str, compare_target: Option<&str>, mode: MatchMode) -> bool {
        let against = matching::comparison_path(target, compare_target);
        self.matches_current(against, mode)
    }

    #[cfg(feature = "cache")]
    fn matches_current(&self, against: &str, mode: MatchMode) -> bool {
        self.active_cache
            .borrow_mut()
            .is_active(self.state.current_path(), against, mode)
    }

    #[cfg(not(feature = "cache"))]
    fn matches_current(&self, against: &str, mode: MatchMode) -> bool {
        mode.matches(self.state.current_path(), against)
    }

    /// Active-state cache counters.
    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> CacheStats {
        self.active_cache.borrow().stats().clone()
    }

    fn after_navigation(&mut self, event: &RouteChangeEvent) {
        #[cfg(feature = "cache")]
        self.active_cache.get_mut().clear();

        info_log!(
            "Navigation {}: '{}' → '{}'",
            event.direction,
            event.from.as_deref().unwrap_or_default(),
            event.to
        );
    }
}

impl Default for GlobalRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Global for GlobalRouter {}

/// Install a [`GlobalRouter`] starting at `initial_path`, replacing any
/// existing one.
pub fn init_router(cx: &mut App, initial_path: impl Into<String>) {
    let router = GlobalRouter::with_initial(initial_path);
    info_log!("Router initialized at '{}'", router.current_path());
    cx.set_global(router);
}

// ============================================================================
// Router for App
// ============================================================================

impl Location for App {
    fn current_path(&self) -> String {
        match self.try_global::<GlobalRouter>() {
            Some(router) => router.current_path().to_string(),
            None => {
                warn_log!("current_path read before init_router; treating location as empty");
                String::new()
            }
        }
    }

    fn is_active(&self, target: &str, compare_target: Option<&str>, mode: MatchMode) -> bool {
        match self.try_global::<GlobalRouter>() {
            Some(router) => router.is_active(target, compare_target, mode),
            None => {
                let current = Location::current_path(self);
                matching::is_active(&current, target, compare_target, mode)
            }
        }
    }
}

impl Router for App {
    fn push(&mut self, path: &str) -> NavigationResult {
        navigate(self, |router| Ok(router.push(path.to_string())))
    }

    fn replace(&mut self, path: &str) -> NavigationResult {
        navigate(self, |router| Ok(router.replace(path.to_string())))
    }
}

/// Run `op` against the global router and refresh windows on success.
fn navigate(
    cx: &mut App,
    op: impl FnOnce(&mut GlobalRouter) -> NavigationResult,
) -> NavigationResult {
    if !cx.has_global::<GlobalRouter>() {
        warn_log!("Navigation attempted before init_router");
        return Err(NavigationError::RouterNotInitialized);
    }
    let event = cx.update_global::<GlobalRouter, _>(|router, _cx| op(router))?;
    cx.refresh_windows();
    Ok(event)
}

// ============================================================================
// Navigator
// ============================================================================

/// Static navigation helpers over the global router.
///
/// ```ignore
/// use gpui_navlink::Navigator;
///
/// Navigator::push(cx, "/users/123")?;
/// Navigator::back(cx)?;
/// Navigator::replace(cx, "/login")?;
/// ```
pub struct Navigator;

impl Navigator {
    /// Navigate to a new path.
    pub fn push(cx: &mut App, path: impl Into<String>) -> NavigationResult {
        let path = path.into();
        Router::push(cx, &path)
    }

    /// Replace the current path without adding to history.
    pub fn replace(cx: &mut App, path: impl Into<String>) -> NavigationResult {
        let path = path.into();
        Router::replace(cx, &path)
    }

    /// Go back to the previous path.
    pub fn back(cx: &mut App) -> NavigationResult {
        navigate(cx, GlobalRouter::back)
    }

    /// Go forward in history.
    pub fn forward(cx: &mut App) -> NavigationResult {
        navigate(cx, GlobalRouter::forward)
    }

    /// Current path, or empty before [`init_router`].
    pub fn current_path(cx: &App) -> String {
        Location::current_path(cx)
    }

    pub fn can_go_back(cx: &App) -> bool {
        cx.try_global::<GlobalRouter>()
            .is_some_and(GlobalRouter::can_go_back)
    }

    pub fn can_go_forward(cx: &App) -> bool {
        cx.try_global::<GlobalRouter>()
            .is_some_and(GlobalRouter::can_go_forward)
    }

    /// Whether a link to `target` is active under `mode`.
    pub fn is_active(cx: &App, target: &str, mode: MatchMode) -> bool {
        cx.try_global::<GlobalRouter>()
            .is_some_and(|router| router.is_active(target, None, mode))
    }
}

// ============================================================================
// Tests
// ============================================================================
