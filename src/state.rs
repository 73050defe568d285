//! History stack shared by the in-memory and GPUI routers.

use std::fmt;

/// How a navigation moved through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationDirection {
    /// A new entry was pushed; forward history was discarded.
    Push,
    /// The current entry was overwritten.
    Replace,
    /// Moved one entry back.
    Back,
    /// Moved one entry forward.
    Forward,
}

impl fmt::Display for NavigationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NavigationDirection::Push => "push",
            NavigationDirection::Replace => "replace",
            NavigationDirection::Back => "back",
            NavigationDirection::Forward => "forward",
        };
        f.write_str(name)
    }
}

/// Emitted by every successful history change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChangeEvent {
    /// Location before the change.
    pub from: Option<String>,
    /// Location after the change.
    pub to: String,
    /// What kind of change it was.
    pub direction: NavigationDirection,
}

/// Browser-style history: a list of visited paths and a cursor into it.
///
/// The stack is never empty; it starts with `/` unless constructed with
/// [`with_initial`](Self::with_initial).
#[derive(Debug, Clone)]
pub struct RouterState {
    history: Vec<String>,
    current: usize,
}

impl RouterState {
    /// Create a history whose only entry is `/`.
    pub fn new() -> Self {
        Self::with_initial("/")
    }

    /// Create a history whose only entry is `path`.
    pub fn with_initial(path: impl Into<String>) -> Self {
        Self {
            history: vec![path.into()],
            current: 0,
        }
    }

    /// Path at the cursor.
    pub fn current_path(&self) -> &str {
        &self.history[self.current]
    }

    /// Every entry, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Navigate to a new path, dropping any forward entries.
    pub fn push(&mut self, path: String) -> RouteChangeEvent {
        let from = Some(self.current_path().to_string());

        self.history.truncate(self.current + 1);
        self.history.push(path.clone());
        self.current += 1;

        RouteChangeEvent {
            from,
            to: path,
            direction: NavigationDirection::Push,
        }
    }

    /// Overwrite the current entry.
    pub fn replace(&mut self, path: String) -> RouteChangeEvent {
        let from = Some(self.current_path().to_string());

        self.history[self.current] = path.clone();

        RouteChangeEvent {
            from,
            to: path,
            direction: NavigationDirection::Replace,
        }
    }

    /// Step back one entry, or `None` at the start of history.
    pub fn back(&mut self) -> Option<RouteChangeEvent> {
        if self.current == 0 {
            return None;
        }
        let from = Some(self.current_path().to_string());
        self.current -= 1;

        Some(RouteChangeEvent {
            from,
            to: self.current_path().to_string(),
            direction: NavigationDirection::Back,
        })
    }

    /// Step forward one entry, or `None` at the end of history.
    pub fn forward(&mut self) -> Option<RouteChangeEvent> {
        if !self.can_go_forward() {
            return None;
        }
        let from = Some(self.current_path().to_string());
        self.current += 1;

        Some(RouteChangeEvent {
            from,
            to: self.current_path().to_string(),
            direction: NavigationDirection::Forward,
        })
    }

    /// Check if [`back`](Self::back) would succeed.
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Check if [`forward`](Self::forward) would succeed.
    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.history.len()
    }
}

impl Default for RouterState {
    fn default() -> Self {
        Self::new()
    }
}
