//! Shared fixtures for integration tests.
//!
//! Provides a router fake that records every call into a shared journal, so
//! tests can assert on ordering between click callbacks and navigation.

#![allow(dead_code)]

use gpui_navlink::error::NavigationResult;
use gpui_navlink::{Location, NavigationDirection, RouteChangeEvent, Router};
use std::cell::RefCell;
use std::rc::Rc;

/// Ordered log shared between a [`RecordingRouter`] and click callbacks.
pub type Journal = Rc<RefCell<Vec<String>>>;

/// Create an empty journal.
pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

/// Router fake: fixed location, records `push:<path>` / `replace:<path>`.
pub struct RecordingRouter {
    location: String,
    journal: Journal,
}

impl RecordingRouter {
    pub fn at(location: &str) -> Self {
        Self::with_journal(location, journal())
    }

    pub fn with_journal(location: &str, journal: Journal) -> Self {
        Self {
            location: location.to_string(),
            journal,
        }
    }

    /// Every recorded entry, in order.
    pub fn calls(&self) -> Vec<String> {
        self.journal.borrow().clone()
    }

    /// Number of push or replace calls.
    pub fn navigation_count(&self) -> usize {
        self.journal
            .borrow()
            .iter()
            .filter(|entry| entry.starts_with("push:") || entry.starts_with("replace:"))
            .count()
    }

    fn record(&mut self, direction: NavigationDirection, path: &str) -> NavigationResult {
        self.journal
            .borrow_mut()
            .push(format!("{}:{}", direction, path));
        // The location stays fixed so renders after a click stay predictable.
        Ok(RouteChangeEvent {
            from: Some(self.location.clone()),
            to: path.to_string(),
            direction,
        })
    }
}

impl Location for RecordingRouter {
    fn current_path(&self) -> String {
        self.location.clone()
    }
}

impl Router for RecordingRouter {
    fn push(&mut self, path: &str) -> NavigationResult {
        self.record(NavigationDirection::Push, path)
    }

    fn replace(&mut self, path: &str) -> NavigationResult {
        self.record(NavigationDirection::Replace, path)
    }
}

/// Route log output to the test harness; safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
