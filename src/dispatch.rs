//! Click handling for rendered links.
//!
//! [`ActivationHandler::activate`] runs four gates in order, each one final:
//!
//! 1. **Disabled**: prevent the default action and stop. The `on_click`
//!    callback does not run.
//! 2. **Callback**: run `on_click`, if any.
//! 3. **Redirection off or external**: stop. Inert links have no default
//!    behavior; external links keep theirs (open the URL).
//! 4. **Navigate**: prevent the default action, then `replace` or `push`
//!    the target through the [`Router`].
//!
//! Pointer and keyboard activations go through the same gates, so a disabled
//! link cannot be triggered from the keyboard either.

use crate::error::NavigationError;
use crate::router::Router;
use crate::state::NavigationDirection;
use crate::{debug_log, error_log};
use std::fmt;
use std::rc::Rc;

/// Callback run on every non-disabled activation, before navigation.
pub type ClickCallback = Rc<dyn Fn()>;

/// Where an activation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationSource {
    Pointer,
    Keyboard,
}

/// A single activation of a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationEvent {
    source: ActivationSource,
    default_prevented: bool,
}

impl ActivationEvent {
    /// A mouse or touch click.
    pub fn pointer() -> Self {
        Self::new(ActivationSource::Pointer)
    }

    /// Enter pressed while the link had focus.
    pub fn keyboard() -> Self {
        Self::new(ActivationSource::Keyboard)
    }

    pub fn new(source: ActivationSource) -> Self {
        Self {
            source,
            default_prevented: false,
        }
    }

    pub fn source(&self) -> ActivationSource {
        self.source
    }

    /// Stop the host from performing its default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What an activation ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The link is disabled; nothing ran.
    Suppressed,
    /// External link; the host should follow the href itself.
    FollowExternal,
    /// Redirection is off; only the callback ran.
    Inert,
    /// The router moved in the given direction.
    Navigated(NavigationDirection),
    /// The router refused the navigation.
    Failed(NavigationError),
}

impl DispatchOutcome {
    /// Whether push or replace was attempted.
    pub fn attempted_navigation(&self) -> bool {
        matches!(
            self,
            DispatchOutcome::Navigated(_) | DispatchOutcome::Failed(_)
        )
    }
}

/// The click handler attached to a rendered link.
#[derive(Clone)]
pub struct ActivationHandler {
    pub(crate) to: String,
    pub(crate) disabled: bool,
    pub(crate) external: bool,
    pub(crate) redirection: bool,
    pub(crate) replace: bool,
    pub(crate) on_click: Option<ClickCallback>,
}

impl ActivationHandler {
    /// Target path navigated to.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Run the gates for one activation.
    pub fn activate(
        &self,
        event: &mut ActivationEvent,
        router: &mut dyn Router,
    ) -> DispatchOutcome {
        if self.disabled {
            event.prevent_default();
            debug_log!(
                "NavLink '{}' is disabled; {:?} activation suppressed",
                self.to,
                event.source()
            );
            return DispatchOutcome::Suppressed;
        }

        if let Some(on_click) = &self.on_click {
            on_click();
        }

        if !self.redirection {
            debug_log!("NavLink '{}' has redirection off", self.to);
            return DispatchOutcome::Inert;
        }
        if self.external {
            debug_log!("NavLink '{}' is external; following href", self.to);
            return DispatchOutcome::FollowExternal;
        }

        event.prevent_default();
        let result = if self.replace {
            router.replace(&self.to)
        } else {
            router.push(&self.to)
        };

        match result {
            Ok(change) => DispatchOutcome::Navigated(change.direction),
            Err(err) => {
                error_log!("NavLink '{}' failed to navigate: {}", self.to, err);
                DispatchOutcome::Failed(err)
            }
        }
    }
}

impl fmt::Debug for ActivationHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivationHandler")
            .field("to", &self.to)
            .field("disabled", &self.disabled)
            .field("external", &self.external)
            .field("redirection", &self.redirection)
            .field("replace", &self.replace)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}
