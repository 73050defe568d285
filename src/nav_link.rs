//! The `NavLink` component.
//!
//! A [`NavLink`] is a configuration value: build it once, then call
//! [`render`](NavLink::render) on every frame with the current location. The
//! result is a [`RenderedLink`] holding the container [`Element`], the
//! derived active flag, the chosen [`LinkShape`] and the
//! [`ActivationHandler`] to run on click.
//!
//! Shape selection, first match wins:
//!
//! | Condition                        | Shape       | Tag    |
//! |----------------------------------|-------------|--------|
//! | `disabled` or `!redirection`     | `Inert`     | `span` |
//! | `external`                       | `External`  | `a`    |
//! | otherwise                        | `Internal`  | `a`    |
//!
//! # Examples
//!
//! ```
//! use gpui_navlink::{MatchMode, MemoryRouter, NavLink, NavigationDirection};
//!
//! let link = NavLink::new("/about")
//!     .match_mode(MatchMode::Exact)
//!     .class_name("menu-item")
//!     .child("About");
//!
//! let mut router = MemoryRouter::new();
//! let rendered = link.render(&router);
//! assert!(!rendered.is_active());
//! assert_eq!(rendered.element().get_attr("class"), Some("menu-item nav_links"));
//!
//! rendered.click(&mut router);
//! assert_eq!(router.paths_with(NavigationDirection::Push), ["/about"]);
//! assert!(link.render(&router).is_active());
//! ```

use crate::content::{resolve_children, LinkChildren};
use crate::dispatch::{ActivationEvent, ActivationHandler, ClickCallback, DispatchOutcome};
use crate::element::{Element, Node, StyleMap};
use crate::matching::{self, MatchMode};
use crate::router::{Location, Router};
use crate::trace_log;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Class appended to every rendered link.
pub const NAV_LINKS_CLASS: &str = "nav_links";

/// Default class for the active state.
pub const DEFAULT_ACTIVE_CLASS: &str = "active";

/// Hints forwarded to whatever renders an internal link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkHints {
    /// Navigation will replace the current history entry.
    pub replace: bool,
    /// Scroll to the top after navigating.
    pub scroll: bool,
    /// The target may be prefetched.
    pub prefetch: bool,
}

/// The container shape chosen for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkShape {
    /// Non-interactive `span`.
    Inert,
    /// Outbound `a` opening in a new context.
    External,
    /// Client-side navigable `a`.
    Internal(LinkHints),
}

impl LinkShape {
    pub fn is_inert(self) -> bool {
        matches!(self, LinkShape::Inert)
    }
}

/// Navigation link configuration.
#[derive(Clone)]
pub struct NavLink {
    to: String,
    custom_active_url: Option<String>,
    match_mode: MatchMode,
    redirection: bool,
    replace: bool,
    scroll: bool,
    prefetch: bool,
    external: bool,
    disabled: bool,
    class_name: String,
    active_class_name: String,
    inactive_class_name: String,
    active_style: Option<StyleMap>,
    inactive_style: Option<StyleMap>,
    aria: BTreeMap<String, String>,
    test_id: Option<String>,
    id: Option<String>,
    on_click: Option<ClickCallback>,
    children: LinkChildren,
}

impl NavLink {
    /// Create a link to `to` with default settings.
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            custom_active_url: None,
            match_mode: MatchMode::default(),
            redirection: true,
            replace: false,
            scroll: true,
            prefetch: true,
            external: false,
            disabled: false,
            class_name: String::new(),
            active_class_name: DEFAULT_ACTIVE_CLASS.to_string(),
            inactive_class_name: String::new(),
            active_style: None,
            inactive_style: None,
            aria: BTreeMap::new(),
            test_id: None,
            id: None,
            on_click: None,
            children: LinkChildren::Empty,
        }
    }

    /// Match against `url` instead of the target.
    pub fn custom_active_url(mut self, url: impl Into<String>) -> Self {
        self.custom_active_url = Some(url.into());
        self
    }

    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Set the match mode by name; unknown names mean `includes`.
    pub fn match_mode_str(self, mode: &str) -> Self {
        self.match_mode(MatchMode::parse_lossy(mode))
    }

    /// Whether clicking navigates. When off, the link renders inert.
    pub fn redirection(mut self, redirection: bool) -> Self {
        self.redirection = redirection;
        self
    }

    /// Replace the current history entry instead of pushing.
    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    pub fn scroll(mut self, scroll: bool) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn prefetch(mut self, prefetch: bool) -> Self {
        self.prefetch = prefetch;
        self
    }

    /// Render as an outbound link that opens in a new context.
    pub fn external(mut self, external: bool) -> Self {
        self.external = external;
        self
    }

    /// Render inert and ignore all activations.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Classes applied in every state.
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = class.into();
        self
    }

    /// Class applied while active. Defaults to `active`.
    pub fn active_class_name(mut self, class: impl Into<String>) -> Self {
        self.active_class_name = class.into();
        self
    }

    /// Class applied while inactive.
    pub fn inactive_class_name(mut self, class: impl Into<String>) -> Self {
        self.inactive_class_name = class.into();
        self
    }

    /// Alias of [`inactive_class_name`](Self::inactive_class_name).
    pub fn conditional_class_name(self, class: impl Into<String>) -> Self {
        self.inactive_class_name(class)
    }

    pub fn active_style(mut self, style: StyleMap) -> Self {
        self.active_style = Some(style);
        self
    }

    pub fn inactive_style(mut self, style: StyleMap) -> Self {
        self.inactive_style = Some(style);
        self
    }

    /// Add an accessibility attribute. `label` and `aria-label` are the same key.
    pub fn aria(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let name = if name.starts_with("aria-") {
            name
        } else {
            format!("aria-{}", name)
        };
        self.aria.insert(name, value.into());
        self
    }

    /// Rendered as `data-testid`.
    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Run `callback` on every activation of a non-disabled link.
    pub fn on_click(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(callback));
        self
    }

    /// Set the content.
    pub fn children(mut self, children: impl Into<LinkChildren>) -> Self {
        self.children = children.into();
        self
    }

    /// Set static content.
    pub fn child(self, child: impl Into<Node>) -> Self {
        self.children(LinkChildren::Static(child.into()))
    }

    /// Compute the content from the active flag on each render.
    pub fn render_children(self, render: impl Fn(bool) -> Node + 'static) -> Self {
        self.children(LinkChildren::computed(render))
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn get_match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_external(&self) -> bool {
        self.external
    }

    /// Path used for active matching.
    pub fn comparison_path(&self) -> &str {
        matching::comparison_path(&self.to, self.custom_active_url.as_deref())
    }

    /// Whether this link is active at `current_path`.
    pub fn is_active_at(&self, current_path: &str) -> bool {
        matching::is_active(
            current_path,
            &self.to,
            self.custom_active_url.as_deref(),
            self.match_mode,
        )
    }

    /// Shape this link renders as. Disabled wins over external.
    pub fn shape(&self) -> LinkShape {
        if self.disabled || !self.redirection {
            LinkShape::Inert
        } else if self.external {
            LinkShape::External
        } else {
            LinkShape::Internal(LinkHints {
                replace: self.replace,
                scroll: self.scroll,
                prefetch: self.prefetch,
            })
        }
    }

    /// Click handler for this configuration.
    pub fn handler(&self) -> ActivationHandler {
        ActivationHandler {
            to: self.to.clone(),
            disabled: self.disabled,
            external: self.external,
            redirection: self.redirection,
            replace: self.replace,
            on_click: self.on_click.clone(),
        }
    }

    /// Render at the location reported by `location`.
    pub fn render<L: Location + ?Sized>(&self, location: &L) -> RenderedLink {
        let is_active = location.is_active(
            &self.to,
            self.custom_active_url.as_deref(),
            self.match_mode,
        );
        self.render_with_state(is_active)
    }

    /// Render at `current_path`.
    pub fn render_at(&self, current_path: &str) -> RenderedLink {
        let is_active = self.is_active_at(current_path);
        self.render_with_state(is_active)
    }

    /// Render with an already-computed active flag.
    pub fn render_with_state(&self, is_active: bool) -> RenderedLink {
        let shape = self.shape();
        trace_log!(
            "Rendering NavLink '{}' as {:?} (active: {})",
            self.to,
            shape,
            is_active
        );

        let tag = if shape.is_inert() { "span" } else { "a" };
        let mut element = Element::new(tag)
            .attr("class", self.class_list(is_active))
            .attr("aria-disabled", self.disabled.to_string())
            .attr_opt("id", self.id.clone())
            .attr_opt("data-testid", self.test_id.clone());

        for (name, value) in &self.aria {
            element = element.attr(name.clone(), value.clone());
        }

        let style = if is_active {
            self.active_style.clone()
        } else {
            self.inactive_style.clone()
        };
        if let Some(style) = style {
            element = element.style(style);
        }

        element = match shape {
            LinkShape::Inert => element,
            LinkShape::External => element
                .attr("href", self.to.clone())
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer"),
            LinkShape::Internal(_) => element.attr("href", self.to.clone()),
        };

        let element = element.child(resolve_children(&self.children, is_active));

        RenderedLink {
            element,
            is_active,
            shape,
            handler: self.handler(),
        }
    }

    /// `"<class> <active|inactive class> nav_links"` without empty parts.
    fn class_list(&self, is_active: bool) -> String {
        let state_class = if is_active {
            &self.active_class_name
        } else {
            &self.inactive_class_name
        };
        [self.class_name.trim(), state_class.trim(), NAV_LINKS_CLASS]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Debug for NavLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavLink")
            .field("to", &self.to)
            .field("custom_active_url", &self.custom_active_url)
            .field("match_mode", &self.match_mode)
            .field("redirection", &self.redirection)
            .field("replace", &self.replace)
            .field("external", &self.external)
            .field("disabled", &self.disabled)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

/// Output of one [`NavLink::render`] pass.
#[derive(Debug, Clone)]
pub struct RenderedLink {
    element: Element,
    is_active: bool,
    shape: LinkShape,
    handler: ActivationHandler,
}

impl RenderedLink {
    /// The container element.
    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn into_element(self) -> Element {
        self.element
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn shape(&self) -> LinkShape {
        self.shape
    }

    pub fn handler(&self) -> &ActivationHandler {
        &self.handler
    }

    /// Rendered content without the container.
    pub fn content(&self) -> &Node {
        &self.element.children()[0]
    }

    /// Dispatch `event` through the link's click handler.
    pub fn activate(
        &self,
        event: &mut ActivationEvent,
        router: &mut dyn Router,
    ) -> DispatchOutcome {
        self.handler.activate(event, router)
    }

    /// Simulate a pointer click.
    pub fn click(&self, router: &mut dyn Router) -> DispatchOutcome {
        self.activate(&mut ActivationEvent::pointer(), router)
    }

    /// Simulate keyboard activation.
    pub fn press_key(&self, router: &mut dyn Router) -> DispatchOutcome {
        self.activate(&mut ActivationEvent::keyboard(), router)
    }

    /// Serialise the container to HTML.
    pub fn to_html(&self) -> String {
        self.element.to_html()
    }
}
