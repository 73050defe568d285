//! GPUI rendering for [`NavLink`].
//!
//! [`RouterNavLink`] renders a link against the [`GlobalRouter`] installed in
//! the app:
//!
//! - the active flag comes from the router's current path;
//! - the content is the link's resolved children;
//! - clicks, and Enter while the link has focus, run the link's
//!   [`ActivationHandler`] against `cx`, so the same disabled / callback /
//!   external / push-or-replace rules apply as in the headless renderer;
//! - external links open through the platform (`App::open_url`) since a GPUI
//!   window has no browser to fall back on.
//!
//! GPUI has no class names or CSS, so visual state is expressed with style
//! refinements, the same way [`Div`] is styled everywhere else.
//!
//! ```ignore
//! RouterNavLink::new(NavLink::new("/settings").child("Settings"))
//!     .focus_handle(self.settings_focus.clone())
//!     .active_style(|div| div.text_color(gpui::rgb(0x2196f3)))
//!     .inactive_style(|div| div.text_color(gpui::rgb(0x333333)))
//!     .build(cx)
//! ```
//!
//! [`GlobalRouter`]: crate::GlobalRouter
//! [`ActivationHandler`]: crate::dispatch::ActivationHandler

use crate::dispatch::{ActivationEvent, DispatchOutcome};
use crate::element::Node;
use crate::nav_link::{NavLink, RenderedLink};
use crate::{debug_log, warn_log};
use gpui::*;

type StyleFn = Box<dyn Fn(Stateful<Div>) -> Stateful<Div>>;

/// A [`NavLink`] rendered as a GPUI element.
pub struct RouterNavLink {
    link: NavLink,
    focus_handle: Option<FocusHandle>,
    active_style: Option<StyleFn>,
    inactive_style: Option<StyleFn>,
}

impl RouterNavLink {
    pub fn new(link: NavLink) -> Self {
        Self {
            link,
            focus_handle: None,
            active_style: None,
            inactive_style: None,
        }
    }

    /// Make the link focusable with `handle` so Enter activates it.
    ///
    /// The handle must outlive a single frame; keep it in the owning view.
    pub fn focus_handle(mut self, handle: FocusHandle) -> Self {
        self.focus_handle = Some(handle);
        self
    }

    /// Styling applied while the link is active.
    pub fn active_style(
        mut self,
        style: impl Fn(Stateful<Div>) -> Stateful<Div> + 'static,
    ) -> Self {
        self.active_style = Some(Box::new(style));
        self
    }

    /// Styling applied while the link is inactive.
    pub fn inactive_style(
        mut self,
        style: impl Fn(Stateful<Div>) -> Stateful<Div> + 'static,
    ) -> Self {
        self.inactive_style = Some(Box::new(style));
        self
    }

    pub fn link(&self) -> &NavLink {
        &self.link
    }

    /// Headless render at the app's current path.
    pub fn rendered(&self, cx: &App) -> RenderedLink {
        self.link.render(cx)
    }

    /// Element id: the link's `id`, else its target.
    pub fn element_id(&self, rendered: &RenderedLink) -> SharedString {
        match rendered.element().get_attr("id") {
            Some(id) => SharedString::from(id.to_string()),
            None => SharedString::from(format!("nav-link:{}", self.link.to())),
        }
    }

    /// Build the element for the current frame.
    pub fn build(self, cx: &App) -> Stateful<Div> {
        let rendered = self.rendered(cx);
        let handler = rendered.handler().clone();
        let href = self.link.to().to_string();

        let mut container = div().id(self.element_id(&rendered));
        if !rendered.shape().is_inert() {
            container = container.cursor_pointer();
        }
        if let Some(handle) = &self.focus_handle {
            container = container.track_focus(handle);
        }

        let click_handler = handler.clone();
        let click_href = href.clone();
        container = container
            .on_click(move |_event, _window, cx| {
                let mut activation = ActivationEvent::pointer();
                let outcome = click_handler.activate(&mut activation, cx);
                follow_outcome(outcome, &click_href, cx);
            })
            .on_key_down(move |event: &KeyDownEvent, _window, cx| {
                if event.keystroke.key != "enter" {
                    return;
                }
                let mut activation = ActivationEvent::keyboard();
                let outcome = handler.activate(&mut activation, cx);
                follow_outcome(outcome, &href, cx);
            });

        let style = if rendered.is_active() {
            self.active_style
        } else {
            self.inactive_style
        };
        if let Some(style) = style {
            container = style(container);
        }

        container.child(node_into_element(rendered.content()))
    }
}

/// Perform what the dispatcher left to the host.
fn follow_outcome(outcome: DispatchOutcome, href: &str, cx: &mut App) {
    match outcome {
        DispatchOutcome::FollowExternal => {
            debug_log!("Opening external link '{}'", href);
            cx.open_url(href);
        }
        DispatchOutcome::Failed(err) => {
            warn_log!("Link '{}' did not navigate: {}", href, err);
        }
        _ => {}
    }
}

/// Convert resolved link content into a GPUI element.
///
/// Elements become plain `div`s around their children; tags, attributes and
/// properties have no GPUI counterpart and are dropped.
pub fn node_into_element(node: &Node) -> AnyElement {
    match node {
        Node::Empty => Empty.into_any_element(),
        Node::Text(text) => SharedString::from(text.clone()).into_any_element(),
        Node::Element(element) => div()
            .children(element.children().iter().map(node_into_element))
            .into_any_element(),
        Node::Fragment(children) => div()
            .flex()
            .children(children.iter().map(node_into_element))
            .into_any_element(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::init_router;
    use crate::{MatchMode, NavigationDirection, Navigator};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::prelude::v1::test;

    #[gpui::test]
    fn test_rendered_follows_global_router(cx: &mut TestAppContext) {
        cx.update(|cx| init_router(cx, "/about"));
        let link = RouterNavLink::new(
            NavLink::new("/about")
                .match_mode(MatchMode::Exact)
                .child("About"),
        );

        assert!(cx.read(|cx| link.rendered(cx).is_active()));

        cx.update(|cx| Navigator::push(cx, "/")).unwrap();
        assert!(!cx.read(|cx| link.rendered(cx).is_active()));
    }

    #[gpui::test]
    fn test_handler_navigates_through_app(cx: &mut TestAppContext) {
        cx.update(|cx| init_router(cx, "/"));
        let link = RouterNavLink::new(NavLink::new("/settings").replace(true));

        let outcome = cx.update(|cx| {
            let rendered = link.rendered(cx);
            rendered.click(cx)
        });

        assert_eq!(
            outcome,
            DispatchOutcome::Navigated(NavigationDirection::Replace)
        );
        assert_eq!(cx.read(Navigator::current_path), "/settings");
        assert!(!cx.read(Navigator::can_go_back));
    }

    #[gpui::test]
    fn test_disabled_link_leaves_router_alone(cx: &mut TestAppContext) {
        cx.update(|cx| init_router(cx, "/"));
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let link = RouterNavLink::new(
            NavLink::new("/settings")
                .disabled(true)
                .on_click(move || counter.set(counter.get() + 1)),
        );

        let outcome = cx.update(|cx| link.rendered(cx).click(cx));

        assert_eq!(outcome, DispatchOutcome::Suppressed);
        assert_eq!(clicks.get(), 0);
        assert_eq!(cx.read(Navigator::current_path), "/");
    }

    #[gpui::test]
    fn test_build_uses_link_id(cx: &mut TestAppContext) {
        cx.update(|cx| init_router(cx, "/"));
        let link = RouterNavLink::new(NavLink::new("/help").id("help-link").child("Help"));

        let id = cx.read(|cx| link.element_id(&link.rendered(cx)));
        assert_eq!(id.to_string(), "help-link");

        cx.update(|cx| {
            let _element = link
                .active_style(|div| div.font_weight(FontWeight::BOLD))
                .build(cx);
        });
    }

    #[cfg(feature = "cache")]
    #[gpui::test]
    fn test_repeated_renders_hit_active_cache(cx: &mut TestAppContext) {
        use crate::GlobalRouter;

        cx.update(|cx| init_router(cx, "/about"));
        let link = RouterNavLink::new(
            NavLink::new("/about")
                .match_mode(MatchMode::Exact)
                .child("About"),
        );

        for _ in 0..5 {
            assert!(cx.read(|cx| link.rendered(cx).is_active()));
        }

        let stats = cx.read(|cx| cx.global::<GlobalRouter>().cache_stats());
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 4);

        cx.update(|cx| Navigator::push(cx, "/")).unwrap();
        assert!(!cx.read(|cx| link.rendered(cx).is_active()));
        let stats = cx.read(|cx| cx.global::<GlobalRouter>().cache_stats());
        assert_eq!(stats.invalidations, 1);
    }

    #[gpui::test]
    fn test_build_with_focus_handle(cx: &mut TestAppContext) {
        cx.update(|cx| init_router(cx, "/"));
        cx.update(|cx| {
            let handle = cx.focus_handle();
            let _element = RouterNavLink::new(NavLink::new("/help").child("Help"))
                .focus_handle(handle)
                .build(cx);
        });
    }

    #[gpui::test]
    fn test_keyboard_activation_navigates(cx: &mut TestAppContext) {
        cx.update(|cx| init_router(cx, "/"));
        let link = RouterNavLink::new(NavLink::new("/help"));

        let outcome = cx.update(|cx| link.rendered(cx).press_key(cx));

        assert_eq!(outcome, DispatchOutcome::Navigated(NavigationDirection::Push));
        assert_eq!(cx.read(Navigator::current_path), "/help");
    }

    #[test]
    fn test_element_id_falls_back_to_target() {
        let link = RouterNavLink::new(NavLink::new("/docs"));
        let rendered = link.link().render_at("/");
        assert_eq!(link.element_id(&rendered).to_string(), "nav-link:/docs");
    }
}
