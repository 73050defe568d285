//! # gpui-navlink
//!
//! Navigation links that know whether they point at the current location.
//!
//! A [`NavLink`] wraps a target path with:
//!
//! - **active matching**: `exact`, `startsWith` or `includes` comparison of
//!   the current path against the target (or an override), see [`matching`];
//! - **active-aware content**: static, computed from the active flag, or a
//!   single element that receives an `isActive` property, see [`content`];
//! - **click handling**: disabled links swallow activations, external links
//!   open outbound, internal links push or replace history through an
//!   injected [`Router`], see [`dispatch`];
//! - **attribute assembly**: class template, inline style, `id`,
//!   `data-testid`, `aria-*`, see [`nav_link`].
//!
//! Rendering is renderer-neutral ([`element`]); [`RouterNavLink`] puts a link
//! on screen in a GPUI app backed by the [`GlobalRouter`].
//!
//! # Quick start
//!
//! ```
//! use gpui_navlink::{MatchMode, MemoryRouter, NavLink, NavigationDirection, Node};
//!
//! let mut router = MemoryRouter::at("/about");
//! let link = NavLink::new("/about")
//!     .match_mode(MatchMode::Exact)
//!     .active_class_name("current")
//!     .render_children(|active| Node::text(if active { "About (here)" } else { "About" }));
//!
//! let rendered = link.render(&router);
//! assert!(rendered.element().has_class("current"));
//! assert_eq!(rendered.content().text_content(), "About (here)");
//!
//! NavLink::new("/contact").replace(true).render(&router).click(&mut router);
//! assert_eq!(router.paths_with(NavigationDirection::Replace), ["/contact"]);
//! ```
//!
//! # Features
//!
//! | Feature   | Default | Effect                                        |
//! |-----------|---------|-----------------------------------------------|
//! | `log`     | yes     | log through the `log` crate                   |
//! | `tracing` | no      | log through the `tracing` crate               |
//! | `cache`   | yes     | LRU memoization of active-state lookups       |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;

#[cfg(feature = "cache")]
pub mod cache;
pub mod content;
pub mod context;
pub mod dispatch;
pub mod element;
pub mod error;
pub mod matching;
pub mod nav_link;
pub mod router;
pub mod state;
pub mod widgets;

pub use content::LinkChildren;
pub use context::{init_router, GlobalRouter, Navigator};
pub use dispatch::{ActivationEvent, ActivationSource, DispatchOutcome};
pub use element::{Element, Node, StyleMap};
pub use error::{NavigationError, NavigationResult};
pub use matching::{is_active, MatchMode};
pub use nav_link::{LinkHints, LinkShape, NavLink, RenderedLink};
pub use router::{Location, MemoryRouter, Router};
pub use state::{NavigationDirection, RouteChangeEvent, RouterState};
pub use widgets::RouterNavLink;
