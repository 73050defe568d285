//! Content resolution for link children.
//!
//! A link's children come in three shapes, chosen explicitly by the caller:
//!
//! - [`LinkChildren::Static`]: rendered as-is.
//! - [`LinkChildren::Computed`]: a function of the active flag; its return
//!   value is the whole content. Prefer this for active-aware content.
//! - [`LinkChildren::Augmentable`]: a single element that gets an
//!   `isActive` property merged into a rendered copy. Kept for callers whose
//!   child element branches on that property itself; only the top-level
//!   element is touched, never its descendants.
//!
//! ```
//! use gpui_navlink::content::{resolve_children, LinkChildren};
//! use gpui_navlink::Node;
//!
//! let children = LinkChildren::computed(|active| Node::text(if active { "Here" } else { "Go" }));
//! assert_eq!(resolve_children(&children, true).text_content(), "Here");
//! ```

use crate::element::{Element, Node};
use std::fmt;
use std::rc::Rc;

/// Render function receiving the active flag.
pub type RenderFn = Rc<dyn Fn(bool) -> Node>;

/// Property name set on augmented children.
pub const IS_ACTIVE_PROP: &str = "isActive";

/// The content strategy of a link.
#[derive(Clone, Default)]
pub enum LinkChildren {
    /// No content.
    #[default]
    Empty,
    /// Fixed content.
    Static(Node),
    /// Content computed from the active flag.
    Computed(RenderFn),
    /// A single element that receives an `isActive` property.
    Augmentable(Element),
}

impl LinkChildren {
    /// Wrap a render function.
    pub fn computed(render: impl Fn(bool) -> Node + 'static) -> Self {
        LinkChildren::Computed(Rc::new(render))
    }

    /// Wrap an element to be augmented with `isActive`.
    pub fn augment(element: Element) -> Self {
        LinkChildren::Augmentable(element)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LinkChildren::Empty | LinkChildren::Static(Node::Empty))
    }
}

impl fmt::Debug for LinkChildren {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkChildren::Empty => f.write_str("Empty"),
            LinkChildren::Static(node) => f.debug_tuple("Static").field(node).finish(),
            LinkChildren::Computed(_) => f.write_str("Computed(..)"),
            LinkChildren::Augmentable(element) => {
                f.debug_tuple("Augmentable").field(element).finish()
            }
        }
    }
}

impl From<&str> for LinkChildren {
    fn from(text: &str) -> Self {
        LinkChildren::Static(Node::from(text))
    }
}

impl From<String> for LinkChildren {
    fn from(text: String) -> Self {
        LinkChildren::Static(Node::from(text))
    }
}

impl From<Node> for LinkChildren {
    fn from(node: Node) -> Self {
        LinkChildren::Static(node)
    }
}

/// Produce the content to render for the given active flag.
///
/// Computed children are called exactly once. Augmentable children are
/// cloned; the stored element is never modified.
pub fn resolve_children(children: &LinkChildren, is_active: bool) -> Node {
    match children {
        LinkChildren::Empty => Node::Empty,
        LinkChildren::Static(node) => node.clone(),
        LinkChildren::Computed(render) => render(is_active),
        LinkChildren::Augmentable(element) => {
            Node::Element(element.clone().prop(IS_ACTIVE_PROP, is_active))
        }
    }
}
