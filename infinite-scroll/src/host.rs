use crate::{EventKind, ListenerOptions};

/// Everything the controller needs from the DOM it watches.
///
/// The controller never holds DOM objects beyond the `Node` handles it is given; an adapter
/// implements this trait over the real DOM (see the `infinite-scroll-web` crate) or over an
/// in-memory model for tests and simulations.
///
/// All lengths are CSS pixels.
pub trait ScrollHost {
    type Node: Clone + PartialEq;

    /// Vertical scroll position of the window (`pageYOffset`, falling back to the document
    /// element's `scrollTop`).
    fn window_scroll_y(&self) -> f64;
    fn set_window_scroll_y(&self, y: f64);
    /// Height of the window's layout viewport (`innerHeight`).
    fn window_inner_height(&self) -> f64;
    /// Total scrollable height of the document.
    fn document_scroll_height(&self) -> f64;

    fn offset_top(&self, node: &Self::Node) -> f64;
    fn offset_height(&self, node: &Self::Node) -> f64;
    fn offset_parent(&self, node: &Self::Node) -> Option<Self::Node>;
    fn parent_element(&self, node: &Self::Node) -> Option<Self::Node>;

    fn scroll_top(&self, node: &Self::Node) -> f64;
    fn set_scroll_top(&self, node: &Self::Node, top: f64);
    fn scroll_height(&self, node: &Self::Node) -> f64;
    fn client_height(&self, node: &Self::Node) -> f64;

    /// Subscribes the controller's handler for `kind` on `target`.
    fn add_listener(
        &self,
        target: &ScrollOwner<Self::Node>,
        kind: EventKind,
        options: ListenerOptions,
    );
    /// Unsubscribes a handler previously added with the same `target`, `kind` and `options`.
    fn remove_listener(
        &self,
        target: &ScrollOwner<Self::Node>,
        kind: EventKind,
        options: ListenerOptions,
    );

    /// Returns whether the environment honors `{ passive: true }` listener options.
    ///
    /// Implementations should never panic; an environment that cannot answer is "unsupported".
    fn probe_passive_support(&self) -> bool;
}

/// The element whose scroll position drives loading: either the window or a container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollOwner<N> {
    Window,
    Element(N),
}

impl<N: Clone + PartialEq> ScrollOwner<N> {
    pub fn is_window(&self) -> bool {
        matches!(self, Self::Window)
    }

    pub fn element(&self) -> Option<&N> {
        match self {
            Self::Window => None,
            Self::Element(node) => Some(node),
        }
    }

    pub fn scroll_position<H: ScrollHost<Node = N>>(&self, host: &H) -> f64 {
        match self {
            Self::Window => host.window_scroll_y(),
            Self::Element(node) => host.scroll_top(node),
        }
    }

    pub fn set_scroll_position<H: ScrollHost<Node = N>>(&self, host: &H, position: f64) {
        match self {
            Self::Window => host.set_window_scroll_y(position),
            Self::Element(node) => host.set_scroll_top(node, position),
        }
    }

    /// Total scrollable height.
    pub fn content_size<H: ScrollHost<Node = N>>(&self, host: &H) -> f64 {
        match self {
            Self::Window => host.document_scroll_height(),
            Self::Element(node) => host.scroll_height(node),
        }
    }

    /// Visible height.
    pub fn viewport_size<H: ScrollHost<Node = N>>(&self, host: &H) -> f64 {
        match self {
            Self::Window => host.window_inner_height(),
            Self::Element(node) => host.client_height(node),
        }
    }

    pub fn add_listener<H: ScrollHost<Node = N>>(
        &self,
        host: &H,
        kind: EventKind,
        options: ListenerOptions,
    ) {
        host.add_listener(self, kind, options);
    }

    pub fn remove_listener<H: ScrollHost<Node = N>>(
        &self,
        host: &H,
        kind: EventKind,
        options: ListenerOptions,
    ) {
        host.remove_listener(self, kind, options);
    }
}
