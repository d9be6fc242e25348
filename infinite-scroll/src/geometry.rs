//! Pure geometry reads that reduce the DOM state to a single "distance to trigger edge".

use crate::{Direction, InfiniteScrollConfig, ScrollHost, ScrollOwner, ScrollParentResolver};

/// Resolves the container the root lives in: the caller's resolver when it yields an element,
/// otherwise the root's parent element.
pub fn resolve_scroll_parent<H: ScrollHost>(
    host: &H,
    root: Option<&H::Node>,
    get_scroll_parent: Option<&ScrollParentResolver<H::Node>>,
) -> Option<H::Node> {
    if let Some(parent) = get_scroll_parent.and_then(|resolve| resolve()) {
        return Some(parent);
    }
    root.and_then(|root| host.parent_element(root))
}

/// Resolves the scroll owner for the current configuration.
///
/// A resolvable parent is required even when the window scrolls; without one the root is not
/// attached to a document yet and there is nothing to observe.
pub fn resolve_scroll_owner<H: ScrollHost>(
    host: &H,
    root: Option<&H::Node>,
    config: &InfiniteScrollConfig,
    get_scroll_parent: Option<&ScrollParentResolver<H::Node>>,
) -> Option<ScrollOwner<H::Node>> {
    let parent = resolve_scroll_parent(host, root, get_scroll_parent)?;
    if config.use_window {
        Some(ScrollOwner::Window)
    } else {
        Some(ScrollOwner::Element(parent))
    }
}

/// Cumulative `offsetTop` of `node` from the document origin.
///
/// Walks the `offsetParent` chain iteratively; the chain ends at the first node without an
/// offset parent.
pub fn top_position<H: ScrollHost>(host: &H, node: &H::Node) -> f64 {
    let mut top = 0.0;
    let mut current = Some(node.clone());
    while let Some(node) = current {
        top += host.offset_top(&node);
        current = host.offset_parent(&node);
    }
    top
}

/// Distance left until the trigger edge, for a resolved root and owner.
///
/// - forward + window: `top(root) + root.offsetHeight - scrollY - innerHeight`
/// - forward + container: `root.scrollHeight - container.scrollTop - container.clientHeight`
/// - reverse: the owner's scroll position (distance from the top edge)
pub fn distance_to_edge<H: ScrollHost>(
    host: &H,
    root: &H::Node,
    owner: &ScrollOwner<H::Node>,
    direction: Direction,
) -> f64 {
    match (direction, owner) {
        (Direction::Reverse, owner) => owner.scroll_position(host),
        (Direction::Forward, ScrollOwner::Window) => {
            top_position(host, root) + host.offset_height(root)
                - host.window_scroll_y()
                - host.window_inner_height()
        }
        (Direction::Forward, ScrollOwner::Element(container)) => {
            host.scroll_height(root) - host.scroll_top(container) - host.client_height(container)
        }
    }
}

/// Reads the current offset, or `None` when the root or the scroll owner cannot be resolved.
///
/// `None` means "not ready to evaluate": callers neither fire nor stop listening, the next event
/// simply evaluates again.
pub fn current_offset<H: ScrollHost>(
    host: &H,
    root: Option<&H::Node>,
    config: &InfiniteScrollConfig,
    get_scroll_parent: Option<&ScrollParentResolver<H::Node>>,
) -> Option<f64> {
    let root = root?;
    let owner = resolve_scroll_owner(host, Some(root), config, get_scroll_parent)?;
    Some(distance_to_edge(host, root, &owner, config.direction()))
}
