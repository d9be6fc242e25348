use crate::*;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

type NodeId = usize;

#[derive(Clone, Copy, Debug, Default)]
struct FakeNode {
    offset_top: f64,
    offset_height: f64,
    offset_parent: Option<NodeId>,
    parent: Option<NodeId>,
    scroll_top: f64,
    scroll_height: f64,
    client_height: f64,
}

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Add(ScrollOwner<NodeId>, EventKind, ListenerOptions),
    Remove(ScrollOwner<NodeId>, EventKind, ListenerOptions),
    SetScroll(ScrollOwner<NodeId>, f64),
}

/// In-memory DOM. Unlike a browser it records duplicate registrations, so tests can catch them.
#[derive(Debug, Default)]
struct FakeDom {
    nodes: RefCell<Vec<FakeNode>>,
    window_scroll_y: Cell<f64>,
    inner_height: Cell<f64>,
    document_height: Cell<f64>,
    listeners: RefCell<Vec<(ScrollOwner<NodeId>, EventKind, ListenerOptions)>>,
    ops: RefCell<Vec<Op>>,
    passive: bool,
}

impl FakeDom {
    fn push(&self, node: FakeNode) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        nodes.len() - 1
    }

    fn edit(&self, id: NodeId, f: impl FnOnce(&mut FakeNode)) {
        f(&mut self.nodes.borrow_mut()[id]);
    }

    fn node(&self, id: NodeId) -> FakeNode {
        self.nodes.borrow()[id]
    }

    fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn listeners_on(&self, owner: &ScrollOwner<NodeId>) -> Vec<EventKind> {
        self.listeners
            .borrow()
            .iter()
            .filter(|(o, _, _)| o == owner)
            .map(|(_, kind, _)| *kind)
            .collect()
    }
}

impl ScrollHost for FakeDom {
    type Node = NodeId;

    fn window_scroll_y(&self) -> f64 {
        self.window_scroll_y.get()
    }

    fn set_window_scroll_y(&self, y: f64) {
        self.ops
            .borrow_mut()
            .push(Op::SetScroll(ScrollOwner::Window, y));
        self.window_scroll_y.set(y);
    }

    fn window_inner_height(&self) -> f64 {
        self.inner_height.get()
    }

    fn document_scroll_height(&self) -> f64 {
        self.document_height.get()
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.node(*node).offset_top
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.node(*node).offset_height
    }

    fn offset_parent(&self, node: &NodeId) -> Option<NodeId> {
        self.node(*node).offset_parent
    }

    fn parent_element(&self, node: &NodeId) -> Option<NodeId> {
        self.node(*node).parent
    }

    fn scroll_top(&self, node: &NodeId) -> f64 {
        self.node(*node).scroll_top
    }

    fn set_scroll_top(&self, node: &NodeId, top: f64) {
        self.ops
            .borrow_mut()
            .push(Op::SetScroll(ScrollOwner::Element(*node), top));
        self.edit(*node, |n| n.scroll_top = top);
    }

    fn scroll_height(&self, node: &NodeId) -> f64 {
        self.node(*node).scroll_height
    }

    fn client_height(&self, node: &NodeId) -> f64 {
        self.node(*node).client_height
    }

    fn add_listener(
        &self,
        target: &ScrollOwner<NodeId>,
        kind: EventKind,
        options: ListenerOptions,
    ) {
        self.ops
            .borrow_mut()
            .push(Op::Add(target.clone(), kind, options));
        self.listeners
            .borrow_mut()
            .push((target.clone(), kind, options));
    }

    fn remove_listener(
        &self,
        target: &ScrollOwner<NodeId>,
        kind: EventKind,
        options: ListenerOptions,
    ) {
        self.ops
            .borrow_mut()
            .push(Op::Remove(target.clone(), kind, options));
        let mut listeners = self.listeners.borrow_mut();
        if let Some(pos) = listeners
            .iter()
            .position(|(o, k, opt)| o == target && *k == kind && opt.capture == options.capture)
        {
            listeners.remove(pos);
        }
    }

    fn probe_passive_support(&self) -> bool {
        self.passive
    }
}

/// A container (node 0) wrapping the root (node 1).
fn container_dom(scroll_height: f64, client_height: f64, scroll_top: f64) -> (FakeDom, NodeId) {
    let dom = FakeDom::default();
    let container = dom.push(FakeNode {
        scroll_top,
        scroll_height,
        client_height,
        ..FakeNode::default()
    });
    let root = dom.push(FakeNode {
        parent: Some(container),
        offset_parent: Some(container),
        scroll_height,
        offset_height: scroll_height,
        ..FakeNode::default()
    });
    (dom, root)
}

/// A body (node 0) containing the root (node 1) at `root_top`, scrolled by the window.
fn window_dom(
    root_top: f64,
    root_height: f64,
    inner_height: f64,
    scroll_y: f64,
) -> (FakeDom, NodeId) {
    let dom = FakeDom::default();
    let body = dom.push(FakeNode::default());
    let root = dom.push(FakeNode {
        parent: Some(body),
        offset_parent: Some(body),
        offset_top: root_top,
        offset_height: root_height,
        scroll_height: root_height,
        ..FakeNode::default()
    });
    dom.inner_height.set(inner_height);
    dom.window_scroll_y.set(scroll_y);
    dom.document_height.set(root_top + root_height);
    (dom, root)
}

fn recording_options(pages: &Rc<RefCell<Vec<u32>>>) -> InfiniteScrollOptions<NodeId> {
    let pages = Rc::clone(pages);
    InfiniteScrollOptions::new(move |page| pages.borrow_mut().push(page))
}

#[test]
fn defaults_match_documented_configuration() {
    let config = InfiniteScrollConfig::default();
    assert_eq!(config.threshold, 300.0);
    assert!(!config.is_reverse);
    assert!(config.has_more);
    assert_eq!(config.initial_page, 0);
    assert!(config.use_window);
    assert!(!config.use_capture);
    assert_eq!(config.direction(), Direction::Forward);
}

#[test]
fn container_forward_fires_only_below_threshold() {
    let (dom, root) = container_dom(1000.0, 400.0, 280.0);
    let pages = Rc::new(RefCell::new(Vec::new()));
    let mut c = InfiniteScroll::new(recording_options(&pages).with_use_window(false));
    c.mount(&dom, Some(root));
    assert!(c.is_attached());
    assert_eq!(c.attached_owner(), Some(&ScrollOwner::Element(0)));

    // 1000 - 280 - 400 = 320
    assert_eq!(c.offset(&dom), Some(320.0));
    assert_eq!(c.on_scroll(&dom), None);
    assert!(pages.borrow().is_empty());

    // 1000 - 310 - 400 = 290
    dom.edit(0, |n| n.scroll_top = 310.0);
    assert_eq!(c.on_scroll(&dom), Some(1));
    assert_eq!(*pages.borrow(), [1]);
    assert!(!c.is_attached());
    assert_eq!(dom.listener_count(), 0);
}

#[test]
fn offset_equal_to_threshold_does_not_fire() {
    let (dom, root) = container_dom(1000.0, 400.0, 300.0);
    let pages = Rc::new(RefCell::new(Vec::new()));
    let mut c = InfiniteScroll::new(recording_options(&pages).with_use_window(false));
    c.mount(&dom, Some(root));

    assert_eq!(c.offset(&dom), Some(300.0));
    assert_eq!(c.on_scroll(&dom), None);

    dom.edit(0, |n| n.scroll_top = 301.0);
    assert_eq!(c.offset(&dom), Some(299.0));
    assert_eq!(c.on_scroll(&dom), Some(1));
}

#[test]
fn has_more_false_never_attaches_or_loads() {
    let (dom, root) = container_dom(1000.0, 400.0, 600.0);
    let pages = Rc::new(RefCell::new(Vec::new()));
    let mut c = InfiniteScroll::new(
        recording_options(&pages)
            .with_use_window(false)
            .with_has_more(false),
    );
    c.mount(&dom, Some(root));
    assert!(!c.is_attached());
    assert_eq!(dom.listener_count(), 0);

    for top in [0.0, 300.0, 600.0] {
        dom.edit(0, |n| n.scroll_top = top);
        assert_eq!(c.on_scroll(&dom), None);
        c.on_update(&dom);
    }
    assert!(pages.borrow().is_empty());
    assert_eq!(dom.listener_count(), 0);
    assert_eq!(c.loader_placement(), LoaderPlacement::Hidden);
}

#[test]
fn has_more_flip_mid_session_stops_loading() {
    let (dom, root) = container_dom(1000.0, 400.0, 0.0);
    let pages = Rc::new(RefCell::new(Vec::new()));
    let mut c = InfiniteScroll::new(recording_options(&pages).with_use_window(false));
    c.mount(&dom, Some(root));
    assert!(c.is_attached());

    c.update_options(|opts| opts.config.has_more = false);
    dom.edit(0, |n| n.scroll_top = 600.0);
    // Still registered until the next update, but geometry crossing must not load.
    assert_eq!(c.on_scroll(&dom), None);

    c.on_update(&dom);
    assert!(!c.is_attached());
    assert_eq!(dom.listener_count(), 0);
    assert_eq!(c.on_scroll(&dom), None);
    assert!(pages.borrow().is_empty());
}

#[test]
fn forward_pages_increase_and_wait_for_update() {
    let (dom, root) = container_dom(1000.0, 400.0, 550.0);
    let pages = Rc::new(RefCell::new(Vec::new()));
    let mut c = InfiniteScroll::new(
        recording_options(&pages)
            .with_use_window(false)
            .with_initial_page(4),
    );
    c.mount(&dom, Some(root));
    assert_eq!(c.page(), 4);

    for expected in 5..10u32 {
        assert_eq!(c.on_scroll(&dom), Some(expected));
        assert_eq!(c.state(), TriggerState::Idle);
        // A second event before the host commits the update must not load again.
        assert_eq!(c.on_scroll(&dom), None);
        c.on_update(&dom);
        assert!(c.is_attached());
    }
    assert_eq!(*pages.borrow(), [5, 6, 7, 8, 9]);
}

#[test]
fn window_forward_offset_sums_offset_parent_chain() {
    let dom = FakeDom::default();
    let body = dom.push(FakeNode::default());
    let section = dom.push(FakeNode {
        parent: Some(body),
        offset_parent: Some(body),
        offset_top: 100.0,
        ..FakeNode::default()
    });
    let card = dom.push(FakeNode {
        parent: Some(section),
        offset_parent: Some(section),
        offset_top: 50.0,
        ..FakeNode::default()
    });
    let root = dom.push(FakeNode {
        parent: Some(card),
        offset_parent: Some(card),
        offset_top: 20.0,
        offset_height: 2000.0,
        ..FakeNode::default()
    });
    dom.window_scroll_y.set(900.0);
    dom.inner_height.set(800.0);

    assert_eq!(geometry::top_position(&dom, &root), 170.0);

    let mut c = InfiniteScroll::<NodeId>::new(InfiniteScrollOptions::default());
    c.mount(&dom, Some(root));
    assert_eq!(c.attached_owner(), Some(&ScrollOwner::Window));
    // 170 + 2000 - 900 - 800
    assert_eq!(c.offset(&dom), Some(470.0));
    assert_eq!(c.on_scroll(&dom), None);

    dom.window_scroll_y.set(1100.0);
    assert_eq!(c.offset(&dom), Some(270.0));
    assert_eq!(c.on_scroll(&dom), Some(1));
}

#[test]
fn reverse_window_restores_scroll_after_prepend() {
    let (dom, root) = window_dom(0.0, 3000.0, 800.0, 40.0);
    let pages = Rc::new(RefCell::new(Vec::new()));
    let mut c = InfiniteScroll::new(
        recording_options(&pages)
            .with_reverse(true)
            .with_threshold(50.0),
    );
    c.mount(&dom, Some(root));
    assert_eq!(c.loader_placement(), LoaderPlacement::BeforeContent);

    assert_eq!(c.offset(&dom), Some(40.0));
    assert_eq!(c.on_scroll(&dom), Some(1));
    assert_eq!(c.state(), TriggerState::Loading);
    assert_eq!(
        c.pending_anchor(),
        Some(AnchorSnapshot {
            scroll_top: 40.0,
            scroll_height: 3000.0,
        })
    );

    // Caller prepends items worth 1200px and commits.
    dom.document_height.set(4200.0);
    c.on_update(&dom);

    assert_eq!(dom.window_scroll_y(), 1240.0);
    assert_eq!(c.state(), TriggerState::Idle);
    assert_eq!(c.pending_anchor(), None);
    assert!(c.is_attached());
    assert_eq!(*pages.borrow(), [1]);
}

#[test]
fn reverse_container_restores_exact_delta() {
    for (t0, h0, h1) in [(0.0, 250.0, 1250.0), (12.0, 900.0, 900.0), (37.5, 1000.0, 1815.0)] {
        let (dom, root) = container_dom(h0, 250.0, t0);
        let mut c = InfiniteScroll::<NodeId>::new(
            InfiniteScrollOptions::default()
                .with_use_window(false)
                .with_reverse(true)
                .with_threshold(50.0),
        );
        c.mount(&dom, Some(root));
        assert_eq!(c.on_scroll(&dom), Some(1));

        dom.edit(0, |n| n.scroll_height = h1);
        c.on_update(&dom);
        assert_eq!(dom.node(0).scroll_top, t0 + (h1 - h0));
    }
}

#[test]
fn reverse_restoration_happens_before_reattach() {
    let (dom, root) = container_dom(500.0, 250.0, 10.0);
    let mut c = InfiniteScroll::<NodeId>::new(
        InfiniteScrollOptions::default()
            .with_use_window(false)
            .with_reverse(true),
    );
    c.mount(&dom, Some(root));
    assert_eq!(c.on_scroll(&dom), Some(1));
    dom.ops.borrow_mut().clear();

    dom.edit(0, |n| n.scroll_height = 800.0);
    c.on_update(&dom);

    let ops = dom.ops.borrow();
    assert_eq!(ops[0], Op::SetScroll(ScrollOwner::Element(0), 310.0));
    assert!(ops[1..].iter().all(|op| matches!(op, Op::Add(..))));
    assert_eq!(ops.len(), 1 + EventKind::ALL.len());
}

#[test]
fn reverse_loading_blocks_new_fires_until_update() {
    let (dom, root) = container_dom(500.0, 250.0, 10.0);
    let pages = Rc::new(RefCell::new(Vec::new()));
    let mut c = InfiniteScroll::new(
        recording_options(&pages)
            .with_use_window(false)
            .with_reverse(true),
    );
    c.mount(&dom, Some(root));
    assert_eq!(c.on_scroll(&dom), Some(1));
    assert_eq!(c.on_scroll(&dom), None);
    assert!(c.is_loading());

    dom.edit(0, |n| n.scroll_height = 500.0);
    c.on_update(&dom);
    assert!(!c.is_loading());
    // Unchanged height: the restored position equals the old one and is still near the top.
    assert_eq!(c.on_scroll(&dom), Some(2));
    assert_eq!(*pages.borrow(), [1, 2]);
}

#[test]
fn restoration_is_skipped_when_owner_is_gone() {
    let (dom, root) = container_dom(500.0, 250.0, 10.0);
    let mut c = InfiniteScroll::<NodeId>::new(
        InfiniteScrollOptions::default()
            .with_use_window(false)
            .with_reverse(true),
    );
    c.mount(&dom, Some(root));
    assert_eq!(c.on_scroll(&dom), Some(1));

    dom.edit(root, |n| n.parent = None);
    dom.ops.borrow_mut().clear();
    c.on_update(&dom);

    assert!(dom.ops.borrow().is_empty());
    assert_eq!(c.pending_anchor(), None);
    assert_eq!(c.state(), TriggerState::Idle);
    assert!(!c.is_attached());
}

#[test]
fn attach_is_idempotent() {
    let (dom, root) = container_dom(1000.0, 400.0, 0.0);
    let mut c = InfiniteScroll::<NodeId>::new(
        InfiniteScrollOptions::default().with_use_window(false),
    );
    c.mount(&dom, Some(root));
    c.on_update(&dom);
    c.on_update(&dom);
    assert_eq!(dom.listener_count(), EventKind::ALL.len());

    let mut lifecycle = ListenerLifecycle::new();
    assert!(lifecycle.attach(&dom, Some(ScrollOwner::Window), true));
    assert!(lifecycle.attach(&dom, Some(ScrollOwner::Window), true));
    assert_eq!(dom.listeners_on(&ScrollOwner::Window).len(), EventKind::ALL.len());
    assert!(lifecycle.detach(&dom));
    assert!(!lifecycle.detach(&dom));
    assert!(dom.listeners_on(&ScrollOwner::Window).is_empty());
}

#[test]
fn listener_lifecycle_skips_without_more_or_owner() {
    let dom = FakeDom::default();
    let mut lifecycle = ListenerLifecycle::<NodeId>::new();
    assert!(!lifecycle.attach(&dom, Some(ScrollOwner::Window), false));
    assert!(!lifecycle.attach(&dom, None, true));
    assert_eq!(dom.listener_count(), 0);
}

#[test]
fn missing_root_is_not_ready() {
    let (dom, _root) = container_dom(1000.0, 400.0, 900.0);
    let mut c = InfiniteScroll::<NodeId>::new(
        InfiniteScrollOptions::default().with_use_window(false),
    );
    c.mount(&dom, None);
    assert!(!c.is_attached());
    assert_eq!(c.offset(&dom), None);
    assert_eq!(c.on_scroll(&dom), None);

    let config = InfiniteScrollConfig::default();
    assert_eq!(geometry::current_offset(&dom, None, &config, None), None);
}

#[test]
fn root_without_parent_yields_no_offset_but_keeps_listening() {
    let (dom, root) = container_dom(1000.0, 400.0, 900.0);
    let pages = Rc::new(RefCell::new(Vec::new()));
    let mut c = InfiniteScroll::new(recording_options(&pages).with_use_window(false));
    c.mount(&dom, Some(root));
    assert!(c.is_attached());

    dom.edit(root, |n| n.parent = None);
    assert_eq!(c.on_scroll(&dom), None);
    assert!(c.is_attached());

    dom.edit(root, |n| n.parent = Some(0));
    assert_eq!(c.on_scroll(&dom), Some(1));
    assert_eq!(*pages.borrow(), [1]);
}

#[test]
fn scroll_parent_resolver_is_reevaluated_on_attach() {
    let (dom, root) = container_dom(1000.0, 400.0, 0.0);
    let outer = dom.push(FakeNode {
        client_height: 400.0,
        scroll_height: 1000.0,
        ..FakeNode::default()
    });
    let target = Rc::new(Cell::new(0usize));
    let resolver = {
        let target = Rc::clone(&target);
        move || Some(target.get())
    };
    let mut c = InfiniteScroll::new(
        InfiniteScrollOptions::default()
            .with_use_window(false)
            .with_get_scroll_parent(Some(resolver)),
    );
    c.mount(&dom, Some(root));
    assert_eq!(c.attached_owner(), Some(&ScrollOwner::Element(0)));

    target.set(outer);
    c.on_update(&dom);
    assert_eq!(c.attached_owner(), Some(&ScrollOwner::Element(outer)));
    assert!(dom.listeners_on(&ScrollOwner::Element(0)).is_empty());
    assert_eq!(
        dom.listeners_on(&ScrollOwner::Element(outer)),
        EventKind::ALL.to_vec()
    );

    // Geometry follows the resolved container.
    dom.edit(outer, |n| n.scroll_top = 350.0);
    assert_eq!(c.offset(&dom), Some(250.0));
}

#[test]
fn capture_option_reaches_registrations() {
    let (dom, root) = container_dom(1000.0, 400.0, 0.0);
    let mut c = InfiniteScroll::<NodeId>::new(
        InfiniteScrollOptions::default()
            .with_use_window(false)
            .with_use_capture(true),
    );
    c.mount(&dom, Some(root));
    assert!(dom.listeners.borrow().iter().all(|(_, _, o)| o.capture));

    c.update_options(|opts| opts.config.use_capture = false);
    c.on_update(&dom);
    assert_eq!(dom.listener_count(), EventKind::ALL.len());
    assert!(dom.listeners.borrow().iter().all(|(_, _, o)| !o.capture));
}

#[test]
fn wheel_prevention_depends_on_passive_support() {
    let (dom, root) = container_dom(1000.0, 400.0, 0.0);
    let mut c = InfiniteScroll::<NodeId>::new(InfiniteScrollOptions::default());
    c.mount(&dom, Some(root));

    let passive = c.listener_options().passive;
    assert_eq!(c.on_wheel(1.0), !passive);
    assert!(!c.on_wheel(-1.0));
    assert!(!c.on_wheel(3.0));

    let active = ListenerOptions {
        capture: false,
        passive: false,
    };
    assert!(active.prevents_wheel(1.0));
    assert!(!active.prevents_wheel(1.5));
    assert!(!active.prevents_wheel(0.0));

    let passive = ListenerOptions {
        capture: true,
        passive: true,
    };
    assert!(!passive.prevents_wheel(1.0));
    assert!(!passive.prevents_wheel(-1.0));
}

#[test]
fn evaluate_scroll_leaves_the_callback_to_the_caller() {
    let (dom, root) = container_dom(1000.0, 400.0, 550.0);
    let pages = Rc::new(RefCell::new(Vec::new()));
    let mut c = InfiniteScroll::new(
        recording_options(&pages)
            .with_use_window(false)
            .with_reverse(true)
            .with_threshold(600.0),
    );
    c.mount(&dom, Some(root));

    assert_eq!(c.evaluate_scroll(&dom), Some(1));
    assert!(pages.borrow().is_empty());
    assert!(!c.is_attached());
    assert!(c.is_loading());
    assert!(c.pending_anchor().is_some());
    assert_eq!(c.evaluate_scroll(&dom), None);

    c.on_update(&dom);
    assert!(c.is_attached());
    assert_eq!(c.state(), TriggerState::Idle);
}

#[cfg(feature = "serde")]
#[test]
fn config_accepts_legacy_field_names() {
    let config: InfiniteScrollConfig =
        serde_json::from_str(r#"{"throttle": 120.0, "page_start": 4, "is_reverse": true}"#)
            .unwrap();
    assert_eq!(config.threshold, 120.0);
    assert_eq!(config.initial_page, 4);
    assert!(config.is_reverse);
    assert!(config.has_more);
    assert!(config.use_window);

    let empty: InfiniteScrollConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, InfiniteScrollConfig::default());
}

#[test]
fn passive_support_is_probed_once() {
    let cache = PassiveSupport::new();
    let calls = Cell::new(0);
    assert_eq!(cache.get(), None);
    for _ in 0..3 {
        let supported = cache.get_or_probe(|| {
            calls.set(calls.get() + 1);
            true
        });
        assert!(supported);
    }
    assert_eq!(calls.get(), 1);
    assert_eq!(cache.get(), Some(true));
}

#[test]
fn unmount_detaches_every_listener() {
    let (dom, root) = container_dom(1000.0, 400.0, 0.0);
    let mut c = InfiniteScroll::<NodeId>::new(
        InfiniteScrollOptions::default().with_use_window(false),
    );
    c.mount(&dom, Some(root));
    assert_eq!(dom.listener_count(), 3);

    c.unmount(&dom);
    assert_eq!(dom.listener_count(), 0);
    assert!(!c.is_mounted());
    assert_eq!(c.root(), None);

    // Updates after teardown do nothing.
    c.on_update(&dom);
    assert_eq!(dom.listener_count(), 0);
}

#[test]
fn remount_resets_page_counter() {
    let (dom, root) = container_dom(1000.0, 400.0, 550.0);
    let mut c = InfiniteScroll::<NodeId>::new(
        InfiniteScrollOptions::default()
            .with_use_window(false)
            .with_initial_page(2),
    );
    c.mount(&dom, Some(root));
    assert_eq!(c.on_scroll(&dom), Some(3));
    c.unmount(&dom);

    c.mount(&dom, Some(root));
    assert_eq!(c.page(), 2);
    assert_eq!(c.on_scroll(&dom), Some(3));
}

#[test]
fn trigger_state_machine() {
    let mut t = LoadTrigger::new(0);
    assert!(!t.should_fire(300.0, 300.0, true));
    assert!(!t.should_fire(10.0, 300.0, false));
    assert!(t.should_fire(-50.0, 300.0, true));

    assert_eq!(t.fire(Direction::Reverse), 1);
    assert!(t.is_loading());
    assert!(!t.should_fire(0.0, 300.0, true));
    t.settle();
    assert_eq!(t.fire(Direction::Forward), 2);
    assert_eq!(t.state(), TriggerState::Idle);
}

#[test]
fn anchor_snapshot_is_consumed_once() {
    let (dom, _root) = container_dom(600.0, 200.0, 20.0);
    let owner = ScrollOwner::Element(0);
    let mut anchor = AnchorPreserver::new();
    assert_eq!(anchor.restore(&dom, Some(&owner)), None);

    anchor.snapshot(&dom, &owner);
    dom.edit(0, |n| n.scroll_height = 1000.0);
    assert_eq!(anchor.restore(&dom, Some(&owner)), Some(420.0));
    assert_eq!(anchor.restore(&dom, Some(&owner)), None);
    assert_eq!(dom.node(0).scroll_top, 420.0);
}

#[test]
fn loader_placement_follows_direction() {
    let c = InfiniteScroll::<NodeId>::new(InfiniteScrollOptions::default());
    assert_eq!(c.loader_placement(), LoaderPlacement::AfterContent);
    let c = InfiniteScroll::<NodeId>::new(InfiniteScrollOptions::default().with_reverse(true));
    assert_eq!(c.loader_placement(), LoaderPlacement::BeforeContent);
}
