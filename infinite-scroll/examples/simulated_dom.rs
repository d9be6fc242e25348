// Example: drive the controller against a tiny simulated DOM (no browser).
//
// A container scrolls a list whose rows are 20px tall. The "host" below plays the role of the
// browser plus the UI framework: it delivers scroll events, runs `load_more`, commits the new rows
// and notifies the controller after each commit.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use infinite_scroll::{
    EventKind, InfiniteScroll, InfiniteScrollOptions, ListenerOptions, ScrollHost, ScrollOwner,
};

const ROW: f64 = 20.0;
const PAGE_ROWS: usize = 20;
const CONTAINER: usize = 0;
const ROOT: usize = 1;

#[derive(Default)]
struct SimDom {
    rows: Cell<usize>,
    scroll_top: Cell<f64>,
    client_height: f64,
    listeners: Cell<usize>,
}

impl SimDom {
    fn content_height(&self) -> f64 {
        self.rows.get() as f64 * ROW
    }
}

impl ScrollHost for SimDom {
    type Node = usize;

    fn window_scroll_y(&self) -> f64 {
        0.0
    }

    fn set_window_scroll_y(&self, _y: f64) {}

    fn window_inner_height(&self) -> f64 {
        0.0
    }

    fn document_scroll_height(&self) -> f64 {
        self.content_height()
    }

    fn offset_top(&self, _node: &usize) -> f64 {
        0.0
    }

    fn offset_height(&self, _node: &usize) -> f64 {
        self.content_height()
    }

    fn offset_parent(&self, _node: &usize) -> Option<usize> {
        None
    }

    fn parent_element(&self, node: &usize) -> Option<usize> {
        (*node == ROOT).then_some(CONTAINER)
    }

    fn scroll_top(&self, _node: &usize) -> f64 {
        self.scroll_top.get()
    }

    fn set_scroll_top(&self, _node: &usize, top: f64) {
        self.scroll_top.set(top);
    }

    fn scroll_height(&self, _node: &usize) -> f64 {
        self.content_height()
    }

    fn client_height(&self, _node: &usize) -> f64 {
        self.client_height
    }

    fn add_listener(&self, _target: &ScrollOwner<usize>, _kind: EventKind, _: ListenerOptions) {
        self.listeners.set(self.listeners.get() + 1);
    }

    fn remove_listener(&self, _target: &ScrollOwner<usize>, _kind: EventKind, _: ListenerOptions) {
        self.listeners.set(self.listeners.get() - 1);
    }

    fn probe_passive_support(&self) -> bool {
        true
    }
}

fn run(is_reverse: bool) {
    let dom = SimDom {
        rows: Cell::new(PAGE_ROWS),
        client_height: 250.0,
        ..SimDom::default()
    };
    let requested = Rc::new(RefCell::new(Vec::new()));
    let options = InfiniteScrollOptions::new({
        let requested = Rc::clone(&requested);
        move |page| requested.borrow_mut().push(page)
    })
    .with_use_window(false)
    .with_reverse(is_reverse)
    .with_threshold(50.0)
    .with_has_more(true);

    let mut c = InfiniteScroll::new(options);
    c.mount(&dom, Some(ROOT));
    if !is_reverse {
        dom.scroll_top.set(0.0);
    } else {
        // Reverse lists start scrolled to the bottom (newest rows).
        dom.scroll_top.set(dom.content_height() - dom.client_height);
    }

    for step in 0..30 {
        // The user scrolls toward the trigger edge by 100px per step.
        let top = dom.scroll_top.get();
        let next = if is_reverse {
            (top - 100.0).max(0.0)
        } else {
            (top + 100.0).min(dom.content_height() - dom.client_height)
        };
        dom.scroll_top.set(next);

        if let Some(page) = c.on_scroll(&dom) {
            // The fetch resolves and the framework commits another page of rows.
            dom.rows.set(dom.rows.get() + PAGE_ROWS);
            c.on_update(&dom);
            println!(
                "step={step} page={page} rows={} scroll_top={} listeners={}",
                dom.rows.get(),
                dom.scroll_top.get(),
                dom.listeners.get()
            );
        }

        if requested.borrow().len() == 3 {
            c.update_options(|opts| opts.config.has_more = false);
            c.on_update(&dom);
        }
    }

    println!(
        "{} done: pages={:?} loader={:?} listeners={}",
        if is_reverse { "reverse" } else { "forward" },
        requested.borrow(),
        c.loader_placement(),
        dom.listeners.get()
    );
    c.unmount(&dom);
}

fn main() {
    run(false);
    run(true);
}
