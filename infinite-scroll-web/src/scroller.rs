use std::cell::RefCell;
use std::rc::{Rc, Weak};

use infinite_scroll::{
    InfiniteScroll, InfiniteScrollOptions, LoaderPlacement, ScrollOwner, TriggerState,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, WheelEvent};

use crate::Error;
use crate::dom::{Handlers, WebDom};

struct Shared {
    scroller: RefCell<InfiniteScroll<HtmlElement>>,
    dom: WebDom,
}

impl Shared {
    fn handle_scroll(&self) {
        let fired = {
            let Ok(mut scroller) = self.scroller.try_borrow_mut() else {
                tracing::debug!(target: "infinite_scroll_web", "re-entrant scroll event skipped");
                return;
            };
            scroller
                .evaluate_scroll(&self.dom)
                .map(|page| (page, scroller.options().load_more.clone()))
        };
        // The borrow is released here, so `load_more` may call back into the handle.
        if let Some((page, Some(load_more))) = fired {
            load_more(page);
        }
    }

    fn handle_wheel(&self, event: &Event) {
        let Ok(scroller) = self.scroller.try_borrow() else {
            return;
        };
        let Some(delta_y) = event.dyn_ref::<WheelEvent>().map(|e| e.delta_y()) else {
            return;
        };
        if scroller.on_wheel(delta_y) {
            event.prevent_default();
        }
    }

    fn with_scroller<R>(
        &self,
        f: impl FnOnce(&mut InfiniteScroll<HtmlElement>, &WebDom) -> R,
    ) -> Option<R> {
        match self.scroller.try_borrow_mut() {
            Ok(mut scroller) => Some(f(&mut scroller, &self.dom)),
            Err(_) => {
                tracing::warn!(
                    target: "infinite_scroll_web",
                    "controller busy (re-entrant call from a resolver or options closure); call skipped"
                );
                None
            }
        }
    }
}

/// An [`InfiniteScroll`] wired to the browser DOM.
///
/// Framework-neutral: call `mount` once the root element exists, `notify_updated` after every
/// committed render of the subtree (e.g. from an effect), and drop the handle (or call
/// `unmount`) on teardown.
///
/// `load_more` runs from inside the DOM event handler but outside any borrow of the controller.
/// It may call `notify_updated` synchronously (for data that is already at hand), update the
/// options or drop the handle.
pub struct WebInfiniteScroll {
    shared: Rc<Shared>,
}

impl WebInfiniteScroll {
    pub fn new(options: InfiniteScrollOptions<HtmlElement>) -> Result<Self, Error> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let document = window.document().ok_or(Error::NoDocument)?;

        let shared = Rc::new_cyclic(|weak: &Weak<Shared>| {
            let on_scroll = Closure::<dyn FnMut(Event)>::new({
                let weak = weak.clone();
                move |_event: Event| {
                    if let Some(shared) = weak.upgrade() {
                        shared.handle_scroll();
                    }
                }
            });
            let on_wheel = Closure::<dyn FnMut(Event)>::new({
                let weak = weak.clone();
                move |event: Event| {
                    if let Some(shared) = weak.upgrade() {
                        shared.handle_wheel(&event);
                    }
                }
            });
            Shared {
                scroller: RefCell::new(InfiniteScroll::new(options)),
                dom: WebDom::new(
                    window,
                    document,
                    Handlers {
                        on_scroll,
                        on_wheel,
                    },
                ),
            }
        });

        Ok(Self { shared })
    }

    pub fn dom(&self) -> &WebDom {
        &self.shared.dom
    }

    pub fn mount(&self, root: HtmlElement) {
        self.shared
            .with_scroller(|scroller, dom| scroller.mount(dom, Some(root)));
    }

    /// Call after every committed render of the monitored subtree.
    pub fn notify_updated(&self) {
        self.shared
            .with_scroller(|scroller, dom| scroller.on_update(dom));
    }

    pub fn set_root(&self, root: Option<HtmlElement>) {
        self.shared
            .with_scroller(|scroller, _| scroller.set_root(root));
    }

    pub fn set_options(&self, options: InfiniteScrollOptions<HtmlElement>) {
        self.shared
            .with_scroller(|scroller, _| scroller.set_options(options));
    }

    pub fn update_options(&self, f: impl FnOnce(&mut InfiniteScrollOptions<HtmlElement>)) {
        self.shared
            .with_scroller(|scroller, _| scroller.update_options(f));
    }

    pub fn unmount(&self) {
        self.shared
            .with_scroller(|scroller, dom| scroller.unmount(dom));
    }

    /// Runs `f` with read access to the controller, or returns `None` while it is busy.
    pub fn inspect<R>(&self, f: impl FnOnce(&InfiniteScroll<HtmlElement>) -> R) -> Option<R> {
        self.shared.scroller.try_borrow().ok().map(|scroller| f(&scroller))
    }

    pub fn page(&self) -> Option<u32> {
        self.inspect(|s| s.page())
    }

    pub fn state(&self) -> Option<TriggerState> {
        self.inspect(|s| s.state())
    }

    pub fn is_attached(&self) -> bool {
        self.inspect(|s| s.is_attached()).unwrap_or(false)
    }

    pub fn attached_owner(&self) -> Option<ScrollOwner<HtmlElement>> {
        self.inspect(|s| s.attached_owner().cloned()).flatten()
    }

    pub fn loader_placement(&self) -> Option<LoaderPlacement> {
        self.inspect(|s| s.loader_placement())
    }

    pub fn offset(&self) -> Option<f64> {
        self.inspect(|s| s.offset(&self.shared.dom)).flatten()
    }
}

impl Drop for WebInfiniteScroll {
    fn drop(&mut self) {
        self.unmount();
    }
}
