use infinite_scroll::{EventKind, ListenerOptions, ScrollHost, ScrollOwner};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget, HtmlElement, Window};

use crate::passive::probe_passive_support;

/// The JS functions registered on the scroll owner.
///
/// They live as long as the [`WebDom`], so removal always targets the same function identity
/// that was added.
pub(crate) struct Handlers {
    pub(crate) on_scroll: Closure<dyn FnMut(Event)>,
    pub(crate) on_wheel: Closure<dyn FnMut(Event)>,
}

/// [`ScrollHost`] over the browser DOM.
pub struct WebDom {
    window: Window,
    document: Document,
    handlers: Handlers,
}

impl WebDom {
    pub(crate) fn new(window: Window, document: Document, handlers: Handlers) -> Self {
        Self {
            window,
            document,
            handlers,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn target<'a>(&'a self, owner: &'a ScrollOwner<HtmlElement>) -> &'a EventTarget {
        match owner {
            ScrollOwner::Window => AsRef::<EventTarget>::as_ref(&self.window),
            ScrollOwner::Element(el) => AsRef::<EventTarget>::as_ref(el),
        }
    }

    fn handler(&self, kind: EventKind) -> &js_sys::Function {
        let closure = match kind {
            EventKind::Scroll | EventKind::Resize => &self.handlers.on_scroll,
            EventKind::Wheel => &self.handlers.on_wheel,
        };
        closure.as_ref().unchecked_ref()
    }
}

fn as_html(el: web_sys::Element) -> Option<HtmlElement> {
    el.dyn_into::<HtmlElement>().ok()
}

impl ScrollHost for WebDom {
    type Node = HtmlElement;

    fn window_scroll_y(&self) -> f64 {
        match self.window.page_y_offset() {
            Ok(y) if y != 0.0 => y,
            _ => self
                .document
                .document_element()
                .map(|el| f64::from(el.scroll_top()))
                .unwrap_or(0.0),
        }
    }

    fn set_window_scroll_y(&self, y: f64) {
        let x = self.window.page_x_offset().unwrap_or(0.0);
        self.window.scroll_to_with_x_and_y(x, y);
    }

    fn window_inner_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn document_scroll_height(&self) -> f64 {
        self.document
            .document_element()
            .map(|el| f64::from(el.scroll_height()))
            .unwrap_or(0.0)
    }

    fn offset_top(&self, node: &HtmlElement) -> f64 {
        f64::from(node.offset_top())
    }

    fn offset_height(&self, node: &HtmlElement) -> f64 {
        f64::from(node.offset_height())
    }

    fn offset_parent(&self, node: &HtmlElement) -> Option<HtmlElement> {
        node.offset_parent().and_then(as_html)
    }

    fn parent_element(&self, node: &HtmlElement) -> Option<HtmlElement> {
        node.parent_element().and_then(as_html)
    }

    fn scroll_top(&self, node: &HtmlElement) -> f64 {
        f64::from(node.scroll_top())
    }

    fn set_scroll_top(&self, node: &HtmlElement, top: f64) {
        node.set_scroll_top(top.round() as _);
    }

    fn scroll_height(&self, node: &HtmlElement) -> f64 {
        f64::from(node.scroll_height())
    }

    fn client_height(&self, node: &HtmlElement) -> f64 {
        f64::from(node.client_height())
    }

    fn add_listener(
        &self,
        target: &ScrollOwner<HtmlElement>,
        kind: EventKind,
        options: ListenerOptions,
    ) {
        let js_options = AddEventListenerOptions::new();
        js_options.set_capture(options.capture);
        js_options.set_passive(options.passive);
        if let Err(err) = self
            .target(target)
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind.as_str(),
                self.handler(kind),
                &js_options,
            )
        {
            tracing::warn!(
                target: "infinite_scroll_web",
                event = kind.as_str(),
                "addEventListener failed: {err:?}"
            );
        }
    }

    fn remove_listener(
        &self,
        target: &ScrollOwner<HtmlElement>,
        kind: EventKind,
        options: ListenerOptions,
    ) {
        if let Err(err) = self.target(target).remove_event_listener_with_callback_and_bool(
            kind.as_str(),
            self.handler(kind),
            options.capture,
        ) {
            tracing::warn!(
                target: "infinite_scroll_web",
                event = kind.as_str(),
                "removeEventListener failed: {err:?}"
            );
        }
    }

    fn probe_passive_support(&self) -> bool {
        probe_passive_support(&self.document)
    }
}
