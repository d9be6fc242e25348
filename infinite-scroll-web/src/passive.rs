use std::cell::Cell;
use std::rc::Rc;

use js_sys::{Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document};

/// Detects `{ passive: true }` support.
///
/// Registers a throwaway listener with an options object whose `passive` property is a getter;
/// browsers that understand the option read it. Any JS failure counts as "unsupported".
pub fn probe_passive_support(document: &Document) -> bool {
    let supported = Rc::new(Cell::new(false));
    let getter = Closure::<dyn FnMut() -> JsValue>::new({
        let supported = Rc::clone(&supported);
        move || {
            supported.set(true);
            JsValue::TRUE
        }
    });

    let descriptor = Object::new();
    if Reflect::set(&descriptor, &JsValue::from_str("get"), getter.as_ref()).is_err() {
        tracing::debug!(target: "infinite_scroll_web", "passive probe: cannot build descriptor");
        return false;
    }
    let options = Object::new();
    Object::define_property(&options, &JsValue::from_str("passive"), &descriptor);
    let options: &AddEventListenerOptions = options.unchecked_ref();

    let noop = Closure::<dyn FnMut()>::new(|| {});
    let callback = noop.as_ref().unchecked_ref();
    if document
        .add_event_listener_with_callback_and_add_event_listener_options("test", callback, options)
        .is_ok()
    {
        let _ = document.remove_event_listener_with_callback("test", callback);
    }

    supported.get()
}
