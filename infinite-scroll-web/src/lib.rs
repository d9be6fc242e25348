//! Browser adapter for the `infinite-scroll` crate.
//!
//! The `infinite-scroll` crate is UI-agnostic and only knows the DOM through its `ScrollHost`
//! trait. This crate implements that trait with `web-sys`:
//!
//! - geometry reads/writes on `Window` and `HtmlElement`
//! - `scroll` / `resize` / `mousewheel` listener registration with capture and passive options
//! - passive-listener capability probing through a getter-bearing options object
//!
//! This crate is intentionally framework-agnostic (no Dioxus/Leptos/Yew bindings): call
//! [`WebInfiniteScroll::mount`] and [`WebInfiniteScroll::notify_updated`] from your framework's
//! mount/effect hooks.
#![forbid(unsafe_code)]

mod dom;
mod error;
mod passive;
mod scroller;

pub use dom::WebDom;
pub use error::Error;
pub use passive::probe_passive_support;
pub use scroller::WebInfiniteScroll;

pub use infinite_scroll::{
    Direction, InfiniteScrollConfig, InfiniteScrollOptions, LoaderPlacement, ScrollOwner,
    TriggerState,
};
