//! A headless, viewport-driven "load more" controller.
//!
//! For the browser adapter (`web-sys` listeners, passive-listener probe), see the
//! `infinite-scroll-web` crate.
//!
//! The crate watches a scrollable surface, either the window or a container element, and fires a
//! caller-supplied `load_more(page)` callback when the visible content gets within `threshold`
//! pixels of its edge:
//! - forward mode appends items and triggers near the bottom edge
//! - reverse mode prepends items, triggers near the top edge and re-anchors the scroll position
//!   so the content the user was reading does not move
//!
//! It is UI-agnostic. An adapter is expected to provide:
//! - DOM geometry and listener registration through [`ScrollHost`]
//! - a handle to the root node of the monitored subtree
//! - a notification after every committed render (`InfiniteScroll::on_update`)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
pub mod geometry;
mod host;
mod listeners;
mod options;
mod passive;
mod trigger;
mod types;

#[cfg(test)]
mod tests;

pub use anchor::AnchorPreserver;
pub use controller::InfiniteScroll;
pub use host::{ScrollHost, ScrollOwner};
pub use listeners::ListenerLifecycle;
pub use options::{
    DEFAULT_THRESHOLD, InfiniteScrollConfig, InfiniteScrollOptions, LoadMoreCallback,
    ScrollParentResolver,
};
pub use passive::{PassiveSupport, passive_supported};
pub use trigger::LoadTrigger;
pub use types::{
    AnchorSnapshot, Direction, EventKind, ListenerOptions, LoaderPlacement, TriggerState,
};
