use crate::geometry::{current_offset, distance_to_edge, resolve_scroll_owner};
use crate::passive::passive_supported;
use crate::{
    AnchorPreserver, AnchorSnapshot, InfiniteScrollOptions, ListenerLifecycle, ListenerOptions,
    LoadTrigger, LoaderPlacement, ScrollHost, ScrollOwner, TriggerState,
};

/// A headless "load more" controller attached to one DOM subtree.
///
/// This type does not own any DOM objects beyond the root handle. Adapters drive it by calling:
/// - `mount` once the root node exists
/// - `on_scroll` from the `scroll` / `resize` listeners it registered through [`ScrollHost`]
/// - `on_wheel` from the `mousewheel` listener
/// - `on_update` after every committed render of the subtree
/// - `unmount` on teardown
///
/// Overlapping loads are prevented by detaching listeners when a load fires; they come back on
/// the next `on_update`. If the caller never commits an update after a load, the controller
/// stays detached.
#[derive(Clone, Debug)]
pub struct InfiniteScroll<N> {
    options: InfiniteScrollOptions<N>,
    root: Option<N>,
    mounted: bool,
    trigger: LoadTrigger,
    listeners: ListenerLifecycle<N>,
    anchor: AnchorPreserver,
}

impl<N: Clone + PartialEq> InfiniteScroll<N> {
    pub fn new(options: InfiniteScrollOptions<N>) -> Self {
        ldebug!(
            threshold = options.config.threshold,
            is_reverse = options.config.is_reverse,
            use_window = options.config.use_window,
            "InfiniteScroll::new"
        );
        Self {
            trigger: LoadTrigger::new(options.config.initial_page),
            options,
            root: None,
            mounted: false,
            listeners: ListenerLifecycle::new(),
            anchor: AnchorPreserver::new(),
        }
    }

    pub fn options(&self) -> &InfiniteScrollOptions<N> {
        &self.options
    }

    /// Replaces the configuration wholesale.
    ///
    /// Listener changes (a `has_more` flip, a different scroll owner, capture phase) are applied
    /// on the next `on_update`. Until then a `has_more == false` configuration still blocks loads.
    pub fn set_options(&mut self, options: InfiniteScrollOptions<N>) {
        ltrace!(
            has_more = options.config.has_more,
            is_reverse = options.config.is_reverse,
            "InfiniteScroll::set_options"
        );
        self.options = options;
        let mut listener_options = self.listeners.listener_options();
        listener_options.capture = self.options.config.use_capture;
        self.listeners.set_listener_options(listener_options);
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut InfiniteScrollOptions<N>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn root(&self) -> Option<&N> {
        self.root.as_ref()
    }

    /// Hands the controller a new root handle (e.g. the host re-created the node).
    pub fn set_root(&mut self, root: Option<N>) {
        self.root = root;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn state(&self) -> TriggerState {
        self.trigger.state()
    }

    pub fn is_loading(&self) -> bool {
        self.trigger.is_loading()
    }

    /// The page last passed to `load_more`, or the initial page before any load.
    pub fn page(&self) -> u32 {
        self.trigger.page()
    }

    pub fn is_attached(&self) -> bool {
        self.listeners.is_attached()
    }

    pub fn attached_owner(&self) -> Option<&ScrollOwner<N>> {
        self.listeners.owner()
    }

    pub fn listener_options(&self) -> ListenerOptions {
        self.listeners.listener_options()
    }

    pub fn pending_anchor(&self) -> Option<AnchorSnapshot> {
        self.anchor.pending()
    }

    /// Where to render the caller's loader, if at all.
    pub fn loader_placement(&self) -> LoaderPlacement {
        let config = &self.options.config;
        if !config.has_more {
            LoaderPlacement::Hidden
        } else if config.is_reverse {
            LoaderPlacement::BeforeContent
        } else {
            LoaderPlacement::AfterContent
        }
    }

    /// Resolves the scroll owner for the current options and root.
    pub fn scroll_owner<H: ScrollHost<Node = N>>(&self, host: &H) -> Option<ScrollOwner<N>> {
        resolve_scroll_owner(
            host,
            self.root.as_ref(),
            &self.options.config,
            self.options.get_scroll_parent.as_ref(),
        )
    }

    /// The current distance to the trigger edge, or `None` while geometry is unavailable.
    pub fn offset<H: ScrollHost<Node = N>>(&self, host: &H) -> Option<f64> {
        current_offset(
            host,
            self.root.as_ref(),
            &self.options.config,
            self.options.get_scroll_parent.as_ref(),
        )
    }

    /// Starts sensing: resets the page counter, resolves passive support and attaches.
    pub fn mount<H: ScrollHost<Node = N>>(&mut self, host: &H, root: Option<N>) {
        self.root = root;
        self.mounted = true;
        self.trigger.reset(self.options.config.initial_page);
        self.anchor.clear();
        self.listeners.set_listener_options(ListenerOptions {
            capture: self.options.config.use_capture,
            passive: passive_supported(host),
        });
        ldebug!(page = self.trigger.page(), "InfiniteScroll::mount");
        self.sync_listeners(host);
    }

    /// Post-commit notification from the host.
    ///
    /// Restores the reverse-mode anchor of an outstanding load (before anything re-attaches, so
    /// the scroll caused by the restoration is not observed), returns to `Idle`, then re-attaches
    /// or, once `has_more` is false, detaches.
    pub fn on_update<H: ScrollHost<Node = N>>(&mut self, host: &H) {
        if !self.mounted {
            return;
        }
        if self.trigger.is_loading() {
            let owner = self.scroll_owner(host);
            self.anchor.restore(host, owner.as_ref());
            self.trigger.settle();
        }
        self.sync_listeners(host);
    }

    /// Handles a `scroll` or `resize` event.
    ///
    /// Returns the page passed to `load_more` when a load fired.
    pub fn on_scroll<H: ScrollHost<Node = N>>(&mut self, host: &H) -> Option<u32> {
        let page = self.evaluate_scroll(host)?;
        if let Some(load_more) = self.options.load_more.clone() {
            load_more(page);
        }
        Some(page)
    }

    /// Runs everything `on_scroll` does except invoking `load_more`.
    ///
    /// On a fire the listeners are already detached, the reverse-mode anchor is captured and the
    /// page counter has advanced; the caller owes `load_more(page)`. Hosts that keep the
    /// controller behind a `RefCell` use this to release the borrow before running user code.
    pub fn evaluate_scroll<H: ScrollHost<Node = N>>(&mut self, host: &H) -> Option<u32> {
        if !self.listeners.is_attached() {
            ltrace!("event ignored: listeners detached");
            return None;
        }
        let config = self.options.config;
        let Some(root) = self.root.as_ref() else {
            ltrace!("event ignored: root not mounted");
            return None;
        };
        let Some(owner) = self.scroll_owner(host) else {
            ltrace!("event ignored: scroll owner unresolved");
            return None;
        };
        let offset = distance_to_edge(host, root, &owner, config.direction());
        if !self
            .trigger
            .should_fire(offset, config.threshold, config.has_more)
        {
            return None;
        }

        self.listeners.detach(host);
        if config.is_reverse {
            self.anchor.snapshot(host, &owner);
        }
        let page = self.trigger.fire(config.direction());
        ldebug!(page, offset, threshold = config.threshold, "load fired");
        Some(page)
    }

    /// Handles a `mousewheel` event; returns whether its default action must be prevented.
    ///
    /// See [`ListenerOptions::prevents_wheel`].
    pub fn on_wheel(&self, delta_y: f64) -> bool {
        self.listeners.listener_options().prevents_wheel(delta_y)
    }

    /// Tears down: detaches all listeners and drops the root, the anchor and the trigger state.
    pub fn unmount<H: ScrollHost<Node = N>>(&mut self, host: &H) {
        self.listeners.detach(host);
        self.anchor.clear();
        self.trigger.reset(self.options.config.initial_page);
        self.root = None;
        self.mounted = false;
        ldebug!("InfiniteScroll::unmount");
    }

    fn sync_listeners<H: ScrollHost<Node = N>>(&mut self, host: &H) {
        if !self.options.config.has_more {
            self.listeners.detach(host);
            return;
        }
        match self.scroll_owner(host) {
            Some(owner) => {
                self.listeners.attach(host, Some(owner), true);
            }
            None => {
                self.listeners.detach(host);
            }
        }
    }
}
