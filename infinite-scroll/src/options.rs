use alloc::rc::Rc;

use crate::Direction;

/// Invoked with the new page number each time a load fires.
///
/// The controller does not await the load; the caller signals completion by committing a
/// content update and calling `InfiniteScroll::on_update`.
pub type LoadMoreCallback = Rc<dyn Fn(u32)>;

/// Overrides the default "parent element of the root" container resolution.
///
/// Called on every attach, so it may return a different element after DOM restructuring.
pub type ScrollParentResolver<N> = Rc<dyn Fn() -> Option<N>>;

pub const DEFAULT_THRESHOLD: f64 = 300.0;

/// Plain-data part of the configuration.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Missing fields take
/// their defaults, and the legacy names `throttle` / `page_start` are accepted for
/// `threshold` / `initial_page`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InfiniteScrollConfig {
    /// Distance in pixels to the trigger edge below which a load fires.
    ///
    /// This is a distance, not a time interval.
    #[cfg_attr(feature = "serde", serde(alias = "throttle"))]
    pub threshold: f64,
    pub is_reverse: bool,
    /// Gates listener attachment. Flip to `false` once the data source is exhausted.
    pub has_more: bool,
    #[cfg_attr(feature = "serde", serde(alias = "page_start"))]
    pub initial_page: u32,
    /// Scroll owner is the window (`true`) or the container element (`false`).
    pub use_window: bool,
    /// Register listeners in the capture phase.
    pub use_capture: bool,
}

impl Default for InfiniteScrollConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            is_reverse: false,
            has_more: true,
            initial_page: 0,
            use_window: true,
            use_capture: false,
        }
    }
}

impl InfiniteScrollConfig {
    pub fn direction(&self) -> Direction {
        Direction::from_reverse(self.is_reverse)
    }
}

/// Configuration for [`crate::InfiniteScroll`].
///
/// Cheap to clone: callbacks are stored in `Rc`s so adapters can rebuild options on every render
/// and hand them to `InfiniteScroll::set_options` without reallocating closures.
pub struct InfiniteScrollOptions<N> {
    pub config: InfiniteScrollConfig,
    pub load_more: Option<LoadMoreCallback>,
    pub get_scroll_parent: Option<ScrollParentResolver<N>>,
}

impl<N> Clone for InfiniteScrollOptions<N> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            load_more: self.load_more.clone(),
            get_scroll_parent: self.get_scroll_parent.clone(),
        }
    }
}

impl<N> Default for InfiniteScrollOptions<N> {
    fn default() -> Self {
        Self {
            config: InfiniteScrollConfig::default(),
            load_more: None,
            get_scroll_parent: None,
        }
    }
}

impl<N> InfiniteScrollOptions<N> {
    /// Creates options with the default configuration and the given load-more callback.
    pub fn new(load_more: impl Fn(u32) + 'static) -> Self {
        Self {
            config: InfiniteScrollConfig::default(),
            load_more: Some(Rc::new(load_more)),
            get_scroll_parent: None,
        }
    }

    pub fn from_config(config: InfiniteScrollConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_config(mut self, config: InfiniteScrollConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_load_more(mut self, load_more: Option<impl Fn(u32) + 'static>) -> Self {
        self.load_more = load_more.map(|f| Rc::new(f) as _);
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    pub fn with_reverse(mut self, is_reverse: bool) -> Self {
        self.config.is_reverse = is_reverse;
        self
    }

    pub fn with_has_more(mut self, has_more: bool) -> Self {
        self.config.has_more = has_more;
        self
    }

    pub fn with_initial_page(mut self, initial_page: u32) -> Self {
        self.config.initial_page = initial_page;
        self
    }

    pub fn with_use_window(mut self, use_window: bool) -> Self {
        self.config.use_window = use_window;
        self
    }

    pub fn with_use_capture(mut self, use_capture: bool) -> Self {
        self.config.use_capture = use_capture;
        self
    }

    pub fn with_get_scroll_parent(
        mut self,
        get_scroll_parent: Option<impl Fn() -> Option<N> + 'static>,
    ) -> Self {
        self.get_scroll_parent = get_scroll_parent.map(|f| Rc::new(f) as _);
        self
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    pub fn direction(&self) -> Direction {
        self.config.direction()
    }

    pub fn has_more(&self) -> bool {
        self.config.has_more
    }
}

impl<N> core::fmt::Debug for InfiniteScrollOptions<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InfiniteScrollOptions")
            .field("config", &self.config)
            .field("load_more", &self.load_more.is_some())
            .field("get_scroll_parent", &self.get_scroll_parent.is_some())
            .finish()
    }
}
