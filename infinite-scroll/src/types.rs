/// Which edge of the content new items arrive at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Items are appended; loading triggers near the bottom edge.
    #[default]
    Forward,
    /// Items are prepended; loading triggers near the top edge and the viewport is re-anchored.
    Reverse,
}

impl Direction {
    pub fn from_reverse(is_reverse: bool) -> Self {
        if is_reverse {
            Self::Reverse
        } else {
            Self::Forward
        }
    }

    pub fn is_reverse(self) -> bool {
        matches!(self, Self::Reverse)
    }
}

/// The DOM events the controller listens to on its scroll owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Scroll,
    Resize,
    /// Legacy `mousewheel`; only used to cancel an over-scroll glitch, never to trigger loads.
    Wheel,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [EventKind::Scroll, EventKind::Resize, EventKind::Wheel];

    /// The DOM event type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Resize => "resize",
            Self::Wheel => "mousewheel",
        }
    }
}

/// Options passed to `addEventListener` / `removeEventListener`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerOptions {
    pub capture: bool,
    pub passive: bool,
}

impl ListenerOptions {
    /// Whether a `mousewheel` event with `delta_y` must have its default action prevented.
    ///
    /// Works around a browser stall on a one-pixel downward wheel delta. A passive listener
    /// cannot call `preventDefault`, so nothing is prevented when registrations are passive.
    pub fn prevents_wheel(self, delta_y: f64) -> bool {
        delta_y == 1.0 && !self.passive
    }
}

/// Load-trigger state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerState {
    #[default]
    Idle,
    Loading,
}

/// Where the caller should render its loading indicator relative to the content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoaderPlacement {
    /// Nothing left to load.
    Hidden,
    BeforeContent,
    AfterContent,
}

/// Scroll metrics of the scroll owner, captured right before a reverse-mode load.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorSnapshot {
    pub scroll_top: f64,
    pub scroll_height: f64,
}

impl AnchorSnapshot {
    /// The scroll position that keeps the same content pixel in place once the total height
    /// has become `new_scroll_height`.
    pub fn restored_scroll_top(&self, new_scroll_height: f64) -> f64 {
        self.scroll_top + (new_scroll_height - self.scroll_height)
    }
}
