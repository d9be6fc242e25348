use crate::{Direction, TriggerState};

/// The idle/loading state machine plus the page counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadTrigger {
    state: TriggerState,
    page: u32,
}

impl LoadTrigger {
    pub fn new(initial_page: u32) -> Self {
        Self {
            state: TriggerState::Idle,
            page: initial_page,
        }
    }

    pub fn reset(&mut self, initial_page: u32) {
        *self = Self::new(initial_page);
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == TriggerState::Loading
    }

    /// The last page handed to `load_more` (or the initial page before the first load).
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Whether a reading of `offset` should fire a load.
    ///
    /// The comparison is strict: an offset equal to `threshold` does not fire.
    pub fn should_fire(&self, offset: f64, threshold: f64, has_more: bool) -> bool {
        !self.is_loading() && has_more && offset < threshold
    }

    /// Advances the page counter and enters the post-fire state; returns the new page.
    ///
    /// Reverse loads stay `Loading` until `settle` runs after the anchor has been restored;
    /// forward loads need no restoration and return to `Idle` right away.
    pub fn fire(&mut self, direction: Direction) -> u32 {
        self.page = self.page.saturating_add(1);
        self.state = match direction {
            Direction::Forward => TriggerState::Idle,
            Direction::Reverse => TriggerState::Loading,
        };
        self.page
    }

    pub fn settle(&mut self) {
        self.state = TriggerState::Idle;
    }
}

impl Default for LoadTrigger {
    fn default() -> Self {
        Self::new(0)
    }
}
