use core::sync::atomic::{AtomicU8, Ordering};

use crate::ScrollHost;

const UNKNOWN: u8 = 0;
const SUPPORTED: u8 = 1;
const UNSUPPORTED: u8 = 2;

/// A lazily filled "are passive listeners supported" answer.
///
/// The answer is a property of the environment and cannot change at runtime, so one probe per
/// process is enough. Racing probes are harmless: both compute the same value.
#[derive(Debug)]
pub struct PassiveSupport {
    state: AtomicU8,
}

impl PassiveSupport {
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(UNKNOWN),
        }
    }

    /// Returns the cached answer, if any probe has run.
    pub fn get(&self) -> Option<bool> {
        match self.state.load(Ordering::Relaxed) {
            SUPPORTED => Some(true),
            UNSUPPORTED => Some(false),
            _ => None,
        }
    }

    pub fn get_or_probe(&self, probe: impl FnOnce() -> bool) -> bool {
        if let Some(supported) = self.get() {
            return supported;
        }
        let supported = probe();
        ldebug!(supported, "passive listener support probed");
        self.state.store(
            if supported { SUPPORTED } else { UNSUPPORTED },
            Ordering::Relaxed,
        );
        supported
    }
}

impl Default for PassiveSupport {
    fn default() -> Self {
        Self::new()
    }
}

static PASSIVE_SUPPORT: PassiveSupport = PassiveSupport::new();

/// Process-wide cached passive-listener support, probing through `host` on first use.
pub fn passive_supported<H: ScrollHost>(host: &H) -> bool {
    PASSIVE_SUPPORT.get_or_probe(|| host.probe_passive_support())
}
