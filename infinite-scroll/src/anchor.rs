use crate::{AnchorSnapshot, ScrollHost, ScrollOwner};

/// Keeps the viewport visually still when content is inserted above it.
///
/// Flow:
/// 1) `snapshot` right before a reverse-mode load fires
/// 2) the caller prepends items and commits the update
/// 3) `restore` shifts the scroll position by the height that was added
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorPreserver {
    snapshot: Option<AnchorSnapshot>,
}

impl AnchorPreserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the owner's scroll position and content height, replacing any older snapshot.
    pub fn snapshot<H: ScrollHost>(
        &mut self,
        host: &H,
        owner: &ScrollOwner<H::Node>,
    ) -> AnchorSnapshot {
        let snapshot = AnchorSnapshot {
            scroll_top: owner.scroll_position(host),
            scroll_height: owner.content_size(host),
        };
        ltrace!(
            scroll_top = snapshot.scroll_top,
            scroll_height = snapshot.scroll_height,
            "anchor captured"
        );
        self.snapshot = Some(snapshot);
        snapshot
    }

    pub fn pending(&self) -> Option<AnchorSnapshot> {
        self.snapshot
    }

    /// Consumes the pending snapshot and rewrites the owner's scroll position to
    /// `scroll_top + (new_height - old_height)`.
    ///
    /// Returns the applied position, or `None` when there was no snapshot or the owner could not
    /// be resolved (the snapshot is discarded either way).
    pub fn restore<H: ScrollHost>(
        &mut self,
        host: &H,
        owner: Option<&ScrollOwner<H::Node>>,
    ) -> Option<f64> {
        let snapshot = self.snapshot.take()?;
        let Some(owner) = owner else {
            lwarn!("anchor restoration skipped: scroll owner unresolved");
            return None;
        };
        let scroll_top = snapshot.restored_scroll_top(owner.content_size(host));
        owner.set_scroll_position(host, scroll_top);
        ldebug!(
            from = snapshot.scroll_top,
            to = scroll_top,
            "anchor restored"
        );
        Some(scroll_top)
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
    }
}
