use crate::{EventKind, ListenerOptions, ScrollHost, ScrollOwner};

#[derive(Clone, Debug)]
struct Attachment<N> {
    owner: ScrollOwner<N>,
    options: ListenerOptions,
}

/// Tracks which scroll owner currently carries the controller's listeners.
///
/// `attach` and `detach` are idempotent. Listeners are removed from the owner (and with the
/// options) they were added with, even if resolution would give a different owner by now.
#[derive(Clone, Debug)]
pub struct ListenerLifecycle<N> {
    options: ListenerOptions,
    attached: Option<Attachment<N>>,
}

impl<N> Default for ListenerLifecycle<N> {
    fn default() -> Self {
        Self {
            options: ListenerOptions::default(),
            attached: None,
        }
    }
}

impl<N: Clone + PartialEq> ListenerLifecycle<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options used by the next attach.
    pub fn listener_options(&self) -> ListenerOptions {
        self.options
    }

    pub fn set_listener_options(&mut self, options: ListenerOptions) {
        self.options = options;
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    pub fn owner(&self) -> Option<&ScrollOwner<N>> {
        self.attached.as_ref().map(|a| &a.owner)
    }

    /// Subscribes `scroll`, `resize` and `mousewheel` on `owner`.
    ///
    /// Skipped when `has_more` is false or no owner could be resolved. Attaching again to the
    /// same owner with the same options is a no-op; a different owner or changed options first
    /// detaches the old registration.
    ///
    /// Returns `true` when listeners are attached afterwards.
    pub fn attach<H: ScrollHost<Node = N>>(
        &mut self,
        host: &H,
        owner: Option<ScrollOwner<N>>,
        has_more: bool,
    ) -> bool {
        if !has_more {
            ltrace!("attach skipped: nothing more to load");
            return self.is_attached();
        }
        let Some(owner) = owner else {
            ltrace!("attach skipped: scroll owner unresolved");
            return self.is_attached();
        };

        if let Some(current) = &self.attached {
            if current.owner == owner && current.options == self.options {
                return true;
            }
            self.detach(host);
        }

        for kind in EventKind::ALL {
            owner.add_listener(host, kind, self.options);
        }
        ldebug!(
            window = owner.is_window(),
            capture = self.options.capture,
            passive = self.options.passive,
            "listeners attached"
        );
        self.attached = Some(Attachment {
            owner,
            options: self.options,
        });
        true
    }

    /// Unsubscribes everything `attach` subscribed. Returns `true` if anything was removed.
    pub fn detach<H: ScrollHost<Node = N>>(&mut self, host: &H) -> bool {
        let Some(Attachment { owner, options }) = self.attached.take() else {
            return false;
        };
        for kind in EventKind::ALL {
            owner.remove_listener(host, kind, options);
        }
        ldebug!(window = owner.is_window(), "listeners detached");
        true
    }
}
