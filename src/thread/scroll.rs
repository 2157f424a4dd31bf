//! Scroll-to-newest behavior of the thread view.
//!
//! The view only decides *when* to scroll; the hosting layer implements the
//! primitive through [`ScrollHost`]. Over HTTP the host is the browser and
//! the request travels as the [`SCROLL_EVENT`] HTMX trigger.

/// Client event asking every thread viewport to scroll to its end.
pub const SCROLL_EVENT: &str = "thread-scroll-end";

/// Request to show the newest message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest;

/// Something that can scroll a thread to its end.
pub trait ScrollHost {
    /// Set the vertical scroll position to its maximum.
    fn scroll_to_end(&mut self);
}

/// Tracks the message count last shown to the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollAnchor {
    last_len: Option<usize>,
}

impl ScrollAnchor {
    /// Anchor that has not seen any thread yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor resumed from a count the client reported.
    pub fn resume(seen: Option<usize>) -> Self {
        Self { last_len: seen }
    }

    /// Record the current message count.
    ///
    /// Returns a request whenever the count differs from the previous one,
    /// including the first observation.
    pub fn observe(&mut self, len: usize) -> Option<ScrollRequest> {
        let changed = self.last_len != Some(len);
        self.last_len = Some(len);
        changed.then_some(ScrollRequest)
    }

    /// [`Self::observe`] and forward any request to `host`.
    pub fn sync(&mut self, len: usize, host: &mut dyn ScrollHost) -> bool {
        let requested = self.observe(len).is_some();
        if requested {
            host.scroll_to_end();
        }
        requested
    }
}
