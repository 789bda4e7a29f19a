use portable_atomic::{AtomicBool, Ordering};

/// A pending request to switch messages at the next message boundary.
///
/// The input side only ever calls [`request`](Self::request): a single atomic
/// store that touches nothing else, so it is safe from an interrupt or a task
/// that preempts the tick handler. The encoder is the only reader and clears
/// the flag with [`take`](Self::take) when it applies the switch.
///
/// Requests coalesce: any number of calls before the boundary is one switch.
///
/// This should be assigned to a static variable and shared by reference.
#[derive(Debug, Default)]
pub struct ToggleRequest(AtomicBool);

impl ToggleRequest {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Asks for the other message. Idempotent.
    #[inline]
    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Reads and clears the flag in one step.
    #[inline]
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }

    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Drops any pending request.
    #[inline]
    pub fn clear(&self) {
        self.0.store(false, Ordering::Release);
    }
}
