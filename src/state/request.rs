//! Per-action request lifecycle flags.
//!
//! DESIGN
//! ======
//! One slot per request type enforces the at-most-one-pending rule: the
//! triggering control is disabled while its slot is pending, and `begin`
//! refuses a second start even if the disable is bypassed. Because the
//! client runs on the single-threaded browser event loop, the flag alone is
//! enough; no queue, no lock, no stale-response suppression.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

/// Lifecycle flag for one request type: `Idle -> Pending -> Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSlot {
    pending: bool,
}

impl RequestSlot {
    /// Try to move `Idle -> Pending`. Returns `false` (and changes nothing)
    /// when a request of this type is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Terminal transition back to `Idle`, on success and failure alike.
    pub fn finish(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.pending
    }
}

/// The two independent request slots the tracer page owns.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestSlots {
    pub preview: RequestSlot,
    pub trace: RequestSlot,
}
