/// Quiet period before a search input is committed.
pub(crate) const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Handed out for every input; redeemed when its timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DebounceTicket(u64);

/// Last-value-wins debouncer.
///
/// Timing is owned by the host (a `setTimeout` in the browser). The debouncer only
/// decides which ticket is still live, so a timer that fires late for an older
/// input can never commit its value.
#[derive(Clone, Debug, Default)]
pub(crate) struct Debouncer {
    seq: u64,
    pending: Option<String>,
}

impl Debouncer {
    pub fn push(&mut self, value: impl Into<String>) -> DebounceTicket {
        self.seq = self.seq.wrapping_add(1);
        self.pending = Some(value.into());
        DebounceTicket(self.seq)
    }

    /// Returns the pending value if `ticket` is the most recent one.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<String> {
        if ticket.0 != self.seq {
            return None;
        }
        self.pending.take()
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
