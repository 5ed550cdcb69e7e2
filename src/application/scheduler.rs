//! Cancellable scheduled work with at most one outstanding handle per slot.

/// Something scheduled that can be called off (a timeout, an interval, ...)
pub trait TaskHandle {
    fn cancel(self);
}

/// Holds at most one active task; scheduling a new one cancels the old one.
#[derive(Debug)]
pub struct TaskSlot<H: TaskHandle> {
    active: Option<H>,
}

impl<H: TaskHandle> Default for TaskSlot<H> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<H: TaskHandle> TaskSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel whatever is scheduled, then keep `handle` as the active task
    pub fn replace(&mut self, handle: H) {
        self.cancel();
        self.active = Some(handle);
    }

    /// Returns whether a task was cancelled
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

impl<H: TaskHandle> Drop for TaskSlot<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Monotonic ticket issued per scheduling; only the newest one is honoured.
///
/// Used where the callback of a cancelled timer may still arrive (debounce).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct TicketCounter {
    latest: u64,
}

impl TicketCounter {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest && self.latest != 0
    }

    /// Make every outstanding ticket stale
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
