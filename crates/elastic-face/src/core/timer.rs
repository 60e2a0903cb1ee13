use super::element::ElementKind;

/// Owned handle to a scheduled reset. Pass it back to [`ResetTimers::cancel`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
struct PendingReset {
    id: u64,
    element: ElementKind,
    due_ms: f64,
}

/// Delayed "snap back to rest" requests, fired by the frame tick.
#[derive(Debug, Default)]
pub struct ResetTimers {
    pending: Vec<PendingReset>,
    next_id: u64,
}

impl ResetTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a reset of `element` at `due_ms`. An earlier pending reset for
    /// the same element is replaced.
    pub fn schedule(&mut self, element: ElementKind, due_ms: f64) -> TimerHandle {
        self.cancel_for(element);
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(PendingReset { id, element, due_ms });
        TimerHandle(id)
    }

    /// Cancel a single timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != handle.0);
        self.pending.len() != before
    }

    /// Cancel whatever is pending for `element`.
    pub fn cancel_for(&mut self, element: ElementKind) {
        self.pending.retain(|p| p.element != element);
    }

    /// Teardown: drop every pending timer.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Remove and return the elements whose reset is due at `now_ms`.
    pub fn due(&mut self, now_ms: f64) -> Vec<ElementKind> {
        let mut fired = Vec::new();
        self.pending.retain(|p| {
            if p.due_ms <= now_ms {
                fired.push(p.element);
                false
            } else {
                true
            }
        });
        fired
    }

    pub fn is_pending(&self, element: ElementKind) -> bool {
        self.pending.iter().any(|p| p.element == element)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
