//! One-shot timers on the session clock.
//!
//! Timers are plain data with an expiry timestamp. The game polls
//! [`Schedule::take_due`] once per tick, so firing order is deterministic and
//! tests never wait on wall time.

/// Something that happens once when its timer expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Stop the wrong-click shake on the star at this index.
    ClearJiggle { star: usize },
    /// Allow another hint request.
    HintReady,
    /// Show the completion panel and start the celebration.
    RevealCompletion,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    at: f64,
    seq: u64,
    timer: Timer,
}

/// Pending timers ordered by expiry, then by insertion.
#[derive(Debug, Default)]
pub struct Schedule {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `timer` at time `at`. An identical pending timer is replaced, so
    /// re-triggering extends rather than stacks.
    pub fn schedule(&mut self, at: f64, timer: Timer) {
        self.cancel(timer);
        self.entries.push(Entry { at, seq: self.next_seq, timer });
        self.next_seq += 1;
    }

    /// Drop a pending timer, if any.
    pub fn cancel(&mut self, timer: Timer) {
        self.entries.retain(|e| e.timer != timer);
    }

    pub fn is_pending(&self, timer: Timer) -> bool {
        self.entries.iter().any(|e| e.timer == timer)
    }

    /// Remove and return every timer due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: f64) -> Vec<Timer> {
        let mut due: Vec<Entry> = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].at <= now {
                due.push(self.entries.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| a.at.total_cmp(&b.at).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|e| e.timer).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
