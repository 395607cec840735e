use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::domain::HighlightPhase;

/// Offsets of each phase change from the moment a record enters fade-in.
pub const VISIBLE_AFTER: Duration = Duration::from_millis(200);
pub const FADE_OUT_AFTER: Duration = Duration::from_millis(800);
pub const CLEAR_AFTER: Duration = Duration::from_millis(1200);

/// Time source for the sequencer; swapped for [`ManualClock`] in tests.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-advanced clock for deterministic sequencer tests. Clones share
/// the same underlying instant, so a test can keep a handle while the
/// controller owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// A phase change that has come due for one record. `HighlightPhase::None`
/// clears the highlight entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightStep {
    pub sub_id: String,
    pub phase: HighlightPhase,
}

#[derive(Debug, Clone)]
struct Pending {
    sub_id: String,
    phase: HighlightPhase,
    due: Instant,
}

/// Timer-driven fade state machine for newly added roster entries:
/// fade-in at t=0 (applied by the roster on add), visible at +200ms,
/// fade-out at +800ms, cleared at +1200ms.
///
/// Transitions are keyed per record id, so concurrent sequences never
/// affect each other. The sequencer only reports due steps; the caller
/// applies them to the roster, whose missing-id no-op guards against a
/// step firing after its record was deleted.
#[derive(Debug, Default)]
pub struct HighlightSequencer {
    pending: Vec<Pending>,
}

impl HighlightSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the remaining phase changes for a record entering
    /// fade-in at `now`.
    pub fn start(&mut self, sub_id: &str, now: Instant) {
        for (phase, offset) in [
            (HighlightPhase::Visible, VISIBLE_AFTER),
            (HighlightPhase::FadeOut, FADE_OUT_AFTER),
            (HighlightPhase::None, CLEAR_AFTER),
        ] {
            self.pending.push(Pending {
                sub_id: sub_id.to_string(),
                phase,
                due: now + offset,
            });
        }
        debug!(id = %sub_id, "highlight sequence started");
    }

    /// Drains every transition due at `now`, earliest first, so a record
    /// caught by a long tick still lands on its latest phase.
    pub fn poll(&mut self, now: Instant) -> Vec<HighlightStep> {
        let mut due = Vec::new();
        self.pending.retain(|pending| {
            if pending.due <= now {
                due.push(pending.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|pending| pending.due);
        due.into_iter()
            .map(|pending| HighlightStep {
                sub_id: pending.sub_id,
                phase: pending.phase,
            })
            .collect()
    }

    /// Drops every pending transition for one record, leaving other
    /// records' sequences untouched. Called when the record is deleted.
    pub fn cancel(&mut self, sub_id: &str) {
        let before = self.pending.len();
        self.pending.retain(|pending| pending.sub_id != sub_id);
        if self.pending.len() != before {
            debug!(id = %sub_id, "highlight sequence cancelled");
        }
    }

    /// Drops everything. Session teardown must call this so no timer
    /// outlives the collection it targets.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Earliest pending due instant, letting a host event loop size its
    /// poll timeout.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|pending| pending.due).min()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
