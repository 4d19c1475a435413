//! Per-form submission bookkeeping.
//!
//! A form may be submitted again while an earlier request is still in flight.
//! Every submit takes a [`Ticket`] from the form's [`SubmissionTracker`]; only
//! the outcome of the latest ticket is ever applied, and taking a new ticket
//! cancels the previous one.

use std::cell::Cell;
use std::rc::Rc;

use crate::model::result::SubmissionResult;

/// Where a form is in its `Idle → Loading → (Rendered | Errored) → Idle` cycle.
///
/// `Rendered` and `Errored` are idle states that also say what the result
/// container currently shows; the next submit moves to `Loading` from any of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Loading,
    Rendered,
    Errored,
}

impl SubmissionPhase {
    pub fn current(loading: bool, shown: Option<&SubmissionResult>) -> Self {
        match (loading, shown) {
            (true, _) => SubmissionPhase::Loading,
            (false, None) => SubmissionPhase::Idle,
            (false, Some(result)) if result.is_success() => SubmissionPhase::Rendered,
            (false, Some(_)) => SubmissionPhase::Errored,
        }
    }

    pub fn is_loading(self) -> bool {
        self == SubmissionPhase::Loading
    }
}

/// Shared flag telling an in-flight task that its result is no longer wanted.
#[derive(Clone, Debug, Default)]
pub struct CancellationFlag(Rc<Cell<bool>>);

impl CancellationFlag {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Handed to the task that performs one submission.
#[derive(Clone, Debug)]
pub struct Ticket {
    sequence: u64,
    flag: CancellationFlag,
}

impl Ticket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.is_cancelled()
    }
}

/// Request counter plus "latest applied" marker for one form.
#[derive(Debug, Default)]
pub struct SubmissionTracker {
    issued: u64,
    applied: u64,
    current: Option<CancellationFlag>,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the ticket for a new submission, cancelling the one in flight.
    pub fn begin(&mut self) -> Ticket {
        if let Some(previous) = self.current.take() {
            previous.cancel();
        }
        self.issued += 1;
        let flag = CancellationFlag::default();
        self.current = Some(flag.clone());
        Ticket {
            sequence: self.issued,
            flag,
        }
    }

    /// Records that request `sequence` settled.
    ///
    /// Returns `true` when its outcome must be applied, `false` for a stale or
    /// already applied sequence.
    pub fn settle(&mut self, sequence: u64) -> bool {
        if sequence != self.issued || sequence <= self.applied {
            return false;
        }
        self.applied = sequence;
        self.current = None;
        true
    }

    /// True while the latest issued request has not settled.
    pub fn is_loading(&self) -> bool {
        self.issued > self.applied
    }

    pub fn latest_issued(&self) -> u64 {
        self.issued
    }
}
