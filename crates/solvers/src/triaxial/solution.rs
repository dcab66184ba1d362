use super::Snapshot;

/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a triaxial run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the integrator terminated.
    pub status: Status,

    /// One snapshot per completed step, in step order.
    pub history: Vec<Snapshot>,

    /// Number of steps completed.
    pub steps: usize,
}

impl Solution {
    /// Returns the last snapshot, if any step completed.
    #[must_use]
    pub fn last(&self) -> Option<&Snapshot> {
        self.history.last()
    }
}
