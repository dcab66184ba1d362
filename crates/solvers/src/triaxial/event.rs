use norsand_model::Response;

use super::{Branch, Snapshot};

/// Event emitted by the triaxial integrator after each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step index, starting at 0.
    pub step: usize,

    /// The snapshot recorded for this step.
    pub snapshot: Snapshot,

    /// The constitutive response that selected the branch for this step.
    ///
    /// Evaluated at the state before the increment was applied.
    pub response: Response,
}

impl Event {
    /// Returns the branch taken during this step.
    #[must_use]
    pub fn branch(&self) -> Branch {
        self.snapshot.branch()
    }
}
