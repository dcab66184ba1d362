use norsand_model::StateError;

/// Errors that can occur while stepping a triaxial run.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// Step `step` started from, or would have produced, a state the
    /// constitutive law cannot be evaluated at.
    ///
    /// The run is aborted; snapshots up to `step - 1` were produced but are
    /// not returned.
    #[error("non-physical state at step {step}: {source}")]
    NonPhysical {
        step: usize,
        #[source]
        source: StateError,
    },
}

impl Error {
    /// Returns the index of the step that failed.
    #[must_use]
    pub fn step(&self) -> usize {
        match self {
            Self::NonPhysical { step, .. } => *step,
        }
    }
}
