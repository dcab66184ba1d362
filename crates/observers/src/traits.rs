//! Capability traits for observers of NorSand runs.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once can watch any solver that reports soil states.
//!
//! # Event traits
//!
//! - [`HasSnapshot`] — events that carry the state recorded for a step
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use norsand_core::Observer;
//! use norsand_observers::traits::{CanStopEarly, HasSnapshot};
//!
//! /// Stops once the sample has liquefied.
//! struct Liquefied;
//!
//! impl<E: HasSnapshot, A: CanStopEarly> Observer<E, A> for Liquefied {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.snapshot().p <= 0.0).then(A::stop_early)
//!     }
//! }
//! ```

use norsand_solvers::triaxial::{self, Snapshot};

/// An event that carries the snapshot recorded for a step.
pub trait HasSnapshot {
    /// Returns the snapshot for this event.
    fn snapshot(&self) -> &Snapshot;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasSnapshot for triaxial::Event {
    fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl CanStopEarly for triaxial::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
