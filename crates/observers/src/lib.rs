//! Reusable observers for NorSand triaxial runs.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose events carry a [`Snapshot`].
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasSnapshot`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`StopAtAxialStrain`] — ends a run at a target axial strain
//! - [`StopAtStressRatio`] — ends a run once `q/p` reaches a ratio
//! - [`BranchTally`] — counts elastic and plastic steps
//!
//! [`Observer`]: norsand_core::Observer
//! [`Snapshot`]: norsand_solvers::triaxial::Snapshot
//! [`HasSnapshot`]: traits::HasSnapshot
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod stop;
mod tally;

pub use stop::{StopAtAxialStrain, StopAtStressRatio};
pub use tally::BranchTally;
