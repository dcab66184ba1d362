//! Core traits for the NorSand triaxial simulator.
//!
//! This crate defines the abstraction that the solver and the reusable
//! observers share:
//!
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;

pub use observer::Observer;
