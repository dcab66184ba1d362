//! Solvers for NorSand element tests.
//!
//! # Solvers
//!
//! - [`triaxial`] — strain-driven integration of a drained or undrained
//!   triaxial compression test

pub mod triaxial;
