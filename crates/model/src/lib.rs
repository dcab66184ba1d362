//! NorSand critical-state constitutive model for triaxial simulations.
//!
//! This crate holds everything the triaxial integrator needs to know about
//! the soil, and nothing about how the loading is driven:
//!
//! - [`constitutive`] — the pure NorSand functions (stiffness, critical void
//!   ratio, yield surface)
//! - [`NorSand`] — the material constants bundled with a state evaluator that
//!   rejects non-physical states before the functions are called
//! - [`Parameters`] — the validated simulation configuration
//! - [`State`] — the mutable soil state advanced by the integrator
//! - [`CriticalStateLine`] — reference lines for downstream plotting
//! - [`phases`] — void ratio, porosity and density relationships
//!
//! # Features
//!
//! - `serde` (default) — derives `Deserialize`/`Serialize` for
//!   [`Parameters`] and [`TestRecord`] using the conventional config keys
//!   (`N`, `lambda`, `Mc`, `sigM0`, ...).

mod critical_state;
mod error;
mod material;
mod parameters;
mod state;
mod test_record;

pub mod constitutive;
pub mod phases;

pub use critical_state::CriticalStateLine;
pub use error::{ParameterError, Quantity, StateError};
pub use material::{NorSand, Response};
pub use parameters::{Drainage, Parameters};
pub use state::State;
pub use test_record::TestRecord;
