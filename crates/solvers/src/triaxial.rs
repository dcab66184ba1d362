//! Strain-driven triaxial integration of the NorSand model.
//!
//! # Algorithm
//!
//! The run imposes `num_steps` equal axial strain increments
//! `dε = max_strain / (num_steps − 1)`. At each step the integrator:
//!
//! 1. Evaluates the material response at the current state: `G`, `K`, the
//!    critical void ratio, the state parameter `ψ` and the yield value `f`.
//! 2. Takes the elastic branch when `f ≤ 0` and the plastic branch otherwise.
//!    The branch is decided from the current state only.
//! 3. Lets the drainage strategy turn the branch into a state increment and
//!    applies it, advancing the axial strain by `dε`.
//! 4. Records a [`Snapshot`] of the updated state.
//!
//! Snapshot `k` is taken after increment `k`, so `eps1 = (k + 1)·dε`.
//!
//! # Observer Events
//!
//! [`Triaxial::run_observed`] emits one [`Event`] per step, after its snapshot
//! has been recorded. Observers can return [`Action::StopEarly`] to end the
//! run with [`Status::StoppedByObserver`].
//!
//! # Errors
//!
//! The state is checked before every evaluation and again after each
//! increment is applied, so no snapshot ever records a non-physical state. A
//! void ratio at or below −1, a non-positive mean stress or image pressure,
//! or any non-finite state variable aborts the run with
//! [`Error::NonPhysical`], which names the step and the offending quantity.
//!
//! # Example
//!
//! ```
//! use norsand_model::Parameters;
//! use norsand_solvers::triaxial::{Status, Triaxial};
//!
//! let params = Parameters::new(0.95, 0.05, 1.2, 0.25, 0.5, 0.65, 100.0)
//!     .with_num_steps(200)
//!     .with_max_strain(0.2);
//!
//! let solution = Triaxial::new(params)?.run()?;
//!
//! assert_eq!(solution.status, Status::Complete);
//! assert_eq!(solution.history.len(), 200);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod branch;
mod drainage;
mod error;
mod event;
mod snapshot;
mod solution;


pub use action::Action;
pub use branch::Branch;
pub use drainage::{Drained, DrainageUpdate, Increment, PlasticFlow, Undrained};
pub use error::Error;
pub use event::Event;
pub use snapshot::Snapshot;
pub use solution::{Solution, Status};

use norsand_core::Observer;
use norsand_model::{NorSand, ParameterError, Parameters, Response, State};

/// A triaxial compression run in progress.
///
/// Owns the soil state and the snapshots recorded so far. Each instance is
/// independent; running two identical instances gives identical histories.
#[derive(Debug)]
pub struct Triaxial {
    params: Parameters,
    material: NorSand,
    drainage: &'static dyn DrainageUpdate,
    d_eps: f64,
    state: State,
    history: Vec<Snapshot>,
}

impl Triaxial {
    /// Creates a run at the initial state described by `params`.
    ///
    /// The drainage strategy is selected here from the `undrained` flag.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the parameters fail validation, for
    /// example when `num_steps < 2`.
    pub fn new(params: Parameters) -> Result<Self, ParameterError> {
        params.validate()?;

        Ok(Self {
            material: NorSand::from_parameters(&params),
            drainage: drainage::strategy(params.drainage()),
            d_eps: params.strain_increment(),
            state: State::initial(&params),
            history: Vec::with_capacity(params.num_steps()),
            params,
        })
    }

    /// Returns the parameters the run was built from.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    /// Returns the current soil state.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns the fixed axial strain increment `dε`.
    #[must_use]
    pub fn strain_increment(&self) -> f64 {
        self.d_eps
    }

    /// Returns the snapshots recorded so far.
    #[must_use]
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Returns `true` once all requested steps have been taken.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.history.len() >= self.params.num_steps()
    }

    /// Takes one strain increment and returns its snapshot.
    ///
    /// Returns `Ok(None)` without changing anything once the run is complete.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPhysical`] if the current state cannot be
    /// evaluated or the increment would leave it non-physical. The state is
    /// left as it was before the failed step.
    pub fn step(&mut self) -> Result<Option<Snapshot>, Error> {
        if self.is_complete() {
            return Ok(None);
        }
        self.advance().map(|(snapshot, _)| Some(snapshot))
    }

    /// Runs all remaining steps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPhysical`] if any step reaches a non-physical
    /// state. No partial history is returned.
    pub fn run(self) -> Result<Solution, Error> {
        self.run_observed(())
    }

    /// Runs all remaining steps, emitting an [`Event`] after each one.
    ///
    /// See the [module docs](self) for event timing and observer actions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPhysical`] if any step reaches a non-physical
    /// state. No partial history is returned.
    pub fn run_observed<Obs>(mut self, mut observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<Event, Action>,
    {
        while !self.is_complete() {
            let (snapshot, response) = self.advance()?;
            let event = Event {
                step: snapshot.step,
                snapshot,
                response,
            };

            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(self.into_solution(Status::StoppedByObserver));
            }
        }

        Ok(self.into_solution(Status::Complete))
    }

    /// Applies one increment and records its snapshot.
    fn advance(&mut self) -> Result<(Snapshot, Response), Error> {
        let step = self.history.len();
        let response = self
            .material
            .evaluate(&self.state)
            .map_err(|source| Error::NonPhysical { step, source })?;

        let increment = match Branch::from_yield_value(response.yield_value) {
            Branch::Elastic => self.drainage.elastic(&response, self.d_eps),
            Branch::Plastic => {
                let flow = PlasticFlow::new(&self.material, &self.state, &response, self.d_eps);
                self.drainage.plastic(&self.state, &flow)
            }
        };

        let mut next = self.state;
        increment.apply_to(&mut next);
        next.eps1 += self.d_eps;
        next.check().map_err(|source| Error::NonPhysical { step, source })?;
        self.state = next;

        let snapshot = Snapshot {
            step,
            eps1: self.state.eps1,
            eps_v: self.state.eps_v,
            p: self.drainage.effective_mean_stress(&self.state),
            q: self.state.sigma_q,
            e: self.state.e,
            psi: response.psi,
            p_img: self.state.p_img,
            yield_value: response.yield_value,
            pore_pressure: self.drainage.pore_pressure(&self.state),
        };
        self.history.push(snapshot);

        Ok((snapshot, response))
    }

    fn into_solution(self, status: Status) -> Solution {
        Solution {
            status,
            steps: self.history.len(),
            history: self.history,
        }
    }
}
