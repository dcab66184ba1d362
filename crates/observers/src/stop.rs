//! Observers that end a run once the sample reaches a target state.

use norsand_core::Observer;

use crate::traits::{CanStopEarly, HasSnapshot};

/// Stops a run once the axial strain reaches `limit`.
///
/// The step that reaches the limit is kept in the history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAtAxialStrain {
    pub limit: f64,
}

impl StopAtAxialStrain {
    #[must_use]
    pub fn new(limit: f64) -> Self {
        Self { limit }
    }
}

impl<E: HasSnapshot, A: CanStopEarly> Observer<E, A> for StopAtAxialStrain {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.snapshot().eps1 >= self.limit).then(A::stop_early)
    }
}

/// Stops a run once the stress ratio `q/p` reaches `ratio`.
///
/// Steps with a non-positive effective mean stress never trigger a stop,
/// since the ratio is undefined there. Passing `M_c` ends the run when the
/// stress path meets the critical-state line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAtStressRatio {
    pub ratio: f64,
}

impl StopAtStressRatio {
    #[must_use]
    pub fn new(ratio: f64) -> Self {
        Self { ratio }
    }
}

impl<E: HasSnapshot, A: CanStopEarly> Observer<E, A> for StopAtStressRatio {
    fn observe(&mut self, event: &E) -> Option<A> {
        let snapshot = event.snapshot();
        let reached = snapshot.p > 0.0 && snapshot.q / snapshot.p >= self.ratio;
        reached.then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use norsand_model::{NorSand, Parameters, State};
    use norsand_solvers::triaxial::{Action, Event, Snapshot, Status, Triaxial};

    fn dense_sand() -> Parameters {
        Parameters::new(0.95, 0.05, 1.2, 0.25, 0.5, 0.65, 100.0)
            .with_num_steps(201)
            .with_max_strain(0.2)
    }

    #[test]
    fn axial_strain_limit_truncates_the_history() {
        let solution = Triaxial::new(dense_sand())
            .expect("valid parameters")
            .run_observed(StopAtAxialStrain::new(0.0505))
            .expect("physical run");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 51);
        let last = solution.last().expect("at least one step");
        assert!(last.eps1 >= 0.0505);
        assert!(solution.history[solution.steps - 2].eps1 < 0.0505);
    }

    #[test]
    fn unreachable_strain_lets_the_run_complete() {
        let solution = Triaxial::new(dense_sand().with_num_steps(20))
            .expect("valid parameters")
            .run_observed(StopAtAxialStrain::new(1.0))
            .expect("physical run");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 20);
    }

    #[test]
    fn stress_ratio_stops_at_the_critical_state_line() {
        let params = dense_sand();
        let solution = Triaxial::new(params)
            .expect("valid parameters")
            .run_observed(StopAtStressRatio::new(params.mc()))
            .expect("physical run");

        assert_eq!(solution.status, Status::StoppedByObserver);
        let last = solution.last().expect("at least one step");
        assert!(last.q / last.p >= params.mc());
        for earlier in &solution.history[..solution.steps - 1] {
            assert!(earlier.q / earlier.p < params.mc());
        }
    }

    #[test]
    fn stress_ratio_ignores_non_positive_pressure() {
        let params = dense_sand();
        let response = NorSand::from_parameters(&params)
            .evaluate(&State::initial(&params))
            .expect("physical state");
        let snapshot = Snapshot {
            step: 0,
            eps1: 0.001,
            eps_v: 0.0,
            p: -1.0,
            q: 10.0,
            e: 0.65,
            psi: -0.3,
            p_img: 100.0,
            yield_value: 0.0,
            pore_pressure: 101.0,
        };
        let event = Event {
            step: 0,
            snapshot,
            response,
        };

        let mut observer = StopAtStressRatio::new(0.5);
        let action: Option<Action> = observer.observe(&event);
        assert_eq!(action, None);
    }
}
