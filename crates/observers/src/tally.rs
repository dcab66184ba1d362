use norsand_core::Observer;
use norsand_solvers::triaxial::Branch;

use crate::traits::HasSnapshot;

/// Counts elastic and plastic steps during a run.
///
/// Never returns an action. Pass `&mut BranchTally` to a solver to read the
/// counts after the run completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BranchTally {
    elastic: usize,
    plastic: usize,
    first_plastic: Option<usize>,
}

impl BranchTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps that took the elastic branch.
    #[must_use]
    pub fn elastic(&self) -> usize {
        self.elastic
    }

    /// Number of steps that took the plastic branch.
    #[must_use]
    pub fn plastic(&self) -> usize {
        self.plastic
    }

    /// Total number of steps observed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.elastic + self.plastic
    }

    /// Index of the first plastic step, if the sample ever yielded.
    #[must_use]
    pub fn first_plastic(&self) -> Option<usize> {
        self.first_plastic
    }

    fn record(&mut self, step: usize, branch: Branch) {
        match branch {
            Branch::Elastic => self.elastic += 1,
            Branch::Plastic => {
                self.plastic += 1;
                self.first_plastic.get_or_insert(step);
            }
        }
    }
}

impl<E: HasSnapshot, A> Observer<E, A> for BranchTally {
    fn observe(&mut self, event: &E) -> Option<A> {
        let snapshot = event.snapshot();
        self.record(snapshot.step, snapshot.branch());
        None
    }
}

/// Allows `&mut BranchTally` to be passed to solvers that take an observer
/// by value, so the counts can be read after the run.
impl<E: HasSnapshot, A> Observer<E, A> for &mut BranchTally {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use norsand_model::Parameters;
    use norsand_solvers::triaxial::{Status, Triaxial};

    fn dense_sand() -> Parameters {
        Parameters::new(0.95, 0.05, 1.2, 0.25, 0.5, 0.65, 100.0)
            .with_num_steps(5)
            .with_max_strain(0.1)
    }

    #[test]
    fn counts_sum_to_the_number_of_steps() {
        for undrained in [false, true] {
            let mut tally = BranchTally::new();
            let solution = Triaxial::new(dense_sand().with_undrained(undrained))
                .expect("valid parameters")
                .run_observed(&mut tally)
                .expect("physical run");

            assert_eq!(solution.status, Status::Complete);
            assert_eq!(tally.total(), solution.steps);
            assert_eq!(tally.elastic(), 1);
            assert_eq!(tally.plastic(), 4);
            assert_eq!(tally.first_plastic(), Some(1));
        }
    }

    #[test]
    fn empty_tally() {
        let tally = BranchTally::new();
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.first_plastic(), None);
    }

    #[test]
    fn first_plastic_step_is_kept() {
        let mut tally = BranchTally::new();
        tally.record(0, Branch::Elastic);
        tally.record(3, Branch::Plastic);
        tally.record(4, Branch::Elastic);
        tally.record(7, Branch::Plastic);

        assert_eq!(tally.elastic(), 2);
        assert_eq!(tally.plastic(), 2);
        assert_eq!(tally.first_plastic(), Some(3));
    }
}
