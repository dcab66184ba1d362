/// The constitutive branch taken during one step.
///
/// Decided afresh at every step from the sign of the yield function; the
/// integrator keeps no mode between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// `f ≤ 0`: the increment is purely elastic.
    Elastic,

    /// `f > 0`: plastic flow with dilatancy and image-pressure hardening.
    Plastic,
}

impl Branch {
    /// Selects the branch for a yield function value.
    #[must_use]
    pub fn from_yield_value(yield_value: f64) -> Self {
        if yield_value > 0.0 {
            Self::Plastic
        } else {
            Self::Elastic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_itself_is_elastic() {
        assert_eq!(Branch::from_yield_value(0.0), Branch::Elastic);
        assert_eq!(Branch::from_yield_value(-0.0), Branch::Elastic);
        assert_eq!(Branch::from_yield_value(-1.0), Branch::Elastic);
        assert_eq!(Branch::from_yield_value(1e-12), Branch::Plastic);
    }
}
