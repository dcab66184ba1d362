use crate::{
    Parameters,
    constitutive::{REFERENCE_PRESSURE, critical_void_ratio},
};

/// The critical-state line in `q–p` and `e–ln p` space.
///
/// Stress and state paths produced by the integrator are usually plotted
/// against these lines: `q = M_c·p` and `e = N − λ·ln(p / p_ref)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalStateLine {
    pub n: f64,
    pub lambda: f64,
    pub mc: f64,
}

impl CriticalStateLine {
    #[must_use]
    pub fn from_parameters(params: &Parameters) -> Self {
        Self {
            n: params.n(),
            lambda: params.lambda(),
            mc: params.mc(),
        }
    }

    /// Deviatoric stress on the line at mean effective stress `p`.
    #[must_use]
    pub fn deviatoric_stress(&self, p: f64) -> f64 {
        self.mc * p
    }

    /// Void ratio on the line at mean effective stress `p`.
    ///
    /// Returns `None` for `p ≤ 0`, where the line is undefined.
    #[must_use]
    pub fn void_ratio(&self, p: f64) -> Option<f64> {
        (p > 0.0).then(|| critical_void_ratio(self.n, self.lambda, p, REFERENCE_PRESSURE))
    }
}
