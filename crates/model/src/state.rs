use crate::{Parameters, Quantity, StateError};

/// The soil state advanced by a triaxial integrator.
///
/// All stresses are in kPa. Under undrained loading `sigma_m` is the total
/// mean stress and the effective mean stress is `sigma_m - u`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    /// Void ratio `e`.
    pub e: f64,

    /// Mean stress `σ_M`.
    pub sigma_m: f64,

    /// Deviatoric stress `σ_Q`.
    pub sigma_q: f64,

    /// Image pressure `p_img`.
    pub p_img: f64,

    /// Accumulated axial strain `ε1`.
    pub eps1: f64,

    /// Accumulated volumetric strain `ε_V`.
    pub eps_v: f64,

    /// Accumulated pore pressure `u`.
    pub u: f64,
}

impl State {
    /// Creates the isotropically consolidated state a shearing run starts from.
    ///
    /// The image pressure starts at `σ_M0`; stresses other than `σ_M`, the
    /// strains and the pore pressure start at zero.
    #[must_use]
    pub fn initial(params: &Parameters) -> Self {
        Self {
            e: params.e0(),
            sigma_m: params.sigma_m0(),
            sigma_q: 0.0,
            p_img: params.sigma_m0(),
            eps1: 0.0,
            eps_v: 0.0,
            u: 0.0,
        }
    }

    /// Checks that the constitutive law can be evaluated at this state.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] naming the first offending quantity when
    /// `e ≤ −1`, `σ_M ≤ 0`, `p_img ≤ 0`, or any of those, `σ_Q` or `u` is
    /// non-finite.
    pub fn check(&self) -> Result<(), StateError> {
        let fail = |quantity, value| Err(StateError { quantity, value });

        if !self.e.is_finite() || self.e <= -1.0 {
            return fail(Quantity::VoidRatio, self.e);
        }
        if !self.sigma_m.is_finite() || self.sigma_m <= 0.0 {
            return fail(Quantity::MeanStress, self.sigma_m);
        }
        if !self.p_img.is_finite() || self.p_img <= 0.0 {
            return fail(Quantity::ImagePressure, self.p_img);
        }
        if !self.sigma_q.is_finite() {
            return fail(Quantity::DeviatoricStress, self.sigma_q);
        }
        if !self.u.is_finite() {
            return fail(Quantity::PorePressure, self.u);
        }
        Ok(())
    }
}
