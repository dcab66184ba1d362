use crate::ParameterError;

/// Default number of strain increments.
pub const DEFAULT_NUM_STEPS: usize = 4000;

/// Default maximum axial strain.
pub const DEFAULT_MAX_STRAIN: f64 = 0.3;

/// Default plastic hardening baseline `H0`.
pub const DEFAULT_H0: f64 = 5.0;

/// Default hardening-ψ coefficient `HY`.
pub const DEFAULT_HY: f64 = 10.0;

/// Default bulk to shear stiffness ratio `K/G`.
pub const DEFAULT_K_OVER_G: f64 = 2.0;

/// Whether pore fluid may leave the sample during shearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Drainage {
    /// Volume change is permitted and pore pressure stays at zero.
    #[default]
    Drained,

    /// Volume is constrained and pore pressure develops instead.
    Undrained,
}

impl Drainage {
    /// Maps the configuration flag `undrained` to a drainage mode.
    #[must_use]
    pub fn from_undrained(undrained: bool) -> Self {
        if undrained {
            Self::Undrained
        } else {
            Self::Drained
        }
    }
}

/// Input parameters for a NorSand triaxial simulation.
///
/// Required material and initial-state values are passed to
/// [`Parameters::new`]; the loading controls start at their defaults and can
/// be changed with the `with_*` methods:
///
/// ```
/// use norsand_model::{Drainage, Parameters};
///
/// let params = Parameters::new(0.95, 0.05, 1.2, 0.25, 0.5, 0.65, 100.0)
///     .with_num_steps(200)
///     .with_max_strain(0.2)
///     .with_undrained(true);
///
/// assert!(params.validate().is_ok());
/// assert_eq!(params.drainage(), Drainage::Undrained);
/// ```
///
/// With the `serde` feature the same record deserializes from the
/// conventional configuration keys (`N`, `lambda`, `Mc`, `chi`, `K0`, `e0`,
/// `sigM0`, `num_steps`, `max_strain`, `H0`, `HY`, `K_over_G`, `undrained`),
/// with the loading controls optional.
///
/// Values are not checked on construction or deserialization; call
/// [`validate`](Parameters::validate), or let the integrator do it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Parameters {
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    n: f64,

    lambda: f64,

    #[cfg_attr(feature = "serde", serde(rename = "Mc"))]
    mc: f64,

    chi: f64,

    #[cfg_attr(feature = "serde", serde(rename = "K0"))]
    k0: f64,

    e0: f64,

    #[cfg_attr(feature = "serde", serde(rename = "sigM0"))]
    sigma_m0: f64,

    #[cfg_attr(feature = "serde", serde(default = "defaults::num_steps"))]
    num_steps: usize,

    #[cfg_attr(feature = "serde", serde(default = "defaults::max_strain"))]
    max_strain: f64,

    #[cfg_attr(feature = "serde", serde(rename = "H0", default = "defaults::h0"))]
    h0: f64,

    #[cfg_attr(feature = "serde", serde(rename = "HY", default = "defaults::hy"))]
    hy: f64,

    #[cfg_attr(
        feature = "serde",
        serde(rename = "K_over_G", default = "defaults::k_over_g")
    )]
    k_over_g: f64,

    #[cfg_attr(feature = "serde", serde(default))]
    undrained: bool,
}

#[cfg(feature = "serde")]
mod defaults {
    pub(super) fn num_steps() -> usize {
        super::DEFAULT_NUM_STEPS
    }

    pub(super) fn max_strain() -> f64 {
        super::DEFAULT_MAX_STRAIN
    }

    pub(super) fn h0() -> f64 {
        super::DEFAULT_H0
    }

    pub(super) fn hy() -> f64 {
        super::DEFAULT_HY
    }

    pub(super) fn k_over_g() -> f64 {
        super::DEFAULT_K_OVER_G
    }
}

impl Parameters {
    /// Creates parameters from the material constants and the initial state.
    ///
    /// # Input
    ///
    /// * `n` -- critical-state line intercept `N`
    /// * `lambda` -- critical-state line slope `λ`
    /// * `mc` -- critical stress ratio `M_c`
    /// * `chi` -- dilatancy coefficient `χ`
    /// * `k0` -- at-rest stress ratio (stored, not used by the integrator)
    /// * `e0` -- initial void ratio
    /// * `sigma_m0` -- initial mean effective stress `σ_M0` (kPa)
    #[must_use]
    pub fn new(n: f64, lambda: f64, mc: f64, chi: f64, k0: f64, e0: f64, sigma_m0: f64) -> Self {
        Self {
            n,
            lambda,
            mc,
            chi,
            k0,
            e0,
            sigma_m0,
            num_steps: DEFAULT_NUM_STEPS,
            max_strain: DEFAULT_MAX_STRAIN,
            h0: DEFAULT_H0,
            hy: DEFAULT_HY,
            k_over_g: DEFAULT_K_OVER_G,
            undrained: false,
        }
    }

    /// Sets the number of strain increments.
    #[must_use]
    pub fn with_num_steps(mut self, num_steps: usize) -> Self {
        self.num_steps = num_steps;
        self
    }

    /// Sets the axial strain reached over the run.
    #[must_use]
    pub fn with_max_strain(mut self, max_strain: f64) -> Self {
        self.max_strain = max_strain;
        self
    }

    /// Sets the hardening coefficients `H0` and `HY`.
    #[must_use]
    pub fn with_hardening(mut self, h0: f64, hy: f64) -> Self {
        self.h0 = h0;
        self.hy = hy;
        self
    }

    /// Sets the bulk to shear stiffness ratio.
    #[must_use]
    pub fn with_k_over_g(mut self, k_over_g: f64) -> Self {
        self.k_over_g = k_over_g;
        self
    }

    /// Selects undrained (`true`) or drained (`false`) shearing.
    #[must_use]
    pub fn with_undrained(mut self, undrained: bool) -> Self {
        self.undrained = undrained;
        self
    }

    /// Selects the drainage mode.
    #[must_use]
    pub fn with_drainage(self, drainage: Drainage) -> Self {
        self.with_undrained(drainage == Drainage::Undrained)
    }

    /// Checks that the parameters describe a run that can be integrated.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if `num_steps < 2`, if `max_strain` is not
    /// positive, if `e0 ≤ −1`, if `σ_M0` is not positive, or if any value is
    /// non-finite.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.num_steps < 2 {
            return Err(ParameterError::TooFewSteps {
                num_steps: self.num_steps,
            });
        }
        if !self.max_strain.is_finite() || self.max_strain <= 0.0 {
            return Err(ParameterError::MaxStrain(self.max_strain));
        }
        if !self.e0.is_finite() || self.e0 <= -1.0 {
            return Err(ParameterError::VoidRatio(self.e0));
        }
        if !self.sigma_m0.is_finite() || self.sigma_m0 <= 0.0 {
            return Err(ParameterError::MeanStress(self.sigma_m0));
        }

        let named = [
            ("N", self.n),
            ("lambda", self.lambda),
            ("Mc", self.mc),
            ("chi", self.chi),
            ("K0", self.k0),
            ("H0", self.h0),
            ("HY", self.hy),
            ("K_over_G", self.k_over_g),
        ];
        match named.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((name, _)) => Err(ParameterError::NonFinite { name }),
            None => Ok(()),
        }
    }

    /// Returns the fixed strain increment `dε = max_strain / (num_steps − 1)`.
    ///
    /// Only meaningful for validated parameters. With fewer than two steps
    /// there is no interval to divide and the result is infinite.
    #[must_use]
    pub fn strain_increment(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let intervals = self.num_steps.saturating_sub(1) as f64;
        self.max_strain / intervals
    }

    /// Returns the drainage mode.
    #[must_use]
    pub fn drainage(&self) -> Drainage {
        Drainage::from_undrained(self.undrained)
    }

    /// Returns the critical-state line intercept `N`.
    #[must_use]
    pub fn n(&self) -> f64 {
        self.n
    }

    /// Returns the critical-state line slope `λ`.
    #[must_use]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Returns the critical stress ratio `M_c`.
    #[must_use]
    pub fn mc(&self) -> f64 {
        self.mc
    }

    /// Returns the dilatancy coefficient `χ`.
    #[must_use]
    pub fn chi(&self) -> f64 {
        self.chi
    }

    /// Returns the at-rest stress ratio `K0`.
    #[must_use]
    pub fn k0(&self) -> f64 {
        self.k0
    }

    /// Returns the initial void ratio.
    #[must_use]
    pub fn e0(&self) -> f64 {
        self.e0
    }

    /// Returns the initial mean effective stress.
    #[must_use]
    pub fn sigma_m0(&self) -> f64 {
        self.sigma_m0
    }

    /// Returns the number of strain increments.
    #[must_use]
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Returns the axial strain reached over the run.
    #[must_use]
    pub fn max_strain(&self) -> f64 {
        self.max_strain
    }

    /// Returns the plastic hardening baseline `H0`.
    #[must_use]
    pub fn h0(&self) -> f64 {
        self.h0
    }

    /// Returns the hardening-ψ coefficient `HY`.
    #[must_use]
    pub fn hy(&self) -> f64 {
        self.hy
    }

    /// Returns the bulk to shear stiffness ratio.
    #[must_use]
    pub fn k_over_g(&self) -> f64 {
        self.k_over_g
    }
}
