use crate::{
    Parameters, State, StateError,
    constitutive::{
        REFERENCE_PRESSURE, critical_void_ratio, elastic_shear_modulus, yield_function,
    },
};

/// The NorSand material constants used while stepping.
///
/// Built from [`Parameters`]; the initial state and loading controls stay on
/// the parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NorSand {
    /// Critical-state line intercept `N`.
    pub n: f64,

    /// Critical-state line slope `λ`.
    pub lambda: f64,

    /// Critical stress ratio `M_c`.
    pub mc: f64,

    /// Dilatancy coefficient `χ`.
    pub chi: f64,

    /// Plastic hardening baseline `H0`.
    pub h0: f64,

    /// Hardening-ψ coefficient `HY`.
    pub hy: f64,

    /// Bulk to shear stiffness ratio `K/G`.
    pub k_over_g: f64,
}

/// The constitutive response evaluated at one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Response {
    /// Elastic shear modulus `G`.
    pub shear_modulus: f64,

    /// Elastic bulk modulus `K = G·(K/G)`.
    pub bulk_modulus: f64,

    /// Critical-state void ratio `e_c` at the current mean stress.
    pub critical_void_ratio: f64,

    /// State parameter `ψ = e − e_c`.
    pub psi: f64,

    /// Yield function value `f`.
    pub yield_value: f64,
}

impl Response {
    /// Returns `true` when the state lies outside the yield surface.
    #[must_use]
    pub fn is_yielding(&self) -> bool {
        self.yield_value > 0.0
    }
}

impl NorSand {
    /// Extracts the material constants from a parameter set.
    #[must_use]
    pub fn from_parameters(params: &Parameters) -> Self {
        Self {
            n: params.n(),
            lambda: params.lambda(),
            mc: params.mc(),
            chi: params.chi(),
            h0: params.h0(),
            hy: params.hy(),
            k_over_g: params.k_over_g(),
        }
    }

    /// Evaluates stiffness, state parameter and yield value at `state`.
    ///
    /// The state is checked first, so the logarithm and the divisions below
    /// only ever see physical arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if the state is non-physical (see
    /// [`State::check`]).
    pub fn evaluate(&self, state: &State) -> Result<Response, StateError> {
        state.check()?;

        let shear_modulus = elastic_shear_modulus(state.e, state.sigma_m);
        let critical_void_ratio =
            critical_void_ratio(self.n, self.lambda, state.sigma_m, REFERENCE_PRESSURE);
        let psi = state.e - critical_void_ratio;
        let yield_value = yield_function(
            state.sigma_q,
            state.sigma_m,
            psi,
            state.p_img,
            self.mc,
            self.n,
        );

        Ok(Response {
            shear_modulus,
            bulk_modulus: shear_modulus * self.k_over_g,
            critical_void_ratio,
            psi,
            yield_value,
        })
    }

    /// Returns the plastic dilatancy rate `D = χ·ψ`.
    ///
    /// Negative for dense states (dilation), positive for loose states.
    #[must_use]
    pub fn dilatancy(&self, psi: f64) -> f64 {
        self.chi * psi
    }

    /// Returns the image-pressure hardening modulus `h = H0 + HY·ψ`.
    #[must_use]
    pub fn hardening_modulus(&self, psi: f64) -> f64 {
        self.h0 + self.hy * psi
    }
}
