//! Drained and undrained update rules.
//!
//! The drainage condition decides where the volumetric response of an
//! increment goes: into the mean stress and void ratio when pore fluid can
//! leave the sample, or into the pore pressure when it cannot. Each condition
//! is a [`DrainageUpdate`] strategy chosen once when the integrator is built.

use std::fmt;

use norsand_model::{Drainage, NorSand, Response, State};

/// The change in state produced by one strain increment.
///
/// Axial strain is not part of the increment: every step advances it by the
/// same `dε` regardless of branch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Increment {
    /// Volumetric strain increment `dε_V`.
    pub eps_v: f64,

    /// Mean stress increment `dσ_M`.
    pub sigma_m: f64,

    /// Deviatoric stress increment `dσ_Q`.
    pub sigma_q: f64,

    /// Pore pressure increment `du`.
    pub u: f64,

    /// Void ratio increment `de`.
    pub e: f64,

    /// Image pressure increment `dp_img`.
    pub p_img: f64,
}

impl Increment {
    /// Adds the increment to `state`, leaving the axial strain untouched.
    pub fn apply_to(&self, state: &mut State) {
        state.eps_v += self.eps_v;
        state.sigma_m += self.sigma_m;
        state.sigma_q += self.sigma_q;
        state.u += self.u;
        state.e += self.e;
        state.p_img += self.p_img;
    }
}

/// The plastic flow common to both drainage conditions.
///
/// With dilatancy `D = χ·ψ` and generalized strain increment `dε`:
///
/// ```text
/// dε_V = D·dε
/// dε1  = dε + dε_V/3
/// dσ_Q = 3G·(dε1 − dε_V/3)
/// dσ_M = K·dε_V
/// dp_img = (H0 + HY·ψ)·dε·p_img
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlasticFlow {
    pub d_eps_v: f64,
    pub d_eps1: f64,
    pub d_sigma_q: f64,
    pub d_sigma_m: f64,
    pub d_p_img: f64,
}

impl PlasticFlow {
    /// Computes the flow for one increment from the state and its response.
    #[must_use]
    pub fn new(material: &NorSand, state: &State, response: &Response, d_eps: f64) -> Self {
        let d_eps_v = material.dilatancy(response.psi) * d_eps;
        let d_eps1 = d_eps + d_eps_v / 3.0;
        let hardening = material.hardening_modulus(response.psi);

        Self {
            d_eps_v,
            d_eps1,
            d_sigma_q: 3.0 * response.shear_modulus * (d_eps1 - d_eps_v / 3.0),
            d_sigma_m: response.bulk_modulus * d_eps_v,
            d_p_img: hardening * d_eps * state.p_img,
        }
    }
}

/// A drainage condition's update and reporting rules.
pub trait DrainageUpdate: fmt::Debug + Send + Sync {
    /// Returns the increment for an elastic step of axial strain `d_eps`.
    fn elastic(&self, response: &Response, d_eps: f64) -> Increment;

    /// Routes a plastic flow into a state increment.
    fn plastic(&self, state: &State, flow: &PlasticFlow) -> Increment;

    /// Returns the effective mean stress reported for `state`.
    fn effective_mean_stress(&self, state: &State) -> f64;

    /// Returns the pore pressure reported for `state`.
    fn pore_pressure(&self, state: &State) -> f64;
}

/// Pore fluid drains freely: volume changes, pore pressure stays zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Drained;

/// Pore fluid is trapped: pore pressure absorbs the volumetric response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Undrained;

impl DrainageUpdate for Drained {
    /// Elastic volumetric strain is a third of the axial strain.
    fn elastic(&self, response: &Response, d_eps: f64) -> Increment {
        let d_eps1 = d_eps;
        let d_eps_v = d_eps1 / 3.0;

        Increment {
            eps_v: d_eps_v,
            sigma_q: 3.0 * response.shear_modulus * (d_eps1 - d_eps_v / 3.0),
            sigma_m: response.bulk_modulus * d_eps_v,
            ..Increment::default()
        }
    }

    /// Mean stress changes and the volumetric strain consumes void space.
    fn plastic(&self, state: &State, flow: &PlasticFlow) -> Increment {
        Increment {
            eps_v: flow.d_eps_v,
            sigma_m: flow.d_sigma_m,
            sigma_q: flow.d_sigma_q,
            e: -(1.0 + state.e) * flow.d_eps_v,
            p_img: flow.d_p_img,
            ..Increment::default()
        }
    }

    fn effective_mean_stress(&self, state: &State) -> f64 {
        state.sigma_m
    }

    fn pore_pressure(&self, _state: &State) -> f64 {
        0.0
    }
}

impl DrainageUpdate for Undrained {
    /// No volume change; pore pressure rises by `K·dε1/3`.
    fn elastic(&self, response: &Response, d_eps: f64) -> Increment {
        let d_eps1 = d_eps;

        Increment {
            sigma_q: 3.0 * response.shear_modulus * d_eps1,
            u: response.bulk_modulus * d_eps1 / 3.0,
            ..Increment::default()
        }
    }

    /// The mean stress change goes to the pore pressure; `σ_M` and `e` hold.
    fn plastic(&self, _state: &State, flow: &PlasticFlow) -> Increment {
        Increment {
            eps_v: flow.d_eps_v,
            sigma_q: flow.d_sigma_q,
            u: flow.d_sigma_m,
            p_img: flow.d_p_img,
            ..Increment::default()
        }
    }

    fn effective_mean_stress(&self, state: &State) -> f64 {
        state.sigma_m - state.u
    }

    fn pore_pressure(&self, state: &State) -> f64 {
        state.u
    }
}

/// Returns the update strategy for a drainage mode.
#[must_use]
pub fn strategy(drainage: Drainage) -> &'static dyn DrainageUpdate {
    match drainage {
        Drainage::Drained => &Drained,
        Drainage::Undrained => &Undrained,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use norsand_model::Parameters;

    fn setup() -> (NorSand, State, Response) {
        let params = Parameters::new(0.95, 0.05, 1.2, 0.25, 0.5, 0.65, 100.0);
        let material = NorSand::from_parameters(&params);
        let state = State::initial(&params);
        let response = material.evaluate(&state).expect("physical state");
        (material, state, response)
    }

    #[test]
    fn drained_elastic_compresses_a_third() {
        let (_, _, response) = setup();
        let d_eps = 0.003;

        let inc = Drained.elastic(&response, d_eps);

        assert_relative_eq!(inc.eps_v, 0.001, epsilon = 1e-15);
        assert_relative_eq!(
            inc.sigma_q,
            3.0 * response.shear_modulus * (d_eps - d_eps / 9.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(inc.sigma_m, response.bulk_modulus * 0.001, max_relative = 1e-12);
        assert_eq!(inc.u, 0.0);
        assert_eq!(inc.e, 0.0);
        assert_eq!(inc.p_img, 0.0);
    }

    #[test]
    fn undrained_elastic_builds_pore_pressure() {
        let (_, _, response) = setup();
        let d_eps = 0.003;

        let inc = Undrained.elastic(&response, d_eps);

        assert_eq!(inc.eps_v, 0.0);
        assert_eq!(inc.sigma_m, 0.0);
        assert_relative_eq!(inc.sigma_q, 3.0 * response.shear_modulus * d_eps);
        assert_relative_eq!(inc.u, response.bulk_modulus * d_eps / 3.0);
    }

    #[test]
    fn dense_plastic_flow_dilates_and_hardens() {
        let (material, state, response) = setup();
        let d_eps = 0.01;

        let flow = PlasticFlow::new(&material, &state, &response, d_eps);

        // D = 0.25 · (−0.3)
        assert_relative_eq!(flow.d_eps_v, -0.075 * d_eps, epsilon = 1e-12);
        assert_relative_eq!(flow.d_eps1, d_eps + flow.d_eps_v / 3.0);
        assert_relative_eq!(
            flow.d_sigma_q,
            3.0 * response.shear_modulus * d_eps,
            max_relative = 1e-12
        );
        // h = 5 + 10 · (−0.3) = 2
        assert_relative_eq!(flow.d_p_img, 2.0 * d_eps * 100.0, max_relative = 1e-9);
    }

    #[test]
    fn drained_plastic_updates_stress_and_void_ratio() {
        let (material, state, response) = setup();
        let flow = PlasticFlow::new(&material, &state, &response, 0.01);

        let inc = Drained.plastic(&state, &flow);

        assert_relative_eq!(inc.sigma_m, flow.d_sigma_m);
        assert_relative_eq!(inc.e, -(1.0 + state.e) * flow.d_eps_v);
        assert!(inc.e > 0.0, "dilation opens void space");
        assert_eq!(inc.u, 0.0);
    }

    #[test]
    fn undrained_plastic_routes_mean_stress_to_pore_pressure() {
        let (material, state, response) = setup();
        let flow = PlasticFlow::new(&material, &state, &response, 0.01);

        let inc = Undrained.plastic(&state, &flow);

        assert_eq!(inc.sigma_m, 0.0);
        assert_eq!(inc.e, 0.0);
        assert_relative_eq!(inc.u, flow.d_sigma_m);
        assert_relative_eq!(inc.eps_v, flow.d_eps_v);
        assert_relative_eq!(inc.p_img, flow.d_p_img);
    }

    #[test]
    fn reporting_views() {
        let (_, state, _) = setup();
        let state = State { u: 30.0, ..state };

        assert_relative_eq!(Drained.effective_mean_stress(&state), 100.0);
        assert_eq!(Drained.pore_pressure(&state), 0.0);
        assert_relative_eq!(Undrained.effective_mean_stress(&state), 70.0);
        assert_relative_eq!(Undrained.pore_pressure(&state), 30.0);
    }

    #[test]
    fn increment_leaves_axial_strain_alone() {
        let (_, mut state, _) = setup();
        let inc = Increment {
            eps_v: 0.1,
            sigma_m: 1.0,
            sigma_q: 2.0,
            u: 3.0,
            e: -0.01,
            p_img: 4.0,
        };

        inc.apply_to(&mut state);

        assert_eq!(state.eps1, 0.0);
        assert_relative_eq!(state.eps_v, 0.1);
        assert_relative_eq!(state.sigma_m, 101.0);
        assert_relative_eq!(state.sigma_q, 2.0);
        assert_relative_eq!(state.u, 3.0);
        assert_relative_eq!(state.e, 0.64, epsilon = 1e-12);
        assert_relative_eq!(state.p_img, 104.0);
    }

    #[test]
    fn strategy_matches_drainage() {
        let state = State {
            e: 0.7,
            sigma_m: 80.0,
            sigma_q: 0.0,
            p_img: 80.0,
            eps1: 0.0,
            eps_v: 0.0,
            u: 5.0,
        };

        assert_relative_eq!(strategy(Drainage::Drained).effective_mean_stress(&state), 80.0);
        assert_relative_eq!(strategy(Drainage::Undrained).effective_mean_stress(&state), 75.0);
    }
}
