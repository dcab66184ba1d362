//! Pure NorSand constitutive functions.
//!
//! None of these functions guard their numeric domain. Logarithms of
//! non-positive pressures and divisions by a zero mean stress produce
//! non-finite results; [`NorSand::evaluate`](crate::NorSand::evaluate) is the
//! checked entry point used by the integrator.

/// Reference pressure `p_ref` (kPa) normalizing the critical-state line.
pub const REFERENCE_PRESSURE: f64 = 100.0;

/// Computes the elastic shear modulus `G = 100·p / (1 + e)`.
#[must_use]
pub fn elastic_shear_modulus(e: f64, p: f64) -> f64 {
    100.0 * p / (1.0 + e)
}

/// Computes the critical-state void ratio `e_c = N − λ·ln(p / p_ref)`.
#[must_use]
pub fn critical_void_ratio(n: f64, lambda: f64, p: f64, p_ref: f64) -> f64 {
    n - lambda * (p / p_ref).ln()
}

/// Computes the state-dependent critical stress ratio `M_ψ = M_c·(1 − N·ψ)`.
#[must_use]
pub fn m_psi(mc: f64, n: f64, psi: f64) -> f64 {
    mc * (1.0 - n * psi)
}

/// Evaluates the NorSand yield surface `f = q/p − M_ψ·(1 − p/p_img)`.
///
/// `f ≤ 0` is inside (or on) the surface and the response is elastic.
#[must_use]
pub fn yield_function(q: f64, p: f64, psi: f64, p_img: f64, mc: f64, n: f64) -> f64 {
    q / p - m_psi(mc, n, psi) * (1.0 - p / p_img)
}
