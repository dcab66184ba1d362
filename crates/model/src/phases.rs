//! Soil phase relationships.
//!
//! Conversions between the volumetric descriptions of a soil sample used
//! when deriving initial states from laboratory records. Void ratio `e` and
//! porosity `n` are dimensionless; water content `w` is a mass fraction.

/// Density of water (kg/m³) used as the default unit weight reference.
pub const WATER_DENSITY: f64 = 1000.0;

/// Converts porosity `n` to void ratio `e = n / (1 − n)`.
#[must_use]
pub fn void_ratio_from_porosity(n: f64) -> f64 {
    n / (1.0 - n)
}

/// Converts void ratio `e` to porosity `n = e / (1 + e)`.
#[must_use]
pub fn porosity_from_void_ratio(e: f64) -> f64 {
    e / (1.0 + e)
}

/// Computes the degree of saturation `S_r = w·G_s / e`.
#[must_use]
pub fn degree_of_saturation(w: f64, gs: f64, e: f64) -> f64 {
    (w * gs) / e
}

/// Computes the dry density `ρ_d = G_s·ρ_w / (1 + e)`.
#[must_use]
pub fn dry_density(gs: f64, e: f64, rho_w: f64) -> f64 {
    (gs * rho_w) / (1.0 + e)
}
