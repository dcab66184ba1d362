/// One row of a triaxial test, measured or simulated.
///
/// Laboratory shear-phase records and simulated snapshots are compared in
/// this shape. Strains are fractions, not percent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct TestRecord {
    /// Mean effective stress `p` (kPa).
    pub p: f64,

    /// Deviator stress `q` (kPa).
    pub q: f64,

    /// Axial strain.
    pub eps1: f64,

    /// Volumetric strain.
    #[cfg_attr(feature = "serde", serde(rename = "epsV"))]
    pub eps_v: f64,

    /// Void ratio.
    pub e: f64,
}

impl TestRecord {
    /// Returns the stress ratio `η = q/p`, or `None` when `p ≤ 0`.
    #[must_use]
    pub fn stress_ratio(&self) -> Option<f64> {
        (self.p > 0.0).then(|| self.q / self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stress_ratio_needs_positive_pressure() {
        let record = TestRecord {
            p: 120.0,
            q: 60.0,
            eps1: 0.01,
            eps_v: 0.004,
            e: 0.68,
        };
        assert_eq!(record.stress_ratio(), Some(0.5));

        let record = TestRecord { p: 0.0, ..record };
        assert_eq!(record.stress_ratio(), None);
    }
}
