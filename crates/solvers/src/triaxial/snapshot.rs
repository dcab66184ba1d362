use norsand_model::TestRecord;

use super::Branch;

/// The state reported after one strain increment.
///
/// With the `serde` feature, fields serialize under the tabular column names
/// listed in [`Snapshot::COLUMNS`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Snapshot {
    /// Step index, starting at 0.
    pub step: usize,

    /// Accumulated axial strain `ε1`.
    pub eps1: f64,

    /// Accumulated volumetric strain `ε_V`.
    #[cfg_attr(feature = "serde", serde(rename = "epsV"))]
    pub eps_v: f64,

    /// Effective mean stress: `σ_M − u` undrained, `σ_M` drained.
    pub p: f64,

    /// Deviatoric stress `σ_Q`.
    pub q: f64,

    /// Void ratio.
    pub e: f64,

    /// State parameter `ψ` evaluated at the start of the step.
    pub psi: f64,

    /// Image pressure after the step.
    #[cfg_attr(feature = "serde", serde(rename = "pimg"))]
    pub p_img: f64,

    /// Yield function value evaluated at the start of the step.
    #[cfg_attr(feature = "serde", serde(rename = "yield_f"))]
    pub yield_value: f64,

    /// Pore pressure `u`; always zero when drained.
    pub pore_pressure: f64,
}

impl Snapshot {
    /// Column names of the tabular view, in [`row`](Snapshot::row) order.
    pub const COLUMNS: [&'static str; 10] = [
        "step",
        "eps1",
        "epsV",
        "p",
        "q",
        "e",
        "psi",
        "pimg",
        "yield_f",
        "pore_pressure",
    ];

    /// Returns the snapshot as one table row matching [`Snapshot::COLUMNS`].
    #[must_use]
    pub fn row(&self) -> [f64; 10] {
        #[allow(clippy::cast_precision_loss)]
        let step = self.step as f64;
        [
            step,
            self.eps1,
            self.eps_v,
            self.p,
            self.q,
            self.e,
            self.psi,
            self.p_img,
            self.yield_value,
            self.pore_pressure,
        ]
    }

    /// Returns `ln(p)`, or `None` when the effective mean stress is not positive.
    #[must_use]
    pub fn ln_p(&self) -> Option<f64> {
        (self.p > 0.0).then(|| self.p.ln())
    }

    /// Returns the branch that produced this snapshot.
    #[must_use]
    pub fn branch(&self) -> Branch {
        Branch::from_yield_value(self.yield_value)
    }

    /// Projects the snapshot onto the lab-test record shape.
    #[must_use]
    pub fn to_test_record(&self) -> TestRecord {
        TestRecord {
            p: self.p,
            q: self.q,
            eps1: self.eps1,
            eps_v: self.eps_v,
            e: self.e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn snapshot() -> Snapshot {
        Snapshot {
            step: 3,
            eps1: 0.004,
            eps_v: -0.001,
            p: 95.0,
            q: 140.0,
            e: 0.66,
            psi: -0.28,
            p_img: 104.0,
            yield_value: 0.3,
            pore_pressure: 0.0,
        }
    }

    #[test]
    fn row_follows_column_order() {
        let row = snapshot().row();

        assert_eq!(row.len(), Snapshot::COLUMNS.len());
        assert_relative_eq!(row[0], 3.0);
        assert_relative_eq!(row[2], -0.001);
        assert_relative_eq!(row[7], 104.0);
        assert_relative_eq!(row[8], 0.3);
    }

    #[test]
    fn ln_p_requires_positive_pressure() {
        assert_relative_eq!(snapshot().ln_p().unwrap(), 95.0_f64.ln());

        let liquefied = Snapshot {
            p: -2.0,
            ..snapshot()
        };
        assert_eq!(liquefied.ln_p(), None);
    }

    #[test]
    fn branch_follows_yield_sign() {
        assert_eq!(snapshot().branch(), Branch::Plastic);

        let inside = Snapshot {
            yield_value: -0.1,
            ..snapshot()
        };
        assert_eq!(inside.branch(), Branch::Elastic);
    }

    #[test]
    fn test_record_keeps_the_comparable_columns() {
        let record = snapshot().to_test_record();

        assert_relative_eq!(record.p, 95.0);
        assert_relative_eq!(record.q, 140.0);
        assert_relative_eq!(record.eps1, 0.004);
        assert_relative_eq!(record.eps_v, -0.001);
        assert_relative_eq!(record.e, 0.66);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_column_names() {
        let value = serde_json::to_value(snapshot()).expect("serializable");
        let object = value.as_object().expect("a JSON object");

        for column in Snapshot::COLUMNS {
            assert!(object.contains_key(column), "missing column {column}");
        }
        assert_eq!(object.len(), Snapshot::COLUMNS.len());
    }
}
