use std::fmt;

use thiserror::Error;

/// Errors that can occur when validating simulation parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    /// Fewer than two steps leave the strain increment undefined.
    #[error("num_steps must be at least 2, got {num_steps}")]
    TooFewSteps { num_steps: usize },

    #[error("max_strain must be finite and positive, got {0}")]
    MaxStrain(f64),

    #[error("e0 must be finite and greater than -1, got {0}")]
    VoidRatio(f64),

    #[error("sigM0 must be finite and positive, got {0}")]
    MeanStress(f64),

    /// Any other parameter that is NaN or infinite.
    #[error("parameter `{name}` must be finite")]
    NonFinite { name: &'static str },
}

/// A state variable checked before each constitutive evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Void ratio `e`, required to exceed −1.
    VoidRatio,

    /// Mean effective stress `σ_M`, required to be positive.
    MeanStress,

    /// Image pressure `p_img`, required to be positive.
    ImagePressure,

    /// Deviatoric stress `σ_Q`, required to be finite.
    DeviatoricStress,

    /// Accumulated pore pressure `u`, required to be finite.
    PorePressure,
}

impl Quantity {
    /// Returns the conventional symbol for the quantity.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::VoidRatio => "e",
            Self::MeanStress => "σ_M",
            Self::ImagePressure => "p_img",
            Self::DeviatoricStress => "σ_Q",
            Self::PorePressure => "u",
        }
    }

    fn requirement(self) -> &'static str {
        match self {
            Self::VoidRatio => "must be finite and greater than -1",
            Self::MeanStress | Self::ImagePressure => "must be finite and positive",
            Self::DeviatoricStress | Self::PorePressure => "must be finite",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::VoidRatio => "void ratio",
            Self::MeanStress => "mean effective stress",
            Self::ImagePressure => "image pressure",
            Self::DeviatoricStress => "deviatoric stress",
            Self::PorePressure => "pore pressure",
        };
        write!(f, "{name} {}", self.symbol())
    }
}

/// A soil state the constitutive law cannot be evaluated at.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("{quantity} = {value} {}", .quantity.requirement())]
pub struct StateError {
    /// The offending state variable.
    pub quantity: Quantity,

    /// Its value at the time of the check.
    pub value: f64,
}
