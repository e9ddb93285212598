//! Yields quoted directly as mass bounds.

use latelight_core::{DecayScenario, Isotope};

use crate::provider::{EnvelopeScenarios, YieldError, YieldModel};

/// Explicit low/high initial masses for ⁵⁷Co and ⁵⁵Fe, fixed ⁵⁶Co.
#[derive(Debug, Clone, PartialEq)]
pub struct AbsoluteMassModel {
    name: String,
    reference: String,
    /// ⁵⁶Co mass (M☉).
    pub co56_mass: f64,
    /// ⁵⁷Co mass bounds `[low, high]` (M☉).
    pub co57_mass: [f64; 2],
    /// ⁵⁵Fe mass bounds `[low, high]` (M☉).
    pub fe55_mass: [f64; 2],
}

impl AbsoluteMassModel {
    pub fn new(
        name: impl Into<String>,
        reference: impl Into<String>,
        co56_mass: f64,
        co57_mass: [f64; 2],
        fe55_mass: [f64; 2],
    ) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
            co56_mass,
            co57_mass,
            fe55_mass,
        }
    }

    /// Gravitationally confined detonation (SN 2012cg reference envelope).
    pub fn dave_gcd() -> Self {
        Self::new(
            "dave_gcd",
            "Dave et al. (2017), GCD model masses",
            0.7,
            [1.49e-2, 1.88e-2],
            [3.73e-3, 1.33e-2],
        )
    }

    fn scenarios(&self, co57: f64, fe55: f64) -> Result<Vec<DecayScenario>, YieldError> {
        Ok(vec![
            DecayScenario::new(Isotope::Fe55, fe55)?,
            DecayScenario::new(Isotope::Co56, self.co56_mass)?,
            DecayScenario::new(Isotope::Co57, co57)?,
        ])
    }
}

impl YieldModel for AbsoluteMassModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn reference(&self) -> &str {
        &self.reference
    }

    /// Midpoint of each mass range.
    fn nominal(&self) -> Result<Vec<DecayScenario>, YieldError> {
        self.scenarios(
            0.5 * (self.co57_mass[0] + self.co57_mass[1]),
            0.5 * (self.fe55_mass[0] + self.fe55_mass[1]),
        )
    }

    fn envelope(&self) -> Result<EnvelopeScenarios, YieldError> {
        Ok(EnvelopeScenarios {
            low: self.scenarios(self.co57_mass[0], self.fe55_mass[0])?,
            high: self.scenarios(self.co57_mass[1], self.fe55_mass[1])?,
        })
    }
}
