//! Yields quoted as mass ratios relative to ⁵⁶Co.
//!
//! The ⁵⁷Co mass is a fraction of the ⁵⁶Co mass, with an asymmetric
//! uncertainty, and the ⁵⁵Fe mass is a fixed multiple of the ⁵⁷Co mass.

use latelight_core::{DecayScenario, Isotope};

use crate::provider::{EnvelopeScenarios, YieldError, YieldModel};

/// ⁵⁶Co mass plus ⁵⁷Co/⁵⁶Co and ⁵⁵Fe/⁵⁷Co ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct MassRatioModel {
    name: String,
    reference: String,
    /// ⁵⁶Co mass (M☉).
    pub co56_mass: f64,
    /// Central ⁵⁷Co/⁵⁶Co ratio used for the bounds.
    pub co57_ratio: f64,
    /// Downward uncertainty on the ratio.
    pub co57_ratio_minus: f64,
    /// Upward uncertainty on the ratio.
    pub co57_ratio_plus: f64,
    /// ⁵⁷Co/⁵⁶Co ratio used for the nominal set.
    pub nominal_co57_ratio: f64,
    /// ⁵⁵Fe/⁵⁷Co mass ratio.
    pub fe55_to_co57: f64,
}

impl MassRatioModel {
    pub fn new(
        name: impl Into<String>,
        reference: impl Into<String>,
        co56_mass: f64,
        co57_ratio: f64,
        co57_ratio_minus: f64,
        co57_ratio_plus: f64,
        fe55_to_co57: f64,
    ) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
            co56_mass,
            co57_ratio,
            co57_ratio_minus,
            co57_ratio_plus,
            nominal_co57_ratio: co57_ratio,
            fe55_to_co57,
        }
    }

    /// Use a nominal ratio different from the centre of the bounds.
    pub fn with_nominal_ratio(mut self, ratio: f64) -> Self {
        self.nominal_co57_ratio = ratio;
        self
    }

    /// SN 2012cg light-curve fit: ⁵⁷Co/⁵⁶Co = 0.043 (−0.011, +0.012), ⁵⁵Fe/⁵⁷Co = 1.2.
    pub fn graur_2016() -> Self {
        Self::new(
            "graur_2016",
            "Graur et al. (2016), ApJ 819, 31",
            0.7,
            0.043,
            0.011,
            0.012,
            1.2,
        )
    }

    /// Delayed-detonation model: ⁵⁷Co/⁵⁶Co = 0.03 (−0.011, +0.012), ⁵⁵Fe/⁵⁷Co = 2.2373.
    pub fn dave_ddt() -> Self {
        Self::new(
            "dave_ddt",
            "Dave et al. (2017), DDT model",
            0.7,
            0.03,
            0.011,
            0.012,
            2.2373,
        )
        .with_nominal_ratio(0.033)
    }

    /// Gravitationally confined detonation as ratios: 0.034 (−0.011, +0.012), ⁵⁵Fe/⁵⁷Co = 2.06.
    pub fn dave_gcd_ratio() -> Self {
        Self::new(
            "dave_gcd_ratio",
            "Dave et al. (2017), GCD model",
            0.7,
            0.034,
            0.011,
            0.012,
            2.06,
        )
    }

    /// Narrow band around ⁵⁷Co/⁵⁶Co = 0.01 (±0.0005) with a nominal of 0.02.
    pub fn narrow_test() -> Self {
        Self::new(
            "narrow_test",
            "Synthetic test bounds",
            0.7,
            0.01,
            0.0005,
            0.0005,
            1.2,
        )
        .with_nominal_ratio(0.02)
    }

    fn scenarios_for_ratio(&self, ratio: f64) -> Result<Vec<DecayScenario>, YieldError> {
        let co57 = self.co56_mass * ratio;
        let fe55 = self.fe55_to_co57 * co57;
        Ok(vec![
            DecayScenario::new(Isotope::Fe55, fe55)?,
            DecayScenario::new(Isotope::Co56, self.co56_mass)?,
            DecayScenario::new(Isotope::Co57, co57)?,
        ])
    }
}

impl YieldModel for MassRatioModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn reference(&self) -> &str {
        &self.reference
    }

    fn nominal(&self) -> Result<Vec<DecayScenario>, YieldError> {
        self.scenarios_for_ratio(self.nominal_co57_ratio)
    }

    fn envelope(&self) -> Result<EnvelopeScenarios, YieldError> {
        Ok(EnvelopeScenarios {
            low: self.scenarios_for_ratio(self.co57_ratio - self.co57_ratio_minus)?,
            high: self.scenarios_for_ratio(self.co57_ratio + self.co57_ratio_plus)?,
        })
    }
}
