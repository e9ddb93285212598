//! Fink et al. (2014) pure-deflagration yields.
//!
//! Ejecta masses and radioactive yields (M☉) of the failed-detonation
//! Chandrasekhar-mass models of
//! M. Fink et al., *MNRAS* **438**, 1762 (2014).
//!
//! Decay chains are folded into the isotope that powers the late light
//! curve: A = 55 is ⁵⁵Co + ⁵⁵Fe, A = 56 is ⁵⁶Ni, A = 57 is ⁵⁷Ni + ⁵⁷Co.

use latelight_core::{DecayScenario, Isotope};

use crate::provider::{YieldError, YieldModel};

/// One deflagration model from the Fink et al. (2014) grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinkModel {
    /// Model label, e.g. `"N100def"`.
    pub label: &'static str,
    /// Unbound ejecta mass.
    pub ejecta_mass: f64,
    /// Bound remnant mass, where the model leaves one.
    pub bound_mass: Option<f64>,
    pub ni56: f64,
    pub co55: f64,
    pub fe55: f64,
    pub ni57: f64,
    pub co57: f64,
}

impl FinkModel {
    /// Total A = 55 chain mass.
    pub fn chain_55(&self) -> f64 {
        self.co55 + self.fe55
    }

    /// Total A = 56 chain mass.
    pub fn chain_56(&self) -> f64 {
        self.ni56
    }

    /// Total A = 57 chain mass.
    pub fn chain_57(&self) -> f64 {
        self.ni57 + self.co57
    }

    /// X(55) / X(57) mass ratio.
    pub fn ratio_55_to_57(&self) -> f64 {
        self.chain_55() / self.chain_57()
    }

    /// X(55) / X(56) mass ratio.
    pub fn ratio_55_to_56(&self) -> f64 {
        self.chain_55() / self.chain_56()
    }

    /// X(57) / X(56) mass ratio.
    pub fn ratio_57_to_56(&self) -> f64 {
        self.chain_57() / self.chain_56()
    }

    /// Registry key, e.g. `"fink_2014_n100def"`.
    pub fn registry_name(&self) -> String {
        format!("fink_2014_{}", self.label.to_ascii_lowercase())
    }
}

const fn model(
    label: &'static str,
    ejecta_mass: f64,
    bound_mass: Option<f64>,
    yields: [f64; 5],
) -> FinkModel {
    FinkModel {
        label,
        ejecta_mass,
        bound_mass,
        ni56: yields[0],
        co55: yields[1],
        fe55: yields[2],
        ni57: yields[3],
        co57: yields[4],
    }
}

/// The 14-model grid, in order of increasing ignition-spot count.
///
/// Yield columns: ⁵⁶Ni, ⁵⁵Co, ⁵⁵Fe, ⁵⁷Ni, ⁵⁷Co.
pub const MODELS: [FinkModel; 14] = [
    model("N1def", 8.43e-2, Some(1.32e0), [3.45e-2, 6.16e-4, 7.21e-5, 1.26e-3, 3.63e-5]),
    model("N3def", 1.95e-1, Some(1.21e0), [7.30e-2, 1.49e-3, 2.63e-4, 2.68e-3, 1.32e-4]),
    model("N5def", 3.72e-1, Some(1.03e0), [1.58e-1, 3.22e-3, 4.43e-4, 5.54e-3, 2.22e-4]),
    model("N10def", 4.78e-1, Some(9.26e-1), [1.83e-1, 3.93e-3, 6.67e-4, 6.54e-3, 3.34e-4]),
    model("N20def", 8.59e-1, Some(5.45e-1), [2.64e-1, 5.87e-3, 1.15e-3, 9.25e-3, 5.64e-4]),
    model("N40def", 1.21e0, Some(1.90e-1), [3.35e-1, 7.96e-3, 1.50e-3, 1.19e-2, 7.34e-4]),
    model("N100Hdef", 1.23e0, Some(1.33e-1), [3.26e-1, 5.81e-3, 1.28e-4, 1.03e-2, 4.95e-5]),
    model("N100def", 1.31e0, Some(9.0e-2), [3.55e-1, 8.45e-3, 1.74e-3, 1.25e-2, 8.49e-4]),
    model("N100Ldef", 1.31e0, Some(1.02e-1), [3.29e-1, 7.72e-3, 2.87e-3, 1.15e-2, 1.35e-3]),
    model("N150def", 1.40e0, None, [3.78e-1, 8.96e-3, 1.90e-3, 1.34e-2, 9.31e-4]),
    model("N200def", 1.40e0, None, [3.71e-1, 9.57e-3, 2.20e-3, 1.33e-2, 1.08e-3]),
    model("N300Cdef", 1.40e0, None, [3.34e-1, 7.88e-3, 1.97e-3, 1.16e-2, 9.63e-4]),
    model("N1600def", 1.40e0, None, [3.40e-1, 9.07e-3, 2.87e-3, 1.24e-2, 1.38e-3]),
    model("N1600Cdef", 1.40e0, None, [3.15e-1, 7.66e-3, 3.09e-3, 1.08e-2, 1.45e-3]),
];

/// Find a model by label, case-insensitively (`"n5def"` or `"N5def"`).
pub fn find(label: &str) -> Option<&'static FinkModel> {
    MODELS.iter().find(|m| m.label.eq_ignore_ascii_case(label))
}

impl YieldModel for FinkModel {
    fn name(&self) -> &str {
        self.label
    }

    fn reference(&self) -> &str {
        "Fink et al. (2014), MNRAS 438, 1762"
    }

    /// Chain masses as initial isotope masses.
    fn nominal(&self) -> Result<Vec<DecayScenario>, YieldError> {
        Ok(vec![
            DecayScenario::new(Isotope::Fe55, self.chain_55())?,
            DecayScenario::new(Isotope::Co56, self.chain_56())?,
            DecayScenario::new(Isotope::Co57, self.chain_57())?,
        ])
    }
}
