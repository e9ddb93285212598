//! Decay scenarios: an isotope together with its mass at explosion.

use serde::Serialize;

use crate::isotope::Isotope;
use crate::model::{luminosity, DecayError};

/// A validated (isotope, initial mass) pair.
///
/// Several scenarios may share an isotope with different masses, e.g. the
/// low and high bounds of an uncertain ⁵⁷Co/⁵⁶Co ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecayScenario {
    isotope: Isotope,
    /// Mass present at t = 0 (solar masses).
    initial_mass: f64,
}

impl DecayScenario {
    /// Create a scenario, rejecting negative or non-finite masses.
    pub fn new(isotope: Isotope, initial_mass: f64) -> Result<Self, DecayError> {
        if !initial_mass.is_finite() || initial_mass < 0.0 {
            return Err(DecayError::InvalidScenario {
                isotope,
                reason: format!("initial mass must be finite and non-negative, got {initial_mass}"),
            });
        }
        let lambda = isotope.decay_constant();
        if lambda.is_nan() || lambda <= 0.0 {
            return Err(DecayError::InvalidScenario {
                isotope,
                reason: format!("decay constant must be positive, got {lambda}"),
            });
        }
        Ok(Self {
            isotope,
            initial_mass,
        })
    }

    /// Create a scenario from a bare mass number, e.g. from external config.
    pub fn from_mass_number(mass_number: u32, initial_mass: f64) -> Result<Self, DecayError> {
        Self::new(Isotope::from_mass_number(mass_number)?, initial_mass)
    }

    /// The same isotope with a different initial mass.
    pub fn with_mass(&self, initial_mass: f64) -> Result<Self, DecayError> {
        Self::new(self.isotope, initial_mass)
    }

    pub fn isotope(&self) -> Isotope {
        self.isotope
    }

    /// Initial mass (solar masses).
    pub fn initial_mass(&self) -> f64 {
        self.initial_mass
    }

    /// Luminosity (erg/s) at `elapsed_days` after explosion.
    pub fn luminosity_at(&self, elapsed_days: f64) -> f64 {
        luminosity(self.isotope, self.initial_mass, elapsed_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_mass_rejected() {
        let err = DecayScenario::new(Isotope::Co57, -1e-3).unwrap_err();
        assert!(matches!(
            err,
            DecayError::InvalidScenario { isotope: Isotope::Co57, .. }
        ));
    }

    #[test]
    fn test_nan_mass_rejected() {
        assert!(DecayScenario::new(Isotope::Co56, f64::NAN).is_err());
        assert!(DecayScenario::new(Isotope::Co56, f64::INFINITY).is_err());
    }

    #[test]
    fn test_zero_mass_allowed() {
        let s = DecayScenario::new(Isotope::Fe55, 0.0).unwrap();
        assert_eq!(s.luminosity_at(100.0), 0.0);
    }

    #[test]
    fn test_from_mass_number() {
        let s = DecayScenario::from_mass_number(56, 0.7).unwrap();
        assert_eq!(s.isotope(), Isotope::Co56);
        assert_eq!(s.initial_mass(), 0.7);
        assert_eq!(
            DecayScenario::from_mass_number(54, 0.7),
            Err(DecayError::UnsupportedIsotope(54))
        );
    }

    #[test]
    fn test_with_mass_keeps_isotope() {
        let low = DecayScenario::new(Isotope::Co57, 1.49e-2).unwrap();
        let high = low.with_mass(1.88e-2).unwrap();
        assert_eq!(high.isotope(), Isotope::Co57);
        assert!(high.luminosity_at(1000.0) > low.luminosity_at(1000.0));
        assert!(low.with_mass(-0.1).is_err());
    }
}
