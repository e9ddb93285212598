//! Observations against a model envelope.
//!
//! The model is evaluated exactly at each observation epoch rather than
//! interpolated from a coarse grid. Nothing is fitted.

use serde::Serialize;

use crate::curve::assemble;
use crate::model::DecayError;
use crate::photometry::ObservedLuminosity;
use crate::scenario::DecayScenario;

/// An observed luminosity next to the low/high model luminosities at the same epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Residual {
    pub time_days: f64,
    pub observed: f64,
    pub model_low: f64,
    pub model_high: f64,
}

impl Residual {
    pub fn within_envelope(&self) -> bool {
        let lo = self.model_low.min(self.model_high);
        let hi = self.model_low.max(self.model_high);
        self.observed >= lo && self.observed <= hi
    }

    /// observed / low model
    pub fn ratio_to_low(&self) -> f64 {
        self.observed / self.model_low
    }

    /// observed / high model
    pub fn ratio_to_high(&self) -> f64 {
        self.observed / self.model_high
    }
}

/// Evaluate the `low` and `high` scenario sets at every observation epoch.
///
/// Observations must be in time order. An empty observation list is an
/// [`DecayError::EmptyTimeGrid`].
pub fn compare(
    observed: &[ObservedLuminosity],
    low: &[DecayScenario],
    high: &[DecayScenario],
) -> Result<Vec<Residual>, DecayError> {
    let epochs: Vec<f64> = observed.iter().map(|o| o.time_days).collect();
    let low_curve = assemble(&epochs, low)?;
    let high_curve = assemble(&epochs, high)?;

    Ok(observed
        .iter()
        .zip(low_curve.luminosity().iter().zip(high_curve.luminosity().iter()))
        .map(|(obs, (&model_low, &model_high))| Residual {
            time_days: obs.time_days,
            observed: obs.luminosity,
            model_low,
            model_high,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isotope::Isotope;

    fn envelope() -> (Vec<DecayScenario>, Vec<DecayScenario>) {
        let low = vec![
            DecayScenario::new(Isotope::Co56, 0.7).unwrap(),
            DecayScenario::new(Isotope::Co57, 1.49e-2).unwrap(),
        ];
        let high = vec![
            DecayScenario::new(Isotope::Co56, 0.7).unwrap(),
            DecayScenario::new(Isotope::Co57, 1.88e-2).unwrap(),
        ];
        (low, high)
    }

    #[test]
    fn test_observation_between_curves_is_within() {
        let (low, high) = envelope();
        let t = 950.0;
        let lo = low.iter().map(|s| s.luminosity_at(t)).sum::<f64>();
        let hi = high.iter().map(|s| s.luminosity_at(t)).sum::<f64>();
        let observed = [ObservedLuminosity {
            time_days: t,
            luminosity: 0.5 * (lo + hi),
        }];

        let residuals = compare(&observed, &low, &high).unwrap();
        assert_eq!(residuals.len(), 1);
        assert!(residuals[0].within_envelope());
        assert!(residuals[0].ratio_to_low() > 1.0);
        assert!(residuals[0].ratio_to_high() < 1.0);
    }

    #[test]
    fn test_bright_observation_is_outside() {
        let (low, high) = envelope();
        let observed = [ObservedLuminosity {
            time_days: 1000.0,
            luminosity: 1e40,
        }];
        let residuals = compare(&observed, &low, &high).unwrap();
        assert!(!residuals[0].within_envelope());
    }

    #[test]
    fn test_no_observations_is_error() {
        let (low, high) = envelope();
        assert_eq!(compare(&[], &low, &high), Err(DecayError::EmptyTimeGrid));
    }
}
