//! Magnitude ↔ luminosity conversion for placing photometry on the model axis.
//!
//! Observed apparent magnitudes are corrected for extinction, shifted to
//! absolute magnitudes with the distance modulus, and converted to bolometric
//! luminosity with the Pogson ratio relative to the Sun:
//!
//! $$L = 100^{(M_\odot - M)/5} L_\odot$$

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Solar bolometric luminosity (erg/s).
pub const SOLAR_LUMINOSITY_ERG_S: f64 = 3.8270e33;

/// Solar absolute bolometric magnitude.
pub const SOLAR_ABSOLUTE_BOLOMETRIC_MAGNITUDE: f64 = 4.83;

/// One parsec (cm).
pub const PARSEC_CM: f64 = 3.08567758e18;

/// One megaparsec (cm).
pub const MEGAPARSEC_CM: f64 = 1.0e6 * PARSEC_CM;

/// Errors from photometric conversions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhotometryError {
    #[error("Distance must be finite and positive, got {0} cm")]
    InvalidDistance(f64),

    #[error("Luminosity must be finite and positive, got {0} erg/s")]
    InvalidLuminosity(f64),
}

/// Brightness ratio of one magnitude, 100^(1/5) ≈ 2.512.
pub fn pogson_ratio() -> f64 {
    100.0_f64.powf(1.0 / 5.0)
}

/// Bolometric luminosity (erg/s) for an absolute magnitude.
pub fn magnitude_to_luminosity(absolute_magnitude: f64) -> f64 {
    pogson_ratio().powf(SOLAR_ABSOLUTE_BOLOMETRIC_MAGNITUDE - absolute_magnitude)
        * SOLAR_LUMINOSITY_ERG_S
}

/// Absolute bolometric magnitude for a luminosity (erg/s).
pub fn luminosity_to_magnitude(luminosity: f64) -> Result<f64, PhotometryError> {
    if !luminosity.is_finite() || luminosity <= 0.0 {
        return Err(PhotometryError::InvalidLuminosity(luminosity));
    }
    Ok(SOLAR_ABSOLUTE_BOLOMETRIC_MAGNITUDE
        - (luminosity / SOLAR_LUMINOSITY_ERG_S).ln() / pogson_ratio().ln())
}

/// Distance modulus μ = 5 (log₁₀ d_pc − 1).
pub fn distance_modulus(distance_cm: f64) -> Result<f64, PhotometryError> {
    if !distance_cm.is_finite() || distance_cm <= 0.0 {
        return Err(PhotometryError::InvalidDistance(distance_cm));
    }
    Ok(5.0 * ((distance_cm / PARSEC_CM).log10() - 1.0))
}

/// Absolute magnitude of a source at `distance_cm` with the given apparent magnitude.
pub fn apparent_to_absolute(apparent_magnitude: f64, distance_cm: f64) -> Result<f64, PhotometryError> {
    Ok(apparent_magnitude - distance_modulus(distance_cm)?)
}

/// Dust extinction along the line of sight, in magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extinction {
    /// Milky Way contribution.
    #[serde(default)]
    pub milky_way: f64,
    /// Host-galaxy contribution.
    #[serde(default)]
    pub host: f64,
}

impl Extinction {
    pub fn new(milky_way: f64, host: f64) -> Self {
        Self { milky_way, host }
    }

    pub fn total(&self) -> f64 {
        self.milky_way + self.host
    }

    /// Remove the extinction from an observed magnitude (the source gets brighter).
    pub fn deredden(&self, observed_magnitude: f64) -> f64 {
        observed_magnitude - self.total()
    }
}

/// A photometric observation: epoch and observed apparent magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationPoint {
    /// Days since explosion.
    pub time_days: f64,
    /// Observed (apparent, not extinction-corrected) magnitude.
    pub magnitude: f64,
}

impl ObservationPoint {
    pub fn new(time_days: f64, magnitude: f64) -> Self {
        Self {
            time_days,
            magnitude,
        }
    }

    /// HST F350LP late-time photometry of SN 2012cg (Graur et al. 2016).
    pub fn graur_2016_sn2012cg() -> Vec<ObservationPoint> {
        vec![
            ObservationPoint::new(924.5, 25.76),
            ObservationPoint::new(976.9, 25.94),
            ObservationPoint::new(1055.6, 26.29),
        ]
    }
}

/// An observation placed on the luminosity axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservedLuminosity {
    pub time_days: f64,
    /// erg/s
    pub luminosity: f64,
}

/// Distance and extinction needed to turn observed magnitudes into luminosities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhotometricCalibration {
    pub distance_cm: f64,
    pub extinction: Extinction,
}

impl PhotometricCalibration {
    pub fn new(distance_cm: f64, extinction: Extinction) -> Result<Self, PhotometryError> {
        distance_modulus(distance_cm)?;
        Ok(Self {
            distance_cm,
            extinction,
        })
    }

    /// SN 2012cg: 15.2 Mpc, F350LP extinction 0.054 (Milky Way) + 0.515 (host).
    pub fn graur_2016_sn2012cg() -> Self {
        Self {
            distance_cm: 15.2 * MEGAPARSEC_CM,
            extinction: Extinction::new(0.054, 0.515),
        }
    }

    /// Extinction-corrected absolute magnitude of an observed apparent magnitude.
    pub fn absolute_magnitude(&self, apparent_magnitude: f64) -> Result<f64, PhotometryError> {
        apparent_to_absolute(self.extinction.deredden(apparent_magnitude), self.distance_cm)
    }

    /// Convert one observation to luminosity.
    pub fn luminosity(&self, point: &ObservationPoint) -> Result<ObservedLuminosity, PhotometryError> {
        let absolute = self.absolute_magnitude(point.magnitude)?;
        Ok(ObservedLuminosity {
            time_days: point.time_days,
            luminosity: magnitude_to_luminosity(absolute),
        })
    }

    /// Convert a set of observations, failing on the first invalid conversion.
    pub fn luminosities(
        &self,
        points: &[ObservationPoint],
    ) -> Result<Vec<ObservedLuminosity>, PhotometryError> {
        points.iter().map(|p| self.luminosity(p)).collect()
    }
}
