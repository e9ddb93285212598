//! Radioactive isotopes powering the late-time light curve.
//!
//! The set is closed: ⁵⁵Fe, ⁵⁶Co and ⁵⁷Co are the only species whose decay
//! dominates the bolometric output between a few hundred and a few thousand
//! days after explosion. Their constants are tabulated once, at compile time,
//! and never change.
//!
//! # References
//! Seitenzahl et al., *MNRAS* **400**, 531 (2009);
//! Seitenzahl et al., *ApJ* **792**, 10 (2014).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::DecayError;

/// A supported radioactive isotope, identified by its mass number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Isotope {
    /// ⁵⁵Fe, decaying by electron capture to ⁵⁵Mn.
    Fe55,
    /// ⁵⁶Co, decaying to ⁵⁶Fe (the tail of the ⁵⁶Ni chain).
    Co56,
    /// ⁵⁷Co, decaying by electron capture to ⁵⁷Fe.
    Co57,
}

/// Average energy released per decay, split by emission channel (keV).
///
/// Kept per channel rather than as a single sum so that a revised literature
/// value for one channel does not require re-deriving the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayChannels {
    /// Auger electrons.
    pub auger: f64,
    /// Internal-conversion electrons.
    pub internal_conversion: f64,
    /// Positrons.
    pub positron: f64,
    /// X-rays.
    pub x_ray: f64,
}

impl DecayChannels {
    /// Total energy per decay (keV), summed in channel order.
    pub fn total(&self) -> f64 {
        self.auger + self.internal_conversion + self.positron + self.x_ray
    }
}

/// Immutable physical constants for one isotope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsotopeData {
    /// Decay constant λ (day⁻¹), the inverse of the mean lifetime.
    pub decay_constant: f64,
    /// Energy released per decay, per channel (keV).
    pub channels: DecayChannels,
}

const ISOTOPE_TABLE: [IsotopeData; 3] = [
    // 55Fe
    IsotopeData {
        decay_constant: 6.916e-4,
        channels: DecayChannels {
            auger: 3.973,
            internal_conversion: 0.000,
            positron: 0.000,
            x_ray: 1.635,
        },
    },
    // 56Co
    IsotopeData {
        decay_constant: 8.975e-3,
        channels: DecayChannels {
            auger: 3.355,
            internal_conversion: 0.374,
            positron: 115.7,
            x_ray: 1.588,
        },
    },
    // 57Co
    IsotopeData {
        decay_constant: 2.551e-3,
        channels: DecayChannels {
            auger: 7.594,
            internal_conversion: 10.22,
            positron: 0.000,
            x_ray: 3.598,
        },
    },
];

impl Isotope {
    /// All supported isotopes, in increasing mass number.
    pub const ALL: [Isotope; 3] = [Isotope::Fe55, Isotope::Co56, Isotope::Co57];

    /// Look up an isotope by mass number.
    pub fn from_mass_number(a: u32) -> Result<Self, DecayError> {
        match a {
            55 => Ok(Isotope::Fe55),
            56 => Ok(Isotope::Co56),
            57 => Ok(Isotope::Co57),
            other => Err(DecayError::UnsupportedIsotope(other)),
        }
    }

    /// Atomic mass number A.
    pub fn mass_number(self) -> u32 {
        match self {
            Isotope::Fe55 => 55,
            Isotope::Co56 => 56,
            Isotope::Co57 => 57,
        }
    }

    /// Conventional symbol, e.g. `"56Co"`.
    pub fn symbol(self) -> &'static str {
        match self {
            Isotope::Fe55 => "55Fe",
            Isotope::Co56 => "56Co",
            Isotope::Co57 => "57Co",
        }
    }

    /// Tabulated constants for this isotope.
    pub fn data(self) -> &'static IsotopeData {
        match self {
            Isotope::Fe55 => &ISOTOPE_TABLE[0],
            Isotope::Co56 => &ISOTOPE_TABLE[1],
            Isotope::Co57 => &ISOTOPE_TABLE[2],
        }
    }

    /// Decay constant λ (day⁻¹).
    pub fn decay_constant(self) -> f64 {
        self.data().decay_constant
    }

    /// Per-channel energy release (keV).
    pub fn channels(self) -> DecayChannels {
        self.data().channels
    }

    /// Total average energy released per decay q (keV).
    pub fn energy_per_decay(self) -> f64 {
        self.data().channels.total()
    }

    /// Mean lifetime τ = 1/λ (days).
    pub fn mean_lifetime_days(self) -> f64 {
        1.0 / self.decay_constant()
    }

    /// Half-life ln 2 / λ (days).
    pub fn half_life_days(self) -> f64 {
        std::f64::consts::LN_2 / self.decay_constant()
    }
}

impl fmt::Display for Isotope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl TryFrom<u32> for Isotope {
    type Error = DecayError;

    fn try_from(a: u32) -> Result<Self, Self::Error> {
        Isotope::from_mass_number(a)
    }
}

impl From<Isotope> for u32 {
    fn from(isotope: Isotope) -> u32 {
        isotope.mass_number()
    }
}

/// Errors from parsing an isotope name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot parse '{0}' as an isotope (expected e.g. 56, 56Co, Co56)")]
pub struct ParseIsotopeError(pub String);

impl FromStr for Isotope {
    type Err = ParseIsotopeError;

    /// Accepts a bare mass number (`"57"`) or a symbol written either way
    /// round, with an optional hyphen (`"57Co"`, `"Co57"`, `"co-57"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        let digits: String = cleaned.chars().filter(|c| c.is_ascii_digit()).collect();
        let letters: String = cleaned.chars().filter(|c| c.is_ascii_alphabetic()).collect();

        let a: u32 = digits.parse().map_err(|_| ParseIsotopeError(s.to_string()))?;
        let isotope = Isotope::from_mass_number(a).map_err(|_| ParseIsotopeError(s.to_string()))?;

        let expected = match isotope {
            Isotope::Fe55 => "fe",
            Isotope::Co56 | Isotope::Co57 => "co",
        };
        if letters.is_empty() || letters == expected {
            Ok(isotope)
        } else {
            Err(ParseIsotopeError(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_energy_per_decay_matches_channel_sums() {
        assert_relative_eq!(Isotope::Fe55.energy_per_decay(), 5.608, epsilon = 1e-12);
        assert_relative_eq!(Isotope::Co56.energy_per_decay(), 121.017, epsilon = 1e-12);
        assert_relative_eq!(Isotope::Co57.energy_per_decay(), 21.412, epsilon = 1e-12);
    }

    #[test]
    fn test_fe55_has_no_positron_or_conversion_channel() {
        let ch = Isotope::Fe55.channels();
        assert_eq!(ch.positron, 0.0);
        assert_eq!(ch.internal_conversion, 0.0);
    }

    #[test]
    fn test_decay_constants_positive() {
        for iso in Isotope::ALL {
            assert!(iso.decay_constant() > 0.0, "{iso} has non-positive λ");
            assert!(iso.energy_per_decay() > 0.0, "{iso} has non-positive q");
        }
    }

    #[test]
    fn test_half_life_of_co56_is_about_77_days() {
        assert_relative_eq!(Isotope::Co56.half_life_days(), 77.23, epsilon = 0.05);
        assert_relative_eq!(
            Isotope::Co56.mean_lifetime_days() * Isotope::Co56.decay_constant(),
            1.0
        );
    }

    #[test]
    fn test_mass_number_lookup() {
        for iso in Isotope::ALL {
            assert_eq!(Isotope::from_mass_number(iso.mass_number()).unwrap(), iso);
        }
        assert!(matches!(
            Isotope::from_mass_number(58),
            Err(DecayError::UnsupportedIsotope(58))
        ));
    }

    #[test]
    fn test_parse_spellings() {
        assert_eq!("56".parse::<Isotope>().unwrap(), Isotope::Co56);
        assert_eq!("57Co".parse::<Isotope>().unwrap(), Isotope::Co57);
        assert_eq!("Fe55".parse::<Isotope>().unwrap(), Isotope::Fe55);
        assert_eq!("co-56".parse::<Isotope>().unwrap(), Isotope::Co56);
        assert!("56Fe".parse::<Isotope>().is_err());
        assert!("Ni".parse::<Isotope>().is_err());
        assert!("44Ti".parse::<Isotope>().is_err());
    }

    #[test]
    fn test_serde_as_mass_number() {
        let json = serde_json::to_string(&Isotope::Co57).unwrap();
        assert_eq!(json, "57");
        let back: Isotope = serde_json::from_str("55").unwrap();
        assert_eq!(back, Isotope::Fe55);
        assert!(serde_json::from_str::<Isotope>("60").is_err());
    }
}
