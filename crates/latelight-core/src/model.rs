//! Single-isotope decay luminosity.
//!
//! The instantaneous power deposited by an isotope of mass number $A$ with
//! initial mass $M_0$ follows from the one-step Bateman solution
//! (Graur et al. 2016, eq. 1):
//!
//! $$L(t) = 2.221 \frac{B}{A} \lambda M_0 q \, e^{-\lambda t} \times 10^{43}\ \text{erg s}^{-1}$$
//!
//! with $t$ in days, $\lambda$ in day⁻¹, $q$ in keV and $M_0$ in solar masses.
//! All decay energy is assumed to be deposited in the ejecta.
//!
//! Each isotope decays on its own: the model does not feed a daughter from its
//! parent (e.g. ⁵⁶Ni → ⁵⁶Co). Multi-isotope curves are superpositions of
//! independent exponentials, which is a modelling approximation, not a
//! coupled-chain solution.

use thiserror::Error;

use crate::isotope::Isotope;

/// Leading numerical factor of the Bateman luminosity expression.
pub const BATEMAN_PREFACTOR: f64 = 2.221;

/// Scaling factor $B$ folding keV/decay, decays/day and solar masses into erg/s.
pub const SCALING_B: f64 = 0.235;

/// Final unit multiplier to erg/s.
pub const ERG_PER_SEC_SCALE: f64 = 1e43;

/// Errors from building or evaluating decay light curves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecayError {
    #[error("Unsupported isotope with mass number {0} (supported: 55, 56, 57)")]
    UnsupportedIsotope(u32),

    #[error("Invalid scenario for {isotope}: {reason}")]
    InvalidScenario { isotope: Isotope, reason: String },

    #[error("Time grid is empty")]
    EmptyTimeGrid,

    #[error("Time grid is not ordered or not finite at sample {index}")]
    UnorderedTimeGrid { index: usize },

    #[error("Envelope curves are sampled on different time grids")]
    MismatchedGrids,
}

/// Instantaneous bolometric luminosity (erg/s) of `initial_mass` solar masses
/// of `isotope`, `elapsed_days` after explosion.
///
/// Negative times are evaluated as written; restricting the domain is up to
/// the caller. The result is bit-reproducible for identical inputs.
pub fn luminosity(isotope: Isotope, initial_mass: f64, elapsed_days: f64) -> f64 {
    let a = isotope.mass_number() as f64;
    let lambda = isotope.decay_constant();
    let q = isotope.energy_per_decay();

    BATEMAN_PREFACTOR * (SCALING_B / a) * lambda * initial_mass * q
        * (-lambda * elapsed_days).exp()
        * ERG_PER_SEC_SCALE
}

/// Same as [`luminosity`], for an isotope given only by its mass number.
pub fn luminosity_for_mass_number(
    mass_number: u32,
    initial_mass: f64,
    elapsed_days: f64,
) -> Result<f64, DecayError> {
    let isotope = Isotope::from_mass_number(mass_number)?;
    Ok(luminosity(isotope, initial_mass, elapsed_days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_co56_reference_value_at_explosion() {
        let l0 = luminosity(Isotope::Co56, 0.7, 0.0);
        let expected = 2.221 * (0.235 / 56.0) * 8.975e-3 * 0.7 * 121.017 * 1e43;
        assert_relative_eq!(l0, expected, max_relative = 1e-14);
        assert_relative_eq!(l0, 7.086_099_948_220_313e40, max_relative = 1e-12);
    }

    #[test]
    fn test_co56_attenuation_after_100_days() {
        let l0 = luminosity(Isotope::Co56, 0.7, 0.0);
        let l100 = luminosity(Isotope::Co56, 0.7, 100.0);
        assert_relative_eq!(l100, l0 * (-8.975e-3_f64 * 100.0).exp(), max_relative = 1e-14);
        assert_relative_eq!(l100, 2.888_204_738_559_067e40, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_time_has_no_attenuation() {
        for iso in Isotope::ALL {
            let a = iso.mass_number() as f64;
            let expected = 2.221 * (0.235 / a) * iso.decay_constant() * 0.01
                * iso.energy_per_decay()
                * 1e43;
            assert_eq!(luminosity(iso, 0.01, 0.0), expected);
        }
    }

    #[test]
    fn test_negative_time_evaluates() {
        let before = luminosity(Isotope::Co57, 0.015, -10.0);
        let at = luminosity(Isotope::Co57, 0.015, 0.0);
        assert!(before > at);
    }

    #[test]
    fn test_zero_mass_gives_zero() {
        assert_eq!(luminosity(Isotope::Fe55, 0.0, 500.0), 0.0);
    }

    #[test]
    fn test_unsupported_mass_number_is_an_error() {
        assert_eq!(
            luminosity_for_mass_number(44, 0.7, 0.0),
            Err(DecayError::UnsupportedIsotope(44))
        );
        assert_eq!(
            luminosity_for_mass_number(56, 0.7, 10.0).unwrap(),
            luminosity(Isotope::Co56, 0.7, 10.0)
        );
    }

    #[test]
    fn test_is_deterministic() {
        let a = luminosity(Isotope::Co57, 1.49e-2, 924.5);
        let b = luminosity(Isotope::Co57, 1.49e-2, 924.5);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
