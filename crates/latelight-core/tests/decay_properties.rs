//! Property-based tests for the decay luminosity model and assembler.
//!
//! Covers: positivity and monotonic decay, linearity in mass, pointwise
//! agreement of single-scenario curves, envelope ordering, and the
//! magnitude/luminosity inverse.

use latelight_core::curve::{assemble, assemble_envelope};
use latelight_core::isotope::Isotope;
use latelight_core::model::luminosity;
use latelight_core::photometry::{luminosity_to_magnitude, magnitude_to_luminosity};
use latelight_core::scenario::DecayScenario;
use proptest::prelude::*;

fn any_isotope() -> impl Strategy<Value = Isotope> {
    prop::sample::select(Isotope::ALL.to_vec())
}

// ── Single-isotope model ─────────────────────────────────────────────

proptest! {
    /// Luminosity is positive and strictly decreasing in time.
    #[test]
    fn luminosity_positive_and_decreasing(
        iso in any_isotope(),
        mass in 1e-4f64..2.0,
        t in 0.0f64..3000.0,
        dt in 1.0f64..500.0,
    ) {
        let now = luminosity(iso, mass, t);
        let later = luminosity(iso, mass, t + dt);
        prop_assert!(now > 0.0);
        prop_assert!(later > 0.0);
        prop_assert!(later < now, "{} not decaying: {} -> {}", iso, now, later);
    }

    /// Doubling the mass doubles the luminosity.
    #[test]
    fn luminosity_linear_in_mass(
        iso in any_isotope(),
        mass in 1e-4f64..1.0,
        t in 0.0f64..3000.0,
    ) {
        let single = luminosity(iso, mass, t);
        let double = luminosity(iso, 2.0 * mass, t);
        prop_assert!((double - 2.0 * single).abs() <= 1e-12 * double.abs());
    }

    /// Exponential ratio between two epochs depends only on λ.
    #[test]
    fn luminosity_ratio_is_exponential(
        iso in any_isotope(),
        mass in 1e-3f64..1.0,
        t in 0.0f64..1000.0,
        dt in 0.0f64..1000.0,
    ) {
        let ratio = luminosity(iso, mass, t + dt) / luminosity(iso, mass, t);
        let expected = (-iso.decay_constant() * dt).exp();
        prop_assert!((ratio - expected).abs() <= 1e-10 * expected);
    }
}

// ── Assembler ────────────────────────────────────────────────────────

proptest! {
    /// A one-scenario curve is the model evaluated pointwise.
    #[test]
    fn single_scenario_curve_is_pointwise(
        iso in any_isotope(),
        mass in 0.0f64..1.0,
        mut times in prop::collection::vec(0.0f64..2000.0, 1..64),
    ) {
        times.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let scenario = DecayScenario::new(iso, mass).unwrap();
        let curve = assemble(&times, &[scenario]).unwrap();

        prop_assert_eq!(curve.len(), times.len());
        for (i, &t) in times.iter().enumerate() {
            prop_assert_eq!(curve.luminosity_at_index(i).unwrap(), luminosity(iso, mass, t));
        }
    }

    /// Low masses never produce a brighter total than high masses.
    #[test]
    fn envelope_is_ordered(
        m56 in 0.1f64..1.0,
        m57_low in 0.0f64..0.05,
        d57 in 0.0f64..0.05,
        m55_low in 0.0f64..0.05,
        d55 in 0.0f64..0.05,
        points in 2usize..128,
    ) {
        let times: Vec<f64> = (0..points)
            .map(|i| 2000.0 * i as f64 / (points - 1) as f64)
            .collect();
        let low = [
            DecayScenario::new(Isotope::Co56, m56).unwrap(),
            DecayScenario::new(Isotope::Co57, m57_low).unwrap(),
            DecayScenario::new(Isotope::Fe55, m55_low).unwrap(),
        ];
        let high = [
            DecayScenario::new(Isotope::Co56, m56).unwrap(),
            DecayScenario::new(Isotope::Co57, m57_low + d57).unwrap(),
            DecayScenario::new(Isotope::Fe55, m55_low + d55).unwrap(),
        ];
        let env = assemble_envelope(&times, &low, &high).unwrap();
        prop_assert!(env.is_ordered());
    }
}

// ── Photometry ───────────────────────────────────────────────────────

proptest! {
    /// magnitude → luminosity → magnitude is the identity.
    #[test]
    fn magnitude_round_trip(m in -25.0f64..30.0) {
        let back = luminosity_to_magnitude(magnitude_to_luminosity(m)).unwrap();
        prop_assert!((back - m).abs() < 1e-9, "{} -> {}", m, back);
    }

    /// Brighter (smaller) magnitudes give larger luminosities.
    #[test]
    fn magnitude_scale_is_inverted(m in -25.0f64..30.0, dm in 0.01f64..5.0) {
        prop_assert!(magnitude_to_luminosity(m) > magnitude_to_luminosity(m + dm));
    }
}
