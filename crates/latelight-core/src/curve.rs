//! Light-curve assembly.
//!
//! A light curve is the pointwise sum of independently decaying
//! [`DecayScenario`]s over a caller-supplied time grid. The grid does not
//! need to be uniform, only finite and non-decreasing; samples are never
//! resorted, so the output is aligned index-for-index with the input.

use ndarray::{Array1, ArrayView1};

use crate::model::DecayError;
use crate::scenario::DecayScenario;

/// Total luminosity sampled on a time grid.
///
/// Immutable once built; changing a scenario means assembling a new curve.
#[derive(Debug, Clone, PartialEq)]
pub struct LightCurve {
    /// Days since explosion.
    times: Array1<f64>,
    /// Luminosity (erg/s), linear.
    luminosity: Array1<f64>,
}

impl LightCurve {
    /// Sample times (days since explosion).
    pub fn times(&self) -> ArrayView1<'_, f64> {
        self.times.view()
    }

    /// Luminosity samples (erg/s).
    pub fn luminosity(&self) -> ArrayView1<'_, f64> {
        self.luminosity.view()
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Luminosity at sample `index`, if in range.
    pub fn luminosity_at_index(&self, index: usize) -> Option<f64> {
        self.luminosity.get(index).copied()
    }

    /// Iterate over `(time, luminosity)` pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.luminosity.iter().copied())
    }
}

/// Paired lower and upper light curves on a shared grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    low: LightCurve,
    high: LightCurve,
}

impl Envelope {
    /// Pair two curves assembled on the same grid.
    pub fn new(low: LightCurve, high: LightCurve) -> Result<Self, DecayError> {
        if low.times != high.times {
            return Err(DecayError::MismatchedGrids);
        }
        Ok(Self { low, high })
    }

    /// Curve built from the low-mass-fraction scenario set.
    pub fn low(&self) -> &LightCurve {
        &self.low
    }

    /// Curve built from the high-mass-fraction scenario set.
    pub fn high(&self) -> &LightCurve {
        &self.high
    }

    pub fn times(&self) -> ArrayView1<'_, f64> {
        self.low.times()
    }

    pub fn len(&self) -> usize {
        self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.low.is_empty()
    }

    /// `(low, high)` luminosity at sample `index`.
    pub fn bounds_at(&self, index: usize) -> Option<(f64, f64)> {
        Some((
            self.low.luminosity_at_index(index)?,
            self.high.luminosity_at_index(index)?,
        ))
    }

    /// Whether `luminosity` lies between the two curves at sample `index`.
    pub fn contains(&self, index: usize, luminosity: f64) -> bool {
        match self.bounds_at(index) {
            Some((a, b)) => luminosity >= a.min(b) && luminosity <= a.max(b),
            None => false,
        }
    }

    /// True when the low curve never exceeds the high curve.
    pub fn is_ordered(&self) -> bool {
        self.low
            .luminosity
            .iter()
            .zip(self.high.luminosity.iter())
            .all(|(lo, hi)| lo <= hi)
    }
}

fn validate_grid(times: &[f64]) -> Result<(), DecayError> {
    if times.is_empty() {
        return Err(DecayError::EmptyTimeGrid);
    }
    for (index, &t) in times.iter().enumerate() {
        if !t.is_finite() || (index > 0 && t < times[index - 1]) {
            return Err(DecayError::UnorderedTimeGrid { index });
        }
    }
    Ok(())
}

/// Sum the luminosity of every scenario at each time sample.
///
/// An empty scenario set yields an all-zero curve with one sample per grid
/// point. An empty grid is an error.
pub fn assemble(times: &[f64], scenarios: &[DecayScenario]) -> Result<LightCurve, DecayError> {
    validate_grid(times)?;

    let grid = ArrayView1::from(times);
    let mut total = Array1::<f64>::zeros(grid.len());
    for scenario in scenarios {
        total.zip_mut_with(&grid, |l, &t| *l += scenario.luminosity_at(t));
    }

    Ok(LightCurve {
        times: grid.to_owned(),
        luminosity: total,
    })
}

/// Parallel [`assemble`]: each time sample is written to its own slot and the
/// scenarios are folded locally, in the same order, so the result is
/// bit-identical to the serial version.
#[cfg(feature = "parallel")]
pub fn assemble_par(times: &[f64], scenarios: &[DecayScenario]) -> Result<LightCurve, DecayError> {
    use ndarray::Zip;

    validate_grid(times)?;

    let grid = ArrayView1::from(times);
    let mut total = Array1::<f64>::zeros(grid.len());
    Zip::from(&mut total).and(&grid).par_for_each(|l, &t| {
        *l = scenarios
            .iter()
            .fold(0.0, |acc, scenario| acc + scenario.luminosity_at(t));
    });

    Ok(LightCurve {
        times: grid.to_owned(),
        luminosity: total,
    })
}

/// One curve per scenario, in input order.
pub fn assemble_components(
    times: &[f64],
    scenarios: &[DecayScenario],
) -> Result<Vec<LightCurve>, DecayError> {
    validate_grid(times)?;
    scenarios
        .iter()
        .map(|scenario| assemble(times, std::slice::from_ref(scenario)))
        .collect()
}

/// Assemble independent low and high total curves over the same grid.
pub fn assemble_envelope(
    times: &[f64],
    low: &[DecayScenario],
    high: &[DecayScenario],
) -> Result<Envelope, DecayError> {
    Envelope::new(assemble(times, low)?, assemble(times, high)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isotope::Isotope;
    use crate::model::luminosity;

    fn grid() -> Vec<f64> {
        vec![0.0, 10.0, 250.0, 900.0, 2000.0]
    }

    #[test]
    fn test_single_scenario_matches_pointwise_model() {
        let s = DecayScenario::new(Isotope::Co56, 0.7).unwrap();
        let curve = assemble(&grid(), &[s]).unwrap();
        assert_eq!(curve.len(), 5);
        for (t, l) in curve.iter() {
            assert_eq!(l, luminosity(Isotope::Co56, 0.7, t));
        }
    }

    #[test]
    fn test_empty_scenarios_give_zero_curve() {
        let curve = assemble(&grid(), &[]).unwrap();
        assert_eq!(curve.len(), grid().len());
        assert!(curve.luminosity().iter().all(|&l| l == 0.0));
    }

    #[test]
    fn test_empty_grid_is_error() {
        let s = DecayScenario::new(Isotope::Co56, 0.7).unwrap();
        assert_eq!(assemble(&[], &[s]), Err(DecayError::EmptyTimeGrid));
        assert_eq!(
            assemble_envelope(&[], &[s], &[s]),
            Err(DecayError::EmptyTimeGrid)
        );
    }

    #[test]
    fn test_unordered_grid_is_error() {
        let err = assemble(&[0.0, 5.0, 3.0], &[]).unwrap_err();
        assert_eq!(err, DecayError::UnorderedTimeGrid { index: 2 });
        let err = assemble(&[0.0, f64::NAN], &[]).unwrap_err();
        assert_eq!(err, DecayError::UnorderedTimeGrid { index: 1 });
    }

    #[test]
    fn test_non_uniform_grid_keeps_sample_order() {
        let times = [0.0, 0.5, 0.5, 700.0, 701.0];
        let curve = assemble(&times, &[]).unwrap();
        assert_eq!(curve.times().to_vec(), times.to_vec());
    }

    #[test]
    fn test_components_sum_to_total() {
        let scenarios = [
            DecayScenario::new(Isotope::Co56, 0.7).unwrap(),
            DecayScenario::new(Isotope::Co57, 1.49e-2).unwrap(),
            DecayScenario::new(Isotope::Fe55, 3.73e-3).unwrap(),
        ];
        let total = assemble(&grid(), &scenarios).unwrap();
        let parts = assemble_components(&grid(), &scenarios).unwrap();
        assert_eq!(parts.len(), 3);
        for i in 0..total.len() {
            let sum: f64 = parts
                .iter()
                .fold(0.0, |acc, c| acc + c.luminosity_at_index(i).unwrap());
            assert_eq!(sum, total.luminosity_at_index(i).unwrap());
        }
    }

    #[test]
    fn test_envelope_bounds_and_contains() {
        let low = [DecayScenario::new(Isotope::Co57, 1.49e-2).unwrap()];
        let high = [DecayScenario::new(Isotope::Co57, 1.88e-2).unwrap()];
        let env = assemble_envelope(&grid(), &low, &high).unwrap();
        assert!(env.is_ordered());
        let (lo, hi) = env.bounds_at(3).unwrap();
        assert!(lo < hi);
        assert!(env.contains(3, 0.5 * (lo + hi)));
        assert!(!env.contains(3, hi * 1.01));
        assert!(!env.contains(99, lo));
        assert_eq!(env.bounds_at(5), None);
    }

    #[test]
    fn test_envelope_rejects_mismatched_grids() {
        let s = [DecayScenario::new(Isotope::Co56, 0.7).unwrap()];
        let low = assemble(&[0.0, 100.0], &s).unwrap();
        let high = assemble(&[0.0, 200.0], &s).unwrap();
        assert_eq!(Envelope::new(low.clone(), high), Err(DecayError::MismatchedGrids));

        let short = assemble(&[0.0], &s).unwrap();
        assert_eq!(Envelope::new(low.clone(), short), Err(DecayError::MismatchedGrids));
        assert!(Envelope::new(low.clone(), low).is_ok());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial_bitwise() {
        let scenarios = [
            DecayScenario::new(Isotope::Co56, 0.7).unwrap(),
            DecayScenario::new(Isotope::Co57, 1.88e-2).unwrap(),
            DecayScenario::new(Isotope::Fe55, 1.33e-2).unwrap(),
        ];
        let times: Vec<f64> = (0..1000).map(|i| i as f64 * 2.0).collect();
        let serial = assemble(&times, &scenarios).unwrap();
        let parallel = assemble_par(&times, &scenarios).unwrap();
        for (a, b) in serial.luminosity().iter().zip(parallel.luminosity().iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
