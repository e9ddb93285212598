//! Yield model trait.
//!
//! All yield sources implement [`YieldModel`], which hands the decay model the
//! initial isotope masses a source predicts.

use latelight_core::{DecayError, DecayScenario};
use serde::Serialize;
use thiserror::Error;

/// Errors from yield models.
#[derive(Debug, Error)]
pub enum YieldError {
    #[error("Unknown yield model '{0}' (run `latelight models` for the list)")]
    UnknownModel(String),

    #[error(transparent)]
    Decay(#[from] DecayError),
}

/// Low and high scenario sets bounding an uncertain yield.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvelopeScenarios {
    pub low: Vec<DecayScenario>,
    pub high: Vec<DecayScenario>,
}

/// Produces decay scenarios from published nucleosynthesis yields.
pub trait YieldModel: Send + Sync {
    /// Short model name, e.g. `"dave_gcd"` or `"N100def"`.
    fn name(&self) -> &str;

    /// Literature reference for the numbers.
    fn reference(&self) -> &str;

    /// Best-estimate initial masses.
    fn nominal(&self) -> Result<Vec<DecayScenario>, YieldError>;

    /// Low and high bounds on the initial masses.
    ///
    /// Default implementation collapses both bounds onto [`nominal`](Self::nominal),
    /// for sources that quote no uncertainty.
    fn envelope(&self) -> Result<EnvelopeScenarios, YieldError> {
        let nominal = self.nominal()?;
        Ok(EnvelopeScenarios {
            low: nominal.clone(),
            high: nominal,
        })
    }
}
