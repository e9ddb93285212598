//! # Latelight Yields
//!
//! Literature nucleosynthesis yields for the latelight decay model. Every
//! source implements the [`YieldModel`](provider::YieldModel) trait, which
//! turns published masses or mass ratios into [`DecayScenario`] sets: a
//! nominal set, and a low/high pair bounding the uncertain ⁵⁷Co and ⁵⁵Fe
//! fractions.
//!
//! ## Available sources
//!
//! | Source | Module | Kind |
//! |--------|--------|------|
//! | Graur et al. (2016), Dave et al. (2017) DDT / GCD ratios | [`ratio`] | ⁵⁷Co/⁵⁶Co and ⁵⁵Fe/⁵⁷Co ratios |
//! | Dave et al. (2017) GCD masses | [`absolute`] | Explicit mass bounds |
//! | Fink et al. (2014) deflagrations | [`fink_2014`] | Per-model ejecta yields |
//!
//! [`DecayScenario`]: latelight_core::DecayScenario

pub mod absolute;
pub mod fink_2014;
pub mod provider;
pub mod ratio;
pub mod registry;

pub use provider::{EnvelopeScenarios, YieldError, YieldModel};
pub use registry::{available, lookup};
