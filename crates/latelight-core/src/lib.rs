//! # Latelight Core
//!
//! The numerical backbone of latelight. This crate computes the bolometric
//! luminosity released by the radioactive decay of ⁵⁵Fe, ⁵⁶Co and ⁵⁷Co in the
//! ejecta of a Type Ia supernova, and assembles those contributions into
//! late-time light curves that can be laid over photometric observations.
//!
//! ## Architecture
//!
//! Every operation is a pure function over immutable inputs. The isotope
//! constants live in a compile-time table ([`isotope`]), the per-isotope power
//! output is a single closed-form expression ([`model::luminosity`]), and the
//! assembler ([`curve`]) superposes independently decaying scenarios over a
//! caller-supplied time grid. Nothing here renders or takes logarithms; that is
//! left to whatever consumes a [`curve::LightCurve`].
//!
//! ## Modules
//!
//! - [`isotope`]: Supported isotopes and their decay constants and energies.
//! - [`model`]: Single-isotope decay luminosity and the error taxonomy.
//! - [`scenario`]: Validated (isotope, initial mass) pairs.
//! - [`curve`]: Light-curve assembly, per-scenario components and envelopes.
//! - [`photometry`]: Magnitude/luminosity conversion, distance modulus, extinction.
//! - [`comparison`]: Observed luminosities against a model envelope.

pub mod comparison;
pub mod curve;
pub mod isotope;
pub mod model;
pub mod photometry;
pub mod scenario;

pub use curve::{assemble, assemble_components, assemble_envelope, Envelope, LightCurve};
pub use isotope::{DecayChannels, Isotope};
pub use model::{luminosity, DecayError};
pub use scenario::DecayScenario;

#[cfg(feature = "parallel")]
pub use curve::assemble_par;
