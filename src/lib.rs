#![no_std]

//! Fixed-point conversion between linear prediction (LPC) coefficients and
//! normalized line spectral frequencies (NLSFs).
//!
//! Line spectral frequencies carry the same spectral envelope as the LPC
//! coefficients they are derived from, but quantize far more gracefully:
//! they are bounded, ordered, and small perturbations keep the filter
//! stable. Speech codecs therefore convert predictor coefficients to NLSFs
//! before quantization and back afterwards.
//!
//! The conversions here operate entirely in scaled-integer ("Q-format")
//! arithmetic with defined rounding, so identical inputs produce identical
//! outputs on every platform. The forward direction ([`a2nlsf()`]) finds
//! the roots of the predictor's symmetric and antisymmetric factors on a
//! quantized cosine grid; the inverse ([`nlsf2a()`]) rebuilds predictor
//! coefficients from those roots. Both use a piecewise linear cosine
//! approximation, so each direction is approximate but the pair are
//! accurate inverses of each other.
//!
//! Iteration counts are compile-time constants, which keeps the worst-case
//! cost of a conversion statically known. That property, and the absence of
//! any allocation or I/O, is what makes the routines usable inside a
//! real-time codec budget.

pub mod a2nlsf;
pub mod bwexpander_32;
pub mod lpc_fit;
pub mod lpc_inv_pred_gain;
pub mod math;
pub mod nlsf2a;
pub mod table_lsf_cos;

pub use a2nlsf::{a2nlsf, a2nlsf_in_place, Convergence};
pub use nlsf2a::nlsf2a;

/// Maximum LPC order handled by the fixed-point routines.
pub const MAX_ORDER_LPC: usize = 24;
