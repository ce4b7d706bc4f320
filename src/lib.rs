//! # Galois field arithmetic and Reed–Solomon parity generation
//!
//! This library implements the algebraic core of a block error-correction
//! encoder:
//!
//! 1. **Field construction**: [`GaloisField::new`] builds log/antilog tables
//!    for GF(2^w) from a bit-packed irreducible modulus, rejecting
//!    non-primitive generators.
//! 2. **Elements**: [`FieldElement`]s bind a raw value to a shared field
//!    handle; all arithmetic delegates to the field's O(1) table lookups.
//! 3. **Polynomials**: [`Polynomial`] is generic over one coefficient kind
//!    (`f64` or [`FieldElement`]) fixed at construction, with ring
//!    operations including division with remainder.
//! 4. **Parity**: [`GeneratorBuilder`] composes the above into Reed–Solomon
//!    generator polynomials and parity codeword sequences.
//!
//! ## Usage example
//!
//! ```
//! use solomon::{GaloisField, GeneratorBuilder, Polynomial};
//!
//! let field = GaloisField::new(0x11D, 256, 2)?;
//! let builder = GeneratorBuilder::new(field.clone());
//!
//! // Message coefficients, constant term first.
//! let message = Polynomial::new(vec![field.element(1), field.element(2)])?;
//! let parity = builder.parity(&message, 2)?;
//!
//! assert_eq!(parity[0].value(), 0x0D);
//! assert_eq!(parity[1].value(), 0x0E);
//! # Ok::<(), solomon::AlgebraError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod field;
pub mod poly;
pub mod rs;
mod util;

// Re-exports for convenience
pub use field::{FieldElement, GaloisField};
pub use poly::{Coefficient, Polynomial};
pub use rs::GeneratorBuilder;

use thiserror::Error;

/// Errors surfaced by field construction and polynomial arithmetic.
///
/// Every operation here is deterministic and pure, so none of these are
/// retryable: the caller must fix the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// The requested generator repeats before enumerating the full
    /// multiplicative group, so it cannot index the log tables.
    #[error("generator {generator} is not primitive for a field of size {size}: cycle repeats after {steps} steps")]
    InvalidGenerator {
        /// The rejected generator element.
        generator: u16,
        /// Field size the construction was attempted with.
        size: usize,
        /// Distinct powers seen before the repeat.
        steps: usize,
    },

    /// Inversion or division of the additive identity.
    #[error("zero has no multiplicative inverse")]
    DivisionByZero,

    /// Arithmetic between elements of two different fields.
    #[error("operands belong to different fields")]
    FieldMismatch,

    /// Polynomial division where the divisor outranks the dividend.
    #[error("divisor degree {divisor} exceeds dividend degree {dividend}")]
    DivisorTooLarge {
        /// Degree of the divisor.
        divisor: usize,
        /// Degree of the dividend.
        dividend: usize,
    },

    /// A polynomial needs at least one coefficient.
    #[error("a polynomial needs at least one coefficient")]
    EmptyCoefficients,
}
