//! Reed–Solomon generator polynomials and parity codewords
//!
//! The generator polynomial of degree `n` is `∏_{i=0}^{n-1} (x - α^i)`
//! where `α` is the field's primitive element. Parity codewords are the
//! remainder of the shifted message polynomial divided by that generator.

use std::sync::Arc;

use tracing::debug;

use crate::field::{FieldElement, GaloisField};
use crate::poly::Polynomial;
use crate::AlgebraError;

/// Builds generator polynomials over a fixed field and derives parity
/// codeword sequences from message polynomials.
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    field: Arc<GaloisField>,
}

impl GeneratorBuilder {
    /// Bind a builder to the field the codewords live in.
    pub fn new(field: Arc<GaloisField>) -> Self {
        Self { field }
    }

    /// The degree-`degree` generator polynomial.
    ///
    /// Accumulated by repeated convolution with the degree-1 factors
    /// `(x + α^i)`; in characteristic 2 each `-α^i` equals `α^i`, so the
    /// factors' roots are exactly the first `degree` powers of the
    /// generator.
    pub fn generator_poly(
        &self,
        degree: usize,
    ) -> Result<Polynomial<FieldElement>, AlgebraError> {
        let one = self.field.element(1);
        let mut generator = Polynomial::new(vec![one.clone()])?;
        for i in 0..degree {
            let root = self.field.element(self.field.antilog(i));
            let factor = Polynomial::new(vec![root, one.clone()])?;
            generator = generator.mul(&factor)?;
        }
        debug!(degree, "generator polynomial built");
        Ok(generator)
    }

    /// Parity codewords for `message`, highest-degree term first.
    ///
    /// Shifts the message left by `parity_len` (multiplies by `x^n`),
    /// divides by the degree-`parity_len` generator polynomial, and
    /// returns the remainder's coefficients zero-padded on the left to
    /// exactly `parity_len` codewords.
    pub fn parity(
        &self,
        message: &Polynomial<FieldElement>,
        parity_len: usize,
    ) -> Result<Vec<FieldElement>, AlgebraError> {
        if parity_len == 0 {
            return Ok(Vec::new());
        }
        if message.is_zero() {
            // The remainder of the zero polynomial is zero; routing it
            // through division would trip the degree check.
            return Ok(vec![self.field.element(0); parity_len]);
        }

        let generator = self.generator_poly(parity_len)?;
        let (_quotient, remainder) = message.shift(parity_len).div_rem(&generator)?;

        let mut parity = vec![self.field.element(0); parity_len];
        for (power, coeff) in remainder.coefficients().iter().enumerate() {
            parity[parity_len - 1 - power] = coeff.clone();
        }
        Ok(parity)
    }
}
