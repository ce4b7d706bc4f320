//! Generic polynomial ring
//!
//! A [`Polynomial`] ranges over exactly one coefficient kind for its whole
//! lifetime: real numbers (`f64`) for interpolation scratch work, or
//! [`FieldElement`]s of a single fixed field for codeword algebra. The
//! [`Coefficient`] trait is the closed seam between the two; there is no
//! implicit coercion between kinds.
//!
//! All operations return new values and trim trailing zero coefficients,
//! so `degree()` always reflects the true polynomial degree. The zero
//! polynomial keeps a single zero coefficient and reports degree 0.

use std::fmt;

use tracing::trace;

use crate::field::FieldElement;
use crate::util::superscript;
use crate::AlgebraError;

/// Magnitude below which a real coefficient is treated as exactly zero.
///
/// Long division over `f64` leaves rounding dust where a leading term was
/// cancelled; trimming compares against this threshold instead of exact
/// zero so spurious trailing terms do not survive. Tune here if a consumer
/// works at a very different scale.
pub const ZERO_EPSILON: f64 = 1e-10;

/// Closed set of coefficient kinds a [`Polynomial`] can range over.
///
/// Identities are minted from an existing value (`zero_like`/`one_like`)
/// because a [`FieldElement`] zero needs the handle of its owning field.
pub trait Coefficient: Clone + PartialEq + fmt::Debug {
    /// Additive identity in the same carrier as `self`.
    fn zero_like(&self) -> Self;
    /// Multiplicative identity in the same carrier as `self`.
    fn one_like(&self) -> Self;
    /// Whether the coefficient is (numerically) zero.
    fn is_zero(&self) -> bool;
    /// Additive inverse.
    fn neg(&self) -> Self;
    /// Ring addition.
    fn add(&self, other: &Self) -> Result<Self, AlgebraError>;
    /// Ring multiplication.
    fn mul(&self, other: &Self) -> Result<Self, AlgebraError>;
    /// Division, failing on a zero divisor.
    fn div(&self, other: &Self) -> Result<Self, AlgebraError>;
}

impl Coefficient for f64 {
    fn zero_like(&self) -> Self {
        0.0
    }

    fn one_like(&self) -> Self {
        1.0
    }

    fn is_zero(&self) -> bool {
        self.abs() < ZERO_EPSILON
    }

    fn neg(&self) -> Self {
        -self
    }

    fn add(&self, other: &Self) -> Result<Self, AlgebraError> {
        Ok(self + other)
    }

    fn mul(&self, other: &Self) -> Result<Self, AlgebraError> {
        Ok(self * other)
    }

    fn div(&self, other: &Self) -> Result<Self, AlgebraError> {
        if Coefficient::is_zero(other) {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(self / other)
    }
}

impl Coefficient for FieldElement {
    fn zero_like(&self) -> Self {
        FieldElement::zero_like(self)
    }

    fn one_like(&self) -> Self {
        FieldElement::one_like(self)
    }

    fn is_zero(&self) -> bool {
        FieldElement::is_zero(self)
    }

    // Characteristic 2: every element is its own additive inverse.
    fn neg(&self) -> Self {
        self.clone()
    }

    fn add(&self, other: &Self) -> Result<Self, AlgebraError> {
        FieldElement::add(self, other)
    }

    fn mul(&self, other: &Self) -> Result<Self, AlgebraError> {
        FieldElement::mul(self, other)
    }

    fn div(&self, other: &Self) -> Result<Self, AlgebraError> {
        FieldElement::div(self, other)
    }
}

/// Dense polynomial; index = power of the indeterminate, constant term
/// first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<K> {
    coeffs: Vec<K>,
}

impl<K: Coefficient> Polynomial<K> {
    /// Build a polynomial from coefficients, constant term first.
    ///
    /// Fails with [`AlgebraError::EmptyCoefficients`] on an empty sequence;
    /// trailing zero coefficients are trimmed away.
    pub fn new(coeffs: Vec<K>) -> Result<Self, AlgebraError> {
        if coeffs.is_empty() {
            return Err(AlgebraError::EmptyCoefficients);
        }
        let mut poly = Self { coeffs };
        poly.trim();
        Ok(poly)
    }

    /// Degree of the polynomial (the zero polynomial reports 0).
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficients, constant term first. Never empty.
    pub fn coefficients(&self) -> &[K] {
        &self.coeffs
    }

    /// Highest-degree coefficient.
    pub fn leading(&self) -> &K {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Whether this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Pairwise addition, padding the shorter operand with zeros.
    pub fn add(&self, other: &Self) -> Result<Self, AlgebraError> {
        let len = self.coeffs.len().max(other.coeffs.len());
        let zero = self.zero_coeff();
        let mut out = Vec::with_capacity(len);
        for i in 0..len {
            let a = self.coeffs.get(i).unwrap_or(&zero);
            let b = other.coeffs.get(i).unwrap_or(&zero);
            out.push(a.add(b)?);
        }
        Polynomial::new(out)
    }

    /// Subtraction as addition of the operand scaled by `-1`.
    ///
    /// Over a characteristic-2 field `-1 == 1`, so this collapses to plain
    /// addition, which is the correct field behavior rather than a shortcut.
    pub fn sub(&self, other: &Self) -> Result<Self, AlgebraError> {
        let minus_one = self.coeffs[0].one_like().neg();
        self.add(&other.scale(&minus_one)?)
    }

    /// Convolution product.
    pub fn mul(&self, other: &Self) -> Result<Self, AlgebraError> {
        let zero = self.zero_coeff();
        let mut out = vec![zero; self.degree() + other.degree() + 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                let term = a.mul(b)?;
                out[i + j] = out[i + j].add(&term)?;
            }
        }
        Polynomial::new(out)
    }

    /// Multiply every coefficient by the scalar `k`.
    pub fn scale(&self, k: &K) -> Result<Self, AlgebraError> {
        let mut out = Vec::with_capacity(self.coeffs.len());
        for c in &self.coeffs {
            out.push(c.mul(k)?);
        }
        Polynomial::new(out)
    }

    /// Multiply by the indeterminate raised to `n` (prepend `n` zeros).
    ///
    /// Shifting the zero polynomial yields the zero polynomial.
    pub fn shift(&self, n: usize) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let mut out = vec![self.zero_coeff(); n];
        out.extend(self.coeffs.iter().cloned());
        Self { coeffs: out }
    }

    /// Schoolbook long division, returning `(quotient, remainder)`.
    ///
    /// Fails with [`AlgebraError::DivisorTooLarge`] when the divisor degree
    /// exceeds the dividend degree, and with
    /// [`AlgebraError::DivisionByZero`] when dividing by the zero
    /// polynomial. Each round cancels the remainder's leading term against
    /// the divisor's, so the remainder degree strictly decreases until it
    /// drops below the divisor's.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), AlgebraError> {
        if divisor.degree() > self.degree() {
            return Err(AlgebraError::DivisorTooLarge {
                divisor: divisor.degree(),
                dividend: self.degree(),
            });
        }

        let zero = self.zero_coeff();
        let mut quotient = vec![zero; self.degree() - divisor.degree() + 1];
        let mut remainder = self.clone();

        while !remainder.is_zero() && remainder.degree() >= divisor.degree() {
            let offset = remainder.degree() - divisor.degree();
            let term = remainder.leading().div(divisor.leading())?;
            trace!(offset, "division round");
            let step = divisor.shift(offset).scale(&term)?;
            remainder = remainder.sub(&step)?;
            quotient[offset] = term;
        }

        Ok((Polynomial::new(quotient)?, remainder))
    }

    /// Horner evaluation at `at`.
    pub fn eval(&self, at: &K) -> Result<K, AlgebraError> {
        let mut acc = self.leading().clone();
        for c in self.coeffs.iter().rev().skip(1) {
            acc = acc.mul(at)?.add(c)?;
        }
        Ok(acc)
    }

    fn zero_coeff(&self) -> K {
        self.coeffs[0].zero_like()
    }

    fn trim(&mut self) {
        while self.coeffs.len() > 1 && self.coeffs[self.coeffs.len() - 1].is_zero() {
            self.coeffs.pop();
        }
    }
}

impl<K: Coefficient + fmt::Display> fmt::Display for Polynomial<K> {
    /// Terms highest degree first, zero terms omitted, `0` for the zero
    /// polynomial.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (power, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            match power {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}x")?,
                _ => write!(f, "{c}x{}", superscript(power))?,
            }
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::GaloisField;
    use std::sync::Arc;

    fn qr_field() -> Arc<GaloisField> {
        GaloisField::new(0x11D, 256, 2).expect("primitive")
    }

    #[test]
    fn empty_coefficients_are_rejected() {
        let err = Polynomial::<f64>::new(vec![]);
        assert_eq!(err.unwrap_err(), AlgebraError::EmptyCoefficients);
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        let p = Polynomial::new(vec![1.0, 2.0, 0.0, 0.0]).unwrap();
        assert_eq!(p.degree(), 1);
        assert_eq!(p.coefficients(), &[1.0, 2.0]);
    }

    #[test]
    fn zero_polynomial_keeps_one_coefficient() {
        let p = Polynomial::new(vec![0.0, 0.0, 0.0]).unwrap();
        assert!(p.is_zero());
        assert_eq!(p.degree(), 0);
        assert_eq!(p.coefficients().len(), 1);
    }

    #[test]
    fn adding_zero_is_identity() {
        let p = Polynomial::new(vec![3.0, 0.0, 5.0]).unwrap();
        let zero = Polynomial::new(vec![0.0]).unwrap();
        assert_eq!(p.add(&zero).unwrap().coefficients(), p.coefficients());
    }

    #[test]
    fn real_subtraction_cancels() {
        let p = Polynomial::new(vec![1.0, 2.0]).unwrap();
        let diff = p.sub(&p).unwrap();
        assert!(diff.is_zero());
    }

    #[test]
    fn shift_prepends_zeros() {
        let p = Polynomial::new(vec![1.0, 2.0]).unwrap();
        let shifted = p.shift(2);
        assert_eq!(shifted.coefficients(), &[0.0, 0.0, 1.0, 2.0]);

        let zero = Polynomial::new(vec![0.0]).unwrap();
        assert!(zero.shift(3).is_zero());
    }

    #[test]
    fn real_division_is_exact_for_exact_inputs() {
        // (x^2 + 2x + 1) / (x + 1) = (x + 1), remainder 0
        let dividend = Polynomial::new(vec![1.0, 2.0, 1.0]).unwrap();
        let divisor = Polynomial::new(vec![1.0, 1.0]).unwrap();
        let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();
        assert_eq!(quotient.coefficients(), &[1.0, 1.0]);
        assert!(remainder.is_zero());
    }

    #[test]
    fn real_division_trims_rounding_dust() {
        // (x^2 - 1) / (3x + 3) leaves fractional terms; cancelled leading
        // coefficients must not survive as near-zero dust.
        let dividend = Polynomial::new(vec![-1.0, 0.0, 1.0]).unwrap();
        let divisor = Polynomial::new(vec![3.0, 3.0]).unwrap();
        let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();
        assert_eq!(quotient.degree(), 1);
        assert!((quotient.coefficients()[1] - 1.0 / 3.0).abs() < 1e-9);
        assert!(remainder.is_zero());
    }

    #[test]
    fn divisor_larger_than_dividend_is_rejected() {
        let small = Polynomial::new(vec![1.0, 1.0]).unwrap();
        let large = Polynomial::new(vec![1.0, 0.0, 1.0]).unwrap();
        assert_eq!(
            small.div_rem(&large).unwrap_err(),
            AlgebraError::DivisorTooLarge {
                divisor: 2,
                dividend: 1
            }
        );
    }

    #[test]
    fn division_by_the_zero_polynomial_is_rejected() {
        let p = Polynomial::new(vec![1.0, 1.0]).unwrap();
        let zero = Polynomial::new(vec![0.0]).unwrap();
        assert_eq!(p.div_rem(&zero).unwrap_err(), AlgebraError::DivisionByZero);
    }

    #[test]
    fn field_addition_is_coefficientwise_xor() {
        let field = qr_field();
        let p = Polynomial::new(vec![field.element(0x25), field.element(0x18)]).unwrap();
        let q = Polynomial::new(vec![field.element(0x01), field.element(0x18)]).unwrap();
        let sum = p.add(&q).unwrap();
        assert_eq!(sum.coefficients()[0].value(), 0x24);
        // Matching x terms annihilate, so the sum trims down to degree 0.
        assert_eq!(sum.degree(), 0);
    }

    #[test]
    fn field_round_trip_multiply_divide() {
        let field = qr_field();
        let p = Polynomial::new(vec![field.element(7), field.element(3), field.element(1)])
            .unwrap();
        let q = Polynomial::new(vec![field.element(5), field.element(1)]).unwrap();
        let product = p.mul(&q).unwrap();
        let (quotient, remainder) = product.div_rem(&q).unwrap();
        assert_eq!(quotient, p);
        assert!(remainder.is_zero());
    }

    #[test]
    fn horner_evaluation() {
        // x^2 + 2x + 3 at x = 2
        let p = Polynomial::new(vec![3.0, 2.0, 1.0]).unwrap();
        let value = p.eval(&2.0).unwrap();
        assert!((value - 11.0).abs() < 1e-12);
    }

    #[test]
    fn display_formats_terms_highest_first() {
        let p = Polynomial::new(vec![3.0, 0.0, 2.0]).unwrap();
        assert_eq!(p.to_string(), "2x² + 3");
        let zero = Polynomial::new(vec![0.0]).unwrap();
        assert_eq!(zero.to_string(), "0");
    }
}
