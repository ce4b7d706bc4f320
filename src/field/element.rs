//! Field element value type

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::GaloisField;
use crate::util::superscript;
use crate::AlgebraError;

/// Immutable element of a [`GaloisField`].
///
/// Carries a shared handle to its owning field; binary operations validate
/// that both operands belong to the same field and fail with
/// [`AlgebraError::FieldMismatch`] otherwise. Equality and ordering compare
/// the raw value only.
#[derive(Debug, Clone)]
pub struct FieldElement {
    value: u16,
    field: Arc<GaloisField>,
}

impl FieldElement {
    pub(crate) fn new(value: u16, field: Arc<GaloisField>) -> Self {
        Self { value, field }
    }

    /// Raw element value in `[0, field.size())`.
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Handle to the owning field.
    pub fn field(&self) -> &Arc<GaloisField> {
        &self.field
    }

    /// The additive identity of this element's field.
    pub fn zero_like(&self) -> Self {
        Self::new(0, Arc::clone(&self.field))
    }

    /// The multiplicative identity of this element's field.
    pub fn one_like(&self) -> Self {
        Self::new(1, Arc::clone(&self.field))
    }

    /// Whether this is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Field addition.
    pub fn add(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_field(other)?;
        Ok(Self::new(
            self.field.add(self.value, other.value),
            Arc::clone(&self.field),
        ))
    }

    /// Subtraction coincides with addition in characteristic 2.
    pub fn sub(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.add(other)
    }

    /// Field multiplication.
    pub fn mul(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_field(other)?;
        Ok(Self::new(
            self.field.mul(self.value, other.value),
            Arc::clone(&self.field),
        ))
    }

    /// Multiplicative inverse; fails on zero.
    pub fn inv(&self) -> Result<Self, AlgebraError> {
        Ok(Self::new(self.field.inv(self.value)?, Arc::clone(&self.field)))
    }

    /// Field division as multiplication by the inverse.
    pub fn div(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_field(other)?;
        let inv = self.field.inv(other.value)?;
        Ok(Self::new(
            self.field.mul(self.value, inv),
            Arc::clone(&self.field),
        ))
    }

    fn check_field(&self, other: &Self) -> Result<(), AlgebraError> {
        if self.field.same_field(&other.field) {
            Ok(())
        } else {
            Err(AlgebraError::FieldMismatch)
        }
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for FieldElement {}

impl PartialOrd for FieldElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldElement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for FieldElement {
    /// Nonzero elements render as powers of the generator (`α²⁵`), the
    /// additive identity as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value == 0 {
            return write!(f, "0");
        }
        write!(
            f,
            "α{}",
            superscript(self.field.log_value(self.value) as usize)
        )
    }
}
