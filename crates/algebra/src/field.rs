use std::{fmt, mem, ops::Neg, sync::Arc};

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::FieldError;

/// A prime field `Z/pZ`, identified by its modulus.
///
/// Primality of the modulus is the caller's responsibility.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    pub fn new(modulus: impl Into<BigUint>) -> Self {
        let modulus = modulus.into();
        debug_assert!(modulus > BigUint::one(), "modulus must exceed 1, got {modulus}");
        Self { modulus }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Whether `element`'s value lies in `[0, modulus)`.
    pub fn is_contained(&self, element: &FieldElement) -> bool {
        element.value < self.modulus
    }

    /// Element congruent to `value`, wrapping negative values.
    pub fn element(self: &Arc<Self>, value: impl Into<BigInt>) -> FieldElement {
        FieldElement::reduced(value, self.clone())
    }

    pub fn zero(self: &Arc<Self>) -> FieldElement {
        FieldElement::new(BigUint::zero(), self.clone())
    }

    pub fn one(self: &Arc<Self>) -> FieldElement {
        FieldElement::reduced(1, self.clone())
    }
}

/// An immutable residue attached to the field it lives in.
///
/// [`FieldElement::new`] keeps the value as given, so an element can sit outside its field;
/// the binary operations reject such operands with [`FieldError::NotInField`]. Every element
/// produced by an operation is reduced into `[0, modulus)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: BigUint,
    field: Arc<PrimeField>,
}

impl FieldElement {
    pub fn new(value: impl Into<BigUint>, field: Arc<PrimeField>) -> Self {
        Self {
            value: value.into(),
            field,
        }
    }

    /// Element congruent to `value` modulo the field's modulus.
    pub fn reduced(value: impl Into<BigInt>, field: Arc<PrimeField>) -> Self {
        let modulus = BigInt::from(field.modulus().clone());
        // mod_floor takes the sign of the (positive) modulus
        let (_, value) = value.into().mod_floor(&modulus).into_parts();
        Self { value, field }
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn field(&self) -> &Arc<PrimeField> {
        &self.field
    }

    pub fn modulus(&self) -> &BigUint {
        self.field.modulus()
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    pub fn add(&self, other: &Self) -> Result<Self, FieldError> {
        self.check_operands(other)?;
        Ok(self.with_value((&self.value + &other.value) % self.modulus()))
    }

    pub fn sub(&self, other: &Self) -> Result<Self, FieldError> {
        self.check_operands(other)?;
        let value = if self.value >= other.value {
            &self.value - &other.value
        } else {
            self.modulus() - (&other.value - &self.value)
        };
        Ok(self.with_value(value))
    }

    pub fn mul(&self, other: &Self) -> Result<Self, FieldError> {
        self.check_operands(other)?;
        Ok(self.with_value((&self.value * &other.value) % self.modulus()))
    }

    /// `self * other^-1`.
    pub fn div(&self, other: &Self) -> Result<Self, FieldError> {
        self.mul(&other.inv()?)
    }

    pub fn square(&self) -> Result<Self, FieldError> {
        self.mul(self)
    }

    /// Multiplies by an arbitrary integer `n`, which may be negative.
    pub fn scalar_mul(&self, n: impl Into<BigInt>) -> Self {
        Self::reduced(BigInt::from(self.value.clone()) * n.into(), self.field.clone())
    }

    /// Square-and-multiply exponentiation. A negative exponent raises the inverse to `-n`.
    pub fn pow(&self, exponent: impl Into<BigInt>) -> Result<Self, FieldError> {
        let exponent = exponent.into();
        let mut base = if exponent.is_negative() {
            self.inv()?
        } else {
            self.ensure_contained()?;
            self.clone()
        };
        let mut e = exponent.magnitude().clone();
        let mut result = self.field.one();
        while !e.is_zero() {
            if e.is_odd() {
                result = result.mul(&base)?;
            }
            e >>= 1u32;
            if !e.is_zero() {
                base = base.square()?;
            }
        }
        Ok(result)
    }

    /// Multiplicative inverse via the iterative extended Euclidean algorithm.
    ///
    /// Maintains `r_i = s_i * value + t_i * modulus` for consecutive remainders and stops once
    /// the next remainder would be zero, at which point `r_cur` is the gcd and `s_cur` the
    /// inverse (for a prime modulus).
    pub fn inv(&self) -> Result<Self, FieldError> {
        self.ensure_contained()?;
        if self.is_zero() {
            return Err(FieldError::InverseOfZero {
                modulus: self.modulus().clone(),
            });
        }

        let value = BigInt::from(self.value.clone());
        let modulus = BigInt::from(self.modulus().clone());
        let (mut r_prev, mut r_cur) = (modulus.clone(), value.clone());
        let (mut s_prev, mut s_cur) = (BigInt::zero(), BigInt::one());
        let (mut t_prev, mut t_cur) = (BigInt::one(), BigInt::zero());
        loop {
            let (q, r_next) = r_prev.div_rem(&r_cur);
            if r_next.is_zero() {
                break;
            }
            let s_next = &s_prev - &q * &s_cur;
            let t_next = &t_prev - &q * &t_cur;
            r_prev = mem::replace(&mut r_cur, r_next);
            s_prev = mem::replace(&mut s_cur, s_next);
            t_prev = mem::replace(&mut t_cur, t_next);
        }
        debug_assert_eq!(&s_cur * &value + &t_cur * &modulus, r_cur);

        if !r_cur.is_one() {
            return Err(FieldError::NotInvertible {
                value: self.value.clone(),
                modulus: self.modulus().clone(),
                gcd: r_cur.into_parts().1,
            });
        }
        Ok(Self::reduced(s_cur, self.field.clone()))
    }

    fn with_value(&self, value: BigUint) -> Self {
        Self {
            value,
            field: self.field.clone(),
        }
    }

    fn ensure_contained(&self) -> Result<(), FieldError> {
        if self.field.is_contained(self) {
            Ok(())
        } else {
            Err(FieldError::NotInField {
                value: self.value.clone(),
                modulus: self.modulus().clone(),
            })
        }
    }

    fn check_operands(&self, other: &Self) -> Result<(), FieldError> {
        if !Arc::ptr_eq(&self.field, &other.field) && self.field != other.field {
            return Err(FieldError::FieldMismatch {
                lhs: self.modulus().clone(),
                rhs: other.modulus().clone(),
            });
        }
        self.ensure_contained()?;
        other.ensure_contained()
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::reduced(-BigInt::from(self.value.clone()), self.field.clone())
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}

/// Renders `0x` followed by the value in lowercase hex, zero-padded to 64 digits.
impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:0>64}", self.value.to_str_radix(16))
    }
}
