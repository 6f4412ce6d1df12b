use std::{fmt, ops::Neg, sync::Arc};

use ecmsm_algebra::FieldElement;
use num_bigint::{BigInt, BigUint};
use num_traits::Signed;

use crate::{EccError, EllipticCurve};

/// Affine point on a short Weierstrass curve.
///
/// The pair `(0, 0)` is reserved as the identity (point at infinity) and is accepted whether or
/// not it satisfies the curve equation. All other points are checked on construction, including
/// every point produced by the group law.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: FieldElement,
    y: FieldElement,
    curve: Arc<EllipticCurve>,
}

impl Point {
    pub fn new(
        x: impl Into<BigUint>,
        y: impl Into<BigUint>,
        curve: Arc<EllipticCurve>,
    ) -> Result<Self, EccError> {
        let field = curve.field().clone();
        Self::from_coordinates(
            FieldElement::new(x, field.clone()),
            FieldElement::new(y, field),
            curve,
        )
    }

    pub fn identity(curve: Arc<EllipticCurve>) -> Self {
        let field = curve.field();
        Self {
            x: field.zero(),
            y: field.zero(),
            curve,
        }
    }

    /// Coordinates must already live in `curve`'s field.
    fn from_coordinates(
        x: FieldElement,
        y: FieldElement,
        curve: Arc<EllipticCurve>,
    ) -> Result<Self, EccError> {
        let point = Self { x, y, curve };
        if !point.is_identity() && !point.curve.is_contained(&point) {
            return Err(EccError::NotOnCurve {
                x: point.x.value().clone(),
                y: point.y.value().clone(),
            });
        }
        Ok(point)
    }

    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    pub fn curve(&self) -> &Arc<EllipticCurve> {
        &self.curve
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Affine group law.
    pub fn add(&self, other: &Self) -> Result<Self, EccError> {
        if !Arc::ptr_eq(&self.curve, &other.curve) && self.curve != other.curve {
            return Err(EccError::CurveMismatch);
        }
        if self.is_identity() {
            return Ok(other.clone());
        }
        if other.is_identity() {
            return Ok(self.clone());
        }
        // P + (-P) = O
        if self.x == other.x && self.y == -&other.y {
            return Ok(Self::identity(self.curve.clone()));
        }

        let (x1, y1) = (&self.x, &self.y);
        let (x2, y2) = (&other.x, &other.y);
        let slope = if x1 == x2 && y1 == y2 {
            if y1.is_zero() {
                return Ok(Self::identity(self.curve.clone()));
            }
            // tangent: (3x^2 + a) / 2y
            x1.square()?
                .scalar_mul(3)
                .add(self.curve.a())?
                .div(&y1.scalar_mul(2))?
        } else {
            // chord: (y2 - y1) / (x2 - x1)
            y2.sub(y1)?.div(&x2.sub(x1)?)?
        };
        // x1 == x2 when doubling, so this is s^2 - 2x there
        let x3 = slope.square()?.sub(x1)?.sub(x2)?;
        let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
        Self::from_coordinates(x3, y3, self.curve.clone())
    }

    pub fn double(&self) -> Result<Self, EccError> {
        self.add(self)
    }

    /// Double-and-add. A negative `n` multiplies the negated point by `-n`.
    pub fn scalar_mul(&self, n: impl Into<BigInt>) -> Result<Self, EccError> {
        let n = n.into();
        if n.is_negative() {
            return (-self).scalar_mul(-n);
        }
        let (_, n) = n.into_parts();

        let mut result = Self::identity(self.curve.clone());
        let mut base = self.clone();
        let bits = n.bits();
        for i in 0..bits {
            if n.bit(i) {
                result = result.add(&base)?;
            }
            if i + 1 < bits {
                base = base.double()?;
            }
        }
        Ok(result)
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point {
            x: self.x.clone(),
            y: -&self.y,
            curve: self.curve.clone(),
        }
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        -&self
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            write!(f, "identity")
        } else {
            write!(f, "({}, {})", self.x.value(), self.y.value())
        }
    }
}
