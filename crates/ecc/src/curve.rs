use std::{fmt, sync::Arc};

use ecmsm_algebra::{FieldElement, FieldError, PrimeField};
use num_bigint::BigUint;

use crate::{EccError, Point};

/// Short Weierstrass curve `y^2 = x^3 + ax + b` over a prime field.
///
/// Equality is structural: two curves built from the same `(a, b, modulus)` are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EllipticCurve {
    a: FieldElement,
    b: FieldElement,
    field: Arc<PrimeField>,
}

impl EllipticCurve {
    pub fn new(
        a: impl Into<BigUint>,
        b: impl Into<BigUint>,
        modulus: impl Into<BigUint>,
    ) -> Result<Self, EccError> {
        let field = Arc::new(PrimeField::new(modulus));
        let a = FieldElement::new(a, field.clone());
        let b = FieldElement::new(b, field.clone());
        if !field.is_contained(&a) || !field.is_contained(&b) {
            return Err(EccError::ParameterNotInField {
                a: a.value().clone(),
                b: b.value().clone(),
                modulus: field.modulus().clone(),
            });
        }
        Ok(Self { a, b, field })
    }

    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    pub fn field(&self) -> &Arc<PrimeField> {
        &self.field
    }

    pub fn modulus(&self) -> &BigUint {
        self.field.modulus()
    }

    /// Whether `point`'s coordinates satisfy this curve's equation.
    ///
    /// Coordinates outside the curve's field never satisfy it. The identity sentinel is not
    /// special-cased here.
    pub fn is_contained(&self, point: &Point) -> bool {
        matches!(
            self.satisfies_equation(point.x().value(), point.y().value()),
            Ok(true)
        )
    }

    pub fn identity(self: &Arc<Self>) -> Point {
        Point::identity(self.clone())
    }

    pub fn point(
        self: &Arc<Self>,
        x: impl Into<BigUint>,
        y: impl Into<BigUint>,
    ) -> Result<Point, EccError> {
        Point::new(x, y, self.clone())
    }

    pub(crate) fn satisfies_equation(&self, x: &BigUint, y: &BigUint) -> Result<bool, FieldError> {
        let x = FieldElement::new(x.clone(), self.field.clone());
        let y = FieldElement::new(y.clone(), self.field.clone());
        let lhs = y.square()?;
        let rhs = x.square()?.mul(&x)?.add(&self.a.mul(&x)?)?.add(&self.b)?;
        Ok(lhs == rhs)
    }
}

impl fmt::Display for EllipticCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y^2 = x^3 + {}x + {} (mod {})",
            self.a.value(),
            self.b.value(),
            self.modulus()
        )
    }
}
