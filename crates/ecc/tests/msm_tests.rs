use std::sync::Arc;

use ecmsm_ecc::{
    algebra::{FieldElement, PrimeField},
    EllipticCurve, MsmError, MultiScalarMultiplication, Point,
};

/// Scalars and points arrive as plain integers, the way an external loader would supply them.
fn run_msm(
    (a, b, modulus): (u32, u32, u32),
    scalars: &[u32],
    points: &[(u32, u32)],
) -> Result<Point, MsmError> {
    let curve = Arc::new(EllipticCurve::new(a, b, modulus)?);
    let scalar_field = Arc::new(PrimeField::new(modulus));
    let scalars = scalars
        .iter()
        .map(|&s| FieldElement::new(s, scalar_field.clone()))
        .collect();
    let points = points
        .iter()
        .map(|&(x, y)| curve.point(x, y))
        .collect::<Result<Vec<_>, _>>()?;

    let mut msm = MultiScalarMultiplication::new(curve);
    msm.load_data(scalars, points)?;
    msm.calculate()
}

#[test]
fn test_msm_from_integer_descriptors() {
    // on y^2 = x^3 + 2x + 3 mod 7: (3, 6) + (6, 0) = (2, 6) and 2 * (6, 0) = O
    let result = run_msm((2, 3, 7), &[1, 3], &[(3, 6), (6, 0)]).unwrap();
    let curve = Arc::new(EllipticCurve::new(2u32, 3u32, 7u32).unwrap());
    assert_eq!(result, curve.point(2u32, 6u32).unwrap());
}

#[test]
fn test_msm_rejects_off_curve_input() {
    assert!(matches!(
        run_msm((2, 3, 7), &[1], &[(1, 1)]),
        Err(MsmError::Ecc(_))
    ));
}

#[test]
fn test_msm_rejects_mismatched_lengths() {
    assert!(matches!(
        run_msm((2, 3, 7), &[1, 2], &[(3, 6)]),
        Err(MsmError::DimensionMismatch { .. })
    ));
}
