use std::sync::Arc;

use ecmsm_algebra::FieldError;
use ecmsm_sdk::utils::create_seeded_rng;
use num_bigint::{BigInt, BigUint};
use rand::seq::SliceRandom;
use test_case::test_case;

use crate::{
    curves::bn254::{bn254_curve, bn254_generator, bn254_prime},
    EccError, EllipticCurve, Point,
};

const BN254_PRIME: &str =
    "21888242871839275222246405745257275088696311157297823662689037894645226208583";
const BN254_ORDER: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

pub(crate) fn curve(a: u32, b: u32, modulus: u32) -> Arc<EllipticCurve> {
    Arc::new(EllipticCurve::new(a, b, modulus).unwrap())
}

/// `y^2 = x^3 + 2x + 3` over `F_97`; `(0, 0)` is not on it.
pub(crate) fn small_curve() -> Arc<EllipticCurve> {
    curve(2, 3, 97)
}

/// Every affine point of `curve`, by exhaustive search. Only for tiny moduli.
pub(crate) fn all_points(curve: &Arc<EllipticCurve>) -> Vec<Point> {
    let p = u32::try_from(curve.modulus()).unwrap();
    let mut points = vec![];
    for x in 0..p {
        for y in 0..p {
            if (x, y) == (0, 0) {
                continue;
            }
            if let Ok(point) = curve.point(x, y) {
                points.push(point);
            }
        }
    }
    points
}

fn repeated_add(point: &Point, n: usize) -> Point {
    let mut acc = point.curve().identity();
    for _ in 0..n {
        acc = acc.add(point).unwrap();
    }
    acc
}

#[test]
fn test_curve_constructor() {
    assert!(EllipticCurve::new(2u32, 3u32, 5u32).is_ok());
    assert_eq!(
        EllipticCurve::new(6u32, 3u32, 5u32),
        Err(EccError::ParameterNotInField {
            a: BigUint::from(6u32),
            b: BigUint::from(3u32),
            modulus: BigUint::from(5u32),
        })
    );
    assert!(matches!(
        EllipticCurve::new(2u32, 5u32, 5u32),
        Err(EccError::ParameterNotInField { .. })
    ));
}

#[test]
fn test_curve_is_contained() {
    let curve11 = curve(6, 4, 11);
    let point = curve11.point(3u32, 7u32).unwrap();
    let curve7 = curve(2, 3, 7);
    let another_point = curve7.point(3u32, 6u32).unwrap();

    assert!(curve11.is_contained(&point));
    assert!(curve7.is_contained(&another_point));
    // 7 is not an element of F_7
    assert!(!curve7.is_contained(&point));
}

#[test]
fn test_point_not_on_curve() {
    let curve7 = curve(2, 3, 7);
    assert_eq!(
        curve7.point(1u32, 1u32),
        Err(EccError::NotOnCurve {
            x: BigUint::from(1u32),
            y: BigUint::from(1u32),
        })
    );
    assert!(matches!(
        curve7.point(3u32, 13u32),
        Err(EccError::NotOnCurve { .. })
    ));
}

#[test]
fn test_identity_sentinel() {
    let curve7 = curve(2, 3, 7);
    // (0, 0) does not satisfy y^2 = x^3 + 2x + 3 but still denotes the identity
    let identity = curve7.point(0u32, 0u32).unwrap();
    assert!(identity.is_identity());
    assert!(!curve7.is_contained(&identity));
    assert_eq!(identity, curve7.identity());
    assert_eq!(-&identity, identity);
    assert_eq!(identity.to_string(), "identity");
}

#[test]
fn test_add_scenarios_mod_7() {
    let curve7 = curve(2, 3, 7);
    let p = curve7.point(3u32, 6u32).unwrap();

    assert_eq!(p.add(&curve7.identity()).unwrap(), p);
    assert_eq!(curve7.identity().add(&p).unwrap(), p);
    // 1 = -6 mod 7
    assert!(p.add(&curve7.point(3u32, 1u32).unwrap()).unwrap().is_identity());
    assert_eq!(
        p.add(&curve7.point(6u32, 0u32).unwrap()).unwrap(),
        curve7.point(2u32, 6u32).unwrap()
    );
}

#[test]
fn test_double_two_torsion() {
    let curve7 = curve(2, 3, 7);
    let t = curve7.point(6u32, 0u32).unwrap();
    assert!(t.double().unwrap().is_identity());
    assert!(t.scalar_mul(2).unwrap().is_identity());
    assert_eq!(t.scalar_mul(3).unwrap(), t);
}

#[test]
fn test_double_matches_tangent() {
    // On y^2 = x^3 + 2x + 3 mod 7: 2 * (3, 6): s = (27 + 2) / 12 = 1 / 5 = 3,
    // x = 9 - 6 = 3, y = 3 * (3 - 3) - 6 = 1.
    let curve7 = curve(2, 3, 7);
    let p = curve7.point(3u32, 6u32).unwrap();
    assert_eq!(p.double().unwrap(), curve7.point(3u32, 1u32).unwrap());
}

#[test]
fn test_curve_mismatch() {
    let p = curve(2, 3, 7).point(3u32, 6u32).unwrap();
    let q = curve(6, 4, 11).point(3u32, 7u32).unwrap();
    assert_eq!(p.add(&q), Err(EccError::CurveMismatch));
    assert_eq!(q.add(&p), Err(EccError::CurveMismatch));
    // checked before identity short-circuits
    assert_eq!(p.curve().identity().add(&q), Err(EccError::CurveMismatch));
}

#[test]
fn test_structural_curve_equality() {
    let p = curve(2, 3, 7).point(3u32, 6u32).unwrap();
    let q = curve(2, 3, 7).point(6u32, 0u32).unwrap();
    assert_eq!(p.add(&q).unwrap(), curve(2, 3, 7).point(2u32, 6u32).unwrap());
}

#[test]
fn test_group_axioms() {
    let curve = small_curve();
    let mut points = all_points(&curve);
    assert!(points.iter().all(|p| curve.is_contained(p)));

    let mut rng = create_seeded_rng();
    points.shuffle(&mut rng);
    let sample = &points[..12];
    let identity = curve.identity();

    for p in sample {
        assert_eq!(&p.add(&identity).unwrap(), p);
        assert_eq!(&identity.add(p).unwrap(), p);
        assert!(p.add(&-p).unwrap().is_identity());
        for q in sample {
            let pq = p.add(q).unwrap();
            assert_eq!(pq, q.add(p).unwrap());
            assert!(pq.is_identity() || curve.is_contained(&pq));
            for r in sample {
                assert_eq!(
                    pq.add(r).unwrap(),
                    p.add(&q.add(r).unwrap()).unwrap()
                );
            }
        }
    }
}

#[test]
fn test_scalar_mul_small() {
    let curve = small_curve();
    let points = all_points(&curve);
    for p in points.iter().step_by(17) {
        assert!(p.scalar_mul(0).unwrap().is_identity());
        assert_eq!(&p.scalar_mul(1).unwrap(), p);
        for n in 2..40 {
            let expected = repeated_add(p, n);
            assert_eq!(p.scalar_mul(n as i64).unwrap(), expected);
            assert_eq!(p.scalar_mul(-(n as i64)).unwrap(), (-p).scalar_mul(n as i64).unwrap());
            assert_eq!(p.scalar_mul(-(n as i64)).unwrap(), -expected);
        }
    }
}

#[test_case(3, 5)]
#[test_case(17, 0)]
#[test_case(100, 23)]
fn test_scalar_mul_distributes(m: i64, n: i64) {
    let curve = small_curve();
    let p = all_points(&curve).swap_remove(5);
    assert_eq!(
        p.scalar_mul(m + n).unwrap(),
        p.scalar_mul(m).unwrap().add(&p.scalar_mul(n).unwrap()).unwrap()
    );
}

#[test]
fn test_point_display() {
    let p = curve(2, 3, 7).point(3u32, 6u32).unwrap();
    assert_eq!(p.to_string(), "(3, 6)");
    assert_eq!(p.curve().to_string(), "y^2 = x^3 + 2x + 3 (mod 7)");
}

#[test]
fn test_field_errors_propagate() {
    // Z/4 is not a field: doubling (1, 1) on y^2 = x^3 needs 1 / 2
    let ring_curve = curve(0, 0, 4);
    let p = ring_curve.point(1u32, 1u32).unwrap();
    assert_eq!(
        p.double(),
        Err(EccError::Field(FieldError::NotInvertible {
            value: BigUint::from(2u32),
            modulus: BigUint::from(4u32),
            gcd: BigUint::from(2u32),
        }))
    );
}

#[test]
fn test_bn254_constants() {
    assert_eq!(
        bn254_prime(),
        BigUint::parse_bytes(BN254_PRIME.as_bytes(), 10).unwrap()
    );
    let curve = bn254_curve().unwrap();
    let g = bn254_generator(&curve).unwrap();
    assert!(curve.is_contained(&g));
}

#[test]
fn test_bn254_group_order() {
    let curve = bn254_curve().unwrap();
    let g = bn254_generator(&curve).unwrap();
    let order = BigInt::parse_bytes(BN254_ORDER.as_bytes(), 10).unwrap();
    assert!(g.scalar_mul(order.clone()).unwrap().is_identity());
    assert_eq!(g.scalar_mul(order.clone() + 1).unwrap(), g);
    assert_eq!(g.scalar_mul(order - 1).unwrap(), -&g);
}

#[test]
fn test_bn254_scalar_mul_linear() {
    let curve = bn254_curve().unwrap();
    let g = bn254_generator(&curve).unwrap();
    let a = BigInt::parse_bytes(b"123456789012345678901234567890", 10).unwrap();
    let b = BigInt::parse_bytes(b"987654321098765432109876543210", 10).unwrap();
    let lhs = g.scalar_mul(&a + &b).unwrap();
    let rhs = g
        .scalar_mul(a.clone())
        .unwrap()
        .add(&g.scalar_mul(b).unwrap())
        .unwrap();
    assert_eq!(lhs, rhs);
    assert!(curve.is_contained(&lhs));
    assert_eq!(g.scalar_mul(-a.clone()).unwrap(), -g.scalar_mul(a).unwrap());
}
