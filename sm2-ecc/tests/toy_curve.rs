//! Group law checks on `y² = x³ + x + 1` over `F₂₃`.
//!
//! The curve has 28 points. `G = (3, 10)` generates the whole group, so the
//! multiples below can be checked by hand.

use sm2_ecc::{AffinePoint, BigUint, CurveParams, Ecc, MulAlgorithm, Point, WindowWidth};

/// `[k]G` for `k = 1..=14`.
const MULTIPLES: [(u32, u32); 14] = [
    (3, 10),
    (7, 12),
    (19, 5),
    (17, 3),
    (9, 16),
    (12, 4),
    (11, 3),
    (13, 16),
    (0, 1),
    (6, 4),
    (18, 20),
    (5, 4),
    (1, 7),
    (4, 0),
];

fn toy() -> Ecc {
    let params = CurveParams::new(
        23u32.into(),
        1u32.into(),
        1u32.into(),
        28u32.into(),
        AffinePoint::new(3u32.into(), 10u32.into()),
        None,
    );
    Ecc::new(params).unwrap()
}

fn pt(x: u32, y: u32) -> Point {
    Point::affine(x.into(), y.into())
}

fn all_points(ecc: &Ecc) -> Vec<Point> {
    let g = ecc.generator();
    (1..28u32)
        .map(|k| ecc.multiply(&BigUint::from(k), &g))
        .collect()
}

#[test]
fn double_generator_on_both_paths() {
    let ecc = toy();
    let g = ecc.generator();
    let two = BigUint::from(2u32);

    assert_eq!(ecc.multiply(&two, &g), pt(7, 12));
    assert_eq!(ecc.jacobian_multiply(&two, &g), pt(7, 12));
    assert_eq!(ecc.double(&g), pt(7, 12));
    assert_eq!(ecc.add(&g, &g), ecc.double(&g));
}

#[test]
fn known_multiples() {
    let ecc = toy();
    let g = ecc.generator();

    for (k, &(x, y)) in (1u32..).zip(MULTIPLES.iter()) {
        let k = BigUint::from(k);
        assert_eq!(ecc.multiply(&k, &g), pt(x, y), "k = {k}");
        assert_eq!(ecc.jacobian_multiply(&k, &g), pt(x, y), "k = {k}");
    }

    assert_eq!(ecc.multiply(&BigUint::from(23u32), &g), pt(9, 7));
    assert_eq!(ecc.multiply(&BigUint::from(27u32), &g), pt(3, 13));
}

#[test]
fn identity_laws() {
    let ecc = toy();
    let zero = BigUint::from(0u32);
    let one = BigUint::from(1u32);

    for p in all_points(&ecc) {
        assert_eq!(ecc.multiply(&zero, &p), Point::Infinity);
        assert_eq!(ecc.multiply(&one, &p), p);
        assert_eq!(ecc.add(&p, &Point::Infinity), p);
        assert_eq!(ecc.add(&Point::Infinity, &p), p);
        assert_eq!(ecc.to_affine(&ecc.jacobian_add(&p, &Point::Infinity)), p);
    }

    assert_eq!(ecc.add(&Point::Infinity, &Point::Infinity), Point::Infinity);
}

#[test]
fn closure_and_doubling() {
    let ecc = toy();
    let points = all_points(&ecc);

    for p in &points {
        assert!(ecc.on_curve(p));
        assert_eq!(ecc.add(p, p), ecc.double(p));
        assert_eq!(ecc.to_affine(&ecc.jacobian_double(p)), ecc.double(p));

        for q in &points {
            let sum = ecc.add(p, q);
            assert!(ecc.is_infinity(&sum) || ecc.on_curve(&sum));
            assert_eq!(ecc.to_affine(&ecc.jacobian_add(p, q)), sum);
            assert_eq!(ecc.add(q, p), sum);
        }
    }
}

#[test]
fn negation() {
    let ecc = toy();
    for p in all_points(&ecc) {
        let neg = ecc.minus(&p);
        assert!(ecc.on_curve(&neg));
        assert_eq!(ecc.add(&p, &neg), Point::Infinity);
        assert_eq!(ecc.jacobian_add(&p, &neg), Point::Infinity);
    }

    // (4, 0) is its own negative
    assert_eq!(ecc.minus(&pt(4, 0)), pt(4, 0));
    assert_eq!(ecc.double(&pt(4, 0)), Point::Infinity);
}

#[test]
fn order_of_generator() {
    let ecc = toy();
    let g = ecc.generator();
    let n = ecc.order().clone();

    assert_eq!(ecc.multiply(&n, &g), Point::Infinity);
    assert_eq!(ecc.jacobian_multiply(&n, &g), Point::Infinity);
    assert_eq!(ecc.multiply(&(&n + 1u32), &g), g);
}

#[test]
fn round_trip_conversion() {
    let ecc = toy();
    let g = ecc.generator();

    let mut jacobian = ecc.jacobian_double(&g);
    for _ in 0..25 {
        let affine = ecc.to_affine(&jacobian);
        assert_eq!(ecc.on_curve(&jacobian), ecc.on_curve(&affine));
        jacobian = ecc.jacobian_add(&jacobian, &g);
    }
}

#[test]
fn every_algorithm_reaches_every_multiple() {
    let ecc = toy();
    let g = ecc.generator();
    let points = all_points(&ecc);

    let algorithms = [
        MulAlgorithm::Binary,
        MulAlgorithm::AddSubtract,
        MulAlgorithm::SlidingWindow(WindowWidth::new(2).unwrap()),
        MulAlgorithm::SlidingWindow(WindowWidth::default()),
    ];

    for algorithm in algorithms {
        let ecc = ecc.clone().with_algorithm(algorithm);
        for (k, expected) in (1u32..).zip(&points) {
            let actual = ecc.jacobian_multiply(&BigUint::from(k), &g);
            assert_eq!(&actual, expected, "k = {k}, {algorithm:?}");
        }
    }
}
