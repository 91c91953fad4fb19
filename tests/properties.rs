/*
    Randomized checks of the numeric total order
*/

use std::cmp::Ordering;

use num_bigint::BigInt;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use total_cmp::*;

const SAMPLES: usize = 2000;

// Random bit patterns cover subnormals, NaNs and infinities,
// the rest keeps values in a range where they collide with integers.
fn random_float(rng: &mut ChaCha8Rng) -> f64 {
    match rng.gen_range(0..8) {
        0 => f64::from_bits(rng.gen()),
        1 => [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, -0.0][rng.gen_range(0..5)],
        2 => rng.gen_range(-4i32..=4) as f64 * 0.25,
        3 => (rng.gen_range(-1i64..=1) << 53) as f64 + rng.gen_range(-4i64..=4) as f64,
        _ => rng.gen_range(-1000i32..=1000) as f64,
    }
}

fn random_int(rng: &mut ChaCha8Rng) -> BigInt {
    match rng.gen_range(0..4) {
        0 => {
            let bits = rng.gen_range(0..1100usize);
            let n = BigInt::from(rng.gen::<u64>()) << bits;
            if rng.gen() {
                -n
            } else {
                n
            }
        }
        1 => BigInt::from((rng.gen_range(-1i64..=1) << 53) + rng.gen_range(-4i64..=4)),
        _ => BigInt::from(rng.gen_range(-1000i64..=1000)),
    }
}

fn random_numeric(rng: &mut ChaCha8Rng) -> Numeric {
    if rng.gen() {
        Numeric::Float(random_float(rng))
    } else {
        Numeric::Int(random_int(rng))
    }
}

fn to_rug(n: &BigInt) -> rug::Integer {
    n.to_string()
        .parse::<rug::Integer>()
        .expect("BigInt prints a valid integer")
}

#[test]
fn reflexive() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..SAMPLES {
        let a = random_numeric(&mut rng);
        assert_eq!(numeric(&a, &a), Ordering::Equal, "{} != {}", a, a);
        assert_eq!(numeric(&a, &a.clone()), Ordering::Equal, "{} != {}", a, a);
    }
}

#[test]
fn antisymmetric() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..SAMPLES {
        let a = random_numeric(&mut rng);
        let b = random_numeric(&mut rng);
        assert_eq!(
            numeric(&a, &b),
            numeric(&b, &a).reverse(),
            "asymmetric comparison of {} and {}",
            a,
            b
        );
    }
}

#[test]
fn transitive() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut values: Vec<Numeric> = (0..300).map(|_| random_numeric(&mut rng)).collect();
    values.sort_by(numeric);

    // a sorted list must be consistent for every pair, not only neighbours
    for (i, a) in values.iter().enumerate() {
        for b in &values[i + 1..] {
            assert_ne!(numeric(a, b), Ordering::Greater, "{} > {} after sorting", a, b);
        }
    }
}

#[test]
fn integral_floats_equal_ints() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for _ in 0..SAMPLES {
        let x = random_float(&mut rng);
        if !x.is_finite() || x.fract() != 0.0 {
            continue;
        }
        let n = Numeric::Int(format!("{:.0}", x).parse::<BigInt>().unwrap());
        let x = Numeric::Float(x);
        assert_eq!(numeric(&x, &n), Ordering::Equal, "{} != {}", x, n);
        assert_eq!(numeric(&n, &x), Ordering::Equal, "{} != {}", n, x);
    }
}

#[test]
fn nan_is_least() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let nan = Numeric::Float(f64::NAN);
    for _ in 0..SAMPLES {
        let a = random_numeric(&mut rng);
        let expected = if a.is_nan() { Ordering::Equal } else { Ordering::Less };
        assert_eq!(numeric(&nan, &a), expected, "NaN against {}", a);
        assert_eq!(numeric(&a, &nan), expected.reverse(), "{} against NaN", a);
    }
}

#[test]
fn infinities_are_extreme() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let inf = Numeric::Float(f64::INFINITY);
    let neg_inf = Numeric::Float(f64::NEG_INFINITY);
    for _ in 0..SAMPLES {
        let a = random_numeric(&mut rng);
        if a.is_nan() || a.is_infinity() {
            continue;
        }
        assert_eq!(numeric(&neg_inf, &a), Ordering::Less, "-inf against {}", a);
        assert_eq!(numeric(&inf, &a), Ordering::Greater, "inf against {}", a);
    }
}

#[test]
fn agrees_with_gmp() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let x = random_float(&mut rng);
        if x.is_nan() {
            continue;
        }
        let n = random_int(&mut rng);
        let expected = to_rug(&n)
            .partial_cmp(&x)
            .expect("only NaN is unordered")
            .reverse();

        let actual = numeric(&Numeric::Float(x), &Numeric::Int(n.clone()));
        assert_eq!(actual, expected, "{:e} against {}", x, n);
    }
}

#[test]
fn floats_agree_with_ieee() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    for _ in 0..SAMPLES {
        let x = random_float(&mut rng);
        let y = random_float(&mut rng);
        if let Some(expected) = x.partial_cmp(&y) {
            assert_eq!(numbers(&x, &y), expected, "{:e} against {:e}", x, y);
            assert_eq!(
                numeric(&Numeric::Float(x), &Numeric::Float(y)),
                expected,
                "{:e} against {:e}",
                x,
                y
            );
        }
    }
}

#[test]
fn tuples_match_manual_lexicographic() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let cmp = tuple((numeric, numeric, numeric));
    for _ in 0..SAMPLES {
        let a = (
            random_numeric(&mut rng),
            random_numeric(&mut rng),
            random_numeric(&mut rng),
        );
        let b = (
            random_numeric(&mut rng),
            random_numeric(&mut rng),
            random_numeric(&mut rng),
        );
        let expected = numeric(&a.0, &b.0)
            .then_with(|| numeric(&a.1, &b.1))
            .then_with(|| numeric(&a.2, &b.2));
        assert_eq!(cmp.compare(&a, &b), expected);
        assert_eq!(cmp.compare(&b, &a), expected.reverse());
    }
}
