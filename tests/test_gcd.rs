use euclid_gcd::{gcd, gcd_iterative, gcd_steps};

#[test]
fn test_known_pairs() {
    assert_eq!(gcd(48, 18), 6);
    assert_eq!(gcd(17, 5), 1);
    assert_eq!(gcd(0, 9), 9);
    assert_eq!(gcd(100, 100), 100);
    assert_eq!(gcd(18, 48), 6);
}

#[test]
fn test_zero_arguments() {
    assert_eq!(gcd(0, 0), 0);
    assert_eq!(gcd(12, 0), 12);
    assert_eq!(gcd(0, 12), 12);
}

#[test]
fn test_fibonacci_worst_case() {
    // Consecutive Fibonacci numbers are coprime and take the most steps.
    assert_eq!(gcd(1_836_311_903, 1_134_903_170), 1);
    assert_eq!(gcd_steps(1_836_311_903, 1_134_903_170).len(), 45);
}

#[test]
fn test_negative_inputs_keep_remainder_sign() {
    assert_eq!(gcd(-4, 6), 2);
    assert_eq!(gcd(4, -6), -2);
    assert_eq!(gcd(-12, 0), -12);
    assert_eq!(gcd(0, -12), -12);
    assert_eq!(gcd(-12, -18), -6);
}

#[test]
fn test_extreme_values_do_not_panic() {
    assert_eq!(gcd(i32::MIN, -1), -1);
    assert_eq!(gcd(i32::MIN, 0), i32::MIN);
    assert_eq!(gcd(i32::MAX, i32::MAX), i32::MAX);
    assert_eq!(gcd(i32::MIN, i32::MIN), i32::MIN);
}

#[test]
fn test_steps() {
    assert_eq!(gcd_steps(48, 18), vec![(48, 18), (18, 12), (12, 6), (6, 0)]);
    assert_eq!(gcd_steps(7, 0), vec![(7, 0)]);
    assert_eq!(gcd_steps(0, 7), vec![(0, 7), (7, 0)]);
}

#[test]
fn test_iterative_matches() {
    for &(a, b) in &[(48, 18), (0, 0), (-4, 6), (4, -6), (i32::MIN, -1), (270, 192)] {
        assert_eq!(gcd_iterative(a, b), gcd(a, b), "gcd({a}, {b})");
    }
}
