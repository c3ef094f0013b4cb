use tracing::trace;

/// Greatest common divisor of `a` and `b` by the Euclidean recurrence.
///
/// `gcd(a, 0)` is `a`, otherwise `gcd(b, a % b)`. The remainder takes the sign
/// of the dividend and the result is not normalized, so negative inputs may
/// produce a negative divisor: `gcd(4, -6) == -2` while `gcd(-4, 6) == 2`.
pub fn gcd(a: i32, b: i32) -> i32 {
    trace!(a, b, "gcd step");
    if b == 0 {
        a
    } else {
        gcd(b, a.wrapping_rem(b))
    }
}

/// Loop form of [`gcd`]. Returns the same value for every input pair.
pub fn gcd_iterative(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        let r = a.wrapping_rem(b);
        a = b;
        b = r;
    }
    a
}

/// Every argument pair the recurrence visits, from `(a, b)` down to the pair
/// whose second element is zero. The first element of the last pair is the gcd.
pub fn gcd_steps(mut a: i32, mut b: i32) -> Vec<(i32, i32)> {
    let mut steps = vec![(a, b)];
    while b != 0 {
        let r = a.wrapping_rem(b);
        a = b;
        b = r;
        steps.push((a, b));
    }
    steps
}
