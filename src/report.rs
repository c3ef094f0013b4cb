use std::fmt;

use crate::engine;

/// The inputs of one run together with their gcd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GcdReport {
    pub a: i32,
    pub b: i32,
    pub gcd: i32,
}

impl GcdReport {
    pub fn compute(a: i32, b: i32) -> Self {
        Self { a, b, gcd: engine::gcd(a, b) }
    }
}

impl fmt::Display for GcdReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GCD of {} and {} is {}", self.a, self.b, self.gcd)
    }
}
