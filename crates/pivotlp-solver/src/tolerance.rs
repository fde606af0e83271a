/// Epsilon-aware numeric relations.
///
/// Every sign test, non-negativity check, and termination test in the solver
/// goes through this type rather than raw floating-point comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { epsilon: 1e-4 }
    }
}

impl Tolerance {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// True when `a` and `b` are within epsilon of each other.
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.epsilon
    }

    /// `a > b`, excluding values that are approximately equal.
    pub fn gt(self, a: f64, b: f64) -> bool {
        a > b && !self.approx_eq(a, b)
    }

    /// `a >= b`, admitting values that are approximately equal.
    pub fn ge(self, a: f64, b: f64) -> bool {
        a > b || self.approx_eq(a, b)
    }

    /// `a < b`, excluding values that are approximately equal.
    pub fn lt(self, a: f64, b: f64) -> bool {
        a < b && !self.approx_eq(a, b)
    }

    /// `a <= b`, admitting values that are approximately equal.
    pub fn le(self, a: f64, b: f64) -> bool {
        a < b || self.approx_eq(a, b)
    }
}
