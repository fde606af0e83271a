/// The outcome of solving a problem.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Solution {
    /// A finite optimum; one value per structural variable.
    Bounded(Vec<f64>),
    /// No point satisfies all constraints.
    Infeasible,
    /// The objective grows without limit over the feasible region.
    Unbounded,
}

impl Solution {
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded(_))
    }

    /// The variable values of a bounded solution.
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            Self::Bounded(values) => Some(values),
            _ => None,
        }
    }
}
