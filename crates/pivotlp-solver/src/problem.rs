use thiserror::Error;

use crate::tolerance::Tolerance;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("constraint row {row} has {found} coefficients, expected {expected}")]
    ConstraintWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("expected {expected} constraint bounds, found {found}")]
    BoundCount { expected: usize, found: usize },
}

/// A linear program in canonical form: maximize c·x subject to Ax <= b and
/// x >= 0.
///
/// Immutable once constructed; the solver never writes back into it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    /// Constraint coefficient rows, the matrix A
    constraints: Vec<Vec<f64>>,
    /// Right-hand side of each constraint, the vector b
    bounds: Vec<f64>,
    /// Objective coefficients to maximize, the vector c
    objective: Vec<f64>,
}

impl Problem {
    /// Build a problem, checking that every constraint row is as wide as the
    /// objective and that there is one bound per constraint.
    pub fn new(
        constraints: Vec<Vec<f64>>,
        bounds: Vec<f64>,
        objective: Vec<f64>,
    ) -> Result<Self, ProblemError> {
        let expected = objective.len();
        for (row, coefficients) in constraints.iter().enumerate() {
            if coefficients.len() != expected {
                return Err(ProblemError::ConstraintWidth {
                    row,
                    expected,
                    found: coefficients.len(),
                });
            }
        }
        if bounds.len() != constraints.len() {
            return Err(ProblemError::BoundCount {
                expected: constraints.len(),
                found: bounds.len(),
            });
        }

        Ok(Self {
            constraints,
            bounds,
            objective,
        })
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    pub fn constraints(&self) -> &[Vec<f64>] {
        &self.constraints
    }

    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    /// Whether `values` satisfies every constraint and the x >= 0 bound,
    /// within tolerance.
    pub fn admits(&self, values: &[f64], tolerance: Tolerance) -> bool {
        for (coefficients, &bound) in self.constraints.iter().zip(&self.bounds) {
            let lhs: f64 = coefficients
                .iter()
                .zip(values)
                .map(|(a, x)| a * x)
                .sum();
            if tolerance.gt(lhs, bound) {
                return false;
            }
        }
        values.iter().all(|&x| tolerance.ge(x, 0.0))
    }

    /// Value of the objective c·x at `values`.
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.objective
            .iter()
            .zip(values)
            .map(|(c, x)| c * x)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_constraint_rows() {
        let result = Problem::new(
            vec![vec![1.0, 2.0], vec![1.0]],
            vec![4.0, 3.0],
            vec![1.0, 1.0],
        );

        assert_eq!(
            result,
            Err(ProblemError::ConstraintWidth {
                row: 1,
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn rejects_mismatched_bound_count() {
        let result = Problem::new(vec![vec![1.0], vec![2.0]], vec![4.0], vec![1.0]);

        assert_eq!(
            result,
            Err(ProblemError::BoundCount {
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn admits_respects_constraints_and_sign() {
        // x + y <= 4, x <= 3
        let problem = Problem::new(
            vec![vec![1.0, 1.0], vec![1.0, 0.0]],
            vec![4.0, 3.0],
            vec![1.0, 1.0],
        )
        .unwrap();
        let tol = Tolerance::default();

        assert!(problem.admits(&[3.0, 1.0], tol));
        assert!(!problem.admits(&[3.0, 2.0], tol));
        assert!(!problem.admits(&[-1.0, 0.0], tol));
    }

    #[test]
    fn admits_tolerates_small_violations() {
        let problem = Problem::new(vec![vec![1.0]], vec![5.0], vec![1.0]).unwrap();
        let tol = Tolerance::default();

        assert!(problem.admits(&[5.0 + 5e-5], tol));
        assert!(problem.admits(&[-5e-5], tol));
        assert!(!problem.admits(&[5.001], tol));
    }

    #[test]
    fn objective_value_is_the_dot_product() {
        let problem = Problem::new(
            vec![vec![1.0, 1.0]],
            vec![4.0],
            vec![3.0, 2.0],
        )
        .unwrap();

        assert_eq!(problem.objective_value(&[3.0, 1.0]), 11.0);
    }
}
