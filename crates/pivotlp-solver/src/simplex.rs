use thiserror::Error;

use crate::problem::Problem;
use crate::solution::Solution;
use crate::tableau::{Pivot, Tableau};
use crate::tolerance::Tolerance;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The pivot loop hit the configured cap without reaching a terminal
    /// state. Distinct from the `Solution` outcomes: an ordinary infeasible
    /// or unbounded problem never produces it.
    #[error("exceeded the pivot limit of {limit} iterations")]
    IterationLimit { limit: usize },
}

/// Two-phase tableau simplex solver.
pub struct Solver {
    /// Hard cap on pivot steps within one tableau run.
    max_iterations: usize,
    /// Comparator used for every sign and termination test.
    tolerance: Tolerance,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            tolerance: Tolerance::default(),
        }
    }
}

/// How a tableau run ended.
enum Outcome {
    /// The objective row went non-negative; holds the extracted candidate,
    /// `None` when extraction raised its infeasibility sentinel.
    Optimal(Option<Vec<f64>>),
    /// The ratio test found no leaving row for the entering column.
    NoPivot { past_phase_one: bool },
}

struct TableauRun {
    outcome: Outcome,
    /// Candidate snapshotted at the moment the feasibility phase completed.
    phase_one_answer: Option<Vec<f64>>,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Solve `problem`, falling back to the two-phase method when the plain
    /// run produces a candidate that violates a constraint.
    pub fn solve(&self, problem: &Problem) -> Result<Solution, SolverError> {
        let tolerance = self.tolerance;

        // The origin is optimal outright when no objective coefficient
        // rewards growth and every bound admits x = 0.
        if problem.objective().iter().all(|&c| tolerance.le(c, 0.0))
            && problem.bounds().iter().all(|&b| tolerance.ge(b, 0.0))
        {
            return Ok(Solution::Bounded(vec![0.0; problem.num_variables()]));
        }

        // First attempt: treat the slack basis as feasible and optimize.
        let mut tableau = Tableau::build(problem, false);
        let first = self.run(&mut tableau, false)?;
        let candidate = match first.outcome {
            Outcome::NoPivot { .. } => return Ok(Solution::Unbounded),
            Outcome::Optimal(None) => return Ok(Solution::Infeasible),
            Outcome::Optimal(Some(values)) => values,
        };
        if problem.admits(&candidate, tolerance) {
            return Ok(Solution::Bounded(candidate));
        }

        // The candidate violates a constraint, so the slack basis was not
        // feasible: rebuild with flipped rows and run both phases.
        let mut tableau = Tableau::build(problem, true);
        let second = self.run(&mut tableau, true)?;
        let phase_one_answer = second
            .phase_one_answer
            .filter(|values| problem.admits(values, tolerance));
        let candidate = match second.outcome {
            Outcome::NoPivot {
                past_phase_one: false,
            } => return Ok(Solution::Unbounded),
            Outcome::NoPivot {
                past_phase_one: true,
            } => return Ok(Solution::Infeasible),
            Outcome::Optimal(None) => return Ok(Solution::Infeasible),
            Outcome::Optimal(Some(values)) => values,
        };
        if problem.admits(&candidate, tolerance) {
            Ok(Solution::Bounded(candidate))
        } else if let Some(values) = phase_one_answer {
            Ok(Solution::Bounded(values))
        } else {
            Ok(Solution::Infeasible)
        }
    }

    /// Pivot until the active objective is optimal or no pivot exists.
    ///
    /// Entered with `two_phase` set, the loop first drives the phase-one row
    /// non-positive, snapshots the basic solution, and then continues on the
    /// real objective unless that is already optimal.
    fn run(&self, tableau: &mut Tableau, two_phase: bool) -> Result<TableauRun, SolverError> {
        let tolerance = self.tolerance;
        let mut two_phase = two_phase;
        let mut past_phase_one = false;
        let mut phase_one_answer = None;
        let mut iterations = 0;

        loop {
            if !two_phase && tableau.objective_optimal(tolerance) {
                break;
            }
            if two_phase && tableau.phase_one_cleared(tolerance) {
                two_phase = false;
                past_phase_one = true;
                phase_one_answer = tableau.basic_solution(tolerance);
                if tableau.objective_optimal(tolerance) {
                    break;
                }
            }

            let Some(pivot) = self.select_pivot(tableau, two_phase) else {
                return Ok(TableauRun {
                    outcome: Outcome::NoPivot { past_phase_one },
                    phase_one_answer,
                });
            };
            if iterations == self.max_iterations {
                return Err(SolverError::IterationLimit {
                    limit: self.max_iterations,
                });
            }
            iterations += 1;

            tableau.basis[pivot.row] = pivot.column;
            tableau.pivot(pivot, two_phase);
        }

        Ok(TableauRun {
            outcome: Outcome::Optimal(tableau.basic_solution(tolerance)),
            phase_one_answer,
        })
    }

    /// Choose the entering column and leaving row for one pivot step.
    ///
    /// The entering column is the steepest coefficient of the active
    /// objective (most positive phase-one cell, or most negative objective
    /// cell), first occurrence on ties. The leaving row minimizes
    /// |RHS / entry| over rows with a tolerance-positive entry; equal minima
    /// break to the row holding the lowest-numbered basic variable. `None`
    /// when no row qualifies.
    fn select_pivot(&self, tableau: &Tableau, two_phase: bool) -> Option<Pivot> {
        let column = if two_phase {
            steepest_phase_one_column(tableau)
        } else {
            steepest_objective_column(tableau)
        };

        let tolerance = self.tolerance;
        let rhs = tableau.width() - 1;
        let ratios: Vec<f64> = (0..tableau.num_constraints)
            .map(|row| {
                let entry = tableau.rows[row][column];
                if tolerance.gt(entry, 0.0) {
                    (tableau.rows[row][rhs] / entry).abs()
                } else {
                    f64::INFINITY
                }
            })
            .collect();
        if ratios.iter().all(|ratio| ratio.is_infinite()) {
            return None;
        }

        let minimum = ratios.iter().copied().fold(f64::INFINITY, f64::min);
        let tied: Vec<usize> = (0..ratios.len())
            .filter(|&row| ratios[row] == minimum)
            .collect();
        let mut row = tied[0];
        for &candidate in &tied[1..] {
            if tableau.basis[candidate] < tableau.basis[row] {
                row = candidate;
            }
        }
        Some(Pivot { row, column })
    }
}

/// Index of the most positive phase-one cell left of the RHS.
fn steepest_phase_one_column(tableau: &Tableau) -> usize {
    let cells = &tableau.phase_one_row[..tableau.width() - 1];
    let mut column = 0;
    for (j, &cell) in cells.iter().enumerate().skip(1) {
        if cell > cells[column] {
            column = j;
        }
    }
    column
}

/// Index of the most negative objective cell left of the RHS.
fn steepest_objective_column(tableau: &Tableau) -> usize {
    let objective = &tableau.rows[tableau.num_constraints];
    let cells = &objective[..tableau.width() - 1];
    let mut column = 0;
    for (j, &cell) in cells.iter().enumerate().skip(1) {
        if cell < cells[column] {
            column = j;
        }
    }
    column
}
