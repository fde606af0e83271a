use pivotlp_solver::{Problem, ProblemError, Solution};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error(transparent)]
    Problem(#[from] ProblemError),
}

/// Parse the line-oriented problem format:
///
/// ```text
/// n m
/// <n rows, each m coefficients>    matrix A
/// <n values>                       vector b
/// <m values>                       vector c
/// ```
pub fn parse_problem(source: &str) -> Result<Problem, ReadError> {
    let mut tokens = source.split_whitespace();
    let n = next_count(&mut tokens)?;
    let m = next_count(&mut tokens)?;

    let mut constraints = Vec::with_capacity(n);
    for _ in 0..n {
        let mut row = Vec::with_capacity(m);
        for _ in 0..m {
            row.push(next_value(&mut tokens)?);
        }
        constraints.push(row);
    }

    let mut bounds = Vec::with_capacity(n);
    for _ in 0..n {
        bounds.push(next_value(&mut tokens)?);
    }

    let mut objective = Vec::with_capacity(m);
    for _ in 0..m {
        objective.push(next_value(&mut tokens)?);
    }

    Ok(Problem::new(constraints, bounds, objective)?)
}

fn next_count<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<usize, ReadError> {
    let token = tokens.next().ok_or(ReadError::UnexpectedEof)?;
    token
        .parse()
        .map_err(|_| ReadError::InvalidNumber(token.to_string()))
}

fn next_value<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<f64, ReadError> {
    let token = tokens.next().ok_or(ReadError::UnexpectedEof)?;
    token
        .parse()
        .map_err(|_| ReadError::InvalidNumber(token.to_string()))
}

/// Render a solution as `No solution`, `Infinity`, or `Bounded solution`
/// followed by the values with 18 decimal digits each.
pub fn render_solution(solution: &Solution) -> String {
    match solution {
        Solution::Infeasible => "No solution".to_string(),
        Solution::Unbounded => "Infinity".to_string(),
        Solution::Bounded(values) => {
            let values = values
                .iter()
                .map(|value| format!("{value:.18}"))
                .collect::<Vec<_>>()
                .join(" ");
            format!("Bounded solution\n{values}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_documented_format() {
        let source = "\
3 3
1 1 -3
-5 10 0
3 -2 -4
10 50 9
1 6 -3
";

        let problem = parse_problem(source).unwrap();
        assert_eq!(problem.num_constraints(), 3);
        assert_eq!(problem.num_variables(), 3);
        assert_eq!(problem.constraints()[1], vec![-5.0, 10.0, 0.0]);
        assert_eq!(problem.bounds(), &[10.0, 50.0, 9.0]);
        assert_eq!(problem.objective(), &[1.0, 6.0, -3.0]);
    }

    #[test]
    fn truncated_input_is_an_error() {
        let result = parse_problem("2 1\n1\n-1\n-1");
        assert!(matches!(result, Err(ReadError::UnexpectedEof)));
    }

    #[test]
    fn non_numeric_token_is_an_error() {
        let result = parse_problem("1 1\nx\n5\n1");
        assert!(matches!(result, Err(ReadError::InvalidNumber(token)) if token == "x"));
    }

    #[test]
    fn renders_the_three_outcomes() {
        assert_eq!(render_solution(&Solution::Infeasible), "No solution");
        assert_eq!(render_solution(&Solution::Unbounded), "Infinity");
        assert_eq!(
            render_solution(&Solution::Bounded(vec![0.0, 5.0])),
            "Bounded solution\n0.000000000000000000 5.000000000000000000"
        );
    }
}
