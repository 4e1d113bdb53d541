//! Abstract QP definition.
//!
//! A `QuadProblem` is a problem already lowered to quadratic form by an
//! upstream canonicalization: the objective is `x' P x + q' x + d` with `P`
//! and `q` explicit, and every constraint is an affine residual tagged with
//! its kind. Use the builder to construct problems:
//! ```ignore
//! let problem = QuadProblem::minimize(x, objective)
//!     .subject_to([constraint1, constraint2])
//!     .build()?;
//! ```

use nalgebra::DVector;
use nalgebra_sparse::CscMatrix;

use crate::constraints::Constraint;
use crate::error::{Result, StuffingError};
use crate::expr::Variable;

/// Quadratic objective in modeler convention: `x' P x + q' x + d`.
#[derive(Debug, Clone)]
pub struct QuadObjective {
    p: CscMatrix<f64>,
    q: DVector<f64>,
    d: f64,
}

impl QuadObjective {
    /// Create an objective, validating that `P` is square and `q` matches.
    pub fn new(p: CscMatrix<f64>, q: DVector<f64>, d: f64) -> Result<Self> {
        if p.nrows() != p.ncols() {
            return Err(StuffingError::ShapeMismatch {
                expected: "square quadratic coefficient matrix".into(),
                got: format!("{}x{}", p.nrows(), p.ncols()),
            });
        }
        if q.len() != p.ncols() {
            return Err(StuffingError::ShapeMismatch {
                expected: format!("linear term of length {}", p.ncols()),
                got: format!("length {}", q.len()),
            });
        }
        Ok(QuadObjective { p, q, d })
    }

    /// A purely linear objective: `q' x + d`.
    pub fn linear(q: DVector<f64>, d: f64) -> Self {
        let n = q.len();
        QuadObjective {
            p: CscMatrix::zeros(n, n),
            q,
            d,
        }
    }

    /// Number of variable components the objective spans.
    pub fn n_var(&self) -> usize {
        self.q.len()
    }
}

/// An abstract quadratic program over a single decision-variable aggregate.
#[derive(Debug, Clone)]
pub struct QuadProblem {
    /// The decision variable.
    pub x: Variable,
    /// The objective in modeler convention.
    pub objective: QuadObjective,
    /// Ordered constraint list.
    pub constraints: Vec<Constraint>,
}

impl QuadProblem {
    /// Start building a minimization problem.
    pub fn minimize(x: Variable, objective: QuadObjective) -> QuadProblemBuilder {
        QuadProblemBuilder {
            x,
            objective,
            constraints: Vec::new(),
        }
    }

    /// Whether any variable component is constrained to boolean/integer
    /// values.
    pub fn is_mixed_integer(&self) -> bool {
        self.x.is_mixed_integer()
    }

    /// Produce the current numeric objective data `(P, q, d)`.
    ///
    /// Parameter substitution happens upstream; this returns the coefficient
    /// values as of the current parameter state.
    pub fn apply_parameters(&self) -> (CscMatrix<f64>, DVector<f64>, f64) {
        (
            self.objective.p.clone(),
            self.objective.q.clone(),
            self.objective.d,
        )
    }
}

/// Builder for constructing problems.
#[derive(Debug, Clone)]
pub struct QuadProblemBuilder {
    x: Variable,
    objective: QuadObjective,
    constraints: Vec<Constraint>,
}

impl QuadProblemBuilder {
    /// Add constraints to the problem.
    pub fn subject_to(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.constraints.extend(constraints);
        self
    }

    /// Add a single constraint.
    pub fn constraint(mut self, c: Constraint) -> Self {
        self.constraints.push(c);
        self
    }

    /// Build the problem, validating the objective against the variable.
    pub fn build(self) -> Result<QuadProblem> {
        if self.objective.n_var() != self.x.size() {
            return Err(StuffingError::ShapeMismatch {
                expected: format!("objective over {} variables", self.x.size()),
                got: format!("{} variables", self.objective.n_var()),
            });
        }
        Ok(QuadProblem {
            x: self.x,
            objective: self.objective,
            constraints: self.constraints,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{AffineExpr, VariableBuilder};
    use crate::sparse::csc_identity;

    #[test]
    fn test_objective_validation() {
        assert!(QuadObjective::new(CscMatrix::zeros(2, 3), DVector::zeros(3), 0.0).is_err());
        assert!(QuadObjective::new(csc_identity(2), DVector::zeros(3), 0.0).is_err());
        assert!(QuadObjective::new(csc_identity(2), DVector::zeros(2), 1.5).is_ok());
    }

    #[test]
    fn test_builder_dimension_check() {
        let x = Variable::new(3);
        let objective = QuadObjective::linear(DVector::zeros(2), 0.0);
        assert!(QuadProblem::minimize(x, objective).build().is_err());
    }

    #[test]
    fn test_builder() {
        let x = Variable::new(2);
        let objective = QuadObjective::linear(DVector::from_vec(vec![1.0, 1.0]), 0.0);
        let problem = QuadProblem::minimize(x, objective)
            .constraint(Constraint::nonpos(AffineExpr::row(&[1.0, 0.0], -3.0)))
            .build()
            .unwrap();
        assert_eq!(problem.constraints.len(), 1);
        assert!(!problem.is_mixed_integer());
    }

    #[test]
    fn test_mixed_integer_flag() {
        let x = VariableBuilder::new(2).integer(vec![1]).build().unwrap();
        let objective = QuadObjective::linear(DVector::zeros(2), 0.0);
        let problem = QuadProblem::minimize(x, objective).build().unwrap();
        assert!(problem.is_mixed_integer());
    }

    #[test]
    fn test_apply_parameters() {
        let x = Variable::new(2);
        let objective =
            QuadObjective::new(csc_identity(2), DVector::from_vec(vec![1.0, -1.0]), 2.5).unwrap();
        let problem = QuadProblem::minimize(x, objective).build().unwrap();

        let (p, q, d) = problem.apply_parameters();
        assert_eq!(p.nrows(), 2);
        assert_eq!(q[1], -1.0);
        assert_eq!(d, 2.5);
    }
}
