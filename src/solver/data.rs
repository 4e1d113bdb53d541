//! Solver payload and inverse-data records.
//!
//! `SolverData` is everything a backend needs to run; `InverseData` is
//! everything a later inverse-transform step needs to map the raw solution
//! back onto the original problem. The two are independently complete and
//! share no structure.

use nalgebra::DVector;
use nalgebra_sparse::CscMatrix;

use crate::constraints::{Constraint, ConstraintGroups};
use crate::expr::VarId;

/// Scalar constraint-row counts per supported kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstrDims {
    /// Rows in the equality block.
    pub eq: usize,
    /// Rows in the inequality block.
    pub ineq: usize,
}

impl ConstrDims {
    /// Derive the counts from classified constraint groups.
    pub fn new(groups: &ConstraintGroups) -> Self {
        ConstrDims {
            eq: groups.equality_rows(),
            ineq: groups.nonpos_rows(),
        }
    }
}

/// Numeric problem data in the form a QP backend expects:
///
/// ```text
/// minimize    1/2 x' P x + q' x
/// subject to  A x =  b
///             F x <= g
/// ```
///
/// The field set is a versioned interface contract shared with every
/// backend adapter; renaming a field is a breaking change.
#[derive(Debug, Clone)]
pub struct SolverData {
    /// Objective Hessian, already scaled to the solver's `1/2 x' P x`
    /// convention (2x the modeler coefficient).
    pub p: CscMatrix<f64>,
    /// Objective linear term.
    pub q: DVector<f64>,
    /// Equality constraint matrix.
    pub a: CscMatrix<f64>,
    /// Equality right-hand side.
    pub b: DVector<f64>,
    /// Inequality constraint matrix.
    pub f: CscMatrix<f64>,
    /// Inequality right-hand side.
    pub g: DVector<f64>,
    /// Indices of boolean variable components.
    pub bool_idx: Vec<usize>,
    /// Indices of integer variable components.
    pub int_idx: Vec<usize>,
    /// Number of variables.
    pub n_var: usize,
    /// Number of equality rows.
    pub n_eq: usize,
    /// Number of inequality rows.
    pub n_ineq: usize,
}

/// Bookkeeping retained to invert the reduction.
///
/// Produced once per `apply` call and consumed exactly once by the external
/// inverse-transform step; immutable thereafter.
#[derive(Debug, Clone)]
pub struct InverseData {
    /// Identifier of the decision variable.
    pub var_id: VarId,
    /// Row counts per constraint kind.
    pub dims: ConstrDims,
    /// Equality constraints, in the order they were stacked.
    pub eq_constr: Vec<Constraint>,
    /// Inequality constraints, in the order they were stacked.
    pub ineq_constr: Vec<Constraint>,
    /// Constant objective offset stripped during stuffing.
    pub offset: f64,
    /// Whether the problem had boolean/integer components.
    pub mixed_integer: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{group_constraints, Constraint};
    use crate::expr::AffineExpr;

    #[test]
    fn test_constr_dims_from_groups() {
        let groups = group_constraints(&[
            Constraint::equality(AffineExpr::row(&[1.0, 1.0], 0.0)),
            Constraint::nonpos(AffineExpr::identity(2, DVector::zeros(2)).unwrap()),
            Constraint::nonpos(AffineExpr::row(&[1.0, 0.0], 0.0)),
        ]);
        let dims = ConstrDims::new(&groups);
        assert_eq!(dims.eq, 1);
        assert_eq!(dims.ineq, 3);
    }

    #[test]
    fn test_constr_dims_empty() {
        let dims = ConstrDims::new(&ConstraintGroups::default());
        assert_eq!(dims, ConstrDims { eq: 0, ineq: 0 });
    }
}
