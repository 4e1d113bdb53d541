//! Matrix stuffing: lowers an abstract QP to solver format.
//!
//! This module builds the matrices (P, q, A, b, F, g) a QP backend expects
//! from a problem in lowered quadratic form, together with the inverse data
//! needed to map the solver's raw solution back onto the problem.

use nalgebra::DVector;
use nalgebra_sparse::CscMatrix;
use tracing::debug;

use crate::constraints::{group_constraints, Constraint, ConstraintKind};
use crate::error::{Result, StuffingError};
use crate::expr::convex_attributes;
use crate::problem::QuadProblem;
use crate::solver::capabilities::SolverCaps;
use crate::solver::data::{ConstrDims, InverseData, SolverData};
use crate::sparse::{csc_from_triplets, csc_scale};

/// Decide whether a problem is eligible for this reduction on behalf of a
/// backend with the given capabilities.
///
/// Returns false for non-applicability; that is not an error, the caller
/// simply selects a different reduction. A `QuadProblem` is by construction
/// in lowered quadratic form, so form membership needs no runtime check.
pub fn accepts(problem: &QuadProblem, caps: &SolverCaps) -> bool {
    (caps.mip_capable || !problem.is_mixed_integer())
        && convex_attributes(&[&problem.x]).is_empty()
        && (!problem.constraints.is_empty() || !caps.requires_constr)
        && problem
            .constraints
            .iter()
            .all(|c| caps.supports(c.kind()))
}

/// Lower the problem to solver data, recording inverse data alongside.
///
/// The produced QP has the form
///
/// ```text
/// minimize    1/2 x' P x + q' x
/// subject to  A x =  b
///             F x <= g
/// ```
///
/// Either the full `(SolverData, InverseData)` pair is returned or an error;
/// no partial results. Preconditions established by [`accepts`] are
/// re-validated here and violations surface as errors naming the offending
/// constraint.
pub fn apply(problem: &QuadProblem) -> Result<(SolverData, InverseData)> {
    let n = problem.x.size();
    validate_constraints(problem, n)?;

    let mixed_integer = problem.is_mixed_integer();
    let groups = group_constraints(&problem.constraints);
    let dims = ConstrDims::new(&groups);

    let (p, q, d) = problem.apply_parameters();
    // Quadratic part of the objective is x' P x but solvers expect
    // 1/2 x' P x, so P is doubled.
    let p = csc_scale(&p, 2.0);

    let (a, b) = stack_group(&groups.equality, n)?;
    let (f, g) = stack_group(&groups.nonpos, n)?;

    if a.nrows() != dims.eq || f.nrows() != dims.ineq {
        return Err(StuffingError::InvariantViolation(format!(
            "stacked {}/{} rows, classified {}/{}",
            a.nrows(),
            f.nrows(),
            dims.eq,
            dims.ineq
        )));
    }

    debug!(
        n_var = n,
        n_eq = dims.eq,
        n_ineq = dims.ineq,
        mixed_integer,
        "stuffed problem"
    );

    let data = SolverData {
        p,
        q,
        a,
        b,
        f,
        g,
        bool_idx: problem.x.boolean_idx().to_vec(),
        int_idx: problem.x.integer_idx().to_vec(),
        n_var: n,
        n_eq: dims.eq,
        n_ineq: dims.ineq,
    };

    let inverse_data = InverseData {
        var_id: problem.x.id(),
        dims,
        eq_constr: groups.equality,
        ineq_constr: groups.nonpos,
        offset: d,
        mixed_integer,
    };

    Ok((data, inverse_data))
}

/// Check that every constraint is of a supported kind and spans exactly the
/// problem's variable columns.
fn validate_constraints(problem: &QuadProblem, n: usize) -> Result<()> {
    for (index, c) in problem.constraints.iter().enumerate() {
        if c.kind() == ConstraintKind::Other {
            return Err(StuffingError::UnsupportedConstraint {
                index,
                kind: c.kind(),
            });
        }
        if c.expr().cols() != n {
            return Err(StuffingError::ShapeMismatch {
                expected: format!("constraint {} with {} columns", index, n),
                got: format!("{} columns", c.expr().cols()),
            });
        }
    }
    Ok(())
}

/// Stack one classified group into a block matrix and right-hand side.
///
/// Each constraint reads `M_i x + c_i (=|<=) 0`; the solver form is
/// `A x = b` / `F x <= g`, so the matrices stack row-wise and the offsets
/// concatenate negated. An empty group yields a 0-row matrix of width `n`
/// and an empty vector.
fn stack_group(constraints: &[Constraint], n: usize) -> Result<(CscMatrix<f64>, DVector<f64>)> {
    let total_rows: usize = constraints.iter().map(|c| c.rows()).sum();

    let mut rows = Vec::new();
    let mut cols = Vec::new();
    let mut vals = Vec::new();
    let mut rhs = DVector::zeros(total_rows);

    let mut row_offset = 0;
    for c in constraints {
        let (matrix, offset) = c.expr().coeff_offset();
        for (row, col, val) in matrix.triplet_iter() {
            rows.push(row_offset + row);
            cols.push(col);
            vals.push(*val);
        }
        for (i, v) in offset.iter().enumerate() {
            rhs[row_offset + i] = -v;
        }
        row_offset += c.rows();
    }

    if row_offset != total_rows {
        return Err(StuffingError::InvariantViolation(format!(
            "stacked {} rows, expected {}",
            row_offset, total_rows
        )));
    }

    Ok((csc_from_triplets(total_rows, n, rows, cols, vals), rhs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{AffineExpr, Variable};
    use crate::problem::QuadObjective;

    fn linear_problem(n: usize, constraints: Vec<Constraint>) -> QuadProblem {
        QuadProblem::minimize(Variable::new(n), QuadObjective::linear(DVector::zeros(n), 0.0))
            .subject_to(constraints)
            .build()
            .unwrap()
    }

    #[test]
    fn test_stack_group_negates_offsets() {
        let group = vec![
            Constraint::equality(AffineExpr::row(&[1.0, 1.0], -1.0)),
            Constraint::equality(AffineExpr::row(&[2.0, 0.0], 3.0)),
        ];
        let (a, b) = stack_group(&group, 2).unwrap();
        assert_eq!(a.nrows(), 2);
        assert_eq!(b[0], 1.0);
        assert_eq!(b[1], -3.0);
    }

    #[test]
    fn test_stack_group_empty() {
        let (a, b) = stack_group(&[], 4).unwrap();
        assert_eq!(a.nrows(), 0);
        assert_eq!(a.ncols(), 4);
        assert_eq!(b.len(), 0);
    }

    #[test]
    fn test_apply_rejects_other_kind() {
        let problem = linear_problem(
            2,
            vec![
                Constraint::equality(AffineExpr::row(&[1.0, 0.0], 0.0)),
                Constraint::other(AffineExpr::row(&[0.0, 1.0], 0.0)),
            ],
        );
        let err = apply(&problem).unwrap_err();
        match err {
            StuffingError::UnsupportedConstraint { index, kind } => {
                assert_eq!(index, 1);
                assert_eq!(kind, ConstraintKind::Other);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_apply_rejects_width_mismatch() {
        let problem = linear_problem(2, vec![Constraint::equality(AffineExpr::row(&[1.0], 0.0))]);
        assert!(matches!(
            apply(&problem),
            Err(StuffingError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_accepts_unsupported_kind() {
        let caps = SolverCaps::default();
        let problem = linear_problem(
            1,
            vec![
                Constraint::nonpos(AffineExpr::row(&[1.0], 0.0)),
                Constraint::other(AffineExpr::row(&[1.0], 0.0)),
            ],
        );
        assert!(!accepts(&problem, &caps));
    }
}
