//! Constraint types for lowered quadratic programs.
//!
//! Each constraint wraps an affine residual `M * x + c` and a kind tag:
//! - Equality: M x + c = 0
//! - NonPositivity: M x + c <= 0
//!
//! `Other` marks kinds this reduction does not handle (cone constraints
//! lowered by a different reduction); the acceptance check rejects it.

use crate::expr::AffineExpr;

/// Kind tag of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Affine equality: M x + c = 0.
    Equality,
    /// Affine non-positivity: M x + c <= 0.
    NonPositivity,
    /// Any kind outside the supported set.
    Other,
}

/// A constraint in an abstract QP.
#[derive(Debug, Clone)]
pub struct Constraint {
    kind: ConstraintKind,
    expr: AffineExpr,
}

impl Constraint {
    /// Create an equality constraint: expr = 0.
    pub fn equality(expr: AffineExpr) -> Self {
        Constraint {
            kind: ConstraintKind::Equality,
            expr,
        }
    }

    /// Create a non-positivity constraint: expr <= 0.
    pub fn nonpos(expr: AffineExpr) -> Self {
        Constraint {
            kind: ConstraintKind::NonPositivity,
            expr,
        }
    }

    /// Create a constraint of an unsupported kind.
    ///
    /// Exists so callers can exercise the rejection path; the reduction
    /// never stuffs these.
    pub fn other(expr: AffineExpr) -> Self {
        Constraint {
            kind: ConstraintKind::Other,
            expr,
        }
    }

    /// The kind tag.
    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    /// The affine residual expression.
    pub fn expr(&self) -> &AffineExpr {
        &self.expr
    }

    /// Number of scalar rows this constraint contributes.
    pub fn rows(&self) -> usize {
        self.expr.rows()
    }
}

/// Constraints partitioned by kind, relative order preserved within each
/// group.
#[derive(Debug, Clone, Default)]
pub struct ConstraintGroups {
    /// Equality constraints, in problem order.
    pub equality: Vec<Constraint>,
    /// Non-positivity constraints, in problem order.
    pub nonpos: Vec<Constraint>,
}

impl ConstraintGroups {
    /// Total scalar rows contributed by the equality group.
    pub fn equality_rows(&self) -> usize {
        self.equality.iter().map(|c| c.rows()).sum()
    }

    /// Total scalar rows contributed by the non-positivity group.
    pub fn nonpos_rows(&self) -> usize {
        self.nonpos.iter().map(|c| c.rows()).sum()
    }
}

/// Partition a constraint sequence by declared kind.
///
/// Assumes the sequence contains only supported kinds; the acceptance check
/// has already rejected anything else. Constraints of kind `Other` are not
/// placed in either group.
pub fn group_constraints(constraints: &[Constraint]) -> ConstraintGroups {
    let mut groups = ConstraintGroups::default();
    for c in constraints {
        match c.kind() {
            ConstraintKind::Equality => groups.equality.push(c.clone()),
            ConstraintKind::NonPositivity => groups.nonpos.push(c.clone()),
            ConstraintKind::Other => {}
        }
    }
    groups
}
