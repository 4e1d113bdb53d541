//! # qpstuff
//!
//! Matrix stuffing for quadratic programs.
//!
//! qpstuff lowers an abstract, already-canonicalized quadratic program
//! (a decision variable, a convex quadratic objective, and affine
//! equality/non-positivity constraints) into the concrete numeric data a QP
//! backend expects, plus the inverse data a later step needs to reconstruct
//! the original structure from the solver's raw solution vector.
//!
//! ## Quick Start
//!
//! ```ignore
//! use qpstuff::prelude::*;
//!
//! let x = Variable::new(2);
//! let objective = QuadObjective::new(p, q, 0.0)?;
//!
//! let problem = QuadProblem::minimize(x, objective)
//!     .subject_to([
//!         Constraint::equality(AffineExpr::row(&[1.0, 1.0], -1.0)), // x0 + x1 = 1
//!         Constraint::nonpos(AffineExpr::row(&[1.0, 0.0], -3.0)),   // x0 <= 3
//!     ])
//!     .build()?;
//!
//! let caps = SolverCaps::default();
//! if accepts(&problem, &caps) {
//!     let (data, inverse) = apply(&problem)?;
//!     // hand `data` to the backend, keep `inverse` for solution recovery
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Acceptance check** (`accepts`) gates problems on backend capabilities
//! - **Classification** groups constraints by kind, order preserved
//! - **Stuffing** stacks per-kind coefficient blocks and negates offsets
//! - **Assembly** emits independent `SolverData` and `InverseData` records
//!
//! The lowered QP follows the solver convention `1/2 x' P x + q' x` with
//! `A x = b` and `F x <= g`; the modeler's quadratic coefficient is doubled
//! on the way in, and the objective's constant offset travels in the inverse
//! data instead of the payload.

pub mod constraints;
pub mod error;
pub mod expr;
pub mod problem;
pub mod solver;
pub mod sparse;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use qpstuff::prelude::*;
/// ```
pub mod prelude {
    // Expression types
    pub use crate::expr::{
        convex_attributes, AffineExpr, VarAttributes, VarId, Variable, VariableBuilder,
    };

    // Constraints
    pub use crate::constraints::{group_constraints, Constraint, ConstraintGroups, ConstraintKind};

    // Problem
    pub use crate::problem::{QuadObjective, QuadProblem, QuadProblemBuilder};

    // Reduction
    pub use crate::solver::{accepts, apply, ConstrDims, InverseData, SolverCaps, SolverData};

    // Errors
    pub use crate::error::{Result, StuffingError};
}

// Re-export main types at crate root
pub use error::{Result, StuffingError};
pub use problem::{QuadObjective, QuadProblem};
pub use solver::{accepts, apply, InverseData, SolverCaps, SolverData};
