//! Variable and affine-expression types consumed by the reduction.

pub mod affine;
pub mod variable;

pub use affine::AffineExpr;
pub use variable::{convex_attributes, VarAttributes, VarId, Variable, VariableBuilder};
