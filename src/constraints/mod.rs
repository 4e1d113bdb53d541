//! Constraint types and grouping utilities.

pub mod constraint;

pub use constraint::{group_constraints, Constraint, ConstraintGroups, ConstraintKind};
