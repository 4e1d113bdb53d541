//! Solver-facing interface of the reduction.
//!
//! This module provides:
//! - Backend capability declarations
//! - The solver payload and inverse-data records
//! - Matrix stuffing from abstract problems to solver format

pub mod capabilities;
pub mod data;
pub mod stuffing;

pub use capabilities::SolverCaps;
pub use data::{ConstrDims, InverseData, SolverData};
pub use stuffing::{accepts, apply};
