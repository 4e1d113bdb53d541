//! Backend capability declarations.
//!
//! Every QP backend supports equality and non-positivity constraints; the
//! remaining capabilities vary per solver and gate which problems the
//! reduction accepts on its behalf.

use crate::constraints::ConstraintKind;

/// Capabilities declared by a QP solver backend.
#[derive(Debug, Clone, Copy)]
pub struct SolverCaps {
    /// Whether the backend can handle boolean/integer variables.
    pub mip_capable: bool,
    /// Whether the backend refuses problems with no constraints.
    pub requires_constr: bool,
}

impl Default for SolverCaps {
    fn default() -> Self {
        SolverCaps {
            mip_capable: false,
            requires_constr: false,
        }
    }
}

impl SolverCaps {
    /// Declare mixed-integer capability.
    pub fn with_mip(mut self) -> Self {
        self.mip_capable = true;
        self
    }

    /// Declare that at least one constraint is required.
    pub fn with_requires_constr(mut self) -> Self {
        self.requires_constr = true;
        self
    }

    /// Whether the backend supports the given constraint kind.
    pub fn supports(&self, kind: ConstraintKind) -> bool {
        matches!(
            kind,
            ConstraintKind::Equality | ConstraintKind::NonPositivity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let caps = SolverCaps::default();
        assert!(!caps.mip_capable);
        assert!(!caps.requires_constr);
    }

    #[test]
    fn test_supported_kinds() {
        let caps = SolverCaps::default();
        assert!(caps.supports(ConstraintKind::Equality));
        assert!(caps.supports(ConstraintKind::NonPositivity));
        assert!(!caps.supports(ConstraintKind::Other));
    }
}
