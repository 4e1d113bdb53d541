//! Decision variable aggregate with builder-pattern construction.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Result, StuffingError};

/// Unique identifier for variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarId(u64);

impl VarId {
    /// Generate a new unique ID.
    pub fn new() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);
        VarId(NEXT_ID.fetch_add(1, Ordering::SeqCst))
    }

    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for VarId {
    fn default() -> Self {
        Self::new()
    }
}

/// Convexity-bearing attributes on a variable.
///
/// These encode implicit constraints (sign restrictions, PSD structure) that
/// are not expressible as the linear constraints this reduction handles. A
/// problem whose variable carries any of them must be lowered by a different
/// reduction first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VarAttributes {
    /// Variable is restricted to be non-negative.
    pub nonneg: bool,
    /// Variable is restricted to be non-positive.
    pub nonpos: bool,
    /// Variable is a positive semidefinite matrix.
    pub psd: bool,
}

impl VarAttributes {
    /// Names of the attributes that are set.
    pub fn convex_attributes(&self) -> Vec<&'static str> {
        let mut attrs = Vec::new();
        if self.nonneg {
            attrs.push("nonneg");
        }
        if self.nonpos {
            attrs.push("nonpos");
        }
        if self.psd {
            attrs.push("psd");
        }
        attrs
    }

    /// Check whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        !(self.nonneg || self.nonpos || self.psd)
    }
}

/// The single decision-variable aggregate of an abstract QP.
///
/// The variable is a flat vector of `size` scalar components. Subsets of the
/// components may be flagged boolean or integer; those index lists flow
/// through stuffing unchanged so a mixed-integer backend can pick them up.
#[derive(Debug, Clone)]
pub struct Variable {
    id: VarId,
    size: usize,
    name: Option<String>,
    boolean_idx: Vec<usize>,
    integer_idx: Vec<usize>,
    attributes: VarAttributes,
}

impl Variable {
    /// Create a continuous variable of the given size.
    pub fn new(size: usize) -> Self {
        Variable {
            id: VarId::new(),
            size,
            name: None,
            boolean_idx: Vec::new(),
            integer_idx: Vec::new(),
            attributes: VarAttributes::default(),
        }
    }

    /// Stable identifier of this variable.
    pub fn id(&self) -> VarId {
        self.id
    }

    /// Number of scalar components.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Optional name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Indices of components restricted to {0, 1}.
    pub fn boolean_idx(&self) -> &[usize] {
        &self.boolean_idx
    }

    /// Indices of components restricted to integers.
    pub fn integer_idx(&self) -> &[usize] {
        &self.integer_idx
    }

    /// Attribute flags carried by this variable.
    pub fn attributes(&self) -> &VarAttributes {
        &self.attributes
    }

    /// Whether any component is boolean or integer.
    pub fn is_mixed_integer(&self) -> bool {
        !self.boolean_idx.is_empty() || !self.integer_idx.is_empty()
    }
}

/// Names of the convexity-bearing attributes set on any of the given
/// variables.
///
/// An empty result means the variables carry no implicit constraints and are
/// eligible for a reduction that only handles explicit linear constraints.
pub fn convex_attributes(variables: &[&Variable]) -> Vec<&'static str> {
    let mut attrs = Vec::new();
    for var in variables {
        for a in var.attributes().convex_attributes() {
            if !attrs.contains(&a) {
                attrs.push(a);
            }
        }
    }
    attrs
}

/// Builder for creating variables with various attributes.
#[derive(Debug, Default)]
pub struct VariableBuilder {
    size: usize,
    name: Option<String>,
    boolean_idx: Vec<usize>,
    integer_idx: Vec<usize>,
    attributes: VarAttributes,
}

impl VariableBuilder {
    /// Create a new variable builder for a variable of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Set the name of the variable.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Flag the given components as boolean.
    pub fn boolean(mut self, idx: impl Into<Vec<usize>>) -> Self {
        self.boolean_idx = idx.into();
        self
    }

    /// Flag the given components as integer.
    pub fn integer(mut self, idx: impl Into<Vec<usize>>) -> Self {
        self.integer_idx = idx.into();
        self
    }

    /// Restrict the variable to be non-negative.
    pub fn nonneg(mut self) -> Self {
        self.attributes.nonneg = true;
        self.attributes.nonpos = false; // Can't be both
        self
    }

    /// Restrict the variable to be non-positive.
    pub fn nonpos(mut self) -> Self {
        self.attributes.nonpos = true;
        self.attributes.nonneg = false; // Can't be both
        self
    }

    /// Mark the variable as positive semidefinite.
    pub fn psd(mut self) -> Self {
        self.attributes.psd = true;
        self
    }

    /// Build the variable, validating the index lists.
    pub fn build(self) -> Result<Variable> {
        for &i in self.boolean_idx.iter().chain(self.integer_idx.iter()) {
            if i >= self.size {
                return Err(StuffingError::InvalidProblem(format!(
                    "variable index {} out of range for size {}",
                    i, self.size
                )));
            }
        }
        Ok(Variable {
            id: VarId::new(),
            size: self.size,
            name: self.name,
            boolean_idx: self.boolean_idx,
            integer_idx: self.integer_idx,
            attributes: self.attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_builder() {
        let x = VariableBuilder::new(5)
            .name("x")
            .boolean(vec![0, 2])
            .build()
            .unwrap();

        assert_eq!(x.size(), 5);
        assert_eq!(x.name(), Some("x"));
        assert_eq!(x.boolean_idx(), &[0, 2]);
        assert!(x.is_mixed_integer());
    }

    #[test]
    fn test_continuous_variable_not_mip() {
        let x = Variable::new(3);
        assert!(!x.is_mixed_integer());
        assert!(x.attributes().is_empty());
    }

    #[test]
    fn test_index_out_of_range() {
        let result = VariableBuilder::new(3).integer(vec![3]).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_convex_attributes() {
        let plain = Variable::new(2);
        assert!(convex_attributes(&[&plain]).is_empty());

        let signed = VariableBuilder::new(2).nonneg().build().unwrap();
        assert_eq!(convex_attributes(&[&plain, &signed]), vec!["nonneg"]);

        let structured = VariableBuilder::new(4).psd().build().unwrap();
        assert_eq!(
            convex_attributes(&[&signed, &structured]),
            vec!["nonneg", "psd"]
        );
    }

    #[test]
    fn test_unique_ids() {
        let a = Variable::new(1);
        let b = Variable::new(1);
        assert_ne!(a.id(), b.id());
    }
}
