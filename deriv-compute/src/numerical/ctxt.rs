use crate::primitive::complex;
use rug::Complex;

/// The evaluation context: the complex value bound to the free variable for one evaluation pass.
///
/// A context never changes while a tree is being folded, and evaluation never mutates the tree,
/// so the same read-only tree can be evaluated under any number of contexts.
#[derive(Debug, Clone, PartialEq)]
pub struct Ctxt {
    var: Complex,
}

impl Ctxt {
    /// Creates a context binding the variable to the given value.
    pub fn new(var: Complex) -> Self {
        Self { var }
    }

    /// Creates a context binding the variable to a real value.
    pub fn real(var: f64) -> Self {
        Self::new(complex(var))
    }

    /// The value bound to the variable.
    pub fn var(&self) -> &Complex {
        &self.var
    }
}

impl From<Complex> for Ctxt {
    fn from(var: Complex) -> Self {
        Self::new(var)
    }
}
