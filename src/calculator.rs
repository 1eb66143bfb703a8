/// Calculator for basic arithmetic operations.
///
/// The `result` field starts at zero and is never read or written by
/// [`Calculator::add`] or [`Calculator::multiply`]; both methods compute
/// from their arguments alone. Callers may mutate the field directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    pub result: f64,
}

impl Calculator {
    /// Creates a calculator with `result` set to zero.
    pub fn new() -> Self {
        Self { result: 0.0 }
    }

    /// Adds two numbers and returns the sum.
    ///
    /// No validation is performed; non-finite inputs follow IEEE-754
    /// addition semantics.
    pub fn add(&self, x: f64, y: f64) -> f64 {
        x + y
    }

    /// Multiplies two numbers and returns the product.
    ///
    /// Same contract shape as [`Calculator::add`].
    pub fn multiply(&self, x: f64, y: f64) -> f64 {
        x * y
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
