use tracing::debug;

use crate::error::ToolkitError;

/// Add two integers, reporting overflow instead of wrapping.
pub fn add_numbers(a: i64, b: i64) -> Result<i64, ToolkitError> {
    a.checked_add(b).ok_or_else(|| ToolkitError::overflow("add_numbers"))
}

/// Divide `a` by `b`, returning `None` instead of a non-finite result when `b` is zero.
pub fn safe_divide(a: f64, b: f64) -> Option<f64> {
    if b == 0.0 {
        debug!(numerator = a, "safe_divide: zero denominator");
        return None;
    }
    Some(a / b)
}

/// Accumulator with chainable operations.
///
/// ```
/// use toolkit::Calculator;
///
/// let result = Calculator::new(10.0).add(5.0).subtract(3.0).get_result();
/// assert_eq!(result, 12.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Calculator {
    value: f64,
}

impl Calculator {
    pub fn new(initial_value: f64) -> Self {
        Self {
            value: initial_value,
        }
    }

    pub fn add(&mut self, amount: f64) -> &mut Self {
        self.value += amount;
        self
    }

    pub fn subtract(&mut self, amount: f64) -> &mut Self {
        self.value -= amount;
        self
    }

    pub fn get_result(&self) -> f64 {
        self.value
    }
}
