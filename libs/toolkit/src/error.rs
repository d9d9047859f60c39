use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolkitError {
    #[error("Division by zero: {numerator} / 0")]
    DivisionByZero { numerator: i64 },

    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },
}

impl ToolkitError {
    pub fn division_by_zero(numerator: i64) -> Self {
        Self::DivisionByZero { numerator }
    }

    pub fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }
}
