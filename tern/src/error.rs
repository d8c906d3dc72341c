use std::fmt;

/// Error type for the expression algebra.
///
/// The algebra is total once operand types line up, so the only failure
/// mode is an operator or constructor applied to operands it is not
/// defined for. Numeric edge cases are not errors at this layer: division
/// by zero and overflow follow IEEE 754 and flow into the resulting values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TernError {
    /// An operator or constructor was applied to operand types for which
    /// the linear algebra defines no result.
    TypeMismatch {
        /// Operator symbol or constructor name that was attempted.
        operation: &'static str,
        /// What the operation accepts in the offending position.
        expected: &'static str,
        /// Type names of the operands as given.
        found: String,
    },
}

impl TernError {
    /// Create a type mismatch for a single offending operand.
    pub fn type_mismatch(
        operation: &'static str,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            operation,
            expected,
            found: found.into(),
        }
    }

    /// Create a type mismatch naming both operands of a binary operator.
    pub fn binary_mismatch(
        operation: &'static str,
        expected: &'static str,
        left: &'static str,
        right: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            operation,
            expected,
            found: format!("{} and {}", left, right),
        }
    }
}

impl fmt::Display for TernError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TernError::TypeMismatch {
                operation,
                expected,
                found,
            } => write!(
                f,
                "type mismatch: '{}' expects {}, found {}",
                operation, expected, found
            ),
        }
    }
}

impl std::error::Error for TernError {}
