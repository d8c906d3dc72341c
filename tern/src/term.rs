use crate::operations::Operand;
use crate::variable::Variable;
use crate::{TernError, TernResult};
use serde::Serialize;
use std::fmt;

/// A single `coefficient * variable` product.
///
/// Terms are immutable values: the arithmetic operators return new terms or
/// expressions and never modify their operands. The variable is held as a
/// shared handle, so a term keeps its variable alive but never copies it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Term {
    pub(crate) variable: Variable,
    pub(crate) coefficient: f64,
}

impl Term {
    /// Create a term scaling `variable` by `coefficient`.
    pub fn new(variable: Variable, coefficient: f64) -> Self {
        Term {
            variable,
            coefficient,
        }
    }

    /// Build a term from loosely typed operands, checking both positions.
    ///
    /// The coefficient defaults to `1.0` when absent. A non-variable first
    /// operand or a non-number coefficient is a type mismatch.
    pub fn from_operands(variable: Operand, coefficient: Option<Operand>) -> TernResult<Term> {
        let variable = match variable {
            Operand::Variable(variable) => variable,
            other => {
                return Err(TernError::type_mismatch(
                    "Term",
                    "a Variable as the first operand",
                    other.type_name(),
                ))
            }
        };
        let coefficient = match coefficient {
            None => 1.0,
            Some(Operand::Number(coefficient)) => coefficient,
            Some(other) => {
                return Err(TernError::type_mismatch(
                    "Term",
                    "a number coefficient",
                    other.type_name(),
                ))
            }
        };
        Ok(Term::new(variable, coefficient))
    }

    /// The variable this term scales, as the shared handle itself.
    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    /// The scale applied to the variable.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// The term's current worth: `coefficient * variable.value()`.
    pub fn value(&self) -> f64 {
        self.coefficient * self.variable.value()
    }
}

impl From<Variable> for Term {
    /// A bare variable is the term `1.0 * variable`.
    fn from(variable: Variable) -> Self {
        Term::new(variable, 1.0)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} * {}", self.coefficient, self.variable.name())
    }
}
