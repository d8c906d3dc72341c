//! # Tern
//!
//! **Symbolic linear expression algebra for Cassowary style solvers**
//!
//! Tern sits between user-facing constraint declarations and an incremental
//! linear-constraint solver: it builds `coefficient * variable` terms,
//! combines them with the standard arithmetic operators into expressions,
//! and relates expressions to zero as constraints ready to hand over. It
//! performs no solving itself.
//!
//! ## Quick Start
//!
//! ```rust
//! use tern::{strength, Constraint, RelationalOperator, Variable};
//!
//! let width = Variable::new("width");
//! let height = Variable::new("height");
//!
//! // 2 * width + height - 480
//! let perimeter = width.clone() * 2.0 + height.clone() - 480.0;
//!
//! // 2 * width + height == 480, at required strength
//! let constraint = Constraint::new(
//!     perimeter,
//!     RelationalOperator::Equal,
//!     0.0,
//!     strength::REQUIRED,
//! );
//!
//! assert_eq!(constraint.expression().terms().len(), 2);
//! assert_eq!(constraint.expression().constant(), -480.0);
//! ```
//!
//! ## Core Concepts
//!
//! ### Variables
//! A [`Variable`] is a cheap shared handle to a solver-tracked unknown.
//! Clones refer to the same unknown; equality and hashing follow identity,
//! not name or value. The solver writes results back through
//! [`Variable::set_value`] and every handle observes them.
//!
//! ### Terms and Expressions
//! A [`Term`] scales one variable by a coefficient; an [`Expression`] is an
//! ordered sum of terms plus a constant. Both are immutable values: every
//! operator allocates a new value and leaves its operands untouched.
//! Duplicate variables are kept as separate terms until
//! [`Expression::reduced`] merges them.
//!
//! ### Linearity
//! Multiplication and division require a plain number on the appropriate
//! side. Anything non-linear, such as multiplying two terms, is rejected
//! with [`TernError::TypeMismatch`] at the dynamic layer and does not
//! compile at the static one.
//!
//! ### Constraints
//! A [`Constraint`] relates a reduced expression to zero through `<=`, `>=`,
//! or `==` at a given [`strength`]. It is plain data for the solver.

pub mod constraint;
pub mod error;
pub mod expression;
pub mod operations;
pub mod serializers;
pub mod strength;
pub mod term;
pub mod variable;

pub use constraint::{Constraint, RelationalOperator};
pub use error::TernError;
pub use expression::Expression;
pub use operations::{binary_operation, unary_operation, BinaryOperator, Operand, UnaryOperator};
pub use term::Term;
pub use variable::Variable;

/// Result type for algebra operations
pub type TernResult<T> = Result<T, TernError>;

#[cfg(test)]
mod tests;
