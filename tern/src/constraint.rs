//! Relations between a linear expression and zero.

use crate::expression::Expression;
use crate::strength;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CONSTRAINT_ID: AtomicU64 = AtomicU64::new(1);

/// The relation a constraint imposes between its expression and zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationalOperator {
    LessOrEqual,
    GreaterOrEqual,
    Equal,
}

impl RelationalOperator {
    /// The relation's source symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            RelationalOperator::LessOrEqual => "<=",
            RelationalOperator::GreaterOrEqual => ">=",
            RelationalOperator::Equal => "==",
        }
    }
}

impl fmt::Display for RelationalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A requirement that a linear expression relate to zero.
///
/// `Constraint::new(lhs, op, rhs, s)` stores `lhs - rhs` in reduced form,
/// so the right-hand side of the stored relation is always zero. Building
/// a constraint performs no solving; it is the data handed to the solver.
///
/// Constraints carry identity: clones compare equal, while two constraints
/// built from identical inputs do not.
#[derive(Debug, Clone, Serialize)]
pub struct Constraint {
    expression: Expression,
    operator: RelationalOperator,
    strength: f64,
    #[serde(skip)]
    id: u64,
}

impl Constraint {
    /// Create a constraint `lhs operator rhs` at the given strength.
    ///
    /// Both sides accept anything convertible to an expression: variables,
    /// terms, expressions, or plain numbers. The strength is clipped into
    /// `[0, REQUIRED]`.
    pub fn new(
        lhs: impl Into<Expression>,
        operator: RelationalOperator,
        rhs: impl Into<Expression>,
        strength: f64,
    ) -> Constraint {
        let expression = (lhs.into() - rhs.into()).reduced();
        Constraint {
            expression,
            operator,
            strength: strength::clip(strength),
            id: NEXT_CONSTRAINT_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// The reduced left-hand expression; the right-hand side is zero.
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// The relation against zero.
    pub fn operator(&self) -> RelationalOperator {
        self.operator
    }

    /// The clipped strength.
    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// The constraint's identity. Unique per created constraint and never
    /// reused within a process; clones share it.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Constraint {}

impl Hash for Constraint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} 0 [strength {}]",
            self.expression,
            self.operator.symbol(),
            self.strength
        )
    }
}
