//! Linear combinations of terms plus a constant.

use crate::operations::Operand;
use crate::term::Term;
use crate::variable::Variable;
use serde::Serialize;
use std::fmt;

/// An ordered sum of terms plus a constant offset.
///
/// Expressions keep every term they were built from, in the order the terms
/// were combined; duplicate variables are not merged. Call
/// [`Expression::reduced`] when a one-term-per-variable form is needed.
/// Like [`Term`], an expression is an immutable value.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Expression {
    pub(crate) terms: Vec<Term>,
    pub(crate) constant: f64,
}

impl Expression {
    /// Create an expression from terms and a constant offset.
    pub fn new(terms: Vec<Term>, constant: f64) -> Self {
        Expression { terms, constant }
    }

    /// Sum loosely typed operands into one expression.
    ///
    /// Numbers accumulate into the constant; variables, terms, and nested
    /// expressions contribute their terms in the order given. Every operand
    /// kind is summable, so this cannot fail.
    pub fn from_operands<I>(operands: I) -> Expression
    where
        I: IntoIterator<Item = Operand>,
    {
        let mut terms = Vec::new();
        let mut constant = 0.0;
        for operand in operands {
            match operand {
                Operand::Number(number) => constant += number,
                Operand::Variable(variable) => terms.push(Term::from(variable)),
                Operand::Term(term) => terms.push(term),
                Operand::Expression(expression) => {
                    terms.extend(expression.terms);
                    constant += expression.constant;
                }
            }
        }
        Expression::new(terms, constant)
    }

    /// The terms in combination order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The constant offset.
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Whether the expression holds no terms at all.
    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    /// The expression's current worth given each variable's value.
    pub fn value(&self) -> f64 {
        self.terms.iter().map(Term::value).sum::<f64>() + self.constant
    }

    /// A copy with duplicate variables collapsed into one term each.
    ///
    /// Coefficients of merged terms are summed, which may leave a zero
    /// coefficient; such terms are kept. Terms appear in the order their
    /// variable first occurred, and the constant is unchanged.
    pub fn reduced(&self) -> Expression {
        let mut merged: Vec<(Variable, f64)> = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            match merged.iter_mut().find(|(variable, _)| variable == term.variable()) {
                Some((_, coefficient)) => *coefficient += term.coefficient(),
                None => merged.push((term.variable().clone(), term.coefficient())),
            }
        }
        let terms = merged
            .into_iter()
            .map(|(variable, coefficient)| Term::new(variable, coefficient))
            .collect();
        Expression::new(terms, self.constant)
    }
}

impl From<f64> for Expression {
    /// A constant-only expression with no terms.
    fn from(constant: f64) -> Self {
        Expression::new(Vec::new(), constant)
    }
}

impl From<Variable> for Expression {
    fn from(variable: Variable) -> Self {
        Expression::new(vec![Term::from(variable)], 0.0)
    }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        Expression::new(vec![term], 0.0)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "{}", self.constant);
        }
        for (index, term) in self.terms.iter().enumerate() {
            if index > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term)?;
        }
        if self.constant != 0.0 {
            write!(f, " + {}", self.constant)?;
        }
        Ok(())
    }
}
