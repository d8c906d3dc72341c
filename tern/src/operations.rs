//! Operator dispatch across the algebra's operand kinds.
//!
//! Two layers produce identical results. The `std::ops` implementations at
//! the bottom of this module cover exactly the operand pairs the algebra
//! defines, so invalid combinations do not compile. For callers whose
//! operand kinds are only known at runtime, [`binary_operation`] and
//! [`unary_operation`] apply the same table over the [`Operand`] union and
//! reject undefined pairs with [`TernError::TypeMismatch`].

use crate::error::TernError;
use crate::expression::Expression;
use crate::term::Term;
use crate::variable::Variable;
use crate::TernResult;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Binary operators defined by the algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// The operator's source symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unary operators defined by the algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
}

impl UnaryOperator {
    /// The operator's source symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A runtime tagged algebra value.
///
/// The union is closed: every operand the dispatch table knows is one of
/// these four kinds, and every pair is either handled or rejected below.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Number(f64),
    Variable(Variable),
    Term(Term),
    Expression(Expression),
}

impl Operand {
    /// The kind name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Number(_) => "number",
            Operand::Variable(_) => "Variable",
            Operand::Term(_) => "Term",
            Operand::Expression(_) => "Expression",
        }
    }
}

impl From<f64> for Operand {
    fn from(number: f64) -> Self {
        Operand::Number(number)
    }
}

impl From<Variable> for Operand {
    fn from(variable: Variable) -> Self {
        Operand::Variable(variable)
    }
}

impl From<Term> for Operand {
    fn from(term: Term) -> Self {
        Operand::Term(term)
    }
}

impl From<Expression> for Operand {
    fn from(expression: Expression) -> Self {
        Operand::Expression(expression)
    }
}

/// Apply a binary operator to two runtime operands.
///
/// Addition and subtraction are defined whenever the left operand is
/// symbolic; multiplication needs a number on one side and division a
/// number divisor, keeping the algebra linear by construction. A number on
/// the left is only defined for multiplication.
pub fn binary_operation(
    left: Operand,
    operator: BinaryOperator,
    right: Operand,
) -> TernResult<Operand> {
    let found = (left.type_name(), right.type_name());
    match (left, right) {
        (Operand::Variable(left), Operand::Variable(right)) => match operator {
            BinaryOperator::Add => Ok(Operand::Expression(left + right)),
            BinaryOperator::Subtract => Ok(Operand::Expression(left - right)),
            BinaryOperator::Multiply => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number on one side",
                found.0,
                found.1,
            )),
            BinaryOperator::Divide => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number divisor",
                found.0,
                found.1,
            )),
        },
        (Operand::Variable(left), Operand::Term(right)) => match operator {
            BinaryOperator::Add => Ok(Operand::Expression(left + right)),
            BinaryOperator::Subtract => Ok(Operand::Expression(left - right)),
            BinaryOperator::Multiply => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number on one side",
                found.0,
                found.1,
            )),
            BinaryOperator::Divide => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number divisor",
                found.0,
                found.1,
            )),
        },
        (Operand::Variable(left), Operand::Expression(right)) => match operator {
            BinaryOperator::Add => Ok(Operand::Expression(left + right)),
            BinaryOperator::Subtract => Ok(Operand::Expression(left - right)),
            BinaryOperator::Multiply => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number on one side",
                found.0,
                found.1,
            )),
            BinaryOperator::Divide => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number divisor",
                found.0,
                found.1,
            )),
        },
        (Operand::Variable(left), Operand::Number(right)) => match operator {
            BinaryOperator::Add => Ok(Operand::Expression(left + right)),
            BinaryOperator::Subtract => Ok(Operand::Expression(left - right)),
            BinaryOperator::Multiply => Ok(Operand::Term(left * right)),
            BinaryOperator::Divide => Ok(Operand::Term(left / right)),
        },
        (Operand::Term(left), Operand::Variable(right)) => match operator {
            BinaryOperator::Add => Ok(Operand::Expression(left + right)),
            BinaryOperator::Subtract => Ok(Operand::Expression(left - right)),
            BinaryOperator::Multiply => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number on one side",
                found.0,
                found.1,
            )),
            BinaryOperator::Divide => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number divisor",
                found.0,
                found.1,
            )),
        },
        (Operand::Term(left), Operand::Term(right)) => match operator {
            BinaryOperator::Add => Ok(Operand::Expression(left + right)),
            BinaryOperator::Subtract => Ok(Operand::Expression(left - right)),
            BinaryOperator::Multiply => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number on one side",
                found.0,
                found.1,
            )),
            BinaryOperator::Divide => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number divisor",
                found.0,
                found.1,
            )),
        },
        (Operand::Term(left), Operand::Expression(right)) => match operator {
            BinaryOperator::Add => Ok(Operand::Expression(left + right)),
            BinaryOperator::Subtract => Ok(Operand::Expression(left - right)),
            BinaryOperator::Multiply => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number on one side",
                found.0,
                found.1,
            )),
            BinaryOperator::Divide => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number divisor",
                found.0,
                found.1,
            )),
        },
        (Operand::Term(left), Operand::Number(right)) => match operator {
            BinaryOperator::Add => Ok(Operand::Expression(left + right)),
            BinaryOperator::Subtract => Ok(Operand::Expression(left - right)),
            BinaryOperator::Multiply => Ok(Operand::Term(left * right)),
            BinaryOperator::Divide => Ok(Operand::Term(left / right)),
        },
        (Operand::Expression(left), Operand::Variable(right)) => match operator {
            BinaryOperator::Add => Ok(Operand::Expression(left + right)),
            BinaryOperator::Subtract => Ok(Operand::Expression(left - right)),
            BinaryOperator::Multiply => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number on one side",
                found.0,
                found.1,
            )),
            BinaryOperator::Divide => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number divisor",
                found.0,
                found.1,
            )),
        },
        (Operand::Expression(left), Operand::Term(right)) => match operator {
            BinaryOperator::Add => Ok(Operand::Expression(left + right)),
            BinaryOperator::Subtract => Ok(Operand::Expression(left - right)),
            BinaryOperator::Multiply => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number on one side",
                found.0,
                found.1,
            )),
            BinaryOperator::Divide => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number divisor",
                found.0,
                found.1,
            )),
        },
        (Operand::Expression(left), Operand::Expression(right)) => match operator {
            BinaryOperator::Add => Ok(Operand::Expression(left + right)),
            BinaryOperator::Subtract => Ok(Operand::Expression(left - right)),
            BinaryOperator::Multiply => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number on one side",
                found.0,
                found.1,
            )),
            BinaryOperator::Divide => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a number divisor",
                found.0,
                found.1,
            )),
        },
        (Operand::Expression(left), Operand::Number(right)) => match operator {
            BinaryOperator::Add => Ok(Operand::Expression(left + right)),
            BinaryOperator::Subtract => Ok(Operand::Expression(left - right)),
            BinaryOperator::Multiply => Ok(Operand::Expression(left * right)),
            BinaryOperator::Divide => Ok(Operand::Expression(left / right)),
        },
        (Operand::Number(left), Operand::Variable(right)) => match operator {
            BinaryOperator::Multiply => Ok(Operand::Term(left * right)),
            BinaryOperator::Add | BinaryOperator::Subtract => {
                Err(TernError::binary_mismatch(
                    operator.symbol(),
                    "a Variable, Term, or Expression on the left",
                    found.0,
                    found.1,
                ))
            }
            BinaryOperator::Divide => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a Variable, Term, or Expression dividend",
                found.0,
                found.1,
            )),
        },
        (Operand::Number(left), Operand::Term(right)) => match operator {
            BinaryOperator::Multiply => Ok(Operand::Term(left * right)),
            BinaryOperator::Add | BinaryOperator::Subtract => {
                Err(TernError::binary_mismatch(
                    operator.symbol(),
                    "a Variable, Term, or Expression on the left",
                    found.0,
                    found.1,
                ))
            }
            BinaryOperator::Divide => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a Variable, Term, or Expression dividend",
                found.0,
                found.1,
            )),
        },
        (Operand::Number(left), Operand::Expression(right)) => match operator {
            BinaryOperator::Multiply => Ok(Operand::Expression(left * right)),
            BinaryOperator::Add | BinaryOperator::Subtract => {
                Err(TernError::binary_mismatch(
                    operator.symbol(),
                    "a Variable, Term, or Expression on the left",
                    found.0,
                    found.1,
                ))
            }
            BinaryOperator::Divide => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a Variable, Term, or Expression dividend",
                found.0,
                found.1,
            )),
        },
        (Operand::Number(_), Operand::Number(_)) => match operator {
            BinaryOperator::Multiply => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a Variable, Term, or Expression on one side",
                found.0,
                found.1,
            )),
            BinaryOperator::Add | BinaryOperator::Subtract => {
                Err(TernError::binary_mismatch(
                    operator.symbol(),
                    "a Variable, Term, or Expression on the left",
                    found.0,
                    found.1,
                ))
            }
            BinaryOperator::Divide => Err(TernError::binary_mismatch(
                operator.symbol(),
                "a Variable, Term, or Expression dividend",
                found.0,
                found.1,
            )),
        },
    }
}

/// Apply a unary operator to one runtime operand.
///
/// Negation is defined for every symbolic operand; a bare number is not
/// part of the algebra.
pub fn unary_operation(operator: UnaryOperator, operand: Operand) -> TernResult<Operand> {
    match operand {
        Operand::Variable(variable) => Ok(Operand::Term(-variable)),
        Operand::Term(term) => Ok(Operand::Term(-term)),
        Operand::Expression(expression) => Ok(Operand::Expression(-expression)),
        Operand::Number(_) => Err(TernError::type_mismatch(
            operator.symbol(),
            "a Variable, Term, or Expression",
            "number",
        )),
    }
}

// Variable on the left.

impl Add<Variable> for Variable {
    type Output = Expression;

    fn add(self, rhs: Variable) -> Expression {
        Expression::new(vec![Term::from(self), Term::from(rhs)], 0.0)
    }
}

impl Add<Term> for Variable {
    type Output = Expression;

    fn add(self, rhs: Term) -> Expression {
        Expression::new(vec![Term::from(self), rhs], 0.0)
    }
}

impl Add<Expression> for Variable {
    type Output = Expression;

    fn add(self, rhs: Expression) -> Expression {
        let mut terms = Vec::with_capacity(rhs.terms.len() + 1);
        terms.push(Term::from(self));
        terms.extend(rhs.terms);
        Expression::new(terms, rhs.constant)
    }
}

impl Add<f64> for Variable {
    type Output = Expression;

    fn add(self, rhs: f64) -> Expression {
        Expression::new(vec![Term::from(self)], rhs)
    }
}

impl Sub<Variable> for Variable {
    type Output = Expression;

    fn sub(self, rhs: Variable) -> Expression {
        self + -rhs
    }
}

impl Sub<Term> for Variable {
    type Output = Expression;

    fn sub(self, rhs: Term) -> Expression {
        self + -rhs
    }
}

impl Sub<Expression> for Variable {
    type Output = Expression;

    fn sub(self, rhs: Expression) -> Expression {
        self + -rhs
    }
}

impl Sub<f64> for Variable {
    type Output = Expression;

    fn sub(self, rhs: f64) -> Expression {
        self + -rhs
    }
}

impl Mul<f64> for Variable {
    type Output = Term;

    fn mul(self, rhs: f64) -> Term {
        Term::new(self, rhs)
    }
}

impl Div<f64> for Variable {
    type Output = Term;

    fn div(self, rhs: f64) -> Term {
        Term::new(self, 1.0 / rhs)
    }
}

impl Neg for Variable {
    type Output = Term;

    fn neg(self) -> Term {
        Term::new(self, -1.0)
    }
}

// Term on the left.

impl Add<Variable> for Term {
    type Output = Expression;

    fn add(self, rhs: Variable) -> Expression {
        Expression::new(vec![self, Term::from(rhs)], 0.0)
    }
}

impl Add<Term> for Term {
    type Output = Expression;

    fn add(self, rhs: Term) -> Expression {
        Expression::new(vec![self, rhs], 0.0)
    }
}

impl Add<Expression> for Term {
    type Output = Expression;

    fn add(self, rhs: Expression) -> Expression {
        let mut terms = Vec::with_capacity(rhs.terms.len() + 1);
        terms.push(self);
        terms.extend(rhs.terms);
        Expression::new(terms, rhs.constant)
    }
}

impl Add<f64> for Term {
    type Output = Expression;

    fn add(self, rhs: f64) -> Expression {
        Expression::new(vec![self], rhs)
    }
}

impl Sub<Variable> for Term {
    type Output = Expression;

    fn sub(self, rhs: Variable) -> Expression {
        self + -rhs
    }
}

impl Sub<Term> for Term {
    type Output = Expression;

    fn sub(self, rhs: Term) -> Expression {
        self + -rhs
    }
}

impl Sub<Expression> for Term {
    type Output = Expression;

    fn sub(self, rhs: Expression) -> Expression {
        self + -rhs
    }
}

impl Sub<f64> for Term {
    type Output = Expression;

    fn sub(self, rhs: f64) -> Expression {
        self + -rhs
    }
}

impl Mul<f64> for Term {
    type Output = Term;

    fn mul(self, rhs: f64) -> Term {
        Term::new(self.variable, self.coefficient * rhs)
    }
}

impl Div<f64> for Term {
    type Output = Term;

    fn div(self, rhs: f64) -> Term {
        Term::new(self.variable, self.coefficient / rhs)
    }
}

impl Neg for Term {
    type Output = Term;

    fn neg(self) -> Term {
        Term::new(self.variable, -self.coefficient)
    }
}

// Expression on the left.

impl Add<Variable> for Expression {
    type Output = Expression;

    fn add(mut self, rhs: Variable) -> Expression {
        self.terms.push(Term::from(rhs));
        self
    }
}

impl Add<Term> for Expression {
    type Output = Expression;

    fn add(mut self, rhs: Term) -> Expression {
        self.terms.push(rhs);
        self
    }
}

impl Add<Expression> for Expression {
    type Output = Expression;

    fn add(mut self, rhs: Expression) -> Expression {
        self.terms.extend(rhs.terms);
        self.constant += rhs.constant;
        self
    }
}

impl Add<f64> for Expression {
    type Output = Expression;

    fn add(mut self, rhs: f64) -> Expression {
        self.constant += rhs;
        self
    }
}

impl Sub<Variable> for Expression {
    type Output = Expression;

    fn sub(self, rhs: Variable) -> Expression {
        self + -rhs
    }
}

impl Sub<Term> for Expression {
    type Output = Expression;

    fn sub(self, rhs: Term) -> Expression {
        self + -rhs
    }
}

impl Sub<Expression> for Expression {
    type Output = Expression;

    fn sub(self, rhs: Expression) -> Expression {
        self + -rhs
    }
}

impl Sub<f64> for Expression {
    type Output = Expression;

    fn sub(self, rhs: f64) -> Expression {
        self + -rhs
    }
}

impl Mul<f64> for Expression {
    type Output = Expression;

    fn mul(self, rhs: f64) -> Expression {
        let terms = self.terms.into_iter().map(|term| term * rhs).collect();
        Expression::new(terms, self.constant * rhs)
    }
}

impl Div<f64> for Expression {
    type Output = Expression;

    fn div(self, rhs: f64) -> Expression {
        let terms = self.terms.into_iter().map(|term| term / rhs).collect();
        Expression::new(terms, self.constant / rhs)
    }
}

impl Neg for Expression {
    type Output = Expression;

    fn neg(self) -> Expression {
        let terms = self.terms.into_iter().map(|term| -term).collect();
        Expression::new(terms, -self.constant)
    }
}

// Number on the left, multiplication only.

impl Mul<Variable> for f64 {
    type Output = Term;

    fn mul(self, rhs: Variable) -> Term {
        Term::new(rhs, self)
    }
}

impl Mul<Term> for f64 {
    type Output = Term;

    fn mul(self, rhs: Term) -> Term {
        rhs * self
    }
}

impl Mul<Expression> for f64 {
    type Output = Expression;

    fn mul(self, rhs: Expression) -> Expression {
        rhs * self
    }
}
