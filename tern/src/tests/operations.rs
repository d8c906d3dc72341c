use crate::{
    binary_operation, unary_operation, BinaryOperator, Operand, Term, UnaryOperator, Variable,
};

fn sample(kind: &str) -> Operand {
    let x = Variable::new("x");
    match kind {
        "number" => Operand::Number(2.0),
        "Variable" => Operand::Variable(x),
        "Term" => Operand::Term(Term::new(x, 2.0)),
        "Expression" => Operand::Expression(x + 1.0),
        other => panic!("unknown operand kind {}", other),
    }
}

#[test]
fn test_variable_plus_variable_is_two_term_expression() {
    let x = Variable::new("x");
    let y = Variable::new("y");

    let expression = x.clone() + y.clone();

    assert_eq!(expression.terms().len(), 2);
    assert_eq!(*expression.terms()[0].variable(), x);
    assert_eq!(expression.terms()[0].coefficient(), 1.0);
    assert_eq!(*expression.terms()[1].variable(), y);
    assert_eq!(expression.terms()[1].coefficient(), 1.0);
    assert_eq!(expression.constant(), 0.0);
}

#[test]
fn test_term_plus_number_moves_into_constant() {
    let x = Variable::new("x");
    let term = Term::new(x, 2.0);

    let expression = term.clone() + 5.0;

    assert_eq!(expression.terms().len(), 1);
    assert_eq!(expression.terms()[0], term);
    assert_eq!(expression.constant(), 5.0);
}

#[test]
fn test_subtraction_negates_the_right_side() {
    let x = Variable::new("x");
    let y = Variable::new("y");

    let expression = x.clone() - y.clone();

    assert_eq!(expression.terms()[0].coefficient(), 1.0);
    assert_eq!(expression.terms()[1].coefficient(), -1.0);
    assert_eq!(*expression.terms()[1].variable(), y);

    let shifted = Term::new(x, 2.0) - 3.0;
    assert_eq!(shifted.constant(), -3.0);
}

#[test]
fn test_expression_minus_expression_concatenates_negated() {
    let x = Variable::new("x");
    let y = Variable::new("y");

    let left = x * 2.0 + 10.0;
    let right = y * 3.0 + 4.0;
    let difference = left - right;

    assert_eq!(difference.terms().len(), 2);
    assert_eq!(difference.terms()[0].coefficient(), 2.0);
    assert_eq!(difference.terms()[1].coefficient(), -3.0);
    assert_eq!(difference.constant(), 6.0);
}

#[test]
fn test_multiply_scales_a_term() {
    let x = Variable::new("x");
    let term = Term::new(x.clone(), 2.0) * 4.0;

    assert_eq!(term.coefficient(), 8.0);
    assert_eq!(*term.variable(), x);
}

#[test]
fn test_scalar_on_the_left_multiplies() {
    let x = Variable::new("x");
    let y = Variable::new("y");

    assert_eq!((2.0 * x).coefficient(), 2.0);
    assert_eq!((3.0 * Term::new(y.clone(), 2.0)).coefficient(), 6.0);

    let scaled = 2.0 * (y + 1.0);
    assert_eq!(scaled.terms()[0].coefficient(), 2.0);
    assert_eq!(scaled.constant(), 2.0);
}

#[test]
fn test_multiply_distributes_over_expression() {
    let x = Variable::new("x");
    let y = Variable::new("y");

    let expression = (x * 2.0 + y + 3.0) * 4.0;

    assert_eq!(expression.terms()[0].coefficient(), 8.0);
    assert_eq!(expression.terms()[1].coefficient(), 4.0);
    assert_eq!(expression.constant(), 12.0);
}

#[test]
fn test_divide_spreads_over_expression() {
    let x = Variable::new("x");

    let expression = (x * 2.0 + 4.0) / 2.0;

    assert_eq!(expression.terms()[0].coefficient(), 1.0);
    assert_eq!(expression.constant(), 2.0);
}

#[test]
fn test_divide_by_zero_follows_ieee() {
    let x = Variable::new("x");
    let y = Variable::new("y");

    let blown_up = x / 0.0;
    assert!(blown_up.coefficient().is_infinite());
    assert!(blown_up.coefficient() > 0.0);

    let negative = Term::new(y.clone(), -3.0) / 0.0;
    assert!(negative.coefficient().is_infinite());
    assert!(negative.coefficient() < 0.0);

    let undefined = Term::new(y, 0.0) / 0.0;
    assert!(undefined.coefficient().is_nan());
}

#[test]
fn test_negation_of_each_kind() {
    let x = Variable::new("x");

    let negated = -x.clone();
    assert_eq!(negated.coefficient(), -1.0);

    let term = Term::new(x.clone(), 2.0);
    assert_eq!((-(-term.clone())).coefficient(), term.coefficient());

    let expression = -(x * 2.0 + 5.0);
    assert_eq!(expression.terms()[0].coefficient(), -2.0);
    assert_eq!(expression.constant(), -5.0);
}

#[test]
fn test_dynamic_add_matches_static() {
    let x = Variable::new("x");
    let y = Variable::new("y");

    let result = binary_operation(
        Operand::Variable(x.clone()),
        BinaryOperator::Add,
        Operand::Variable(y.clone()),
    )
    .unwrap();

    assert_eq!(result, Operand::Expression(x + y));
}

#[test]
fn test_dynamic_scalar_multiplication_both_sides() {
    let x = Variable::new("x");

    let left = binary_operation(
        Operand::Number(2.0),
        BinaryOperator::Multiply,
        Operand::Variable(x.clone()),
    )
    .unwrap();
    let right = binary_operation(
        Operand::Variable(x.clone()),
        BinaryOperator::Multiply,
        Operand::Number(2.0),
    )
    .unwrap();

    assert_eq!(left, Operand::Term(Term::new(x.clone(), 2.0)));
    assert_eq!(left, right);
}

#[test]
fn test_dynamic_multiply_needs_a_number() {
    let x = Variable::new("x");
    let y = Variable::new("y");

    let error = binary_operation(
        Operand::Term(Term::from(x)),
        BinaryOperator::Multiply,
        Operand::Term(Term::from(y)),
    )
    .unwrap_err();

    let message = error.to_string();
    assert!(message.contains("'*'"));
    assert!(message.contains("Term and Term"));
    assert!(message.contains("a number on one side"));
}

#[test]
fn test_dynamic_rejects_number_on_the_left_of_add() {
    let x = Variable::new("x");

    let error = binary_operation(
        Operand::Number(1.0),
        BinaryOperator::Add,
        Operand::Variable(x),
    )
    .unwrap_err();

    let message = error.to_string();
    assert!(message.contains("'+'"));
    assert!(message.contains("number and Variable"));
    assert!(message.contains("on the left"));
}

#[test]
fn test_dynamic_rejects_symbolic_divisor() {
    let x = Variable::new("x");
    let y = Variable::new("y");

    let error = binary_operation(
        Operand::Expression(x + 1.0),
        BinaryOperator::Divide,
        Operand::Variable(y),
    )
    .unwrap_err();

    let message = error.to_string();
    assert!(message.contains("'/'"));
    assert!(message.contains("Expression and Variable"));
    assert!(message.contains("a number divisor"));
}

#[test]
fn test_dynamic_negate() {
    let x = Variable::new("x");

    let negated = unary_operation(UnaryOperator::Negate, Operand::Variable(x.clone())).unwrap();
    assert_eq!(negated, Operand::Term(Term::new(x, -1.0)));

    let error = unary_operation(UnaryOperator::Negate, Operand::Number(3.0)).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("'-'"));
    assert!(message.contains("number"));
}

#[test]
fn test_dispatch_table_is_exhaustive() {
    let kinds = ["number", "Variable", "Term", "Expression"];
    let operators = [
        BinaryOperator::Add,
        BinaryOperator::Subtract,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
    ];

    for left_kind in kinds {
        for right_kind in kinds {
            for operator in operators {
                let result = binary_operation(sample(left_kind), operator, sample(right_kind));
                let defined = match operator {
                    BinaryOperator::Add | BinaryOperator::Subtract => left_kind != "number",
                    BinaryOperator::Multiply => {
                        (left_kind == "number") != (right_kind == "number")
                    }
                    BinaryOperator::Divide => {
                        left_kind != "number" && right_kind == "number"
                    }
                };

                assert_eq!(
                    result.is_ok(),
                    defined,
                    "{} {} {} should be {}",
                    left_kind,
                    operator,
                    right_kind,
                    if defined { "defined" } else { "rejected" }
                );

                if defined {
                    let expected_kind = match operator {
                        BinaryOperator::Add | BinaryOperator::Subtract => "Expression",
                        BinaryOperator::Multiply | BinaryOperator::Divide => {
                            if left_kind == "Expression" || right_kind == "Expression" {
                                "Expression"
                            } else {
                                "Term"
                            }
                        }
                    };
                    assert_eq!(
                        result.unwrap().type_name(),
                        expected_kind,
                        "{} {} {} has the wrong result kind",
                        left_kind,
                        operator,
                        right_kind
                    );
                }
            }
        }
    }
}
