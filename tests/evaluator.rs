use pretty_assertions::assert_eq;
use treecalc::{
    ast::{Token, Tree},
    error::EvalError,
    evaluate, parse, scan,
};

fn eval_str(src: &str) -> Result<Tree<i64>, EvalError> {
    evaluate(&parse(&scan(src).unwrap()).unwrap())
}

#[test]
fn evaluates_left_to_right_grouping() {
    assert_eq!(eval_str("40*4+8"), Ok(Tree::leaf(480)));
}

#[test]
fn result_is_a_single_leaf() {
    let result = eval_str("1+2*3-4").unwrap();
    assert!(result.is_leaf());
    assert_eq!(result.into_value(), -1);
}

#[test]
fn leaf_evaluates_to_itself() {
    assert_eq!(eval_str("0"), Ok(Tree::leaf(0)));
    assert_eq!(eval_str("9223372036854775807"), Ok(Tree::leaf(i64::MAX)));
}

#[test]
fn four_operators() {
    assert_eq!(eval_str("6+3"), Ok(Tree::leaf(9)));
    assert_eq!(eval_str("6-3"), Ok(Tree::leaf(3)));
    assert_eq!(eval_str("6*3"), Ok(Tree::leaf(18)));
    assert_eq!(eval_str("6/3"), Ok(Tree::leaf(2)));
}

#[test]
fn unknown_operator_symbol_is_an_error() {
    let tree = Tree::node(Token::operator("%", 1),
                          Tree::leaf(Token::literal("7", 0)),
                          Tree::leaf(Token::literal("2", 2)));

    assert_eq!(evaluate(&tree),
               Err(EvalError::UnknownOperator { operator: "%".to_string(),
                                                position: 1, }));
}

#[test]
fn operator_run_is_an_error() {
    assert_eq!(eval_str("4+-2"),
               Err(EvalError::UnknownOperator { operator: "+-".to_string(),
                                                position: 1, }));
}

#[test]
fn literal_in_operator_position_is_an_error() {
    let tree = Tree::node(Token::literal("3", 1),
                          Tree::leaf(Token::literal("1", 0)),
                          Tree::leaf(Token::literal("2", 2)));

    assert_eq!(evaluate(&tree),
               Err(EvalError::UnknownOperator { operator: "3".to_string(),
                                                position: 1, }));
}

#[test]
fn operator_leaf_is_not_a_number() {
    let tree = Tree::leaf(Token::operator("+", 0));

    assert_eq!(evaluate(&tree),
               Err(EvalError::NotANumber { value:    "+".to_string(),
                                           position: 0, }));
}

#[test]
fn oversized_literal_is_an_error() {
    assert_eq!(eval_str("1+9223372036854775808"),
               Err(EvalError::LiteralTooLarge { literal:  "9223372036854775808".to_string(),
                                                position: 2, }));
}

#[test]
fn overflow_is_an_error() {
    assert_eq!(eval_str("9223372036854775807*2"),
               Err(EvalError::Overflow { position: 19 }));
    assert_eq!(eval_str("0-9223372036854775807-2"),
               Ok(Tree::leaf(-9_223_372_036_854_775_805)));
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(eval_str("1/0"), Err(EvalError::DivisionByZero { position: 1 }));
    assert_eq!(eval_str("4/2-2"), Err(EvalError::DivisionByZero { position: 1 }));
}

#[test]
fn zero_divisor_is_harmless_for_other_operators() {
    assert_eq!(eval_str("5*0"), Ok(Tree::leaf(0)));
    assert_eq!(eval_str("5-0"), Ok(Tree::leaf(5)));
}

#[test]
fn operands_are_evaluated_before_the_operator_is_checked() {
    assert_eq!(eval_str("1+-2/0"),
               Err(EvalError::DivisionByZero { position: 4 }));
}
