use pretty_assertions::assert_eq;
use treecalc::{
    ast::{Token, TokenCategory},
    error::LexError,
    scan,
};

#[test]
fn scans_literals_and_operators() {
    let tokens = scan("40*4+8").unwrap();

    assert_eq!(tokens,
               vec![Token::literal("40", 0),
                    Token::operator("*", 2),
                    Token::literal("4", 3),
                    Token::operator("+", 4),
                    Token::literal("8", 5),]);
}

#[test]
fn only_literal_and_operator_categories_are_produced() {
    let tokens = scan("12/3-45*6+789").unwrap();

    for token in &tokens {
        assert!(matches!(token.category, TokenCategory::Literal | TokenCategory::Operator),
                "unexpected category {} for {}",
                token.category,
                token.value);
        match token.category {
            TokenCategory::Literal => assert!(token.value.bytes().all(|b| b.is_ascii_digit())),
            _ => assert!(token.value.chars().all(|c| "+-*/".contains(c))),
        }
    }
}

#[test]
fn token_values_reconstruct_the_input() {
    for input in ["0", "40*4+8", "1+2-3*4/5", "999999999999", "+", "1+-*/2", "//", "3--3"] {
        let tokens = scan(input).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(rebuilt, input);
    }
}

#[test]
fn adjacent_operators_form_one_run() {
    let tokens = scan("4+-2").unwrap();

    assert_eq!(tokens,
               vec![Token::literal("4", 0),
                    Token::operator("+-", 1),
                    Token::literal("2", 3),]);
}

#[test]
fn lone_operator_is_a_token() {
    assert_eq!(scan("*").unwrap(), vec![Token::operator("*", 0)]);
}

#[test]
fn invalid_character_is_reported_with_position() {
    assert_eq!(scan("4a"),
               Err(LexError::InvalidCharacter { character: 'a',
                                                position:  1, }));
    assert_eq!(scan("1+2 "),
               Err(LexError::InvalidCharacter { character: ' ',
                                                position:  3, }));
    assert_eq!(scan("(1)"),
               Err(LexError::InvalidCharacter { character: '(',
                                                position:  0, }));
}

#[test]
fn first_invalid_character_wins() {
    assert_eq!(scan("1x2y"),
               Err(LexError::InvalidCharacter { character: 'x',
                                                position:  1, }));
}

#[test]
fn non_ascii_character_is_reported_whole() {
    assert_eq!(scan("12é"),
               Err(LexError::InvalidCharacter { character: 'é',
                                                position:  2, }));
}

#[test]
fn empty_input_is_an_error() {
    assert_eq!(scan(""), Err(LexError::EmptyInput));
}
