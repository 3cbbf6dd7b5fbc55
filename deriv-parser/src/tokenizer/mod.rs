pub mod error;
pub mod token;

use deriv_error::Error;
use error::{InvalidDecimal, UnclosedParenthesis, UnknownChar, UnknownName};
use logos::{Lexer, Logos};
use std::ops::Range;
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer.
///
/// This is the fallible half of lexing: characters outside the grammar, alphabetic runs that are
/// not function names, and stray decimal separators are rejected here, and parenthesis balance is
/// verified with a running stack of open parentheses. A `)` with no matching `(` fails at that
/// token; a surplus `(` fails once the whole input has been scanned. On failure no token sequence
/// is produced at all.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();
    let mut open_parens: Vec<Range<usize>> = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let kind = match result {
            Ok(TokenKind::Symbol) | Err(()) => {
                return Err(Error::new(vec![span], UnknownChar));
            },
            Ok(TokenKind::Name) => {
                return Err(Error::new(vec![span], UnknownName {
                    name: lexer.slice().to_string(),
                }));
            },
            Ok(TokenKind::Dot) => return Err(Error::new(vec![span], InvalidDecimal)),
            Ok(kind) => kind,
        };

        match kind {
            TokenKind::OpenParen => open_parens.push(span.clone()),
            TokenKind::CloseParen => {
                if open_parens.pop().is_none() {
                    return Err(Error::new(vec![span], UnclosedParenthesis { opening: false }));
                }
            },
            _ => {},
        }

        tokens.push(Token {
            span,
            kind,
            lexeme: lexer.slice(),
        });
    }

    if let Some(span) = open_parens.pop() {
        return Err(Error::new(vec![span], UnclosedParenthesis { opening: true }));
    }

    Ok(tokens.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(
        input: &'source str,
        expected: [(TokenKind, &'source str); N],
    ) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn integer_constant() {
        compare_tokens("421", [(TokenKind::Num, "421")]);
    }

    #[test]
    fn decimal_constant() {
        compare_tokens("301.875", [(TokenKind::Num, "301.875")]);
    }

    #[test]
    fn functions_and_operands() {
        compare_tokens(
            "sin cos + tan cot 10 ^ log x",
            [
                (TokenKind::Sin, "sin"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Cos, "cos"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Tan, "tan"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Cot, "cot"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Num, "10"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Exp, "^"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Log, "log"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Var, "x"),
            ],
        );
    }

    #[test]
    fn full_expr() {
        compare_tokens(
            "7+ cos(2 + x) ^2* 3 - 5.234",
            [
                (TokenKind::Num, "7"),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Cos, "cos"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Num, "2"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Var, "x"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Exp, "^"),
                (TokenKind::Num, "2"),
                (TokenKind::Mul, "*"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Num, "3"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Sub, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Num, "5.234"),
            ],
        );
    }

    #[test]
    fn complete_stream_keeps_lexemes() {
        let tokens = tokenize_complete("3.5+x").unwrap();
        let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();
        assert_eq!(kinds, [TokenKind::Num, TokenKind::Add, TokenKind::Var]);
        assert_eq!(tokens[0].lexeme, "3.5");
        assert_eq!(tokens[0].span, 0..3);
    }

    #[test]
    fn unknown_name_fails() {
        let err = tokenize_complete("2 + e").unwrap_err();
        assert_eq!(err.spans, vec![4..5]);
        assert!(format!("{:?}", err.kind).contains("UnknownName"));
    }

    #[test]
    fn unknown_character_fails() {
        assert!(tokenize_complete("2 $ 3").is_err());
        assert!(tokenize_complete("1\n2").is_err());
    }

    #[test]
    fn run_of_letters_is_not_split_into_functions() {
        // `sincos` must not lex as `sin` followed by `cos`
        assert!(tokenize_complete("sincos(2)").is_err());
    }

    #[test]
    fn stray_decimal_separator_fails() {
        assert!(tokenize_complete("3.").is_err());
        assert!(tokenize_complete(".5").is_err());
        assert!(tokenize_complete("1.5.2").is_err());
    }

    #[test]
    fn unbalanced_parentheses_fail() {
        let err = tokenize_complete("(3").unwrap_err();
        assert!(format!("{:?}", err.kind).contains("opening: true"));

        let err = tokenize_complete("3))").unwrap_err();
        assert!(format!("{:?}", err.kind).contains("opening: false"));

        assert!(tokenize_complete("cos(3)))").is_err());
    }

    #[test]
    fn balanced_parentheses_pass() {
        assert!(tokenize_complete("((3 + x) * (1 - x))").is_ok());
    }
}
