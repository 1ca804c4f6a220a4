//! tpc-lex — lexical analysis for the Tiny Pascal-dialect compiler.
//!
//! Turns source text into an ordered token vector. Whitespace is the only
//! separator (the dialect has no comment syntax); on the first
//! unrecognized character the stage aborts with a [`LexError`] — there is
//! no recovery, matching spec.md §4.1/§7.

mod cursor;
mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::lex;
pub use token::{keyword_from_upper, Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        lex(src).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lexes_keywords_case_insensitively() {
        assert_eq!(kinds("program"), vec![TokenKind::Prog]);
        assert_eq!(kinds("PROGRAM"), vec![TokenKind::Prog]);
        assert_eq!(kinds("PrOgRaM"), vec![TokenKind::Prog]);
    }

    #[test]
    fn lexes_identifier_and_intconst() {
        assert_eq!(
            kinds("foo 42"),
            vec![TokenKind::Ident("foo".into()), TokenKind::IntConst(42)]
        );
    }

    #[test]
    fn preserves_identifier_casing_in_lexeme() {
        let tokens = lex("FooBar").unwrap();
        assert_eq!(tokens[0].lexeme, "FooBar");
        assert_eq!(tokens[0].kind, TokenKind::Ident("FooBar".into()));
    }

    #[test]
    fn multi_char_operators() {
        assert_eq!(
            kinds(":= <= >= <>"),
            vec![
                TokenKind::Assign,
                TokenKind::Le,
                TokenKind::Ge,
                TokenKind::Ne,
            ]
        );
    }

    #[test]
    fn bare_colon_is_colon() {
        assert_eq!(kinds(":"), vec![TokenKind::Colon]);
        assert_eq!(kinds(": x"), vec![TokenKind::Colon, TokenKind::Ident("x".into())]);
    }

    #[test]
    fn single_char_operators_and_punctuation() {
        assert_eq!(
            kinds(", ; . ( ) + - * / = < >"),
            vec![
                TokenKind::Comma,
                TokenKind::SColon,
                TokenKind::Dot,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Mult,
                TokenKind::Div,
                TokenKind::Eq,
                TokenKind::Lt,
                TokenKind::Gt,
            ]
        );
    }

    #[test]
    fn and_or_are_keywords_not_identifiers() {
        assert_eq!(kinds("and or"), vec![TokenKind::And, TokenKind::Or]);
    }

    #[test]
    fn whitespace_and_newlines_are_discarded() {
        assert_eq!(
            kinds("  a\n\tb  \r\n c "),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Ident("b".into()),
                TokenKind::Ident("c".into()),
            ]
        );
    }

    #[test]
    fn unrecognized_character_aborts_with_position() {
        let err = lex("a := 1 @ 2").unwrap_err();
        match err {
            LexError::UnexpectedCharacter { character, span } => {
                assert_eq!(character, '@');
                assert_eq!(span.line, 1);
                assert_eq!(span.column, 8);
            }
            other => panic!("expected UnexpectedCharacter, got {other:?}"),
        }
    }

    #[test]
    fn tracks_line_numbers_across_newlines() {
        let tokens = lex("a\nb").unwrap();
        assert_eq!(tokens[0].span.line, 1);
        assert_eq!(tokens[1].span.line, 2);
    }

    #[test]
    fn keyword_lookup_is_exhaustive_over_table() {
        for kw in [
            "PROGRAM", "PROCEDURE", "VAR", "INTEGER", "BEGIN", "END", "IF", "THEN", "ELSE",
            "WHILE", "DO", "REPEAT", "UNTIL", "READ", "WRITE", "AND", "OR",
        ] {
            assert!(keyword_from_upper(kw).is_some(), "{kw} should be a keyword");
        }
        assert!(keyword_from_upper("NOTAKEYWORD").is_none());
    }
}
