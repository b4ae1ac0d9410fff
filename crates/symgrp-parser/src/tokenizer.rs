// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Orbifold signature tokenizer using nom combinators
//!
//! Splits a signature into centers, stars, miracles and wonders. Grammar
//! state (which list a center belongs to) is tracked by the scanner.

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, satisfy},
    combinator::value,
    sequence::delimited,
    IResult, Parser,
};
use symgrp_model::{Period, SyntaxError};

/// Raw token from a signature
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Single digit or infinity glyph (`0` and `∞` are infinite)
    Digit(Period),
    /// Digits of a parenthesized period, without the parens
    Literal(&'a str),
    /// Star (`*` or `★`)
    Star,
    /// Miracle (`x`, `❌` or `✕`)
    Miracle,
    /// Wonder (`o`)
    Wonder,
}

// ============================================================================
// Parsing Primitives
// ============================================================================

/// Parse a single digit outside parens
fn digit(input: &str) -> IResult<&str, Token> {
    let (input, c) = satisfy(|c: char| c.is_ascii_digit())(input)?;
    Ok((input, Token::Digit(Period::from_literal(c as u32 - '0' as u32))))
}

/// Parse a parenthesized period ((12))
fn literal(input: &str) -> IResult<&str, Token> {
    let (input, digits) = delimited(
        char('('),
        take_while1(|c: char| c.is_ascii_digit()),
        char(')'),
    )
    .parse(input)?;
    Ok((input, Token::Literal(digits)))
}

/// Parse a star (*)
fn star(input: &str) -> IResult<&str, Token> {
    value(Token::Star, char('*')).parse(input)
}

/// Parse a miracle (x)
fn miracle(input: &str) -> IResult<&str, Token> {
    value(Token::Miracle, char('x')).parse(input)
}

/// Parse a wonder (o)
fn wonder(input: &str) -> IResult<&str, Token> {
    value(Token::Wonder, char('o')).parse(input)
}

/// Parse the Unicode aliases (∞, ★, ❌, ✕)
fn glyph(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::Digit(Period::Infinite), char('∞')),
        value(Token::Star, char('★')),
        value(Token::Miracle, alt((char('❌'), char('✕')))),
    ))
    .parse(input)
}

/// Parse any ASCII token
fn ascii_token(input: &str) -> IResult<&str, Token> {
    alt((literal, digit, star, miracle, wonder)).parse(input)
}

/// Parse the next token, optionally accepting glyph aliases
pub fn next_token(input: &str, accept_glyphs: bool) -> IResult<&str, Token> {
    if accept_glyphs {
        alt((ascii_token, glyph)).parse(input)
    } else {
        ascii_token(input)
    }
}

/// Explain why no token could be read at the start of `rest`
fn diagnose(rest: &str, position: usize) -> SyntaxError {
    let mut chars = rest.chars();
    match chars.next() {
        Some('(') => {
            let inner = chars.as_str();
            let digits = inner.chars().take_while(|c| c.is_ascii_digit()).count();
            match inner.chars().nth(digits) {
                None => SyntaxError::UnclosedParen { position },
                Some(')') => SyntaxError::EmptyParens { position },
                Some(found) => SyntaxError::NonDigitInParens {
                    found,
                    position: position + 1 + digits,
                },
            }
        }
        Some(found) => SyntaxError::UnwantedCharacter { found, position },
        None => SyntaxError::UnclosedParen { position },
    }
}

// ============================================================================
// Token Stream
// ============================================================================

/// Left-to-right token stream over a signature
///
/// Yields `(position, token)` pairs, where the position counts characters.
/// Stops after the first error.
pub struct Tokens<'a> {
    rest: &'a str,
    position: usize,
    accept_glyphs: bool,
}

impl<'a> Tokens<'a> {
    /// Create a token stream for the given signature
    pub fn new(text: &'a str, accept_glyphs: bool) -> Self {
        Self {
            rest: text,
            position: 0,
            accept_glyphs,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<(usize, Token<'a>), SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let position = self.position;
        match next_token(self.rest, self.accept_glyphs) {
            Ok((remaining, token)) => {
                let consumed = &self.rest[..self.rest.len() - remaining.len()];
                self.position += consumed.chars().count();
                self.rest = remaining;
                Some(Ok((position, token)))
            }
            Err(_) => {
                let err = diagnose(self.rest, position);
                self.rest = "";
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Result<Vec<Token<'_>>, SyntaxError> {
        Tokens::new(text, true).map(|t| t.map(|(_, token)| token)).collect()
    }

    #[test]
    fn test_parse_digit() {
        let (remaining, token) = digit("53").unwrap();
        assert_eq!(remaining, "3");
        assert_eq!(token, Token::Digit(Period::Finite(5)));
    }

    #[test]
    fn test_zero_is_infinite() {
        let (_, token) = digit("0").unwrap();
        assert_eq!(token, Token::Digit(Period::Infinite));
    }

    #[test]
    fn test_parse_literal() {
        let (remaining, token) = literal("(12)*").unwrap();
        assert_eq!(remaining, "*");
        assert_eq!(token, Token::Literal("12"));
    }

    #[test]
    fn test_glyphs() {
        let tokens = collect("∞★✕❌").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Digit(Period::Infinite),
                Token::Star,
                Token::Miracle,
                Token::Miracle
            ]
        );
    }

    #[test]
    fn test_glyphs_rejected_when_disabled() {
        let mut tokens = Tokens::new("2★", false);
        assert_eq!(tokens.next(), Some(Ok((0, Token::Digit(Period::Finite(2))))));
        assert_eq!(
            tokens.next(),
            Some(Err(SyntaxError::UnwantedCharacter {
                found: '★',
                position: 1
            }))
        );
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn test_positions_count_characters() {
        let positions: Vec<usize> = Tokens::new("∞(10)x", true)
            .map(|t| t.unwrap().0)
            .collect();
        assert_eq!(positions, vec![0, 1, 5]);
    }

    #[test]
    fn test_paren_errors() {
        assert_eq!(
            collect("2(1"),
            Err(SyntaxError::UnclosedParen { position: 1 })
        );
        assert_eq!(collect("()"), Err(SyntaxError::EmptyParens { position: 0 }));
        assert_eq!(
            collect("*(1a)"),
            Err(SyntaxError::NonDigitInParens {
                found: 'a',
                position: 3
            })
        );
        assert_eq!(
            collect(")"),
            Err(SyntaxError::UnwantedCharacter {
                found: ')',
                position: 0
            })
        );
    }
}
