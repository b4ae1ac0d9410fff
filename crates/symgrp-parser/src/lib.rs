// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SymGrp Parser - Orbifold signature parser
//!
//! This crate reads Conway orbifold signatures such as `*432`, `3*2` or `2x`.
//! It implements the `SignatureParser` trait defined in `symgrp-model`.
//!
//! # Grammar
//!
//! - Digits are centers. `0` (or `∞`) is an infinite period; periods of 10
//!   or more go in parens, e.g. `*(12)22`.
//! - Centers before the first `*` are gyrations, the rest are kaleidoscopic.
//! - No center may follow an `x` (miracle).
//! - `o` (wonder) may only appear before any `*` or `x`.
//! - Periods of 1 are dropped.
//!
//! # Example
//!
//! ```ignore
//! use symgrp_parser::parse;
//!
//! let signature = parse("*432")?;
//! assert_eq!(signature.stars(), 1);
//! assert_eq!(signature.to_string(), "*432");
//! ```

pub mod catalog;
mod scanner;
mod tokenizer;

pub use catalog::{search, PRESET_SIGNATURES};
pub use scanner::SignatureScanner;
pub use tokenizer::{next_token, Token, Tokens};

use symgrp_model::{Error, Result, Signature, SignatureParser};

/// Orbifold signature parser implementing `SignatureParser`
#[derive(Clone, Debug)]
pub struct OrbifoldParser {
    /// Whether the Unicode aliases `∞ ★ ❌ ✕` are accepted
    pub accept_glyphs: bool,
}

impl OrbifoldParser {
    /// Create a new parser accepting glyph aliases
    pub fn new() -> Self {
        Self {
            accept_glyphs: true,
        }
    }

    /// Create a parser for the plain ASCII alphabet `0-9 * x o ( )`
    pub fn ascii_only() -> Self {
        Self {
            accept_glyphs: false,
        }
    }

    /// Set whether glyph aliases are accepted
    pub fn with_glyphs(mut self, enabled: bool) -> Self {
        self.accept_glyphs = enabled;
        self
    }
}

impl Default for OrbifoldParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureParser for OrbifoldParser {
    fn parse(&self, text: &str) -> Result<Signature> {
        SignatureScanner::scan(text, self.accept_glyphs).map_err(Error::syntax)
    }
}

/// Quick parse function for simple use cases
pub fn parse(text: &str) -> Result<Signature> {
    OrbifoldParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use symgrp_model::{GroupType, Period, SymmetryCount, SyntaxError};

    #[test]
    fn test_parse_empty() {
        let sig = parse("").unwrap();
        assert_eq!(sig, Signature::default());
        assert_eq!(sig.symmetry_count(), SymmetryCount::Finite(1));
    }

    #[test]
    fn test_digit_round_trip() {
        for text in ["2", "22", "532", "987", "2345", "0", "90", "22222"] {
            assert_eq!(parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_canonical_signature() {
        assert_eq!(parse("★432").unwrap().to_string(), "*432");
        assert_eq!(parse("1*(12)(3)").unwrap().to_string(), "*(12)3");
        assert_eq!(parse("∞∞").unwrap().to_string(), "00");
        assert_eq!(parse("2✕").unwrap().to_string(), "2x");
    }

    #[test]
    fn test_errors_are_bad_signature() {
        for text in ["x2", "*o", "2(", "(a)", "q", "()"] {
            let err = parse(text).unwrap_err();
            assert!(err.is_bad_signature(), "{:?} should be a bad signature", text);
            assert!(err.syntax_cause().is_some());
        }
    }

    #[test]
    fn test_error_cause() {
        let err = parse("*3o").unwrap_err();
        assert_eq!(
            err.syntax_cause(),
            Some(&SyntaxError::WonderAfterInverse { position: 2 })
        );
    }

    #[test]
    fn test_ascii_only_parser() {
        let parser = OrbifoldParser::ascii_only();
        assert!(parser.parse("*432").is_ok());
        assert!(parser.parse("★432").is_err());
        assert!(OrbifoldParser::new().with_glyphs(false).parse("∞").is_err());
    }

    #[test]
    fn test_parse_classifies() {
        let sig = parse("*432").unwrap();
        assert_eq!(sig.group_type(), GroupType::Spherical);
        assert_eq!(sig.symmetry_count(), SymmetryCount::Finite(48));
        assert_eq!(parse("00").unwrap().group_type(), GroupType::Frieze);
        assert_eq!(parse("0").unwrap().gyrations(), &[Period::Infinite]);
    }
}
