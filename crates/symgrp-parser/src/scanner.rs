// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Signature scanner
//!
//! Single left-to-right pass over the token stream. Centers go to the
//! gyration list until the first star, then to the kaleidoscope list. After
//! a miracle no center may follow at all.

use crate::tokenizer::{Token, Tokens};
use symgrp_model::{Period, Signature, SyntaxError};

/// List that receives the next center
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Gyrations,
    Kaleidoscopes,
    /// After a miracle; any center is an error
    Sealed,
}

/// Accumulates signature counts token by token
#[derive(Debug)]
pub struct SignatureScanner {
    gyrations: Vec<Period>,
    kaleidoscopes: Vec<Period>,
    stars: u32,
    miracles: u32,
    wonders: u32,
    target: Target,
}

impl SignatureScanner {
    /// Create an empty scanner
    pub fn new() -> Self {
        Self {
            gyrations: Vec::new(),
            kaleidoscopes: Vec::new(),
            stars: 0,
            miracles: 0,
            wonders: 0,
            target: Target::Gyrations,
        }
    }

    /// Scan a whole signature
    pub fn scan(text: &str, accept_glyphs: bool) -> Result<Signature, SyntaxError> {
        let mut scanner = Self::new();
        for item in Tokens::new(text, accept_glyphs) {
            let (position, token) = item?;
            scanner.feed(position, token)?;
        }
        Ok(scanner.finish())
    }

    /// Consume one token
    pub fn feed(&mut self, position: usize, token: Token<'_>) -> Result<(), SyntaxError> {
        match token {
            Token::Digit(period) => self.push_center(period, position),
            Token::Literal(digits) => {
                let n: u32 = lexical_core::parse(digits.as_bytes()).map_err(|_| {
                    SyntaxError::PeriodTooLarge {
                        literal: digits.to_string(),
                    }
                })?;
                self.push_center(Period::from_literal(n), position)
            }
            Token::Star => {
                self.stars += 1;
                if self.target != Target::Sealed {
                    self.target = Target::Kaleidoscopes;
                }
                Ok(())
            }
            Token::Miracle => {
                self.miracles += 1;
                self.target = Target::Sealed;
                Ok(())
            }
            Token::Wonder if self.target == Target::Gyrations => {
                self.wonders += 1;
                Ok(())
            }
            Token::Wonder => Err(SyntaxError::WonderAfterInverse { position }),
        }
    }

    fn push_center(&mut self, period: Period, position: usize) -> Result<(), SyntaxError> {
        match self.target {
            Target::Gyrations => self.gyrations.push(period),
            Target::Kaleidoscopes => self.kaleidoscopes.push(period),
            Target::Sealed => return Err(SyntaxError::MiracleWithCenters { position }),
        }
        Ok(())
    }

    /// Build the signature, dropping periods of 1
    pub fn finish(self) -> Signature {
        Signature::new(
            self.gyrations,
            self.kaleidoscopes,
            self.stars,
            self.miracles,
            self.wonders,
        )
    }
}

impl Default for SignatureScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Result<Signature, SyntaxError> {
        SignatureScanner::scan(text, true)
    }

    #[test]
    fn test_scan_kaleidoscope() {
        let sig = scan("*432").unwrap();
        assert_eq!(sig.stars(), 1);
        assert!(sig.gyrations().is_empty());
        assert_eq!(
            sig.kaleidoscopes(),
            &[Period::Finite(4), Period::Finite(3), Period::Finite(2)]
        );
    }

    #[test]
    fn test_scan_mixed() {
        let sig = scan("3*2").unwrap();
        assert_eq!(sig.gyrations(), &[Period::Finite(3)]);
        assert_eq!(sig.kaleidoscopes(), &[Period::Finite(2)]);
    }

    #[test]
    fn test_star_switch_is_cumulative() {
        let sig = scan("2*3*4").unwrap();
        assert_eq!(sig.stars(), 2);
        assert_eq!(sig.gyrations(), &[Period::Finite(2)]);
        assert_eq!(sig.kaleidoscopes(), &[Period::Finite(3), Period::Finite(4)]);
    }

    #[test]
    fn test_scan_literals() {
        let sig = scan("(12)(0)0").unwrap();
        assert_eq!(
            sig.gyrations(),
            &[Period::Finite(12), Period::Infinite, Period::Infinite]
        );
    }

    #[test]
    fn test_ones_are_dropped() {
        let sig = scan("1*1(1)").unwrap();
        assert!(sig.gyrations().is_empty());
        assert!(sig.kaleidoscopes().is_empty());
        assert_eq!(sig.stars(), 1);
    }

    #[test]
    fn test_miracle_rejects_centers() {
        assert_eq!(
            scan("x2"),
            Err(SyntaxError::MiracleWithCenters { position: 1 })
        );
        assert_eq!(
            scan("2x*3"),
            Err(SyntaxError::MiracleWithCenters { position: 3 })
        );
        let sig = scan("2x").unwrap();
        assert_eq!(sig.miracles(), 1);
    }

    #[test]
    fn test_wonder_only_among_gyrations() {
        assert_eq!(scan("2o").unwrap().wonders(), 1);
        assert_eq!(
            scan("*o"),
            Err(SyntaxError::WonderAfterInverse { position: 1 })
        );
        assert_eq!(
            scan("xo"),
            Err(SyntaxError::WonderAfterInverse { position: 1 })
        );
    }

    #[test]
    fn test_period_too_large() {
        assert_eq!(
            scan("(99999999999)"),
            Err(SyntaxError::PeriodTooLarge {
                literal: "99999999999".to_string()
            })
        );
    }

    #[test]
    fn test_first_error_wins() {
        // The miracle violation comes before the unclosed paren
        assert_eq!(
            scan("x2("),
            Err(SyntaxError::MiracleWithCenters { position: 1 })
        );
    }
}
