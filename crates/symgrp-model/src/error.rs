// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for signature parsing and group synthesis

use thiserror::Error;

/// Result type alias for symmetry group operations
pub type Result<T> = std::result::Result<T, Error>;

/// Grammar violations found while scanning an orbifold signature
///
/// Positions count characters (not bytes) from the start of the signature.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// Character outside the signature alphabet
    #[error("Unwanted '{found}' at position {position}")]
    UnwantedCharacter { found: char, position: usize },

    /// Something other than a digit inside a parenthesized period
    #[error("Non-digit '{found}' in parens at position {position}")]
    NonDigitInParens { found: char, position: usize },

    /// `()` with nothing inside
    #[error("Empty parens at position {position}")]
    EmptyParens { position: usize },

    /// Signature ended inside a parenthesized period
    #[error("Unclosed '(' at position {position}")]
    UnclosedParen { position: usize },

    /// Parenthesized period does not fit in 32 bits
    #[error("Period ({literal}) is too large")]
    PeriodTooLarge { literal: String },

    /// A center appears after a miracle
    #[error("Miracle (x) with centers is impossible (position {position})")]
    MiracleWithCenters { position: usize },

    /// A wonder appears after a star or a miracle
    #[error("Wandering (o) after inverse symmetry is impossible (position {position})")]
    WonderAfterInverse { position: usize },
}

/// Errors that can occur while building a symmetry group
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The signature is malformed, or names no supported spherical group
    #[error("Bad orbifold signature: {message}")]
    BadSignature {
        message: String,
        #[source]
        cause: Option<SyntaxError>,
    },

    /// Valid planar or frieze group that is not constructed
    #[error("Unsupported symmetry group: {0}")]
    Unsupported(String),

    /// Closure enumeration ran out of new elements before reaching the requested size
    #[error("Generators close into {reached} elements, {requested} requested")]
    GroupSize { requested: usize, reached: usize },

    /// Number of derived elements differs from the symmetry count
    #[error("Group has {actual} elements, expected {expected}")]
    OrderMismatch { expected: u64, actual: usize },
}

impl Error {
    /// Create a bad signature error without a syntax cause
    pub fn bad_signature(msg: impl Into<String>) -> Self {
        Error::BadSignature {
            message: msg.into(),
            cause: None,
        }
    }

    /// Wrap a grammar violation
    pub fn syntax(cause: SyntaxError) -> Self {
        Error::BadSignature {
            message: "Incorrect orbifold signature".to_string(),
            cause: Some(cause),
        }
    }

    /// Create an unsupported group error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Error::Unsupported(msg.into())
    }

    /// Whether the caller can fix this by changing the signature
    pub fn is_bad_signature(&self) -> bool {
        matches!(self, Error::BadSignature { .. })
    }

    /// Whether the signature is valid but its group is not constructed
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported(_))
    }

    /// The grammar violation behind a bad signature, if any
    pub fn syntax_cause(&self) -> Option<&SyntaxError> {
        match self {
            Error::BadSignature { cause, .. } => cause.as_ref(),
            _ => None,
        }
    }
}
