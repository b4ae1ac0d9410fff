// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core traits for signature parsing

use crate::{Result, Signature};

/// Parsing interface - entry point for reading orbifold signatures
///
/// # Example
///
/// ```ignore
/// use symgrp_model::SignatureParser;
///
/// let parser: Box<dyn SignatureParser> = get_parser();
/// let signature = parser.parse("*432")?;
/// println!("Cost: {}", signature.cost());
/// ```
pub trait SignatureParser: Send + Sync {
    /// Parse a signature string
    ///
    /// # Returns
    /// The parsed counts, or `Error::BadSignature` carrying the grammar
    /// violation as its source
    fn parse(&self, text: &str) -> Result<Signature>;
}
