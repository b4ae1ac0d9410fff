// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SymGrp Model - Orbifold signatures and shared types
//!
//! This crate provides the core abstractions for working with symmetry groups
//! written in Conway's orbifold notation, as in *The Symmetries of Things*
//! (Conway, Burgiel and Goodman-Strauss). It has no math library dependency;
//! group synthesis lives in `symgrp-geometry`.
//!
//! # Architecture
//!
//! - [`Signature`] - Parsed counts of a signature (gyrations, kaleidoscopes, `*`, `x`, `o`)
//! - [`Classification`] - Cost, geometry type and symmetry count derived from a signature
//! - [`SignatureParser`] - Entry point for parsing signature strings
//! - [`SymmetrySource`] - Group elements and tile for a host scene layer
//! - [`Error`] - Error taxonomy shared by all crates
//!
//! # Example
//!
//! ```ignore
//! use symgrp_model::{GroupType, SignatureParser};
//!
//! let signature = parser.parse("*432")?;
//! assert_eq!(signature.group_type(), GroupType::Spherical);
//! println!("{} symmetries", signature.symmetry_count());
//! ```

pub mod classification;
pub mod error;
pub mod geometry;
pub mod traits;
pub mod types;

// Re-export all public types
pub use classification::*;
pub use error::*;
pub use geometry::*;
pub use traits::*;
pub use types::*;
