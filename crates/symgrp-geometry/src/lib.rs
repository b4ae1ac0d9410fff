// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # SymGrp Geometry - Spherical Symmetry Group Synthesis
//!
//! Builds the finite point groups of three-dimensional space from their
//! orbifold signatures. Signatures are read by `symgrp-parser` and
//! classified with the types of `symgrp-model`.
//!
//! ## Overview
//!
//! - **Families**: Classify a signature into one of the spherical families
//! - **Constructions**: Place the fundamental tile and list the rotations of each family
//! - **Closure**: Enumerate a finite rotation group from its generators
//! - **Elements**: Rotation and reflection pairs with matrix and placement helpers
//!
//! ## Architecture
//!
//! The crate uses traits for abstraction:
//!
//! - `FamilyConstruction`: Trait for the construction of one or more families
//! - `SignatureParser`: Trait from symgrp-model for signature parsing
//! - `SymmetrySource`: Trait from symgrp-model for group data access
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use symgrp_geometry::SymmetryGroup;
//!
//! let group = SymmetryGroup::new("*532")?;
//! println!("{} has {} elements", group, group.len());
//!
//! for element in &group {
//!     let matrix = element.to_matrix();
//! }
//! ```

pub mod closure;
pub mod constructions;
pub mod element;
pub mod family;
pub mod group;
pub mod router;
pub mod tile;
pub mod trig;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, UnitQuaternion, Vector3};

// Re-export main types
pub use closure::{group_from_gens_size, separating_epsilon, DEFAULT_EPSILON};
pub use element::{GroupElement, Reflection};
pub use family::{FamilyKind, GroupFamily};
pub use group::SymmetryGroup;
pub use router::{
    Construction, FamilyConstruction, Synthesis, SynthesisOptions, Synthesizer, DEFAULT_MAX_ORDER,
};
pub use symgrp_model::{Error, Result};
pub use tile::Tile;
pub use trig::SphericalTriangle;

// Re-export constructions
pub use constructions::{
    AxialConstruction, CyclicConstruction, GyroDihedralConstruction, PyritohedralConstruction,
    TriangleConstruction, TrivialConstruction,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_group() {
        let group = SymmetryGroup::new("*332").unwrap();
        assert_eq!(group.len(), 24);
        assert_eq!(group.family(), GroupFamily::Kaleidoscope { m: 3, n: 3, p: 2 });
    }

    #[test]
    fn test_error_reexport() {
        let err: Error = SymmetryGroup::new("(").unwrap_err();
        assert!(err.is_bad_signature());
    }
}
