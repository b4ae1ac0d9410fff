// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Symmetry group aggregate
//!
//! Parses a signature, classifies it and derives its elements and tile once.
//! Every accessor afterwards reads the stored data.

use crate::element::GroupElement;
use crate::family::GroupFamily;
use crate::router::{SynthesisOptions, Synthesizer};
use crate::tile::Tile;
use crate::UnitQuaternion;
use std::fmt;
use std::ops::Index;
use symgrp_model::{
    Classification, Cost, ElementData, GroupType, Period, Result, Signature, SymmetryCount,
    SymmetrySource, TileData,
};

/// Finite spherical symmetry group built from an orbifold signature
///
/// Elements and tile are derived once, on construction. Use
/// [`SymmetryGroup::classify`] to read the cost, type and symmetry count of
/// a signature without deriving anything.
///
/// # Example
///
/// ```ignore
/// use symgrp_geometry::SymmetryGroup;
///
/// let group = SymmetryGroup::new("*432")?;
/// assert_eq!(group.len(), 48);
/// for element in &group {
///     let placed = element.transform_vector(&group.tile().vertices[0]);
/// }
/// ```
#[derive(Clone)]
pub struct SymmetryGroup {
    signature: Signature,
    classification: Classification,
    family: GroupFamily,
    axes: Vec<UnitQuaternion<f64>>,
    inverse_axes: Vec<UnitQuaternion<f64>>,
    elements: Vec<GroupElement>,
    tile: Tile,
}

impl SymmetryGroup {
    /// Build the group of a signature string with default options
    pub fn new(text: &str) -> Result<Self> {
        Self::with_options(text, &SynthesisOptions::default())
    }

    /// Build the group of a signature string
    pub fn with_options(text: &str, options: &SynthesisOptions) -> Result<Self> {
        let signature = symgrp_parser::parse(text)?;
        Self::from_signature(signature, options)
    }

    /// Parse and classify a signature without deriving its group
    ///
    /// Works for every parseable signature, including planar, frieze and
    /// hyperbolic ones that `new` rejects.
    pub fn classify(text: &str) -> Result<Classification> {
        Ok(symgrp_parser::parse(text)?.classify())
    }

    /// Build the group of an already parsed signature
    pub fn from_signature(signature: Signature, options: &SynthesisOptions) -> Result<Self> {
        let synthesis = Synthesizer::with_default_constructions()
            .with_options(options.clone())
            .synthesize(&signature)?;

        let elements = synthesis
            .axes
            .iter()
            .copied()
            .map(GroupElement::direct)
            .chain(
                synthesis
                    .inverse_axes
                    .iter()
                    .copied()
                    .map(GroupElement::mirrored),
            )
            .collect();

        Ok(Self {
            classification: signature.classify(),
            signature,
            family: synthesis.family,
            axes: synthesis.axes,
            inverse_axes: synthesis.inverse_axes,
            elements,
            tile: synthesis.tile,
        })
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn stars(&self) -> u32 {
        self.signature.stars()
    }

    pub fn miracles(&self) -> u32 {
        self.signature.miracles()
    }

    pub fn wonders(&self) -> u32 {
        self.signature.wonders()
    }

    pub fn gyrations(&self) -> &[Period] {
        self.signature.gyrations()
    }

    pub fn kaleidoscopes(&self) -> &[Period] {
        self.signature.kaleidoscopes()
    }

    pub fn cost(&self) -> Cost {
        self.classification.cost
    }

    /// Always `GroupType::Spherical` for a built group
    pub fn group_type(&self) -> GroupType {
        self.classification.group_type
    }

    pub fn symmetry_count(&self) -> SymmetryCount {
        self.classification.symmetry_count
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn has_inverse_symmetry(&self) -> bool {
        self.signature.has_inverse_symmetry()
    }

    pub fn is_gyrational(&self) -> bool {
        self.signature.is_gyrational()
    }

    pub fn family(&self) -> GroupFamily {
        self.family
    }

    /// Orientation-preserving rotations, identity first
    pub fn axes(&self) -> &[UnitQuaternion<f64>] {
        &self.axes
    }

    /// Rotations applied after the XZ mirror; empty for gyrational groups
    pub fn inverse_axes(&self) -> &[UnitQuaternion<f64>] {
        &self.inverse_axes
    }

    /// All elements: direct ones, then the mirrored ones
    pub fn all_axes(&self) -> &[GroupElement] {
        &self.elements
    }

    pub fn tile(&self) -> &Tile {
        &self.tile
    }

    /// Number of elements, equal to the symmetry count
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GroupElement> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GroupElement> {
        self.elements.iter()
    }
}

impl Index<usize> for SymmetryGroup {
    type Output = GroupElement;

    fn index(&self, index: usize) -> &GroupElement {
        &self.elements[index]
    }
}

impl<'a> IntoIterator for &'a SymmetryGroup {
    type Item = &'a GroupElement;
    type IntoIter = std::slice::Iter<'a, GroupElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl fmt::Display for SymmetryGroup {
    /// Canonical signature
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signature)
    }
}

impl fmt::Debug for SymmetryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymmetryGroup('{}')", self.signature)
    }
}

impl SymmetrySource for SymmetryGroup {
    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn classification(&self) -> Classification {
        self.classification
    }

    fn element_data(&self) -> Vec<ElementData> {
        self.elements
            .iter()
            .map(GroupElement::to_element_data)
            .collect()
    }

    fn tile_data(&self) -> TileData {
        self.tile.to_tile_data()
    }
}
