// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plain export types for a host scene layer

use crate::{Classification, Signature};
use serde::{Deserialize, Serialize};

/// Fundamental tile as flat GPU-style buffers
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TileData {
    /// Vertex positions as flattened [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Vertex normals as flattened [nx, ny, nz, nx, ny, nz, ...]
    pub normals: Vec<f32>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl TileData {
    /// Create a new empty tile
    pub fn new() -> Self {
        Self::default()
    }

    /// Create tile buffers with pre-allocated capacity
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            normals: Vec::with_capacity(vertex_count * 3),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Check if the tile is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// One group element as plain numbers
///
/// A copy of the tile is placed by mirroring it with `scale` and then
/// rotating it by `rotation`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementData {
    /// Rotation quaternion as [w, x, y, z]
    pub rotation: [f64; 4],
    /// Scale vector, (1, 1, 1) for direct symmetries or (1, -1, 1) for inverse ones
    pub scale: [f64; 3],
}

impl ElementData {
    /// Check if the element preserves orientation
    pub fn is_direct(&self) -> bool {
        self.scale.iter().product::<f64>() > 0.0
    }
}

/// Source of group data for a host that places copies of a tile
///
/// # Example
///
/// ```ignore
/// use symgrp_model::SymmetrySource;
///
/// fn place_copies(group: &dyn SymmetrySource) {
///     let tile = group.tile_data();
///     for element in group.element_data() {
///         // Instantiate `tile` with element.rotation and element.scale...
///     }
/// }
/// ```
pub trait SymmetrySource {
    /// Parsed signature of the group
    fn signature(&self) -> &Signature;

    /// Cost, type and symmetry count
    fn classification(&self) -> Classification;

    /// Every group element, direct ones first
    fn element_data(&self) -> Vec<ElementData>;

    /// Fundamental tile buffers
    fn tile_data(&self) -> TileData;
}
