// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Group Synthesizer - Dynamic dispatch to family constructions
//!
//! Classifies a signature into its family and routes it to the construction
//! registered for that family. The construction provides the direct
//! rotations, the fundamental tile and, for groups with a miracle, the
//! rotations paired with the mirror; the synthesizer derives the rest.

use crate::closure::DEFAULT_EPSILON;
use crate::family::{FamilyKind, GroupFamily};
use crate::tile::Tile;
use crate::UnitQuaternion;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use symgrp_model::{Error, Result, Signature};

/// Family construction trait
///
/// Each construction handles one or more families. It places the fundamental
/// tile and lists the rotations of the group.
pub trait FamilyConstruction: Send + Sync {
    /// Build the rotations and tile of `family`
    ///
    /// # Arguments
    /// * `family` - Classified family with its periods
    /// * `options` - Synthesis options (closure tolerance)
    fn construct(&self, family: &GroupFamily, options: &SynthesisOptions) -> Result<Construction>;

    /// Get supported families
    fn supported_kinds(&self) -> Vec<FamilyKind>;
}

/// Output of a family construction
#[derive(Clone, Debug)]
pub struct Construction {
    /// Orientation-preserving rotations, identity first
    pub axes: Vec<UnitQuaternion<f64>>,
    /// Rotations composed with the mirror, for groups whose inverse
    /// symmetries are not mirror images of the direct ones
    pub miracle_axes: Option<Vec<UnitQuaternion<f64>>>,
    /// Fundamental tile
    pub tile: Tile,
}

impl Construction {
    /// Construction without separate inverse axes
    pub fn new(axes: Vec<UnitQuaternion<f64>>, tile: Tile) -> Self {
        Self {
            axes,
            miracle_axes: None,
            tile,
        }
    }

    /// Attach the rotations used with the mirror
    pub fn with_miracle_axes(mut self, axes: Vec<UnitQuaternion<f64>>) -> Self {
        self.miracle_axes = Some(axes);
        self
    }
}

/// Default limit on the order of a synthesized group
pub const DEFAULT_MAX_ORDER: usize = 10_000;

/// Tunables of the synthesizer
#[derive(Clone, Debug, PartialEq)]
pub struct SynthesisOptions {
    /// Tolerance for identifying two rotations in closure enumeration
    pub epsilon: f64,
    /// Check the element count against the symmetry count
    pub verify_order: bool,
    /// Largest group order that is built
    pub max_order: usize,
}

impl SynthesisOptions {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_verify_order(mut self, enabled: bool) -> Self {
        self.verify_order = enabled;
        self
    }

    pub fn with_max_order(mut self, max_order: usize) -> Self {
        self.max_order = max_order;
        self
    }
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            verify_order: true,
            max_order: DEFAULT_MAX_ORDER,
        }
    }
}

/// Everything derived for one signature
#[derive(Clone, Debug)]
pub struct Synthesis {
    pub family: GroupFamily,
    /// Direct rotations
    pub axes: Vec<UnitQuaternion<f64>>,
    /// Rotations paired with the mirror
    pub inverse_axes: Vec<UnitQuaternion<f64>>,
    pub tile: Tile,
}

impl Synthesis {
    /// Number of elements, direct and inverse
    pub fn len(&self) -> usize {
        self.axes.len() + self.inverse_axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty() && self.inverse_axes.is_empty()
    }
}

/// Group synthesizer - routes signatures to family constructions
pub struct Synthesizer {
    /// Registered constructions by family
    constructions: FxHashMap<FamilyKind, Arc<dyn FamilyConstruction>>,
    options: SynthesisOptions,
}

impl Synthesizer {
    /// Create new synthesizer without any constructions registered
    pub fn new() -> Self {
        Self {
            constructions: FxHashMap::default(),
            options: SynthesisOptions::default(),
        }
    }

    /// Create synthesizer with default constructions registered
    ///
    /// Registers the following constructions:
    /// - `TrivialConstruction` (``, `x`, `*`)
    /// - `CyclicConstruction` (`NN`, `*NN`)
    /// - `TriangleConstruction` (`MNP`, `*MNP`)
    /// - `AxialConstruction` (`N*`, `Nx`)
    /// - `GyroDihedralConstruction` (`2*N`)
    /// - `PyritohedralConstruction` (`3*2`)
    pub fn with_default_constructions() -> Self {
        use crate::constructions::{
            AxialConstruction, CyclicConstruction, GyroDihedralConstruction,
            PyritohedralConstruction, TriangleConstruction, TrivialConstruction,
        };

        let mut synthesizer = Self::new();
        synthesizer.register(Arc::new(TrivialConstruction::new()));
        synthesizer.register(Arc::new(CyclicConstruction::new()));
        synthesizer.register(Arc::new(TriangleConstruction::new()));
        synthesizer.register(Arc::new(AxialConstruction::new()));
        synthesizer.register(Arc::new(GyroDihedralConstruction::new()));
        synthesizer.register(Arc::new(PyritohedralConstruction::new()));
        synthesizer
    }

    /// Replace the options
    pub fn with_options(mut self, options: SynthesisOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the current options
    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Register a family construction
    pub fn register(&mut self, construction: Arc<dyn FamilyConstruction>) {
        for kind in construction.supported_kinds() {
            self.constructions.insert(kind, Arc::clone(&construction));
        }
    }

    /// Check if a family has a registered construction
    pub fn has_construction(&self, kind: FamilyKind) -> bool {
        self.constructions.contains_key(&kind)
    }

    /// Derive the group of a signature
    ///
    /// Groups with a mirror and no miracle reuse the direct rotations for
    /// their inverse elements. Otherwise the inverse rotations come from the
    /// construction, or there are none.
    pub fn synthesize(&self, signature: &Signature) -> Result<Synthesis> {
        let family = GroupFamily::classify(signature)?;

        let order = family.order();
        if order > self.options.max_order {
            return Err(Error::unsupported(format!(
                "Group order {} exceeds the limit of {}",
                order, self.options.max_order
            )));
        }

        let construction = self
            .constructions
            .get(&family.kind())
            .ok_or_else(|| Error::unsupported(format!("No construction for {}", family)))?;

        let Construction {
            axes,
            miracle_axes,
            tile,
        } = construction.construct(&family, &self.options)?;

        let inverse_axes = if signature.has_inverse_symmetry() && signature.miracles() == 0 {
            axes.clone()
        } else {
            miracle_axes.unwrap_or_default()
        };

        let synthesis = Synthesis {
            family,
            axes,
            inverse_axes,
            tile,
        };

        if self.options.verify_order {
            let expected = signature.symmetry_count().as_finite().unwrap_or(0);
            if synthesis.len() as u64 != expected {
                return Err(Error::OrderMismatch {
                    expected,
                    actual: synthesis.len(),
                });
            }
        }

        log::debug!(
            "synthesized '{}' as {}: {} direct, {} inverse, {} tile faces",
            signature,
            synthesis.family,
            synthesis.axes.len(),
            synthesis.inverse_axes.len(),
            synthesis.tile.triangle_count()
        );

        Ok(synthesis)
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}
