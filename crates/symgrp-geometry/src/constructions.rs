// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Family Constructions - Rotations and tiles for each spherical family
//!
//! Each construction handles one or more families. Axial groups list their
//! rotations directly; the polyhedral and dihedral ones enumerate them by
//! closure from a few generators.

use crate::{
    closure::{group_from_gens_size, separating_epsilon},
    family::{FamilyKind, GroupFamily},
    tile::Tile,
    trig::{rotation, turns, SphericalTriangle},
    UnitQuaternion, Vector3,
};
use std::f64::consts::PI;
use symgrp_model::{Error, Result};

use super::router::{Construction, FamilyConstruction, SynthesisOptions};

fn wrong_family(construction: &str, family: &GroupFamily) -> Error {
    Error::unsupported(format!("{} cannot build {}", construction, family))
}

/// Trivial, miracle and mirror groups
///
/// One direct element. The trivial group tiles the sphere with a whole
/// octahedron, the other two with the half on the `y >= 0` side.
pub struct TrivialConstruction;

impl TrivialConstruction {
    /// Create new construction
    pub fn new() -> Self {
        Self
    }
}

impl Default for TrivialConstruction {
    fn default() -> Self {
        Self::new()
    }
}

impl FamilyConstruction for TrivialConstruction {
    fn construct(&self, family: &GroupFamily, _options: &SynthesisOptions) -> Result<Construction> {
        let identity = vec![UnitQuaternion::identity()];
        match family {
            GroupFamily::Trivial => Ok(Construction::new(identity, Tile::octahedron())),
            GroupFamily::Mirror => Ok(Construction::new(identity, Tile::half_octahedron())),
            // Central inversion: half turn about the mirror normal
            GroupFamily::Miracle => Ok(Construction::new(identity, Tile::half_octahedron())
                .with_miracle_axes(vec![rotation(&Vector3::y(), PI)])),
            _ => Err(wrong_family("TrivialConstruction", family)),
        }
    }

    fn supported_kinds(&self) -> Vec<FamilyKind> {
        vec![FamilyKind::Trivial, FamilyKind::Miracle, FamilyKind::Mirror]
    }
}

/// Cyclic `NN` and dihedral `*NN` groups about the Z axis
pub struct CyclicConstruction;

impl CyclicConstruction {
    /// Create new construction
    pub fn new() -> Self {
        Self
    }
}

impl Default for CyclicConstruction {
    fn default() -> Self {
        Self::new()
    }
}

impl FamilyConstruction for CyclicConstruction {
    fn construct(&self, family: &GroupFamily, _options: &SynthesisOptions) -> Result<Construction> {
        let axis = Vector3::z();
        match *family {
            GroupFamily::Cyclic { n } => {
                // Lune of width 2π/N, split in two along its middle meridian
                let step = PI / n as f64;
                let vertices = vec![
                    axis,
                    -axis,
                    Vector3::x(),
                    rotation(&axis, step) * Vector3::x(),
                    rotation(&axis, 2.0 * step) * Vector3::x(),
                ];
                let faces = vec![[0, 2, 3], [0, 3, 4], [1, 3, 2], [1, 4, 3]];
                Ok(Construction::new(
                    turns(&axis, n, 0.0),
                    Tile::new(vertices, faces),
                ))
            }
            GroupFamily::Dihedral { n } => {
                // Lune between the XZ mirror and the next one at π/N
                let vertices = vec![
                    axis,
                    -axis,
                    Vector3::x(),
                    rotation(&axis, PI / n as f64) * Vector3::x(),
                ];
                let faces = vec![[0, 2, 3], [1, 3, 2]];
                Ok(Construction::new(
                    turns(&axis, n, 0.0),
                    Tile::new(vertices, faces),
                ))
            }
            _ => Err(wrong_family("CyclicConstruction", family)),
        }
    }

    fn supported_kinds(&self) -> Vec<FamilyKind> {
        vec![FamilyKind::Cyclic, FamilyKind::Dihedral]
    }
}

/// Triangle groups `MNP` and `*MNP`
///
/// Covers the dihedral `N22`, tetrahedral, octahedral and icosahedral
/// groups. The tile of `*MNP` is its Schwarz triangle; `MNP` adds the
/// triangle's mirror image across the XZ plane.
pub struct TriangleConstruction;

impl TriangleConstruction {
    /// Create new construction
    pub fn new() -> Self {
        Self
    }
}

impl Default for TriangleConstruction {
    fn default() -> Self {
        Self::new()
    }
}

impl FamilyConstruction for TriangleConstruction {
    fn construct(&self, family: &GroupFamily, options: &SynthesisOptions) -> Result<Construction> {
        let ((m, n, p), size, chiral) = match *family {
            GroupFamily::ChiralTriangle { m, n, p } => ((m, n, p), family.order(), true),
            GroupFamily::Kaleidoscope { m, n, p } => ((m, n, p), family.order() / 2, false),
            _ => return Err(wrong_family("TriangleConstruction", family)),
        };

        let triangle = SphericalTriangle::from_periods(m, n, p);
        let epsilon = separating_epsilon(options.epsilon, m.max(n).max(p));
        let axes = group_from_gens_size(&triangle.rotation_generators(), size, epsilon)?;

        let [pa, pb, pc] = triangle.vertices;
        let tile = if chiral {
            let reflected = pc.component_mul(&Vector3::new(1.0, -1.0, 1.0));
            Tile::new(vec![pa, pb, pc, reflected], vec![[0, 1, 2], [0, 3, 1]])
        } else {
            Tile::new(vec![pa, pb, pc], vec![[0, 1, 2]])
        };

        Ok(Construction::new(axes, tile))
    }

    fn supported_kinds(&self) -> Vec<FamilyKind> {
        vec![FamilyKind::ChiralTriangle, FamilyKind::Kaleidoscope]
    }
}

/// Groups `N*` and `Nx` with a single rotation axis along Y
///
/// Both have N rotations about Y. `N*` adds the XZ mirror, `Nx` the
/// rotoreflections offset by half a step.
pub struct AxialConstruction;

impl AxialConstruction {
    /// Create new construction
    pub fn new() -> Self {
        Self
    }
}

impl Default for AxialConstruction {
    fn default() -> Self {
        Self::new()
    }
}

impl FamilyConstruction for AxialConstruction {
    fn construct(&self, family: &GroupFamily, _options: &SynthesisOptions) -> Result<Construction> {
        let n = match *family {
            GroupFamily::StarCyclic { n } | GroupFamily::MiracleCyclic { n } => n,
            _ => return Err(wrong_family("AxialConstruction", family)),
        };

        let axis = Vector3::y();
        let step = PI / n as f64;
        let vertices = vec![
            axis,
            Vector3::z(),
            rotation(&axis, step) * Vector3::z(),
            rotation(&axis, 2.0 * step) * Vector3::z(),
        ];
        let tile = Tile::new(vertices, vec![[0, 1, 2], [0, 2, 3]]);
        let construction = Construction::new(turns(&axis, n, 0.0), tile);

        Ok(match family {
            GroupFamily::MiracleCyclic { .. } => {
                construction.with_miracle_axes(turns(&axis, n, step))
            }
            _ => construction,
        })
    }

    fn supported_kinds(&self) -> Vec<FamilyKind> {
        vec![FamilyKind::StarCyclic, FamilyKind::MiracleCyclic]
    }
}

/// Antiprismatic groups `2*N` about the X axis
pub struct GyroDihedralConstruction;

impl GyroDihedralConstruction {
    /// Create new construction
    pub fn new() -> Self {
        Self
    }
}

impl Default for GyroDihedralConstruction {
    fn default() -> Self {
        Self::new()
    }
}

impl FamilyConstruction for GyroDihedralConstruction {
    fn construct(&self, family: &GroupFamily, options: &SynthesisOptions) -> Result<Construction> {
        let n = match *family {
            GroupFamily::GyroDihedral { n } => n,
            _ => return Err(wrong_family("GyroDihedralConstruction", family)),
        };

        let axis = Vector3::x();
        let step = PI / n as f64;
        let pa = axis;
        let pb = Vector3::z();
        // Two-fold gyration halfway between the mirrors
        let pc = rotation(&axis, step / 2.0) * pb;
        let pd = rotation(&axis, step) * pb;

        let generators = [rotation(&axis, 2.0 * step), rotation(&pc, PI)];
        let epsilon = separating_epsilon(options.epsilon, n);
        let axes = group_from_gens_size(&generators, family.order() / 2, epsilon)?;

        Ok(Construction::new(
            axes,
            Tile::new(vec![pa, pb, pc, pd], vec![[0, 1, 2], [0, 2, 3]]),
        ))
    }

    fn supported_kinds(&self) -> Vec<FamilyKind> {
        vec![FamilyKind::GyroDihedral]
    }
}

/// Pyritohedral group `3*2`
///
/// Rotations of the tetrahedron plus the coordinate plane mirrors. The tile
/// is a quadrilateral between the Z axis, the X axis and the cube diagonal.
pub struct PyritohedralConstruction;

impl PyritohedralConstruction {
    /// Create new construction
    pub fn new() -> Self {
        Self
    }
}

impl Default for PyritohedralConstruction {
    fn default() -> Self {
        Self::new()
    }
}

impl FamilyConstruction for PyritohedralConstruction {
    fn construct(&self, family: &GroupFamily, options: &SynthesisOptions) -> Result<Construction> {
        if *family != GroupFamily::Pyritohedral {
            return Err(wrong_family("PyritohedralConstruction", family));
        }

        let triangle = SphericalTriangle::from_angles(PI / 4.0, PI / 2.0, PI / 3.0);
        let pa = triangle.a();
        let pb = triangle.b();
        let pc = Vector3::x();
        let pd = triangle.c();

        let generators = [rotation(&pd, 2.0 * PI / 3.0), rotation(&Vector3::z(), PI)];
        let epsilon = separating_epsilon(options.epsilon, 3);
        let axes = group_from_gens_size(&generators, family.order() / 2, epsilon)?;

        Ok(Construction::new(
            axes,
            Tile::new(vec![pa, pb, pc, pd], vec![[0, 1, 3], [1, 2, 3]]),
        ))
    }

    fn supported_kinds(&self) -> Vec<FamilyKind> {
        vec![FamilyKind::Pyritohedral]
    }
}
