// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Group elements as (rotation, reflection) pairs
//!
//! An element acts on a point by mirroring it in the local frame first and
//! rotating it afterwards: `v -> R * (v ⊙ scale)`.

use crate::{Matrix3, UnitQuaternion, Vector3};
use nalgebra::Quaternion;
use symgrp_model::ElementData;

/// Reflection part of an element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reflection {
    /// Scale `(1, 1, 1)`
    Direct,
    /// Scale `(1, -1, 1)`, the mirror in the XZ plane
    MirrorY,
}

impl Reflection {
    /// Per-axis scale factors
    pub fn scale(&self) -> Vector3<f64> {
        match self {
            Reflection::Direct => Vector3::new(1.0, 1.0, 1.0),
            Reflection::MirrorY => Vector3::new(1.0, -1.0, 1.0),
        }
    }
}

/// One symmetry of a spherical group
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupElement {
    pub rotation: UnitQuaternion<f64>,
    pub reflection: Reflection,
}

impl GroupElement {
    /// Orientation-preserving element
    pub fn direct(rotation: UnitQuaternion<f64>) -> Self {
        Self {
            rotation,
            reflection: Reflection::Direct,
        }
    }

    /// Orientation-reversing element: mirror in XZ, then rotate
    pub fn mirrored(rotation: UnitQuaternion<f64>) -> Self {
        Self {
            rotation,
            reflection: Reflection::MirrorY,
        }
    }

    pub fn scale(&self) -> Vector3<f64> {
        self.reflection.scale()
    }

    pub fn is_direct(&self) -> bool {
        self.reflection == Reflection::Direct
    }

    /// Orthogonal matrix `R * diag(scale)`
    pub fn to_matrix(&self) -> Matrix3<f64> {
        self.rotation.to_rotation_matrix().into_inner() * Matrix3::from_diagonal(&self.scale())
    }

    /// Apply the element to a vector
    pub fn transform_vector(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * v.component_mul(&self.scale())
    }

    /// Object transform for a tile copy whose mesh is pre-rotated by `extra⁻¹`
    ///
    /// Returns the rotation and scale to give a scene object so that a tile
    /// rotated by the inverse of `extra` lands where this element puts the
    /// plain tile. Conjugating `extra` by the mirror flips the sign of the
    /// quaternion components along the mirrored axes.
    pub fn placement(&self, extra: &UnitQuaternion<f64>) -> (UnitQuaternion<f64>, Vector3<f64>) {
        let scale = self.scale();
        let (sx, sy, sz) = (scale.x, scale.y, scale.z);
        let conjugated = UnitQuaternion::new_unchecked(Quaternion::new(
            sx * sy * sz * extra.w,
            sx * extra.i,
            sy * extra.j,
            sz * extra.k,
        ));
        (self.rotation * conjugated, scale)
    }

    /// Plain numbers for a host scene layer
    pub fn to_element_data(&self) -> ElementData {
        let scale = self.scale();
        ElementData {
            rotation: [
                self.rotation.w,
                self.rotation.i,
                self.rotation.j,
                self.rotation.k,
            ],
            scale: [scale.x, scale.y, scale.z],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trig::rotation;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_mirror_flips_y() {
        let element = GroupElement::mirrored(UnitQuaternion::identity());
        assert!(!element.is_direct());
        assert_relative_eq!(
            element.transform_vector(&Vector3::new(1.0, 2.0, 3.0)),
            Vector3::new(1.0, -2.0, 3.0)
        );
        assert_relative_eq!(element.to_matrix().determinant(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matrix_matches_transform() {
        let element = GroupElement::mirrored(rotation(&Vector3::new(1.0, 2.0, -1.0), 0.9));
        let v = Vector3::new(0.3, -0.4, 0.8);
        assert_relative_eq!(
            element.to_matrix() * v,
            element.transform_vector(&v),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_inversion_from_half_turn() {
        // Half turn about Y after the XZ mirror is the central inversion
        let element = GroupElement::mirrored(rotation(&Vector3::y(), PI));
        assert_relative_eq!(element.to_matrix(), -Matrix3::<f64>::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_placement_of_pre_rotated_tile() {
        let extra = rotation(&Vector3::new(0.2, -1.0, 0.5), 1.3);
        let v = Vector3::new(0.6, 0.0, 0.8);
        for element in [
            GroupElement::direct(rotation(&Vector3::z(), 0.4)),
            GroupElement::mirrored(rotation(&Vector3::x(), 2.1)),
        ] {
            let (placed, scale) = element.placement(&extra);
            let mesh_vertex = extra.inverse() * v;
            assert_relative_eq!(
                placed * mesh_vertex.component_mul(&scale),
                element.transform_vector(&v),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_element_data() {
        let data = GroupElement::mirrored(UnitQuaternion::identity()).to_element_data();
        assert_eq!(data.rotation, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(data.scale, [1.0, -1.0, 1.0]);
        assert!(!data.is_direct());
    }
}
