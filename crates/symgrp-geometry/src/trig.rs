// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spherical trigonometry on the unit sphere

use crate::{UnitQuaternion, Vector3};
use nalgebra::Unit;
use std::f64::consts::PI;

/// Rotation by `angle` radians about `axis` (right-handed, axis need not be unit)
#[inline]
pub fn rotation(axis: &Vector3<f64>, angle: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Unit::new_normalize(*axis), angle)
}

/// `n` rotations about `axis` at equal steps of `2π/n`, starting at `offset`
pub fn turns(axis: &Vector3<f64>, n: u32, offset: f64) -> Vec<UnitQuaternion<f64>> {
    (0..n)
        .map(|i| rotation(axis, offset + i as f64 * 2.0 * PI / n as f64))
        .collect()
}

/// Side length opposite to the angle `opposite`, from the three corner angles
///
/// Spherical law of cosines for angles:
/// `cos c = (cos C + cos A cos B) / (sin A sin B)`.
#[inline]
pub fn opposite_side(opposite: f64, adjacent_a: f64, adjacent_b: f64) -> f64 {
    let cos_side = (opposite.cos() + adjacent_a.cos() * adjacent_b.cos())
        / (adjacent_a.sin() * adjacent_b.sin());
    cos_side.clamp(-1.0, 1.0).acos()
}

/// Spherical triangle rebuilt from its corner angles
///
/// Vertex `a` sits on the north pole, `b` lies in the XZ plane towards +X,
/// and `c` lies at azimuth `A` from the X axis.
#[derive(Clone, Debug, PartialEq)]
pub struct SphericalTriangle {
    /// Corner angles `[A, B, C]` at vertices a, b, c
    pub angles: [f64; 3],
    /// Unit vertices `[a, b, c]`
    pub vertices: [Vector3<f64>; 3],
}

impl SphericalTriangle {
    /// Triangle with corner angles `A`, `B`, `C`
    pub fn from_angles(a: f64, b: f64, c: f64) -> Self {
        let side_c = opposite_side(c, a, b);
        let side_b = opposite_side(b, c, a);

        let pa = Vector3::z();
        let pb = rotation(&Vector3::y(), side_c) * pa;
        let hinge = rotation(&Vector3::z(), a) * Vector3::y();
        let pc = rotation(&hinge, side_b) * pa;

        Self {
            angles: [a, b, c],
            vertices: [pa, pb, pc],
        }
    }

    /// Triangle with angles `π/m`, `π/n`, `π/p` (Schwarz triangle of a spherical group)
    pub fn from_periods(m: u32, n: u32, p: u32) -> Self {
        Self::from_angles(PI / m as f64, PI / n as f64, PI / p as f64)
    }

    /// Vertex a (the north pole)
    pub fn a(&self) -> Vector3<f64> {
        self.vertices[0]
    }

    /// Vertex b
    pub fn b(&self) -> Vector3<f64> {
        self.vertices[1]
    }

    /// Vertex c
    pub fn c(&self) -> Vector3<f64> {
        self.vertices[2]
    }

    /// Rotations by twice each corner angle about its vertex
    ///
    /// These generate the rotation group of the triangle's reflection group.
    pub fn rotation_generators(&self) -> Vec<UnitQuaternion<f64>> {
        self.vertices
            .iter()
            .zip(self.angles.iter())
            .map(|(vertex, angle)| rotation(vertex, 2.0 * angle))
            .collect()
    }
}
