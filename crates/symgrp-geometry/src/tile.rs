// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fundamental tiles - spherical polygons whose copies cover the sphere

use crate::{UnitQuaternion, Vector3};
use symgrp_model::TileData;

/// Fundamental tile: unit vertices and triangles indexing them
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    /// Vertices on the unit sphere
    pub vertices: Vec<Vector3<f64>>,
    /// Triangles, counter-clockwise seen from outside
    pub faces: Vec<[usize; 3]>,
}

impl Tile {
    /// Create a tile from vertices and faces
    pub fn new(vertices: Vec<Vector3<f64>>, faces: Vec<[usize; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Whole sphere as an octahedron (tile of the trivial group)
    pub fn octahedron() -> Self {
        Self::new(
            octahedron_vertices().to_vec(),
            vec![
                [0, 2, 4],
                [0, 5, 2],
                [0, 4, 3],
                [0, 3, 5],
                [1, 4, 2],
                [1, 2, 5],
                [1, 3, 4],
                [1, 5, 3],
            ],
        )
    }

    /// Half of the octahedron on the `y >= 0` side
    pub fn half_octahedron() -> Self {
        Self::new(
            octahedron_vertices()[..5].to_vec(),
            vec![[0, 2, 4], [0, 4, 3], [1, 4, 2], [1, 3, 4]],
        )
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Copy of the tile with every vertex rotated
    pub fn rotated(&self, rotation: &UnitQuaternion<f64>) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| rotation * v).collect(),
            faces: self.faces.clone(),
        }
    }

    /// Flatten into f32/u32 buffers; normals are the vertex directions
    pub fn to_tile_data(&self) -> TileData {
        let mut data = TileData::with_capacity(self.vertices.len(), self.faces.len() * 3);
        for vertex in &self.vertices {
            let normal = vertex.normalize();
            data.positions
                .extend_from_slice(&[vertex.x as f32, vertex.y as f32, vertex.z as f32]);
            data.normals
                .extend_from_slice(&[normal.x as f32, normal.y as f32, normal.z as f32]);
        }
        for face in &self.faces {
            data.indices.extend(face.iter().map(|&i| i as u32));
        }
        data
    }
}

fn octahedron_vertices() -> [Vector3<f64>; 6] {
    [
        Vector3::z(),
        -Vector3::z(),
        Vector3::x(),
        -Vector3::x(),
        Vector3::y(),
        -Vector3::y(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trig::rotation;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    /// Signed volume of the cone from the origin; positive when the face points outwards
    fn orientation(tile: &Tile, face: &[usize; 3]) -> f64 {
        let [a, b, c] = face.map(|i| tile.vertices[i]);
        a.dot(&b.cross(&c))
    }

    #[test]
    fn test_octahedron() {
        let tile = Tile::octahedron();
        assert_eq!(tile.vertex_count(), 6);
        assert_eq!(tile.triangle_count(), 8);
        for face in &tile.faces {
            assert!(orientation(&tile, face) > 0.0);
        }
    }

    #[test]
    fn test_half_octahedron() {
        let tile = Tile::half_octahedron();
        assert_eq!(tile.vertex_count(), 5);
        assert_eq!(tile.triangle_count(), 4);
        assert!(tile.vertices.iter().all(|v| v.y >= 0.0));
        for face in &tile.faces {
            assert!(orientation(&tile, face) > 0.0);
        }
    }

    #[test]
    fn test_rotated_keeps_faces() {
        let tile = Tile::octahedron();
        let turned = tile.rotated(&rotation(&Vector3::z(), PI / 2.0));
        assert_eq!(turned.faces, tile.faces);
        assert_relative_eq!(turned.vertices[2], Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(turned.vertices[0], Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_tile_data_buffers() {
        let data = Tile::half_octahedron().to_tile_data();
        assert_eq!(data.vertex_count(), 5);
        assert_eq!(data.triangle_count(), 4);
        assert_eq!(&data.positions[..3], &[0.0, 0.0, 1.0]);
        assert_eq!(data.positions, data.normals);
        assert_eq!(&data.indices[..3], &[0, 2, 4]);
    }
}
