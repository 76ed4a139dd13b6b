mod geometry;
mod walk;

pub use geometry::{expand_blocks, Vertex, VERTICES_PER_CUBE};
pub use walk::{walk, Axis, CUBE_SPACING};

use crate::math::Aabb;
use glam::Vec3;
use rand::Rng;

/// CPU-side output of shape generation: the flat vertex stream ready for GPU
/// upload and the box enclosing every emitted position.
#[derive(Debug, Clone)]
pub struct ShapeGeometry {
    pub vertices: Vec<Vertex>,
    pub bounds: Aabb,
}

impl ShapeGeometry {
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }
}

/// Generates one block-chain shape: random walk over the segment lengths,
/// cube expansion, bounding-box derivation. Total: a segment list that
/// places no cubes yields an empty vertex stream with a zero-size box at
/// the origin, which downstream draws as nothing.
pub fn generate<R: Rng>(segments: &[u32], rng: &mut R) -> ShapeGeometry {
    let blocks = walk(segments, rng);
    let vertices = expand_blocks(&blocks);
    let bounds = Aabb::from_points(vertices.iter().map(|v| Vec3::from_array(v.position)))
        .unwrap_or(Aabb::new(Vec3::ZERO, Vec3::ZERO));
    ShapeGeometry { vertices, bounds }
}
