use glam::Vec3;

/// One cube corner per face winds CCW seen from outside, so every face
/// survives back-face culling. Shared with the shader via `desc()`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coord: [f32; 2],
}

impl Vertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Vertices emitted for every placed cube: 6 faces x 2 triangles x 3 corners.
pub const VERTICES_PER_CUBE: usize = 36;

/// Corner offsets for the six faces of a unit cube (half-extent 1), each
/// wound CCW outward: top, bottom, right, left, back, front.
const FACES: [[Vec3; 4]; 6] = [
    [
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, -1.0),
    ],
    [
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, -1.0, -1.0),
    ],
    [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
    ],
    [
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ],
    [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ],
    [
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
    ],
];

/// Splits one quad face into two triangles sharing the p0-p2 diagonal. The
/// texcoords span the unit square in the same corner order on every face.
fn emit_face(vertices: &mut Vec<Vertex>, center: Vec3, corners: &[Vec3; 4]) {
    let [p0, p1, p2, p3] = corners.map(|p| (p + center).to_array());

    vertices.push(Vertex { position: p0, tex_coord: [0.0, 0.0] });
    vertices.push(Vertex { position: p1, tex_coord: [0.0, 1.0] });
    vertices.push(Vertex { position: p2, tex_coord: [1.0, 1.0] });

    vertices.push(Vertex { position: p2, tex_coord: [1.0, 1.0] });
    vertices.push(Vertex { position: p3, tex_coord: [1.0, 0.0] });
    vertices.push(Vertex { position: p0, tex_coord: [0.0, 0.0] });
}

/// Expands a list of cube centers into a flat triangle-list vertex buffer,
/// `VERTICES_PER_CUBE` vertices per center, in placement order.
pub fn expand_blocks(blocks: &[Vec3]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(blocks.len() * VERTICES_PER_CUBE);
    for &center in blocks {
        for face in &FACES {
            emit_face(&mut vertices, center, face);
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_emits_36_vertices_per_cube() {
        let blocks = [Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0)];
        let vertices = expand_blocks(&blocks);
        assert_eq!(vertices.len(), 2 * VERTICES_PER_CUBE);
    }

    #[test]
    fn cube_vertices_stay_within_half_extent_of_center() {
        let center = Vec3::new(4.0, -2.0, 6.0);
        let vertices = expand_blocks(&[center]);
        for v in &vertices {
            let offset = Vec3::from_array(v.position) - center;
            assert_eq!(offset.abs(), Vec3::ONE, "corner offsets are unit-sized");
        }
    }

    #[test]
    fn faces_wind_ccw_outward() {
        let vertices = expand_blocks(&[Vec3::ZERO]);
        for tri in vertices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|v| Vec3::from_array(v.position));
            let normal = (b - a).cross(c - b);
            // The face centroid points outward from the cube center; a CCW
            // winding makes the triangle normal agree with it.
            let centroid = (a + b + c) / 3.0;
            assert!(
                normal.dot(centroid) > 0.0,
                "triangle ({a:?}, {b:?}, {c:?}) winds inward"
            );
        }
    }

    #[test]
    fn every_face_spans_the_unit_texture_square() {
        let vertices = expand_blocks(&[Vec3::ZERO]);
        for face in vertices.chunks_exact(6) {
            let uvs: Vec<[f32; 2]> = face.iter().map(|v| v.tex_coord).collect();
            assert_eq!(
                uvs,
                vec![
                    [0.0, 0.0],
                    [0.0, 1.0],
                    [1.0, 1.0],
                    [1.0, 1.0],
                    [1.0, 0.0],
                    [0.0, 0.0]
                ]
            );
        }
    }
}
