use glam::{Mat4, Vec3};
use rand::Rng;

use crate::math::Aabb;
use crate::shape::{self, ShapeGeometry};

/// Fixed number of grid columns; rows grow with the shape count.
pub const COLUMNS: u32 = 3;

pub const FOV_Y_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
pub const EYE: Vec3 = Vec3::new(0.0, 0.0, -18.0);
/// Radians per second about the normalized (1,1,1) diagonal.
pub const SPIN_RATE: f32 = -1.5;

/// One rectangular tile of the output surface, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ViewportRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Row-major partition of the surface into COLUMNS * rows tiles. Tile sizes
/// use integer division; remainder pixels on the right/bottom edges stay
/// uncovered.
#[derive(Copy, Clone, Debug)]
pub struct ViewportGrid {
    tile_width: u32,
    tile_height: u32,
    rows: u32,
}

impl ViewportGrid {
    pub fn new(surface_width: u32, surface_height: u32, shape_count: usize) -> Self {
        // A count of zero draws nothing; clamping keeps the tile math total.
        let rows = (shape_count as u32).div_ceil(COLUMNS).max(1);
        Self {
            tile_width: surface_width / COLUMNS,
            tile_height: surface_height / rows,
            rows,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn tile(&self, index: usize) -> ViewportRect {
        let index = index as u32;
        ViewportRect {
            x: (index % COLUMNS) * self.tile_width,
            y: (index / COLUMNS) * self.tile_height,
            width: self.tile_width,
            height: self.tile_height,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.tile_width as f32 / self.tile_height as f32
    }
}

pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR)
}

/// Fixed for every shape and every frame: eye at (0,0,-18) looking at the
/// origin, +Y up.
pub fn view() -> Mat4 {
    Mat4::look_at_rh(EYE, Vec3::ZERO, Vec3::Y)
}

/// Centers the shape's bounding box on the origin, then spins the centered
/// shape about the (1,1,1) diagonal. Translation composes before rotation.
pub fn model(bounds: &Aabb, time: f32) -> Mat4 {
    let spin = Mat4::from_axis_angle(Vec3::ONE.normalize(), SPIN_RATE * time);
    spin * Mat4::from_translation(-bounds.center())
}

/// Everything the renderer needs to draw one shape this frame.
#[derive(Copy, Clone, Debug)]
pub struct DrawCall {
    pub shape_index: usize,
    pub viewport: ViewportRect,
    pub mvp: Mat4,
}

#[derive(Debug, Clone)]
pub struct ShapeInstance {
    pub bounds: Aabb,
}

/// Owns the shape collection and the scene clock. The collection is fixed at
/// initialization; only `elapsed` mutates afterwards, once per frame.
pub struct Scene {
    surface_width: u32,
    surface_height: u32,
    shapes: Vec<ShapeInstance>,
    elapsed: f32,
}

impl Scene {
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        Self {
            surface_width,
            surface_height,
            shapes: Vec::new(),
            elapsed: 0.0,
        }
    }

    /// Generates `shape_count` chains from the same segment spec and returns
    /// their geometry for GPU upload; the scene keeps the bounds.
    pub fn populate<R: Rng>(
        &mut self,
        segments: &[u32],
        shape_count: usize,
        rng: &mut R,
    ) -> Vec<ShapeGeometry> {
        let mut geometries = Vec::with_capacity(shape_count);
        for _ in 0..shape_count {
            let geometry = shape::generate(segments, rng);
            self.shapes.push(ShapeInstance {
                bounds: geometry.bounds,
            });
            geometries.push(geometry);
        }
        geometries
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn resize(&mut self, surface_width: u32, surface_height: u32) {
        self.surface_width = surface_width;
        self.surface_height = surface_height;
    }

    pub fn viewport_grid(&self) -> ViewportGrid {
        ViewportGrid::new(self.surface_width, self.surface_height, self.shapes.len())
    }

    /// Per-shape draw list for the current elapsed time. Pure: calling it
    /// twice without `advance` in between yields identical transforms.
    pub fn frame(&self) -> Vec<DrawCall> {
        let grid = self.viewport_grid();
        let projection = projection(grid.aspect());
        let view = view();

        self.shapes
            .iter()
            .enumerate()
            .map(|(i, instance)| DrawCall {
                shape_index: i,
                viewport: grid.tile(i),
                mvp: projection * view * model(&instance.bounds, self.elapsed),
            })
            .collect()
    }

    /// Advances the scene clock. Called after the frame is rendered, so the
    /// visuals always trail the tick: the first rendered frame is t = 0.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_shapes_fill_two_rows_of_three() {
        let grid = ViewportGrid::new(900, 600, 6);
        assert_eq!(grid.rows(), 2);
        let cells: Vec<(u32, u32)> = (0..6).map(|i| {
            let t = grid.tile(i);
            (t.x / t.width, t.y / t.height)
        }).collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn tile_height_divides_surface_by_row_count() {
        let grid = ViewportGrid::new(800, 600, 6);
        assert_eq!(grid.tile(0).height, 300);
        assert_eq!(grid.tile(0).width, 800 / 3);
    }

    #[test]
    fn row_count_rounds_up() {
        assert_eq!(ViewportGrid::new(800, 600, 1).rows(), 1);
        assert_eq!(ViewportGrid::new(800, 600, 3).rows(), 1);
        assert_eq!(ViewportGrid::new(800, 600, 4).rows(), 2);
        assert_eq!(ViewportGrid::new(800, 600, 7).rows(), 3);
    }

    #[test]
    fn empty_scene_renders_no_draw_calls() {
        let scene = Scene::new(800, 600);
        assert!(scene.frame().is_empty());
        // Tile math stays total even with nothing to draw.
        assert_eq!(scene.viewport_grid().rows(), 1);
    }

    #[test]
    fn view_matrix_is_time_independent() {
        assert_eq!(view(), view());
        let eye_in_view = view().transform_point3(EYE);
        assert!(eye_in_view.abs().max_element() < 1e-5);
    }

    #[test]
    fn model_centers_bounds_at_time_zero() {
        let bounds = Aabb::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(5.0, 4.0, 7.0));
        let m = model(&bounds, 0.0);
        let moved = m.transform_point3(bounds.center());
        assert!(moved.length() < 1e-6);
    }
}
