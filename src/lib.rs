pub mod cli;
pub mod clock;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod shape;

pub use scene::{Scene, ViewportGrid, COLUMNS};
pub use shape::{generate, ShapeGeometry};
