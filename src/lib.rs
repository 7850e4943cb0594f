pub mod math;
#[cfg(feature = "serde-types")]
pub use math::serde_position;
pub use math::{uv, Vec2};

pub mod shape;
pub use shape::{AnyShape, Areable, Measurable, Movable, Rectangle, Shape, ShapeError, Square};
