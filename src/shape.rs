//! The shape hierarchy: a positioned base [`Shape`] and the concrete
//! [`Square`] and [`Rectangle`] variants refining it.
//!
//! Shared behavior is expressed through the capability traits
//! [`Movable`], [`Measurable`] and [`Areable`] rather than inheritance.
//! Only the concrete variants implement [`Areable`]; the base shape is
//! abstract for area purposes and reports [`ShapeError::UnsupportedOperation`]
//! when measured through the dynamic [`AnyShape`] surface.

use crate::math::Vec2;

/// Error produced when measuring a shape that has no area formula.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeError {
    #[error("shape has no defined form")]
    UnsupportedOperation,
}

/// Capability to be repositioned in the plane.
pub trait Movable {
    /// The current position.
    fn position(&self) -> Vec2;

    /// Set the position to exactly `(x, y)`.
    ///
    /// Performs no validation; keeping the coordinates finite
    /// is up to the caller.
    fn move_to(&mut self, x: f64, y: f64);
}

/// Capability to measure how far from the origin a shape sits.
pub trait Measurable: Movable {
    /// Euclidean distance of the current position from the origin.
    fn distance_from_origin(&self) -> f64 {
        self.position().mag()
    }
}

/// Capability to compute a surface area.
///
/// Implemented only by the concrete variants; a bare [`Shape`]
/// cannot be asked for its area statically at all.
pub trait Areable {
    fn area(&self) -> f64;
}

/// The positionable base of the hierarchy.
///
/// A bare shape can be moved and measured for distance from the origin,
/// but it has no defined form and therefore no area.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Shape {
    #[cfg_attr(feature = "serde-types", serde(with = "crate::math::serde_position"))]
    pub position: Vec2,
}

impl Shape {
    /// Create a shape at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_position(mut self, pos: impl Into<[f64; 2]>) -> Self {
        let [x, y] = pos.into();
        self.position = Vec2::new(x, y);
        self
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape {
            position: Vec2::zero(),
        }
    }
}

impl Movable for Shape {
    #[inline]
    fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    fn move_to(&mut self, x: f64, y: f64) {
        self.position = Vec2::new(x, y);
    }
}

impl Measurable for Shape {}

/// A square with a side length, positioned via its contained [`Shape`].
///
/// Width is not validated; a negative width is kept as-is
/// and squares to a non-negative area.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Square {
    pub shape: Shape,
    pub width: f64,
}

impl Square {
    /// Create a square at the origin with the given side length.
    pub fn new(width: f64) -> Self {
        Square {
            shape: Shape::new(),
            width,
        }
    }

    #[inline]
    pub fn with_position(mut self, pos: impl Into<[f64; 2]>) -> Self {
        self.shape = self.shape.with_position(pos);
        self
    }

    #[inline]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
}

impl Movable for Square {
    #[inline]
    fn position(&self) -> Vec2 {
        self.shape.position
    }

    #[inline]
    fn move_to(&mut self, x: f64, y: f64) {
        self.shape.move_to(x, y);
    }
}

impl Measurable for Square {}

impl Areable for Square {
    #[inline]
    fn area(&self) -> f64 {
        self.width * self.width
    }
}

/// A rectangle, refining [`Square`] with a height of its own.
///
/// Height defaults to 0, so an un-configured rectangle measures as
/// area 0 until a height is set. Like width, it is not validated.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Rectangle {
    pub square: Square,
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle at the origin with the given side lengths.
    pub fn new(width: f64, height: f64) -> Self {
        Rectangle {
            square: Square::new(width),
            height,
        }
    }

    #[inline]
    pub fn with_position(mut self, pos: impl Into<[f64; 2]>) -> Self {
        self.square = self.square.with_position(pos);
        self
    }

    #[inline]
    pub fn with_width(mut self, width: f64) -> Self {
        self.square.width = width;
        self
    }

    #[inline]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.square.width
    }
}

impl Movable for Rectangle {
    #[inline]
    fn position(&self) -> Vec2 {
        self.square.position()
    }

    #[inline]
    fn move_to(&mut self, x: f64, y: f64) {
        self.square.move_to(x, y);
    }
}

impl Measurable for Rectangle {}

impl Areable for Rectangle {
    #[inline]
    fn area(&self) -> f64 {
        self.square.width * self.height
    }
}

/// A shape variant dispatched at runtime,
/// for holding mixed shape kinds in one place.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub enum AnyShape {
    Shape(Shape),
    Square(Square),
    Rectangle(Rectangle),
}

impl AnyShape {
    /// The surface area of the variant.
    ///
    /// The base shape has no defined form, so measuring it is the one
    /// failure path in the hierarchy. The error is never caught here;
    /// it propagates to the caller.
    pub fn area(&self) -> Result<f64, ShapeError> {
        match self {
            AnyShape::Shape(_) => Err(ShapeError::UnsupportedOperation),
            AnyShape::Square(sq) => Ok(sq.area()),
            AnyShape::Rectangle(re) => Ok(re.area()),
        }
    }
}

impl Movable for AnyShape {
    #[inline]
    fn position(&self) -> Vec2 {
        match self {
            AnyShape::Shape(s) => s.position(),
            AnyShape::Square(sq) => sq.position(),
            AnyShape::Rectangle(re) => re.position(),
        }
    }

    #[inline]
    fn move_to(&mut self, x: f64, y: f64) {
        match self {
            AnyShape::Shape(s) => s.move_to(x, y),
            AnyShape::Square(sq) => sq.move_to(x, y),
            AnyShape::Rectangle(re) => re.move_to(x, y),
        }
    }
}

impl Measurable for AnyShape {}

impl From<Shape> for AnyShape {
    fn from(s: Shape) -> Self {
        AnyShape::Shape(s)
    }
}

impl From<Square> for AnyShape {
    fn from(sq: Square) -> Self {
        AnyShape::Square(sq)
    }
}

impl From<Rectangle> for AnyShape {
    fn from(re: Rectangle) -> Self {
        AnyShape::Rectangle(re)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn moved_distance_matches_euclidean_norm() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let x = rng.gen_range(-1000.0..1000.0);
            let y = rng.gen_range(-1000.0..1000.0);
            let mut s = Shape::new();
            s.move_to(x, y);
            let expected = (x * x + y * y).sqrt();
            assert!((s.distance_from_origin() - expected).abs() < 0.001);
        }
    }

    #[test]
    fn square_area_is_width_squared() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let w = rng.gen_range(0.0..100.0);
            let sq = Square::new(w);
            assert!((sq.area() - w * w).abs() < 0.001);
        }
    }

    #[test]
    fn rectangle_area_is_width_times_height() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let w = rng.gen_range(0.0..100.0);
            let h = rng.gen_range(0.0..100.0);
            let re = Rectangle::new(w, h);
            assert!((re.area() - w * h).abs() < 0.001);
        }
    }

    #[test]
    fn unconfigured_rectangle_height_measures_zero() {
        let re = Rectangle::default().with_width(10.0);
        assert_eq!(re.area(), 0.0);
    }

    #[test]
    fn bare_shape_has_no_area_but_measures_distance() {
        let mut s = AnyShape::from(Shape::new());
        assert_eq!(s.area(), Err(ShapeError::UnsupportedOperation));
        // distance never fails even though area does
        assert_eq!(s.distance_from_origin(), 0.0);
        s.move_to(3.0, 4.0);
        assert!((s.distance_from_origin() - 5.0).abs() < 0.001);
        assert_eq!(s.area(), Err(ShapeError::UnsupportedOperation));
    }

    #[test]
    fn moved_base_shape() {
        let mut s = Shape::new();
        s.move_to(10.0, 10.0);
        assert!((s.distance_from_origin() - 14.142).abs() < 0.001);
    }

    #[test]
    fn moved_square() {
        let mut sq = Square::new(5.0);
        sq.move_to(-5.0, -5.0);
        assert_eq!(sq.area(), 25.0);
        assert!((sq.distance_from_origin() - 7.071).abs() < 0.001);
    }

    #[test]
    fn moved_rectangle() {
        let mut re = Rectangle::new(10.0, 5.0);
        re.move_to(25.0, 25.0);
        assert_eq!(re.area(), 50.0);
        assert!((re.distance_from_origin() - 35.355).abs() < 0.001);
    }

    #[test]
    fn mixed_shapes_dispatch_by_variant() {
        let shapes = [
            AnyShape::from(Shape::new().with_position([10.0, 10.0])),
            AnyShape::from(Square::new(5.0).with_position([-5.0, -5.0])),
            AnyShape::from(Rectangle::new(10.0, 5.0).with_position([25.0, 25.0])),
        ];
        assert_eq!(shapes[0].area(), Err(ShapeError::UnsupportedOperation));
        assert_eq!(shapes[1].area(), Ok(25.0));
        assert_eq!(shapes[2].area(), Ok(50.0));
        let dists: Vec<f64> = shapes.iter().map(|s| s.distance_from_origin()).collect();
        for (actual, expected) in dists.iter().zip([14.142, 7.071, 35.355]) {
            assert!((actual - expected).abs() < 0.001);
        }
    }

    #[test]
    fn negative_dimensions_are_kept_as_is() {
        // dimensions are deliberately not validated
        let sq = Square::new(-3.0);
        assert_eq!(sq.area(), 9.0);
        let re = Rectangle::new(-2.0, 4.0);
        assert_eq!(re.area(), -8.0);
    }
}
