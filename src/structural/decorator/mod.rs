//! Decorators over a shared [`Shape`] capability, plus a string decorator.
//!
//! - [`dynamic`]: wrappers own a `Box<dyn Shape>`, composed at run time.
//! - [`generic`]: wrappers are generic over the inner shape, composed at
//!   compile time.
//! - [`string`]: a newtype adding behaviour to `String`.

pub mod dynamic;
pub mod generic;
pub mod string;

pub use dynamic::{ColouredShape, TransparentShape};
pub use generic::{Coloured, Transparent};
pub use string::RichString;

/// Anything that can describe itself.
pub trait Shape {
    fn info(&self) -> String;
}

impl<S: Shape + ?Sized> Shape for &S {
    fn info(&self) -> String {
        (**self).info()
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn info(&self) -> String {
        (**self).info()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Not part of [`Shape`], so unreachable through any decorator.
    pub fn scale(&mut self, factor: f64) {
        self.radius *= factor;
    }
}

impl Shape for Circle {
    fn info(&self) -> String {
        format!("A circle of radius {:?}", self.radius)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Shape for Square {
    fn info(&self) -> String {
        format!("A square of side {:?}", self.side)
    }
}

fn with_colour(inner: String, colour: &str) -> String {
    format!("{} of {} colour", inner, colour)
}

fn with_transparency(inner: String, transparency: u8) -> String {
    format!("{} with {}% transparency", inner, transparency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_shapes() {
        assert_eq!(Circle::new(10.0).info(), "A circle of radius 10.0");
        assert_eq!(Square::new(5.0).info(), "A square of side 5.0");
    }

    #[test]
    fn test_scale() {
        let mut circle = Circle::new(2.0);
        circle.scale(1.5);
        assert_eq!(circle.radius(), 3.0);
    }

    #[test]
    fn test_reference_and_box_forward() {
        let circle = Circle::new(1.0);
        let boxed: Box<dyn Shape> = Box::new(circle);
        assert_eq!((&circle).info(), circle.info());
        assert_eq!(boxed.info(), circle.info());
    }
}
