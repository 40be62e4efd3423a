// Static decorator composition: the wrapped type is a generic parameter,
// so the whole stack is known at compile time and nothing is boxed.

use super::{with_colour, with_transparency, Shape};

#[derive(Debug, Clone, PartialEq)]
pub struct Coloured<S> {
    shape: S,
    colour: String,
}

impl<S: Shape> Coloured<S> {
    pub fn new(shape: S, colour: impl Into<String>) -> Self {
        Self {
            shape,
            colour: colour.into(),
        }
    }
}

impl<S: Shape> Shape for Coloured<S> {
    fn info(&self) -> String {
        with_colour(self.shape.info(), &self.colour)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transparent<S> {
    shape: S,
    transparency: u8,
}

impl<S: Shape> Transparent<S> {
    pub fn new(shape: S, transparency: u8) -> Self {
        Self {
            shape,
            transparency,
        }
    }
}

impl<S: Shape> Shape for Transparent<S> {
    fn info(&self) -> String {
        with_transparency(self.shape.info(), self.transparency)
    }
}
