// Dynamic decorator composition: each wrapper owns a trait object, so
// wrappers can be stacked in any order at run time.

use super::{with_colour, with_transparency, Shape};

pub struct ColouredShape<'a> {
    shape: Box<dyn Shape + 'a>,
    colour: String,
}

impl<'a> ColouredShape<'a> {
    pub fn new(shape: impl Shape + 'a, colour: impl Into<String>) -> Self {
        Self {
            shape: Box::new(shape),
            colour: colour.into(),
        }
    }
}

impl Shape for ColouredShape<'_> {
    fn info(&self) -> String {
        with_colour(self.shape.info(), &self.colour)
    }
}

pub struct TransparentShape<'a> {
    shape: Box<dyn Shape + 'a>,
    transparency: u8,
}

impl<'a> TransparentShape<'a> {
    pub fn new(shape: impl Shape + 'a, transparency: u8) -> Self {
        Self {
            shape: Box::new(shape),
            transparency,
        }
    }
}

impl Shape for TransparentShape<'_> {
    fn info(&self) -> String {
        with_transparency(self.shape.info(), self.transparency)
    }
}
