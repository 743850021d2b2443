use crate::*;

/// Geometry that can be placed in a drawing.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Polyline { points: Vec<Point2>, closed: bool },
    Line { from: Point2, to: Point2 },
    Text { value: String, height: f64, insert: Point2 },
}

/// A shape on a layer, in output units.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub layer: Layer,
    pub shape: Shape,
}

impl Primitive {
    /// A closed polyline.
    pub fn polygon(layer: Layer, points: Vec<Point2>) -> Self {
        Self {
            layer,
            shape: Shape::Polyline {
                points,
                closed: true,
            },
        }
    }

    /// An open polyline.
    pub fn polyline(layer: Layer, points: Vec<Point2>) -> Self {
        Self {
            layer,
            shape: Shape::Polyline {
                points,
                closed: false,
            },
        }
    }

    pub fn line(layer: Layer, from: Point2, to: Point2) -> Self {
        Self {
            layer,
            shape: Shape::Line { from, to },
        }
    }

    pub fn text(layer: Layer, value: String, height: f64, insert: Point2) -> Self {
        Self {
            layer,
            shape: Shape::Text {
                value,
                height,
                insert,
            },
        }
    }

    /// The points this primitive occupies.
    pub fn points(&self) -> Vec<Point2> {
        match &self.shape {
            Shape::Polyline { points, .. } => points.clone(),
            Shape::Line { from, to } => vec![*from, *to],
            Shape::Text { insert, .. } => vec![*insert],
        }
    }
}

/// A drawing surface primitives are placed on.
///
/// Implementors are expected to declare the primitive's layer (with its colour) on first use.
pub trait Canvas {
    fn draw(&mut self, prim: Primitive);
}

/// Collects primitives, handy for inspecting a conversion.
impl Canvas for Vec<Primitive> {
    fn draw(&mut self, prim: Primitive) {
        self.push(prim);
    }
}
