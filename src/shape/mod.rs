use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

mod arrow;
mod circle;
pub(crate) mod common;
mod rectangle;
mod scribble;

pub use arrow::Arrow;
pub use circle::Circle;
pub use common::HIT_TOLERANCE;
pub use rectangle::Rectangle;
pub use scribble::Scribble;

use crate::id_generator::ShapeId;

/// The four kinds of shape records. Each kind lives in its own collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Arrow,
    Scribble,
}

impl ShapeKind {
    /// Back-to-front paint order of the collections
    pub const RENDER_ORDER: [ShapeKind; 4] = [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Arrow,
        ShapeKind::Scribble,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Arrow => "arrow",
            ShapeKind::Scribble => "scribble",
        }
    }
}

/// Addresses a single shape: which collection, and which record in it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeRef {
    pub kind: ShapeKind,
    pub id: ShapeId,
}

impl ShapeRef {
    pub fn new(kind: ShapeKind, id: ShapeId) -> Self {
        Self { kind, id }
    }
}

/// Outline used when painting shapes. Fill comes from the shape itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub stroke: Stroke,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke: Stroke::new(2.0, Color32::BLACK),
        }
    }
}

/// Common behaviour of every shape record
pub trait Shape {

    /// Create the record for a gesture starting at `pos`.
    ///
    /// `default_size` gives a freshly clicked shape visible extent before the
    /// pointer moves.
    fn begin(id: ShapeId, pos: Pos2, fill: Color32, default_size: f32) -> Self
    where
        Self: Sized;

    /// Apply a pointer-move of the gesture that created this shape
    fn update(&mut self, pointer: Pos2);

    fn kind(&self) -> ShapeKind;

    fn id(&self) -> ShapeId;

    fn fill(&self) -> Color32;

    fn shape_ref(&self) -> ShapeRef {
        ShapeRef::new(self.kind(), self.id())
    }

    /// Normalized bounding rectangle in canvas space
    fn rect(&self) -> Rect;

    /// Test if the shape covers `pos` (canvas space)
    fn hit_test(&self, pos: Pos2) -> bool;

    fn translate(&mut self, delta: Vec2);

    /// Paint the shape; `offset` maps canvas space to screen space
    fn draw(&self, painter: &Painter, offset: Vec2, style: &ShapeStyle);
}
