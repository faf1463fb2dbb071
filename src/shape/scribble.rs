use egui::{Color32, Painter, Pos2, Rect, Shape as EguiShape, Vec2};

use super::{Shape, ShapeKind, ShapeStyle, common};
use crate::id_generator::ShapeId;

/// Freehand stroke. Points are only ever appended while drawing.
///
/// The stroke is open, so `fill` is recorded but not painted.
#[derive(Debug, Clone, PartialEq)]
pub struct Scribble {
    id: ShapeId,
    fill: Color32,
    points: Vec<Pos2>,
}

impl Scribble {
    pub fn new(id: ShapeId, points: Vec<Pos2>, fill: Color32) -> Self {
        Self { id, fill, points }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }
}

impl Shape for Scribble {
    fn begin(id: ShapeId, pos: Pos2, fill: Color32, _default_size: f32) -> Self {
        Self::new(id, vec![pos], fill)
    }

    fn update(&mut self, pointer: Pos2) {
        self.points.push(pointer);
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Scribble
    }

    fn id(&self) -> ShapeId {
        self.id
    }

    fn fill(&self) -> Color32 {
        self.fill
    }

    fn rect(&self) -> Rect {
        common::calculate_bounds(&self.points, 0.0)
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        common::polyline_hit(&self.points, pos, common::HIT_TOLERANCE)
    }

    fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }

    fn draw(&self, painter: &Painter, offset: Vec2, style: &ShapeStyle) {
        match self.points.as_slice() {
            [] => {}
            // Round cap of a zero-length line
            [single] => {
                painter.circle_filled(*single + offset, style.stroke.width / 2.0, style.stroke.color);
            }
            points => {
                let points = points.iter().map(|p| *p + offset).collect::<Vec<_>>();
                painter.add(EguiShape::line(points, style.stroke));
            }
        }
    }
}
