use egui::{Color32, Painter, Pos2, Rect, Vec2};

use super::{Shape, ShapeKind, ShapeStyle, common::HIT_TOLERANCE};
use crate::id_generator::ShapeId;

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    id: ShapeId,
    fill: Color32,
    pub center: Pos2,
    pub radius: f32,
}

impl Circle {
    pub fn new(id: ShapeId, center: Pos2, radius: f32, fill: Color32) -> Self {
        Self {
            id,
            fill,
            center,
            radius,
        }
    }
}

impl Shape for Circle {
    fn begin(id: ShapeId, pos: Pos2, fill: Color32, default_size: f32) -> Self {
        Self::new(id, pos, default_size, fill)
    }

    fn update(&mut self, pointer: Pos2) {
        let dx = pointer.x - self.center.x;
        let dy = pointer.y - self.center.y;
        self.radius = (dy * dy + dx * dx).sqrt();
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn id(&self) -> ShapeId {
        self.id
    }

    fn fill(&self) -> Color32 {
        self.fill
    }

    fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, Vec2::splat(self.radius * 2.0))
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        self.center.distance(pos) <= self.radius + HIT_TOLERANCE / 2.0
    }

    fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    fn draw(&self, painter: &Painter, offset: Vec2, style: &ShapeStyle) {
        painter.circle(self.center + offset, self.radius, self.fill, style.stroke);
    }
}
