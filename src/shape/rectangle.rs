use egui::{Color32, Painter, Pos2, Rect, Vec2};

use super::{Shape, ShapeKind, ShapeStyle, common::HIT_TOLERANCE};
use crate::id_generator::ShapeId;

/// Axis-aligned rectangle anchored at the point where the gesture began.
///
/// `width` and `height` are signed: dragging up or left yields negative
/// extents, which are kept as-is and only normalized when painting or
/// hit testing.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    id: ShapeId,
    fill: Color32,
    pub origin: Pos2,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(id: ShapeId, origin: Pos2, width: f32, height: f32, fill: Color32) -> Self {
        Self {
            id,
            fill,
            origin,
            width,
            height,
        }
    }

    /// The corner diagonally opposite to `origin`
    pub fn corner(&self) -> Pos2 {
        self.origin + Vec2::new(self.width, self.height)
    }
}

impl Shape for Rectangle {
    fn begin(id: ShapeId, pos: Pos2, fill: Color32, default_size: f32) -> Self {
        Self::new(id, pos, default_size, default_size, fill)
    }

    fn update(&mut self, pointer: Pos2) {
        self.width = pointer.x - self.origin.x;
        self.height = pointer.y - self.origin.y;
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn id(&self) -> ShapeId {
        self.id
    }

    fn fill(&self) -> Color32 {
        self.fill
    }

    fn rect(&self) -> Rect {
        Rect::from_two_pos(self.origin, self.corner())
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        self.rect().expand(HIT_TOLERANCE / 2.0).contains(pos)
    }

    fn translate(&mut self, delta: Vec2) {
        self.origin += delta;
    }

    fn draw(&self, painter: &Painter, offset: Vec2, style: &ShapeStyle) {
        painter.rect(self.rect().translate(offset), 0.0, self.fill, style.stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::generate_id;

    #[test]
    fn test_update_recomputes_from_origin() {
        let mut rect = Rectangle::begin(generate_id(), Pos2::new(10.0, 10.0), Color32::RED, 20.0);
        rect.update(Pos2::new(100.0, 100.0));
        rect.update(Pos2::new(30.0, 50.0));
        assert_eq!(rect.width, 20.0);
        assert_eq!(rect.height, 40.0);
        assert_eq!(rect.origin, Pos2::new(10.0, 10.0));
    }

    #[test]
    fn test_negative_extent_is_kept() {
        let mut rect = Rectangle::begin(generate_id(), Pos2::new(50.0, 50.0), Color32::RED, 20.0);
        rect.update(Pos2::new(20.0, 10.0));
        assert_eq!(rect.width, -30.0);
        assert_eq!(rect.height, -40.0);

        let bounds = rect.rect();
        assert_eq!(bounds.min, Pos2::new(20.0, 10.0));
        assert_eq!(bounds.max, Pos2::new(50.0, 50.0));
        assert!(rect.hit_test(Pos2::new(30.0, 30.0)));
    }
}
