use crate::shape::ShapeRef;

/// The single shape transform handles attach to, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    target: Option<ShapeRef>,
}

impl Selection {
    pub fn target(&self) -> Option<ShapeRef> {
        self.target
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_none()
    }

    pub fn is_selected(&self, shape: ShapeRef) -> bool {
        self.target == Some(shape)
    }

    /// Replace whatever was selected with `shape`
    pub fn set(&mut self, shape: ShapeRef) {
        self.target = Some(shape);
    }

    pub fn clear(&mut self) {
        self.target = None;
    }
}
