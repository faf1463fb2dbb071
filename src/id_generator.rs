use std::fmt;

use uuid::Uuid;

/// Opaque identifier of a shape, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn generate_id() -> ShapeId {
    ShapeId(Uuid::new_v4())
}
