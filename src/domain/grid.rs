//! Fixed-size table the objects are placed on.

use thiserror::Error;

use super::{MovableObject, Vector2};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct ObjectId(usize);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    width: i32,
    height: i32,
    objects: Vec<MovableObject>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            objects: Vec::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn objects(&self) -> &[MovableObject] {
        &self.objects
    }

    /// Places the object without checking whether it lies within the bounds.
    pub fn place(&mut self, object: MovableObject) -> ObjectId {
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    pub fn object(&self, id: ObjectId) -> Result<&MovableObject, GridError> {
        self.objects.get(id.0).ok_or(GridError::MissingObject(id))
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut MovableObject, GridError> {
        self.objects.get_mut(id.0).ok_or(GridError::MissingObject(id))
    }

    pub fn contains(&self, position: Vector2) -> bool {
        (0..i64::from(self.width)).contains(&position.x())
            && (0..i64::from(self.height)).contains(&position.y())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid size {width}x{height} is not positive")]
    InvalidSize { width: i32, height: i32 },
    #[error("missing object {0:?}")]
    MissingObject(ObjectId),
}
