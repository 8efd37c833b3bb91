//! The domain module encapsulates the core rules. It defines the `Grid` and `MovableObject`
//! entities, the commands acting on them and the geometry they share.
//!
//! Nothing in here performs I/O; diagnostics are emitted through `tracing` only.

mod basis;
mod command;
mod grid;
mod object;

pub use basis::{Orientation, Vector2};
pub use command::{Action, Command, CommandError};
pub use grid::{Grid, GridError, ObjectId};
pub use object::{MovableObject, ObjectError};
