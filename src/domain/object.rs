//! Rigid object with a position and a facing direction.
//!
//! The object moves freely; keeping it on the grid is not its concern.

use std::fmt;

use thiserror::Error;
use tracing::trace;

use super::{Action, Orientation, Vector2};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MovableObject {
    position: Vector2,
    orientation: Orientation,
}

impl MovableObject {
    /// A new object always faces north.
    pub fn new(position: Vector2) -> Self {
        Self {
            position,
            orientation: Orientation::NORTH,
        }
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn move_forward(&mut self) {
        self.position += self.orientation.vector();
    }

    pub fn move_backward(&mut self) {
        self.position -= self.orientation.vector();
    }

    pub fn rotate_cw(&mut self) {
        self.orientation.rotate_cw();
    }

    pub fn rotate_ccw(&mut self) {
        self.orientation.rotate_ccw();
    }

    pub fn execute(&mut self, action: Action) -> Result<(), ObjectError> {
        trace!(%action, "executing");
        match action {
            Action::MoveForward => self.move_forward(),
            Action::MoveBackward => self.move_backward(),
            Action::RotateCw => self.rotate_cw(),
            Action::RotateCcw => self.rotate_ccw(),
            Action::Quit => return Err(ObjectError::UnsupportedAction(action)),
        }
        Ok(())
    }
}

impl fmt::Display for MovableObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MovableObject {{ position: {}, orientation: {} }}",
            self.position, self.orientation
        )
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectError {
    #[error("object cannot {0}")]
    UnsupportedAction(Action),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;

    const RNG_SEED: u64 = 2718281828;

    #[test]
    fn test_object_new() {
        let object = MovableObject::new(Vector2::new(2, 3));
        assert_eq!(object.position(), Vector2::new(2, 3));
        assert_eq!(object.orientation(), Orientation::NORTH);
        assert_eq!(
            object.to_string(),
            "MovableObject { position: [2, 3], orientation: [0, -1] }"
        );
    }

    #[rstest]
    #[case::north(0, (2, 1))]
    #[case::east(1, (3, 2))]
    #[case::south(2, (2, 3))]
    #[case::west(3, (1, 2))]
    fn test_object_move_forward(#[case] quarter_turns: usize, #[case] expected: (i64, i64)) {
        let mut object = MovableObject::new(Vector2::new(2, 2));
        for _ in 0..quarter_turns {
            object.rotate_cw();
        }
        object.move_forward();
        assert_eq!(<(i64, i64)>::from(object.position()), expected);
    }

    #[rstest]
    #[case::north(Orientation::NORTH)]
    #[case::east(Orientation::EAST)]
    #[case::south(Orientation::SOUTH)]
    #[case::west(Orientation::WEST)]
    fn test_object_move_inverse(#[case] orientation: Orientation) {
        let mut object = MovableObject::new(Vector2::new(0, 0));
        while object.orientation() != orientation {
            object.rotate_ccw();
        }
        object.move_forward();
        assert_ne!(object.position(), Vector2::new(0, 0));
        object.move_backward();
        assert_eq!(object.position(), Vector2::new(0, 0));
    }

    #[test]
    fn test_object_rotation_keeps_position() {
        let mut object = MovableObject::new(Vector2::new(-1, 5));
        object.rotate_cw();
        object.rotate_cw();
        object.rotate_ccw();
        assert_eq!(object.position(), Vector2::new(-1, 5));
        assert_eq!(object.orientation(), Orientation::EAST);
    }

    #[test]
    fn test_object_execute() {
        let mut object = MovableObject::new(Vector2::new(2, 2));
        object.execute(Action::RotateCw).unwrap();
        object.execute(Action::MoveForward).unwrap();
        object.execute(Action::RotateCcw).unwrap();
        object.execute(Action::MoveBackward).unwrap();
        assert_eq!(object.position(), Vector2::new(3, 3));
        assert_eq!(object.orientation(), Orientation::NORTH);
    }

    #[test]
    fn test_object_execute_quit() {
        let mut object = MovableObject::new(Vector2::new(2, 2));
        assert_eq!(
            object.execute(Action::Quit),
            Err(ObjectError::UnsupportedAction(Action::Quit))
        );
        assert_eq!(object, MovableObject::new(Vector2::new(2, 2)));
    }

    #[test]
    fn test_object_random_walk_reversed() {
        let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
        let actions = (0..200)
            .map(|_| match rng.random_range(0..4) {
                0 => Action::MoveForward,
                1 => Action::MoveBackward,
                2 => Action::RotateCw,
                _ => Action::RotateCcw,
            })
            .collect::<Vec<_>>();

        let start = MovableObject::new(Vector2::new(7, -3));
        let mut object = start.clone();
        for action in &actions {
            object.execute(*action).unwrap();
        }
        for action in actions.iter().rev() {
            let inverse = match action {
                Action::MoveForward => Action::MoveBackward,
                Action::MoveBackward => Action::MoveForward,
                Action::RotateCw => Action::RotateCcw,
                Action::RotateCcw => Action::RotateCw,
                Action::Quit => unreachable!(),
            };
            object.execute(inverse).unwrap();
        }
        assert_eq!(object, start);
    }
}
