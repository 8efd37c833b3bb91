//! Basic building blocks.
//!
//! The y-axis points down: moving north decreases y. Coordinates are `i64` while grids and start
//! positions are bounded by `i32`, so no sequence of moves can overflow.

use std::{
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use nalgebra::Matrix2;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Vector2 {
    x: i64,
    y: i64,
}

impl Vector2 {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    fn transformed(self, matrix: Matrix2<i64>) -> Self {
        (matrix * nalgebra::Vector2::<i64>::from(self)).into()
    }
}

impl From<Vector2> for nalgebra::Vector2<i64> {
    fn from(value: Vector2) -> Self {
        nalgebra::Vector2::new(value.x, value.y)
    }
}

impl From<nalgebra::Vector2<i64>> for Vector2 {
    fn from(value: nalgebra::Vector2<i64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Vector2> for (i64, i64) {
    fn from(value: Vector2) -> Self {
        (value.x, value.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Facing direction, always one of the four cardinal unit vectors.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Orientation(Vector2);

impl Orientation {
    pub const NORTH: Self = Self(Vector2::new(0, -1));
    pub const SOUTH: Self = Self(Vector2::new(0, 1));
    pub const EAST: Self = Self(Vector2::new(1, 0));
    pub const WEST: Self = Self(Vector2::new(-1, 0));

    pub const ALL: [Orientation; 4] = [
        Orientation::NORTH,
        Orientation::EAST,
        Orientation::SOUTH,
        Orientation::WEST,
    ];

    pub fn vector(&self) -> Vector2 {
        self.0
    }

    /// Quarter turn clockwise, `(x, y) -> (-y, x)`.
    pub fn rotate_cw(&mut self) {
        self.0 = self.0.transformed(Matrix2::new(0, -1, 1, 0));
    }

    /// Quarter turn counterclockwise, `(x, y) -> (y, -x)`.
    pub fn rotate_ccw(&mut self) {
        self.0 = self.0.transformed(Matrix2::new(0, 1, -1, 0));
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::NORTH
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_vector() {
        let vector = Vector2::new(1, -2);
        assert_eq!(vector.x(), 1);
        assert_eq!(vector.y(), -2);
        assert_eq!(vector.to_string(), "[1, -2]");
    }

    #[test]
    fn test_vector_arithmetic() {
        let mut vector = Vector2::new(2, 2);
        vector += Vector2::new(0, -1);
        assert_eq!(vector, Vector2::new(2, 1));
        vector -= Vector2::new(-1, 0);
        assert_eq!(vector, Vector2::new(3, 1));
        assert_eq!(<(i64, i64)>::from(vector), (3, 1));
    }

    #[rstest]
    #[case::north(Orientation::NORTH, Orientation::EAST)]
    #[case::east(Orientation::EAST, Orientation::SOUTH)]
    #[case::south(Orientation::SOUTH, Orientation::WEST)]
    #[case::west(Orientation::WEST, Orientation::NORTH)]
    fn test_orientation_rotate_cw(#[case] start: Orientation, #[case] expected: Orientation) {
        let mut orientation = start;
        orientation.rotate_cw();
        assert_eq!(orientation, expected);
    }

    #[rstest]
    #[case::north(Orientation::NORTH, Orientation::WEST)]
    #[case::west(Orientation::WEST, Orientation::SOUTH)]
    #[case::south(Orientation::SOUTH, Orientation::EAST)]
    #[case::east(Orientation::EAST, Orientation::NORTH)]
    fn test_orientation_rotate_ccw(#[case] start: Orientation, #[case] expected: Orientation) {
        let mut orientation = start;
        orientation.rotate_ccw();
        assert_eq!(orientation, expected);
    }

    #[test]
    fn test_orientation_full_circle() {
        for start in Orientation::ALL {
            let mut cw = start;
            let mut ccw = start;
            for _ in 0..4 {
                cw.rotate_cw();
                ccw.rotate_ccw();
            }
            assert_eq!(cw, start);
            assert_eq!(ccw, start);

            let mut there_and_back = start;
            there_and_back.rotate_cw();
            there_and_back.rotate_ccw();
            assert_eq!(there_and_back, start);
        }
    }

    #[test]
    fn test_orientation_stays_cardinal() {
        let mut orientation = Orientation::default();
        for _ in 0..8 {
            orientation.rotate_cw();
            assert!(Orientation::ALL.contains(&orientation));
            let v = orientation.vector();
            assert_eq!(v.x().abs() + v.y().abs(), 1);
        }
    }
}
