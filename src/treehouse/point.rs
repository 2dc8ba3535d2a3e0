use std::fmt;

use derive_more::Display;

pub trait DimVal:
    num_traits::Signed
    + num_traits::ToPrimitive
    + std::cmp::Ord
    + std::cmp::Eq
    + Clone
    + Copy
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<
        S: num_traits::Signed
            + num_traits::ToPrimitive
            + std::cmp::Ord
            + std::cmp::Eq
            + Clone
            + Copy
            + std::fmt::Display
            + std::fmt::Debug,
    > DimVal for S
{
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<I: DimVal = i64> {
    pub x: I,
    pub y: I,
}

impl<I: DimVal> Point<I> {
    pub fn new(x: I, y: I) -> Self {
        Point { x, y }
    }

    /// Steps away from this point by `step` forever, starting one step out.
    /// Callers are responsible for bounding the walk.
    pub fn walk(&self, step: Point<I>) -> Walk<I> {
        Walk {
            current: *self,
            step,
        }
    }
}

impl<I: DimVal> fmt::Display for Point<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<I: DimVal> std::ops::Add for Point<I> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

#[derive(Debug, Display, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Direction {
    #[display(fmt = "left")]
    Left,
    #[display(fmt = "up")]
    Up,
    #[display(fmt = "right")]
    Right,
    #[display(fmt = "down")]
    Down,
}

impl Direction {
    /// Fixed order used whenever all four directions are visited.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    pub fn step<I: DimVal>(&self) -> Point<I> {
        let zero = I::zero();
        let one = I::one();
        match self {
            Direction::Left => Point::new(-one, zero),
            Direction::Up => Point::new(zero, -one),
            Direction::Right => Point::new(one, zero),
            Direction::Down => Point::new(zero, one),
        }
    }
}

#[derive(Debug)]
pub struct Walk<I: DimVal> {
    current: Point<I>,
    step: Point<I>,
}

impl<I: DimVal> Iterator for Walk<I> {
    type Item = Point<I>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current = self.current + self.step;
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Point};

    #[test]
    fn test_walk_excludes_origin() {
        let start = Point::new(2, 2);
        let points = start
            .walk(Direction::Left.step())
            .take(3)
            .collect::<Vec<_>>();
        assert_eq!(
            points,
            vec![Point::new(1, 2), Point::new(0, 2), Point::new(-1, 2)]
        );
    }

    #[test]
    fn test_direction_steps() {
        let origin: Point = Point::new(0, 0);
        assert_eq!(origin + Direction::Left.step(), Point::new(-1, 0));
        assert_eq!(origin + Direction::Right.step(), Point::new(1, 0));
        assert_eq!(origin + Direction::Up.step(), Point::new(0, -1));
        assert_eq!(origin + Direction::Down.step(), Point::new(0, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(3, -4).to_string(), "(3, -4)");
        assert_eq!(Direction::Down.to_string(), "down");
    }
}
