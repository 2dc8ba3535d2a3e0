use std::str::FromStr;

use nonempty::NonEmpty;

use super::error::{ForestError, MalformedInput, Result};
use super::grid::{DenseGrid, Line};
use super::point::{Direction, Point};

pub type TreeHeight = u8;

/// One cell of the forest: its fixed height plus the state the two scans fill in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub position: Point,
    pub height: TreeHeight,
    pub visible: bool,
    pub scenic_score: usize,
}

impl Tree {
    fn new(position: Point, height: TreeHeight) -> Self {
        Self {
            position,
            height,
            visible: false,
            scenic_score: 0,
        }
    }
}

/// Trees seen walking outward from some tree, nearest first, up to the boundary.
pub type Ray<'a> = Line<'a, Tree>;

#[derive(Debug, Clone)]
pub struct Forest {
    trees: DenseGrid<Tree>,
}

impl Forest {
    /// Build a forest from rows of digit characters. Every row must be as long
    /// as the first one, and there must be at least one row and one column.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let rows = NonEmpty::collect(rows).ok_or(MalformedInput::Empty)?;
        let width = rows.first().as_ref().chars().count();
        if width == 0 {
            return Err(MalformedInput::EmptyRow.into());
        }
        let height = rows.len();
        let mut trees = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(MalformedInput::Ragged {
                    row: y,
                    expected: width,
                    found,
                }
                .into());
            }
            for (x, c) in row.chars().enumerate() {
                let digit = c.to_digit(10).ok_or(MalformedInput::NotADigit {
                    row: y,
                    column: x,
                    found: c,
                })?;
                trees.push(Tree::new(
                    Point::new(x as i64, y as i64),
                    digit as TreeHeight,
                ));
            }
        }
        let trees =
            DenseGrid::from_cells(width, height, trees).ok_or(MalformedInput::Empty)?;
        log::debug!("loaded {}x{} forest", width, height);
        Ok(Self { trees })
    }

    pub fn width(&self) -> usize {
        self.trees.width()
    }

    pub fn height(&self) -> usize {
        self.trees.height()
    }

    pub fn cell_at(&self, x: i64, y: i64) -> Result<&Tree> {
        let (width, height) = (self.width(), self.height());
        self.trees
            .get(Point::new(x, y))
            .ok_or(ForestError::OutOfBounds {
                x,
                y,
                width,
                height,
            })
    }

    pub fn cell_at_mut(&mut self, x: i64, y: i64) -> Result<&mut Tree> {
        let (width, height) = (self.width(), self.height());
        self.trees
            .get_mut(Point::new(x, y))
            .ok_or(ForestError::OutOfBounds {
                x,
                y,
                width,
                height,
            })
    }

    /// Every tree, row by row.
    pub fn all_cells(&self) -> impl Iterator<Item = &Tree> {
        self.trees.iter().map(|(_, tree)| tree)
    }

    pub fn all_cells_mut(&mut self) -> impl Iterator<Item = &mut Tree> {
        self.trees.iter_mut().map(|(_, tree)| tree)
    }

    pub fn edge_cells(&self) -> impl Iterator<Item = &Tree> {
        self.trees
            .iter()
            .filter(move |(p, _)| self.trees.is_on_edge(*p))
            .map(|(_, tree)| tree)
    }

    pub fn is_on_edge(&self, x: i64, y: i64) -> bool {
        self.trees.is_on_edge(Point::new(x, y))
    }

    pub fn ray_from(&self, tree: &Tree, direction: Direction) -> Ray<'_> {
        self.trees.line_from(tree.position, direction)
    }

    /// The four rays out of `tree`, in the order left, up, right, down.
    pub fn rays_from<'a>(&'a self, tree: &Tree) -> impl Iterator<Item = (Direction, Ray<'a>)> {
        let origin = tree.position;
        Direction::ALL
            .into_iter()
            .map(move |direction| (direction, self.trees.line_from(origin, direction)))
    }

    /// Forget the results of any previous scans.
    pub fn reset(&mut self) {
        for tree in self.all_cells_mut() {
            tree.visible = false;
            tree.scenic_score = 0;
        }
    }

    pub(crate) fn trees(&self) -> &[Tree] {
        self.trees.cells()
    }

    pub(crate) fn trees_mut(&mut self) -> &mut [Tree] {
        self.trees.cells_mut()
    }

    pub fn render_heights(&self) -> String {
        self.trees
            .render_with(|tree| char::from_digit(u32::from(tree.height), 10).unwrap_or('?'))
    }

    pub fn render_visibility(&self) -> String {
        self.trees
            .render_with(|tree| if tree.visible { 't' } else { '_' })
    }
}

/// Parses puzzle text: surrounding whitespace on each line is ignored and
/// blank lines are skipped.
impl FromStr for Forest {
    type Err = ForestError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_rows(s.lines().map(str::trim).filter(|l| !l.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Forest, ForestError, MalformedInput};

    const SAMPLE: [&str; 5] = ["30373", "25512", "65332", "33549", "35390"];

    fn heights<'a>(ray: impl Iterator<Item = &'a super::Tree>) -> Vec<u8> {
        ray.map(|t| t.height).collect()
    }

    #[test]
    fn test_from_rows() {
        let forest = Forest::from_rows(SAMPLE).unwrap();
        assert_eq!(forest.width(), 5);
        assert_eq!(forest.height(), 5);
        let tree = forest.cell_at(2, 3).unwrap();
        assert_eq!(tree.height, 5);
        assert!(!tree.visible);
        assert_eq!(tree.scenic_score, 0);
        assert_eq!(forest.all_cells().count(), 25);
    }

    #[test]
    fn test_malformed() {
        assert_eq!(
            Forest::from_rows(Vec::<String>::new()).unwrap_err(),
            ForestError::MalformedInput(MalformedInput::Empty)
        );
        assert_eq!(
            Forest::from_rows([""]).unwrap_err(),
            ForestError::MalformedInput(MalformedInput::EmptyRow)
        );
        assert_eq!(
            Forest::from_rows(["123", "12"]).unwrap_err(),
            ForestError::MalformedInput(MalformedInput::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Forest::from_rows(["123", "1x3"]).unwrap_err(),
            ForestError::MalformedInput(MalformedInput::NotADigit {
                row: 1,
                column: 1,
                found: 'x'
            })
        );
        assert!(matches!(
            "12\n-1".parse::<Forest>(),
            Err(ForestError::MalformedInput(MalformedInput::NotADigit { .. }))
        ));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let forest = "12\n\n34\r\n".parse::<Forest>().unwrap();
        assert_eq!(forest.render_heights(), "12\n34\n");
        assert_eq!(
            " \n\r\n".parse::<Forest>().unwrap_err(),
            ForestError::MalformedInput(MalformedInput::Empty)
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let forest = Forest::from_rows(SAMPLE).unwrap();
        assert!(forest.cell_at(4, 4).is_ok());
        for (x, y) in [(5, 0), (0, 5), (-1, 2), (2, -1)] {
            assert_eq!(
                forest.cell_at(x, y).unwrap_err(),
                ForestError::OutOfBounds {
                    x,
                    y,
                    width: 5,
                    height: 5
                }
            );
        }
    }

    #[test]
    fn test_edges() {
        let forest = Forest::from_rows(SAMPLE).unwrap();
        assert_eq!(forest.edge_cells().count(), 16);
        assert!(forest
            .edge_cells()
            .all(|t| forest.is_on_edge(t.position.x, t.position.y)));
        assert!(!forest.is_on_edge(1, 1));
        assert!(forest.is_on_edge(0, 3));
        assert!(!forest.is_on_edge(5, 0));
    }

    #[test]
    fn test_rays() {
        let forest = Forest::from_rows(SAMPLE).unwrap();
        let tree = forest.cell_at(2, 3).unwrap();
        assert_eq!(heights(forest.ray_from(tree, Direction::Left)), vec![3, 3]);
        assert_eq!(heights(forest.ray_from(tree, Direction::Up)), vec![3, 5, 3]);
        assert_eq!(heights(forest.ray_from(tree, Direction::Right)), vec![4, 9]);
        assert_eq!(heights(forest.ray_from(tree, Direction::Down)), vec![3]);

        let order = forest
            .rays_from(tree)
            .map(|(direction, _)| direction)
            .collect::<Vec<_>>();
        assert_eq!(order, Direction::ALL.to_vec());

        let corner = forest.cell_at(0, 0).unwrap();
        assert_eq!(forest.ray_from(corner, Direction::Left).count(), 0);
        assert_eq!(forest.ray_from(corner, Direction::Up).count(), 0);
        assert_eq!(forest.ray_from(corner, Direction::Right).count(), 4);
    }

    #[test]
    fn test_render() {
        let mut forest = Forest::from_rows(["12", "34"]).unwrap();
        assert_eq!(forest.render_heights(), "12\n34\n");
        forest.cell_at_mut(1, 0).unwrap().visible = true;
        assert_eq!(forest.render_visibility(), "_t\n__\n");
        forest.reset();
        assert_eq!(forest.render_visibility(), "__\n__\n");
    }
}
