use std::fmt;

use super::point::{Direction, Point, Walk};

type Index = i64;

/// A fixed-size rectangular grid stored row-major in a flat buffer, with the
/// upper-left corner at (0, 0).
#[derive(Debug, Clone)]
pub struct DenseGrid<V: fmt::Debug> {
    width: usize,
    height: usize,
    cells: Vec<V>,
}

impl<V: fmt::Debug> DenseGrid<V> {
    /// Build a grid from cells already laid out row-major. Returns None if the
    /// buffer doesn't hold exactly `width * height` cells or either side is 0.
    pub fn from_cells(width: usize, height: usize, cells: Vec<V>) -> Option<Self> {
        if width == 0 || height == 0 || cells.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// Get a value by coordinate. Returns None if the coordinate is out-of-bounds.
    pub fn get(&self, coordinate: Point<Index>) -> Option<&V> {
        let index = self.index_for(coordinate)?;
        self.cells.get(index)
    }

    /// Mutable counterpart of [`DenseGrid::get`].
    pub fn get_mut(&mut self, coordinate: Point<Index>) -> Option<&mut V> {
        let index = self.index_for(coordinate)?;
        self.cells.get_mut(index)
    }

    pub fn contains(&self, coordinate: Point<Index>) -> bool {
        coordinate.x >= 0
            && coordinate.y >= 0
            && coordinate.x < self.width as Index
            && coordinate.y < self.height as Index
    }

    pub fn is_on_edge(&self, coordinate: Point<Index>) -> bool {
        self.contains(coordinate)
            && (coordinate.x == 0
                || coordinate.y == 0
                || coordinate.x == self.width as Index - 1
                || coordinate.y == self.height as Index - 1)
    }

    /// All cells in row-major order along with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Point<Index>, &V)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (Self::point_for(width, i), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Point<Index>, &mut V)> {
        let width = self.width;
        self.cells
            .iter_mut()
            .enumerate()
            .map(move |(i, v)| (Self::point_for(width, i), v))
    }

    pub fn cells(&self) -> &[V] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [V] {
        &mut self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[V]> {
        self.cells.chunks(self.width)
    }

    /// Walk outward from `origin` in `direction`, yielding every in-bounds cell
    /// and stopping at the boundary. The origin itself is never yielded.
    pub fn line_from(&self, origin: Point<Index>, direction: Direction) -> Line<'_, V> {
        Line {
            grid: self,
            walk: origin.walk(direction.step()),
        }
    }

    pub fn render_with<F: Fn(&V) -> char>(&self, f: F) -> String {
        let mut out = String::with_capacity(self.size() + self.height);
        for row in self.rows() {
            out.extend(row.iter().map(&f));
            out.push('\n');
        }
        out
    }

    fn point_for(width: usize, index: usize) -> Point<Index> {
        Point::new((index % width) as Index, (index / width) as Index)
    }

    fn index_for(&self, coordinate: Point<Index>) -> Option<usize> {
        if !self.contains(coordinate) {
            None
        } else {
            let row = coordinate.y as usize * self.width;
            let col = coordinate.x as usize;
            Some(row + col)
        }
    }
}

/// Lazy walk along one row or column of a [`DenseGrid`].
#[derive(Debug)]
pub struct Line<'a, V: fmt::Debug> {
    grid: &'a DenseGrid<V>,
    walk: Walk<Index>,
}

impl<'a, V: fmt::Debug> Iterator for Line<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let coordinate = self.walk.next()?;
        self.grid.get(coordinate)
    }
}
