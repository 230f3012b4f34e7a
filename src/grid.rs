use crate::error::{ColumnarError, Result};
use crate::shape::Shape;
use std::fmt;
use std::ops::Index;

/// Fixed-size two-dimensional buffer stored row-major in one allocation
///
/// The dimensions are set at construction and never change; writers
/// overwrite cells in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    shape: Shape,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `value`
    /// Fails with `InvalidArgument` if the cells cannot be allocated
    pub fn new(shape: Shape, value: T) -> Result<Self> {
        let mut cells = Vec::new();
        cells.try_reserve_exact(shape.capacity()).map_err(|e| {
            ColumnarError::InvalidArgument(format!("cannot allocate {} grid: {}", shape, e))
        })?;
        cells.resize(shape.capacity(), value);
        Ok(Self { shape, cells })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    #[inline(always)]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.shape.cols() + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows() && col < self.cols() {
            self.cells.get(self.idx(row, col))
        } else {
            None
        }
    }

    /// Overwrite one cell
    /// Panics if `(row, col)` is outside the grid
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(
            row < self.rows() && col < self.cols(),
            "cell ({}, {}) outside {} grid",
            row,
            col,
            self.shape
        );
        let i = self.idx(row, col);
        self.cells[i] = value;
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[T] {
        let start = self.idx(row, 0);
        &self.cells[start..start + self.cols()]
    }

    /// Write `values` row-major starting at (0, 0)
    /// Cells past the end of `values` keep `pad`; values beyond the capacity are ignored
    pub fn fill_row_major<I>(&mut self, values: I, pad: T)
    where
        I: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter();
        for cell in self.cells.iter_mut() {
            *cell = values.next().unwrap_or(pad);
        }
    }

    /// Write `values` column-major starting at (0, 0)
    /// Cells past the end of `values` keep `pad`; values beyond the capacity are ignored
    pub fn fill_column_major<I>(&mut self, values: I, pad: T)
    where
        I: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter();
        for col in 0..self.cols() {
            for row in 0..self.rows() {
                let i = self.idx(row, col);
                self.cells[i] = values.next().unwrap_or(pad);
            }
        }
    }

    /// Cells in row-major order
    pub fn iter_row_major(&self) -> impl Iterator<Item = T> + '_ {
        self.cells.iter().copied()
    }

    /// Cells in column-major order
    pub fn iter_column_major(&self) -> impl Iterator<Item = T> + '_ {
        let (rows, cols) = (self.rows(), self.cols());
        (0..cols).flat_map(move |col| (0..rows).map(move |row| self.cells[row * cols + col]))
    }

    /// Copy of the contents as nested rows
    pub fn rows_vec(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks_exact(self.cols())
            .map(|row| row.to_vec())
            .collect()
    }
}

impl<T: Copy> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.get(row, col) {
            Some(value) => value,
            None => panic!("cell ({}, {}) outside {} grid", row, col, self.shape),
        }
    }
}

impl<T: Copy + fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks_exact(self.cols()).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}
