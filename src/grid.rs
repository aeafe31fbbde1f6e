//! The Cost Grid searched by the [`PathFinder`](crate::PathFinder)

use crate::Point;
use std::fmt;

/// Reasons a [`CostGrid`] could not be created
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
	/// Either the width or the height is zero.
	EmptyGrid,
	/// The number of cells does not match `width * height`.
	SizeMismatch {
		/// `width * height`
		expected: usize,
		/// the number of cells that were supplied
		actual: usize,
	},
	/// `width * height` does not fit into a `usize`.
	TooLarge {
		/// the requested width
		width: usize,
		/// the requested height
		height: usize,
	},
	/// A row passed to [`CostGrid::from_rows`] has a different length than the first one.
	RaggedRows {
		/// index of the offending row
		row: usize,
		/// length of the first row
		expected: usize,
		/// length of the offending row
		actual: usize,
	},
}

impl fmt::Display for GridError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::EmptyGrid => write!(f, "grid must have a non-zero width and height"),
			Self::SizeMismatch { expected, actual } => {
				write!(f, "expected {} cells, got {}", expected, actual)
			}
			Self::TooLarge { width, height } => {
				write!(f, "a {}x{} grid has too many cells", width, height)
			}
			Self::RaggedRows {
				row,
				expected,
				actual,
			} => write!(
				f,
				"row {} has {} cells, but the first row has {}",
				row, actual, expected
			),
		}
	}
}

impl std::error::Error for GridError {}

/// A 2D Grid of movement costs.
///
/// Every cell holds the cost of entering it. A cost of `0` marks the cell as impassable.
/// The dimensions are fixed at creation, but individual cells can be changed at any time
/// between searches.
///
/// ```
/// # use grid_astar::CostGrid;
/// let mut grid = CostGrid::filled(3, 2, 1).unwrap();
/// grid.set((2, 1), 0);
///
/// assert_eq!(grid.get((2, 1)), Some(0));
/// assert_eq!(grid.get((0, 0)), Some(1));
/// assert_eq!(grid.get((3, 0)), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CostGrid {
	width: usize,
	height: usize,
	cells: Vec<u8>,
}

impl CostGrid {
	/// Creates a Grid from cells stored row by row (index = `x + y * width`).
	pub fn new(width: usize, height: usize, cells: Vec<u8>) -> Result<CostGrid, GridError> {
		let expected = cell_count(width, height)?;
		if cells.len() != expected {
			return Err(GridError::SizeMismatch {
				expected,
				actual: cells.len(),
			});
		}
		Ok(CostGrid {
			width,
			height,
			cells,
		})
	}

	/// Creates a Grid where every cell has the same cost.
	pub fn filled(width: usize, height: usize, cost: u8) -> Result<CostGrid, GridError> {
		let count = cell_count(width, height)?;
		CostGrid::new(width, height, vec![cost; count])
	}

	/// Creates a Grid from a list of rows. `rows[y][x]` is the cost of `(x, y)`.
	///
	/// ```
	/// # use grid_astar::CostGrid;
	/// let grid = CostGrid::from_rows(&[
	///     [1u8, 1, 0],
	///     [1, 5, 1],
	/// ]).unwrap();
	///
	/// assert_eq!((grid.width(), grid.height()), (3, 2));
	/// assert_eq!(grid.get((1, 1)), Some(5));
	/// assert_eq!(grid.get((2, 0)), Some(0));
	/// ```
	pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<CostGrid, GridError> {
		let width = rows.first().map_or(0, |row| row.as_ref().len());
		let mut cells = Vec::with_capacity(width * rows.len());
		for (y, row) in rows.iter().enumerate() {
			let row = row.as_ref();
			if row.len() != width {
				return Err(GridError::RaggedRows {
					row: y,
					expected: width,
					actual: row.len(),
				});
			}
			cells.extend_from_slice(row);
		}
		CostGrid::new(width, rows.len(), cells)
	}

	/// The number of columns
	pub fn width(&self) -> usize {
		self.width
	}

	/// The number of rows
	pub fn height(&self) -> usize {
		self.height
	}

	/// `(width, height)`
	pub fn size(&self) -> (usize, usize) {
		(self.width, self.height)
	}

	/// Checks if `point` lies on the Grid.
	pub fn contains(&self, (x, y): Point) -> bool {
		x < self.width && y < self.height
	}

	/// The linear index of `point`, if it lies on the Grid.
	pub fn index_of(&self, point: Point) -> Option<usize> {
		if self.contains(point) {
			Some(point.0 + point.1 * self.width)
		} else {
			None
		}
	}

	/// The cost of entering `point`, or `None` if it lies outside the Grid.
	pub fn get(&self, point: Point) -> Option<u8> {
		self.index_of(point).map(|i| self.cells[i])
	}

	/// Changes the cost of entering `point`.
	///
	/// ## Panics
	/// if `point` lies outside the Grid
	#[track_caller]
	pub fn set(&mut self, point: Point, cost: u8) {
		match self.index_of(point) {
			Some(i) => self.cells[i] = cost,
			None => panic!(
				"{:?} is outside of the {}x{} grid",
				point, self.width, self.height
			),
		}
	}

	/// The cost of entering `point`, which has to lie on the Grid.
	pub(crate) fn cost_unchecked(&self, (x, y): Point) -> u8 {
		self.cells[x + y * self.width]
	}
}

fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
	if width == 0 || height == 0 {
		return Err(GridError::EmptyGrid);
	}
	width
		.checked_mul(height)
		.ok_or(GridError::TooLarge { width, height })
}

impl fmt::Debug for CostGrid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "CostGrid {}x{}:", self.width, self.height)?;
		for row in self.cells.chunks(self.width) {
			let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
			writeln!(f, "  {}", line.join(" "))?;
		}
		Ok(())
	}
}
