//! Offset tables describing how a search may move along the Grid.
//!
//! ```no_code
//! 4-connected:      8-connected:
//!   0               7 0 4
//!   |                \|/
//! 3-A-1             3-A-1
//!   |                /|\
//!   2               6 2 5
//! ```
//! The numbers are the indices of the offsets in [`CARDINAL`] and [`MOORE`]. Every offset with an
//! index of 4 or higher counts as a diagonal step for the heavy diagonal option.

use crate::Point;

/// A relative step `(dx, dy)` on the Grid.
pub type Offset = (isize, isize);

/// Up, right, down, left
pub const CARDINAL: [Offset; 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// The 4 cardinal directions followed by up-right, down-right, down-left, up-left
pub const MOORE: [Offset; 8] = [
	(0, -1),
	(1, 0),
	(0, 1),
	(-1, 0),
	(1, -1),
	(1, 1),
	(-1, 1),
	(-1, -1),
];

/// The first index in an offset list that counts as a diagonal step.
pub const FIRST_DIAGONAL: usize = CARDINAL.len();

/// The offsets used for regular expansion.
pub fn offsets(diagonals: bool) -> &'static [Offset] {
	if diagonals {
		&MOORE
	} else {
		&CARDINAL
	}
}

/// Moves `point` by `offset`, returning `None` if the result leaves the `(width, height)` Grid.
pub fn step(point: Point, offset: Offset, (width, height): (usize, usize)) -> Option<Point> {
	let x = point.0.checked_add_signed(offset.0)?;
	let y = point.1.checked_add_signed(offset.1)?;
	if x < width && y < height {
		Some((x, y))
	} else {
		None
	}
}

/// The offset leading from `from` to `to`.
pub fn offset_between(from: Point, to: Point) -> Offset {
	(
		to.0 as isize - from.0 as isize,
		to.1 as isize - from.1 as isize,
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn step_bounds() {
		let size = (5, 5);
		assert_eq!(step((0, 2), (0, -1), size), Some((0, 1)));
		assert_eq!(step((0, 2), (-1, 0), size), None);
		assert_eq!(step((4, 4), (1, 1), size), None);
		assert_eq!(step((1, 1), (3, 3), size), Some((4, 4)));
		assert_eq!(step((0, 0), (-1, -1), size), None);
	}

	#[test]
	fn cardinal_neighbors_at_edge() {
		let neighbors: Vec<_> = offsets(false)
			.iter()
			.filter_map(|&o| step((0, 2), o, (5, 5)))
			.collect();
		assert_eq!(neighbors, vec![(0, 1), (1, 2), (0, 3)]);
	}

	#[test]
	fn moore_neighbors_at_edge() {
		let neighbors: Vec<_> = offsets(true)
			.iter()
			.filter_map(|&o| step((0, 2), o, (5, 5)))
			.collect();
		assert_eq!(neighbors, vec![(0, 1), (1, 2), (0, 3), (1, 1), (1, 3)]);
	}

	#[test]
	fn offset_between_points() {
		assert_eq!(offset_between((1, 1), (6, 6)), (5, 5));
		assert_eq!(offset_between((6, 6), (1, 1)), (-5, -5));
		assert_eq!(offset_between((3, 0), (0, 2)), (-3, 2));
	}
}
