//! Per-cell bookkeeping of a search, reused across runs.

use crate::{Cost, Point};
use std::ops::{Index, IndexMut};

const STAMP_STEP: u32 = 2;

/// The search data of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct NodeState {
	/// best known cost from the start
	pub cost: Cost,
	/// `cost` plus the Heuristic
	pub estimate: Cost,
	pub parent: Point,
	status: u32,
}

/// A table with one [`NodeState`] per cell of the Grid.
///
/// Instead of clearing the table before every search, each run receives a new pair of
/// stamps. A cell is open if its status equals the open stamp, closed if it equals the
/// closed stamp, and unvisited otherwise.
#[derive(Clone, Debug)]
pub(crate) struct StateTable {
	width: usize,
	nodes: Vec<NodeState>,
	open_stamp: u32,
	closed_stamp: u32,
}

impl StateTable {
	pub fn new((width, height): (usize, usize)) -> StateTable {
		StateTable {
			width,
			nodes: vec![NodeState::default(); width * height],
			open_stamp: 1,
			closed_stamp: 2,
		}
	}

	/// Invalidates the results of the previous run.
	pub fn next_run(&mut self) {
		if self.closed_stamp > u32::MAX - STAMP_STEP {
			crate::trace!("resetting the status of {} cells", self.nodes.len());
			self.nodes.iter_mut().for_each(|node| node.status = 0);
			self.open_stamp = 1;
			self.closed_stamp = 2;
		} else {
			self.open_stamp += STAMP_STEP;
			self.closed_stamp += STAMP_STEP;
		}
	}

	#[cfg(test)]
	pub fn is_open(&self, point: Point) -> bool {
		self[point].status == self.open_stamp
	}

	pub fn is_closed(&self, point: Point) -> bool {
		self[point].status == self.closed_stamp
	}

	/// Checks if `point` was opened or closed during the current run.
	pub fn is_visited(&self, point: Point) -> bool {
		let status = self[point].status;
		status == self.open_stamp || status == self.closed_stamp
	}

	pub fn open(&mut self, point: Point) {
		let stamp = self.open_stamp;
		self[point].status = stamp;
	}

	pub fn close(&mut self, point: Point) {
		let stamp = self.closed_stamp;
		self[point].status = stamp;
	}

	/// Records `point` as the start of a new run and opens it.
	pub fn seed(&mut self, point: Point, estimate: Cost) {
		let stamp = self.open_stamp;
		self[point] = NodeState {
			cost: 0,
			estimate,
			parent: point,
			status: stamp,
		};
	}

	#[cfg(test)]
	fn set_stamps(&mut self, open_stamp: u32) {
		self.open_stamp = open_stamp;
		self.closed_stamp = open_stamp + 1;
	}
}

impl Index<Point> for StateTable {
	type Output = NodeState;
	fn index(&self, (x, y): Point) -> &NodeState {
		&self.nodes[x + y * self.width]
	}
}

impl IndexMut<Point> for StateTable {
	fn index_mut(&mut self, (x, y): Point) -> &mut NodeState {
		&mut self.nodes[x + y * self.width]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stamps_track_status() {
		let mut table = StateTable::new((3, 3));
		table.next_run();
		assert!(!table.is_visited((1, 1)));

		table.open((1, 1));
		assert!(table.is_open((1, 1)));
		assert!(!table.is_closed((1, 1)));

		table.close((1, 1));
		assert!(table.is_closed((1, 1)));
		assert!(table.is_visited((1, 1)));
	}

	#[test]
	fn next_run_forgets_previous_run() {
		let mut table = StateTable::new((3, 3));
		table.next_run();
		table.seed((0, 0), 4);
		table.open((1, 0));
		table.close((2, 0));

		table.next_run();
		for point in [(0, 0), (1, 0), (2, 0)] {
			assert!(!table.is_visited(point), "{:?}", point);
		}
		// the data itself is kept, only the status is invalidated
		assert_eq!(table[(0, 0)].estimate, 4);
	}

	#[test]
	fn closed_cells_do_not_turn_open() {
		// the closed stamp of one run must never equal the open stamp of the next
		let mut table = StateTable::new((2, 1));
		table.next_run();
		table.close((0, 0));
		table.next_run();
		assert!(!table.is_open((0, 0)));
		assert!(!table.is_closed((0, 0)));
	}

	#[test]
	fn stamp_overflow_resets_table() {
		let mut table = StateTable::new((2, 2));
		table.set_stamps(u32::MAX - 2);
		table.close((1, 1));
		table.open((0, 1));

		table.next_run();
		assert_eq!(table.open_stamp, 1);
		assert_eq!(table.closed_stamp, 2);
		assert!(!table.is_visited((1, 1)));
		assert!(!table.is_visited((0, 1)));

		table.open((0, 1));
		assert!(table.is_open((0, 1)));
	}
}
