//! A binary min-heap of cells, keyed by their current entry in the [`StateTable`].

use crate::{state::StateTable, Point};
use std::cmp::Ordering;

/// The open list of a search.
///
/// The heap only stores positions. Keys are looked up in the [`StateTable`] whenever two
/// entries are compared, so a cell whose estimate improved is simply pushed again. Older
/// entries of that cell remain in the heap and are discarded by the search once the cell
/// is closed.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeQueue {
	heap: Vec<Point>,
}

impl NodeQueue {
	pub fn with_capacity(capacity: usize) -> NodeQueue {
		NodeQueue {
			heap: Vec::with_capacity(capacity),
		}
	}

	#[cfg(test)]
	pub fn len(&self) -> usize {
		self.heap.len()
	}

	#[cfg(test)]
	pub fn is_empty(&self) -> bool {
		self.heap.is_empty()
	}

	pub fn clear(&mut self) {
		self.heap.clear();
	}

	pub fn push(&mut self, point: Point, states: &StateTable) {
		self.heap.push(point);
		let mut i = self.heap.len() - 1;
		while i > 0 {
			let parent = (i - 1) / 2;
			if compare(self.heap[i], self.heap[parent], states) == Ordering::Less {
				self.heap.swap(i, parent);
				i = parent;
			} else {
				break;
			}
		}
	}

	/// Removes the cell with the lowest estimate.
	pub fn pop(&mut self, states: &StateTable) -> Option<Point> {
		let last = self.heap.pop()?;
		if self.heap.is_empty() {
			return Some(last);
		}
		let top = std::mem::replace(&mut self.heap[0], last);

		let n = self.heap.len();
		let mut i = 0;
		loop {
			let mut smallest = i;
			for child in [2 * i + 1, 2 * i + 2] {
				if child < n
					&& compare(self.heap[child], self.heap[smallest], states) == Ordering::Less
				{
					smallest = child;
				}
			}
			if smallest == i {
				break;
			}
			self.heap.swap(i, smallest);
			i = smallest;
		}
		Some(top)
	}
}

/// Lower estimates first. On equal estimates, the cell with the higher cost is further
/// along its Path and therefore likely closer to the goal.
fn compare(a: Point, b: Point, states: &StateTable) -> Ordering {
	let (a, b) = (&states[a], &states[b]);
	a.estimate
		.cmp(&b.estimate)
		.then_with(|| b.cost.cmp(&a.cost))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn table(entries: &[(Point, usize, usize)]) -> StateTable {
		let mut states = StateTable::new((4, 4));
		for &(point, cost, estimate) in entries {
			states[point].cost = cost;
			states[point].estimate = estimate;
		}
		states
	}

	#[test]
	fn pops_lowest_estimate() {
		let states = table(&[
			((0, 0), 0, 9),
			((1, 0), 0, 3),
			((2, 0), 0, 7),
			((3, 0), 0, 1),
			((0, 1), 0, 5),
		]);
		let mut queue = NodeQueue::default();
		for point in [(0, 0), (1, 0), (2, 0), (3, 0), (0, 1)] {
			queue.push(point, &states);
		}
		assert_eq!(queue.len(), 5);

		let order: Vec<_> = std::iter::from_fn(|| queue.pop(&states)).collect();
		assert_eq!(order, vec![(3, 0), (1, 0), (0, 1), (2, 0), (0, 0)]);
		assert!(queue.is_empty());
		assert_eq!(queue.pop(&states), None);
	}

	#[test]
	fn equal_estimates_prefer_higher_cost() {
		let states = table(&[((0, 0), 1, 6), ((1, 0), 4, 6), ((2, 0), 2, 6)]);
		let mut queue = NodeQueue::default();
		for point in [(0, 0), (1, 0), (2, 0)] {
			queue.push(point, &states);
		}
		assert_eq!(queue.pop(&states), Some((1, 0)));
		assert_eq!(queue.pop(&states), Some((2, 0)));
		assert_eq!(queue.pop(&states), Some((0, 0)));
	}

	#[test]
	fn duplicates_are_kept() {
		let states = table(&[((0, 0), 0, 2), ((1, 1), 0, 5)]);
		let mut queue = NodeQueue::default();
		queue.push((1, 1), &states);
		queue.push((0, 0), &states);
		queue.push((1, 1), &states);
		assert_eq!(queue.len(), 3);
		assert_eq!(queue.pop(&states), Some((0, 0)));
		assert_eq!(queue.pop(&states), Some((1, 1)));
		assert_eq!(queue.pop(&states), Some((1, 1)));
	}

	#[test]
	fn clear() {
		let states = table(&[]);
		let mut queue = NodeQueue::with_capacity(4);
		queue.push((0, 0), &states);
		queue.push((1, 0), &states);
		queue.clear();
		assert!(queue.is_empty());
	}
}
