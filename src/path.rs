use crate::{Cost, Point};
use std::fmt;
use std::ops::Index;

/// A single cell of a [`Path`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PathNode {
	/// the position on the Grid
	pub point: Point,
	/// the cost of reaching this cell from the start
	pub cost: Cost,
	/// `cost` plus the Heuristic at the time the cell was reached
	pub estimate: Cost,
}

/// A Path found by [`PathFinder::find_path`](crate::PathFinder::find_path).
///
/// The cells are ordered from the goal back to the start, so `path[0]` is always the goal and
/// the last element is always the start. A Path from a cell to itself has a single element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
	nodes: Vec<PathNode>,
}

impl Path {
	pub(crate) fn new(nodes: Vec<PathNode>) -> Path {
		debug_assert!(!nodes.is_empty());
		Path { nodes }
	}

	/// The total cost of the Path, as accumulated by the search
	pub fn cost(&self) -> Cost {
		self.nodes[0].cost
	}

	/// The number of cells in the Path, including start and goal
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Always `false`: a Path contains at least its goal
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// The cell the Path leads to
	pub fn goal(&self) -> &PathNode {
		&self.nodes[0]
	}

	/// The cell the Path starts on
	pub fn start(&self) -> &PathNode {
		&self.nodes[self.nodes.len() - 1]
	}

	/// Returns an Iterator over the cells, from goal to start.
	///
	/// Use `.rev()` to walk the Path from the start.
	pub fn iter(&self) -> std::slice::Iter<'_, PathNode> {
		self.nodes.iter()
	}

	/// The positions of all cells, from goal to start
	pub fn points(&self) -> Vec<Point> {
		self.nodes.iter().map(|node| node.point).collect()
	}

	/// The cells as a slice, from goal to start
	pub fn as_slice(&self) -> &[PathNode] {
		&self.nodes
	}
}

impl Index<usize> for Path {
	type Output = PathNode;
	fn index(&self, index: usize) -> &PathNode {
		&self.nodes[index]
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a PathNode;
	type IntoIter = std::slice::Iter<'a, PathNode>;
	fn into_iter(self) -> Self::IntoIter {
		self.nodes.iter()
	}
}

impl IntoIterator for Path {
	type Item = PathNode;
	type IntoIter = std::vec::IntoIter<PathNode>;
	fn into_iter(self) -> Self::IntoIter {
		self.nodes.into_iter()
	}
}

impl From<Path> for Vec<PathNode> {
	fn from(path: Path) -> Vec<PathNode> {
		path.nodes
	}
}

impl PartialEq<Vec<Point>> for Path {
	fn eq(&self, rhs: &Vec<Point>) -> bool {
		self.len() == rhs.len() && self.iter().zip(rhs.iter()).all(|(a, b)| a.point == *b)
	}
}

impl fmt::Display for Path {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost())?;
		let mut nodes = self.nodes.iter();
		if let Some(first) = nodes.next() {
			write!(fmt, "{:?}", first.point)?;
		}
		for node in nodes {
			write!(fmt, " -> {:?}", node.point)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Path {
		Path::new(vec![
			PathNode {
				point: (2, 2),
				cost: 2,
				estimate: 2,
			},
			PathNode {
				point: (1, 1),
				cost: 1,
				estimate: 5,
			},
			PathNode {
				point: (0, 0),
				cost: 0,
				estimate: 2,
			},
		])
	}

	#[test]
	fn index() {
		let path = sample();

		assert_eq!(path[0].point, (2, 2));
		assert_eq!(path[1].point, (1, 1));
		assert_eq!(path[2].point, (0, 0));
		assert_eq!(path.goal().point, (2, 2));
		assert_eq!(path.start().point, (0, 0));
		assert_eq!(path.cost(), 2);
		assert_eq!(path, vec![(2, 2), (1, 1), (0, 0)]);
	}

	#[test]
	fn display() {
		let path = sample();

		assert_eq!(
			&format!("{}", path),
			"Path[Cost = 2]: (2, 2) -> (1, 1) -> (0, 0)"
		);
	}

	#[test]
	fn reversed_iteration() {
		let path = sample();
		let from_start: Vec<_> = path.iter().rev().map(|node| node.point).collect();
		assert_eq!(from_start, vec![(0, 0), (1, 1), (2, 2)]);
	}
}
