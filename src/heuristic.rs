use crate::{Cost, Point};

/// The formula used to estimate the remaining cost from a cell to the goal.
///
/// All formulas are multiplied by the [`heuristic_weight`](crate::PathFinderConfig::heuristic_weight)
/// of the search. None of them are checked for admissibility: if the estimate can exceed the
/// actual remaining cost, the returned Paths may be longer than the best one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum HeuristicFormula {
	/// `dx + dy`
	#[default]
	Manhattan,
	/// `max(dx, dy)`, also known as Chebyshev distance
	MaxDxDy,
	/// Diagonal steps count double, the rest is covered by straight steps
	DiagonalShortcut,
	/// `sqrt(dx² + dy²)`, truncated
	Euclidean,
	/// `dx² + dy²`. Cheap, but heavily overestimates on long distances
	EuclideanNoSqrt,
	/// Sum of the diagonal part, the orthogonal remainder and the Manhattan distance
	DiagonalPlusOrthogonal,
}

impl HeuristicFormula {
	/// Estimates the cost of reaching `goal` from `point`, scaled by `weight`.
	///
	/// ```
	/// # use grid_astar::HeuristicFormula;
	/// assert_eq!(HeuristicFormula::Manhattan.estimate((3, 1), (0, 0), 2), 8);
	/// assert_eq!(HeuristicFormula::MaxDxDy.estimate((3, 1), (0, 0), 2), 6);
	/// assert_eq!(HeuristicFormula::Euclidean.estimate((3, 4), (0, 0), 1), 5);
	/// ```
	pub fn estimate(self, point: Point, goal: Point, weight: Cost) -> Cost {
		let dx = point.0.abs_diff(goal.0);
		let dy = point.1.abs_diff(goal.1);
		match self {
			HeuristicFormula::Manhattan => weight * (dx + dy),
			HeuristicFormula::MaxDxDy => weight * dx.max(dy),
			HeuristicFormula::DiagonalShortcut => {
				let diagonal = dx.min(dy);
				let straight = dx + dy;
				weight * 2 * diagonal + weight * (straight - 2 * diagonal)
			}
			HeuristicFormula::Euclidean => {
				let distance = ((dx * dx + dy * dy) as f64).sqrt();
				(weight as f64 * distance) as Cost
			}
			HeuristicFormula::EuclideanNoSqrt => weight * (dx * dx + dy * dy),
			HeuristicFormula::DiagonalPlusOrthogonal => {
				let orthogonal = dx.abs_diff(dy);
				let diagonal = (dx + dy - orthogonal) / 2;
				weight * (diagonal + orthogonal + dx + dy)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::HeuristicFormula::*;

	#[test]
	fn zero_at_goal() {
		for formula in [
			Manhattan,
			MaxDxDy,
			DiagonalShortcut,
			Euclidean,
			EuclideanNoSqrt,
			DiagonalPlusOrthogonal,
		] {
			assert_eq!(formula.estimate((4, 7), (4, 7), 3), 0, "{:?}", formula);
		}
	}

	#[test]
	fn formulas() {
		let (point, goal) = ((1, 5), (4, 1)); // dx = 3, dy = 4
		assert_eq!(Manhattan.estimate(point, goal, 1), 7);
		assert_eq!(MaxDxDy.estimate(point, goal, 1), 4);
		assert_eq!(DiagonalShortcut.estimate(point, goal, 1), 2 * 3 + 1);
		assert_eq!(Euclidean.estimate(point, goal, 1), 5);
		assert_eq!(EuclideanNoSqrt.estimate(point, goal, 1), 25);
		assert_eq!(DiagonalPlusOrthogonal.estimate(point, goal, 1), 3 + 1 + 7);
	}

	#[test]
	fn weight_scales() {
		let (point, goal) = ((1, 5), (4, 1));
		assert_eq!(Manhattan.estimate(point, goal, 2), 14);
		assert_eq!(Euclidean.estimate(point, goal, 3), 15);
		assert_eq!(Euclidean.estimate((0, 0), (1, 1), 2), 2); // 2.83 truncated
		assert_eq!(Manhattan.estimate(point, goal, 0), 0);
	}

	#[test]
	fn symmetric() {
		assert_eq!(
			DiagonalShortcut.estimate((0, 0), (2, 6), 2),
			DiagonalShortcut.estimate((2, 6), (0, 0), 2)
		);
	}
}
