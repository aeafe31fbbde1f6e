use crate::{Cost, HeuristicFormula};

/// Options for configuring the [`PathFinder`](crate::PathFinder)
///
/// Default options:
/// ```
/// # use grid_astar::{HeuristicFormula, PathFinderConfig};
/// assert_eq!(
///     PathFinderConfig {
///         diagonals: true,
///         heavy_diagonals: false,
///         punish_direction_change: false,
///         tie_breaker: false,
///         formula: HeuristicFormula::Manhattan,
///         heuristic_weight: 2,
///         search_limit: 2000,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathFinderConfig {
	/// `true` (default): cells are connected to their 8 surrounding cells.
	///
	/// `false`: only the 4 cardinal directions are used.
	pub diagonals: bool,
	/// `true`: entering a cell with a diagonal step costs `2.41` times the cell cost (truncated).
	///
	/// `false` (default): diagonal steps cost the same as straight ones.
	pub heavy_diagonals: bool,
	/// `true`: every change between horizontal and vertical movement is punished by adding the
	/// Manhattan distance of the entered cell to the goal.
	///
	/// This favors straight Paths, but the penalty is not an admissible addition, so Paths may
	/// no longer be the cheapest ones.
	pub punish_direction_change: bool,
	/// `true`: add a small bias towards cells on the straight line between start and goal.
	pub tie_breaker: bool,
	/// The formula used for the Heuristic (defaults to [`HeuristicFormula::Manhattan`])
	pub formula: HeuristicFormula,
	/// The factor applied to the Heuristic and to the initial estimate of the start (defaults to `2`)
	pub heuristic_weight: Cost,
	/// The number of cells that may be closed before a search gives up (defaults to `2000`).
	///
	/// Unreachable goals on large Grids would otherwise explore every reachable cell.
	pub search_limit: usize,
}

impl PathFinderConfig {
	/// A PathFinderConfig that only moves along the 4 cardinal directions
	///
	/// Values:
	/// ```
	/// # use grid_astar::PathFinderConfig;
	/// assert_eq!(
	///     PathFinderConfig {
	///         diagonals: false,
	///         ..Default::default()
	///     },
	///     PathFinderConfig::CARDINAL
	/// );
	/// ```
	pub const CARDINAL: PathFinderConfig = PathFinderConfig {
		diagonals: false,
		..PathFinderConfig::DEFAULT
	};
	/// A PathFinderConfig that prefers straight Paths along the line between start and goal
	///
	/// Values:
	/// ```
	/// # use grid_astar::PathFinderConfig;
	/// assert_eq!(
	///     PathFinderConfig {
	///         punish_direction_change: true,
	///         tie_breaker: true,
	///         ..Default::default()
	///     },
	///     PathFinderConfig::SMOOTH
	/// );
	/// ```
	pub const SMOOTH: PathFinderConfig = PathFinderConfig {
		punish_direction_change: true,
		tie_breaker: true,
		..PathFinderConfig::DEFAULT
	};

	const DEFAULT: PathFinderConfig = PathFinderConfig {
		diagonals: true,
		heavy_diagonals: false,
		punish_direction_change: false,
		tie_breaker: false,
		formula: HeuristicFormula::Manhattan,
		heuristic_weight: 2,
		search_limit: 2000,
	};

	/// Creates a default PathFinderConfig with a different [`search_limit`](Self::search_limit).
	pub fn with_search_limit(search_limit: usize) -> PathFinderConfig {
		PathFinderConfig {
			search_limit,
			..Default::default()
		}
	}
}

impl Default for PathFinderConfig {
	fn default() -> PathFinderConfig {
		PathFinderConfig::DEFAULT
	}
}
