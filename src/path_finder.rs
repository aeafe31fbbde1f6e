use crate::{
	grid::CostGrid,
	neighbors::{self, Offset, FIRST_DIAGONAL},
	path::{Path, PathNode},
	queue::NodeQueue,
	state::StateTable,
	teleport::TeleportTable,
	Cost, HeuristicFormula, PathFinderConfig, Point,
};

/// Factor applied to the cost of a diagonal step when `heavy_diagonals` is set
pub const HEAVY_DIAGONAL_FACTOR: f64 = 2.41;
/// Factor applied to the cross product of the tie breaker
pub const TIE_BREAKER_SCALE: f64 = 0.001;

/// How the last search ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
	/// The goal was reached.
	Found,
	/// Every reachable cell was closed without reaching the goal.
	Exhausted,
	/// More than [`search_limit`](PathFinderConfig::search_limit) cells were closed.
	LimitExceeded,
}

/// Information about a finished search
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchStats {
	/// how the search ended
	pub outcome: SearchOutcome,
	/// the number of cells that were closed
	pub expanded: usize,
}

/// An A* search engine on a [`CostGrid`].
///
/// The PathFinder owns the Grid together with all buffers used during a search. The buffers
/// are kept between searches, so repeated calls to [`find_path`](PathFinder::find_path) on the
/// same Grid do not allocate anything except the returned [`Path`].
///
/// ## Examples
/// ```
/// use grid_astar::{CostGrid, PathFinder, PathFinderConfig};
///
/// let grid = CostGrid::from_rows(&[
///     [1u8, 1, 1, 1],
///     [0, 0, 0, 1],
///     [1, 1, 1, 1],
/// ]).unwrap();
///
/// let mut pathfinder = PathFinder::new(grid, PathFinderConfig::CARDINAL);
///
/// let path = pathfinder.find_path((0, 0), (0, 2)).unwrap();
/// assert_eq!(path.goal().point, (0, 2));
/// assert_eq!(path.start().point, (0, 0));
/// assert_eq!(path.len(), 9);
/// assert_eq!(path.cost(), 8);
///
/// // close the gap
/// pathfinder.set_cost((3, 1), 0);
/// assert!(pathfinder.find_path((0, 0), (0, 2)).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct PathFinder {
	grid: CostGrid,
	config: PathFinderConfig,
	directions: &'static [Offset],
	queue: NodeQueue,
	states: StateTable,
	teleports: TeleportTable,
	last_search: Option<SearchStats>,
}

impl PathFinder {
	/// Creates a new PathFinder
	///
	/// ## Arguments
	/// - `grid` - the cost of entering each cell. (Cost == 0 => impassable)
	/// - `config` - options for the search. (See [`PathFinderConfig`])
	pub fn new(grid: CostGrid, config: PathFinderConfig) -> PathFinder {
		let size = grid.size();
		PathFinder {
			directions: neighbors::offsets(config.diagonals),
			queue: NodeQueue::with_capacity(size.0 + size.1),
			states: StateTable::new(size),
			teleports: TeleportTable::new(size.0),
			grid,
			config,
			last_search: None,
		}
	}

	/// Calculates the Path from `start` to `goal`.
	///
	/// Returns `None` if `goal` cannot be reached, or if more than
	/// [`search_limit`](PathFinderConfig::search_limit) cells had to be closed. Use
	/// [`last_search`](PathFinder::last_search) to tell the two apart.
	///
	/// The returned Path is ordered from `goal` to `start`. Cells with a cost of `0` are never
	/// entered, which includes `goal` itself. `start` is never entered either, so its own cost
	/// is irrelevant.
	///
	/// ## Panics
	/// if `start` or `goal` lie outside the Grid
	#[track_caller]
	pub fn find_path(&mut self, start: Point, goal: Point) -> Option<Path> {
		self.assert_on_grid(start);
		self.assert_on_grid(goal);

		self.states.next_run();
		self.queue.clear();
		self.states.seed(start, self.config.heuristic_weight);
		self.queue.push(start, &self.states);

		let stats = self.search(start, goal);
		self.last_search = Some(stats);

		let path = match stats.outcome {
			SearchOutcome::Found => Some(self.trace_path(goal)),
			SearchOutcome::Exhausted | SearchOutcome::LimitExceeded => None,
		};
		crate::debug!(
			"search {:?} -> {:?}: {:?} after closing {} cells, path length {}",
			start,
			goal,
			stats.outcome,
			stats.expanded,
			path.as_ref().map_or(0, Path::len)
		);
		path
	}

	fn search(&mut self, start: Point, goal: Point) -> SearchStats {
		let size = self.grid.size();
		let PathFinderConfig {
			heavy_diagonals,
			punish_direction_change,
			tie_breaker,
			formula,
			heuristic_weight,
			search_limit,
			..
		} = self.config;

		let mut closed = 0;

		while let Some(current) = self.queue.pop(&self.states) {
			if self.states.is_closed(current) {
				continue;
			}
			if current == goal {
				self.states.close(current);
				return SearchStats {
					outcome: SearchOutcome::Found,
					expanded: closed,
				};
			}
			if closed > search_limit {
				return SearchStats {
					outcome: SearchOutcome::LimitExceeded,
					expanded: closed,
				};
			}

			let current_cost = self.states[current].cost;
			// horizontal displacement of the step that reached `current`
			let horizontal = current.0 as isize - self.states[current].parent.0 as isize;

			let offsets = self
				.teleports
				.offsets_at(current)
				.unwrap_or(self.directions);

			for (i, &offset) in offsets.iter().enumerate() {
				let Some(next) = neighbors::step(current, offset, size) else {
					continue;
				};
				let cell_cost = self.grid.cost_unchecked(next) as Cost;
				if cell_cost == 0 {
					continue;
				}

				let mut cost = if heavy_diagonals && i >= FIRST_DIAGONAL {
					current_cost + (cell_cost as f64 * HEAVY_DIAGONAL_FACTOR) as Cost
				} else {
					current_cost + cell_cost
				};

				if punish_direction_change {
					let moved_x = next.0 != current.0;
					let moved_y = next.1 != current.1;
					if (moved_x && horizontal == 0) || (moved_y && horizontal != 0) {
						cost += HeuristicFormula::Manhattan.estimate(next, goal, 1);
					}
				}

				if self.states.is_visited(next) && self.states[next].cost <= cost {
					continue;
				}

				let mut heuristic = formula.estimate(next, goal, heuristic_weight);
				if tie_breaker {
					heuristic = tie_break(heuristic, current, start, goal);
				}

				let node = &mut self.states[next];
				node.parent = current;
				node.cost = cost;
				node.estimate = cost + heuristic;
				self.states.open(next);
				self.queue.push(next, &self.states);
			}

			closed += 1;
			self.states.close(current);
		}

		SearchStats {
			outcome: SearchOutcome::Exhausted,
			expanded: closed,
		}
	}

	/// Follows the parents from `goal` back to the cell that is its own parent.
	fn trace_path(&self, goal: Point) -> Path {
		let mut nodes = vec![];
		let mut current = goal;
		loop {
			let state = &self.states[current];
			nodes.push(PathNode {
				point: current,
				cost: state.cost,
				estimate: state.estimate,
			});
			if state.parent == current {
				break;
			}
			current = state.parent;
		}
		Path::new(nodes)
	}

	/// Connects `a` and `b`, so that a search can step from one directly to the other.
	///
	/// A cell with a teleport keeps its regular neighbors, but the teleport step counts as a
	/// diagonal step for [`heavy_diagonals`](PathFinderConfig::heavy_diagonals). Registering
	/// several teleports on the same cell adds all of them.
	///
	/// ```
	/// # use grid_astar::{CostGrid, PathFinder};
	/// let grid = CostGrid::filled(8, 8, 1).unwrap();
	/// let mut pathfinder = PathFinder::new(grid, Default::default());
	///
	/// pathfinder.add_teleport((1, 1), (6, 6));
	///
	/// let path = pathfinder.find_path((0, 0), (7, 7)).unwrap();
	/// assert_eq!(path, vec![(7, 7), (6, 6), (1, 1), (0, 0)]);
	/// ```
	///
	/// ## Panics
	/// if `a` or `b` lie outside the Grid
	#[track_caller]
	pub fn add_teleport(&mut self, a: Point, b: Point) {
		self.assert_on_grid(a);
		self.assert_on_grid(b);
		self.teleports.register(a, b, self.directions);
		crate::trace!(
			"teleport {:?} <-> {:?}, {} cells with teleports",
			a,
			b,
			self.teleports.len()
		);
	}

	/// Changes the cost of entering `point`. (Cost == 0 => impassable)
	///
	/// ## Panics
	/// if `point` lies outside the Grid
	#[track_caller]
	pub fn set_cost(&mut self, point: Point, cost: u8) {
		self.grid.set(point, cost);
	}

	/// The cost of entering `point`
	///
	/// ## Panics
	/// if `point` lies outside the Grid
	#[track_caller]
	pub fn get_cost(&self, point: Point) -> u8 {
		self.assert_on_grid(point);
		self.grid.cost_unchecked(point)
	}

	/// The Grid that is searched
	pub fn grid(&self) -> &CostGrid {
		&self.grid
	}

	/// The config used to create this PathFinder
	pub fn config(&self) -> &PathFinderConfig {
		&self.config
	}

	/// Statistics of the most recent call to [`find_path`](PathFinder::find_path)
	pub fn last_search(&self) -> Option<SearchStats> {
		self.last_search
	}

	#[track_caller]
	fn assert_on_grid(&self, point: Point) {
		assert!(
			self.grid.contains(point),
			"{:?} is outside of the {}x{} grid",
			point,
			self.grid.width(),
			self.grid.height()
		);
	}
}

/// Adds a bias proportional to the distance of `current` from the line between `start` and `goal`.
fn tie_break(heuristic: Cost, current: Point, start: Point, goal: Point) -> Cost {
	let dx1 = current.0 as isize - goal.0 as isize;
	let dy1 = current.1 as isize - goal.1 as isize;
	let dx2 = start.0 as isize - goal.0 as isize;
	let dy2 = start.1 as isize - goal.1 as isize;
	let cross = (dx1 * dy2 - dx2 * dy1).unsigned_abs();
	(heuristic as f64 + cross as f64 * TIE_BREAKER_SCALE) as Cost
}
