use crate::{Path, PathFinder, Point, SearchStats};
use parking_lot::Mutex;

/// A [`PathFinder`] that can be shared between threads.
///
/// Every operation locks the PathFinder for its whole duration, so searches from different
/// threads run one after another, and cost changes or new teleports never interleave with a
/// running search.
///
/// ```
/// use grid_astar::{CostGrid, SharedPathFinder};
///
/// let grid = CostGrid::filled(16, 16, 1).unwrap();
/// let pathfinder = SharedPathFinder::new(grid, Default::default());
///
/// std::thread::scope(|s| {
///     for y in 0..4 {
///         let pathfinder = &pathfinder;
///         s.spawn(move || {
///             let path = pathfinder.find_path((0, y), (15, 15)).unwrap();
///             assert_eq!(path.start().point, (0, y));
///         });
///     }
/// });
/// ```
#[derive(Debug)]
pub struct SharedPathFinder {
	inner: Mutex<PathFinder>,
}

impl SharedPathFinder {
	/// Creates a new SharedPathFinder. See [`PathFinder::new`].
	pub fn new(grid: crate::CostGrid, config: crate::PathFinderConfig) -> SharedPathFinder {
		SharedPathFinder::from(PathFinder::new(grid, config))
	}

	/// See [`PathFinder::find_path`].
	#[track_caller]
	pub fn find_path(&self, start: Point, goal: Point) -> Option<Path> {
		self.inner.lock().find_path(start, goal)
	}

	/// See [`PathFinder::add_teleport`].
	#[track_caller]
	pub fn add_teleport(&self, a: Point, b: Point) {
		self.inner.lock().add_teleport(a, b)
	}

	/// See [`PathFinder::set_cost`].
	#[track_caller]
	pub fn set_cost(&self, point: Point, cost: u8) {
		self.inner.lock().set_cost(point, cost)
	}

	/// See [`PathFinder::get_cost`].
	#[track_caller]
	pub fn get_cost(&self, point: Point) -> u8 {
		self.inner.lock().get_cost(point)
	}

	/// Statistics of the most recent search from any thread.
	pub fn last_search(&self) -> Option<SearchStats> {
		self.inner.lock().last_search()
	}

	/// Runs `f` with exclusive access to the PathFinder, e.g. to change several costs at once.
	pub fn with<R>(&self, f: impl FnOnce(&mut PathFinder) -> R) -> R {
		f(&mut self.inner.lock())
	}

	/// Returns the wrapped PathFinder.
	pub fn into_inner(self) -> PathFinder {
		self.inner.into_inner()
	}
}

impl From<PathFinder> for SharedPathFinder {
	fn from(pathfinder: PathFinder) -> SharedPathFinder {
		SharedPathFinder {
			inner: Mutex::new(pathfinder),
		}
	}
}
