#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate for repeated A* searches on a mutable Grid.
//!
//! ## Introduction
//! Games and simulations often need to find Paths on the same Grid over and over again, while
//! the Grid itself slowly changes: doors close, walls get built, terrain gets more expensive.
//! Allocating and clearing the bookkeeping of an A* search for every request quickly dominates
//! the cost of short searches on large Grids.
//!
//! This crate provides a [`PathFinder`] that owns a [`CostGrid`] and keeps all of its search
//! buffers between searches. Instead of resetting the per-cell data, every search receives a
//! new generation stamp, which makes stale data from earlier searches invisible without ever
//! touching it.
//!
//! Each cell of the Grid stores the cost of entering it, with `0` marking impassable cells.
//! Searches can move in 4 or 8 directions, may weight diagonal steps, punish changes in
//! direction, bias towards the straight line between start and goal and follow teleports
//! between cells that are not adjacent.
//!
//! ## Examples
//! Creating the PathFinder:
//! ```
//! use grid_astar::{CostGrid, PathFinder, PathFinderConfig};
//!
//! // 1 = road, 4 = swamp, 0 = wall
//! let grid = CostGrid::from_rows(&[
//!     [1u8, 0, 1, 1, 1],
//!     [1, 0, 1, 0, 1],
//!     [1, 4, 1, 0, 1],
//!     [1, 4, 1, 0, 1],
//!     [1, 1, 1, 0, 1],
//! ]).unwrap();
//!
//! let mut pathfinder = PathFinder::new(grid, PathFinderConfig::CARDINAL);
//! ```
//!
//! ### Pathfinding
//! ```
//! # use grid_astar::{CostGrid, PathFinder, PathFinderConfig};
//! #
//! # let grid = CostGrid::from_rows(&[
//! #     [1u8, 0, 1, 1, 1],
//! #     [1, 0, 1, 0, 1],
//! #     [1, 4, 1, 0, 1],
//! #     [1, 4, 1, 0, 1],
//! #     [1, 1, 1, 0, 1],
//! # ]).unwrap();
//! #
//! # let mut pathfinder = PathFinder::new(grid, PathFinderConfig::CARDINAL);
//! #
//! let start = (0, 0);
//! let goal = (4, 4);
//!
//! // find_path returns Some(Path) on success
//! let path = pathfinder.find_path(start, goal).unwrap();
//!
//! // Paths are ordered from the goal back to the start
//! assert_eq!(path.goal().point, goal);
//! assert_eq!(path.start().point, start);
//!
//! // walls are never entered
//! assert!(path.iter().all(|node| pathfinder.get_cost(node.point) > 0));
//! ```
//!
//! ### Updating the Grid
//! Costs can be changed between searches. The next search simply uses the new values.
//! ```
//! # use grid_astar::{CostGrid, PathFinder, PathFinderConfig};
//! #
//! # let grid = CostGrid::from_rows(&[
//! #     [1u8, 0, 1, 1, 1],
//! #     [1, 0, 1, 0, 1],
//! #     [1, 4, 1, 0, 1],
//! #     [1, 4, 1, 0, 1],
//! #     [1, 1, 1, 0, 1],
//! # ]).unwrap();
//! #
//! # let mut pathfinder = PathFinder::new(grid, PathFinderConfig::CARDINAL);
//! #
//! // wall off the only way into the right column
//! pathfinder.set_cost((2, 0), 0);
//! assert!(pathfinder.find_path((0, 0), (4, 4)).is_none());
//!
//! // and connect both sides with a teleport instead
//! pathfinder.add_teleport((0, 4), (4, 4));
//! let path = pathfinder.find_path((0, 0), (4, 4)).unwrap();
//! assert_eq!(path.len(), 6);
//! ```
//!
//! ### Configuration
//! The second parameter of [`PathFinder::new`] is a [`PathFinderConfig`]. Its fields are public
//! and can be combined with one of the presets:
//! ```
//! use grid_astar::{CostGrid, HeuristicFormula, PathFinder, PathFinderConfig};
//!
//! let pathfinder = PathFinder::new(
//!     CostGrid::filled(64, 64, 1).unwrap(),
//!     PathFinderConfig {
//!         formula: HeuristicFormula::DiagonalShortcut,
//!         search_limit: 10_000,
//!         ..PathFinderConfig::SMOOTH
//!     },
//! );
//!
//! assert_eq!(pathfinder.config().search_limit, 10_000);
//! ```
//!
//! ### Threads
//! A single search always runs on the calling thread. To share one PathFinder between threads,
//! wrap it in a [`SharedPathFinder`], which serializes all access.
//!
//! ## Logging
//! With the `log` feature enabled, every search logs its outcome at `debug` level.

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

/// A Type to represent the Cost of a Path
pub type Cost = usize;

macro_rules! debug {
	($($arg:tt)*) => {{
		#[cfg(feature = "log")]
		log::debug!($($arg)*);
		#[cfg(not(feature = "log"))]
		let _ = format_args!($($arg)*);
	}};
}
pub(crate) use debug;

macro_rules! trace {
	($($arg:tt)*) => {{
		#[cfg(feature = "log")]
		log::trace!($($arg)*);
		#[cfg(not(feature = "log"))]
		let _ = format_args!($($arg)*);
	}};
}
pub(crate) use trace;

mod config;
pub use self::config::PathFinderConfig;

mod grid;
pub use self::grid::{CostGrid, GridError};

mod heuristic;
pub use self::heuristic::HeuristicFormula;

pub mod neighbors;

mod path;
pub use self::path::{Path, PathNode};

mod path_finder;
pub use self::path_finder::{
	PathFinder, SearchOutcome, SearchStats, HEAVY_DIAGONAL_FACTOR, TIE_BREAKER_SCALE,
};

mod queue;
mod shared;
pub use self::shared::SharedPathFinder;

mod state;
mod teleport;

/// The most commonly used types of this crate
pub mod prelude {
	pub use crate::{
		CostGrid, HeuristicFormula, Path, PathFinder, PathFinderConfig, PathNode, Point,
		SharedPathFinder,
	};
}
