use grid_astar::prelude::*;
use grid_astar::SearchOutcome;

#[test]
fn concurrent_searches() {
    let grid = CostGrid::filled(32, 32, 1).unwrap();
    let pathfinder = SharedPathFinder::new(grid, Default::default());
    pathfinder.add_teleport((1, 1), (30, 30));

    let expected = pathfinder.find_path((0, 0), (31, 31)).unwrap();
    assert_eq!(expected.len(), 4);

    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..50 {
                    let path = pathfinder.find_path((0, 0), (31, 31)).unwrap();
                    assert_eq!(path, expected);
                }
            });
        }
    });

    assert_eq!(
        pathfinder.last_search().unwrap().outcome,
        SearchOutcome::Found
    );
}

#[test]
fn changes_between_searches() {
    let grid = CostGrid::filled(8, 1, 1).unwrap();
    let pathfinder = SharedPathFinder::new(grid, PathFinderConfig::CARDINAL);

    assert!(pathfinder.find_path((0, 0), (7, 0)).is_some());

    std::thread::scope(|s| {
        s.spawn(|| pathfinder.set_cost((4, 0), 0));
    });
    assert_eq!(pathfinder.get_cost((4, 0)), 0);
    assert!(pathfinder.find_path((0, 0), (7, 0)).is_none());

    pathfinder.with(|inner| {
        inner.set_cost((4, 0), 3);
        inner.set_cost((5, 0), 3);
    });
    let path = pathfinder.find_path((0, 0), (7, 0)).unwrap();
    assert_eq!(path.cost(), 11);

    let inner = pathfinder.into_inner();
    assert_eq!(inner.get_cost((5, 0)), 3);
}
