use grid_frontier::metric::{Chebyshev, Manhattan};
use grid_frontier::{
    euclidean_distance, search, search_both_ways, search_with, ExpansionScope, FrontierSearch,
    GridModel, Point, SearchConfig, SearchOutcome,
};

/// 20x20 grid with a vertical wall at column 3 over rows 5..15.
fn debug_wall_grid() -> GridModel {
    let mut grid = GridModel::new(20, 20).unwrap();
    for i in 0..10 {
        grid.set_wall(3, i + 5, true);
    }
    grid
}

#[test]
fn debug_wall_is_walked_around_globally() {
    let grid = debug_wall_grid();
    let start = Point::new(1, 7);
    let end = Point::new(5, 7);
    let config = SearchConfig::new().with_scope(ExpansionScope::Global);
    let result = search_with(&grid, start, end, &config).unwrap();
    assert!(result.reached());
    assert_eq!(result.path.last().map(|(p, _)| p), Some(end));
    assert!(result.path.points().all(|p| !grid.is_wall_at(&p)));
    // Crossing column 3 needs a pivot above or below the wall
    assert!(result
        .path
        .points()
        .any(|p| p.x == 3 && (p.y < 5 || p.y >= 15)));
}

#[test]
fn debug_wall_stops_the_default_search() {
    let grid = debug_wall_grid();
    let result = search(&grid, Point::new(1, 7), Point::new(5, 7), grid.cell_count()).unwrap();
    assert_eq!(result.outcome, SearchOutcome::Exhausted);
    assert_eq!(result.path.to_vec(), vec![Point::new(2, 7)]);
    assert_eq!(result.iterations, grid.cell_count());
    assert!(!result.path.contains(&Point::new(5, 7)));
}

#[test]
fn concrete_open_grid() {
    let grid = GridModel::new(5, 5).unwrap();
    let end = Point::new(4, 4);
    let result = search(&grid, Point::new(0, 0), end, 25).unwrap();
    assert!(!result.path.is_empty());
    let mut previous = f64::INFINITY;
    for (p, d) in result.path.iter() {
        assert_eq!(d, euclidean_distance(&p, &end));
        assert!(d <= previous);
        previous = d;
    }
    assert_eq!(result.path.last().map(|(p, _)| p), Some(end));
}

#[test]
fn alternative_metrics_reach_goal() {
    let grid = debug_wall_grid();
    let start = Point::new(1, 7);
    let end = Point::new(5, 7);
    let config = SearchConfig::new().with_scope(ExpansionScope::Global);
    let chebyshev = FrontierSearch::with_metric(&grid, start, end, &config, Chebyshev)
        .unwrap()
        .run();
    let manhattan = FrontierSearch::with_metric(&grid, start, end, &config, Manhattan)
        .unwrap()
        .run();
    assert!(chebyshev.reached());
    assert!(manhattan.reached());
}

#[test]
fn both_directions_share_the_grid() {
    let mut grid = debug_wall_grid();
    let start = Point::new(1, 7);
    let end = Point::new(5, 7);
    let config = SearchConfig::new().with_scope(ExpansionScope::Global);
    let (forward, backward) = search_both_ways(&grid, start, end, &config).unwrap();
    assert!(forward.reached());
    assert!(backward.reached());
    assert!(grid.reachable(&start, &end));
}

#[test]
fn enclosed_goal_is_reported_unreached() {
    // The goal sits in a sealed pocket in the lower right corner
    let grid: GridModel = "\
        ......\n\
        ......\n\
        ......\n\
        ...###\n\
        ...#..\n\
        ...#.."
        .parse()
        .unwrap();
    let mut components = grid.clone();
    let start = Point::new(0, 0);
    let end = Point::new(5, 5);
    let result = search(&grid, start, end, grid.cell_count()).unwrap();
    assert!(!result.reached());
    assert_eq!(result.outcome, SearchOutcome::Exhausted);
    assert!(!components.reachable(&start, &end));
    assert!(result.path.points().all(|p| p.x < 3 || p.y < 3));
}
