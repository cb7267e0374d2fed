//! # grid_frontier
//!
//! Greedy best-first search on a 2D occupancy grid. Starting from a start cell, the search
//! repeatedly scores the 8-connected neighbourhood of its current pivot by
//! [Euclidean distance](https://en.wikipedia.org/wiki/Euclidean_distance) to the end cell and
//! moves the pivot to the best scored candidate. The ordered sequence of pivots is returned for
//! drawing or animation together with an explicit flag telling whether the end was reached.
//!
//! This is not A*: no path cost is accumulated, so paths are not guaranteed to be shortest and
//! a search can run out of iterations without reaching a goal that is reachable. The grid keeps
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) to tell those
//! cases apart from a goal that is cut off.
mod config;
mod error;
mod frontier;
mod grid;
pub mod metric;
mod path;
mod search;

pub use config::{ExpansionScope, SearchConfig};
pub use error::{Endpoint, Result, SearchError};
pub use grid::GridModel;
pub use grid_util::point::Point;
pub use metric::{euclidean_distance, Metric};
pub use path::PathSequence;
pub use search::{FrontierSearch, SearchOutcome, SearchResult, Step};

use std::thread;

/// Searches from `start` to `end` with at most `max_iterations` outer iterations.
pub fn search(
    grid: &GridModel,
    start: Point,
    end: Point,
    max_iterations: usize,
) -> Result<SearchResult> {
    search_with(
        grid,
        start,
        end,
        &SearchConfig::new().with_max_iterations(max_iterations),
    )
}

/// Searches from `start` to `end` using the given settings.
pub fn search_with(
    grid: &GridModel,
    start: Point,
    end: Point,
    config: &SearchConfig,
) -> Result<SearchResult> {
    Ok(FrontierSearch::new(grid, start, end, config)?.run())
}

/// Runs `start -> end` and `end -> start` as two independent searches over the same grid, each
/// on its own thread. Returns `(forward, backward)`.
pub fn search_both_ways(
    grid: &GridModel,
    start: Point,
    end: Point,
    config: &SearchConfig,
) -> Result<(SearchResult, SearchResult)> {
    let forward = FrontierSearch::new(grid, start, end, config)?;
    let backward = FrontierSearch::new(grid, end, start, config)?;
    Ok(thread::scope(|s| {
        let handle = s.spawn(move || backward.run());
        let forward = forward.run();
        let backward = handle
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        (forward, backward)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_entry_point() {
        let grid = GridModel::new(5, 5).unwrap();
        let result = search(&grid, Point::new(0, 0), Point::new(4, 4), 25).unwrap();
        assert!(result.reached());
        assert_eq!(result.path.last().map(|(p, _)| p), Some(Point::new(4, 4)));
        assert_eq!(
            search(&grid, Point::new(0, 0), Point::new(4, 4), 0),
            Err(SearchError::ZeroIterationCap)
        );
    }

    #[test]
    fn both_ways_on_open_grid() {
        let grid = GridModel::new(6, 4).unwrap();
        let start = Point::new(0, 0);
        let end = Point::new(5, 3);
        let (forward, backward) =
            search_both_ways(&grid, start, end, &SearchConfig::default()).unwrap();
        assert!(forward.reached());
        assert!(backward.reached());
        assert_eq!(forward.path.last().map(|(p, _)| p), Some(end));
        assert_eq!(backward.path.last().map(|(p, _)| p), Some(start));
        assert_eq!(
            forward,
            search_with(&grid, start, end, &SearchConfig::default()).unwrap()
        );
    }
}
