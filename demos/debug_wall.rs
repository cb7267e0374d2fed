use grid_frontier::{search_with, ExpansionScope, GridModel, Point, SearchConfig};

// A vertical wall at column 3 spanning rows 5 to 14 sits between the start at (1, 7) and the
// end at (5, 7). The default neighbourhood-only search walks straight into it and stalls; the
// global frontier walks around it.
fn main() {
    env_logger::init();
    let mut grid = GridModel::new(20, 20).unwrap();
    for i in 0..10 {
        grid.set_wall(3, i + 5, true);
    }
    let start = Point::new(1, 7);
    let end = Point::new(5, 7);
    for scope in [ExpansionScope::Neighborhood, ExpansionScope::Global] {
        let config = SearchConfig::new().with_scope(scope);
        let result = search_with(&grid, start, end, &config).unwrap();
        println!(
            "{:?}: {:?} after {} iterations, {} pivots, {} cells scored",
            scope,
            result.outcome,
            result.iterations,
            result.path.len(),
            result.scored
        );
    }
}
