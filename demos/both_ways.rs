use grid_frontier::{search_both_ways, GridModel, Point, SearchConfig};

// Source to target and target to source run side by side over the same grid.
fn main() {
    env_logger::init();
    let grid: GridModel = "\
        ..........\n\
        ....#.....\n\
        ....#.....\n\
        ....####..\n\
        ..........\n\
        .#######..\n\
        .........."
        .parse()
        .unwrap();
    let start = Point::new(0, 0);
    let end = Point::new(9, 6);
    let (forward, backward) = search_both_ways(&grid, start, end, &SearchConfig::default()).unwrap();
    println!("{}", grid);
    println!("Forward:  {:?} {:?}", forward.outcome, forward.path.to_vec());
    println!("Backward: {:?} {:?}", backward.outcome, backward.path.to_vec());
}
