use grid_frontier::{search, GridModel, Point};

// In this example a search is run on a 5x5 grid with shape
//  _____
// |S    |
// | #   |
// |  #  |
// |     |
// |    E|
//  _____
// where
// - # marks a wall
// - S marks the start
// - E marks the end
fn main() {
    env_logger::init();
    let mut grid = GridModel::new(5, 5).unwrap();
    grid.set_wall(1, 1, true);
    grid.set_wall(2, 2, true);
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(4, 4);
    let result = search(&grid, start, end, grid.cell_count()).unwrap();
    println!("Reached: {}", result.reached());
    for (p, d) in result.path.iter() {
        println!("{:?} {:.3}", p, d);
    }
}
