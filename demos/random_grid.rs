use grid_frontier::{search_with, GridModel, Point, SearchConfig, SearchResult};
use rand::prelude::*;

const COLS: usize = 20;
const ROWS: usize = 20;
const WALL_PROBABILITY: f64 = 0.25;

fn random_grid_position(rng: &mut StdRng) -> Point {
    Point::new(
        rng.gen_range(0..COLS) as i32,
        rng.gen_range(0..ROWS) as i32,
    )
}

/// Draws the grid with the path on top: `S` start, `E` end, `#` wall, `o` pivot.
fn draw(grid: &GridModel, start: &Point, end: &Point, result: &SearchResult) {
    for y in 0..grid.rows() as i32 {
        let line = (0..grid.cols() as i32)
            .map(|x| {
                let p = Point::new(x, y);
                if p == *start {
                    'S'
                } else if p == *end {
                    'E'
                } else if grid.is_wall_at(&p) {
                    '#'
                } else if result.path.contains(&p) {
                    'o'
                } else {
                    '.'
                }
            })
            .collect::<String>();
        println!("{}", line);
    }
}

// Seeds a random map and endpoints, clears the endpoints if they landed on walls and draws the
// pivots chosen by the search. Pass a seed as the first argument to reproduce a layout.
fn main() {
    env_logger::init();
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);

    let mut grid = GridModel::new(COLS, ROWS).unwrap();
    for x in 0..COLS as i32 {
        for y in 0..ROWS as i32 {
            grid.set_wall(x, y, rng.gen_bool(WALL_PROBABILITY));
        }
    }
    let start = random_grid_position(&mut rng);
    let end = random_grid_position(&mut rng);
    grid.clear(&start);
    grid.clear(&end);

    let result = search_with(&grid, start, end, &SearchConfig::default()).unwrap();
    println!("Seed {}: {} -> {}", seed, start, end);
    draw(&grid, &start, &end, &result);
    if result.reached() {
        println!("Reached the end after {} iterations", result.iterations);
    } else if grid.reachable(&start, &end) {
        println!("End is reachable but the search ran out of iterations");
    } else {
        println!("End is walled off from the start");
    }
}
