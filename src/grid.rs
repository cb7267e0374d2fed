use crate::error::{Result, SearchError};
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use itertools::Itertools;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::str::FromStr;

const WALL_CHAR: char = '#';
const EMPTY_CHAR: char = '.';

/// [GridModel] is the occupancy map searched by [FrontierSearch](crate::FrontierSearch). Cells
/// are stored in a [BoolGrid] where [true] marks a wall and [false] an empty cell. Coordinates are
/// [Point]s with `x` as the column and `y` as the row.
///
/// It also tracks 8-connected components in a [UnionFind] so that hosts can
/// tell a goal that is truly cut off apart from one the greedy search merely failed to reach.
#[derive(Clone, Debug)]
pub struct GridModel {
    cells: BoolGrid,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl GridModel {
    /// Creates an all-empty grid. Fails if either dimension is zero.
    pub fn new(cols: usize, rows: usize) -> Result<GridModel> {
        if cols == 0 || rows == 0 {
            return Err(SearchError::InvalidDimensions { cols, rows });
        }
        let mut grid = GridModel {
            cells: BoolGrid::new(cols, rows, false),
            components: UnionFind::new(cols * rows),
            components_dirty: true,
        };
        grid.generate_components();
        Ok(grid)
    }

    /// Returns `(cols, rows)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols(), self.rows())
    }
    pub fn cols(&self) -> usize {
        self.cells.width()
    }
    pub fn rows(&self) -> usize {
        self.cells.height()
    }
    pub fn cell_count(&self) -> usize {
        self.cols() * self.rows()
    }

    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        self.cells.index_in_bounds(col, row)
    }
    pub fn contains(&self, point: &Point) -> bool {
        self.in_bounds(point.x, point.y)
    }

    /// Wall status of a cell. Panics if the cell lies outside the grid; callers bounds-check
    /// first.
    pub fn is_wall(&self, col: i32, row: i32) -> bool {
        assert!(
            self.in_bounds(col, row),
            "wall query at ({}, {}) outside {}x{} grid",
            col,
            row,
            self.cols(),
            self.rows()
        );
        self.cells.get(col, row)
    }
    pub fn is_wall_at(&self, point: &Point) -> bool {
        self.is_wall(point.x, point.y)
    }

    /// Updates a cell. Opening a cell joins it with its open neighbours; closing one flags the
    /// components as dirty since they may have been split apart.
    pub fn set_wall(&mut self, col: i32, row: i32, wall: bool) {
        let was_wall = self.is_wall(col, row);
        self.cells.set(col, row, wall);
        if wall {
            if !was_wall {
                self.components_dirty = true;
            }
        } else {
            let p = Point::new(col, row);
            self.join_open_neighbours(&p);
        }
    }

    /// Clears a cell, typically a start or end placed on a wall by the seeding code.
    pub fn clear(&mut self, point: &Point) {
        self.set_wall(point.x, point.y, false);
    }

    pub fn wall_count(&self) -> usize {
        self.points().filter(|p| self.cells.get(p.x, p.y)).count()
    }

    /// All coordinates in column-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let rows = self.rows() as i32;
        (0..self.cols() as i32).flat_map(move |x| (0..rows).map(move |y| Point::new(x, y)))
    }

    /// Open cells of the Moore neighbourhood of `point`.
    pub fn open_neighbours(&self, point: &Point) -> SmallVec<[Point; 8]> {
        point
            .moore_neighborhood_smallvec()
            .into_iter()
            .filter(|n| self.contains(n) && !self.cells.get_point(*n))
            .collect()
    }

    fn join_open_neighbours(&mut self, point: &Point) {
        let p_ix = self.cells.get_ix_point(point);
        for n in self.open_neighbours(point) {
            let ix = self.cells.get_ix_point(&n);
            self.components.union(p_ix, ix);
        }
    }

    /// Checks if start and goal are on the same component. Regenerates the components first if
    /// they are dirty.
    pub fn reachable(&mut self, start: &Point, goal: &Point) -> bool {
        if !self.contains(start) || !self.contains(goal) {
            return false;
        }
        self.update();
        self.components
            .equiv(self.cells.get_ix_point(start), self.cells.get_ix_point(goal))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open 8-neighbours to the same component.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.cell_count());
        self.components_dirty = false;
        for x in 0..self.cols() as i32 {
            for y in 0..self.rows() as i32 {
                if !self.cells.get(x, y) {
                    self.join_open_neighbours(&Point::new(x, y));
                }
            }
        }
    }
}

impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.rows() as i32 {
            let line = (0..self.cols() as i32)
                .map(|x| {
                    if self.cells.get(x, y) {
                        WALL_CHAR
                    } else {
                        EMPTY_CHAR
                    }
                })
                .join("");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses a layout of `.` (empty) and `#` (wall) characters, one grid row per line. Blank lines
/// and surrounding whitespace are ignored.
impl FromStr for GridModel {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<GridModel> {
        let lines = s
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, l)| !l.is_empty())
            .collect::<Vec<_>>();
        let rows = lines.len();
        let cols = lines.first().map(|(_, l)| l.chars().count()).unwrap_or(0);
        let mut grid = GridModel::new(cols, rows)?;
        for (y, (line_no, line)) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(SearchError::Parse {
                    line: line_no + 1,
                    reason: format!("expected {} cells, found {}", cols, line.chars().count()),
                });
            }
            for (x, c) in line.chars().enumerate() {
                match c {
                    WALL_CHAR => grid.cells.set(x as i32, y as i32, true),
                    EMPTY_CHAR => {}
                    other => {
                        return Err(SearchError::Parse {
                            line: line_no + 1,
                            reason: format!("unexpected cell character '{}'", other),
                        })
                    }
                }
            }
        }
        grid.generate_components();
        Ok(grid)
    }
}
