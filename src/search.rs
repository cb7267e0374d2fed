use crate::config::{ExpansionScope, SearchConfig};
use crate::error::{Endpoint, Result, SearchError};
use crate::frontier::Frontier;
use crate::grid::GridModel;
use crate::metric::{Euclidean, Metric};
use crate::path::PathSequence;
use fxhash::FxHashSet;
use grid_util::point::Point;
use log::{debug, trace, warn};
use smallvec::SmallVec;
use std::sync::atomic::{AtomicBool, Ordering};

/// The result of one call to [FrontierSearch::step].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A new pivot was selected and appended to the path.
    Advanced(Point),
    /// No candidate was available; the pivot stays where it is.
    Stalled,
    /// The pivot is the goal. Terminal.
    Reached,
    /// The iteration cap is used up. Terminal.
    Exhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Reached,
    /// The cap ran out before the pivot reached the goal.
    Exhausted,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub path: PathSequence,
    /// Outer iterations consumed. Once the search stalls every remaining iteration up to the cap
    /// counts as performed, since each of them would stall the same way.
    pub iterations: usize,
    /// Cells scored against the goal.
    pub scored: usize,
}

impl SearchResult {
    pub fn reached(&self) -> bool {
        self.outcome == SearchOutcome::Reached
    }
}

/// Greedy best-first expansion from a start cell towards an end cell.
///
/// Every outer iteration scores the unvisited, non-wall cells of the 3x3 block around the pivot
/// by their distance to the goal and then moves the pivot to the best candidate. A cell counts as
/// visited as soon as it is scored and is never scored again. Distance ties go to the cell that
/// was discovered first, with each neighbourhood scanned by increasing column, then increasing
/// row.
///
/// There is no accumulated path cost, so the result is not a shortest path. With the default
/// [ExpansionScope::Neighborhood] each pivot is adjacent to the previous one and the search may
/// stall before a reachable goal; [ExpansionScope::Global] keeps losing candidates around and
/// reaches every connected goal at the cost of non-adjacent jumps. It always halts within the
/// configured number of iterations.
#[derive(Clone, Debug)]
pub struct FrontierSearch<'a, M: Metric = Euclidean> {
    grid: &'a GridModel,
    metric: M,
    start: Point,
    end: Point,
    pivot: Point,
    scope: ExpansionScope,
    max_iterations: usize,
    iteration: usize,
    visited: FxHashSet<Point>,
    frontier: Frontier,
    path: PathSequence,
}

impl<'a> FrontierSearch<'a, Euclidean> {
    /// Validates the endpoints and cap and prepares a search ranked by [Euclidean] distance.
    ///
    /// Panics if `start` or `end` is a wall; seeding code must clear those cells.
    pub fn new(
        grid: &'a GridModel,
        start: Point,
        end: Point,
        config: &SearchConfig,
    ) -> Result<FrontierSearch<'a, Euclidean>> {
        FrontierSearch::with_metric(grid, start, end, config, Euclidean)
    }
}

impl<'a, M: Metric> FrontierSearch<'a, M> {
    pub fn with_metric(
        grid: &'a GridModel,
        start: Point,
        end: Point,
        config: &SearchConfig,
        metric: M,
    ) -> Result<FrontierSearch<'a, M>> {
        let (cols, rows) = grid.dimensions();
        for (endpoint, point) in [(Endpoint::Start, start), (Endpoint::End, end)] {
            if !grid.contains(&point) {
                return Err(SearchError::OutOfBounds {
                    endpoint,
                    point,
                    cols,
                    rows,
                });
            }
            assert!(
                !grid.is_wall_at(&point),
                "{} {} is a wall, clear it before searching",
                endpoint,
                point
            );
        }
        let max_iterations = config.iteration_cap(grid)?;

        let mut visited = FxHashSet::default();
        visited.insert(start);
        Ok(FrontierSearch {
            grid,
            metric,
            start,
            end,
            pivot: start,
            scope: config.scope,
            max_iterations,
            iteration: 0,
            visited,
            frontier: Frontier::default(),
            path: PathSequence::default(),
        })
    }

    pub fn start(&self) -> Point {
        self.start
    }
    pub fn end(&self) -> Point {
        self.end
    }
    pub fn pivot(&self) -> Point {
        self.pivot
    }
    pub fn iteration(&self) -> usize {
        self.iteration
    }
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
    pub fn path(&self) -> &PathSequence {
        &self.path
    }
    pub fn is_visited(&self, point: &Point) -> bool {
        self.visited.contains(point)
    }
    /// Candidates waiting to be selected.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// The in-bounds cells of the 3x3 block around the pivot, pivot excluded, by increasing
    /// column and then increasing row.
    fn neighbourhood(&self) -> SmallVec<[Point; 8]> {
        let mut cells = SmallVec::new();
        for col in self.pivot.x - 1..=self.pivot.x + 1 {
            if !self.grid.in_bounds(col, 0) {
                continue;
            }
            for row in self.pivot.y - 1..=self.pivot.y + 1 {
                if !self.grid.in_bounds(col, row) {
                    continue;
                }
                if col == self.pivot.x && row == self.pivot.y {
                    continue;
                }
                cells.push(Point::new(col, row));
            }
        }
        cells
    }

    /// Performs exactly one outer iteration.
    pub fn step(&mut self) -> Step {
        if self.pivot == self.end {
            return Step::Reached;
        }
        if self.iteration >= self.max_iterations {
            return Step::Exhausted;
        }
        trace!("Iteration: {}, current pivot ({})", self.iteration, self.pivot);

        if self.scope == ExpansionScope::Neighborhood {
            self.frontier.clear();
        }
        for cell in self.neighbourhood() {
            if self.grid.is_wall_at(&cell) || !self.visited.insert(cell) {
                continue;
            }
            let distance = self.metric.distance(&cell, &self.end);
            self.frontier.push(cell, distance);
        }

        let step = match self.frontier.pop_best() {
            Some(best) => {
                self.pivot = best.point;
                self.path.push(best.point, best.distance);
                Step::Advanced(best.point)
            }
            None => Step::Stalled,
        };
        self.iteration += 1;
        step
    }

    /// Runs the search to completion.
    pub fn run(self) -> SearchResult {
        self.drive(None)
    }

    /// Runs the search, checking `cancel` once before every outer iteration.
    pub fn run_cancellable(self, cancel: &AtomicBool) -> SearchResult {
        self.drive(Some(cancel))
    }

    fn drive(mut self, cancel: Option<&AtomicBool>) -> SearchResult {
        debug!(
            "Searching from {} to {} with at most {} iterations",
            self.start, self.end, self.max_iterations
        );
        loop {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                return self.finish(SearchOutcome::Cancelled);
            }
            match self.step() {
                Step::Reached => return self.finish(SearchOutcome::Reached),
                Step::Exhausted => return self.finish(SearchOutcome::Exhausted),
                Step::Advanced(_) => {}
                Step::Stalled => {
                    // The pivot is fixed and every neighbour is visited, so each remaining
                    // iteration would stall the same way
                    debug!(
                        "Stalled at {} after {} iterations",
                        self.pivot, self.iteration
                    );
                    self.iteration = self.max_iterations;
                }
            }
        }
    }

    fn finish(self, outcome: SearchOutcome) -> SearchResult {
        match outcome {
            SearchOutcome::Reached => debug!(
                "Reached {} after {} iterations, path of {} cells",
                self.end,
                self.iteration,
                self.path.len()
            ),
            SearchOutcome::Exhausted => warn!(
                "Iteration cap of {} exhausted before reaching {} from {}",
                self.max_iterations, self.end, self.start
            ),
            SearchOutcome::Cancelled => debug!("Search cancelled at iteration {}", self.iteration),
        }
        SearchResult {
            outcome,
            iterations: self.iteration,
            scored: self.frontier.discovered(),
            path: self.path,
        }
    }
}

/// Yields every non-terminal [Step]. Call [run](FrontierSearch::run) afterwards to collect the
/// [SearchResult].
impl<M: Metric> Iterator for FrontierSearch<'_, M> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        match self.step() {
            Step::Reached | Step::Exhausted => None,
            step => Some(step),
        }
    }
}
