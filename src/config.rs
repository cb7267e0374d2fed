use crate::error::{Result, SearchError};
use crate::grid::GridModel;

/// Which candidates compete when the next pivot is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpansionScope {
    /// Only the cells scored around the current pivot in this iteration. Candidates that lose are
    /// dropped, so consecutive pivots are always adjacent and the search can stall in dead ends.
    #[default]
    Neighborhood,
    /// Every scored cell that has not yet been selected, carried across iterations. The pivot may
    /// jump back to an earlier candidate, so consecutive pivots need not be adjacent.
    Global,
}

/// Search settings
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of outer iterations. Defaults to the cell count of the grid.
    pub max_iterations: Option<usize>,
    pub scope: ExpansionScope,
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        SearchConfig::default()
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    pub fn with_scope(mut self, scope: ExpansionScope) -> Self {
        self.scope = scope;
        self
    }

    /// Resolves the iteration cap against a grid.
    pub fn iteration_cap(&self, grid: &GridModel) -> Result<usize> {
        match self.max_iterations {
            Some(0) => Err(SearchError::ZeroIterationCap),
            Some(n) => Ok(n),
            None => Ok(grid.cell_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_defaults_to_neighborhood() {
        assert_eq!(SearchConfig::default().scope, ExpansionScope::Neighborhood);
        assert_eq!(
            SearchConfig::new().with_scope(ExpansionScope::Global).scope,
            ExpansionScope::Global
        );
    }

    #[test]
    fn cap_defaults_to_cell_count() {
        let grid = GridModel::new(4, 5).unwrap();
        assert_eq!(SearchConfig::default().iteration_cap(&grid), Ok(20));
        assert_eq!(
            SearchConfig::new().with_max_iterations(3).iteration_cap(&grid),
            Ok(3)
        );
        assert_eq!(
            SearchConfig::new().with_max_iterations(0).iteration_cap(&grid),
            Err(SearchError::ZeroIterationCap)
        );
    }
}
