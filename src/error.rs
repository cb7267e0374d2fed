use grid_util::point::Point;
use thiserror::Error;

/// Which end of a search a coordinate belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

/// Configuration errors reported before any search work is done.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("grid dimensions must be positive, got {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },

    #[error("{endpoint} {point} lies outside the {cols}x{rows} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        point: Point,
        cols: usize,
        rows: usize,
    },

    #[error("iteration cap must be at least 1")]
    ZeroIterationCap,

    #[error("could not parse grid layout at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, SearchError>;
