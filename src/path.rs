use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// The pivots chosen by a search in selection order, each with the distance-to-goal it was
/// selected with. The start cell is never part of it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathSequence {
    steps: FxIndexMap<Point, f64>,
}

impl PathSequence {
    pub(crate) fn push(&mut self, point: Point, distance: f64) {
        let previous = self.steps.insert(point, distance);
        debug_assert!(previous.is_none(), "{} selected twice", point);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    pub fn contains(&self, point: &Point) -> bool {
        self.steps.contains_key(point)
    }

    /// The score recorded when `point` was selected.
    pub fn distance(&self, point: &Point) -> Option<f64> {
        self.steps.get(point).copied()
    }

    pub fn first(&self) -> Option<(Point, f64)> {
        self.steps.first().map(|(p, d)| (*p, *d))
    }
    pub fn last(&self) -> Option<(Point, f64)> {
        self.steps.last().map(|(p, d)| (*p, *d))
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.steps.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, f64)> + '_ {
        self.steps.iter().map(|(p, d)| (*p, *d))
    }

    pub fn to_vec(&self) -> Vec<Point> {
        self.points().collect()
    }
}

impl<'a> IntoIterator for &'a PathSequence {
    type Item = (&'a Point, &'a f64);
    type IntoIter = indexmap::map::Iter<'a, Point, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
