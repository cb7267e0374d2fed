use grid_util::point::Point;

/// Scores how far a cell is from the goal. The search ranks candidates by this value alone.
pub trait Metric {
    fn distance(&self, a: &Point, b: &Point) -> f64;
}

/// Straight-line distance, the default ranking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

/// Number of king moves between two cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chebyshev;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

/// `sqrt((b.x - a.x)^2 + (b.y - a.y)^2)`
pub fn euclidean_distance(a: &Point, b: &Point) -> f64 {
    let dx = f64::from(b.x - a.x);
    let dy = f64::from(b.y - a.y);
    (dx * dx + dy * dy).sqrt()
}

impl Metric for Euclidean {
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        euclidean_distance(a, b)
    }
}

impl Metric for Chebyshev {
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        f64::from((b.x - a.x).abs().max((b.y - a.y).abs()))
    }
}

impl Metric for Manhattan {
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        f64::from((b.x - a.x).abs() + (b.y - a.y).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn pythagorean_triple() {
        assert_eq!(euclidean_distance(&Point::new(0, 0), &Point::new(3, 4)), 5.0);
    }

    #[test]
    fn zero_distance_to_self() {
        let a = Point::new(7, 2);
        assert_eq!(euclidean_distance(&a, &a), 0.0);
        assert_eq!(Chebyshev.distance(&a, &a), 0.0);
        assert_eq!(Manhattan.distance(&a, &a), 0.0);
    }

    #[test]
    fn symmetric_for_random_pairs() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            let a = Point::new(rng.gen_range(0..100), rng.gen_range(0..100));
            let b = Point::new(rng.gen_range(0..100), rng.gen_range(0..100));
            assert_eq!(euclidean_distance(&a, &b), euclidean_distance(&b, &a));
            assert_eq!(Chebyshev.distance(&a, &b), Chebyshev.distance(&b, &a));
            assert_eq!(Manhattan.distance(&a, &b), Manhattan.distance(&b, &a));
        }
    }

    #[test]
    fn alternative_metrics() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 3);
        assert_eq!(Chebyshev.distance(&a, &b), 3.0);
        assert_eq!(Manhattan.distance(&a, &b), 5.0);
        assert_eq!(Euclidean.distance(&a, &b), 13f64.sqrt());
    }
}
