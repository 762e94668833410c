//! Defines the [`NearestNeighbors`] trait and
//! the exhaustive-search index [`BruteForce`].

mod brute_force;

pub use brute_force::BruteForce;


/// A k-nearest-neighbor index over a fixed point set.
///
/// [`Smote`](crate::Smote) rebuilds its index on every call of `fit`,
/// so an implementation only needs to answer queries
/// about the points it was fitted with.
pub trait NearestNeighbors {
    /// Replaces the indexed point set with `points`.
    fn fit(&mut self, points: Vec<Vec<f64>>);


    /// Returns the indexed points.
    fn points(&self) -> &[Vec<f64>];


    /// Returns the indices of the `k` points nearest to the `row`-th point,
    /// nearest first. The `row`-th point itself is never returned.
    /// If fewer than `k` other points exist, all of them are returned.
    fn kneighbors(&self, row: usize, k: usize) -> Vec<usize>;


    /// Returns the number of indexed points.
    fn len(&self) -> usize {
        self.points().len()
    }


    /// Returns `true` if the index holds no point.
    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }
}
