use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::NearestNeighbors;
use crate::common::utils;


/// Candidate neighbor ordered by `(distance, index)`.
#[derive(Debug, Clone, Copy)]
struct DistIdx(f64, usize);

impl PartialEq for DistIdx {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}
impl Eq for DistIdx {}
impl PartialOrd for DistIdx {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}
impl Ord for DistIdx {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
            .then(self.1.cmp(&other.1))
    }
}


/// Exhaustive k-nearest-neighbor search under the Euclidean distance.
///
/// Each query scans every point and keeps the best `k` candidates
/// in a bounded max-heap. Equidistant points are ordered by index,
/// so the answer depends only on the point set and its order.
#[derive(Debug, Clone, Default)]
pub struct BruteForce {
    points: Vec<Vec<f64>>,
}


impl BruteForce {
    /// Construct an empty index.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }
}


impl NearestNeighbors for BruteForce {
    fn fit(&mut self, points: Vec<Vec<f64>>) {
        self.points = points;
    }


    fn points(&self) -> &[Vec<f64>] {
        &self.points[..]
    }


    fn kneighbors(&self, row: usize, k: usize) -> Vec<usize> {
        let query = &self.points[row];
        let mut heap: BinaryHeap<DistIdx> = BinaryHeap::with_capacity(k + 1);

        for (i, point) in self.points.iter().enumerate() {
            if i == row { continue; }

            let candidate = DistIdx(utils::squared_distance(query, point), i);
            if heap.len() < k {
                heap.push(candidate);
            } else if heap.peek().is_some_and(|worst| candidate < *worst) {
                heap.pop();
                heap.push(candidate);
            }
        }

        heap.into_sorted_vec()
            .into_iter()
            .map(|DistIdx(_, i)| i)
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> BruteForce {
        let mut index = BruteForce::new();
        index.fit(vec![
            vec![0.0], vec![1.0], vec![3.0], vec![6.0], vec![10.0],
        ]);
        index
    }

    #[test]
    fn excludes_the_query_itself() {
        let index = line();
        assert_eq!(index.kneighbors(0, 2), vec![1, 2]);
        assert_eq!(index.kneighbors(2, 2), vec![1, 0]);
    }

    #[test]
    fn returns_everything_when_k_is_large() {
        let index = line();
        assert_eq!(index.kneighbors(4, 10), vec![3, 2, 1, 0]);
    }

    #[test]
    fn ties_are_broken_by_index() {
        let mut index = BruteForce::new();
        index.fit(vec![vec![0.0], vec![-1.0], vec![1.0], vec![0.0]]);
        assert_eq!(index.kneighbors(0, 1), vec![3]);
        assert_eq!(index.kneighbors(3, 3), vec![0, 1, 2]);
    }
}
