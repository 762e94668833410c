//! Provides [`Smote`], the Synthetic Minority Over-sampling Technique
//! by Chawla, Bowyer, Hall, and Kegelmeyer, 2002.
use rand::prelude::*;

use crate::{
    BruteForce,
    NearestNeighbors,

    error::{Result, SmoteBoostError},
};


/// Defines `Smote`.
/// This struct is based on the paper:
/// [SMOTE: Synthetic Minority Over-sampling
/// Technique](https://doi.org/10.1613/jair.953)
/// by N. V. Chawla, K. W. Bowyer, L. O. Hall, and W. P. Kegelmeyer.
///
/// `Smote` stores a set of minority points and
/// generates new points on the segments
/// between a point and one of its `k` nearest neighbors.
///
/// Each synthetic point consumes exactly three draws
/// from the random stream, in this order:
/// 1. the index of the base point,
/// 2. the index of the neighbor among the `k` nearest ones,
/// 3. the gap in `[0, 1)`.
///
/// # Example
/// ```no_run
/// use smoteboost::Smote;
///
/// let minority = vec![
///     vec![0.0, 0.0],
///     vec![1.0, 0.0],
///     vec![0.0, 1.0],
/// ];
/// let mut smote = Smote::new(2).seed(1234);
/// smote.fit(minority).unwrap();
///
/// let synthetic = smote.sample(10).unwrap();
/// assert_eq!(synthetic.len(), 10);
/// ```
#[derive(Debug)]
pub struct Smote<N = BruteForce> {
    // Number of neighbors each synthetic point may interpolate towards.
    k_neighbors: usize,

    // Nearest neighbor index over the fitted minority points.
    index: N,

    // Dimension of the fitted points.
    // `None` until `fit` succeeds.
    n_feature: Option<usize>,

    // Random stream used by `Smote::sample`.
    // Seeded from the system entropy on first use unless `seed` was called.
    rng: Option<StdRng>,
}


impl Smote<BruteForce> {
    /// Initialize `Smote` with `k_neighbors` neighbors
    /// and the exhaustive-search index.
    /// Unless [`Smote::seed`] is called,
    /// [`Smote::sample`] seeds its stream from the system entropy
    /// on first use.
    pub fn new(k_neighbors: usize) -> Self {
        Self::with_index(k_neighbors, BruteForce::new())
    }
}


impl<N> Smote<N>
    where N: NearestNeighbors,
{
    /// Initialize `Smote` with a custom nearest neighbor index.
    pub fn with_index(k_neighbors: usize, index: N) -> Self {
        Self {
            k_neighbors,
            index,
            n_feature: None,
            rng: None,
        }
    }


    /// Seeds the random stream used by [`Smote::sample`].
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Some(StdRng::seed_from_u64(seed));
        self
    }


    /// Returns the number of neighbors.
    pub fn k_neighbors(&self) -> usize {
        self.k_neighbors
    }


    /// Returns the fitted minority points.
    pub fn points(&self) -> &[Vec<f64>] {
        self.index.points()
    }


    /// Stores the minority points and rebuilds the neighbor index.
    ///
    /// Fails if `k_neighbors == 0`,
    /// if there are fewer than `k_neighbors + 1` points,
    /// or if the points have different lengths.
    /// On failure the previously fitted state is discarded.
    pub fn fit(&mut self, minority: Vec<Vec<f64>>) -> Result<&mut Self> {
        self.n_feature = None;

        if self.k_neighbors == 0 {
            return Err(SmoteBoostError::invalid_parameter(
                "k_neighbors", 0, "must be greater than zero"
            ));
        }

        let required = self.k_neighbors + 1;
        if minority.len() < required {
            return Err(SmoteBoostError::InsufficientSamples {
                required,
                found: minority.len(),
            });
        }

        let n_feature = minority[0].len();
        if let Some(x) = minority.iter().find(|x| x.len() != n_feature) {
            return Err(SmoteBoostError::DimensionMismatch {
                expected: n_feature,
                found: x.len(),
            });
        }

        self.index.fit(minority);
        self.n_feature = Some(n_feature);
        Ok(self)
    }


    /// Generates `n_samples` synthetic points
    /// from the random stream owned by `self`.
    pub fn sample(&mut self, n_samples: usize) -> Result<Vec<Vec<f64>>> {
        let n_feature = self.n_feature.ok_or(SmoteBoostError::NotFitted)?;
        let rng = self.rng.get_or_insert_with(StdRng::from_entropy);
        Ok(interpolate(&self.index, self.k_neighbors, n_feature, n_samples, rng))
    }


    /// Generates `n_samples` synthetic points
    /// from the caller's random stream.
    pub fn sample_with<R>(&self, n_samples: usize, rng: &mut R)
        -> Result<Vec<Vec<f64>>>
        where R: Rng + ?Sized,
    {
        let n_feature = self.n_feature.ok_or(SmoteBoostError::NotFitted)?;
        Ok(interpolate(&self.index, self.k_neighbors, n_feature, n_samples, rng))
    }
}


fn interpolate<N, R>(
    index: &N,
    k_neighbors: usize,
    n_feature: usize,
    n_samples: usize,
    rng: &mut R,
) -> Vec<Vec<f64>>
    where N: NearestNeighbors,
          R: Rng + ?Sized,
{
    let points = index.points();
    let n_points = points.len();

    (0..n_samples).map(|_| {
            let j = rng.gen_range(0..n_points);

            // `fit` guarantees at least `k_neighbors` other points.
            let nn = index.kneighbors(j, k_neighbors);
            let nn_index = nn[rng.gen_range(0..nn.len())];

            let gap = rng.gen::<f64>();

            let base = &points[j];
            let neighbor = &points[nn_index];
            let mut x = Vec::with_capacity(n_feature);
            x.extend(
                base.iter()
                    .zip(neighbor)
                    .map(|(b, n)| b + gap * (n - b))
            );
            x
        })
        .collect()
}
