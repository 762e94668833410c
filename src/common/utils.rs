//! This file provides some common functions
//! such as normalization and argmax.


/// L1-normalizes the given slice and returns the norm before scaling.
/// A zero vector is left untouched.
#[inline(always)]
pub fn normalize(items: &mut [f64]) -> f64 {
    let z = items.iter()
        .map(|it| it.abs())
        .sum::<f64>();

    if z > 0.0 {
        items.iter_mut()
            .for_each(|item| { *item /= z; });
    }
    z
}


/// Returns an index whose entry is the maximal value.
/// Ties are broken by the smallest index.
#[inline(always)]
pub fn argmax(arr: &[f64]) -> usize {
    let dim = arr.len();
    let (ix, _) = arr.iter()
        .enumerate()
        .fold((dim, f64::MIN), |acc, (i, &a)| {
            if acc.0 == dim || acc.1 < a {
                (i, a)
            } else {
                acc
            }
        });
    assert_ne!(
        ix, dim,
        "failed to execute argmax. array is {arr:?}"
    );
    ix
}


/// Squared Euclidean distance between two points.
#[inline(always)]
pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(ai, bi)| (ai - bi).powi(2))
        .sum::<f64>()
}
