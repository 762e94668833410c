use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::collections::BTreeMap;

use polars::prelude::*;

use crate::error::{Result, SmoteBoostError};


/// Struct `Sample` holds a batch of labeled examples in row-major order.
///
/// Each row is a dense feature vector of the same length and
/// each label is a categorical value of type `i64`.
/// Rows are never removed nor reordered;
/// the boosting loop only appends synthetic rows at the end.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) names: Vec<String>,
    pub(super) rows: Vec<Vec<f64>>,
    pub(super) target: Vec<i64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a new `Sample` from the given rows and labels.
    ///
    /// Features are named `Feat. [1]`, `Feat. [2]`, ....
    /// Returns `Err` if `rows` is empty, if the rows have different lengths,
    /// or if the number of labels differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>, target: Vec<i64>) -> Result<Self> {
        let n_feature = rows.first()
            .map(|row| row.len())
            .unwrap_or(0);
        if rows.is_empty() || n_feature == 0 {
            return Err(SmoteBoostError::EmptySample);
        }

        if let Some(row) = rows.iter().find(|row| row.len() != n_feature) {
            return Err(SmoteBoostError::DimensionMismatch {
                expected: n_feature,
                found: row.len(),
            });
        }

        let n_sample = rows.len();
        if target.len() != n_sample {
            return Err(SmoteBoostError::DimensionMismatch {
                expected: n_sample,
                found: target.len(),
            });
        }

        let names = dummy_names(n_feature);
        Ok(Self { names, rows, target, n_sample, n_feature, })
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    /// Every column of `data` is cast to `f64`
    /// and `target` is cast to `i64`.
    /// A float `target` must hold integral values;
    /// a fractional or non-finite label is a [`SmoteBoostError::Parse`].
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let (n_sample, n_feature) = data.shape();
        if n_sample == 0 || n_feature == 0 {
            return Err(SmoteBoostError::EmptySample);
        }
        if target.len() != n_sample {
            return Err(SmoteBoostError::DimensionMismatch {
                expected: n_sample,
                found: target.len(),
            });
        }

        let names = data.get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>();

        let mut rows = vec![Vec::with_capacity(n_feature); n_sample];
        for series in data.get_columns() {
            let series = series.cast(&DataType::Float64)?;
            let column = series.f64()?;
            for (i, (row, x)) in rows.iter_mut().zip(column).enumerate() {
                let x = x.ok_or_else(|| SmoteBoostError::Parse {
                    line: i + 1,
                    value: format!("null in column `{}`", series.name()),
                })?;
                row.push(x);
            }
        }

        let null_target = |i: usize| SmoteBoostError::Parse {
            line: i + 1,
            value: "null in target".to_string(),
        };
        let target = if target.dtype().is_float() {
            let target = target.cast(&DataType::Float64)?;
            target.f64()?
                .into_iter()
                .enumerate()
                .map(|(i, y)| {
                    let y = y.ok_or_else(|| null_target(i))?;
                    integral_label(y, i + 1)
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            let target = target.cast(&DataType::Int64)?;
            target.i64()?
                .into_iter()
                .enumerate()
                .map(|(i, y)| y.ok_or_else(|| null_target(i)))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Self { names, rows, target, n_sample, n_feature, })
    }


    /// Read a CSV format file to [`Sample`] type.
    /// This method returns `Err` if the file does not exist.
    pub(crate) fn from_csv<P, S>(file: P, has_header: bool, target: S)
        -> Result<Self>
        where P: AsRef<Path>,
              S: AsRef<str>,
    {
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header, target)
    }


    /// Read a CSV from [`BufReader`].
    ///
    /// If the CSV file does not have a header row,
    /// this method assigns a default name for each column:
    /// `Feat. [1]`, `Feat. [2]`, ..., `Feat. [n]`.
    /// The column named `target` holds the integer labels.
    pub fn from_reader<R, S>(
        reader: BufReader<R>,
        has_header: bool,
        target: S,
    ) -> Result<Self>
        where R: Read,
              S: AsRef<str>,
    {
        let target_name = target.as_ref();
        let mut lines = reader.lines().enumerate();

        let mut header = None;
        if has_header {
            let line = match lines.next() {
                Some((_, line)) => line?,
                None => return Err(SmoteBoostError::EmptySample),
            };
            header = Some(
                line.split(',')
                    .map(|name| name.trim().to_string())
                    .collect::<Vec<_>>()
            );
        }

        // Each record keeps its 1-based line number.
        let mut records: Vec<(usize, Vec<f64>)> = Vec::new();
        for (i, line) in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let xs = line.split(',')
                .map(|x| {
                    x.trim().parse::<f64>()
                        .map_err(|_| SmoteBoostError::Parse {
                            line: i + 1,
                            value: x.trim().to_string(),
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            records.push((i + 1, xs));
        }

        let n_column = match (&header, records.first()) {
            (Some(names), _) => names.len(),
            (None, Some((_, record))) => record.len(),
            (None, None) => return Err(SmoteBoostError::EmptySample),
        };
        let mut names = header.unwrap_or_else(|| dummy_names(n_column));

        let pos = names.iter()
            .position(|name| name == target_name)
            .ok_or_else(|| {
                SmoteBoostError::invalid_parameter(
                    "target_feature",
                    target_name,
                    "the column does not exist",
                )
            })?;
        names.remove(pos);

        let mut rows = Vec::with_capacity(records.len());
        let mut labels = Vec::with_capacity(records.len());
        for (line, mut record) in records {
            if record.len() != n_column {
                return Err(SmoteBoostError::DimensionMismatch {
                    expected: n_column,
                    found: record.len(),
                });
            }
            let y = record.remove(pos);
            labels.push(integral_label(y, line)?);
            rows.push(record);
        }

        let mut sample = Self::from_rows(rows, labels)?;
        sample.names = names;
        Ok(sample)
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the feature names.
    pub fn feature_names(&self) -> &[String] {
        &self.names[..]
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (&[f64], i64) {
        (&self.rows[idx][..], self.target[idx])
    }


    /// Returns the `idx`-th feature vector.
    pub fn row(&self, idx: usize) -> &[f64] {
        &self.rows[idx][..]
    }


    /// Returns all the feature vectors.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows[..]
    }


    /// Returns the slice of labels.
    pub fn target(&self) -> &[i64] {
        &self.target[..]
    }


    /// Returns the unique labels in ascending order.
    pub fn unique_target(&self) -> Vec<i64> {
        self.label_counts()
            .into_keys()
            .collect()
    }


    /// Counts the occurrences of each label.
    pub fn label_counts(&self) -> BTreeMap<i64, usize> {
        let mut counts = BTreeMap::new();
        for &y in self.target.iter() {
            *counts.entry(y).or_insert(0_usize) += 1;
        }
        counts
    }


    /// Returns the least frequent label.
    /// Among equally rare labels, the smallest one is returned.
    pub fn minority_label(&self) -> Option<i64> {
        self.label_counts()
            .into_iter()
            .min_by_key(|&(_, count)| count)
            .map(|(label, _)| label)
    }


    /// Returns copies of the rows labeled `label`, in sample order.
    pub fn rows_with_label(&self, label: i64) -> Vec<Vec<f64>> {
        self.rows.iter()
            .zip(&self.target[..])
            .filter_map(|(row, &y)| (y == label).then(|| row.clone()))
            .collect()
    }


    /// Reserves capacity for at least `additional` more rows.
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.rows.reserve(additional);
        self.target.reserve(additional);
    }


    /// Appends `rows` labeled `label` at the end of `self`.
    pub(crate) fn append(&mut self, rows: Vec<Vec<f64>>, label: i64)
        -> Result<()>
    {
        if let Some(row) = rows.iter().find(|r| r.len() != self.n_feature) {
            return Err(SmoteBoostError::DimensionMismatch {
                expected: self.n_feature,
                found: row.len(),
            });
        }

        let n_new = rows.len();
        self.rows.extend(rows);
        self.target.extend(std::iter::repeat(label).take(n_new));
        self.n_sample += n_new;
        Ok(())
    }
}


/// Converts a label read as a float.
/// `line` is reported if `y` is not a finite integer.
fn integral_label(y: f64, line: usize) -> Result<i64> {
    if y.is_finite() && y.trunc() == y {
        Ok(y as i64)
    } else {
        Err(SmoteBoostError::Parse { line, value: y.to_string() })
    }
}


fn dummy_names(n_feature: usize) -> Vec<String> {
    (1..=n_feature).map(|i| format!("Feat. [{i}]"))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_counts_are_sorted_by_label() {
        let rows = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
        let sample = Sample::from_rows(rows, vec![3, -1, 3, 0]).unwrap();

        let counts = sample.label_counts();
        let pairs = counts.into_iter().collect::<Vec<_>>();
        assert_eq!(pairs, vec![(-1, 1), (0, 1), (3, 2)]);
        assert_eq!(sample.unique_target(), vec![-1, 0, 3]);
        assert_eq!(sample.minority_label(), Some(-1));
    }

    #[test]
    fn minority_label_is_the_rarest() {
        let rows = vec![vec![0.0]; 4];
        let sample = Sample::from_rows(rows, vec![0, 0, 0, 1]).unwrap();
        assert_eq!(sample.minority_label(), Some(1));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![0.0, 1.0], vec![1.0]];
        let err = Sample::from_rows(rows, vec![0, 1]).unwrap_err();
        assert!(matches!(
            err,
            SmoteBoostError::DimensionMismatch { expected: 2, found: 1 }
        ));
    }

    #[test]
    fn append_keeps_order() {
        let rows = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        let mut sample = Sample::from_rows(rows, vec![0, 1]).unwrap();
        sample.append(vec![vec![5.0, 5.0]], 1).unwrap();

        assert_eq!(sample.shape(), (3, 2));
        assert_eq!(sample.at(2), (&[5.0, 5.0][..], 1));
        assert_eq!(sample.rows_with_label(1), vec![vec![1.0, 1.0], vec![5.0, 5.0]]);

        let err = sample.append(vec![vec![1.0]], 1).unwrap_err();
        assert!(matches!(err, SmoteBoostError::DimensionMismatch { .. }));
        assert_eq!(sample.shape(), (3, 2));
    }
}
