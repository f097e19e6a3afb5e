//! Resolves sample input and keys into an ordered list of groups
//!
//! Two shapes are recognized:
//!
//! - **Columnar**: one group per sample column, the key giving each column's
//!   x position. Columns with equal keys share an x position but remain
//!   separate groups; they are told apart by their rank in tie order.
//! - **Ungrouped**: a flat vector (or single-row/single-column matrix) of
//!   observations with a parallel vector of labels. Observations are pooled by label (labels sorted ascending,
//!   observation order preserved) and the result is laid out as columns.

use crate::data::{GroupKeys, SampleInput, SampleMatrix};
use notbox_core::{Error, Result};
use ordered_float::OrderedFloat;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// How the input was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum DispatchMode {
    /// One group per column
    Columnar,
    /// Flat observations pooled by label
    Ungrouped,
}

/// A single group at one x position
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGroup {
    /// Horizontal position
    pub x: f64,
    /// Observations; may still contain `NaN` for missing entries
    pub values: Vec<f64>,
    /// Position among the groups sharing this x, in order of appearance
    pub tie_rank: usize,
    /// Number of groups sharing this x
    pub ties: usize,
}

/// Ordered groups produced for one plot call
#[derive(Debug, Clone, PartialEq)]
pub struct GroupLayout {
    pub mode: DispatchMode,
    pub groups: Vec<ResolvedGroup>,
}

impl GroupLayout {
    /// Resolve input and keys into groups
    pub fn resolve(input: &SampleInput, keys: &GroupKeys) -> Result<Self> {
        keys.validate()?;

        let layout = match input {
            SampleInput::Vector(values) if keys.len() > 1 => {
                Self::ungrouped(values, keys.as_slice())?
            }
            SampleInput::Vector(values) => {
                let x = keys.as_slice().first().copied().unwrap_or(1.0);
                Self::columnar(vec![(x, values.clone())])
            }
            SampleInput::Matrix(matrix) if matrix.n_cols() == 1 && keys.len() > 1 => {
                Self::ungrouped(matrix.column(0), keys.as_slice())?
            }
            SampleInput::Matrix(matrix) if matrix.n_rows() == 1 && keys.len() > 1 => {
                Self::ungrouped(&matrix.row(0), keys.as_slice())?
            }
            SampleInput::Matrix(matrix) => Self::from_matrix(matrix, keys)?,
        };

        debug!(
            "Resolved {} groups at {} x positions ({:?})",
            layout.groups.len(),
            layout.unique_x().len(),
            layout.mode
        );
        Ok(layout)
    }

    fn from_matrix(matrix: &SampleMatrix, keys: &GroupKeys) -> Result<Self> {
        let xs: Vec<f64> = if keys.is_empty() {
            (1..=matrix.n_cols()).map(|i| i as f64).collect()
        } else if keys.len() == matrix.n_cols() {
            keys.as_slice().to_vec()
        } else {
            return Err(Error::KeyLengthMismatch {
                keys: keys.len(),
                expected: matrix.n_cols(),
            });
        };

        Ok(Self::columnar(
            xs.into_iter()
                .zip(matrix.columns().map(|c| c.to_vec()))
                .collect(),
        ))
    }

    fn ungrouped(values: &[f64], keys: &[f64]) -> Result<Self> {
        let pooled = split_by_key(values, keys)?;
        let mut layout = Self::columnar(pooled);
        layout.mode = DispatchMode::Ungrouped;
        Ok(layout)
    }

    fn columnar(columns: Vec<(f64, Vec<f64>)>) -> Self {
        let mut totals: HashMap<OrderedFloat<f64>, usize> = HashMap::new();
        for (x, _) in &columns {
            *totals.entry(OrderedFloat(*x)).or_default() += 1;
        }

        let mut seen: HashMap<OrderedFloat<f64>, usize> = HashMap::new();
        let groups = columns
            .into_iter()
            .map(|(x, values)| {
                let rank = seen.entry(OrderedFloat(x)).or_default();
                let group = ResolvedGroup {
                    x,
                    values,
                    tie_rank: *rank,
                    ties: totals[&OrderedFloat(x)],
                };
                *rank += 1;
                group
            })
            .collect();

        Self {
            mode: DispatchMode::Columnar,
            groups,
        }
    }

    /// Distinct x positions, ascending
    pub fn unique_x(&self) -> Vec<f64> {
        self.groups
            .iter()
            .map(|g| OrderedFloat(g.x))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|x| x.into_inner())
            .collect()
    }

    /// Axis range `[min(x) - 1, max(x) + 1]`
    ///
    /// Ungrouped layouts always get a range. Columnar layouts get one only
    /// when more than one distinct x position exists.
    pub fn x_limits(&self) -> Option<(f64, f64)> {
        let unique = self.unique_x();
        let wanted = self.mode == DispatchMode::Ungrouped || unique.len() > 1;
        match (unique.first(), unique.last()) {
            (Some(&lo), Some(&hi)) if wanted => Some((lo - 1.0, hi + 1.0)),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Pool flat observations by label
///
/// Labels come back sorted ascending; within a label, observations keep
/// their input order.
///
/// ```rust
/// use notbox_plot::grouping::split_by_key;
///
/// let groups = split_by_key(&[5.0, 1.0, 6.0], &[2.0, 1.0, 2.0]).unwrap();
/// assert_eq!(groups, vec![(1.0, vec![1.0]), (2.0, vec![5.0, 6.0])]);
/// ```
pub fn split_by_key(values: &[f64], keys: &[f64]) -> Result<Vec<(f64, Vec<f64>)>> {
    if values.len() != keys.len() {
        return Err(Error::KeyLengthMismatch {
            keys: keys.len(),
            expected: values.len(),
        });
    }

    let mut pooled: BTreeMap<OrderedFloat<f64>, Vec<f64>> = BTreeMap::new();
    for (&value, &key) in values.iter().zip(keys) {
        pooled.entry(OrderedFloat(key)).or_default().push(value);
    }

    Ok(pooled
        .into_iter()
        .map(|(key, values)| (key.into_inner(), values))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_example() -> (Vec<f64>, Vec<f64>) {
        (
            vec![7.0, 8.0, 6.0, 1.0, 5.0, 7.0, 2.0, 1.0, 3.0, 4.0, 5.0, 2.0, 4.0],
            vec![1.0, 1.0, 1.0, 3.0, 2.0, 1.0, 3.0, 3.0, 3.0, 2.0, 2.0, 3.0, 3.0],
        )
    }

    #[test]
    fn test_ungrouped_pools_by_label() {
        let (values, keys) = flat_example();
        let layout =
            GroupLayout::resolve(&SampleInput::from(values), &GroupKeys::from(keys)).unwrap();

        assert_eq!(layout.mode, DispatchMode::Ungrouped);
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.groups[0].x, 1.0);
        assert_eq!(layout.groups[0].values, vec![7.0, 8.0, 6.0, 7.0]);
        assert_eq!(layout.groups[1].x, 2.0);
        assert_eq!(layout.groups[1].values, vec![5.0, 4.0, 5.0]);
        assert_eq!(layout.groups[2].x, 3.0);
        assert_eq!(layout.groups[2].values, vec![1.0, 2.0, 1.0, 3.0, 2.0, 4.0]);
        assert!(layout.groups.iter().all(|g| g.tie_rank == 0 && g.ties == 1));
        assert_eq!(layout.x_limits(), Some((0.0, 4.0)));
    }

    #[test]
    fn test_ungrouped_length_mismatch() {
        let err = GroupLayout::resolve(
            &SampleInput::from(vec![1.0, 2.0, 3.0]),
            &GroupKeys::from(vec![1.0, 2.0]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::KeyLengthMismatch { keys: 2, expected: 3 }));
    }

    #[test]
    fn test_single_column_matrix_is_flat() {
        let matrix = SampleMatrix::from_columns([[1.0, 2.0, 3.0]]);
        let layout = GroupLayout::resolve(
            &SampleInput::from(matrix),
            &GroupKeys::from(vec![2.0, 1.0, 2.0]),
        )
        .unwrap();
        assert_eq!(layout.mode, DispatchMode::Ungrouped);
        assert_eq!(layout.groups[0].values, vec![2.0]);
        assert_eq!(layout.groups[1].values, vec![1.0, 3.0]);
    }

    #[test]
    fn test_ungrouped_single_label_keeps_axis() {
        let layout = GroupLayout::resolve(
            &SampleInput::from(vec![1.0, 2.0, 3.0]),
            &GroupKeys::from(vec![2.0, 2.0, 2.0]),
        )
        .unwrap();
        assert_eq!(layout.mode, DispatchMode::Ungrouped);
        assert_eq!(layout.len(), 1);
        assert_eq!(layout.x_limits(), Some((1.0, 3.0)));
        assert_eq!(layout.unique_x(), vec![2.0]);
    }

    #[test]
    fn test_single_row_matrix_is_flat() {
        let keys = GroupKeys::from(vec![1.0, 1.0, 2.0]);
        let by_row = GroupLayout::resolve(
            &SampleInput::from(SampleMatrix::from_rows(&[[1.0, 2.0, 3.0]]).unwrap()),
            &keys,
        )
        .unwrap();
        let by_column = GroupLayout::resolve(
            &SampleInput::from(SampleMatrix::from_columns([[1.0, 2.0, 3.0]])),
            &keys,
        )
        .unwrap();

        assert_eq!(by_row.mode, DispatchMode::Ungrouped);
        assert_eq!(by_row, by_column);
        assert_eq!(by_row.groups[0].values, vec![1.0, 2.0]);
        assert_eq!(by_row.groups[1].values, vec![3.0]);
    }

    #[test]
    fn test_vector_with_single_key() {
        let layout = GroupLayout::resolve(
            &SampleInput::from(vec![1.0, 2.0]),
            &GroupKeys::from(vec![4.0]),
        )
        .unwrap();
        assert_eq!(layout.mode, DispatchMode::Columnar);
        assert_eq!(layout.len(), 1);
        assert_eq!(layout.groups[0].x, 4.0);
        assert_eq!(layout.x_limits(), None);
    }

    #[test]
    fn test_vector_without_keys_sits_at_one() {
        let layout =
            GroupLayout::resolve(&SampleInput::from(vec![1.0, 2.0]), &GroupKeys::none()).unwrap();
        assert_eq!(layout.groups[0].x, 1.0);
    }

    #[test]
    fn test_columnar_default_keys() {
        let matrix = SampleMatrix::from_columns(vec![vec![1.0], vec![2.0], vec![3.0]]);
        let layout = GroupLayout::resolve(&SampleInput::from(matrix), &GroupKeys::none()).unwrap();
        let xs: Vec<f64> = layout.groups.iter().map(|g| g.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
        assert_eq!(layout.x_limits(), Some((0.0, 4.0)));
    }

    #[test]
    fn test_columnar_length_mismatch() {
        let matrix = SampleMatrix::from_columns(vec![vec![1.0], vec![2.0], vec![3.0]]);
        let err = GroupLayout::resolve(
            &SampleInput::from(matrix),
            &GroupKeys::from(vec![1.0, 2.0]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::KeyLengthMismatch { keys: 2, expected: 3 }));
    }

    #[test]
    fn test_shared_keys_keep_separate_groups() {
        let matrix = SampleMatrix::from_columns(vec![
            vec![1.0, 2.0],
            vec![3.0, 4.0],
            vec![5.0, 6.0],
            vec![7.0, 8.0],
        ]);
        let layout = GroupLayout::resolve(
            &SampleInput::from(matrix),
            &GroupKeys::from(vec![2.0, 1.0, 2.0, 2.0]),
        )
        .unwrap();

        assert_eq!(layout.mode, DispatchMode::Columnar);
        assert_eq!(layout.len(), 4);
        let ranks: Vec<(usize, usize)> = layout.groups.iter().map(|g| (g.tie_rank, g.ties)).collect();
        assert_eq!(ranks, vec![(0, 3), (0, 1), (1, 3), (2, 3)]);
        assert_eq!(layout.groups[2].values, vec![5.0, 6.0]);
        assert_eq!(layout.unique_x(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_bool_keys() {
        let matrix = SampleMatrix::from_columns(vec![vec![1.0], vec![2.0]]);
        let layout = GroupLayout::resolve(
            &SampleInput::from(matrix),
            &GroupKeys::from(vec![false, true]),
        )
        .unwrap();
        assert_eq!(layout.unique_x(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_non_finite_keys_rejected() {
        let err = GroupLayout::resolve(
            &SampleInput::from(vec![1.0, 2.0]),
            &GroupKeys::from(vec![1.0, f64::NAN]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
