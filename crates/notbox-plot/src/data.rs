//! Sample and key containers accepted by the plot entry point

use notbox_core::{Error, Result};

/// Column-major matrix of observations: columns are groups, rows are
/// observations, `NaN` marks a missing entry
///
/// Ragged groups are stored padded with `NaN`; the padding is dropped when
/// statistics are computed.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMatrix {
    n_rows: usize,
    n_cols: usize,
    data: Vec<f64>,
}

impl SampleMatrix {
    /// Wrap column-major data of shape `n_rows x n_cols`
    pub fn new(n_rows: usize, n_cols: usize, column_major: Vec<f64>) -> Result<Self> {
        let expected = n_rows * n_cols;
        if column_major.len() != expected {
            return Err(Error::size_mismatch(
                expected,
                column_major.len(),
                "sample matrix data",
            ));
        }
        Ok(Self {
            n_rows,
            n_cols,
            data: column_major,
        })
    }

    /// Build a matrix from possibly ragged columns, padding short ones with `NaN`
    ///
    /// ```rust
    /// use notbox_plot::SampleMatrix;
    ///
    /// let m = SampleMatrix::from_columns(vec![vec![1.0, 2.0, 3.0], vec![4.0]]);
    /// assert_eq!(m.n_rows(), 3);
    /// assert_eq!(m.n_cols(), 2);
    /// assert!(m.column(1)[2].is_nan());
    /// ```
    pub fn from_columns<I, C>(columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[f64]>,
    {
        let columns: Vec<C> = columns.into_iter().collect();
        let n_rows = columns
            .iter()
            .map(|c| c.as_ref().len())
            .max()
            .unwrap_or(0);
        let n_cols = columns.len();

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for column in &columns {
            let column = column.as_ref();
            data.extend_from_slice(column);
            data.extend(std::iter::repeat(f64::NAN).take(n_rows - column.len()));
        }

        Self {
            n_rows,
            n_cols,
            data,
        }
    }

    /// Build a matrix from rows; every row must have the same length
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);

        let mut data = vec![f64::NAN; n_rows * n_cols];
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(Error::size_mismatch(n_cols, row.len(), "sample matrix row"));
            }
            for (j, &value) in row.iter().enumerate() {
                data[j * n_rows + i] = value;
            }
        }

        Ok(Self {
            n_rows,
            n_cols,
            data,
        })
    }

    /// Number of observation rows (including padding)
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of group columns
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Observations of one column, padding included
    ///
    /// # Panics
    /// Panics if `index >= n_cols`.
    pub fn column(&self, index: usize) -> &[f64] {
        assert!(index < self.n_cols, "column {index} out of range");
        &self.data[index * self.n_rows..(index + 1) * self.n_rows]
    }

    /// Observations of one row, one per column
    ///
    /// # Panics
    /// Panics if `index >= n_rows`.
    pub fn row(&self, index: usize) -> Vec<f64> {
        assert!(index < self.n_rows, "row {index} out of range");
        self.columns().map(|column| column[index]).collect()
    }

    /// Iterate columns in order
    pub fn columns(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.n_cols).map(move |i| self.column(i))
    }
}

/// Sample input: a flat vector of observations or a matrix of group columns
#[derive(Debug, Clone, PartialEq)]
pub enum SampleInput {
    /// One-dimensional observations
    Vector(Vec<f64>),
    /// Columns of observations, one group per column
    Matrix(SampleMatrix),
}

impl SampleInput {
    /// Whether the input is one-dimensional
    ///
    /// A single-column or single-row matrix counts as one-dimensional.
    pub fn is_vector(&self) -> bool {
        match self {
            SampleInput::Vector(_) => true,
            SampleInput::Matrix(m) => m.n_cols() == 1 || m.n_rows() == 1,
        }
    }
}

impl From<Vec<f64>> for SampleInput {
    fn from(values: Vec<f64>) -> Self {
        SampleInput::Vector(values)
    }
}

impl From<&[f64]> for SampleInput {
    fn from(values: &[f64]) -> Self {
        SampleInput::Vector(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for SampleInput {
    fn from(values: [f64; N]) -> Self {
        SampleInput::Vector(values.to_vec())
    }
}

impl From<SampleMatrix> for SampleInput {
    fn from(matrix: SampleMatrix) -> Self {
        SampleInput::Matrix(matrix)
    }
}

/// X-position keys, one per sample column (or per observation for flat input)
///
/// Boolean keys are coerced to `0.0`/`1.0` on construction and are never
/// compared as booleans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupKeys(Vec<f64>);

impl GroupKeys {
    /// Wrap numeric keys
    pub fn new(keys: Vec<f64>) -> Self {
        Self(keys)
    }

    /// No keys: columns are placed at `1..=n_cols`
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// Coerce boolean keys to numbers
    pub fn from_bools(keys: &[bool]) -> Self {
        Self(keys.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Reject keys that cannot be ordered or placed on an axis
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(bad) = self.0.iter().find(|k| !k.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "Group key {bad} is not a finite number"
            )));
        }
        Ok(())
    }
}

impl From<Vec<f64>> for GroupKeys {
    fn from(keys: Vec<f64>) -> Self {
        Self(keys)
    }
}

impl From<&[f64]> for GroupKeys {
    fn from(keys: &[f64]) -> Self {
        Self(keys.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for GroupKeys {
    fn from(keys: [f64; N]) -> Self {
        Self(keys.to_vec())
    }
}

impl From<Vec<bool>> for GroupKeys {
    fn from(keys: Vec<bool>) -> Self {
        Self::from_bools(&keys)
    }
}

impl From<&[bool]> for GroupKeys {
    fn from(keys: &[bool]) -> Self {
        Self::from_bools(keys)
    }
}

impl From<Option<Vec<f64>>> for GroupKeys {
    fn from(keys: Option<Vec<f64>>) -> Self {
        Self(keys.unwrap_or_default())
    }
}
