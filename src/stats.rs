//! Descriptive statistics over cleaned tables: the first four moments of a
//! single column, and pairwise Pearson correlation.

use thiserror::Error;

use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("column '{0}' has no rows")]
    EmptyColumn(String),
}

// ---------------------------------------------------------------------------
// Moments
// ---------------------------------------------------------------------------

/// First four moments of a single column. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    /// Population mean.
    pub mean: f64,
    /// Population standard deviation (divisor N).
    pub std_dev: f64,
    /// Sample skewness (third standardized moment, divisor N).
    pub skewness: f64,
    /// Excess kurtosis (fourth standardized moment minus 3, divisor N).
    pub kurtosis: f64,
}

/// Compute the four moments of a named column.
///
/// Zero-variance input yields a skewness and excess kurtosis of exactly 0.
pub fn moments(table: &Table, column: &str) -> Result<Moments, StatsError> {
    let values = table
        .column(column)
        .ok_or_else(|| StatsError::ColumnNotFound(column.to_string()))?;
    if values.is_empty() {
        return Err(StatsError::EmptyColumn(column.to_string()));
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let m2 = central_moment(&values, mean, 2);
    if m2 == 0.0 {
        return Ok(Moments {
            mean,
            std_dev: 0.0,
            skewness: 0.0,
            kurtosis: 0.0,
        });
    }
    let m3 = central_moment(&values, mean, 3);
    let m4 = central_moment(&values, mean, 4);

    Ok(Moments {
        mean,
        std_dev: m2.sqrt(),
        skewness: m3 / m2.powf(1.5),
        kurtosis: m4 / (m2 * m2) - 3.0,
    })
}

fn central_moment(values: &[f64], mean: f64, order: i32) -> f64 {
    values.iter().map(|v| (v - mean).powi(order)).sum::<f64>() / values.len() as f64
}

// ---------------------------------------------------------------------------
// Correlation
// ---------------------------------------------------------------------------

/// Pearson correlation of two equally long series.
///
/// NaN when either series is empty or has zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    if x.is_empty() {
        return f64::NAN;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        cov / denom
    }
}

/// Full pairwise Pearson correlation matrix over the given column vectors.
///
/// Symmetric with a unit diagonal; a zero-variance column is NaN against
/// every other column.
pub fn correlation_matrix(columns: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let k = columns.len();
    let mut matrix = vec![vec![f64::NAN; k]; k];
    for i in 0..k {
        for j in i..k {
            let r = if i == j {
                if columns[i].is_empty() {
                    f64::NAN
                } else {
                    1.0
                }
            } else {
                pearson(&columns[i], &columns[j])
            };
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }
    matrix
}
