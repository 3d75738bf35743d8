//! Ordinary least-squares fitting of a straight line `y = slope · x + intercept`.
//!
//! The fit is computed in closed form from the summary sums `Σu`, `Σy`, `Σuy` and `Σu²`,
//! accumulated left to right in a single pass over the dataset, where `u = x − x₀` is
//! the x offset from the first point. The slope is unaffected by the offset and the
//! intercept is shifted back afterwards, so large offsets like Unix timestamps do not
//! cancel out in `n·Σu² − (Σu)²`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FitError {
    #[error("no data points supplied")]
    EmptyDataset,

    #[error("all {n_points} data points share the same x, the line is undefined")]
    DegenerateInput { n_points: usize },

    #[error("data point #{index} has a non-finite coordinate")]
    InvalidValue { index: usize },

    /// Reported under the same `invalid_value` kind as [`FitError::InvalidValue`].
    #[error("the query x is not a finite number")]
    InvalidQuery,

    #[error("the fit overflowed the floating-point range")]
    NumericOverflow,
}

impl FitError {
    /// Machine-readable error kind, as exposed by the API.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyDataset => "empty_dataset",
            Self::DegenerateInput { .. } => "degenerate_input",
            Self::InvalidValue { .. } | Self::InvalidQuery => "invalid_value",
            Self::NumericOverflow => "numeric_overflow",
        }
    }
}

/// Fitted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,

    /// Number of points the line has been fitted on.
    pub n_points: usize,
}

impl Line {
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
    pub predicted_value: f64,
    pub n_points: usize,
}

#[derive(Default)]
struct Sums {
    n: usize,
    u: f64,
    y: f64,
    uy: f64,
    u2: f64,
    first_x: f64,
    all_x_equal: bool,
}

impl Sums {
    fn collect(points: &[DataPoint]) -> Result<Self, FitError> {
        let mut sums = Self {
            first_x: points.first().ok_or(FitError::EmptyDataset)?.x,
            all_x_equal: true,
            ..Default::default()
        };
        for (index, point) in points.iter().enumerate() {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(FitError::InvalidValue { index });
            }
            sums.push(point);
        }
        Ok(sums)
    }

    fn push(&mut self, point: &DataPoint) {
        let u = point.x - self.first_x;
        self.n += 1;
        self.u += u;
        self.y += point.y;
        self.uy += u * point.y;
        self.u2 += u * u;
        self.all_x_equal &= u == 0.0;
    }

    fn is_finite(&self) -> bool {
        self.u.is_finite() && self.y.is_finite() && self.uy.is_finite() && self.u2.is_finite()
    }
}

/// Fits the least-squares line through the points.
pub fn fit(points: &[DataPoint]) -> Result<Line, FitError> {
    let sums = Sums::collect(points)?;
    if sums.all_x_equal {
        return Err(FitError::DegenerateInput { n_points: sums.n });
    }
    if !sums.is_finite() {
        return Err(FitError::NumericOverflow);
    }

    let n = sums.n as f64;
    let denominator = n * sums.u2 - sums.u * sums.u;
    if !denominator.is_finite() {
        return Err(FitError::NumericOverflow);
    }
    // Non-negative by Cauchy–Schwarz, anything else is rounding residue.
    if denominator <= 0.0 {
        return Err(FitError::DegenerateInput { n_points: sums.n });
    }

    let slope = (n * sums.uy - sums.u * sums.y) / denominator;
    let intercept = (sums.y - slope * sums.u) / n - slope * sums.first_x;
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(FitError::NumericOverflow);
    }
    Ok(Line { slope, intercept, n_points: sums.n })
}

/// Fits the line and evaluates it at `query_x`.
pub fn fit_and_predict(points: &[DataPoint], query_x: f64) -> Result<FitResult, FitError> {
    if !query_x.is_finite() {
        return Err(FitError::InvalidQuery);
    }
    let line = fit(points)?;
    let predicted_value = line.predict(query_x);
    if !predicted_value.is_finite() {
        return Err(FitError::NumericOverflow);
    }
    Ok(FitResult {
        slope: line.slope,
        intercept: line.intercept,
        predicted_value,
        n_points: line.n_points,
    })
}
