use serde::Serialize;

/// Why a pair of series has no meaningful Pearson coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InvalidCorrelation {
    Empty,
    LengthMismatch { left: usize, right: usize },
    /// At least one series is constant, so the denominator is zero.
    ZeroVariance,
    /// Non-finite input leaked into the sums.
    NonFinite,
}

/// Pearson coefficient that keeps "uncorrelated" apart from "incomparable".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Correlation {
    Value(f64),
    Invalid(InvalidCorrelation),
}

impl Correlation {
    /// Collapses invalid input to `0`, the dashboard's display convention.
    pub fn value_or_zero(self) -> f64 {
        match self {
            Correlation::Value(value) => value,
            Correlation::Invalid(_) => 0.0,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Correlation::Value(_))
    }
}

fn average(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1])
}

/// Pearson product-moment correlation of two index-aligned series.
///
/// Sums of squares are left unnormalised; N cancels in the ratio.
pub fn classify_correlation(left: &[f64], right: &[f64]) -> Correlation {
    if left.len() != right.len() {
        return Correlation::Invalid(InvalidCorrelation::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    if left.is_empty() {
        return Correlation::Invalid(InvalidCorrelation::Empty);
    }
    // Rounding in the mean can leave tiny residuals for constant input.
    if is_constant(left) || is_constant(right) {
        return Correlation::Invalid(InvalidCorrelation::ZeroVariance);
    }

    let mean_left = average(left);
    let mean_right = average(right);

    let mut variance_left = 0.0;
    let mut variance_right = 0.0;
    let mut covariance = 0.0;
    for (x, y) in left.iter().zip(right) {
        let dx = x - mean_left;
        let dy = y - mean_right;
        variance_left += dx * dx;
        variance_right += dy * dy;
        covariance += dx * dy;
    }

    let denominator = (variance_left * variance_right).sqrt();
    if denominator == 0.0 {
        return Correlation::Invalid(InvalidCorrelation::ZeroVariance);
    }

    let correlation = covariance / denominator;
    if !correlation.is_finite() {
        return Correlation::Invalid(InvalidCorrelation::NonFinite);
    }
    Correlation::Value(correlation.clamp(-1.0, 1.0))
}

/// Pearson correlation with the zero-on-invalid convention: mismatched lengths,
/// empty input and constant series all yield exactly `0`.
pub fn compute_correlation(left: &[f64], right: &[f64]) -> f64 {
    classify_correlation(left, right).value_or_zero()
}
