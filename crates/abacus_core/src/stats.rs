use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Arithmetic mean. Empty input has no mean.
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        bail!("Mean requires at least one observation.");
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Median: the middle of the ascending ordering, or the average of the two
/// middle elements for even counts.
pub fn median(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        bail!("Median requires at least one observation.");
    }

    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let n = sorted.len();
    if n % 2 == 0 {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Ok(sorted[n / 2])
    }
}

/// Every value attaining the maximal frequency, in first-encountered order.
///
/// Multimodal data keeps all of its modes; they are never collapsed to one.
/// Empty data has none.
pub fn mode(data: &[f64]) -> Vec<f64> {
    // Insertion-ordered frequency table; ties must come out in scan order.
    let mut frequency: Vec<(f64, usize)> = Vec::new();
    for &value in data {
        match frequency.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => frequency.push((value, 1)),
        }
    }

    let max_count = match frequency.iter().map(|&(_, count)| count).max() {
        Some(count) => count,
        None => return Vec::new(),
    };

    frequency
        .into_iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(value, _)| value)
        .collect()
}

/// Mean squared deviation from the mean, with divisor n − 1 for a sample
/// (unbiased estimator) or n for a population.
pub fn variance(data: &[f64], sample: bool) -> Result<f64> {
    let center = mean(data)?;
    if sample && data.len() == 1 {
        bail!("Sample variance requires at least two observations.");
    }

    let sum_sq: f64 = data.iter().map(|x| (x - center).powi(2)).sum();
    let divisor = if sample { data.len() - 1 } else { data.len() };
    Ok(sum_sq / divisor as f64)
}

/// Standard deviation, the square root of [`variance`].
pub fn std_dev(data: &[f64], sample: bool) -> Result<f64> {
    Ok(variance(data, sample)?.sqrt())
}

/// Standard score (value − mean) / std_dev.
pub fn z_score(value: f64, mean: f64, std_dev: f64) -> Result<f64> {
    if std_dev == 0.0 {
        bail!("Z-score is undefined for zero standard deviation.");
    }
    Ok((value - mean) / std_dev)
}

/// Pearson correlation coefficient between paired samples.
///
/// A constant series makes the denominator vanish; that is reported as 0
/// (no linear association), not as an error.
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        bail!(
            "Paired samples differ in length: {} vs {}.",
            x.len(),
            y.len()
        );
    }
    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let mut numerator = 0.0;
    let mut sum_x_sq = 0.0;
    let mut sum_y_sq = 0.0;
    for i in 0..x.len() {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        numerator += dx * dy;
        sum_x_sq += dx * dx;
        sum_y_sq += dy * dy;
    }

    let denominator = (sum_x_sq * sum_y_sq).sqrt();
    if denominator == 0.0 {
        return Ok(0.0);
    }
    Ok(numerator / denominator)
}

/// An ordinary-least-squares line y = slope·x + intercept.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
}

impl Regression {
    /// Fitted value at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fits a least-squares line through the paired samples.
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<Regression> {
    if x.len() != y.len() {
        bail!(
            "Paired samples differ in length: {} vs {}.",
            x.len(),
            y.len()
        );
    }
    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for i in 0..x.len() {
        let dx = x[i] - mean_x;
        numerator += dx * (y[i] - mean_y);
        denominator += dx * dx;
    }
    if denominator == 0.0 {
        bail!("Regression slope is undefined when every x value is identical.");
    }

    let slope = numerator / denominator;
    Ok(Regression {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

/// n! by iterative accumulation.
///
/// The recursive definition would tie stack depth to n; the loop keeps it
/// constant. Products past what u64 holds are an explicit error, not a wrap.
pub fn factorial(n: i64) -> Result<u64> {
    if n < 0 {
        bail!("Factorial is undefined for negative numbers.");
    }

    let mut product: u64 = 1;
    for k in 2..=n as u64 {
        product = match product.checked_mul(k) {
            Some(next) => next,
            None => bail!("Factorial of {} overflows u64.", n),
        };
    }
    Ok(product)
}

/// C(n, r) = n! / (r!(n − r)!): ways to choose r of n items.
/// Out-of-range r counts zero ways and is not an error.
pub fn combination(n: i64, r: i64) -> Result<u64> {
    if r > n || r < 0 {
        return Ok(0);
    }
    Ok(factorial(n)? / (factorial(r)? * factorial(n - r)?))
}

/// P(n, r) = n! / (n − r)!: ways to arrange r of n items.
/// Out-of-range r counts zero ways and is not an error.
pub fn permutation(n: i64, r: i64) -> Result<u64> {
    if r > n || r < 0 {
        return Ok(0);
    }
    Ok(factorial(n)? / factorial(n - r)?)
}
