//! Running first and second moments and the statistics derived from them
//!
//! The moments are maintained with the single-pass sum / sum-of-squares
//! scheme: every observation adds `x` and `x²` on entry and subtracts them on
//! removal. Variance is then `E[x²] - E[x]²`, which loses precision when the
//! mean is large relative to the spread.

/// Minimum number of observations for population statistics
pub const MIN_COUNT_POPULATION: usize = 1;

/// Minimum number of observations for sample statistics
pub const MIN_COUNT_SAMPLE: usize = 2;

/// Running sum and sum of squares of the observations in scope
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningMoments {
    count: usize,
    sum: f64,
    sum_squares: f64,
}

impl RunningMoments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for an observation entering scope
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.sum_squares += value * value;
    }

    /// Account for an observation leaving scope.
    ///
    /// `value` should be one previously passed to `push`. No-op when empty.
    #[inline]
    pub fn pop(&mut self, value: f64) {
        if self.count == 0 {
            return;
        }
        self.count -= 1;
        self.sum -= value;
        self.sum_squares -= value * value;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn sum_squares(&self) -> f64 {
        self.sum_squares
    }

    /// Arithmetic mean, `None` when no observations are in scope
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Population variance: `Σx²/n − mean²`. NaN when `n < 1`.
pub fn population_variance(moments: &RunningMoments) -> f64 {
    if moments.count < MIN_COUNT_POPULATION {
        return f64::NAN;
    }
    let n = moments.count as f64;
    let mean = moments.sum / n;
    moments.sum_squares / n - mean * mean
}

/// Sample variance with Bessel's correction. NaN when `n < 2`.
pub fn sample_variance(moments: &RunningMoments) -> f64 {
    if moments.count < MIN_COUNT_SAMPLE {
        return f64::NAN;
    }
    let n = moments.count as f64;
    population_variance(moments) * (n / (n - 1.0))
}

pub fn population_stddev(moments: &RunningMoments) -> f64 {
    population_variance(moments).sqrt()
}

pub fn sample_stddev(moments: &RunningMoments) -> f64 {
    sample_variance(moments).sqrt()
}

/// Map NaN and infinities to "no value"
#[inline]
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
