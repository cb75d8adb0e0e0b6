use crate::error::ScalarustError;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// Distribution used to draw initial parameter values.
///
/// Sampling always goes through a caller-provided RNG, so a seeded
/// `StdRng` reproduces the same network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform over `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std_dev: f64 },
}

impl Default for Init {
    /// `Uniform` over `[-1, 1)`.
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Draws `n` values.
    ///
    /// # Errors
    /// `InvalidInit` if the distribution parameters are not usable (non-finite,
    /// empty uniform range, negative standard deviation).
    pub fn sample_n<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, ScalarustError> {
        match *self {
            Init::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() || low >= high {
                    return Err(ScalarustError::InvalidInit(format!(
                        "uniform range [{}, {}) is empty or not finite",
                        low, high
                    )));
                }
                let dist = Uniform::new(low, high);
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
            Init::Normal { mean, std_dev } => {
                if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
                    return Err(ScalarustError::InvalidInit(format!(
                        "normal parameters must be finite with std_dev >= 0 (mean={}, std_dev={})",
                        mean, std_dev
                    )));
                }
                let dist = Normal::new(mean, std_dev)
                    .map_err(|e| ScalarustError::InvalidInit(e.to_string()))?;
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
