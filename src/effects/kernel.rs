use crate::foundation::error::{CanvasError, CanvasResult};

/// Odd-length 1D convolution weights, centred on the middle tap.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    weights: Vec<f32>,
}

impl Kernel {
    /// Build a kernel from raw weights.
    ///
    /// The length must be odd so the kernel has a centre tap; weights are used as given and
    /// need not sum to one (convolution renormalizes by the weights that land in the source).
    pub fn from_weights(weights: Vec<f32>) -> CanvasResult<Self> {
        if weights.len() % 2 == 0 {
            return Err(CanvasError::validation(format!(
                "kernel length must be odd, got {}",
                weights.len()
            )));
        }
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(CanvasError::validation("kernel weights must be finite"));
        }
        Ok(Self { weights })
    }

    /// Weights from the leftmost (or topmost) tap to the rightmost.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Taps on each side of the centre.
    pub fn radius(&self) -> i32 {
        (self.weights.len() / 2) as i32
    }
}

/// Round a requested size up to the nearest odd tap count, at least one.
fn odd_size(size: usize) -> usize {
    size.max(1) | 1
}

/// Uniform kernel with every weight `1/size`.
///
/// Even sizes grow by one so the kernel stays centred.
pub fn box_kernel(size: usize) -> Kernel {
    let size = odd_size(size);
    Kernel {
        weights: vec![1.0 / size as f32; size],
    }
}

/// Gaussian density sampled at each integer offset from the centre, normalized to sum one.
///
/// `sigma` defaults to `(size - 1) / 2`. A non-positive sigma degenerates to a centre-only
/// kernel; a non-finite sigma is rejected.
pub fn gaussian_kernel(size: usize, sigma: Option<f32>) -> CanvasResult<Kernel> {
    let size = odd_size(size);
    let sigma = sigma.unwrap_or((size - 1) as f32 / 2.0);
    if !sigma.is_finite() {
        return Err(CanvasError::validation("gaussian sigma must be finite"));
    }

    let radius = (size / 2) as i32;
    if sigma <= 0.0 {
        let mut weights = vec![0.0; size];
        weights[size / 2] = 1.0;
        return Ok(Kernel { weights });
    }

    let denom = 2.0 * f64::from(sigma) * f64::from(sigma);
    let raw: Vec<f64> = (-radius..=radius)
        .map(|i| {
            let x = f64::from(i);
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = raw.iter().sum();
    Ok(Kernel {
        weights: raw.into_iter().map(|w| (w / sum) as f32).collect(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/effects/kernel.rs"]
mod tests;
