//! Frequency response of an FIR filter, matching `scipy.signal.freqz(taps, worN=n)`.
//!
//! `H(e^{jω}) = Σ_k taps[k] · e^{−jωk}` evaluated at `ω_k = π·k / n`,
//! `k = 0 … n−1` (upper half circle, Nyquist excluded). When the filter fits
//! in `2n` points the evaluation is one zero-padded FFT; longer filters are
//! summed directly.
use log::debug;
use rustfft::num_complex::Complex64;

use crate::dft::fft_inplace;
use crate::error::{FilterError, Result};

/// Complex gain of a filter on a grid of normalised angular frequencies.
#[derive(Debug, Clone)]
pub struct FrequencyResponse {
    /// Angular frequencies in rad/sample, `[0, π)`.
    pub w: Vec<f64>,
    /// Complex gain at each `w`.
    pub h: Vec<Complex64>,
}

impl FrequencyResponse {
    /// Grid frequencies in Hz for sampling rate `fs` (`0.5 · fs · ω / π`).
    pub fn frequencies_hz(&self, fs: f64) -> Vec<f64> {
        self.w
            .iter()
            .map(|&w| 0.5 * fs * w / std::f64::consts::PI)
            .collect()
    }

    /// `|H|`.
    pub fn magnitude(&self) -> Vec<f64> {
        self.h.iter().map(|c| c.norm()).collect()
    }

    /// `20·log10 |H|`; exact zeros map to `-inf`.
    pub fn magnitude_db(&self) -> Vec<f64> {
        self.h.iter().map(|c| 20.0 * c.norm().log10()).collect()
    }

    /// Linear gain at the grid point closest to `freq_hz`.
    pub fn gain_at(&self, freq_hz: f64, fs: f64) -> Option<f64> {
        let target = freq_hz / (0.5 * fs) * std::f64::consts::PI;
        self.w
            .iter()
            .zip(self.h.iter())
            .min_by(|(a, _), (b, _)| (**a - target).abs().total_cmp(&(**b - target).abs()))
            .map(|(_, h)| h.norm())
    }
}

/// Evaluate the response of `taps` at `n_points` frequencies.
///
/// # Errors
///
/// [`FilterError::InvalidArgument`] if `taps` is empty or `n_points == 0`.
pub fn freqz(taps: &[f64], n_points: usize) -> Result<FrequencyResponse> {
    if taps.is_empty() {
        return Err(FilterError::invalid("filter taps must not be empty"));
    }
    if n_points == 0 {
        return Err(FilterError::invalid("n_points must be >= 1"));
    }

    let w: Vec<f64> = (0..n_points)
        .map(|k| std::f64::consts::PI * k as f64 / n_points as f64)
        .collect();

    let n_fft = 2 * n_points;
    let h = if taps.len() <= n_fft {
        debug!("freqz: taps={} via {n_fft}-point FFT", taps.len());
        let mut buf: Vec<Complex64> = taps
            .iter()
            .map(|&v| Complex64::new(v, 0.0))
            .chain(std::iter::repeat(Complex64::default()))
            .take(n_fft)
            .collect();
        fft_inplace(&mut buf);
        buf.truncate(n_points);
        buf
    } else {
        debug!("freqz: taps={} longer than {n_fft}, direct sum", taps.len());
        w.iter()
            .map(|&wk| {
                taps.iter()
                    .enumerate()
                    .map(|(k, &b)| Complex64::from_polar(b, -wk * k as f64))
                    .sum::<Complex64>()
            })
            .collect()
    };

    Ok(FrequencyResponse { w, h })
}
