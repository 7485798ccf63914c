//! Test-signal synthesis and one-sided magnitude spectra.
//!
//! Used by the `filter_demo` binary, the benches and the integration tests;
//! the filters themselves never call into this module.
use crate::dft::{fft, rfftfreq};
use crate::error::{check_sfreq, FilterError, Result};

/// Sample instants `0, 1/fs, 2/fs, …` strictly below `duration` seconds.
///
/// Same length as `numpy.arange(0, duration, 1 / fs)`.
pub fn sample_times(fs: f64, duration: f64) -> Result<Vec<f64>> {
    check_sfreq(fs)?;
    if !(duration.is_finite() && duration >= 0.0) {
        return Err(FilterError::invalid(format!("duration must be >= 0, got {duration}")));
    }
    // Guard against 1.0 * 500.0 landing a hair above an integer.
    let n = (duration * fs - 1e-9).ceil().max(0.0) as usize;
    Ok((0..n).map(|i| i as f64 / fs).collect())
}

/// `Σ amp · sin(2π · freq · t)` over `tones = [(freq_hz, amp), …]`.
pub fn sum_of_sines(t: &[f64], tones: &[(f64, f64)]) -> Vec<f64> {
    t.iter()
        .map(|&ti| {
            tones
                .iter()
                .map(|&(f, a)| a * (2.0 * std::f64::consts::PI * f * ti).sin())
                .sum::<f64>()
        })
        .collect()
}

/// One-sided amplitude spectrum of `x` sampled at `fs` Hz.
///
/// Returns `(freqs, magnitude)` with `N/2 + 1` bins. Non-DC, non-Nyquist bins
/// are doubled so that a unit-amplitude sine on a bin centre reads `1.0`.
pub fn magnitude_spectrum(x: &[f64], fs: f64) -> Result<(Vec<f64>, Vec<f64>)> {
    check_sfreq(fs)?;
    if x.is_empty() {
        return Err(FilterError::invalid("signal must not be empty"));
    }
    let n = x.len();
    let spectrum = fft(x);
    let freqs = rfftfreq(n, 1.0 / fs);

    let mag = spectrum[..freqs.len()]
        .iter()
        .enumerate()
        .map(|(k, c)| {
            let m = c.norm() / n as f64;
            let nyquist_bin = n % 2 == 0 && k == n / 2;
            if k == 0 || nyquist_bin { m } else { 2.0 * m }
        })
        .collect();
    Ok((freqs, mag))
}

/// Convert linear magnitudes to dB (`20·log10`).
pub fn to_db(mag: &[f64]) -> Vec<f64> {
    mag.iter().map(|&m| 20.0 * m.log10()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn one_second_at_500hz_has_500_samples() {
        let t = sample_times(500.0, 1.0).unwrap();
        assert_eq!(t.len(), 500);
        assert_eq!(t[0], 0.0);
        assert_abs_diff_eq!(t[499], 0.998, epsilon = 1e-12);
    }

    #[test]
    fn fractional_duration_rounds_up_like_arange() {
        // numpy.arange(0, 0.0105, 0.001) has 11 elements
        assert_eq!(sample_times(1000.0, 0.0105).unwrap().len(), 11);
        assert!(sample_times(1000.0, 0.0).unwrap().is_empty());
        assert!(sample_times(1000.0, -1.0).is_err());
    }

    #[test]
    fn tone_amplitude_recovered() {
        let fs = 500.0;
        let t = sample_times(fs, 1.0).unwrap();
        let x = sum_of_sines(&t, &[(50.0, 1.0), (120.0, 0.5)]);
        let (f, m) = magnitude_spectrum(&x, fs).unwrap();
        assert_eq!(f.len(), 251);
        assert_abs_diff_eq!(m[50], 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(m[120], 0.5, epsilon = 1e-9);
        assert!(m[80] < 1e-9);
    }

    #[test]
    fn db_of_unity_is_zero() {
        let db = to_db(&[1.0, 10.0, 0.5]);
        assert_abs_diff_eq!(db[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(db[1], 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(db[2], -6.0206, epsilon = 1e-4);
    }
}
