//! Discrete Fourier transform helpers backed by RustFFT.
//!
//! Conventions match `numpy.fft`:
//!   • forward transform is unscaled
//!   • inverse transform is scaled by `1/N`
//!   • [`fftfreq`] lays out bin centres as `0, 1, …, ⌈N/2⌉-1, -⌊N/2⌋, …, -1`
//!     times `1/(N·d)`
//!   • [`bin_frequencies`] is the Hz axis used for masking: `k·fs/N` for
//!     `k ≤ N/2`, `(k-N)·fs/N` above, so an even-N Nyquist bin is `+fs/2`
//!
//! Every call builds its own planner and scratch buffer; nothing is cached
//! between calls.
use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;

/// Forward DFT of a real signal. Returns `N` complex bins, DC at index 0.
pub fn fft(x: &[f64]) -> Vec<Complex64> {
    let mut buf: Vec<Complex64> = x.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    fft_inplace(&mut buf);
    buf
}

/// Forward DFT of a complex buffer, in place.
pub fn fft_inplace(buf: &mut [Complex64]) {
    if buf.is_empty() {
        return;
    }
    let mut planner: FftPlanner<f64> = FftPlanner::new();
    planner.plan_fft_forward(buf.len()).process(buf);
}

/// Inverse DFT, scaled by `1/N` so that `ifft(fft(x)) == x`.
pub fn ifft(spectrum: &[Complex64]) -> Vec<Complex64> {
    let n = spectrum.len();
    if n == 0 {
        return vec![];
    }
    let mut buf = spectrum.to_vec();
    let mut planner: FftPlanner<f64> = FftPlanner::new();
    planner.plan_fft_inverse(n).process(&mut buf);

    let inv_scale = 1.0 / n as f64;
    buf.iter_mut().for_each(|v| *v *= inv_scale);
    buf
}

/// Bin-centre frequencies for an `n`-point DFT with sample spacing `d`.
///
/// With `d = 1/fs` the result is in Hz. Bins past the positive half wrap to
/// negative frequencies.
pub fn fftfreq(n: usize, d: f64) -> Vec<f64> {
    let val = 1.0 / (n as f64 * d);
    let n_pos = n.div_ceil(2);
    (0..n)
        .map(|i| {
            if i < n_pos {
                i as f64 * val
            } else {
                (i as f64 - n as f64) * val
            }
        })
        .collect()
}

/// Bin-centre frequencies in Hz for an `n`-point DFT sampled at `fs`.
///
/// Bin `k` is `k·fs/n` for `k ≤ n/2` and `(k-n)·fs/n` otherwise. Each value is
/// formed as one product and one division, so a cutoff written as
/// `k * fs / n` compares equal to bin `k`. Unlike [`fftfreq`], the even-`n`
/// Nyquist bin is reported as `+fs/2`.
pub fn bin_frequencies(n: usize, fs: f64) -> Vec<f64> {
    let len = n as f64;
    (0..n)
        .map(|k| {
            if k <= n / 2 {
                k as f64 * fs / len
            } else {
                (k as f64 - len) * fs / len
            }
        })
        .collect()
}

/// Non-negative bin-centre frequencies for a one-sided spectrum
/// (`n/2 + 1` values).
pub fn rfftfreq(n: usize, d: f64) -> Vec<f64> {
    let val = 1.0 / (n as f64 * d);
    (0..n / 2 + 1).map(|i| i as f64 * val).collect()
}
