/// Shared helpers for the integration tests.
use sigfilt::synth::{sample_times, sum_of_sines};
use sigfilt::Complex64;

#[allow(unused)]
pub const FS: f64 = 500.0;

#[allow(unused)]
/// The reference scenario: 1 s of `sin(2π·50t) + 0.5·sin(2π·120t)` at 500 Hz.
pub fn two_tone() -> Vec<f64> {
    let t = sample_times(FS, 1.0).unwrap();
    sum_of_sines(&t, &[(50.0, 1.0), (120.0, 0.5)])
}

#[allow(unused)]
/// A single tone sampled at `FS` for `n` samples.
pub fn tone(freq: f64, amp: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| amp * (2.0 * std::f64::consts::PI * freq * i as f64 / FS).sin())
        .collect()
}

#[allow(unused)]
/// O(N²) DFT, used as ground truth for the FFT-backed transform.
pub fn dft_direct(x: &[f64]) -> Vec<Complex64> {
    let n = x.len();
    (0..n)
        .map(|k| {
            x.iter()
                .enumerate()
                .map(|(j, &v)| {
                    let phase = -2.0 * std::f64::consts::PI * (k * j % n) as f64 / n as f64;
                    Complex64::from_polar(v, phase)
                })
                .sum::<Complex64>()
        })
        .collect()
}

#[allow(unused)]
/// Maximum absolute difference between two slices.
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).fold(0.0_f64, f64::max)
}

#[allow(unused)]
/// Root-mean-square of a slice.
pub fn rms(a: &[f64]) -> f64 {
    (a.iter().map(|v| v * v).sum::<f64>() / a.len() as f64).sqrt()
}

#[allow(unused)]
/// Mean of a slice.
pub fn mean(a: &[f64]) -> f64 {
    a.iter().sum::<f64>() / a.len() as f64
}
