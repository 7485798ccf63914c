//! Causal FIR convolution, matching `scipy.signal.lfilter(taps, 1.0, x)`.
//!
//!   y[n] = Σ_{k=0}^{M-1} taps[k] · x[n − k],   x[j] = 0 for j < 0
//!
//! The output has the same length as the input (no tail). The filter delay of
//! `(M − 1) / 2` samples is left in place; use [`trim_group_delay`] to drop
//! it when phase-aligned output is needed.
//!
//! Two evaluators give the same result:
//!   • [`lfilter`]              direct form, O(N·M)
//!   • [`lfilter_overlap_add`]  FFT overlap-add, cheaper for long filters
use log::debug;
use rustfft::{num_complex::Complex64, FftPlanner};

use crate::dft::fft;
use crate::error::{FilterError, Result};
use crate::filter::design::{design_lowpass, group_delay};

/// Filter `x` with `taps` using direct-form causal convolution.
///
/// An empty `x` yields an empty output.
///
/// # Errors
///
/// [`FilterError::InvalidArgument`] if `taps` is empty.
pub fn lfilter(taps: &[f64], x: &[f64]) -> Result<Vec<f64>> {
    check_taps(taps)?;
    debug!("lfilter: n={} taps={}", x.len(), taps.len());

    let y: Vec<f64> = (0..x.len())
        .map(|n| {
            taps.iter()
                .take(n + 1)
                .enumerate()
                .map(|(k, &b)| b * x[n - k])
                .sum::<f64>()
        })
        .collect();
    Ok(y)
}

/// Design a Hamming-windowed lowpass and apply it causally.
///
/// Returns `(filtered, taps)`.
pub fn fir_lowpass(x: &[f64], fs: f64, cutoff: f64, numtaps: usize) -> Result<(Vec<f64>, Vec<f64>)> {
    let taps = design_lowpass(fs, cutoff, numtaps)?;
    let filtered = lfilter(&taps, x)?;
    Ok((filtered, taps))
}

/// Drop the leading `⌊(numtaps − 1) / 2⌋` samples of a causally filtered
/// signal so that it lines up with the input.
///
/// The result is shorter than `y`; an even `numtaps` leaves a residual
/// half-sample offset.
pub fn trim_group_delay(y: &[f64], numtaps: usize) -> &[f64] {
    let shift = (group_delay(numtaps).floor() as usize).min(y.len());
    &y[shift..]
}

/// Filter `x` with `taps` using FFT overlap-add.
///
/// Same output as [`lfilter`] up to rounding.
pub fn lfilter_overlap_add(taps: &[f64], x: &[f64]) -> Result<Vec<f64>> {
    check_taps(taps)?;
    let n_x = x.len();
    let n_h = taps.len();
    if n_x == 0 {
        return Ok(vec![]);
    }

    let n_fft = choose_fft_len(n_h, n_x);
    let h_fft = taps_spectrum(taps, n_fft);
    let n_seg = n_fft - n_h + 1;
    debug!("lfilter_overlap_add: n={n_x} taps={n_h} n_fft={n_fft}");

    let mut planner: FftPlanner<f64> = FftPlanner::new();
    let fft_fwd = planner.plan_fft_forward(n_fft);
    let fft_inv = planner.plan_fft_inverse(n_fft);
    let inv_scale = 1.0 / n_fft as f64;

    let mut y = vec![0.0_f64; n_x];
    let mut buf = vec![Complex64::default(); n_fft];

    for start in (0..n_x).step_by(n_seg) {
        let stop = (start + n_seg).min(n_x);

        buf.iter_mut().for_each(|b| *b = Complex64::default());
        for (b, &v) in buf.iter_mut().zip(&x[start..stop]) {
            b.re = v;
        }

        fft_fwd.process(&mut buf);
        for (b, &hf) in buf.iter_mut().zip(h_fft.iter()) {
            *b *= hf;
        }
        fft_inv.process(&mut buf);

        // Causal: the block's contribution starts where its input started.
        let end = (start + n_fft).min(n_x);
        for (o, b) in y[start..end].iter_mut().zip(buf.iter()) {
            *o += b.re * inv_scale;
        }
    }

    Ok(y)
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn check_taps(taps: &[f64]) -> Result<()> {
    if taps.is_empty() {
        return Err(FilterError::invalid("filter taps must not be empty"));
    }
    Ok(())
}

/// Power-of-two block length for overlap-add, from `(2·M − 1)` rounded up to
/// `(N + M)` rounded up, picked by the estimated cost
///   `blocks · L · (log2 L + 1) + 4e-5 · L · N`
/// where `blocks = ⌈N / (L − M + 1)⌉`. Ties go to the shorter block.
fn choose_fft_len(n_h: usize, n_x: usize) -> usize {
    let shortest = (2 * n_h - 1).next_power_of_two();
    let longest = (n_x + n_h).next_power_of_two().max(shortest);
    let cost = |len: usize| {
        let blocks = n_x.div_ceil(len - n_h + 1) as f64;
        blocks * len as f64 * (len.trailing_zeros() as f64 + 1.0) + 4e-5 * len as f64 * n_x as f64
    };
    std::iter::successors(Some(shortest), |&len| (len < longest).then_some(2 * len))
        .min_by(|&a, &b| cost(a).total_cmp(&cost(b)))
        .unwrap_or(shortest)
}

/// Spectrum of the taps on the block grid.
fn taps_spectrum(taps: &[f64], n_fft: usize) -> Vec<Complex64> {
    let mut padded = taps.to_vec();
    padded.resize(n_fft, 0.0);
    fft(&padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_hand_computed_convolution() {
        let taps = [0.2, 0.6, 0.2];
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = lfilter(&taps, &x).unwrap();
        let expected = [0.2, 1.0, 2.0, 3.0];
        for (a, b) in y.iter().zip(expected.iter()) {
            approx::assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn taps_longer_than_signal() {
        let taps = [1.0, 1.0, 1.0, 1.0, 1.0];
        let y = lfilter(&taps, &[1.0, 2.0]).unwrap();
        assert_eq!(y, vec![1.0, 3.0]);
    }

    #[test]
    fn empty_signal_empty_output() {
        assert!(lfilter(&[1.0], &[]).unwrap().is_empty());
        assert!(lfilter_overlap_add(&[1.0], &[]).unwrap().is_empty());
    }

    #[test]
    fn empty_taps_rejected() {
        assert!(lfilter(&[], &[1.0, 2.0]).is_err());
        assert!(lfilter_overlap_add(&[], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn overlap_add_matches_direct() {
        let taps = design_lowpass(500.0, 80.0, 101).unwrap();
        let x: Vec<f64> = (0..1500).map(|i| (i as f64 * 0.37).sin() + 0.3 * (i as f64 * 1.9).cos()).collect();
        let direct = lfilter(&taps, &x).unwrap();
        let ola = lfilter_overlap_add(&taps, &x).unwrap();
        assert_eq!(direct.len(), ola.len());
        for (a, b) in direct.iter().zip(ola.iter()) {
            approx::assert_abs_diff_eq!(*a, *b, epsilon = 1e-10);
        }
    }

    #[test]
    fn trim_removes_integer_delay() {
        let y: Vec<f64> = (0..10).map(|i| i as f64).collect();
        assert_eq!(trim_group_delay(&y, 5), &y[2..]);
        assert_eq!(trim_group_delay(&y, 6), &y[2..]);
        assert!(trim_group_delay(&y, 101).is_empty());
    }

    #[test]
    fn fft_len_is_power_of_two_and_long_enough() {
        for (n_h, n_x) in [(1, 1), (101, 500), (1691, 3840), (5, 100_000)] {
            let n = choose_fft_len(n_h, n_x);
            assert!(n.is_power_of_two());
            assert!(n >= 2 * n_h - 1);
        }
    }

    #[test]
    fn overlap_add_handles_short_and_single_tap_inputs() {
        assert_eq!(lfilter_overlap_add(&[2.0], &[1.0, -1.0, 3.0]).unwrap().len(), 3);
        let taps = [0.25, 0.5, 0.25, 0.1, 0.05];
        let x = [1.0, 2.0];
        let direct = lfilter(&taps, &x).unwrap();
        let ola = lfilter_overlap_add(&taps, &x).unwrap();
        for (a, b) in direct.iter().zip(ola.iter()) {
            approx::assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }
}
