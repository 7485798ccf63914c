mod common;
use common::dft_direct;
use sigfilt::{bin_frequencies, fft, fftfreq, ifft};

#[test]
fn fft_matches_direct_dft() {
    // Prime length exercises RustFFT's non-radix-2 path.
    for n in [1_usize, 2, 7, 37, 64, 500] {
        let x: Vec<f64> = (0..n).map(|i| ((i * 7919) % 101) as f64 / 50.0 - 1.0).collect();
        let fast = fft(&x);
        let slow = dft_direct(&x);
        for (k, (a, b)) in fast.iter().zip(slow.iter()).enumerate() {
            assert!((a - b).norm() < 1e-9, "n={n} k={k}: fft={a} direct={b}");
        }
    }
}

#[test]
fn spectrum_of_real_signal_is_hermitian() {
    let x: Vec<f64> = (0..128).map(|i| (i as f64 * 0.21).sin() + 0.3 * (i as f64 * 1.3).cos()).collect();
    let s = fft(&x);
    let n = s.len();
    approx::assert_abs_diff_eq!(s[0].im, 0.0, epsilon = 1e-9);
    for k in 1..n {
        let d = (s[n - k] - s[k].conj()).norm();
        assert!(d < 1e-9, "bin {k} not conjugate-symmetric: {d:.2e}");
    }
}

#[test]
fn inverse_recovers_input() {
    let x: Vec<f64> = (0..501).map(|i| (i as f64).sqrt().sin()).collect();
    let back = ifft(&fft(&x));
    for (a, b) in x.iter().zip(back.iter()) {
        approx::assert_abs_diff_eq!(*a, b.re, epsilon = 1e-10);
        approx::assert_abs_diff_eq!(b.im, 0.0, epsilon = 1e-10);
    }
}

#[test]
fn frequency_axis_in_hz() {
    // 500 samples at 500 Hz: 1 Hz bins, wrap after index 249.
    let f = fftfreq(500, 1.0 / 500.0);
    assert_eq!(f.len(), 500);
    approx::assert_abs_diff_eq!(f[0], 0.0);
    approx::assert_abs_diff_eq!(f[50], 50.0, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(f[249], 249.0, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(f[250], -250.0, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(f[499], -1.0, epsilon = 1e-9);
}

#[test]
fn bin_frequencies_match_fftfreq_except_at_nyquist() {
    let hz = bin_frequencies(500, 500.0);
    let np = fftfreq(500, 1.0 / 500.0);
    for (i, (a, b)) in hz.iter().zip(np.iter()).enumerate() {
        if i == 250 {
            assert_eq!(*a, 250.0);
        } else {
            approx::assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
        }
    }
}
