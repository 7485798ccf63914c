//! Windowed-sinc lowpass FIR design, matching `scipy.signal.firwin`.
//!
//! For `numtaps` taps, sampling rate `fs` and cutoff `cutoff` Hz:
//!   • normalised cutoff   fc = cutoff / (fs / 2), must lie in (0, 1)
//!   • ideal response      h[i] = fc · sinc(fc · (i − α)),  α = (numtaps − 1) / 2
//!   • taper               h[i] *= w[i]   (Hamming by default)
//!   • scaling             Σ h = 1        (unity DC gain)
//!
//! Odd `numtaps` gives a type-I linear-phase filter with an integer group
//! delay of `(numtaps − 1) / 2` samples. Even `numtaps` is accepted; the
//! filter is then symmetric about a half-sample point and the delay is
//! `(numtaps − 1) / 2` = k + ½ samples.
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{check_sfreq, FilterError, Result};

/// Tapering window applied to the ideal sinc response.
///
/// All variants are the symmetric form (`sym=True` in SciPy) and fall to
/// ≤ 0.08 of their peak at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    #[default]
    Hamming,
    Hann,
    Blackman,
}

impl Window {
    /// Window samples of length `n`.
    pub fn coefficients(self, n: usize) -> Vec<f64> {
        match self {
            Window::Hamming => hamming(n),
            Window::Hann => hann(n),
            Window::Blackman => blackman(n),
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Window::Hamming => write!(f, "hamming"),
            Window::Hann => write!(f, "hann"),
            Window::Blackman => write!(f, "blackman"),
        }
    }
}

impl FromStr for Window {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hamming" => Ok(Window::Hamming),
            "hann" | "hanning" => Ok(Window::Hann),
            "blackman" => Ok(Window::Blackman),
            other => Err(FilterError::invalid(format!("unknown window '{other}'"))),
        }
    }
}

/// Group delay in samples of a linear-phase FIR with `numtaps` taps.
///
/// Integer for odd `numtaps`, half-integer for even.
pub fn group_delay(numtaps: usize) -> f64 {
    numtaps.saturating_sub(1) as f64 / 2.0
}

/// Design a Hamming-windowed lowpass filter with `numtaps` taps.
///
/// Takes `(fs, cutoff, numtaps)`, the order of the filter's own parameters.
/// Shorthand for `firwin(numtaps, cutoff, fs, Window::Hamming)`.
pub fn design_lowpass(fs: f64, cutoff: f64, numtaps: usize) -> Result<Vec<f64>> {
    firwin(numtaps, cutoff, fs, Window::Hamming)
}

/// Design a windowed-sinc lowpass FIR filter.
///
/// `cutoff` is the −6 dB point in Hz. Returns `numtaps` coefficients that sum
/// to 1.
///
/// Arguments follow `scipy.signal.firwin(numtaps, cutoff, fs=fs, window=…)`,
/// which puts `numtaps` first; [`design_lowpass`] takes `fs` first instead.
///
/// # Errors
///
/// [`FilterError::InvalidArgument`] if `numtaps == 0`, `fs` is not positive,
/// or `cutoff` is not strictly between 0 and `fs / 2`.
pub fn firwin(numtaps: usize, cutoff: f64, fs: f64, window: Window) -> Result<Vec<f64>> {
    if numtaps == 0 {
        return Err(FilterError::invalid("numtaps must be >= 1"));
    }
    check_sfreq(fs)?;
    let nyq = fs / 2.0;
    let fc = cutoff / nyq; // normalised (0, 1)
    if !(fc > 0.0 && fc < 1.0) {
        return Err(FilterError::invalid(format!(
            "cutoff must lie in (0, {nyq}) Hz, got {cutoff}"
        )));
    }
    if numtaps % 2 == 0 {
        debug!("firwin: even numtaps={numtaps}, group delay is {} samples", group_delay(numtaps));
    }

    let alpha = (numtaps - 1) as f64 / 2.0;
    let win = window.coefficients(numtaps);

    let mut h: Vec<f64> = win
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let x = i as f64 - alpha;
            // f(x) = sin(π·fc·x) / (π·x);  lim_{x→0} f(x) = fc
            let sinc = if x == 0.0 { fc } else { (PI * fc * x).sin() / (PI * x) };
            sinc * w
        })
        .collect();

    let s: f64 = h.iter().sum();
    h.iter_mut().for_each(|v| *v /= s);

    debug!("firwin: numtaps={numtaps} fc={fc:.4} window={window}");
    Ok(h)
}

/// Hamming window of length `n`.
pub fn hamming(n: usize) -> Vec<f64> {
    cosine_window(n, &[0.54, 0.46])
}

/// Hann window of length `n`.
pub fn hann(n: usize) -> Vec<f64> {
    cosine_window(n, &[0.5, 0.5])
}

/// Blackman window of length `n`.
pub fn blackman(n: usize) -> Vec<f64> {
    cosine_window(n, &[0.42, 0.5, 0.08])
}

/// Generalised symmetric cosine window `Σ (−1)^k a_k cos(2πk·i / (n−1))`.
fn cosine_window(n: usize, a: &[f64]) -> Vec<f64> {
    if n == 1 {
        return vec![1.0];
    }
    let denom = (n - 1) as f64;
    (0..n)
        .map(|i| {
            let phase = 2.0 * PI * i as f64 / denom;
            a.iter()
                .enumerate()
                .map(|(k, &ak)| {
                    let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
                    sign * ak * (k as f64 * phase).cos()
                })
                .sum::<f64>()
        })
        .collect()
}
