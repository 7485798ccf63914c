//! Brick-wall filtering by masking DFT bins.
//!
//! `fft_filter` runs the whole chain:
//!   1. bin frequencies   `k·fs/N`, Nyquist positive (see [`bin_frequencies`])
//!   2. spectrum          `X = fft(x)`
//!   3. binary mask       lowpass keeps `|f| <= cutoff`, highpass keeps `|f| >= cutoff`
//!   4. masked spectrum   `Y = X · mask`
//!   5. filtered signal   `y = Re(ifft(Y))`
//!
//! Bins exactly at the cutoff survive under both kinds. A cutoff at or above
//! Nyquist is legal: the lowpass becomes all-pass, the highpass all-block.
use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use rustfft::num_complex::Complex64;

use crate::dft::{bin_frequencies, fft, ifft};
use crate::error::{check_sfreq, FilterError, Result};

/// Which side of the cutoff survives the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    #[default]
    Lowpass,
    Highpass,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::Lowpass => write!(f, "lowpass"),
            FilterKind::Highpass => write!(f, "highpass"),
        }
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lowpass" | "low" | "lp" => Ok(FilterKind::Lowpass),
            "highpass" | "high" | "hp" => Ok(FilterKind::Highpass),
            other => Err(FilterError::invalid(format!("unknown filter kind '{other}'"))),
        }
    }
}

/// Everything produced by [`fft_filter`].
#[derive(Debug, Clone)]
pub struct SpectralFiltered {
    /// Real part of the inverse transform, same length as the input.
    pub filtered: Vec<f64>,
    /// Bin-centre frequencies in Hz (`k·fs/N`, Nyquist positive for even N).
    pub freqs: Vec<f64>,
    /// Spectrum of the input signal.
    pub spectrum: Vec<Complex64>,
    /// `spectrum · mask`.
    pub filtered_spectrum: Vec<Complex64>,
    /// 0/1 mask applied to the spectrum.
    pub mask: Vec<f64>,
    /// Largest `|Im|` thrown away when taking the real part. Diagnostic only.
    pub imag_residue: f64,
}

/// Build the 0/1 mask for `freqs` (Hz) at `cutoff` (Hz).
///
/// Comparisons are strict, so a bin whose `|f|` equals `cutoff` is kept by
/// both kinds.
pub fn frequency_mask(freqs: &[f64], cutoff: f64, kind: FilterKind) -> Vec<f64> {
    freqs
        .iter()
        .map(|&f| {
            let reject = match kind {
                FilterKind::Lowpass => f.abs() > cutoff,
                FilterKind::Highpass => f.abs() < cutoff,
            };
            if reject { 0.0 } else { 1.0 }
        })
        .collect()
}

/// Filter `signal` sampled at `fs` Hz by zeroing spectral bins on the wrong
/// side of `cutoff` Hz.
///
/// # Errors
///
/// [`FilterError::InvalidArgument`] if `signal` is empty, `fs` is not a
/// positive finite number, or `cutoff` is negative or NaN.
pub fn fft_filter(
    signal: &[f64],
    fs: f64,
    cutoff: f64,
    kind: FilterKind,
) -> Result<SpectralFiltered> {
    if signal.is_empty() {
        return Err(FilterError::invalid("signal must not be empty"));
    }
    check_sfreq(fs)?;
    if cutoff.is_nan() || cutoff < 0.0 {
        return Err(FilterError::invalid(format!("cutoff must be >= 0, got {cutoff}")));
    }

    let n = signal.len();
    debug!("fft_filter: n={n} fs={fs} cutoff={cutoff} kind={kind}");

    let freqs = bin_frequencies(n, fs);
    let spectrum = fft(signal);
    let mask = frequency_mask(&freqs, cutoff, kind);

    let filtered_spectrum: Vec<Complex64> = spectrum
        .iter()
        .zip(mask.iter())
        .map(|(&x, &m)| x * m)
        .collect();

    let time = ifft(&filtered_spectrum);
    let imag_residue = time.iter().map(|c| c.im.abs()).fold(0.0_f64, f64::max);
    trace!("fft_filter: kept {} of {n} bins, imag residue {imag_residue:.3e}",
        mask.iter().filter(|&&m| m > 0.0).count());

    let filtered = time.iter().map(|c| c.re).collect();

    Ok(SpectralFiltered {
        filtered,
        freqs,
        spectrum,
        filtered_spectrum,
        mask,
        imag_residue,
    })
}
