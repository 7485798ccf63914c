//! # sigfilt — spectral masking and windowed-sinc FIR filtering
//!
//! Two independent filters for a uniformly sampled, real-valued signal held in
//! memory:
//!
//! ```text
//! x[n], fs
//!   │
//!   ├─ spectral::fft_filter()     fft → 0/1 bin mask at cutoff → ifft → Re
//!   │                             returns signal + freqs + spectra + mask
//!   │
//!   └─ filter::design_lowpass()   Hamming-windowed sinc, Σh = 1
//!      filter::lfilter()          causal y[n] = Σ h[k]·x[n−k], same length
//!      filter::freqz()            frequency response (diagnostic)
//! ```
//!
//! Every function is pure: no global state, no caches, no I/O. Planner and
//! scratch buffers live only for the duration of a call, so independent calls
//! may run on any thread.
//!
//! ## Quick start
//!
//! ```
//! use sigfilt::{fft_filter, fir_lowpass, FilterKind};
//! use sigfilt::synth::{sample_times, sum_of_sines};
//!
//! // 1 s of 50 Hz + 120 Hz at 500 Hz
//! let fs = 500.0;
//! let t  = sample_times(fs, 1.0).unwrap();
//! let x  = sum_of_sines(&t, &[(50.0, 1.0), (120.0, 0.5)]);
//!
//! // Brick-wall lowpass at 80 Hz
//! let out = fft_filter(&x, fs, 80.0, FilterKind::Lowpass).unwrap();
//! assert_eq!(out.filtered.len(), x.len());
//!
//! // 101-tap FIR lowpass at 80 Hz (output delayed by 50 samples)
//! let (y, taps) = fir_lowpass(&x, fs, 80.0, 101).unwrap();
//! assert_eq!(y.len(), x.len());
//! assert_eq!(taps.len(), 101);
//! ```
//!
//! ## Errors
//!
//! Precondition violations (empty signal, `fs <= 0`, cutoff out of range,
//! zero taps) return [`FilterError::InvalidArgument`]. Degenerate masks such
//! as a lowpass above Nyquist are valid results.

pub mod config;
pub mod dft;
pub mod error;
pub mod filter;
pub mod spectral;
pub mod synth;

// ── Crate-root re-exports ─────────────────────────────────────────────────

// config
pub use config::FilterConfig;

// error
pub use error::{FilterError, Result};

// dft
pub use dft::{bin_frequencies, fft, fftfreq, ifft, rfftfreq};

// spectral
pub use spectral::{fft_filter, frequency_mask, FilterKind, SpectralFiltered};

// filter — design, convolution, response
pub use filter::{
    design_lowpass, firwin, group_delay, hamming, hann, blackman, Window,
    fir_lowpass, lfilter, lfilter_overlap_add, trim_group_delay,
    freqz, FrequencyResponse,
};

pub use rustfft::num_complex::Complex64;
