//! Filter configuration.
//!
//! [`FilterConfig`] gathers the parameters shared by the spectral filter, the
//! FIR design and the frequency-response diagnostic. The defaults reproduce
//! the reference scenario: 500 Hz sampling, 80 Hz lowpass, 101 Hamming taps.
use crate::filter::design::{group_delay, Window};
use crate::spectral::FilterKind;

/// Parameters for one filtering run.
///
/// All fields are `pub`; use struct-update syntax to override a few:
///
/// ```
/// use sigfilt::FilterConfig;
///
/// let cfg = FilterConfig {
///     cutoff:  40.0,
///     numtaps: 201,
///     ..FilterConfig::default()
/// };
/// assert_eq!(cfg.group_delay(), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Sampling rate in Hz.
    ///
    /// Default: `500.0`.
    pub fs: f64,

    /// Cutoff frequency in Hz.
    ///
    /// For the spectral filter any value `>= 0` is accepted. The FIR design
    /// requires `0 < cutoff < fs / 2`.
    ///
    /// Default: `80.0`.
    pub cutoff: f64,

    /// Which side of the cutoff the spectral mask keeps.
    ///
    /// Default: [`FilterKind::Lowpass`].
    pub kind: FilterKind,

    /// Number of FIR taps. Odd values give an integer group delay.
    ///
    /// Default: `101`.
    pub numtaps: usize,

    /// Window used by the FIR design.
    ///
    /// Default: [`Window::Hamming`].
    pub window: Window,

    /// Number of grid points for the frequency-response diagnostic.
    ///
    /// Default: `8000`.
    pub response_points: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            fs: 500.0,
            cutoff: 80.0,
            kind: FilterKind::Lowpass,
            numtaps: 101,
            window: Window::Hamming,
            response_points: 8000,
        }
    }
}

impl FilterConfig {
    /// Half the sampling rate.
    pub fn nyquist(&self) -> f64 {
        self.fs / 2.0
    }

    /// Cutoff as a fraction of Nyquist.
    pub fn normalized_cutoff(&self) -> f64 {
        self.cutoff / self.nyquist()
    }

    /// Delay in samples introduced by the causal FIR.
    pub fn group_delay(&self) -> f64 {
        group_delay(self.numtaps)
    }
}
