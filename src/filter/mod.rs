//! FIR lowpass design and application.
//!
//! - [`design`]: windowed-sinc lowpass design, matching `scipy.signal.firwin`.
//! - [`apply`]: causal convolution, matching `scipy.signal.lfilter(taps, 1.0, x)`.
//! - [`response`]: frequency response, matching `scipy.signal.freqz`.

pub mod apply;
pub mod design;
pub mod response;

pub use apply::{fir_lowpass, lfilter, lfilter_overlap_add, trim_group_delay};
pub use design::{blackman, design_lowpass, firwin, group_delay, hamming, hann, Window};
pub use response::{freqz, FrequencyResponse};
