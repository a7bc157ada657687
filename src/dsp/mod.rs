pub mod alias;
pub mod lowpass;
pub mod resample;
pub mod synth;
pub mod tones;

/// Highest frequency representable without aliasing at sampling rate `fs`.
pub fn nyquist(fs: f64) -> f64 {
    fs / 2.0
}
