use serde::Serialize;

use crate::config::ViewConfig;
use crate::dsp::alias::replicate;
use crate::dsp::lowpass::lowpass;
use crate::dsp::nyquist;
use crate::dsp::resample::sample;
use crate::dsp::synth::synthesize;
use crate::dsp::tones::{tones_for, SignalId};
use crate::error::DomainError;
use crate::types::{ContinuousTrace, DiscreteTrace, Spectrum};

/// Amplitude tolerance when comparing the filtered and original spectra.
const RECOVERY_TOLERANCE: f64 = 1e-9;

/// Everything a presenter needs to draw one signal: the waveform, its
/// spectrum, the sampled waveform, the replicated spectrum and what an ideal
/// lowpass leaves of it.
#[derive(Clone, Debug, Serialize)]
pub struct SignalView {
    pub signal: SignalId,
    pub sample_rate_hz: f64,
    pub nyquist_hz: f64,
    pub ceiling_hz: f64,
    pub cutoff_hz: f64,
    pub continuous: ContinuousTrace,
    /// Suggested (low, high) amplitude axis for `continuous`.
    pub amplitude_axis: (f64, f64),
    pub original: Spectrum,
    pub sampled: DiscreteTrace,
    pub replicated: Spectrum,
    pub filtered: Spectrum,
    /// The lowpass output equals the original spectrum line for line.
    pub recovered: bool,
}

impl SignalView {
    pub fn build(signal: SignalId, config: &ViewConfig) -> Result<Self, DomainError> {
        config.validate()?;
        let fs = config.sample_rate_hz;
        let ceiling_hz = config.ceiling_for(signal);
        let cutoff_hz = config.cutoff_for(signal);

        let continuous = synthesize(signal);
        let margin = config.continuous_axis_margin;
        let amplitude_axis = continuous
            .amplitude_bounds()
            .map(|(lo, hi)| (margin * lo, margin * hi))
            .unwrap_or((0.0, 0.0));

        let tones = tones_for(signal);
        let original = tones.to_spectrum();
        let sampled = sample(&continuous, fs)?;
        let replicated = replicate(signal, fs, ceiling_hz)?;
        let filtered = lowpass(&replicated, cutoff_hz)?;
        let recovered = filtered.approx_eq(&original, RECOVERY_TOLERANCE);

        if !recovered {
            log::warn!(
                "{signal} aliases at {fs} Hz: lowpass at {cutoff_hz} Hz does not recover the original spectrum"
            );
        } else if tones.is_undersampled(fs) {
            log::debug!("{signal}: recovered despite a tone at or above Nyquist");
        }

        Ok(Self {
            signal,
            sample_rate_hz: fs,
            nyquist_hz: nyquist(fs),
            ceiling_hz,
            cutoff_hz,
            continuous,
            amplitude_axis,
            original,
            sampled,
            replicated,
            filtered,
            recovered,
        })
    }

    /// Build the view of every catalog signal, in id order.
    pub fn build_all(config: &ViewConfig) -> Result<Vec<Self>, DomainError> {
        SignalId::ALL
            .into_iter()
            .map(|signal| SignalView::build(signal, config))
            .collect()
    }
}
