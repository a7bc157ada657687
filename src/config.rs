use serde::{Deserialize, Serialize};

use crate::dsp::lowpass::reconstruction_cutoff;
use crate::dsp::tones::SignalId;
use crate::error::{require_ceiling, require_sample_rate, DomainError};

/// Parameters a presenter chooses before calling the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Sampling rate applied to every signal (Hz).
    pub sample_rate_hz: f64,
    /// Replicated-spectrum ceiling for ordinary signals (Hz).
    pub spectrum_ceiling_hz: f64,
    /// Replicated-spectrum ceiling for the dense signal (Hz).
    pub dense_spectrum_ceiling_hz: f64,
    /// Lowpass cutoff as a multiple of the signal's highest tone.
    pub cutoff_factor: f64,
    /// Headroom applied to the continuous trace's amplitude range.
    pub continuous_axis_margin: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 8000.0,
            spectrum_ceiling_hz: 20000.0,
            dense_spectrum_ceiling_hz: 40000.0,
            cutoff_factor: 1.1,
            continuous_axis_margin: 1.2,
        }
    }
}

impl ViewConfig {
    /// Parse a (possibly partial) JSON document; missing fields keep their
    /// defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_sample_rate(self.sample_rate_hz)?;
        require_ceiling(self.spectrum_ceiling_hz)?;
        require_ceiling(self.dense_spectrum_ceiling_hz)?;
        if !(self.cutoff_factor >= 0.0 && self.cutoff_factor.is_finite()) {
            return Err(DomainError::NegativeCutoffFactor(self.cutoff_factor));
        }
        Ok(())
    }

    pub fn ceiling_for(&self, signal: SignalId) -> f64 {
        if signal.is_dense() {
            self.dense_spectrum_ceiling_hz
        } else {
            self.spectrum_ceiling_hz
        }
    }

    pub fn cutoff_for(&self, signal: SignalId) -> f64 {
        reconstruction_cutoff(signal, self.cutoff_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ceiling_for(SignalId::SingleTone), 20000.0);
        assert_eq!(config.ceiling_for(SignalId::DcHarmonics), 40000.0);
        assert!((config.cutoff_for(SignalId::WideTones) - 5500.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ViewConfig::from_json(r#"{ "sample_rate_hz": 12000 }"#).unwrap();
        assert_eq!(config.sample_rate_hz, 12000.0);
        assert_eq!(config.spectrum_ceiling_hz, 20000.0);
        assert_eq!(config.cutoff_factor, 1.1);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ViewConfig {
            cutoff_factor: 2.0,
            ..ViewConfig::default()
        };
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(ViewConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn test_malformed_json() {
        assert!(ViewConfig::from_json("{ sample_rate_hz: }").is_err());
        assert!(ViewConfig::from_json(r#"{ "sample_rate_hz": "fast" }"#).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_rate = ViewConfig {
            sample_rate_hz: 0.0,
            ..ViewConfig::default()
        };
        assert_eq!(
            bad_rate.validate(),
            Err(DomainError::NonPositiveSampleRate(0.0))
        );

        let bad_ceiling = ViewConfig {
            dense_spectrum_ceiling_hz: -5.0,
            ..ViewConfig::default()
        };
        assert_eq!(bad_ceiling.validate(), Err(DomainError::InvalidCeiling(-5.0)));

        let bad_factor = ViewConfig {
            cutoff_factor: -1.1,
            ..ViewConfig::default()
        };
        assert_eq!(
            bad_factor.validate(),
            Err(DomainError::NegativeCutoffFactor(-1.1))
        );
    }
}
