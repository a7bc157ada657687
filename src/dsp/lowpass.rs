use crate::dsp::tones::{max_frequency, SignalId};
use crate::error::{require_cutoff, DomainError};
use crate::types::Spectrum;

/// Ideal brick-wall lowpass: keep the lines with `|f| <= cutoff`, unchanged
/// and in their original order; drop everything else.
pub fn lowpass(spectrum: &Spectrum, cutoff: f64) -> Result<Spectrum, DomainError> {
    require_cutoff(cutoff)?;
    let filtered = spectrum.filtered(|line| line.frequency.abs() <= cutoff);
    log::debug!(
        "lowpass at {cutoff} Hz kept {} of {} lines",
        filtered.len(),
        spectrum.len()
    );
    Ok(filtered)
}

/// Reconstruction cutoff for `signal`: `factor` times its highest tone.
pub fn reconstruction_cutoff(signal: SignalId, factor: f64) -> f64 {
    max_frequency(signal) * factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::alias::replicate;
    use crate::types::SpectralLine;

    fn comb() -> Spectrum {
        Spectrum::from_lines((0..10).map(|i| SpectralLine {
            frequency: i as f64 * 1000.0,
            amplitude: 1.0 + i as f64,
        }))
    }

    #[test]
    fn test_brick_wall_edges() {
        let filtered = lowpass(&comb(), 3000.0).unwrap();
        assert_eq!(filtered.frequencies(), &[0.0, 1000.0, 2000.0, 3000.0]);
        assert_eq!(filtered.amplitudes(), &[1.0, 2.0, 3.0, 4.0]);

        let just_below = lowpass(&comb(), 2999.999).unwrap();
        assert_eq!(just_below.len(), 3);
    }

    #[test]
    fn test_zero_cutoff_keeps_dc() {
        let filtered = lowpass(&comb(), 0.0).unwrap();
        assert_eq!(filtered.frequencies(), &[0.0]);
    }

    #[test]
    fn test_idempotent() {
        for signal in SignalId::ALL {
            let spectrum = replicate(signal, 8000.0, 40000.0).unwrap();
            for cutoff in [0.0, 1100.0, 4000.0, 6600.0, 25000.0] {
                let once = lowpass(&spectrum, cutoff).unwrap();
                let twice = lowpass(&once, cutoff).unwrap();
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_monotone_in_cutoff() {
        let spectrum = replicate(SignalId::DcHarmonics, 8000.0, 40000.0).unwrap();
        let cutoffs = [0.0, 500.0, 2000.0, 6600.0, 17000.0, 40000.0];
        for pair in cutoffs.windows(2) {
            let narrow = lowpass(&spectrum, pair[0]).unwrap();
            let wide = lowpass(&spectrum, pair[1]).unwrap();
            assert!(narrow.len() <= wide.len());
            for line in narrow.lines() {
                assert_eq!(wide.amplitude_at(line.frequency), Some(line.amplitude));
            }
        }
    }

    #[test]
    fn test_infinite_cutoff_passes_everything() {
        let spectrum = comb();
        assert_eq!(lowpass(&spectrum, f64::INFINITY).unwrap(), spectrum);
    }

    #[test]
    fn test_rejects_negative_cutoff() {
        assert_eq!(
            lowpass(&comb(), -1.0),
            Err(DomainError::NegativeCutoff(-1.0))
        );
        assert!(lowpass(&comb(), f64::NAN).is_err());
    }

    #[test]
    fn test_reconstruction_cutoff() {
        assert!((reconstruction_cutoff(SignalId::SingleTone, 1.1) - 1100.0).abs() < 1e-9);
        assert!((reconstruction_cutoff(SignalId::DcHarmonics, 1.1) - 6600.0).abs() < 1e-9);
    }
}
