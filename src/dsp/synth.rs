use crate::dsp::tones::{tones_for, SignalId};
use crate::types::{ContinuousTrace, Tone};

/// Observation window of every synthesized signal (5 ms).
pub const WINDOW_SECS: f64 = 5e-3;
/// Time resolution of the synthesized trace (1 MHz).
pub const TIME_STEP_SECS: f64 = 1e-6;

/// Number of points in a synthesized trace.
pub fn trace_len() -> usize {
    (WINDOW_SECS / TIME_STEP_SECS).round() as usize
}

/// Synthesize the continuous-time waveform of `signal` over `[0, 5 ms)`
/// at 1 µs resolution.
pub fn synthesize(signal: SignalId) -> ContinuousTrace {
    let tones = tones_for(signal);
    let trace = render_tones(tones.tones(), trace_len(), TIME_STEP_SECS);
    log::debug!(
        "{signal}: synthesized {} points from {} tones",
        trace.len(),
        tones.len()
    );
    trace
}

/// Sum of the tones' waveforms on the grid `t_k = k * dt`, `k < len`.
fn render_tones(tones: &[Tone], len: usize, dt: f64) -> ContinuousTrace {
    let time: Vec<f64> = (0..len).map(|k| k as f64 * dt).collect();
    let amplitude = time
        .iter()
        .map(|&t| tones.iter().map(|tone| tone.value_at(t)).sum())
        .collect();
    ContinuousTrace::from_parts(time, amplitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_shape() {
        let trace = synthesize(SignalId::SingleTone);
        assert_eq!(trace.len(), 5000);
        assert_eq!(trace.times()[0], 0.0);
        assert!((trace.times()[1] - 1e-6).abs() < 1e-15);
        assert!(trace.last_time().unwrap() < WINDOW_SECS);
        assert!(trace.times().windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_single_tone_peak_amplitude() {
        // 5·cos(2π·1000t): peak 5 at t = 0, trough -5 at t = 0.5 ms
        let trace = synthesize(SignalId::SingleTone);
        assert!((trace.amplitudes()[0] - 5.0).abs() < 1e-12);
        assert!((trace.amplitudes()[500] + 5.0).abs() < 1e-9);
        let (lo, hi) = trace.amplitude_bounds().unwrap();
        assert!((lo + 5.0).abs() < 1e-9);
        assert!((hi - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_dc_harmonics_at_origin() {
        // 1 + 1 + 2 + 3 at t = 0
        let trace = synthesize(SignalId::DcHarmonics);
        assert!((trace.amplitudes()[0] - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_dc_only_is_constant() {
        let trace = render_tones(&[Tone::new(0.0, 1.5)], 100, 1e-3);
        assert!(trace.amplitudes().iter().all(|&a| a == 1.5));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(synthesize(SignalId::WideTones), synthesize(SignalId::WideTones));
    }
}
