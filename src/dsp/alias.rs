use crate::dsp::tones::{tones_for, SignalId};
use crate::error::{require_ceiling, require_sample_rate, DomainError};
use crate::types::{LineAccumulator, Spectrum, Tone, FREQ_EPSILON_HZ};

/// Line spectrum of `signal` after sampling at `fs`, up to `fmax` inclusive.
pub fn replicate(signal: SignalId, fs: f64, fmax: f64) -> Result<Spectrum, DomainError> {
    let spectrum = replicate_tones(tones_for(signal).tones(), fs, fmax)?;
    log::debug!(
        "{signal}: {} lines in [0, {fmax}] Hz at fs = {fs} Hz",
        spectrum.len()
    );
    Ok(spectrum)
}

/// Replicate an arbitrary tone list at every multiple of `fs`.
///
/// Each tone `(f, a)` is copied to `f + k·fs` for `k` in
/// `[-replica_span, replica_span]`. Copies below zero are folded to `|f + k·fs|`.
/// Copies landing on the same frequency (within `FREQ_EPSILON_HZ`) add their
/// amplitudes. The result is sorted by frequency.
pub fn replicate_tones(tones: &[Tone], fs: f64, fmax: f64) -> Result<Spectrum, DomainError> {
    require_sample_rate(fs)?;
    require_ceiling(fmax)?;

    let k_max = replica_span(fs, fmax);
    // Half an epsilon of slack keeps copies that drift a few ulps past fmax.
    let ceiling = fmax + FREQ_EPSILON_HZ / 2.0;
    let mut acc = LineAccumulator::new();

    for k in -k_max..=k_max {
        let shift = k as f64 * fs;
        for tone in tones {
            let f_rep = (tone.frequency + shift).abs();
            if f_rep <= ceiling {
                acc.add(f_rep, tone.amplitude);
            }
        }
    }

    Ok(acc.into_spectrum())
}

/// Number of replicas visited on each side of the base band.
///
/// `⌊fmax / fs⌋` replicas cover the ceiling; two more make sure a tone
/// anywhere within one `fs` band still has all its in-range copies visited.
pub fn replica_span(fs: f64, fmax: f64) -> i64 {
    ((fmax / fs).floor() as i64).saturating_add(2)
}
