use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::dsp::nyquist;
use crate::error::DomainError;

/// Frequencies closer than this are treated as the same spectral line.
pub const FREQ_EPSILON_HZ: f64 = 1e-6;

/// Largest accepted spectrum ceiling. Keys stay below `i128::MAX / 2` up to it.
pub const MAX_KEYED_FREQ_HZ: f64 = i128::MAX as f64 * FREQ_EPSILON_HZ / 2.0;

/// Integer key for a frequency, rounded to the nearest `FREQ_EPSILON_HZ`.
/// Distinct for every pair of frequencies up to `MAX_KEYED_FREQ_HZ` that are
/// further apart than the epsilon.
pub(crate) fn freq_key(freq_hz: f64) -> i128 {
    (freq_hz / FREQ_EPSILON_HZ).round() as i128
}

/// One line of a continuous line spectrum.
///
/// `amplitude` is the two-sided line amplitude: a tone at `f > 0` is the
/// waveform `2 * amplitude * cos(2πft)`, a tone at `f = 0` is the constant
/// `amplitude`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub frequency: f64,
    pub amplitude: f64,
}

impl Tone {
    pub const fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }

    pub fn is_dc(&self) -> bool {
        self.frequency == 0.0
    }

    /// Waveform contribution of this tone at time `t` (seconds).
    pub fn value_at(&self, t: f64) -> f64 {
        if self.is_dc() {
            self.amplitude
        } else {
            2.0 * self.amplitude * (2.0 * PI * self.frequency * t).cos()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ToneSet {
    tones: Vec<Tone>,
}

impl ToneSet {
    pub fn new(tones: Vec<Tone>) -> Self {
        Self { tones }
    }

    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    pub fn len(&self) -> usize {
        self.tones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    /// Largest absolute tone frequency, 0 for an empty set.
    pub fn max_frequency(&self) -> f64 {
        self.tones
            .iter()
            .map(|t| t.frequency.abs())
            .fold(0.0, f64::max)
    }

    /// True if any tone sits at or above the Nyquist frequency of `fs`,
    /// i.e. sampling at `fs` cannot be undone by an ideal lowpass.
    pub fn is_undersampled(&self, fs: f64) -> bool {
        let limit = nyquist(fs);
        self.tones.iter().any(|t| t.frequency.abs() >= limit)
    }

    /// The continuous-time spectrum as a `Spectrum` (duplicates merged).
    pub fn to_spectrum(&self) -> Spectrum {
        let mut acc = LineAccumulator::new();
        for tone in &self.tones {
            acc.add(tone.frequency.abs(), tone.amplitude);
        }
        acc.into_spectrum()
    }
}

/// Densely sampled time-domain trace standing in for a continuous signal.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContinuousTrace {
    time: Vec<f64>,
    amplitude: Vec<f64>,
}

impl ContinuousTrace {
    /// Build a trace from parallel arrays. Times must be strictly increasing.
    pub fn new(time: Vec<f64>, amplitude: Vec<f64>) -> Result<Self, DomainError> {
        if time.len() != amplitude.len() {
            return Err(DomainError::MismatchedTrace {
                times: time.len(),
                amplitudes: amplitude.len(),
            });
        }
        if let Some(i) = time
            .windows(2)
            .position(|w| w[1].partial_cmp(&w[0]) != Some(Ordering::Greater))
        {
            return Err(DomainError::NonIncreasingTime(i + 1));
        }
        Ok(Self { time, amplitude })
    }

    /// Caller guarantees equal lengths and increasing time.
    pub(crate) fn from_parts(time: Vec<f64>, amplitude: Vec<f64>) -> Self {
        debug_assert_eq!(time.len(), amplitude.len());
        Self { time, amplitude }
    }

    pub fn times(&self) -> &[f64] {
        &self.time
    }

    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitude
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn last_time(&self) -> Option<f64> {
        self.time.last().copied()
    }

    /// (min, max) of the amplitude values, `None` for an empty trace.
    pub fn amplitude_bounds(&self) -> Option<(f64, f64)> {
        let first = *self.amplitude.first()?;
        Some(
            self.amplitude
                .iter()
                .fold((first, first), |(lo, hi), &a| (lo.min(a), hi.max(a))),
        )
    }
}

/// Uniformly sampled trace at spacing `1 / sample_rate`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiscreteTrace {
    sample_rate: f64,
    time: Vec<f64>,
    amplitude: Vec<f64>,
}

impl DiscreteTrace {
    pub(crate) fn from_parts(sample_rate: f64, time: Vec<f64>, amplitude: Vec<f64>) -> Self {
        debug_assert_eq!(time.len(), amplitude.len());
        Self {
            sample_rate,
            time,
            amplitude,
        }
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn times(&self) -> &[f64] {
        &self.time
    }

    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitude
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpectralLine {
    pub frequency: f64,
    pub amplitude: f64,
}

/// Line spectrum as parallel arrays, sorted by ascending frequency.
/// Frequencies are unique to within `FREQ_EPSILON_HZ`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Spectrum {
    frequencies: Vec<f64>,
    amplitudes: Vec<f64>,
}

impl Spectrum {
    /// Build a spectrum from arbitrary lines. Lines at the same frequency are
    /// summed; negative frequencies are folded onto their magnitude.
    pub fn from_lines<I: IntoIterator<Item = SpectralLine>>(lines: I) -> Self {
        let mut acc = LineAccumulator::new();
        for line in lines {
            acc.add(line.frequency.abs(), line.amplitude);
        }
        acc.into_spectrum()
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    pub fn lines(&self) -> impl Iterator<Item = SpectralLine> + '_ {
        self.frequencies
            .iter()
            .zip(self.amplitudes.iter())
            .map(|(&frequency, &amplitude)| SpectralLine {
                frequency,
                amplitude,
            })
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Amplitude of the line at `freq_hz`, if present.
    pub fn amplitude_at(&self, freq_hz: f64) -> Option<f64> {
        let key = freq_key(freq_hz);
        self.frequencies
            .binary_search_by(|&f| freq_key(f).cmp(&key))
            .ok()
            .map(|i| self.amplitudes[i])
    }

    /// Keep the lines for which `keep` returns true, preserving order.
    pub(crate) fn filtered<F: Fn(&SpectralLine) -> bool>(&self, keep: F) -> Self {
        let (frequencies, amplitudes) = self
            .lines()
            .filter(|line| keep(line))
            .map(|line| (line.frequency, line.amplitude))
            .unzip();
        Self {
            frequencies,
            amplitudes,
        }
    }

    /// Same line frequencies, amplitudes within `tolerance`.
    pub fn approx_eq(&self, other: &Spectrum, tolerance: f64) -> bool {
        self.len() == other.len()
            && self.lines().zip(other.lines()).all(|(a, b)| {
                freq_key(a.frequency) == freq_key(b.frequency)
                    && (a.amplitude - b.amplitude).abs() <= tolerance
            })
    }
}

/// Sums amplitudes of lines that land on the same (rounded) frequency.
/// The first frequency seen for a key is the one reported.
pub(crate) struct LineAccumulator {
    lines: BTreeMap<i128, (f64, f64)>,
}

impl LineAccumulator {
    pub(crate) fn new() -> Self {
        Self {
            lines: BTreeMap::new(),
        }
    }

    pub(crate) fn add(&mut self, freq_hz: f64, amplitude: f64) {
        self.lines
            .entry(freq_key(freq_hz))
            .and_modify(|(_, a)| *a += amplitude)
            .or_insert((freq_hz, amplitude));
    }

    pub(crate) fn into_spectrum(self) -> Spectrum {
        let (frequencies, amplitudes) = self.lines.into_values().unzip();
        Spectrum {
            frequencies,
            amplitudes,
        }
    }
}
