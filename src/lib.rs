//! Aliasview: what sampling does to the line spectrum of a multi-tone signal.
//!
//! A small catalog of periodic signals is synthesized, sampled at a fixed rate,
//! and its sampled spectrum is computed analytically by replicating the tone
//! list at every multiple of the sampling rate. An ideal lowpass then shows
//! which signals can be reconstructed and which are irrecoverably aliased.
//!
//! Every operation is a pure function of its inputs; views of different
//! signals can be built concurrently without coordination.

pub mod config;
pub mod dsp;
pub mod error;
pub mod types;
pub mod view;

pub use config::ViewConfig;
pub use dsp::alias::replicate;
pub use dsp::lowpass::lowpass;
pub use dsp::resample::sample;
pub use dsp::synth::synthesize;
pub use dsp::tones::{max_frequency, tones_for, SignalId};
pub use error::DomainError;
pub use types::{ContinuousTrace, DiscreteTrace, SpectralLine, Spectrum, Tone, ToneSet};
pub use view::SignalView;
