use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::types::{Tone, ToneSet};

/// The signals of the catalog. Numeric ids 1-4 are stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalId {
    /// `5·cos(2π·1000t)`
    SingleTone,
    /// `5·cos(2π·2000t) + 3·cos(2π·3000t)`
    CloseTones,
    /// `5·cos(2π·2000t) + cos(2π·5000t)`
    WideTones,
    /// `1 + cos(2π·2000t) + 2·cos(2π·4000t) + 3·cos(2π·6000t)`
    DcHarmonics,
}

const SINGLE_TONE: [Tone; 1] = [Tone::new(1000.0, 2.5)];
const CLOSE_TONES: [Tone; 2] = [Tone::new(2000.0, 2.5), Tone::new(3000.0, 1.5)];
const WIDE_TONES: [Tone; 2] = [Tone::new(2000.0, 2.5), Tone::new(5000.0, 0.5)];
const DC_HARMONICS: [Tone; 4] = [
    Tone::new(0.0, 1.0),
    Tone::new(2000.0, 0.5),
    Tone::new(4000.0, 1.0),
    Tone::new(6000.0, 1.5),
];

impl SignalId {
    pub const ALL: [SignalId; 4] = [
        SignalId::SingleTone,
        SignalId::CloseTones,
        SignalId::WideTones,
        SignalId::DcHarmonics,
    ];

    pub fn id(self) -> u8 {
        match self {
            SignalId::SingleTone => 1,
            SignalId::CloseTones => 2,
            SignalId::WideTones => 3,
            SignalId::DcHarmonics => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SignalId::SingleTone => "single_tone",
            SignalId::CloseTones => "close_tones",
            SignalId::WideTones => "wide_tones",
            SignalId::DcHarmonics => "dc_harmonics",
        }
    }

    /// Closed-form expression of the time-domain signal.
    pub fn formula(self) -> &'static str {
        match self {
            SignalId::SingleTone => "5·cos(2π·1000t)",
            SignalId::CloseTones => "5·cos(2π·2000t) + 3·cos(2π·3000t)",
            SignalId::WideTones => "5·cos(2π·2000t) + cos(2π·5000t)",
            SignalId::DcHarmonics => "1 + cos(2π·2000t) + 2·cos(2π·4000t) + 3·cos(2π·6000t)",
        }
    }

    /// The signal with the richest spectrum, which gets the wider
    /// replicated-spectrum ceiling.
    pub fn is_dense(self) -> bool {
        matches!(self, SignalId::DcHarmonics)
    }

    fn tones(self) -> &'static [Tone] {
        match self {
            SignalId::SingleTone => &SINGLE_TONE,
            SignalId::CloseTones => &CLOSE_TONES,
            SignalId::WideTones => &WIDE_TONES,
            SignalId::DcHarmonics => &DC_HARMONICS,
        }
    }
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signal {}", self.id())
    }
}

impl TryFrom<u8> for SignalId {
    type Error = DomainError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        SignalId::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| DomainError::UnknownSignal(id.to_string()))
    }
}

impl FromStr for SignalId {
    type Err = DomainError;

    /// Accepts a numeric id ("1".."4") or a variant name ("wide_tones",
    /// "wide-tones").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u8>() {
            return SignalId::try_from(id);
        }
        let normalized = s.to_lowercase().replace('-', "_");
        SignalId::ALL
            .into_iter()
            .find(|sig| sig.name() == normalized)
            .ok_or_else(|| DomainError::UnknownSignal(s.to_string()))
    }
}

/// Continuous line spectrum of `signal`, in catalog order.
pub fn tones_for(signal: SignalId) -> ToneSet {
    ToneSet::new(signal.tones().to_vec())
}

/// Largest absolute tone frequency of `signal`.
pub fn max_frequency(signal: SignalId) -> f64 {
    tones_for(signal).max_frequency()
}
