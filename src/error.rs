use thiserror::Error;

use crate::types::MAX_KEYED_FREQ_HZ;

/// A numeric or catalog precondition was violated by the caller.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DomainError {
    #[error("sampling rate must be positive and finite, got {0} Hz")]
    NonPositiveSampleRate(f64),
    #[error("cutoff must be non-negative, got {0} Hz")]
    NegativeCutoff(f64),
    #[error("cutoff factor must be non-negative and finite, got {0}")]
    NegativeCutoffFactor(f64),
    #[error("frequency ceiling must be between 0 and 8.5e31 Hz, got {0} Hz")]
    InvalidCeiling(f64),
    #[error("trace needs at least 2 points, got {0}")]
    DegenerateTrace(usize),
    #[error("trace has {times} time values but {amplitudes} amplitudes")]
    MismatchedTrace { times: usize, amplitudes: usize },
    #[error("trace time values must be strictly increasing (at index {0})")]
    NonIncreasingTime(usize),
    #[error("unknown signal {0:?}")]
    UnknownSignal(String),
}

pub(crate) fn require_sample_rate(fs: f64) -> Result<(), DomainError> {
    if fs > 0.0 && fs.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NonPositiveSampleRate(fs))
    }
}

pub(crate) fn require_cutoff(cutoff: f64) -> Result<(), DomainError> {
    // NaN fails the comparison as well.
    if cutoff >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::NegativeCutoff(cutoff))
    }
}

pub(crate) fn require_ceiling(fmax: f64) -> Result<(), DomainError> {
    if (0.0..=MAX_KEYED_FREQ_HZ).contains(&fmax) {
        Ok(())
    } else {
        Err(DomainError::InvalidCeiling(fmax))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rate_checks() {
        assert!(require_sample_rate(8000.0).is_ok());
        assert_eq!(
            require_sample_rate(0.0),
            Err(DomainError::NonPositiveSampleRate(0.0))
        );
        assert!(require_sample_rate(-1.0).is_err());
        assert!(require_sample_rate(f64::NAN).is_err());
        assert!(require_sample_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_cutoff_accepts_zero_and_infinity() {
        assert!(require_cutoff(0.0).is_ok());
        assert!(require_cutoff(f64::INFINITY).is_ok());
        assert!(require_cutoff(-0.5).is_err());
        assert!(require_cutoff(f64::NAN).is_err());
    }

    #[test]
    fn test_ceiling_range() {
        assert!(require_ceiling(0.0).is_ok());
        assert!(require_ceiling(3e13).is_ok());
        assert!(require_ceiling(MAX_KEYED_FREQ_HZ).is_ok());
        assert!(require_ceiling(MAX_KEYED_FREQ_HZ * 4.0).is_err());
        assert!(require_ceiling(f64::INFINITY).is_err());
        assert!(require_ceiling(f64::NAN).is_err());
        assert!(require_ceiling(-1.0).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = DomainError::MismatchedTrace { times: 3, amplitudes: 2 };
        assert_eq!(err.to_string(), "trace has 3 time values but 2 amplitudes");
        let err = DomainError::UnknownSignal("7".into());
        assert_eq!(err.to_string(), "unknown signal \"7\"");
    }
}
