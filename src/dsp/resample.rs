use crate::error::{require_sample_rate, DomainError};
use crate::types::{ContinuousTrace, DiscreteTrace};

/// Sample `trace` on the grid `n_j = j / fs`, `0 <= n_j < t_last`.
///
/// Amplitudes are linearly interpolated between the neighbouring trace points;
/// grid points outside the trace's time range take the nearest boundary value.
pub fn sample(trace: &ContinuousTrace, fs: f64) -> Result<DiscreteTrace, DomainError> {
    require_sample_rate(fs)?;
    let t_last = match trace.last_time() {
        Some(t) if trace.len() >= 2 => t,
        _ => return Err(DomainError::DegenerateTrace(trace.len())),
    };

    let period = 1.0 / fs;
    let mut time = Vec::new();
    let mut amplitude = Vec::new();

    let mut j = 0usize;
    loop {
        let n = j as f64 * period;
        if n >= t_last {
            break;
        }
        time.push(n);
        amplitude.push(interpolate(trace.times(), trace.amplitudes(), n));
        j += 1;
    }

    log::debug!(
        "sampled {} points at {fs} Hz from a {}-point trace",
        time.len(),
        trace.len()
    );
    Ok(DiscreteTrace::from_parts(fs, time, amplitude))
}

/// Linear interpolation of `(times, values)` at `t`, clamped at both ends.
/// `times` must be strictly increasing and non-empty.
fn interpolate(times: &[f64], values: &[f64], t: f64) -> f64 {
    let last = times.len() - 1;
    let idx = times.partition_point(|&x| x <= t);
    if idx == 0 {
        return values[0];
    }
    if idx > last {
        return values[last];
    }

    let (t0, t1) = (times[idx - 1], times[idx]);
    let (s0, s1) = (values[idx - 1], values[idx]);
    let frac = (t - t0) / (t1 - t0);
    s0 + frac * (s1 - s0)
}
