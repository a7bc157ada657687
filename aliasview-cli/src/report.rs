//! Text and JSON rendering of signal views.

use aliasview::{ContinuousTrace, DiscreteTrace, SignalView, Spectrum};
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    signal: u8,
    name: &'static str,
    formula: &'static str,
    sample_rate_hz: f64,
    nyquist_hz: f64,
    ceiling_hz: f64,
    cutoff_hz: f64,
    amplitude_axis: (f64, f64),
    original: &'a Spectrum,
    replicated: &'a Spectrum,
    filtered: &'a Spectrum,
    recovered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    continuous: Option<&'a ContinuousTrace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sampled: Option<&'a DiscreteTrace>,
}

impl<'a> Report<'a> {
    fn new(view: &'a SignalView, traces: bool) -> Self {
        Self {
            signal: view.signal.id(),
            name: view.signal.name(),
            formula: view.signal.formula(),
            sample_rate_hz: view.sample_rate_hz,
            nyquist_hz: view.nyquist_hz,
            ceiling_hz: view.ceiling_hz,
            cutoff_hz: view.cutoff_hz,
            amplitude_axis: view.amplitude_axis,
            original: &view.original,
            replicated: &view.replicated,
            filtered: &view.filtered,
            recovered: view.recovered,
            continuous: traces.then_some(&view.continuous),
            sampled: traces.then_some(&view.sampled),
        }
    }
}

pub fn to_json(views: &[SignalView], traces: bool) -> Result<String, String> {
    let reports: Vec<Report> = views.iter().map(|v| Report::new(v, traces)).collect();
    serde_json::to_string_pretty(&reports).map_err(|e| e.to_string())
}

pub fn to_text(views: &[SignalView], traces: bool) -> String {
    let mut out = String::new();
    for (i, view) in views.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        push_view(&mut out, view, traces);
    }
    out
}

fn push_view(out: &mut String, view: &SignalView, traces: bool) {
    let signal = view.signal;
    out.push_str(&format!(
        "{signal} ({}): x(t) = {}\n",
        signal.name(),
        signal.formula()
    ));
    out.push_str(&format!(
        "  fs {} Hz, Nyquist {} Hz, ceiling {} Hz, cutoff {:.1} Hz\n",
        view.sample_rate_hz, view.nyquist_hz, view.ceiling_hz, view.cutoff_hz
    ));
    let (lo, hi) = view.amplitude_axis;
    out.push_str(&format!(
        "  x(t):    {} points, amplitude axis {lo:.3} .. {hi:.3}\n",
        view.continuous.len()
    ));
    out.push_str(&format!("  x[n]:    {} samples\n", view.sampled.len()));
    out.push_str(&format!("  X(f):    {}\n", format_lines(&view.original)));
    out.push_str(&format!("  Xs(f):   {}\n", format_lines(&view.replicated)));
    out.push_str(&format!("  lowpass: {}\n", format_lines(&view.filtered)));
    out.push_str(if view.recovered {
        "  reconstruction: exact\n"
    } else {
        "  reconstruction: aliased\n"
    });

    if traces {
        out.push_str("  samples:\n");
        for (t, a) in view.sampled.times().iter().zip(view.sampled.amplitudes()) {
            out.push_str(&format!("    {t:.6} s  {a:.4}\n"));
        }
    }
}

fn format_lines(spectrum: &Spectrum) -> String {
    if spectrum.is_empty() {
        return "(none)".to_string();
    }
    spectrum
        .lines()
        .map(|line| format!("{} Hz {:.3}", line.frequency, line.amplitude))
        .collect::<Vec<_>>()
        .join(", ")
}
