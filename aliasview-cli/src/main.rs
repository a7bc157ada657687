//! aliasview - print the sampled, replicated and filtered spectra of the
//! signal catalog.

mod cli;
mod report;

use std::process::ExitCode;
use std::thread;

use aliasview::{SignalId, SignalView, ViewConfig};
use clap::Parser;

use cli::{Args, Format};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, String> {
    let config = args.load_config()?;
    let signals = args.signals()?;
    log::info!(
        "analysing {} signal(s) at {} Hz",
        signals.len(),
        config.sample_rate_hz
    );

    let views = build_views(&signals, &config)?;
    match args.format {
        Format::Text => Ok(report::to_text(&views, args.traces)),
        Format::Json => report::to_json(&views, args.traces),
    }
}

/// Build one view per signal, each on its own thread. Views share nothing but
/// the read-only config.
fn build_views(signals: &[SignalId], config: &ViewConfig) -> Result<Vec<SignalView>, String> {
    thread::scope(|scope| {
        let handles: Vec<_> = signals
            .iter()
            .map(|&signal| scope.spawn(move || SignalView::build(signal, config)))
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .map_err(|_| "view worker panicked".to_string())?
                    .map_err(|e| e.to_string())
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_views_keeps_order() {
        let views = build_views(&SignalId::ALL, &ViewConfig::default()).unwrap();
        let ids: Vec<u8> = views.iter().map(|v| v.signal.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_run_json() {
        let args = Args::try_parse_from(["aliasview", "-s", "1", "--format", "json"]).unwrap();
        let output = run(&args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["recovered"], true);
    }

    #[test]
    fn test_run_reports_unknown_signal() {
        let args = Args::try_parse_from(["aliasview", "--signal", "square"]).unwrap();
        assert_eq!(run(&args).unwrap_err(), "unknown signal \"square\"");
    }
}
