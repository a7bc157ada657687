//! Command-line argument parsing.

use std::path::PathBuf;

use aliasview::{SignalId, ViewConfig};
use clap::{Parser, ValueEnum};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "aliasview")]
#[command(
    about = "Show how sampling aliases the catalog signals and what an ideal lowpass recovers",
    long_about = None
)]
pub struct Args {
    /// Signal to analyse: an id (1-4), a name such as `wide_tones`, or `all`
    #[arg(long, short, value_name = "SIGNAL", default_value = "all")]
    pub signal: String,

    /// JSON file with configuration overrides
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Sampling rate
    #[arg(long, value_name = "HZ")]
    pub sample_rate: Option<f64>,

    /// Replicated-spectrum ceiling, applied to every signal
    #[arg(long, value_name = "HZ")]
    pub ceiling: Option<f64>,

    /// Lowpass cutoff as a multiple of the signal's highest tone
    #[arg(long, value_name = "FACTOR")]
    pub cutoff_factor: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Include time-domain traces (sampled only in text, both in JSON)
    #[arg(long)]
    pub traces: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl Args {
    /// Signals selected by `--signal`.
    pub fn signals(&self) -> Result<Vec<SignalId>, String> {
        if self.signal.trim().eq_ignore_ascii_case("all") {
            return Ok(SignalId::ALL.to_vec());
        }
        self.signal
            .parse::<SignalId>()
            .map(|signal| vec![signal])
            .map_err(|e| e.to_string())
    }

    /// Read the config file (if any), apply flag overrides and validate.
    pub fn load_config(&self) -> Result<ViewConfig, String> {
        let base = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| format!("{}: {e}", path.display()))?;
                ViewConfig::from_json(&text).map_err(|e| format!("{}: {e}", path.display()))?
            }
            None => ViewConfig::default(),
        };
        let config = self.apply_overrides(base);
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }

    fn apply_overrides(&self, mut config: ViewConfig) -> ViewConfig {
        if let Some(fs) = self.sample_rate {
            config.sample_rate_hz = fs;
        }
        if let Some(ceiling) = self.ceiling {
            config.spectrum_ceiling_hz = ceiling;
            config.dense_spectrum_ceiling_hz = ceiling;
        }
        if let Some(factor) = self.cutoff_factor {
            config.cutoff_factor = factor;
        }
        config
    }
}
