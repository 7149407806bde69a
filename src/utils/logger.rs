use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// `RUST_LOG` wins when set. Otherwise `verbose` forces debug for this crate,
/// then the configured level applies.
pub fn filter_for(level: Option<&str>, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("daily_secrets=debug,info")
        } else {
            EnvFilter::new(format!("daily_secrets={}", level.unwrap_or("info")))
        }
    })
}

pub fn init_logger(format: LogFormat, filter: EnvFilter) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init(),
        // one JSON object per line for log shippers
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init(),
    }
}

pub fn init_cli_logger(verbose: bool) {
    init_logger(LogFormat::Compact, filter_for(None, verbose));
}
