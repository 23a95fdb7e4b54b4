use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v` when set.
pub fn init(verbose: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time())
        .try_init()?;

    Ok(())
}

fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "weather_core=info,weather_cli=info",
        2 => "weather_core=debug,weather_cli=debug",
        _ => "trace",
    }
}
