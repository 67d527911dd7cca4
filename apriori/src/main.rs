use apriori::cli::{run, Cli};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = Cli::parse_args();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        error!(error = %err, "apriori failed");
        std::process::exit(1);
    }
}
