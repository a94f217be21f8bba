use clap::Parser;

mod bootstrap;
mod cli;
mod generate;
mod progress;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("chronicle error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    // Flag mistakes are reported before config is read or a request is made.
    let request = cli.range_request();
    request.validate()?;

    let settings = bootstrap::load_settings(&cli)?;
    tracing::debug!(
        repo = settings.repo.as_str(),
        api_url = settings.api_url.as_str(),
        output = %settings.output.display(),
        "settings loaded"
    );

    generate::handle(&request, &settings, cli.quiet).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CHRONICLE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
