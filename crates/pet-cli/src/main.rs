use anyhow::Context;
use clap::Parser;
use pet_config::PetConfig;

mod cli;
mod commands;
mod context;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("petstore error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    let config = PetConfig::load_with_dotenv().context("failed to load petstore configuration")?;
    init_tracing(flags.quiet, flags.verbose, &config.general.log_level)?;

    if cli.command.is_stub() {
        let format = output::resolve_format(flags.format, config.general.pretty);
        return commands::stub::run(&cli.command, format);
    }

    let ctx = context::AppContext::new(&config, &flags);
    tracing::debug!(path = %ctx.store.path().display(), "using pet storage");
    commands::dispatch::dispatch(&cli.command, &ctx)
}

fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PETSTORE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
