//! bikeshare - Explore US bike share trip data from local CSV files

use bikeshare::{
    cli::{Cli, Command, RawArgs, ReportArgs},
    config::Config,
    controller::{Controller, write_report},
    error::{BikeshareError, Result},
};
use bikeshare_core::normalize::normalize_city;
use bikeshare_data::DataLoader;
use bikeshare_terminal::output::get_formatter;
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(verbose: bool) {
    // --verbose overrides RUST_LOG
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("bikeshare=debug,bikeshare_data=debug,bikeshare_core=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn loader_for(config: &Config) -> DataLoader {
    DataLoader::new(config.data_dir.clone()).with_progress(config.show_progress)
}

fn run_interactive(config: &Config) -> Result<()> {
    info!("Starting interactive session");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = Controller::new(
        stdin.lock(),
        stdout.lock(),
        loader_for(config),
        get_formatter(config.json),
    )
    .with_timing(config.show_timing);
    controller.run()
}

fn run_report(config: &Config, args: &ReportArgs) -> Result<()> {
    let (city, filter) = args.selection()?;
    info!("Running report for {} with {}", city, filter);

    let table = loader_for(config).load_filtered(city, &filter)?;
    let formatter = get_formatter(config.json);
    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, formatter.as_ref(), &table, &filter, config.show_timing)
}

fn run_raw(config: &Config, args: &RawArgs) -> Result<()> {
    let city = normalize_city(&args.city)?;
    info!("Printing {} raw rows for {}", args.rows, city);

    let raw = loader_for(config).load_raw(city)?;
    let rows = &raw.rows[..args.rows.min(raw.len())];
    let formatter = get_formatter(config.json);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", formatter.format_raw_rows(&raw.headers, 0, rows))?;
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;

    match &cli.command {
        None => run_interactive(&config),
        Some(Command::Report(args)) => run_report(&config, args),
        Some(Command::Raw(args)) => run_raw(&config, args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(BikeshareError::InputClosed) => {
            info!("Input closed, exiting");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {}", "ERROR".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
