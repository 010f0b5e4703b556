//! eventline CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use eventline_core::{TracingConfig, init_tracing};

use eventline_client::cli::{Cli, Command, ConfigAction};
use eventline_client::commands;
use eventline_client::config::ClientConfig;
use eventline_client::error::{ClientError, ClientResult};
use eventline_client::store::EventStore;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let tracing_config = if cli.debug || config.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::cli()
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("warning: {}", e);
    }

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> ClientResult<ClientConfig> {
    let config = if let Some(ref path) = cli.config {
        ClientConfig::load_from(path)
    } else {
        ClientConfig::load()
    };
    config.map_err(ClientError::Config)
}

fn run(cli: Cli, config: ClientConfig) -> ClientResult<()> {
    let format = cli.output_format();
    let events_path = cli.events.clone().unwrap_or_else(|| config.events_path());

    match cli.command {
        Some(Command::Parse(ref args)) => commands::parse::run(args, &events_path, format),
        Some(Command::Timeline { range }) => {
            let store = EventStore::load(&events_path)?;
            let range = range.unwrap_or(config.display.default_range);
            commands::timeline::run(&store, range, &config.display.format_options(), format)
        }
        Some(Command::List) => {
            let store = EventStore::load(&events_path)?;
            commands::events::list(&store, format)
        }
        Some(Command::Show { ref id, open }) => {
            let store = EventStore::load(&events_path)?;
            commands::events::show(&store, id, open, format)
        }
        Some(Command::Status { ref id, status }) => {
            let mut store = EventStore::load(&events_path)?;
            commands::events::set_status(&mut store, id, status)
        }
        Some(Command::Remove { ref id }) => {
            let mut store = EventStore::load(&events_path)?;
            commands::events::remove(&mut store, id)
        }
        Some(Command::Config { ref action }) => match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(&config),
        },
        None => {
            let store = EventStore::load(&events_path)?;
            commands::timeline::run(
                &store,
                config.display.default_range,
                &config.display.format_options(),
                format,
            )
        }
    }
}
