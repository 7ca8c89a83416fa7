use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paydispatch::application::dispatcher::PaymentProviderService;
use paydispatch::config::{DispatcherConfig, LoggerChoice};
use paydispatch::infrastructure::registry::ProviderRegistry;
use paydispatch::infrastructure::system::{SYSTEM_PROVIDER_ID, SystemProvider};
use paydispatch::interfaces::console::SessionConsole;
use paydispatch::interfaces::csv::command_reader::CommandReader;
use paydispatch::interfaces::csv::outcome_writer::OutcomeWriter;
use paydispatch::logging::init_tracing;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input CSV of session commands (op, provider, session, amount, currency)
    input: PathBuf,

    /// Discard dispatcher diagnostics instead of logging them.
    #[arg(long)]
    quiet: bool,

    /// Tracing filter directive, e.g. `paydispatch=debug`.
    #[arg(long)]
    log_filter: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = DispatcherConfig::default();
    if cli.quiet {
        config.logger = LoggerChoice::Noop;
    }
    if let Some(filter) = cli.log_filter {
        config.log_filter = filter;
    }
    if config.logger == LoggerChoice::Tracing {
        init_tracing(&config.log_filter);
    }

    let registry = ProviderRegistry::builder()
        .register(SYSTEM_PROVIDER_ID, Arc::new(SystemProvider::new()))
        .into_diagnostic()?
        .build();
    let mut console = SessionConsole::new(PaymentProviderService::from_config(registry, &config));

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());

    for cmd_result in reader.commands() {
        match cmd_result {
            Ok(cmd) => match console.execute(cmd).await {
                Ok(outcome) => writer.write(&outcome).into_diagnostic()?,
                Err(e) => eprintln!("Error processing command: {}", e),
            },
            Err(e) => {
                eprintln!("Error reading command: {}", e);
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
