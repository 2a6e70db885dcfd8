use anyhow::Result;
use clap::Parser;
use folio::classify::ClassifierConfig;
use folio::import::{run_import, ImportConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Import book-catalog CSV rows into front-matter documents")]
struct Cli {
    /// Path to the catalog CSV export
    #[arg(default_value = folio::config::DEFAULT_INPUT)]
    input: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> Result<()> {
    let mut config = ImportConfig::new(cli.input);
    config.classifier = ClassifierConfig::from_env();
    if let Some(ref classifier) = config.classifier {
        info!(model = %classifier.model, "AI classification enabled");
    }

    run_import(&config)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
