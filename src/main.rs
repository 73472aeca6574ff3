use clap::Parser;
use fieldmask::error::FieldError;
use fieldmask::infrastructure::locale::Locale;
use fieldmask::interfaces::config::{FieldConfig, FieldKind, InitialValue};
use fieldmask::interfaces::csv::event_reader::EventReader;
use fieldmask::interfaces::csv::state_writer::StateWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Replays a keystroke script through a masked or currency field and prints
/// the field state after every event.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Edit script CSV file (`event,text`)
    script: PathBuf,

    /// Mask template for a masked field, e.g. "999.999.999-99"
    #[arg(long, conflicts_with = "currency")]
    mask: Option<String>,

    /// Character marking a digit slot in the mask
    #[arg(long)]
    placeholder_char: Option<char>,

    /// Replay against a currency field
    #[arg(long)]
    currency: bool,

    /// Locale used by currency fields
    #[arg(long, value_enum)]
    locale: Option<Locale>,

    /// Initial value: masked text, or cents for currency fields
    #[arg(long)]
    value: Option<String>,

    /// JSON field configuration. Flags override its entries.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn resolve_config(cli: &Cli) -> fieldmask::error::Result<FieldConfig> {
    let mut config = match (&cli.config, &cli.mask, cli.currency) {
        (Some(path), _, _) => FieldConfig::from_path(path)?,
        (None, Some(mask), _) => FieldConfig::mask(mask.clone()),
        (None, None, true) => FieldConfig::currency(Locale::default()),
        (None, None, false) => {
            return Err(FieldError::ConfigError(
                "missing field kind: pass --mask, --currency or --config".to_string(),
            ));
        }
    };

    if let Some(mask) = &cli.mask {
        config.kind = FieldKind::Mask;
        config.mask = Some(mask.clone());
    }
    if cli.currency {
        config.kind = FieldKind::Currency;
    }
    if let Some(placeholder) = cli.placeholder_char {
        config.placeholder_char = placeholder;
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Some(value) = &cli.value {
        config.value = Some(InitialValue::Text(value.clone()));
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli).into_diagnostic()?;
    tracing::info!(kind = ?config.kind, mask = ?config.mask, "mounting field");
    let mut session = config.build().into_diagnostic()?;

    let file = File::open(&cli.script).into_diagnostic()?;
    let reader = EventReader::new(file);

    let mut events = Vec::new();
    for event_result in reader.events() {
        match event_result {
            Ok(event) => events.push(event),
            Err(e) => {
                eprintln!("Error reading event: {}", e);
            }
        }
    }

    let states = session.replay(&events);

    let stdout = io::stdout();
    let mut writer = StateWriter::new(stdout.lock());
    writer.write_states(states).into_diagnostic()?;

    tracing::info!(steps = events.len(), display = session.display(), "replay finished");
    Ok(())
}
