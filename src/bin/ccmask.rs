//! CLI tool for the masked card inputs.
//!
//! # Usage
//!
//! ```bash
//! # Format a card number the way the number field displays it
//! ccmask format 378282246310005
//!
//! # Format an expiry date
//! ccmask format --field date 0125
//!
//! # Detect the brand of a (partial) number
//! ccmask detect 3
//!
//! # Replay keystrokes against a field
//! ccmask replay "paste:424211102222 left:5 type:3"
//! ccmask replay --field date "type:011 del del" --output json
//!
//! # Show corrections as they happen
//! ccmask --verbose replay "type:42421"
//! ```

use std::fmt::Debug;
use std::process::ExitCode;

use cc_input_mask::detect::{candidates, classify};
use cc_input_mask::format::{format_card_number, format_date};
use cc_input_mask::script::{parse_script, render_cursor, EditEvent};
use cc_input_mask::{CardDate, CardNumber, DateField, InputMask, MaskedField, NumberField};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "ccmask")]
#[command(author, version, about = "Masked input engine for credit card fields")]
struct Cli {
    /// Log edit cycles and corrections to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format digits the way a field displays them
    Format {
        /// Digits to format (anything else is ignored)
        input: String,

        /// Field kind
        #[arg(short, long, default_value = "number")]
        field: FieldKind,
    },

    /// Detect the card brand of a (partial) number
    Detect {
        /// Card number or prefix
        card_number: String,
    },

    /// Replay an edit script against an empty field
    Replay {
        /// Whitespace-separated edits (type:4242 paste:1234 del left:2 ...)
        script: String,

        /// Field kind
        #[arg(short, long, default_value = "number")]
        field: FieldKind,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldKind {
    Number,
    Date,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Format { input, field } => cmd_format(&input, field, cli.output),
        Commands::Detect { card_number } => cmd_detect(&card_number, cli.output),
        Commands::Replay { script, field } => match field {
            FieldKind::Number => cmd_replay(NumberField::default(), &script, cli.output, |n: &CardNumber| {
                format!("{} ({})", n.masked(), n.brand())
            }),
            FieldKind::Date => cmd_replay(DateField::default(), &script, cli.output, |d: &CardDate| d.to_string()),
        },
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_format(input: &str, field: FieldKind, output: OutputFormat) -> ExitCode {
    let formatted = match field {
        FieldKind::Number => format_card_number(input),
        FieldKind::Date => format_date(input),
    };

    match output {
        OutputFormat::Text => println!("{}", formatted),
        OutputFormat::Json => {
            let value = match field {
                FieldKind::Number => {
                    let brand = classify(&formatted.replace(' ', ""));
                    json!({ "text": formatted, "brand": brand })
                }
                FieldKind::Date => json!({ "text": formatted }),
            };
            println!("{}", value);
        }
    }
    ExitCode::SUCCESS
}

fn cmd_detect(card_number: &str, output: OutputFormat) -> ExitCode {
    let digits: String = card_number.chars().filter(|c| c.is_ascii_digit()).collect();
    let brand = classify(&digits);
    let format = brand.format();
    let possible = candidates(&digits);

    match output {
        OutputFormat::Text => {
            println!("Detected Brand: {}", brand.name());
            println!("Length: {}-{}", format.min_length, format.max_length);
            println!("Groups: {:?}", format.groups);
            if possible.len() > 1 {
                let names: Vec<&str> = possible.iter().map(|b| b.name()).collect();
                println!("Possible Brands: {}", names.join(", "));
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                json!({
                    "brand": brand,
                    "format": format,
                    "candidates": possible,
                })
            );
        }
    }
    ExitCode::SUCCESS
}

#[derive(Serialize)]
struct Step {
    edit: String,
    text: String,
    cursor: usize,
}

fn cmd_replay<M, D>(mut field: MaskedField<M>, script: &str, output: OutputFormat, describe: D) -> ExitCode
where
    M: InputMask,
    M::Value: Serialize + Clone + Debug + 'static,
    D: Fn(&M::Value) -> String,
{
    let events = match parse_script(script) {
        Ok(events) => events,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut steps = Vec::with_capacity(events.len());
    let mut failure = None;
    for event in &events {
        if let Err(e) = event.apply(&mut field) {
            failure = Some((event, e));
            break;
        }
        steps.push(Step {
            edit: event.to_string(),
            text: field.text().to_string(),
            cursor: field.cursor(),
        });
    }
    let value = field.value();

    match output {
        OutputFormat::Text => {
            for step in &steps {
                println!("{:<24} {}", step.edit, render_cursor(&step.text, step.cursor));
            }
            println!("Value: {}", describe(&value));
        }
        OutputFormat::Json => {
            println!(
                "{}",
                json!({
                    "steps": steps,
                    "text": field.text(),
                    "cursor": field.cursor(),
                    "value": value,
                    "error": failure.as_ref().map(|(_, e)| e.to_string()),
                })
            );
        }
    }

    match failure {
        Some((event, e)) => {
            eprintln!("Error: {} failed: {}", format_event(event), e);
            ExitCode::FAILURE
        }
        None => ExitCode::SUCCESS,
    }
}

fn format_event(event: &EditEvent) -> String {
    format!("'{}'", event)
}
