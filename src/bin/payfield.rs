//! CLI tool for payment field validation and formatting.
//!
//! # Usage
//!
//! ```bash
//! # Validate a card number
//! payfield card "4539 2607 8095 2497"
//!
//! # Validate an IBAN, JSON output
//! payfield --output json iban "DE91 1000 0000 0123 4567 89"
//!
//! # Validate an expiry date against a fixed month
//! payfield expiry 04/27 --today 2025-04
//!
//! # Group text with a custom style
//! payfield format 370355496876137 --style groups:4,6,5:15
//!
//! # Replay keystrokes through a field ('<' is backspace)
//! payfield type card 4539260<<0
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=payfield=trace`).

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payfield::field::{BicField, CardNumberField, CvvField, ExpiryField, IbanField, InputField};
use payfield::{
    BicInput, CardNumberInput, EditSession, GroupingStyle, IbanInput, PaymentInput, YearMonth,
};

#[derive(Parser)]
#[command(name = "payfield")]
#[command(
    author,
    version,
    about = "Validation and as-you-type formatting for payment fields"
)]
struct Cli {
    /// Separator between digit groups
    #[arg(short, long, global = true, default_value = " ")]
    separator: String,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a card number
    Card {
        /// Card number (whitespace allowed)
        number: String,
    },

    /// Validate an IBAN
    Iban {
        /// IBAN (whitespace allowed)
        iban: String,
    },

    /// Validate an expiry date (MM/YY)
    Expiry {
        /// Expiry date
        date: String,

        /// Reference month as YYYY-MM (defaults to the current month)
        #[arg(short, long)]
        today: Option<YearMonth>,
    },

    /// Validate a CVV
    Cvv {
        /// CVV to validate
        cvv: String,
    },

    /// Validate a BIC
    Bic {
        /// BIC to validate
        bic: String,
    },

    /// Group text into blocks
    Format {
        /// Text to group
        text: String,

        /// fixed:<size>:<max> or groups:<a,b,c>:<max>
        #[arg(long, default_value = "fixed:4:16", value_parser = parse_style)]
        style: GroupingStyle,
    },

    /// Type keys into a field and print the display after every key
    Type {
        /// Field to type into
        field: FieldArg,

        /// Keys to type ('<' is backspace)
        keys: String,

        /// Reference month for the expiry field, as YYYY-MM
        #[arg(short, long)]
        today: Option<YearMonth>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldArg {
    Card,
    Iban,
    Expiry,
    Cvv,
    Bic,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let output = cli.output;

    let valid = match cli.command {
        Commands::Card { number } => cmd_card(&number, &cli.separator, output),
        Commands::Iban { iban } => cmd_iban(&iban, &cli.separator, output),
        Commands::Expiry { date, today } => cmd_expiry(&date, expiry_field(today), output),
        Commands::Cvv { cvv } => cmd_cvv(&cvv, output),
        Commands::Bic { bic } => cmd_bic(&bic, output),
        Commands::Format { text, style } => {
            cmd_format(&text, &style, &cli.separator, output);
            true
        }
        Commands::Type { field, keys, today } => match field {
            FieldArg::Card => cmd_type(CardNumberField::new(cli.separator), &keys, output),
            FieldArg::Iban => cmd_type(IbanField::new(cli.separator), &keys, output),
            FieldArg::Expiry => cmd_type(expiry_field(today), &keys, output),
            FieldArg::Cvv => cmd_type(CvvField, &keys, output),
            FieldArg::Bic => cmd_type(BicField, &keys, output),
        },
    };

    std::process::exit(if valid { 0 } else { 1 });
}

fn expiry_field(today: Option<YearMonth>) -> ExpiryField {
    match today {
        Some(today) => ExpiryField::with_today(today),
        None => ExpiryField::new(),
    }
}

/// Parses `fixed:<size>:<max>` or `groups:<a,b,c>:<max>`.
fn parse_style(s: &str) -> Result<GroupingStyle, String> {
    let mut parts = s.splitn(3, ':');
    let (Some(kind), Some(sizes), Some(max)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected <kind>:<sizes>:<max>, got '{}'", s));
    };

    let maximum_length: usize = max
        .parse()
        .map_err(|_| format!("invalid maximum length '{}'", max))?;

    match kind {
        "fixed" => {
            let size = sizes
                .parse()
                .map_err(|_| format!("invalid group size '{}'", sizes))?;
            Ok(GroupingStyle::fixed(size, maximum_length))
        }
        "groups" => {
            let sizes = sizes
                .split(',')
                .filter(|size| !size.is_empty())
                .map(|size| {
                    size.parse()
                        .map_err(|_| format!("invalid group size '{}'", size))
                })
                .collect::<Result<Vec<usize>, _>>()?;
            Ok(GroupingStyle::variable(sizes, maximum_length))
        }
        other => Err(format!("unknown style '{}' (expected fixed or groups)", other)),
    }
}

fn print_invalid(output: OutputFormat, message: &str) {
    match output {
        OutputFormat::Text => {
            println!("Valid: no");
            println!("Error: {}", message);
        }
        OutputFormat::Json => {
            println!("{}", json!({ "valid": false, "error": message }));
        }
    }
}

fn cmd_card(number: &str, separator: &str, output: OutputFormat) -> bool {
    let Some(input) = CardNumberInput::from_text(number, separator) else {
        print_invalid(output, "no card number given");
        return false;
    };

    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if input.is_valid() { "yes" } else { "no" });
            println!("Type: {}", input.card_type());
            println!("Result: {}", input.validation_result());
            println!("Formatted: {}", input.formatted_number());
            println!("Masked: {}", input.masked());
            println!("Masked (BIN): {}", input.masked_with_bin());
        }
        OutputFormat::Json => {
            println!(
                "{}",
                json!({
                    "valid": input.is_valid(),
                    "cardType": input.card_type(),
                    "validationResult": input.validation_result(),
                    "lastFour": input.last_four(),
                    "masked": input.masked(),
                })
            );
        }
    }

    input.is_valid()
}

fn cmd_iban(iban: &str, separator: &str, output: OutputFormat) -> bool {
    let Some(input) = IbanInput::from_text(iban) else {
        print_invalid(output, "no IBAN given");
        return false;
    };

    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if input.is_valid() { "yes" } else { "no" });
            println!("Result: {}", input.validation_result());
            println!("Formatted: {}", IbanField::style().format(input.iban(), separator));
        }
        OutputFormat::Json => println!("{}", to_json(&input)),
    }

    input.is_valid()
}

fn cmd_expiry(date: &str, field: ExpiryField, output: OutputFormat) -> bool {
    let Some(input) = field.input(date) else {
        print_invalid(output, "no expiry date given");
        return false;
    };

    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if input.is_valid() { "yes" } else { "no" });
            println!("Expiry: {}", input.expiry_date());
            if let (Some(month), Some(year)) = (input.month(), input.year()) {
                println!("Month: {:02}", month);
                println!("Year: {}", year);
            }
            println!("Checked Against: {}", field.today());
        }
        OutputFormat::Json => println!("{}", to_json(&input)),
    }

    input.is_valid()
}

fn cmd_cvv(cvv: &str, output: OutputFormat) -> bool {
    let Some(input) = CvvField.input(cvv) else {
        print_invalid(output, "no cvv given");
        return false;
    };

    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if input.is_valid() { "yes" } else { "no" });
            println!("Length: {} digits", input.cvv().chars().count());
        }
        OutputFormat::Json => {
            println!(
                "{}",
                json!({ "valid": input.is_valid(), "length": input.cvv().chars().count() })
            );
        }
    }

    input.is_valid()
}

fn cmd_bic(bic: &str, output: OutputFormat) -> bool {
    let Some(input) = BicInput::from_text(bic) else {
        print_invalid(output, "no BIC given");
        return false;
    };

    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if input.is_valid() { "yes" } else { "no" });
            println!("BIC: {}", input.bic());
        }
        OutputFormat::Json => println!("{}", to_json(&input)),
    }

    input.is_valid()
}

fn cmd_format(text: &str, style: &GroupingStyle, separator: &str, output: OutputFormat) {
    let formatted = style.format(text, separator);
    match output {
        OutputFormat::Text => println!("{}", formatted),
        OutputFormat::Json => println!("{}", json!({ "formatted": formatted })),
    }
}

fn cmd_type<F: InputField>(field: F, keys: &str, output: OutputFormat) -> bool {
    let mut session = EditSession::new(field);
    let steps = session.replay(keys);
    let valid = session.input().is_some_and(|input| input.is_valid());

    match output {
        OutputFormat::Text => {
            for (key, step) in keys.chars().zip(&steps) {
                println!("{}  \"{}\"", key, step);
            }
            println!("Valid: {}", if valid { "yes" } else { "no" });
        }
        OutputFormat::Json => {
            println!("{}", json!({ "steps": steps, "valid": valid }));
        }
    }

    valid
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| json!({ "error": e.to_string() }).to_string())
}
