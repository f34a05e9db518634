//! Extract command - contact fields from a single card transcription.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use cardscan_core::{CardFieldExtractor, CardParser, ContactCandidate};

use super::load_config;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Transcription file ("-" reads stdin)
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Fail when no company, name, email or phone was found
    #[arg(long)]
    strict: bool,

    /// List the fields that could not be extracted
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let text = read_input(&args.input)?;
    info!("Extracting contact fields from {}", args.input);

    let parser = CardFieldExtractor::with_config(config.extraction);
    let result = parser.parse(&text);

    if args.strict && result.contact.lacks_core_fields() {
        anyhow::bail!("No relevant information could be extracted from {}", args.input);
    }

    let output = format_contact(&result.contact, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    let path = PathBuf::from(input);
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    Ok(fs::read_to_string(&path)?)
}

pub fn format_contact(contact: &ContactCandidate, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(contact)?),
        OutputFormat::Csv => format_csv(contact),
        OutputFormat::Text => Ok(format_text(contact)),
    }
}

fn format_csv(contact: &ContactCandidate) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "company",
        "personName",
        "email",
        "phone",
        "city",
        "postalCode",
    ])?;

    wtr.write_record([
        &contact.company,
        &contact.person_name,
        &contact.email,
        &contact.phone,
        &contact.city,
        &contact.postal_code,
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(contact: &ContactCandidate) -> String {
    let mut output = String::new();

    for (label, value) in [
        ("Company", &contact.company),
        ("Name", &contact.person_name),
        ("Email", &contact.email),
        ("Phone", &contact.phone),
        ("City", &contact.city),
        ("Postal code", &contact.postal_code),
    ] {
        let value = if value.is_empty() { "-" } else { value.as_str() };
        output.push_str(&format!("{:<12} {}\n", format!("{}:", label), value));
    }

    output
}
