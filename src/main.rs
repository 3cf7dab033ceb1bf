mod logging;

use clap::{Parser, Subcommand, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use testgen::bic::bic_supported_countries;
use testgen::iban::{iban_length, iban_supported_countries};
use testgen::tax_id::TaxIdType;
use testgen::{generate_batch, identifier_kinds, render_text, BatchRequest, GenerateParams, GeneratedRecord};

#[derive(Parser)]
#[command(name = "testgen")]
#[command(about = "Synthetic test identifier generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Generate(GenerateArgs),
    List(ListArgs),
}

#[derive(Parser)]
struct GenerateArgs {
    /// Identifier kind, e.g. iban, bic, tax-id, cuidv2, uuidv4 or a tax-ID type key.
    #[arg(long)]
    kind: String,
    #[arg(long)]
    country: Option<String>,
    #[arg(long = "type")]
    tax_id_type: Option<String>,
    #[arg(long)]
    length: Option<usize>,
    #[arg(long, default_value_t = 1)]
    amount: usize,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    output: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Parser)]
struct ListArgs {
    #[arg(long, value_enum)]
    registry: Option<Registry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Registry {
    Kinds,
    Iban,
    Bic,
    TaxId,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    logging::init_logging("testgen")?;
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::List(args) => run_list(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let seed = args.seed.unwrap_or_else(random_seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let request = BatchRequest {
        kind: args.kind,
        params: GenerateParams {
            country: args.country,
            tax_id_type: args.tax_id_type,
            length: args.length,
        },
        amount: args.amount,
    };

    log::info!(
        "Generating {} x {} (seed {})",
        request.amount,
        request.kind,
        seed
    );
    let start = Instant::now();
    let records = generate_batch(&mut rng, &request).map_err(|err| err.to_string())?;
    let elapsed = start.elapsed();

    match args.format {
        OutputFormat::Text => write_text(args.output.as_deref(), &records)?,
        OutputFormat::Csv => write_csv(args.output.as_deref(), &records)?,
    }

    let failed = records.iter().filter(|record| !record.is_ok()).count();
    log::info!(
        "generated {} of {} {} identifier(s) in {} ms, seed {}",
        records.len() - failed,
        records.len(),
        request.kind,
        elapsed.as_millis(),
        seed
    );
    if let Some(path) = &args.output {
        log::info!("output {}", path.display());
    }
    Ok(())
}

fn run_list(args: ListArgs) -> Result<(), String> {
    let registries = match args.registry {
        Some(registry) => vec![registry],
        None => vec![Registry::Kinds, Registry::Iban, Registry::Bic, Registry::TaxId],
    };

    let mut lines = Vec::new();
    for registry in registries {
        match registry {
            Registry::Kinds => {
                for (key, name) in identifier_kinds() {
                    lines.push(format!("{key}\t{name}"));
                }
            }
            Registry::Iban => {
                for country in iban_supported_countries() {
                    let length = iban_length(country.iso_code).unwrap_or_default();
                    lines.push(format!("{}\t{}\t{}", country.iso_code, country.display_name(), length));
                }
            }
            Registry::Bic => {
                for country in bic_supported_countries() {
                    lines.push(format!("{}\t{}", country.iso_code, country.display_name()));
                }
            }
            Registry::TaxId => {
                for tax_id_type in TaxIdType::ALL {
                    lines.push(format!("{}\t{}", tax_id_type.key(), tax_id_type.display_name()));
                }
            }
        }
    }

    println!("{}", lines.join("\n"));
    Ok(())
}

fn random_seed() -> u64 {
    let mut rng = rand::rngs::OsRng;
    rng.gen()
}

fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>, String> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|err| err.to_string())?;
            }
            let file = File::create(path).map_err(|err| err.to_string())?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

fn write_text(output: Option<&Path>, records: &[GeneratedRecord]) -> Result<(), String> {
    let mut writer = open_output(output)?;
    writeln!(writer, "{}", render_text(records)).map_err(|err| err.to_string())?;
    writer.flush().map_err(|err| err.to_string())
}

fn write_csv(output: Option<&Path>, records: &[GeneratedRecord]) -> Result<(), String> {
    let mut writer = csv::Writer::from_writer(open_output(output)?);
    for record in records {
        writer.serialize(record).map_err(|err| err.to_string())?;
    }
    writer.flush().map_err(|err| err.to_string())
}
