use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use solomon::{GaloisField, GeneratorBuilder, Polynomial};

#[derive(Parser, Debug)]
#[command(
    name = "solomon",
    about = "Reed-Solomon parity generation over table-driven Galois fields"
)]
struct Cli {
    /// Bit-packed irreducible modulus polynomial (e.g. 0x11D).
    #[arg(long, default_value = "0x11D", value_parser = parse_u32)]
    modulus: u32,

    /// Field size (number of elements).
    #[arg(long, default_value_t = 256)]
    size: usize,

    /// Primitive generator element.
    #[arg(long, default_value = "2", value_parser = parse_u16)]
    generator: u16,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute parity codewords for a message (highest-degree term first).
    Parity {
        /// Message codewords, decimal or 0x-prefixed hex (e.g. 0x40 0xD2).
        codewords: Vec<String>,
        /// Number of parity codewords to generate.
        #[arg(long, default_value_t = 10)]
        parity_len: usize,
    },
    /// Print the generator polynomial of the given degree.
    Generator {
        /// Degree of the generator polynomial.
        degree: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.size < 2 || !cli.size.is_power_of_two() {
        bail!("field size must be a power of two, got {}", cli.size);
    }
    if (cli.generator as usize) >= cli.size {
        bail!(
            "generator {} outside field of size {}",
            cli.generator,
            cli.size
        );
    }

    let field = GaloisField::new(cli.modulus, cli.size, cli.generator)
        .context("failed to construct field")?;
    let builder = GeneratorBuilder::new(Arc::clone(&field));

    match cli.command {
        Commands::Parity {
            codewords,
            parity_len,
        } => {
            if codewords.is_empty() {
                bail!("at least one message codeword is required");
            }

            // Transmission order puts the highest-degree term first;
            // polynomial coefficients are stored constant term first.
            let mut coeffs = Vec::with_capacity(codewords.len());
            for word in codewords.iter().rev() {
                let value =
                    parse_u16(word).map_err(|e| anyhow::anyhow!("codeword {word:?}: {e}"))?;
                if (value as usize) >= cli.size {
                    bail!("codeword {word} outside field of size {}", cli.size);
                }
                coeffs.push(field.element(value));
            }

            let message = Polynomial::new(coeffs).context("invalid message polynomial")?;
            let parity = builder.parity(&message, parity_len)?;

            let rendered: Vec<String> = parity
                .iter()
                .map(|e| format!("0x{:02X}", e.value()))
                .collect();
            println!("{}", rendered.join(" "));
        }
        Commands::Generator { degree } => {
            let generator = builder.generator_poly(degree)?;
            println!("{generator}");
        }
    }

    Ok(())
}

fn parse_u32(raw: &str) -> Result<u32, String> {
    parse_radix(raw).and_then(|v| {
        u32::try_from(v).map_err(|_| format!("value {raw} does not fit in 32 bits"))
    })
}

fn parse_u16(raw: &str) -> Result<u16, String> {
    parse_radix(raw).and_then(|v| {
        u16::try_from(v).map_err(|_| format!("value {raw} does not fit in 16 bits"))
    })
}

fn parse_radix(raw: &str) -> Result<u64, String> {
    let raw = raw.trim();
    let parsed = if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else {
        raw.parse()
    };
    parsed.map_err(|e| format!("invalid number {raw:?}: {e}"))
}
