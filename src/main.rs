use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use mbus_codec::logging::{log_bytes_hex, log_debug};
use mbus_codec::{
    bytes_to_hex_string, decode_hex_strict, format_hex_compact, hex_string_to_bytes, init_logger,
    to_manufacturer_code, to_manufacturer_name_i32, ManufacturerCode,
};
use serde_json::json;

#[derive(Parser)]
#[command(name = "mbus-codec")]
#[command(about = "Hex and manufacturer code conversions for M-Bus telegrams")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a hex string into bytes
    HexDecode {
        hex: String,
        /// Reject characters that are not hex digits
        #[arg(short, long)]
        strict: bool,
    },
    /// Encode bytes (decimal or 0x-prefixed) as an uppercase hex string
    HexEncode {
        #[arg(required = true)]
        bytes: Vec<String>,
    },
    /// Pack a 3-letter manufacturer code into its 16-bit id
    ManEncode {
        code: String,
        /// Accept only ASCII letters
        #[arg(short, long)]
        strict: bool,
    },
    /// Unpack a manufacturer id (decimal or 0x-prefixed) into its 3-letter code
    ManDecode { id: String },
}

fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::HexDecode { hex, strict } => {
            let decoded = if strict {
                decode_hex_strict(&hex)
            } else {
                hex_string_to_bytes(&hex)
            };
            let bytes = decoded.with_context(|| format!("cannot decode hex string {hex:?}"))?;
            log_bytes_hex("Decoded", &bytes);

            if cli.json {
                println!("{}", json!({ "hex": hex, "bytes": bytes }));
            } else {
                println!("{}", format_hex_compact(&bytes));
            }
        }
        Commands::HexEncode { bytes } => {
            let bytes = bytes
                .iter()
                .map(|arg| parse_byte(arg))
                .collect::<Result<Vec<u8>>>()?;
            let hex = bytes_to_hex_string(&bytes);

            if cli.json {
                println!("{}", json!({ "hex": hex, "bytes": bytes }));
            } else {
                println!("{hex}");
            }
        }
        Commands::ManEncode { code, strict } => {
            let packed = if strict {
                code.parse::<ManufacturerCode>().map(|c| c.id())
            } else {
                to_manufacturer_code(&code).map(|id| id as u16)
            };
            let id = packed.with_context(|| format!("cannot encode manufacturer code {code:?}"))?;
            log_debug(&format!("Manufacturer {code} packed to 0x{id:04X}"));

            if cli.json {
                println!("{}", json!({ "code": code, "id": id }));
            } else {
                println!("0x{id:04X} ({id})");
            }
        }
        Commands::ManDecode { id } => {
            let value = parse_number(&id)?;
            let value = i32::try_from(value)
                .with_context(|| format!("manufacturer id {id} does not fit in 32 bits"))?;
            let name = to_manufacturer_name_i32(value);
            let code = ManufacturerCode::new(value as u16);

            if cli.json {
                println!(
                    "{}",
                    json!({
                        "id": code,
                        "name": name,
                        "valid": code.is_valid(),
                        "soft_address": code.is_soft_address(),
                    })
                );
            } else {
                println!("{name}");
            }
        }
    }

    Ok(())
}

fn parse_number(arg: &str) -> Result<i64> {
    let parsed = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(digits) => i64::from_str_radix(digits, 16),
        None => arg.parse::<i64>(),
    };
    parsed.with_context(|| format!("invalid number {arg:?}"))
}

fn parse_byte(arg: &str) -> Result<u8> {
    let value = parse_number(arg)?;
    match u8::try_from(value) {
        Ok(b) => Ok(b),
        Err(_) => bail!("{arg} is not a byte value (0-255)"),
    }
}
