//! 32-bit datapath ALU driver.
//!
//! This binary provides a single entry point for exercising the ALU model. It performs:
//! 1. **Single operation:** Compute one operation on an operand pair, with carry-in.
//! 2. **Operation table:** Sweep every operation over one operand pair.
//! 3. **Vector run:** Execute a JSON file of operation vectors in one pass.
//!
//! Output is human-readable by default; every mode takes `--json` for machine
//! consumption. Diagnostics honor `RUST_LOG` and go to stderr, so stdout stays
//! clean for results.

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use std::{fs, process};

use alusim_core::{Alu, AluOp, Flags, OpDecodeError};

#[derive(Parser, Debug)]
#[command(
    name = "alusim",
    version,
    about = "32-bit datapath ALU simulator",
    long_about = "Compute single operations, sweep the whole operation table, or run JSON vector files against the flag-accurate ALU model.\n\nOperands accept decimal or 0x hexadecimal. Pass --json for machine-readable output.\n\nExamples:\n  alusim compute add 15 5\n  alusim compute sub 0x8000_0000 1 --json\n  alusim table 0xFFFFFFFF 1\n  alusim vectors batch.json --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute one operation on a pair of operands.
    Compute {
        /// Operation mnemonic (add, sub, and, or, xor, sll, srl, slt, mul,
        /// div, inc, dec, not, equal).
        #[arg(value_parser = parse_op)]
        op: AluOp,

        /// First operand (decimal or 0x hexadecimal).
        #[arg(value_parser = parse_operand)]
        a: u32,

        /// Second operand; the shift distance for sll/srl.
        #[arg(value_parser = parse_operand)]
        b: u32,

        /// Assert the carry-in wire (the borrow-in, for sub).
        #[arg(long)]
        carry_in: bool,

        /// Emit the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run every operation on one operand pair.
    Table {
        /// First operand (decimal or 0x hexadecimal).
        #[arg(value_parser = parse_operand)]
        a: u32,

        /// Second operand (decimal or 0x hexadecimal).
        #[arg(value_parser = parse_operand)]
        b: u32,

        /// Assert the carry-in wire for the add/sub rows.
        #[arg(long)]
        carry_in: bool,

        /// Emit the table as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run a JSON vector file: an array of {"op", "a", "b", "carry_in"?} objects.
    Vectors {
        /// Path to the vector file.
        file: String,

        /// Emit results as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// One input vector, as read from a vector file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct Vector {
    op: AluOp,
    a: u32,
    b: u32,
    #[serde(default)]
    carry_in: bool,
}

/// One computed result, as printed or serialized.
#[derive(Debug, Serialize)]
struct Record {
    op: AluOp,
    a: u32,
    b: u32,
    carry_in: bool,
    result: u32,
    flags: Flags,
}

impl Record {
    fn run(op: AluOp, a: u32, b: u32, carry_in: bool) -> Self {
        let out = Alu::execute(op, a, b, carry_in);
        Self {
            op,
            a,
            b,
            carry_in,
            result: out.result,
            flags: out.flags,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Compute {
            op,
            a,
            b,
            carry_in,
            json,
        }) => cmd_compute(op, a, b, carry_in, json),
        Some(Commands::Table { a, b, carry_in, json }) => cmd_table(a, b, carry_in, json),
        Some(Commands::Vectors { file, json }) => cmd_vectors(&file, json),
        None => {
            eprintln!("alusim: drive the 32-bit datapath ALU model");
            eprintln!();
            eprintln!("  alusim compute add 15 5          One operation");
            eprintln!("  alusim compute sub 0xF 5 --json  JSON output");
            eprintln!("  alusim table 0xFFFFFFFF 1        Every operation on one pair");
            eprintln!("  alusim vectors batch.json        Run a vector file");
            eprintln!();
            eprintln!("  alusim --help  for full options");
            process::exit(1);
        }
    }
}

/// Parses an operation mnemonic for clap.
fn parse_op(s: &str) -> Result<AluOp, OpDecodeError> {
    s.parse()
}

/// Parses a 32-bit operand, accepting decimal or `0x` hexadecimal.
/// Underscore separators are allowed in either form.
fn parse_operand(s: &str) -> Result<u32, String> {
    let digits = s.replace('_', "");
    let parsed = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        digits.parse()
    };
    parsed.map_err(|e| format!("invalid 32-bit operand `{s}`: {e}"))
}

/// Computes one operation and prints the result bundle.
fn cmd_compute(op: AluOp, a: u32, b: u32, carry_in: bool, json: bool) {
    let record = Record::run(op, a, b, carry_in);
    if json {
        print_json(&record);
    } else {
        println!("{op}({a:#010x}, {b:#010x}) carry_in={carry_in}");
        println!("  result   = {:#010x}  ({})", record.result, record.result);
        println!("  carry    = {}", record.flags.carry);
        println!("  overflow = {}", record.flags.overflow);
        println!("  zero     = {}", record.flags.zero);
    }
}

/// Sweeps the whole operation table over one operand pair.
fn cmd_table(a: u32, b: u32, carry_in: bool, json: bool) {
    let records: Vec<Record> = AluOp::ALL
        .into_iter()
        .map(|op| Record::run(op, a, b, carry_in))
        .collect();

    if json {
        print_json(&records);
    } else {
        println!("a={a:#010x} b={b:#010x} carry_in={carry_in}");
        println!("{:<9} {:<5} {:<11} {:<6} {:<9} {}", "operation", "code", "result", "carry", "overflow", "zero");
        for r in &records {
            println!(
                "{:<9} {:#04x}  {:#010x}  {:<6} {:<9} {}",
                r.op,
                r.op.code(),
                r.result,
                r.flags.carry,
                r.flags.overflow,
                r.flags.zero
            );
        }
    }
}

/// Runs every vector in a file. Exits with code 1 if the file cannot be
/// read or parsed.
fn cmd_vectors(path: &str, json: bool) {
    let vectors = load_vectors(path).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });

    let records: Vec<Record> = vectors
        .iter()
        .map(|v| Record::run(v.op, v.a, v.b, v.carry_in))
        .collect();

    if json {
        print_json(&records);
    } else {
        for r in &records {
            println!(
                "{}({:#010x}, {:#010x}) carry_in={} -> result={:#010x} carry={} overflow={} zero={}",
                r.op,
                r.a,
                r.b,
                r.carry_in,
                r.result,
                r.flags.carry,
                r.flags.overflow,
                r.flags.zero
            );
        }
    }
}

/// Reads and parses a vector file.
fn load_vectors(path: &str) -> Result<Vec<Vector>, String> {
    let text =
        fs::read_to_string(path).map_err(|e| format!("cannot read vector file {path}: {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("malformed vector file {path}: {e}"))
}

/// Pretty-prints any serializable payload to stdout.
fn print_json<T: Serialize>(payload: &T) {
    let text = serde_json::to_string_pretty(payload).unwrap_or_else(|e| {
        eprintln!("error: cannot encode output as JSON: {e}");
        process::exit(1);
    });
    println!("{text}");
}
