//! Command-line interface for tabparse-calc.
//!
//! Reads calculator statements from a file or standard input and prints one
//! line per statement, either its value or the error that made it invalid.
//! Exits with an error when the input cannot be parsed at all.
//!
//! Set `RUST_LOG=debug` to see recovery events, or pass `--trace` together
//! with `RUST_LOG=trace` to log every parser step.

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tabparse::{DEFAULT_MAX_RECOVERIES, ParserConfig, StepObserver};
use tabparse_calc::parser::CalcAttrib;
use tabparse_calc::parser_data::{ProdID, StateID};
use tabparse_calc::{CalcParser, CalcToken};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluates statements
    Eval {
        /// Input file with statements; reads standard input when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Maximum number of error recoveries per parse
        #[arg(long, default_value_t = DEFAULT_MAX_RECOVERIES)]
        max_recoveries: usize,
        /// Do not limit error recoveries
        #[arg(long, conflicts_with = "max_recoveries")]
        unbounded: bool,
        /// Log every parser step at trace level
        #[arg(long)]
        trace: bool,
    },
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match path {
        Some(path) => {
            std::fs::File::open(path)
                .with_context(|| format!("can't open {:?}", path))?
                .read_to_end(&mut buf)?;
        }
        None => {
            io::stdin().read_to_end(&mut buf)?;
        }
    }
    Ok(buf)
}

fn eval<O>(parser: &mut CalcParser<O>, input: Vec<u8>) -> Result<()>
where
    O: StepObserver<StateID, ProdID, CalcToken, CalcAttrib>,
{
    let stats = parser
        .parse_bytes(input.into_iter())
        .context("parsing failed")?;
    for stat in &stats {
        println!("{}", stat);
    }
    log::info!("Stats: {:?}", parser.stats());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Eval {
            input,
            max_recoveries,
            unbounded,
            trace,
        } => {
            let config = ParserConfig::default().max_recoveries(if unbounded {
                None
            } else {
                Some(max_recoveries)
            });
            let input = read_input(input.as_deref())?;
            let mut parser = CalcParser::with_config(config);
            if trace {
                eval(&mut parser.with_trace(), input)
            } else {
                eval(&mut parser, input)
            }
        }
    }
}
