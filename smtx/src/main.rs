use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use smtx::{
    prompt, run_operation, ArithmeticPolicy, MatrixFile, MatrixSummary, Operation, SessionConfig,
    DEFAULT_OUTPUT,
};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(
    about = "smtx - add, subtract and multiply sparse integer matrices stored as text files"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Where the result matrix is written
    #[arg(short, long, global = true, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// How integer overflow is handled
    #[arg(long, global = true, value_enum, default_value_t = Overflow::Checked)]
    overflow: Overflow,
}

#[derive(Subcommand)]
enum Commands {
    /// Element-wise sum of two matrices
    Add {
        left: PathBuf,
        right: PathBuf,
    },
    /// Element-wise difference of two matrices
    Sub {
        left: PathBuf,
        right: PathBuf,
    },
    /// Matrix product of two matrices
    Mul {
        left: PathBuf,
        right: PathBuf,
    },
    /// Show dimensions and fill of a matrix file
    Info {
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Overflow {
    Checked,
    Wrapping,
    Saturating,
}

impl From<Overflow> for ArithmeticPolicy {
    fn from(value: Overflow) -> Self {
        match value {
            Overflow::Checked => ArithmeticPolicy::Checked,
            Overflow::Wrapping => ArithmeticPolicy::Wrapping,
            Overflow::Saturating => ArithmeticPolicy::Saturating,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli, io::stdin().lock(), io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Execute one CLI invocation; the prompt reads `input` and writes `output`
fn run<R: BufRead, W: Write>(
    cli: Cli,
    input: R,
    output: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = SessionConfig::default()
        .with_output(cli.output)
        .with_policy(cli.overflow.into());
    debug!("session config: {config:?}");

    match cli.command {
        None => {
            let answers = prompt(input, output)?;
            info!("selected {}", answers.operation);
            handle_operation(&config, answers.operation, answers.left.into(), answers.right.into())
        }
        Some(Commands::Add { left, right }) => {
            handle_operation(&config, Operation::Add, left, right)
        }
        Some(Commands::Sub { left, right }) => {
            handle_operation(&config, Operation::Subtract, left, right)
        }
        Some(Commands::Mul { left, right }) => {
            handle_operation(&config, Operation::Multiply, left, right)
        }
        Some(Commands::Info { file, json }) => handle_info(file, json),
    }
}

fn handle_operation(
    config: &SessionConfig,
    operation: Operation,
    left: PathBuf,
    right: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let saved = run_operation(config, operation, &left, &right)?;
    println!("Result saved to {}", saved.display());
    Ok(())
}

fn handle_info(file: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let matrix = MatrixFile::load(&file)?;
    let summary = MatrixSummary::of(&matrix);

    if json {
        print_json(&summary)?;
    } else {
        println!("{}", file.display());
        println!("{summary}");
    }
    Ok(())
}

#[cfg(feature = "serde")]
fn print_json(summary: &MatrixSummary) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", summary.to_json()?);
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_json(_summary: &MatrixSummary) -> Result<(), Box<dyn std::error::Error>> {
    Err("JSON output requires the 'serde' feature".into())
}
