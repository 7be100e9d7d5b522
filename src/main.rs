use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;
use wktparse::ParseOptions;

mod cli_commands;

use cli_commands::BatchSource;

#[derive(Parser)]
#[command(name = "wktparse", version)]
#[command(about = "Parse WKT-like geometry text into geometry values")]
struct Cli {
    /// Increase logging verbosity (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Reject polygon rings whose first and last coordinates differ
    #[arg(long, global = true)]
    closed_rings: bool,

    /// Allow coordinates of different dimensions within one geometry
    #[arg(long, global = true)]
    no_dimension_check: bool,

    /// Maximum nesting of geometry collections
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single geometry and print details about it
    Parse {
        /// Geometry text, e.g. "POINT (10.2 5.1)"
        geometry: String,
    },
    /// Parse every geometry in a file
    Batch {
        file: PathBuf,

        /// Zero-based column holding the geometry in delimited records
        #[arg(long)]
        column: Option<usize>,

        /// Field delimiter used with --column
        #[arg(long, default_value_t = ',')]
        delimiter: char,

        /// Ignore the first line of the file
        #[arg(long)]
        skip_header: bool,

        /// Stop at the first geometry that fails to parse
        #[arg(long)]
        fail_fast: bool,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let mut options = ParseOptions::default()
        .with_closed_rings(cli.closed_rings)
        .with_dimension_check(!cli.no_dimension_check);
    if let Some(depth) = cli.max_depth {
        options = options.with_max_depth(depth);
    }

    match cli.command {
        Commands::Parse { geometry } => cli_commands::parse_show_detail(&geometry, &options),
        Commands::Batch {
            file,
            column,
            delimiter,
            skip_header,
            fail_fast,
        } => {
            if !delimiter.is_ascii() {
                return Err(format!("Delimiter must be an ASCII character: '{delimiter}'"));
            }
            let source = BatchSource {
                column,
                delimiter: delimiter as u8,
                skip_header,
            };
            cli_commands::parse_batch(&file, &source, &options, fail_fast).map(|_| ())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
