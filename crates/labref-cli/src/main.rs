mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use commands::InputArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "labref",
    version,
    about = "Reconcile a lab test price list against a reference-range table"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Attach every reference-range row to each priced test and save JSON reports
    Expand {
        #[command(flatten)]
        input: InputArgs,

        /// Directory for the JSON reports (created if missing)
        #[arg(long, value_name = "DIR", default_value = "output")]
        out_dir: PathBuf,
    },
    /// Compare test names between the two tables and save CSV reports
    Diff {
        #[command(flatten)]
        input: InputArgs,

        /// Directory for the CSV reports
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Case-sensitive comparison only: skip case-mismatch detection
        #[arg(long)]
        exact: bool,
    },
    /// Manage and inspect column layouts
    Layout {
        #[command(subcommand)]
        action: LayoutAction,
    },
}

#[derive(Subcommand)]
enum LayoutAction {
    /// List predefined layouts
    List,
    /// Print a predefined layout as JSON
    Show {
        /// Preset name (e.g., "tiamed")
        preset: String,
    },
    /// Print the JSON layout schema with field descriptions and example
    Schema,
    /// Validate a custom layout file
    Validate {
        /// Path to JSON layout file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Expand { input, out_dir } => commands::expand::run(&input, &out_dir),
        Commands::Diff {
            input,
            out_dir,
            exact,
        } => commands::diff::run(&input, &out_dir, exact),
        Commands::Layout { action } => match action {
            LayoutAction::List => commands::layout::list(),
            LayoutAction::Show { preset } => commands::layout::show(&preset),
            LayoutAction::Schema => commands::layout::schema(),
            LayoutAction::Validate { file } => commands::layout::validate(&file),
        },
    };

    // Handled errors are reported, not signalled through the exit status.
    if let Err(e) = result {
        eprintln!("Error: {e}");
        if e.is_table_load() {
            output::table::print_suggestions();
        }
    }
}
